//! Force-directed layout of the unipartite demo graph.
//!
//! Wraps the `force_graph` physics simulation with:
//! - An energy level that cools the layout and can be reheated
//! - Freeze/resume and full restart
//! - Node dragging with pin-on-drop while frozen

mod state;

pub use state::{DragState, ForceGraphState, LayoutState, NodeInfo};
