//! Fixed two-column layout of a bipartite graph, with one-mode projection overlays.

mod state;

pub use state::{BipartiteState, Overlay, PlacedNode};
