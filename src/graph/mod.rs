//! Graph data model, validation, and one-mode projection.

mod error;
mod model;
mod projection;
pub mod samples;
mod types;

pub use error::GraphError;
pub use model::Graph;
pub use projection::{NeighborIndex, project};
pub use types::{GraphData, GraphEdge, GraphNode, Partition, Point, ProjectedEdge};
