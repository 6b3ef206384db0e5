//! Graph construction errors.

use thiserror::Error;

/// Reasons a [`GraphData`](super::GraphData) is rejected when building a [`Graph`](super::Graph).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
	/// An edge endpoint names a node that is not in the node list.
	#[error("edge references unknown node `{node}`")]
	DanglingEdgeReference { node: String },

	/// Two nodes share the same id.
	#[error("node id `{node}` appears more than once")]
	DuplicateNode { node: String },

	/// A bipartite edge joins two nodes of the same type.
	#[error("edge `{from}`-`{to}` joins two nodes of the same type")]
	SamePartitionEdge { from: String, to: String },
}
