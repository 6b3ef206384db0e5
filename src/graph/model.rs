//! Validated, immutable graphs.

use std::collections::HashMap;

use super::error::GraphError;
use super::types::{GraphData, GraphEdge, GraphNode, Partition};

/// A graph whose edges only reference nodes it contains and whose node ids are unique.
///
/// Built once at startup and never mutated; layouts and the projection engine work from here.
#[derive(Clone, Debug)]
pub struct Graph {
	nodes: Vec<GraphNode>,
	edges: Vec<GraphEdge>,
	index: HashMap<String, usize>,
}

impl Graph {
	/// Validate `data`, failing on the first duplicate id or dangling edge endpoint.
	pub fn new(data: GraphData) -> Result<Self, GraphError> {
		let mut index = HashMap::with_capacity(data.nodes.len());
		for (i, node) in data.nodes.iter().enumerate() {
			if index.insert(node.id.clone(), i).is_some() {
				return Err(GraphError::DuplicateNode {
					node: node.id.clone(),
				});
			}
		}

		for edge in &data.edges {
			for end in [&edge.source, &edge.target] {
				if !index.contains_key(end) {
					return Err(GraphError::DanglingEdgeReference { node: end.clone() });
				}
			}
		}

		Ok(Self {
			nodes: data.nodes,
			edges: data.edges,
			index,
		})
	}

	/// Like [`Graph::new`], but also rejects edges between two nodes of the same type.
	///
	/// Edges touching untyped nodes are left alone; the bipartite layout skips those nodes.
	pub fn bipartite(data: GraphData) -> Result<Self, GraphError> {
		let graph = Self::new(data)?;
		for edge in &graph.edges {
			let from = graph.kind_of(&edge.source);
			if from.is_some() && from == graph.kind_of(&edge.target) {
				return Err(GraphError::SamePartitionEdge {
					from: edge.source.clone(),
					to: edge.target.clone(),
				});
			}
		}
		Ok(graph)
	}

	fn kind_of(&self, id: &str) -> Option<Partition> {
		self.node(id).and_then(|n| n.kind)
	}

	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	pub fn edges(&self) -> &[GraphEdge] {
		&self.edges
	}

	/// Position of the node with `id` in [`Graph::nodes`].
	pub fn position_of(&self, id: &str) -> Option<usize> {
		self.index.get(id).copied()
	}

	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.position_of(id).map(|i| &self.nodes[i])
	}

	/// Nodes tagged with `kind`, in input order.
	pub fn partition(&self, kind: Partition) -> impl Iterator<Item = &GraphNode> {
		self.nodes.iter().filter(move |n| n.kind == Some(kind))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn data(nodes: &[&str], edges: &[(&str, &str)]) -> GraphData {
		GraphData {
			nodes: nodes.iter().map(|id| GraphNode::new(*id)).collect(),
			edges: edges.iter().map(|(s, t)| GraphEdge::new(*s, *t)).collect(),
		}
	}

	#[test]
	fn accepts_well_formed_graph() {
		let graph = Graph::new(data(&["a", "b", "c"], &[("a", "b"), ("b", "c")])).unwrap();
		assert_eq!(graph.nodes().len(), 3);
		assert_eq!(graph.edges().len(), 2);
		assert_eq!(graph.position_of("c"), Some(2));
		assert!(graph.node("missing").is_none());
	}

	#[test]
	fn rejects_dangling_target() {
		let err = Graph::new(data(&["a", "b"], &[("a", "b"), ("b", "z")])).unwrap_err();
		assert_eq!(
			err,
			GraphError::DanglingEdgeReference {
				node: "z".to_string()
			}
		);
	}

	#[test]
	fn rejects_dangling_source() {
		let err = Graph::new(data(&["a"], &[("q", "a")])).unwrap_err();
		assert!(matches!(err, GraphError::DanglingEdgeReference { node } if node == "q"));
	}

	#[test]
	fn rejects_duplicate_ids() {
		let err = Graph::new(data(&["a", "b", "a"], &[])).unwrap_err();
		assert_eq!(err.to_string(), "node id `a` appears more than once");
	}

	#[test]
	fn bipartite_rejects_same_side_edges() {
		let data = GraphData {
			nodes: vec![
				GraphNode::typed("u1", Partition::U),
				GraphNode::typed("u2", Partition::U),
				GraphNode::typed("u3", Partition::U),
				GraphNode::typed("v1", Partition::V),
			],
			edges: vec![GraphEdge::new("u1", "u2"), GraphEdge::new("u2", "u3")],
		};
		assert!(Graph::new(data.clone()).is_ok());
		assert_eq!(
			Graph::bipartite(data).unwrap_err(),
			GraphError::SamePartitionEdge {
				from: "u1".to_string(),
				to: "u2".to_string()
			}
		);
	}

	#[test]
	fn bipartite_accepts_cross_edges_and_untyped_endpoints() {
		let data = GraphData {
			nodes: vec![
				GraphNode::typed("u1", Partition::U),
				GraphNode::typed("v1", Partition::V),
				GraphNode::new("loose"),
			],
			edges: vec![GraphEdge::new("v1", "u1"), GraphEdge::new("u1", "loose")],
		};
		let graph = Graph::bipartite(data).unwrap();
		assert_eq!(graph.edges().len(), 2);
	}

	#[test]
	fn bipartite_still_checks_references() {
		let data = GraphData {
			nodes: vec![GraphNode::typed("u1", Partition::U)],
			edges: vec![GraphEdge::new("u1", "v9")],
		};
		assert!(matches!(
			Graph::bipartite(data),
			Err(GraphError::DanglingEdgeReference { .. })
		));
	}

	#[test]
	fn partition_keeps_input_order() {
		let graph = Graph::new(GraphData {
			nodes: vec![
				GraphNode::typed("v2", Partition::V),
				GraphNode::typed("u1", Partition::U),
				GraphNode::typed("v1", Partition::V),
			],
			edges: vec![],
		})
		.unwrap();
		let ids: Vec<_> = graph.partition(Partition::V).map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["v2", "v1"]);
	}
}
