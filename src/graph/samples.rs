//! Built-in demo graphs, used when the page supplies none.

use super::types::{GraphData, GraphEdge, GraphNode, Partition};

fn edges(pairs: &[(&str, &str)]) -> Vec<GraphEdge> {
	pairs.iter().map(|(s, t)| GraphEdge::new(*s, *t)).collect()
}

/// A small social-style network with two loose clusters joined by a bridge.
pub fn unipartite() -> GraphData {
	let nodes = [
		"A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L",
	]
	.into_iter()
	.map(GraphNode::new)
	.collect();

	GraphData {
		nodes,
		edges: edges(&[
			("A", "B"),
			("A", "C"),
			("B", "C"),
			("B", "D"),
			("C", "D"),
			("D", "E"),
			("E", "F"),
			("F", "G"),
			("F", "H"),
			("G", "H"),
			("G", "I"),
			("H", "I"),
			("I", "J"),
			("J", "K"),
			("J", "L"),
			("K", "L"),
		]),
	}
}

/// Three `U` nodes and four `V` nodes; projecting onto `U` yields u1–u2 and u2–u3.
pub fn bipartite() -> GraphData {
	let mut nodes: Vec<GraphNode> = ["u1", "u2", "u3"]
		.into_iter()
		.map(|id| GraphNode::typed(id, Partition::U))
		.collect();
	nodes.extend(
		["v1", "v2", "v3", "v4"]
			.into_iter()
			.map(|id| GraphNode::typed(id, Partition::V)),
	);

	GraphData {
		nodes,
		edges: edges(&[
			("u1", "v1"),
			("u1", "v3"),
			("u2", "v2"),
			("u2", "v3"),
			("u3", "v2"),
			("u3", "v4"),
		]),
	}
}
