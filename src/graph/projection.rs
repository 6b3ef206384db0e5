//! One-mode projection of bipartite graphs.
//!
//! Two nodes of the same partition are joined in the projection when they share at least one
//! neighbor on the other side; the edge weight is the number of shared neighbors. Neighbors that
//! are untyped, on the same side, or missing from the node list never count.

use std::collections::{HashMap, HashSet};

use super::types::{GraphEdge, GraphNode, Partition, ProjectedEdge};

/// Undirected adjacency built from an edge list.
///
/// Rebuilt on every projection request; nothing is cached between calls.
#[derive(Debug, Default)]
pub struct NeighborIndex<'a> {
	neighbors: HashMap<&'a str, HashSet<&'a str>>,
}

impl<'a> NeighborIndex<'a> {
	/// Endpoints that never appear in a node list still get an entry; they simply never match.
	pub fn build(edges: &'a [GraphEdge]) -> Self {
		let mut neighbors: HashMap<&str, HashSet<&str>> = HashMap::new();
		for edge in edges {
			neighbors
				.entry(&edge.source)
				.or_default()
				.insert(&edge.target);
			neighbors
				.entry(&edge.target)
				.or_default()
				.insert(&edge.source);
		}
		Self { neighbors }
	}

	/// Number of nodes in `through` adjacent to both `a` and `b`.
	pub fn shared(&self, a: &str, b: &str, through: &HashSet<&str>) -> usize {
		match (self.neighbors.get(a), self.neighbors.get(b)) {
			(Some(na), Some(nb)) => {
				let (small, large) = if na.len() <= nb.len() { (na, nb) } else { (nb, na) };
				small
					.iter()
					.filter(|n| large.contains(*n) && through.contains(*n))
					.count()
			}
			_ => 0,
		}
	}
}

/// Project the bipartite graph given by `edges` onto the nodes of type `mode`.
///
/// Pairs are enumerated in node input order (`i < j`), so the output is deterministic for a
/// fixed input and never contains a pair twice or reversed.
pub fn project(edges: &[GraphEdge], nodes: &[GraphNode], mode: Partition) -> Vec<ProjectedEdge> {
	let index = NeighborIndex::build(edges);
	let pool: Vec<&str> = nodes
		.iter()
		.filter(|n| n.kind == Some(mode))
		.map(|n| n.id.as_str())
		.collect();
	let other: HashSet<&str> = nodes
		.iter()
		.filter(|n| n.kind == Some(mode.other()))
		.map(|n| n.id.as_str())
		.collect();

	let mut projected = Vec::new();
	for (i, a) in pool.iter().enumerate() {
		for b in &pool[i + 1..] {
			let shared = index.shared(a, b, &other);
			if shared > 0 {
				projected.push(ProjectedEdge {
					a: a.to_string(),
					b: b.to_string(),
					weight: shared as u32,
				});
			}
		}
	}
	projected
}
