//! Static bipartite layout and the projection overlay drawn on top of it.

use std::collections::HashMap;

use log::{debug, warn};

use crate::config::DemoConfig;
use crate::graph::{Graph, Partition, Point, ProjectedEdge, project};

/// A node with its column position.
#[derive(Clone, Debug)]
pub struct PlacedNode {
	pub id: String,
	pub label: String,
	pub kind: Partition,
	pub position: Point,
}

/// The projection currently drawn over the base graph.
#[derive(Clone, Debug)]
pub struct Overlay {
	/// Partition the projection was computed for.
	pub side: Partition,
	pub edges: Vec<ProjectedEdge>,
}

/// Bipartite demo state: positions are computed once; only the overlay changes afterwards.
pub struct BipartiteState {
	graph: Graph,
	nodes: Vec<PlacedNode>,
	index: HashMap<String, usize>,
	overlay: Option<Overlay>,
	pub width: f64,
	pub height: f64,
}

impl BipartiteState {
	/// Lay out `graph`: `U` nodes in the left column, `V` nodes in the right, each column evenly
	/// spaced top to bottom in input order.
	pub fn new(graph: Graph, config: &DemoConfig) -> Self {
		let mut nodes = Vec::with_capacity(graph.nodes().len());
		for (kind, x) in [
			(Partition::U, config.left_column),
			(Partition::V, config.right_column),
		] {
			let column: Vec<_> = graph.partition(kind).collect();
			let step = config.height / (column.len() + 1) as f64;
			for (k, node) in column.into_iter().enumerate() {
				nodes.push(PlacedNode {
					id: node.id.clone(),
					label: node.display_label().to_string(),
					kind,
					position: Point::new(x, step * (k + 1) as f64),
				});
			}
		}

		for node in graph.nodes().iter().filter(|n| n.kind.is_none()) {
			warn!("graph-slides: bipartite node `{}` has no type and is not placed", node.id);
		}

		let index = nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (n.id.clone(), i))
			.collect();

		Self {
			graph,
			nodes,
			index,
			overlay: None,
			width: config.width,
			height: config.height,
		}
	}

	pub fn nodes(&self) -> &[PlacedNode] {
		&self.nodes
	}

	pub fn position(&self, id: &str) -> Option<Point> {
		self.index.get(id).map(|&i| self.nodes[i].position)
	}

	/// Base edges with both endpoints resolved; an unresolved endpoint drops the edge.
	pub fn edge_segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
		self.graph
			.edges()
			.iter()
			.filter_map(|e| Some((self.position(&e.source)?, self.position(&e.target)?)))
	}

	/// Compute the projection onto `side` and replace any current overlay with it.
	pub fn project(&mut self, side: Partition) -> &Overlay {
		let edges = project(self.graph.edges(), self.graph.nodes(), side);
		debug!(
			"graph-slides: projected onto {:?}: {} edges",
			side,
			edges.len()
		);
		self.overlay.insert(Overlay { side, edges })
	}

	/// Remove the overlay. Returns whether there was one.
	pub fn clear_projection(&mut self) -> bool {
		self.overlay.take().is_some()
	}

	pub fn overlay(&self) -> Option<&Overlay> {
		self.overlay.as_ref()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::samples;

	fn state() -> BipartiteState {
		BipartiteState::new(
			Graph::new(samples::bipartite()).unwrap(),
			&DemoConfig::default(),
		)
	}

	#[test]
	fn right_column_is_evenly_spaced() {
		let s = state();
		let h = 360.0;
		for (k, id) in ["v1", "v2", "v3", "v4"].into_iter().enumerate() {
			let p = s.position(id).unwrap();
			assert_eq!(p.x, 550.0);
			assert!((p.y - h * (k + 1) as f64 / 5.0).abs() < 1e-9);
		}
	}

	#[test]
	fn left_column_uses_its_own_count() {
		let s = state();
		let ys: Vec<f64> = ["u1", "u2", "u3"]
			.into_iter()
			.map(|id| s.position(id).unwrap().y)
			.collect();
		assert_eq!(ys, [90.0, 180.0, 270.0]);
		assert!(s.nodes().iter().filter(|n| n.kind == Partition::U).all(|n| n.position.x == 250.0));
	}

	#[test]
	fn every_edge_resolves() {
		let s = state();
		assert_eq!(s.edge_segments().count(), 6);
	}

	#[test]
	fn projection_replaces_previous_overlay() {
		let mut s = state();
		assert_eq!(s.project(Partition::U).edges.len(), 2);
		assert_eq!(s.project(Partition::V).edges.len(), 3);
		let overlay = s.overlay().unwrap();
		assert_eq!(overlay.side, Partition::V);
		assert_eq!(overlay.edges.len(), 3);
	}

	#[test]
	fn clear_is_a_noop_without_overlay() {
		let mut s = state();
		assert!(!s.clear_projection());
		s.project(Partition::U);
		assert!(s.clear_projection());
		assert!(s.overlay().is_none());
	}

	#[test]
	fn untyped_nodes_are_not_placed() {
		let mut data = samples::bipartite();
		data.nodes.push(crate::graph::GraphNode::new("loose"));
		let s = BipartiteState::new(Graph::new(data).unwrap(), &DemoConfig::default());
		assert!(s.position("loose").is_none());
		assert_eq!(s.nodes().len(), 7);
	}
}
