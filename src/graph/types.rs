//! Graph data structures shared by the layouts, the projection engine, and page data.

use serde::Deserialize;

/// Node type tag for bipartite graphs.
///
/// `U` nodes are laid out in the left column, `V` nodes in the right one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum Partition {
	U,
	V,
}

impl Partition {
	/// The partition on the other side of the graph.
	pub fn other(self) -> Self {
		match self {
			Partition::U => Partition::V,
			Partition::V => Partition::U,
		}
	}
}

/// A 2-D position in logical viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// A node in a demo graph.
#[derive(Clone, Debug, Deserialize)]
pub struct GraphNode {
	/// Unique identifier within the graph. Edges reference nodes by this id.
	pub id: String,
	/// Optional display label. Falls back to `id` when drawn.
	#[serde(default)]
	pub label: Option<String>,
	/// Partition for bipartite graphs; `None` for plain graphs.
	#[serde(default, rename = "type")]
	pub kind: Option<Partition>,
	/// Pinned position. Pinned nodes are exempt from simulation forces.
	#[serde(default)]
	pub fixed: Option<Point>,
}

impl GraphNode {
	/// Untyped node with no label or pin.
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: None,
			kind: None,
			fixed: None,
		}
	}

	/// Node tagged with a bipartite partition.
	pub fn typed(id: impl Into<String>, kind: Partition) -> Self {
		Self {
			kind: Some(kind),
			..Self::new(id)
		}
	}

	/// Text drawn next to the node.
	pub fn display_label(&self) -> &str {
		self.label.as_deref().unwrap_or(&self.id)
	}
}

/// An undirected edge between two nodes.
#[derive(Clone, Debug, Deserialize)]
pub struct GraphEdge {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
}

impl GraphEdge {
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
		}
	}
}

/// Complete graph data: nodes and edges, as supplied by the page or the built-in samples.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphData {
	#[serde(default)]
	pub nodes: Vec<GraphNode>,
	#[serde(default, alias = "links")]
	pub edges: Vec<GraphEdge>,
}

/// An edge of a one-mode projection.
///
/// `a` and `b` share `weight` neighbors in the source bipartite graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectedEdge {
	pub a: String,
	pub b: String,
	pub weight: u32,
}

impl ProjectedEdge {
	/// Endpoints ordered lexicographically, for comparing edges as unordered pairs.
	pub fn key(&self) -> (&str, &str) {
		if self.a <= self.b {
			(&self.a, &self.b)
		} else {
			(&self.b, &self.a)
		}
	}
}
