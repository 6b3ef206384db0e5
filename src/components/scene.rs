//! Display lists for the graph demos.
//!
//! Scenes are built from layout state without touching the DOM, then painted by
//! [`render`](super::render). Each shape is tagged with the layer it belongs to so the
//! projection overlay can be told apart from the base graph.

use super::bipartite::BipartiteState;
use super::force_graph::ForceGraphState;
use super::theme::ProjectionStyle;
use crate::graph::{Partition, Point};

/// Which part of the drawing a shape belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
	Base,
	Projection,
}

/// A drawable primitive in logical viewport coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
	/// Straight base edge.
	Line { from: Point, to: Point },
	/// Quadratic projection curve.
	Curve {
		from: Point,
		control: Point,
		to: Point,
		width: f64,
	},
	/// Labeled circle.
	Node {
		at: Point,
		radius: f64,
		label: String,
		kind: Option<Partition>,
	},
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
	pub layer: Layer,
	pub shape: Shape,
}

/// Ordered list of shapes; later items draw on top.
#[derive(Clone, Debug, Default)]
pub struct Scene {
	pub width: f64,
	pub height: f64,
	pub items: Vec<Item>,
}

impl Scene {
	fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			items: Vec::new(),
		}
	}

	fn push(&mut self, layer: Layer, shape: Shape) {
		self.items.push(Item { layer, shape });
	}

	pub fn count(&self, layer: Layer) -> usize {
		self.items.iter().filter(|i| i.layer == layer).count()
	}
}

/// Stroke width for a projected edge. Grows sub-linearly so heavy edges do not swamp the view.
pub fn projection_width(weight: u32) -> f64 {
	1.0 + (1.0 + weight as f64).ln()
}

/// Curve between two nodes of the same column, bulging away from the other column.
pub fn projection_curve(
	from: Point,
	to: Point,
	side: Partition,
	weight: u32,
	style: &ProjectionStyle,
) -> Shape {
	let outward = style.bulge + style.curvature * (to.y - from.y).abs();
	let column_x = (from.x + to.x) / 2.0;
	let x = match side {
		Partition::U => column_x - outward,
		Partition::V => column_x + outward,
	};
	Shape::Curve {
		from,
		control: Point::new(x, (from.y + to.y) / 2.0),
		to,
		width: projection_width(weight),
	}
}

/// Scene for the simulated graph at its current positions.
pub fn unipartite(state: &ForceGraphState, node_radius: f64) -> Scene {
	let mut scene = Scene::new(state.width, state.height);
	state.graph.visit_edges(|n1, n2, _| {
		scene.push(
			Layer::Base,
			Shape::Line {
				from: Point::new(n1.x() as f64, n1.y() as f64),
				to: Point::new(n2.x() as f64, n2.y() as f64),
			},
		);
	});
	state.graph.visit_nodes(|node| {
		scene.push(
			Layer::Base,
			Shape::Node {
				at: Point::new(node.x() as f64, node.y() as f64),
				radius: node_radius,
				label: node.data.user_data.label.clone(),
				kind: None,
			},
		);
	});
	scene
}

/// Scene for the bipartite graph, with the projection overlay between edges and nodes.
pub fn bipartite(state: &BipartiteState, node_radius: f64, style: &ProjectionStyle) -> Scene {
	let mut scene = Scene::new(state.width, state.height);
	for (from, to) in state.edge_segments() {
		scene.push(Layer::Base, Shape::Line { from, to });
	}

	if let Some(overlay) = state.overlay() {
		for edge in &overlay.edges {
			let (Some(from), Some(to)) = (state.position(&edge.a), state.position(&edge.b)) else {
				continue;
			};
			scene.push(
				Layer::Projection,
				projection_curve(from, to, overlay.side, edge.weight, style),
			);
		}
	}

	for node in state.nodes() {
		scene.push(
			Layer::Base,
			Shape::Node {
				at: node.position,
				radius: node_radius,
				label: node.label.clone(),
				kind: Some(node.kind),
			},
		);
	}
	scene
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::theme::Theme;
	use crate::config::DemoConfig;
	use crate::graph::{Graph, samples};

	fn bipartite_state() -> BipartiteState {
		BipartiteState::new(
			Graph::new(samples::bipartite()).unwrap(),
			&DemoConfig::default(),
		)
	}

	#[test]
	fn width_grows_sub_linearly() {
		assert!((projection_width(1) - (1.0 + 2f64.ln())).abs() < 1e-12);
		let (w1, w2, w8) = (projection_width(1), projection_width(2), projection_width(8));
		assert!(w1 < w2 && w2 < w8);
		assert!(w8 < 8.0 * w1);
	}

	#[test]
	fn curves_bulge_outward() {
		let style = Theme::default().projection;
		let (a, b) = (Point::new(250.0, 90.0), Point::new(250.0, 270.0));
		let Shape::Curve { control, .. } = projection_curve(a, b, Partition::U, 1, &style) else {
			panic!("expected a curve");
		};
		assert!(control.x < 250.0);
		assert_eq!(control.y, 180.0);

		let (c, d) = (Point::new(550.0, 72.0), Point::new(550.0, 144.0));
		let Shape::Curve { control, .. } = projection_curve(c, d, Partition::V, 1, &style) else {
			panic!("expected a curve");
		};
		assert!(control.x > 550.0);
	}

	#[test]
	fn base_scene_has_no_projection_items() {
		let theme = Theme::default();
		let scene = bipartite(&bipartite_state(), 14.0, &theme.projection);
		assert_eq!(scene.count(Layer::Projection), 0);
		assert_eq!(scene.count(Layer::Base), 6 + 7);
	}

	#[test]
	fn projection_adds_one_curve_per_edge() {
		let theme = Theme::default();
		let mut state = bipartite_state();
		state.project(Partition::U);
		let scene = bipartite(&state, 14.0, &theme.projection);
		assert_eq!(scene.count(Layer::Projection), 2);

		state.project(Partition::V);
		let scene = bipartite(&state, 14.0, &theme.projection);
		assert_eq!(scene.count(Layer::Projection), 3);
	}

	#[test]
	fn clearing_removes_every_projection_item() {
		let theme = Theme::default();
		let mut state = bipartite_state();
		state.project(Partition::V);
		state.clear_projection();
		let scene = bipartite(&state, 14.0, &theme.projection);
		assert_eq!(scene.count(Layer::Projection), 0);
	}

	#[test]
	fn nodes_draw_above_overlay() {
		let theme = Theme::default();
		let mut state = bipartite_state();
		state.project(Partition::U);
		let scene = bipartite(&state, 14.0, &theme.projection);
		let last_curve = scene
			.items
			.iter()
			.rposition(|i| i.layer == Layer::Projection)
			.unwrap();
		let first_node = scene
			.items
			.iter()
			.position(|i| matches!(i.shape, Shape::Node { .. }))
			.unwrap();
		assert!(last_curve < first_node);
	}

	#[test]
	fn unipartite_scene_mirrors_graph() {
		let graph = Graph::new(samples::unipartite()).unwrap();
		let state = ForceGraphState::new(&graph, &DemoConfig::default());
		let scene = unipartite(&state, 14.0);
		let lines = scene
			.items
			.iter()
			.filter(|i| matches!(i.shape, Shape::Line { .. }))
			.count();
		assert_eq!(lines, graph.edges().len());
		assert_eq!(scene.items.len(), graph.edges().len() + graph.nodes().len());
		assert_eq!(scene.count(Layer::Projection), 0);
	}
}
