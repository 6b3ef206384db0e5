//! Unipartite layout session: the `force_graph` simulation plus freeze, restart, and drag pinning.
//!
//! The physics is entirely the engine's. This module owns the bookkeeping around it: an energy
//! level (`alpha`) that cools the layout down, a centering step, and the pin rules for dragged
//! nodes.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::{debug, info};

use crate::config::{DemoConfig, SimulationConfig};
use crate::graph::{Graph, Point};

/// Per-node display metadata attached to each node in the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub label: String,
}

/// Lifecycle of the simulated layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutState {
	/// Advancing every tick.
	Running,
	/// Halted; positions only change by dragging.
	Frozen,
	/// Energy was reset to maximum; becomes `Running` on the next tick.
	Restarting,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node_idx: Option<DefaultNodeIdx>,
	/// Pointer-to-node offset captured when the drag started.
	pub offset_x: f64,
	pub offset_y: f64,
}

/// Simulated layout of a plain (untyped) graph.
///
/// Created once when the demo mounts, then advanced by the animation loop and mutated by user
/// commands. The scene builder reads node positions directly after each tick.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub drag: DragState,
	pub state: LayoutState,
	/// Current energy level in `0.0..=1.0`.
	pub alpha: f64,
	pub width: f64,
	pub height: f64,
	config: SimulationConfig,
	hit_radius: f64,
}

impl ForceGraphState {
	pub fn new(data: &Graph, config: &DemoConfig) -> Self {
		let sim = &config.simulation;
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: sim.charge,
			force_spring: sim.spring,
			force_max: sim.force_max,
			node_speed: sim.node_speed,
			damping_factor: sim.damping,
		});
		let mut ids = HashMap::with_capacity(data.nodes().len());
		let (cx, cy) = (config.width / 2.0, config.height / 2.0);
		let count = data.nodes().len().max(1) as f64;

		for (i, node) in data.nodes().iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / count;
			let start = node.fixed.unwrap_or(Point::new(
				cx + sim.initial_radius * angle.cos(),
				cy + sim.initial_radius * angle.sin(),
			));

			let idx = graph.add_node(NodeData {
				x: start.x as f32,
				y: start.y as f32,
				mass: sim.mass,
				is_anchor: node.fixed.is_some(),
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.display_label().to_string(),
				},
			});
			ids.insert(node.id.clone(), idx);
		}

		for edge in data.edges() {
			if let (Some(&src), Some(&tgt)) = (ids.get(&edge.source), ids.get(&edge.target)) {
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		Self {
			graph,
			drag: DragState::default(),
			state: LayoutState::Running,
			alpha: 1.0,
			width: config.width,
			height: config.height,
			config: sim.clone(),
			hit_radius: config.node_radius + config.hit_slop,
		}
	}

	pub fn is_frozen(&self) -> bool {
		self.state == LayoutState::Frozen
	}

	/// Whether the next tick would move anything.
	pub fn is_active(&self) -> bool {
		!self.is_frozen() && self.alpha >= self.config.alpha_min
	}

	/// Advance the simulation by one frame.
	pub fn tick(&mut self, dt: f32) {
		match self.state {
			LayoutState::Frozen => return,
			LayoutState::Restarting => self.state = LayoutState::Running,
			LayoutState::Running => {}
		}
		if self.alpha < self.config.alpha_min {
			return;
		}

		self.graph.update(dt * self.alpha as f32);
		self.center();
		self.alpha -= self.alpha * self.config.alpha_decay;
	}

	/// Translate free nodes so their mean sits at the viewport center.
	fn center(&mut self) {
		let (mut sx, mut sy, mut n) = (0.0_f64, 0.0_f64, 0usize);
		self.graph.visit_nodes(|node| {
			if !node.data.is_anchor {
				sx += node.x() as f64;
				sy += node.y() as f64;
				n += 1;
			}
		});
		if n == 0 {
			return;
		}
		let dx = (self.width / 2.0 - sx / n as f64) as f32;
		let dy = (self.height / 2.0 - sy / n as f64) as f32;
		self.graph.visit_nodes_mut(|node| {
			if !node.data.is_anchor {
				node.data.x += dx;
				node.data.y += dy;
			}
		});
	}

	/// Flip between frozen and running. Returns `true` if the layout is now frozen.
	///
	/// Resuming re-energizes the layout to `alpha_resume` instead of restarting it, so nodes
	/// continue from where they stopped.
	pub fn toggle_freeze(&mut self) -> bool {
		if self.is_frozen() {
			self.state = LayoutState::Running;
			self.reheat();
		} else {
			self.state = LayoutState::Frozen;
		}
		debug!("graph-slides: unipartite layout {:?}", self.state);
		self.is_frozen()
	}

	/// Release every pin and run the layout again at full energy, unfreezing if needed.
	pub fn restart(&mut self) {
		self.graph.visit_nodes_mut(|node| {
			node.data.is_anchor = false;
		});
		self.alpha = 1.0;
		self.state = LayoutState::Restarting;
		info!("graph-slides: unipartite layout restarted");
	}

	fn reheat(&mut self) {
		self.alpha = self.alpha.max(self.config.alpha_resume);
	}

	/// Topmost node under `p`, if any.
	pub fn node_at(&self, p: Point) -> Option<DefaultNodeIdx> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let at = Point::new(node.x() as f64, node.y() as f64);
			if at.distance(p) < self.hit_radius {
				found = Some(node.index());
			}
		});
		found
	}

	/// Start dragging the node under `p`. Returns `false` if there is none.
	pub fn begin_drag(&mut self, p: Point) -> bool {
		let Some(idx) = self.node_at(p) else {
			return false;
		};
		let mut origin = p;
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = true;
				origin = Point::new(node.x() as f64, node.y() as f64);
			}
		});
		self.drag = DragState {
			node_idx: Some(idx),
			offset_x: origin.x - p.x,
			offset_y: origin.y - p.y,
		};
		if !self.is_frozen() {
			self.reheat();
		}
		true
	}

	/// Move the dragged node so it follows the pointer.
	pub fn drag_to(&mut self, p: Point) {
		let Some(idx) = self.drag.node_idx else {
			return;
		};
		let (nx, ny) = ((p.x + self.drag.offset_x) as f32, (p.y + self.drag.offset_y) as f32);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = nx;
				node.data.y = ny;
				node.data.is_anchor = true;
			}
		});
	}

	/// Finish a drag. A node dropped while frozen stays pinned; otherwise it rejoins the layout.
	pub fn end_drag(&mut self) {
		let Some(idx) = self.drag.node_idx.take() else {
			return;
		};
		let keep_pinned = self.is_frozen();
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = keep_pinned;
			}
		});
	}

	pub fn position(&self, id: &str) -> Option<Point> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.data.user_data.id == id {
				found = Some(Point::new(node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	pub fn is_pinned(&self, id: &str) -> bool {
		let mut pinned = false;
		self.graph.visit_nodes(|node| {
			if node.data.user_data.id == id {
				pinned = node.data.is_anchor;
			}
		});
		pinned
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{GraphData, GraphEdge, GraphNode, samples};

	const DT: f32 = 0.016;

	fn state() -> ForceGraphState {
		let graph = Graph::new(samples::unipartite()).unwrap();
		ForceGraphState::new(&graph, &DemoConfig::default())
	}

	fn snapshot(s: &ForceGraphState) -> Vec<(f32, f32)> {
		let mut out = Vec::new();
		s.graph.visit_nodes(|node| out.push((node.x(), node.y())));
		out
	}

	#[test]
	fn starts_running_at_full_energy() {
		let s = state();
		assert_eq!(s.state, LayoutState::Running);
		assert_eq!(s.alpha, 1.0);
		assert!(s.is_active());
	}

	#[test]
	fn frozen_layout_does_not_move() {
		let mut s = state();
		s.tick(DT);
		assert!(s.toggle_freeze());
		let before = snapshot(&s);
		for _ in 0..10 {
			s.tick(DT);
		}
		assert_eq!(before, snapshot(&s));
	}

	#[test]
	fn double_toggle_resumes_running() {
		let mut s = state();
		for _ in 0..400 {
			s.tick(DT);
		}
		assert!(!s.is_active());
		s.toggle_freeze();
		assert!(!s.toggle_freeze());
		assert_eq!(s.state, LayoutState::Running);
		assert!((s.alpha - 0.3).abs() < 1e-9);
		assert!(s.is_active());
	}

	#[test]
	fn resume_keeps_higher_energy() {
		let mut s = state();
		s.toggle_freeze();
		s.toggle_freeze();
		assert_eq!(s.alpha, 1.0);
	}

	#[test]
	fn energy_decays_until_cooled() {
		let mut s = state();
		s.tick(DT);
		assert!(s.alpha < 1.0);
		for _ in 0..400 {
			s.tick(DT);
		}
		assert!(!s.is_active());
		let before = snapshot(&s);
		s.tick(DT);
		assert_eq!(before, snapshot(&s));
	}

	#[test]
	fn restart_unfreezes_and_clears_pins() {
		let mut s = state();
		let a = s.position("A").unwrap();
		s.toggle_freeze();
		assert!(s.begin_drag(a));
		s.drag_to(Point::new(10.0, 10.0));
		s.end_drag();
		assert!(s.is_pinned("A"));

		s.restart();
		assert_eq!(s.state, LayoutState::Restarting);
		assert_eq!(s.alpha, 1.0);
		assert!(!s.is_pinned("A"));
		s.tick(DT);
		assert_eq!(s.state, LayoutState::Running);
	}

	#[test]
	fn freeze_during_restart_wins() {
		let mut s = state();
		s.restart();
		assert!(s.toggle_freeze());
		s.tick(DT);
		assert_eq!(s.state, LayoutState::Frozen);
	}

	#[test]
	fn drag_pins_and_release_unpins_when_running() {
		let mut s = state();
		let a = s.position("A").unwrap();
		assert!(s.begin_drag(a));
		assert!(s.is_pinned("A"));
		s.drag_to(Point::new(50.0, 60.0));
		assert_eq!(s.position("A"), Some(Point::new(50.0, 60.0)));
		s.end_drag();
		assert!(!s.is_pinned("A"));
		assert!(s.drag.node_idx.is_none());
	}

	#[test]
	fn drag_while_frozen_moves_node_and_keeps_pin() {
		let mut s = state();
		s.toggle_freeze();
		let a = s.position("A").unwrap();
		s.begin_drag(a);
		s.drag_to(Point::new(120.0, 80.0));
		s.end_drag();
		assert!(s.is_pinned("A"));
		assert_eq!(s.position("A"), Some(Point::new(120.0, 80.0)));
	}

	#[test]
	fn pinned_node_survives_ticks() {
		let mut s = state();
		s.toggle_freeze();
		let a = s.position("A").unwrap();
		s.begin_drag(a);
		s.drag_to(Point::new(700.0, 40.0));
		s.end_drag();
		s.toggle_freeze();
		for _ in 0..20 {
			s.tick(DT);
		}
		assert_eq!(s.position("A"), Some(Point::new(700.0, 40.0)));
	}

	#[test]
	fn miss_does_not_start_drag() {
		let mut s = state();
		assert!(!s.begin_drag(Point::new(-500.0, -500.0)));
		s.drag_to(Point::new(1.0, 1.0));
		s.end_drag();
	}

	#[test]
	fn centering_keeps_free_nodes_on_viewport_center() {
		let mut s = state();
		for _ in 0..5 {
			s.tick(DT);
		}
		let (mut sx, mut sy) = (0.0, 0.0);
		for id in ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"] {
			let p = s.position(id).unwrap();
			sx += p.x;
			sy += p.y;
		}
		assert!((sx / 12.0 - 400.0).abs() < 0.1);
		assert!((sy / 12.0 - 180.0).abs() < 0.1);
	}

	#[test]
	fn fixed_nodes_start_pinned() {
		let mut data = GraphData {
			nodes: vec![GraphNode::new("a"), GraphNode::new("b")],
			edges: vec![GraphEdge::new("a", "b")],
		};
		data.nodes[0].fixed = Some(Point::new(30.0, 40.0));
		let graph = Graph::new(data).unwrap();
		let s = ForceGraphState::new(&graph, &DemoConfig::default());
		assert!(s.is_pinned("a"));
		assert!(!s.is_pinned("b"));
		assert_eq!(s.position("a"), Some(Point::new(30.0, 40.0)));
	}

	#[test]
	fn lookups_go_by_node_id() {
		let s = state();
		let mut ids = Vec::new();
		s.graph.visit_nodes(|node| ids.push(node.data.user_data.id.clone()));
		assert_eq!(ids.len(), 12);
		assert!(ids.iter().all(|id| s.position(id).is_some()));
		assert!(s.position("missing").is_none());
		assert!(!s.is_pinned("missing"));
	}
}
