//! Demo session: owns both graph layouts and routes user commands to them.

use log::{debug, info, warn};

use crate::components::bipartite::BipartiteState;
use crate::components::force_graph::ForceGraphState;
use crate::components::scene::{self, Scene};
use crate::components::theme::Theme;
use crate::config::{DemoConfig, PageData};
use crate::graph::{Graph, GraphData, GraphError, Partition, samples};

/// User actions available on the graph demo slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
	/// Unpin everything and rerun the unipartite layout at full energy.
	Restart,
	/// Freeze or resume the unipartite layout.
	ToggleFreeze,
	/// Overlay the one-mode projection of the left (`U`) column.
	ProjectLeft,
	/// Overlay the one-mode projection of the right (`V`) column.
	ProjectRight,
	/// Remove the projection overlay.
	ClearProjection,
}

/// Both demo graphs and their layout state.
pub struct DemoSession {
	pub unipartite: ForceGraphState,
	pub bipartite: BipartiteState,
	pub config: DemoConfig,
}

/// Validate page-supplied data with `build`, falling back to `sample` when it is absent or invalid.
fn graph_or_sample(
	name: &str,
	supplied: Option<GraphData>,
	sample: fn() -> GraphData,
	build: fn(GraphData) -> Result<Graph, GraphError>,
) -> Result<Graph, GraphError> {
	if let Some(data) = supplied {
		match build(data) {
			Ok(graph) => {
				info!(
					"graph-slides: using page {} graph ({} nodes, {} edges)",
					name,
					graph.nodes().len(),
					graph.edges().len()
				);
				return Ok(graph);
			}
			Err(e) => warn!("graph-slides: rejected page {} graph: {}", name, e),
		}
	}
	build(sample())
}

impl DemoSession {
	pub fn new(unipartite: &Graph, bipartite: Graph, config: DemoConfig) -> Self {
		Self {
			unipartite: ForceGraphState::new(unipartite, &config),
			bipartite: BipartiteState::new(bipartite, &config),
			config,
		}
	}

	/// Build a session from page data, substituting built-in samples for missing or invalid graphs.
	pub fn from_page(page: PageData) -> Result<Self, GraphError> {
		let unipartite = graph_or_sample(
			"unipartite",
			page.unipartite,
			samples::unipartite,
			Graph::new,
		)?;
		let bipartite = graph_or_sample(
			"bipartite",
			page.bipartite,
			samples::bipartite,
			Graph::bipartite,
		)?;
		Ok(Self::new(&unipartite, bipartite, page.config))
	}

	/// Apply a command. Returns whether the unipartite layout is frozen afterwards.
	pub fn dispatch(&mut self, command: Command) -> bool {
		debug!("graph-slides: {:?}", command);
		match command {
			Command::Restart => self.unipartite.restart(),
			Command::ToggleFreeze => {
				self.unipartite.toggle_freeze();
			}
			Command::ProjectLeft => {
				self.bipartite.project(Partition::U);
			}
			Command::ProjectRight => {
				self.bipartite.project(Partition::V);
			}
			Command::ClearProjection => {
				self.bipartite.clear_projection();
			}
		}
		self.unipartite.is_frozen()
	}

	/// Advance the simulated layout by one frame.
	pub fn tick(&mut self, dt: f32) {
		self.unipartite.tick(dt);
	}

	pub fn unipartite_scene(&self) -> Scene {
		scene::unipartite(&self.unipartite, self.config.node_radius)
	}

	pub fn bipartite_scene(&self, theme: &Theme) -> Scene {
		scene::bipartite(&self.bipartite, self.config.node_radius, &theme.projection)
	}
}
