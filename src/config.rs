//! Demo configuration and page-supplied data.
//!
//! Every field has a default; a page may override any subset through the JSON embedded in
//! `<script id="graph-data">`.

use serde::Deserialize;

use crate::graph::GraphData;

/// Physics and energy settings for the unipartite force layout.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
	/// Repulsion between every pair of nodes.
	pub charge: f32,
	/// Spring constant along edges.
	pub spring: f32,
	/// Upper bound on the force applied to a node in one step.
	pub force_max: f32,
	pub node_speed: f32,
	pub damping: f32,
	pub mass: f32,
	/// Energy decay applied every tick.
	pub alpha_decay: f64,
	/// Below this energy the simulation stops moving nodes.
	pub alpha_min: f64,
	/// Energy used when resuming from a freeze or a drag.
	pub alpha_resume: f64,
	/// Radius of the circle nodes start on.
	pub initial_radius: f64,
}

impl Default for SimulationConfig {
	fn default() -> Self {
		Self {
			charge: 150.0,
			spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping: 0.9,
			mass: 10.0,
			alpha_decay: 1.0 - 0.001_f64.powf(1.0 / 300.0),
			alpha_min: 0.001,
			alpha_resume: 0.3,
			initial_radius: 100.0,
		}
	}
}

/// Geometry shared by both graph demos.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
	/// Logical viewport width; canvases are CSS-scaled from this size.
	pub width: f64,
	pub height: f64,
	/// x-coordinate of the `U` column in the bipartite demo.
	pub left_column: f64,
	/// x-coordinate of the `V` column in the bipartite demo.
	pub right_column: f64,
	pub node_radius: f64,
	/// Extra slack around a node for pointer hits.
	pub hit_slop: f64,
	pub simulation: SimulationConfig,
}

impl Default for DemoConfig {
	fn default() -> Self {
		Self {
			width: 800.0,
			height: 360.0,
			left_column: 250.0,
			right_column: 550.0,
			node_radius: 14.0,
			hit_slop: 4.0,
			simulation: SimulationConfig::default(),
		}
	}
}

/// Everything a page may embed. Missing parts fall back to built-in samples and defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageData {
	pub unipartite: Option<GraphData>,
	pub bipartite: Option<GraphData>,
	pub config: DemoConfig,
}

impl PageData {
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::Partition;

	#[test]
	fn empty_object_uses_defaults() {
		let data = PageData::from_json("{}").unwrap();
		assert!(data.unipartite.is_none());
		assert!(data.bipartite.is_none());
		assert_eq!(data.config.width, 800.0);
		assert_eq!(data.config.height, 360.0);
	}

	#[test]
	fn partial_config_overrides_only_given_fields() {
		let data = PageData::from_json(
			r#"{ "config": { "height": 500, "simulation": { "alpha_resume": 0.5 } } }"#,
		)
		.unwrap();
		assert_eq!(data.config.height, 500.0);
		assert_eq!(data.config.width, 800.0);
		assert_eq!(data.config.simulation.alpha_resume, 0.5);
		assert_eq!(data.config.simulation.alpha_min, 0.001);
	}

	#[test]
	fn parses_typed_graph() {
		let data = PageData::from_json(
			r#"{
				"bipartite": {
					"nodes": [
						{ "id": "u1", "type": "U" },
						{ "id": "v1", "type": "V", "label": "Venue" }
					],
					"links": [{ "source": "u1", "target": "v1" }]
				}
			}"#,
		)
		.unwrap();
		let graph = data.bipartite.unwrap();
		assert_eq!(graph.nodes[0].kind, Some(Partition::U));
		assert_eq!(graph.nodes[1].display_label(), "Venue");
		assert_eq!(graph.edges.len(), 1);
	}

	#[test]
	fn rejects_unknown_partition() {
		let result = PageData::from_json(r#"{ "bipartite": { "nodes": [{ "id": "x", "type": "W" }] } }"#);
		assert!(result.is_err());
	}

	#[test]
	fn default_decay_cools_in_about_300_ticks() {
		let config = SimulationConfig::default();
		let mut alpha = 1.0;
		for _ in 0..300 {
			alpha -= alpha * config.alpha_decay;
		}
		assert!((alpha - config.alpha_min).abs() < 1e-6);
	}
}
