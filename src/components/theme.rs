//! Visual theming for the slides, graph demos, and network background.

use crate::graph::Partition;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Graph demo canvas background.
#[derive(Clone, Debug)]
pub struct CanvasStyle {
	pub color: Color,
}

/// Base edge style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	pub color: Color,
	pub width: f64,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Fill for nodes in the `U` partition.
	pub u_color: Color,
	/// Fill for nodes in the `V` partition.
	pub v_color: Color,
	/// Fill for untyped nodes.
	pub plain_color: Color,
	/// Whether nodes have inner gradients
	pub use_gradient: bool,
	/// Border/stroke width (0 = no border)
	pub border_width: f64,
	pub border_color: Color,
	pub label_color: Color,
	pub label_font: &'static str,
}

impl NodeStyle {
	pub fn fill(&self, kind: Option<Partition>) -> Color {
		match kind {
			Some(Partition::U) => self.u_color,
			Some(Partition::V) => self.v_color,
			None => self.plain_color,
		}
	}
}

/// Projection overlay style.
#[derive(Clone, Debug)]
pub struct ProjectionStyle {
	pub color: Color,
	/// Minimum distance of the curve's control point from its column.
	pub bulge: f64,
	/// Additional outward offset per unit of vertical distance between the endpoints.
	pub curvature: f64,
	/// Dash pattern (dash, gap); `None` draws solid curves.
	pub dash: Option<(f64, f64)>,
}

/// Network background configuration.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Number of particles
	pub count: usize,
	pub color: Color,
	/// Color of the links between nearby particles; alpha fades with distance.
	pub link_color: Color,
	pub link_width: f64,
	/// Particles closer than this are linked.
	pub link_distance: f64,
	pub size_min: f64,
	pub size_max: f64,
	/// Maximum speed along each axis, in pixels per frame.
	pub speed: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub canvas: CanvasStyle,
	pub edge: EdgeStyle,
	pub node: NodeStyle,
	pub projection: ProjectionStyle,
	pub particles: ParticleStyle,
}

impl Theme {
	/// Teal network look used by the presentation.
	pub fn default_theme() -> Self {
		Self {
			canvas: CanvasStyle {
				color: Color::rgba(255, 255, 255, 0.92),
			},
			edge: EdgeStyle {
				color: Color::rgba(90, 110, 120, 0.6),
				width: 1.5,
			},
			node: NodeStyle {
				u_color: Color::rgb(42, 157, 143),
				v_color: Color::rgb(233, 196, 106),
				plain_color: Color::rgb(94, 129, 172),
				use_gradient: true,
				border_width: 1.5,
				border_color: Color::rgba(255, 255, 255, 0.9),
				label_color: Color::rgb(38, 50, 56),
				label_font: "12px sans-serif",
			},
			projection: ProjectionStyle {
				color: Color::rgba(231, 111, 81, 0.85),
				bulge: 30.0,
				curvature: 0.35,
				dash: None,
			},
			particles: ParticleStyle {
				count: 150,
				color: Color::rgb(42, 157, 143),
				link_color: Color::rgb(111, 177, 160),
				link_width: 2.0,
				link_distance: 120.0,
				size_min: 3.0,
				size_max: 6.0,
				speed: 0.25,
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}
