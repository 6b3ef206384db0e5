//! Drifting particle network drawn behind the slides.

use crate::components::theme::ParticleStyle;

/// A single drifting dot.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
}

/// A line between two particles closer than the link distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub from: (f64, f64),
	pub to: (f64, f64),
	/// 1.0 when the particles touch, fading to 0.0 at the link distance.
	pub strength: f64,
}

/// Manages the background particles.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
	link_distance: f64,
}

impl ParticleField {
	pub fn new(style: &ParticleStyle, width: f64, height: f64) -> Self {
		let mut particles = Vec::with_capacity(style.count);

		for i in 0..style.count {
			// Use deterministic pseudo-random based on index for consistent look
			let seed = i as f64 + 1.0;
			particles.push(Particle {
				x: Self::pseudo_random(seed * 1.1) * width,
				y: Self::pseudo_random(seed * 2.3) * height,
				vx: (Self::pseudo_random(seed * 3.7) - 0.5) * 2.0 * style.speed,
				vy: (Self::pseudo_random(seed * 4.1) - 0.5) * 2.0 * style.speed,
				size: style.size_min
					+ Self::pseudo_random(seed * 5.3) * (style.size_max - style.size_min),
			});
		}

		Self {
			particles,
			width,
			height,
			link_distance: style.link_distance,
		}
	}

	/// Simple pseudo-random function (deterministic)
	fn pseudo_random(seed: f64) -> f64 {
		let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
		x - x.floor()
	}

	/// Move every particle one frame, reversing direction at the edges.
	pub fn update(&mut self) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 || p.x > self.width {
				p.vx = -p.vx;
				p.x = p.x.clamp(0.0, self.width);
			}
			if p.y < 0.0 || p.y > self.height {
				p.vy = -p.vy;
				p.y = p.y.clamp(0.0, self.height);
			}
		}
	}

	/// Track a new window size. Particles outside the new bounds bounce back in on later frames.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Every pair of particles closer than the link distance.
	pub fn links(&self) -> Vec<Link> {
		let mut links = Vec::new();
		for (i, a) in self.particles.iter().enumerate() {
			for b in &self.particles[i + 1..] {
				let (dx, dy) = (a.x - b.x, a.y - b.y);
				let dist = (dx * dx + dy * dy).sqrt();
				if dist < self.link_distance {
					links.push(Link {
						from: (a.x, a.y),
						to: (b.x, b.y),
						strength: 1.0 - dist / self.link_distance,
					});
				}
			}
		}
		links
	}
}
