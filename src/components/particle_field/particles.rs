//! Particle pool and the per-frame simulation step.
//!
//! The pool is allocated once and never resized. Particles that outlive their
//! lifespan are respawned in place, so indices stay stable for the renderer and
//! the connection pass. All randomness comes from the caller's RNG, which keeps
//! a seeded field fully deterministic.

use rand::Rng;

use super::config::FieldConfig;
use super::connections::{self, Connection};
use crate::motion::ScrollParams;

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Core radius in pixels.
	pub size: f64,
	/// Base opacity before the lifespan fade.
	pub opacity: f64,
	/// Colour hue in degrees; saturation and lightness come from the theme.
	pub hue: f64,
	/// Frames lived since the last (re)spawn.
	pub life: f64,
	pub max_life: f64,
}

impl Particle {
	/// Opacity after fading out over the lifespan.
	pub fn alpha(&self) -> f64 {
		if self.max_life <= 0.0 {
			return 0.0;
		}
		(self.opacity * (1.0 - self.life / self.max_life)).clamp(0.0, 1.0)
	}

	pub fn speed(&self) -> f64 {
		self.vx.hypot(self.vy)
	}
}

/// Inputs sampled by the host once per frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
	/// Last known pointer position in canvas pixels. `None` until the pointer
	/// has moved over the page.
	pub pointer: Option<(f64, f64)>,
	/// Wall-clock time in milliseconds. Drives the wave phase.
	pub time_ms: f64,
	pub params: ScrollParams,
}

/// Pointer repulsion in `0..=1` at `distance`, or `None` outside `radius`.
pub fn repulsion_force(distance: f64, radius: f64) -> Option<f64> {
	(radius > 0.0 && distance < radius).then(|| (radius - distance) / radius)
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
	lo + (hi - lo) * rng.r#gen::<f64>()
}

/// Fresh position and velocity. Size, colour and lifespan are kept.
fn scatter<R: Rng + ?Sized>(p: &mut Particle, width: f64, height: f64, speed: f64, rng: &mut R) {
	p.x = uniform(rng, 0.0, width);
	p.y = uniform(rng, 0.0, height);
	p.vx = uniform(rng, -speed, speed);
	p.vy = uniform(rng, -speed, speed);
}

/// Fixed-size particle pool plus the connections derived from it.
pub struct ParticleField {
	particles: Vec<Particle>,
	connections: Vec<Connection>,
	config: FieldConfig,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Spawn `config.pool_size` particles scattered across `width` x `height`.
	///
	/// Starting ages are randomized so particles do not fade in lockstep.
	pub fn new<R: Rng + ?Sized>(config: FieldConfig, width: f64, height: f64, rng: &mut R) -> Self {
		let (width, height) = (width.max(0.0), height.max(0.0));
		let mut particles = Vec::with_capacity(config.pool_size);

		for _ in 0..config.pool_size {
			let max_life = uniform(rng, config.max_life_min, config.max_life_max);
			let mut p = Particle {
				x: 0.0,
				y: 0.0,
				vx: 0.0,
				vy: 0.0,
				size: uniform(rng, config.size_min, config.size_max),
				opacity: uniform(rng, config.opacity_min, config.opacity_max),
				hue: uniform(rng, config.hue_min, config.hue_max),
				life: uniform(rng, 0.0, config.initial_life_max.min(max_life)),
				max_life,
			};
			scatter(&mut p, width, height, config.spawn_speed, rng);
			particles.push(p);
		}

		Self {
			particles,
			connections: Vec::new(),
			config,
			width,
			height,
		}
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Links computed by the last [`ParticleField::advance`].
	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Change the bounds, pulling any particle now outside back onto the edge.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width.max(0.0);
		self.height = height.max(0.0);
		for p in &mut self.particles {
			p.x = p.x.clamp(0.0, self.width);
			p.y = p.y.clamp(0.0, self.height);
		}
	}

	/// Advance every particle by one display frame, then rebuild connections.
	pub fn advance<R: Rng + ?Sized>(&mut self, input: &FrameInput, rng: &mut R) {
		let config = &self.config;
		let (width, height) = (self.width, self.height);
		let wave = input.params.wave_amplitude * config.wave_scale;
		let wave_phase = input.time_ms * config.wave_speed;

		for p in &mut self.particles {
			if let Some((mx, my)) = input.pointer {
				let (dx, dy) = (p.x - mx, p.y - my);
				if let Some(force) = repulsion_force(dx.hypot(dy), config.repulsion_radius) {
					// atan2(0, 0) == 0, so a pointer dead on the particle pushes along +x.
					let angle = dy.atan2(dx);
					p.vx += angle.cos() * force * config.repulsion_strength;
					p.vy += angle.sin() * force * config.repulsion_strength;
				}
			}

			p.y += (p.x * config.wave_frequency + wave_phase).sin() * wave;

			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 || p.x > width {
				p.vx *= -config.restitution;
				p.x = p.x.clamp(0.0, width);
			}
			if p.y < 0.0 || p.y > height {
				p.vy *= -config.restitution;
				p.y = p.y.clamp(0.0, height);
			}

			p.vx *= config.friction;
			p.vy *= config.friction;

			p.life += 1.0;
			if p.life > p.max_life {
				p.life = 0.0;
				scatter(p, width, height, config.spawn_speed, rng);
			}
		}

		connections::link_pairs(
			&self.particles,
			input.params.connection_distance,
			config.link_opacity,
			&mut self.connections,
		);
	}
}
