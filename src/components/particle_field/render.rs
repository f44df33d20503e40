//! Canvas rendering for the particle field.
//!
//! Drawing order per frame:
//! 1. Clear and paint the vertical background wash
//! 2. Particles: low-alpha glow halo, then the solid core
//! 3. Connections as gradient lines blending both endpoint colours

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::particles::{Particle, ParticleField};
use super::theme::{FieldTheme, Hsl};

/// Renders one frame of the field to the canvas.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	let (width, height) = (field.width(), field.height());
	ctx.clear_rect(0.0, 0.0, width, height);

	draw_wash(ctx, theme, width, height);
	draw_particles(field, ctx, theme);
	draw_connections(field, ctx, theme);

	ctx.set_global_alpha(1.0);
}

fn draw_wash(ctx: &CanvasRenderingContext2d, theme: &FieldTheme, width: f64, height: f64) {
	let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
	for (offset, color) in &theme.wash {
		let _ = gradient.add_color_stop(*offset, &color.to_css());
	}

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, width, height);
}

fn particle_color(p: &Particle, theme: &FieldTheme) -> Hsl {
	Hsl::new(p.hue, theme.saturation, theme.core_lightness)
}

fn draw_particles(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	let config = field.config();

	for p in field.particles() {
		let alpha = p.alpha();
		if alpha <= 0.0 {
			continue;
		}
		let color = particle_color(p, theme);

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size * config.glow_scale, 0.0, TAU);
		ctx.set_fill_style_str(&color.with_lightness(theme.glow_lightness).to_css());
		ctx.set_global_alpha(alpha * config.glow_alpha);
		ctx.fill();

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, TAU);
		ctx.set_fill_style_str(&color.to_css());
		ctx.set_global_alpha(alpha);
		ctx.fill();
	}

	ctx.set_global_alpha(1.0);
}

fn draw_connections(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	let particles = field.particles();
	ctx.set_line_width(theme.link_width);

	for link in field.connections() {
		let (Some(p1), Some(p2)) = (particles.get(link.a), particles.get(link.b)) else {
			continue;
		};

		let gradient = ctx.create_linear_gradient(p1.x, p1.y, p2.x, p2.y);
		let _ = gradient.add_color_stop(
			0.0,
			&particle_color(p1, theme)
				.with_lightness(theme.link_lightness)
				.to_css(),
		);
		let _ = gradient.add_color_stop(
			1.0,
			&particle_color(p2, theme)
				.with_lightness(theme.link_lightness)
				.to_css(),
		);

		ctx.begin_path();
		ctx.move_to(p1.x, p1.y);
		ctx.line_to(p2.x, p2.y);
		#[allow(deprecated)]
		ctx.set_stroke_style(&gradient);
		ctx.set_global_alpha(link.opacity);
		ctx.stroke();
	}

	ctx.set_global_alpha(1.0);
}
