//! Colours for the particle field.
//!
//! Particles carry an [`Hsl`] colour picked from a hue band at spawn time; the
//! glow halo and connection lines reuse the same hue at lower lightness.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Hue / saturation / lightness colour, hue in degrees, the rest in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
	pub hue: f64,
	pub saturation: f64,
	pub lightness: f64,
}

impl Hsl {
	pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
		Self {
			hue,
			saturation,
			lightness,
		}
	}

	pub fn with_lightness(self, lightness: f64) -> Self {
		Self { lightness, ..self }
	}

	pub fn to_css(self) -> String {
		format!(
			"hsl({:.1}, {}%, {}%)",
			self.hue, self.saturation, self.lightness
		)
	}
}

/// Visual style of the particle field.
#[derive(Clone, Debug)]
pub struct FieldTheme {
	/// Vertical background wash as `(offset, colour)` stops.
	pub wash: [(f32, Color); 3],
	/// Saturation of every particle colour.
	pub saturation: f64,
	/// Lightness of the particle core.
	pub core_lightness: f64,
	/// Lightness of the glow halo around each particle.
	pub glow_lightness: f64,
	/// Lightness of connection line endpoints.
	pub link_lightness: f64,
	/// Connection stroke width in pixels.
	pub link_width: f64,
	/// CSS `mix-blend-mode` of the canvas against the page.
	pub blend_mode: &'static str,
}

impl FieldTheme {
	/// Inline style for the canvas element.
	pub fn canvas_style(&self) -> String {
		format!("mix-blend-mode: {};", self.blend_mode)
	}
}

impl Default for FieldTheme {
	fn default() -> Self {
		Self {
			wash: [
				(0.0, Color::rgba(15, 23, 42, 0.02)),
				(0.5, Color::rgba(30, 41, 59, 0.05)),
				(1.0, Color::rgba(15, 23, 42, 0.02)),
			],
			saturation: 70.0,
			core_lightness: 60.0,
			glow_lightness: 20.0,
			link_lightness: 40.0,
			link_width: 1.0,
			blend_mode: "multiply",
		}
	}
}
