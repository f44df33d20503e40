//! Hand-drawn line icons drifting at fixed spots behind the content.
//!
//! Motion is pure CSS (`@keyframes drift` / `float-gentle`); each icon only
//! picks its loop, anchor and start delay.

use leptos::prelude::*;

/// Which looping keyframe animation an icon runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Float {
	Drift,
	Gentle,
}

impl Float {
	pub fn class(self) -> &'static str {
		match self {
			Float::Drift => "floating-icon floating-icon--drift",
			Float::Gentle => "floating-icon floating-icon--gentle",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
	PaperPlane,
	CodeBlock,
	Lightbulb,
	Gear,
	Database,
}

/// One placed icon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingIcon {
	pub glyph: Glyph,
	pub float: Float,
	/// CSS offsets from the viewport edges.
	pub anchor: &'static str,
	/// Animation start delay in seconds.
	pub delay: f64,
}

impl FloatingIcon {
	pub fn style(&self) -> String {
		format!("{} animation-delay: {}s;", self.anchor, self.delay)
	}
}

pub const ICONS: [FloatingIcon; 5] = [
	FloatingIcon {
		glyph: Glyph::PaperPlane,
		float: Float::Drift,
		anchor: "top: 5rem; left: 4rem;",
		delay: 0.0,
	},
	FloatingIcon {
		glyph: Glyph::CodeBlock,
		float: Float::Drift,
		anchor: "top: 8rem; right: 5rem;",
		delay: 1.0,
	},
	FloatingIcon {
		glyph: Glyph::Lightbulb,
		float: Float::Gentle,
		anchor: "bottom: 8rem; left: 5rem;",
		delay: 3.0,
	},
	FloatingIcon {
		glyph: Glyph::Gear,
		float: Float::Drift,
		anchor: "bottom: 10rem; right: 25%;",
		delay: 4.0,
	},
	FloatingIcon {
		glyph: Glyph::Database,
		float: Float::Gentle,
		anchor: "top: 66.667%; right: 4rem;",
		delay: 1.5,
	},
];

fn glyph_view(glyph: Glyph) -> AnyView {
	match glyph {
		Glyph::PaperPlane => view! {
			<svg width="60" height="40" viewBox="0 0 60 40">
				<path
					d="M5 20 L50 5 L35 20 L50 35 L5 20 Z M35 20 L25 30"
					stroke="currentColor"
					stroke-width="1.5"
					fill="none"
					stroke-linecap="round"
					stroke-linejoin="round"
				/>
			</svg>
		}
		.into_any(),
		Glyph::CodeBlock => view! {
			<svg width="60" height="45" viewBox="0 0 60 45">
				<rect x="5" y="5" width="50" height="35" rx="4" stroke="currentColor" stroke-width="1.5" fill="none" />
				<circle cx="12" cy="15" r="2" fill="currentColor" />
				<circle cx="20" cy="15" r="2" fill="currentColor" />
				<circle cx="28" cy="15" r="2" fill="currentColor" />
				<path
					d="M12 25 L18 25 M12 30 L25 30 M12 35 L20 35"
					stroke="currentColor"
					stroke-width="1.5"
					stroke-linecap="round"
				/>
			</svg>
		}
		.into_any(),
		Glyph::Lightbulb => view! {
			<svg width="40" height="55" viewBox="0 0 40 55">
				<path
					d="M20 5 C28 5 35 12 35 20 C35 25 32 29 28 32 L28 40 L12 40 L12 32 C8 29 5 25 5 20 C5 12 12 5 20 5 Z"
					stroke="currentColor"
					stroke-width="1.5"
					fill="none"
				/>
				<path d="M15 45 L25 45 M17 50 L23 50" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" />
				<path
					d="M20 2 L20 8 M32 8 L28 12 M38 20 L32 20 M32 32 L28 28 M8 8 L12 12 M2 20 L8 20 M8 32 L12 28"
					stroke="currentColor"
					stroke-width="1.5"
					stroke-linecap="round"
				/>
			</svg>
		}
		.into_any(),
		Glyph::Gear => view! {
			<svg width="50" height="50" viewBox="0 0 50 50">
				<path
					d="M25 15 C30 15 35 20 35 25 C35 30 30 35 25 35 C20 35 15 30 15 25 C15 20 20 15 25 15 Z"
					stroke="currentColor"
					stroke-width="1.5"
					fill="none"
				/>
				<path
					d="M25 5 L27 12 L23 12 Z M45 25 L38 27 L38 23 Z M25 45 L23 38 L27 38 Z M5 25 L12 23 L12 27 Z"
					stroke="currentColor"
					stroke-width="1.5"
					fill="none"
				/>
				<path
					d="M37 13 L32 16 L30 12 Z M37 37 L32 34 L30 38 Z M13 37 L18 34 L20 38 Z M13 13 L18 16 L20 12 Z"
					stroke="currentColor"
					stroke-width="1.5"
					fill="none"
				/>
			</svg>
		}
		.into_any(),
		Glyph::Database => view! {
			<svg width="45" height="60" viewBox="0 0 45 60">
				<ellipse cx="22.5" cy="12" rx="17" ry="7" stroke="currentColor" stroke-width="1.5" fill="none" />
				<path
					d="M5.5 12 L5.5 48 C5.5 52 12 55 22.5 55 C33 55 39.5 52 39.5 48 L39.5 12"
					stroke="currentColor"
					stroke-width="1.5"
					fill="none"
				/>
				<ellipse cx="22.5" cy="25" rx="17" ry="7" stroke="currentColor" stroke-width="1.5" fill="none" />
				<ellipse cx="22.5" cy="38" rx="17" ry="7" stroke="currentColor" stroke-width="1.5" fill="none" />
			</svg>
		}
		.into_any(),
	}
}

/// Fixed, non-interactive layer holding every [`ICONS`] entry.
#[component]
pub fn FloatingIcons() -> impl IntoView {
	view! {
		<div class="floating-icons" aria-hidden="true">
			{ICONS
				.iter()
				.map(|icon| {
					view! {
						<div class=icon.float.class() style=icon.style()>
							{glyph_view(icon.glyph)}
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_icon_style_carries_anchor_and_delay() {
		assert_eq!(ICONS[0].style(), "top: 5rem; left: 4rem; animation-delay: 0s;");
		assert_eq!(ICONS[4].style(), "top: 66.667%; right: 4rem; animation-delay: 1.5s;");
	}

	#[test]
	fn test_every_glyph_placed_once() {
		let glyphs = [
			Glyph::PaperPlane,
			Glyph::CodeBlock,
			Glyph::Lightbulb,
			Glyph::Gear,
			Glyph::Database,
		];
		for g in glyphs {
			assert_eq!(ICONS.iter().filter(|i| i.glyph == g).count(), 1, "{g:?}");
		}
	}

	#[test]
	fn test_loops_alternate_between_drift_and_gentle() {
		let drift = ICONS.iter().filter(|i| i.float == Float::Drift).count();
		assert_eq!(drift, 3);
		assert_ne!(Float::Drift.class(), Float::Gentle.class());
	}
}
