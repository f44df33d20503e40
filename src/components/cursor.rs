//! Pointer-following cursor overlay.
//!
//! Two fixed layers, a small dot and a larger ring, track the pointer and grow
//! while it is over anything interactive. Hover is detected by delegation on
//! `mouseover`, so elements mounted later are covered too.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Elements that make the cursor grow.
pub const INTERACTIVE: &str = "button, a, [data-magnetic]";

/// Geometry of one cursor layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorLayer {
	/// Diameter in pixels.
	pub size: f64,
	pub hover_scale: f64,
}

pub const DOT: CursorLayer = CursorLayer {
	size: 12.0,
	hover_scale: 1.5,
};

pub const RING: CursorLayer = CursorLayer {
	size: 32.0,
	hover_scale: 1.2,
};

impl CursorLayer {
	/// Inline style centring the layer on `pointer`.
	pub fn style(self, pointer: (f64, f64), hovering: bool) -> String {
		let half = self.size / 2.0;
		let scale = if hovering { self.hover_scale } else { 1.0 };
		format!(
			"width: {size}px; height: {size}px; transform: translate({x:.1}px, {y:.1}px) scale({scale});",
			size = self.size,
			x = pointer.0 - half,
			y = pointer.1 - half,
		)
	}
}

fn is_interactive(target: Option<web_sys::EventTarget>) -> bool {
	target
		.and_then(|t| t.dyn_into::<Element>().ok())
		.and_then(|el| el.closest(INTERACTIVE).ok().flatten())
		.is_some()
}

#[component]
pub fn CustomCursor() -> impl IntoView {
	let pointer = RwSignal::new((0.0, 0.0));
	let hovering = RwSignal::new(false);

	let on_move = window_event_listener(leptos::ev::mousemove, move |ev| {
		pointer.set((ev.client_x() as f64, ev.client_y() as f64));
	});
	let on_over = window_event_listener(leptos::ev::mouseover, move |ev| {
		let over = is_interactive(ev.target());
		if hovering.get_untracked() != over {
			hovering.set(over);
		}
	});
	on_cleanup(move || {
		on_move.remove();
		on_over.remove();
	});

	view! {
		<div class="cursor cursor--dot" aria-hidden="true" style=move || DOT.style(pointer.get(), hovering.get()) />
		<div class="cursor cursor--ring" aria-hidden="true" style=move || RING.style(pointer.get(), hovering.get()) />
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_layers_center_on_pointer() {
		assert_eq!(
			DOT.style((100.0, 50.0), false),
			"width: 12px; height: 12px; transform: translate(94.0px, 44.0px) scale(1);"
		);
		assert_eq!(
			RING.style((100.0, 50.0), false),
			"width: 32px; height: 32px; transform: translate(84.0px, 34.0px) scale(1);"
		);
	}

	#[test]
	fn test_hover_scales() {
		assert!(DOT.style((0.0, 0.0), true).ends_with("scale(1.5);"));
		assert!(RING.style((0.0, 0.0), true).ends_with("scale(1.2);"));
	}
}
