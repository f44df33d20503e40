//! Link/button primitives.

use leptos::prelude::*;

/// Fraction of the pointer's distance from the button centre that a
/// [`MagneticButton`] travels.
pub const MAGNETIC_PULL: f64 = 0.15;

/// Visual style of a [`CleanButton`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
	#[default]
	Default,
	Outline,
	Ghost,
	Accent,
}

impl ButtonVariant {
	pub fn class(self) -> &'static str {
		match self {
			ButtonVariant::Default => "btn btn--default",
			ButtonVariant::Outline => "btn btn--outline",
			ButtonVariant::Ghost => "btn btn--ghost",
			ButtonVariant::Accent => "btn btn--accent",
		}
	}
}

/// Translation for a magnetic element whose bounding box is
/// `(left, top, width, height)` with the pointer at `pointer`.
pub fn magnetic_offset(pointer: (f64, f64), rect: (f64, f64, f64, f64)) -> (f64, f64) {
	let (left, top, width, height) = rect;
	let dx = pointer.0 - left - width / 2.0;
	let dy = pointer.1 - top - height / 2.0;
	(dx * MAGNETIC_PULL, dy * MAGNETIC_PULL)
}

/// Renders an `<a>` when `href` is set, a `<button>` otherwise.
#[component]
pub fn CleanButton(
	#[prop(optional)] variant: ButtonVariant,
	#[prop(optional, into)] href: Option<String>,
	#[prop(optional, into)] class: String,
	/// Open in a new tab.
	#[prop(optional)]
	external: bool,
	/// Accessible name for icon-only buttons.
	#[prop(optional, into)]
	label: Option<String>,
	children: Children,
) -> impl IntoView {
	let class = format!("{} {}", variant.class(), class).trim_end().to_string();
	let inner = view! { <span class="btn__content">{children()}</span> };

	match href {
		Some(href) => view! {
			<a
				href=href
				class=class
				target=external.then_some("_blank")
				rel=external.then_some("noopener noreferrer")
				aria-label=label
				data-magnetic=""
			>
				{inner}
			</a>
		}
		.into_any(),
		None => view! {
			<button type="button" class=class aria-label=label data-magnetic="">
				{inner}
			</button>
		}
		.into_any(),
	}
}

/// Pill button that drifts toward the pointer while hovered and springs back
/// on leave.
#[component]
pub fn MagneticButton(
	#[prop(optional, into)] href: Option<String>,
	#[prop(optional)] external: bool,
	children: Children,
) -> impl IntoView {
	let wrapper = NodeRef::<leptos::html::Div>::new();
	let offset = RwSignal::new((0.0, 0.0));
	let hovered = RwSignal::new(false);

	let on_move = move |ev: leptos::ev::MouseEvent| {
		let Some(el) = wrapper.get_untracked() else {
			return;
		};
		let rect = el.get_bounding_client_rect();
		offset.set(magnetic_offset(
			(ev.client_x() as f64, ev.client_y() as f64),
			(rect.left(), rect.top(), rect.width(), rect.height()),
		));
	};

	let style = move || {
		let (x, y) = offset.get();
		let transition = if hovered.get() { "0.1s" } else { "0.3s" };
		format!("transform: translate({x:.2}px, {y:.2}px); transition: transform {transition} ease-out;")
	};

	view! {
		<div
			node_ref=wrapper
			class="magnetic"
			class=("magnetic--hovered", move || hovered.get())
			style=style
			on:mouseenter=move |_| hovered.set(true)
			on:mousemove=on_move
			on:mouseleave=move |_| {
				hovered.set(false);
				offset.set((0.0, 0.0));
			}
		>
			{match href {
				Some(href) => view! {
					<CleanButton href=href external=external class="btn--pill">
						{children()}
					</CleanButton>
				}
				.into_any(),
				None => view! { <CleanButton class="btn--pill">{children()}</CleanButton> }.into_any(),
			}}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_centered_pointer_does_not_move() {
		assert_eq!(magnetic_offset((150.0, 70.0), (100.0, 50.0, 100.0, 40.0)), (0.0, 0.0));
	}

	#[test]
	fn test_offset_scales_distance_from_centre() {
		let (x, y) = magnetic_offset((200.0, 50.0), (100.0, 50.0, 100.0, 40.0));
		assert!((x - 7.5).abs() < 1e-12);
		assert!((y + 3.0).abs() < 1e-12);
	}

	#[test]
	fn test_variant_classes_are_distinct() {
		let all = [
			ButtonVariant::Default,
			ButtonVariant::Outline,
			ButtonVariant::Ghost,
			ButtonVariant::Accent,
		];
		for (i, a) in all.iter().enumerate() {
			assert!(a.class().starts_with("btn "));
			for b in &all[i + 1..] {
				assert_ne!(a.class(), b.class());
			}
		}
		assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
	}
}
