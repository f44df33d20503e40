//! Entrance animations for static content.
//!
//! [`Reveal`] wraps its children in a block that starts hidden and gains
//! `is-visible` the first time it scrolls into view. The transition itself is
//! CSS; this side only picks the starting pose and the delay. Content already
//! on screen at mount reveals immediately, which gives the hero its staggered
//! entrance.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Share of the element that must be visible before it reveals.
const THRESHOLD: f64 = 0.1;
/// Shrinks the viewport bottom so elements reveal slightly after entering.
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Starting pose before the element is revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealFrom {
	/// Fade in while rising 30px.
	#[default]
	Below,
	/// Fade in while sliding from the left.
	Left,
	/// Fade in while growing from 80%.
	Scale,
}

impl RevealFrom {
	pub fn class(self) -> &'static str {
		match self {
			RevealFrom::Below => "reveal reveal--below",
			RevealFrom::Left => "reveal reveal--left",
			RevealFrom::Scale => "reveal reveal--scale",
		}
	}
}

/// Delay of the `index`-th item in a sequence starting at `base` seconds and
/// spaced `step` seconds apart.
pub fn stagger(base: f64, step: f64, index: usize) -> f64 {
	base + step * index as f64
}

pub fn reveal_style(delay: f64) -> String {
	format!("transition-delay: {:.2}s;", delay.max(0.0))
}

type ObserverSlot = Rc<RefCell<Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>)>>>;

#[component]
pub fn Reveal(
	/// Seconds to wait after entering the viewport.
	#[prop(optional)]
	delay: f64,
	#[prop(optional)] from: RevealFrom,
	#[prop(optional, into)] class: String,
	children: Children,
) -> impl IntoView {
	let node = NodeRef::<leptos::html::Div>::new();
	let visible = RwSignal::new(false);
	let slot: ObserverSlot = Rc::new(RefCell::new(None));
	let slot_init = slot.clone();

	Effect::new(move |_| {
		let Some(el) = node.get() else {
			return;
		};
		if slot_init.borrow().is_some() || visible.get_untracked() {
			return;
		}

		let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
			move |entries: js_sys::Array, observer: IntersectionObserver| {
				let entered = entries
					.iter()
					.filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
					.any(|e| e.is_intersecting());
				if entered {
					visible.set(true);
					observer.disconnect();
				}
			},
		);
		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(THRESHOLD));
		options.set_root_margin(ROOT_MARGIN);

		match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
			Ok(observer) => {
				observer.observe(&el);
				*slot_init.borrow_mut() = Some((observer, callback));
			}
			Err(e) => {
				warn!("folio: IntersectionObserver unavailable, showing content: {:?}", e);
				visible.set(true);
			}
		}
	});

	let slot_cleanup = SendWrapper::new(slot);
	on_cleanup(move || {
		if let Some((observer, _callback)) = slot_cleanup.borrow_mut().take() {
			observer.disconnect();
		}
	});

	let class = format!("{} {}", from.class(), class).trim_end().to_string();
	view! {
		<div
			node_ref=node
			class=class
			class=("is-visible", move || visible.get())
			style=reveal_style(delay)
		>
			{children()}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_stagger_spaces_items_evenly() {
		assert_eq!(stagger(0.0, 0.1, 0), 0.0);
		assert!((stagger(1.0, 0.1, 3) - 1.3).abs() < 1e-12);
		let delays: Vec<f64> = (0..6).map(|i| stagger(0.0, 0.08, i)).collect();
		assert!(delays.windows(2).all(|w| w[1] > w[0]));
	}

	#[test]
	fn test_reveal_style() {
		assert_eq!(reveal_style(stagger(1.0, 0.1, 3)), "transition-delay: 1.30s;");
		assert_eq!(reveal_style(0.0), "transition-delay: 0.00s;");
		assert_eq!(reveal_style(-1.0), "transition-delay: 0.00s;");
	}

	#[test]
	fn test_poses_have_distinct_classes() {
		assert_eq!(RevealFrom::default(), RevealFrom::Below);
		assert_ne!(RevealFrom::Below.class(), RevealFrom::Left.class());
		assert_ne!(RevealFrom::Left.class(), RevealFrom::Scale.class());
		assert!(RevealFrom::Scale.class().starts_with("reveal "));
	}
}
