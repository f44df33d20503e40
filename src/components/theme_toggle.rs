//! Dark/light switch. Applies a `dark` class to the root element; the choice
//! lives only for the current page view.

use leptos::prelude::*;
use log::warn;

/// Class toggled on `<html>`.
pub const DARK_CLASS: &str = "dark";

fn root_class_list() -> Option<web_sys::DomTokenList> {
	Some(web_sys::window()?.document()?.document_element()?.class_list())
}

/// Label announced by assistive tech for the next action.
pub fn toggle_label(dark: bool) -> &'static str {
	if dark { "Switch to light theme" } else { "Switch to dark theme" }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
	let initial = root_class_list()
		.map(|list| list.contains(DARK_CLASS))
		.unwrap_or(false);
	let dark = RwSignal::new(initial);

	Effect::new(move |_| {
		let on = dark.get();
		let Some(list) = root_class_list() else {
			return;
		};
		if let Err(e) = list.toggle_with_force(DARK_CLASS, on) {
			warn!("folio: failed to apply theme: {:?}", e);
		}
	});

	view! {
		<button
			type="button"
			class="theme-toggle"
			aria-label=move || toggle_label(dark.get())
			aria-pressed=move || dark.get().to_string()
			data-magnetic=""
			on:click=move |_| dark.update(|d| *d = !*d)
		>
			{move || if dark.get() { "☾" } else { "☀" }}
		</button>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_label_describes_next_state() {
		assert_eq!(toggle_label(false), "Switch to dark theme");
		assert_eq!(toggle_label(true), "Switch to light theme");
	}
}
