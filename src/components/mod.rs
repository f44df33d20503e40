//! Leptos components making up the page.

pub mod buttons;
pub mod card_stack;
pub mod cursor;
pub mod floating_icons;
pub mod host;
pub mod particle_field;
pub mod reveal;
pub mod sections;
pub mod svg_background;
pub mod theme_toggle;
