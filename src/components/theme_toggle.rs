use dioxus::prelude::*;

use crate::theme::{ GRAY, WARNING };
use crate::utils::use_theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToggleSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ToggleSize {
    /// (button, icon) in pixels.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            ToggleSize::Small => (36, 20),
            ToggleSize::Medium => (44, 24),
            ToggleSize::Large => (52, 28),
        }
    }
}

#[component]
pub fn ThemeToggle(#[props(default)] size: ToggleSize) -> Element {
    let mut theme = use_theme();
    let is_dark = theme.is_dark();
    let (button, icon) = size.dimensions();
    let (background, glyph_color) = if is_dark { (GRAY.s800, WARNING.s400) } else { (GRAY.s200, GRAY.s700) };

    rsx! {
        button {
            class: "fd-theme-toggle",
            style: "width: {button}px; height: {button}px; font-size: {icon}px; background: {background}; color: {glyph_color};",
            title: if is_dark { "Switch to light theme" } else { "Switch to dark theme" },
            onclick: move |_| theme.toggle(),
            if is_dark { "☀" } else { "☾" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_by_size() {
        assert_eq!(ToggleSize::Small.dimensions(), (36, 20));
        assert_eq!(ToggleSize::default().dimensions(), (44, 24));
        assert_eq!(ToggleSize::Large.dimensions(), (52, 28));
    }
}
