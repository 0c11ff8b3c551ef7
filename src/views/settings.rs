use dioxus::prelude::*;

use crate::components::{ ButtonSize, ButtonVariant, FamDingButton, ThemeToggle, ToggleSize };
use crate::theme::{ ThemeMode, GRAY, PRIMARY, WHITE };
use crate::utils::use_theme;

#[component]
pub fn Settings() -> Element {
    let mut theme = use_theme();
    let colors = theme.colors();
    let following = theme.mode() == ThemeMode::FollowingSystem;
    let scheme = theme.scheme();
    let mode = theme.mode().label();
    let (track, knob_offset) = if following { (PRIMARY.s600, 20) } else { (GRAY.s300, 0) };

    rsx! {
        div { class: "fd-settings",
            section { class: "fd-settings-group", style: "background: {colors.card_background}; border-color: {colors.border};",
                h3 { class: "fd-settings-heading", style: "color: {colors.text_secondary};", "Appearance" }
                div { class: "fd-settings-row",
                    div {
                        div { style: "color: {colors.text};", "Follow system theme" }
                        div { class: "fd-settings-hint", style: "color: {colors.text_secondary};",
                            "{mode} · currently {scheme}"
                        }
                    }
                    button {
                        class: "fd-switch",
                        role: "switch",
                        style: "background: {track};",
                        onclick: move |_| theme.set_use_system_theme(!following),
                        span { class: "fd-switch-knob", style: "background: {WHITE}; transform: translateX({knob_offset}px);" }
                    }
                }
                div { class: "fd-settings-row",
                    div { style: "color: {colors.text};", "Switch theme" }
                    ThemeToggle { size: ToggleSize::Medium }
                }
                if !following {
                    FamDingButton {
                        title: "Reset to system theme".to_string(),
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        on_press: move |_| theme.set_use_system_theme(true),
                    }
                }
            }
        }
    }
}
