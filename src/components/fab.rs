use dioxus::prelude::*;

use crate::theme::{ PRIMARY, SECONDARY, WHITE };
use crate::utils::use_theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FabSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FabSize {
    pub fn pixels(self) -> u32 {
        match self {
            FabSize::Small => 40,
            FabSize::Medium => 56,
            FabSize::Large => 72,
        }
    }

    pub fn icon_size(self) -> u32 {
        match self {
            FabSize::Small => 20,
            FabSize::Medium => 24,
            FabSize::Large => 32,
        }
    }

    /// `mini` always renders the small button.
    pub fn effective(self, mini: bool) -> Self {
        if mini { FabSize::Small } else { self }
    }
}

#[component]
pub fn FloatingActionButton(
    on_press: EventHandler<()>,
    #[props(default = "⚑".to_string())] icon: String,
    #[props(default)] size: FabSize,
    color: Option<String>,
    #[props(default)] mini: bool,
    label: Option<String>,
) -> Element {
    let size = size.effective(mini);
    let px = size.pixels();
    let icon_px = size.icon_size();
    let background = color.unwrap_or_else(|| SECONDARY.s500.to_string());
    let class = if label.is_some() { "fd-fab fd-fab-extended" } else { "fd-fab" };
    let label = label.map(|label| rsx! {
        span { class: "fd-fab-label", "{label}" }
    });

    rsx! {
        button {
            class: class,
            style: "min-width: {px}px; height: {px}px; background: {background}; color: {WHITE}; font-size: {icon_px}px;",
            onclick: move |_| on_press.call(()),
            span { "{icon}" }
            {label}
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpeedDialAction {
    pub icon: String,
    pub label: String,
    pub color: Option<String>,
}

struct DialItem {
    index: usize,
    style: String,
    button_style: String,
    label: String,
    icon: String,
}

#[component]
fn SpeedDialButton(
    label: String,
    icon: String,
    style: String,
    on_action: EventHandler<String>,
    on_toggle: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: "fd-speed-dial-mini",
            style: style,
            onclick: move |_| {
                on_action.call(label.clone());
                on_toggle.call(());
            },
            "{icon}"
        }
    }
}

/// Vertical offset of the action at `index` when the dial is open.
pub fn action_offset(index: usize) -> u32 {
    (index as u32 + 1) * 64
}

#[component]
pub fn SpeedDial(
    open: bool,
    on_toggle: EventHandler<()>,
    actions: Vec<SpeedDialAction>,
    on_action: EventHandler<String>,
    #[props(default = "+".to_string())] main_icon: String,
) -> Element {
    let theme = use_theme();
    let colors = theme.colors();
    let rotation = if open { 45 } else { 0 };
    let items: Vec<DialItem> = actions
        .into_iter()
        .enumerate()
        .map(|(index, action)| DialItem {
            index,
            style: format!(
                "transform: translateY(-{}px); opacity: {};",
                if open { action_offset(index) } else { 0 },
                if open { 1 } else { 0 }
            ),
            button_style: format!(
                "background: {};",
                action.color.unwrap_or_else(|| PRIMARY.s600.to_string())
            ),
            label: action.label,
            icon: action.icon,
        })
        .collect();

    rsx! {
        if open {
            div { class: "fd-backdrop", onclick: move |_| on_toggle.call(()) }
        }
        for item in items {
            div { key: "{item.index}", class: "fd-speed-dial-action", style: item.style.clone(),
                span {
                    class: "fd-speed-dial-label",
                    style: "background: {colors.card_background}; color: {colors.text};",
                    "{item.label}"
                }
                SpeedDialButton {
                    label: item.label.clone(),
                    icon: item.icon.clone(),
                    style: item.button_style.clone(),
                    on_action: on_action,
                    on_toggle: on_toggle,
                }
            }
        }
        button {
            class: "fd-fab",
            style: "min-width: 56px; height: 56px; background: {SECONDARY.s500}; color: {WHITE};",
            onclick: move |_| on_toggle.call(()),
            span { style: "display: inline-block; transform: rotate({rotation}deg);", "{main_icon}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mini_forces_small() {
        assert_eq!(FabSize::Large.effective(true), FabSize::Small);
        assert_eq!(FabSize::Large.effective(false), FabSize::Large);
        assert_eq!(FabSize::Small.effective(false).pixels(), 40);
        assert_eq!(FabSize::Medium.icon_size(), 24);
    }

    #[test]
    fn actions_stack_upwards() {
        assert_eq!(action_offset(0), 64);
        assert_eq!(action_offset(2), 192);
    }
}
