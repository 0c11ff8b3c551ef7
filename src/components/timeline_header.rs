use dioxus::prelude::*;

use super::AvatarGroup;
use crate::data::{ FamilyMember, MemoryFilter };
use crate::theme::PRIMARY;
use crate::utils::use_theme;

#[component]
pub fn TimelineHeader(
    family_name: String,
    member_count: u32,
    active_members: Vec<FamilyMember>,
    #[props(default)] current_filter: MemoryFilter,
    on_filter_change: Option<EventHandler<MemoryFilter>>,
    on_settings_press: Option<EventHandler<()>>,
    on_members_press: Option<EventHandler<()>>,
) -> Element {
    let theme = use_theme();
    let colors = theme.colors();

    rsx! {
        div { class: "fd-timeline-header", style: "background: {colors.background};",
            div { class: "fd-timeline-header-row",
                div { class: "fd-family-info",
                    h1 { class: "fd-family-name", style: "color: {colors.text};", "{family_name}" }
                    div {
                        class: "fd-member-info fd-pressable",
                        onclick: move |_| {
                            if let Some(handler) = on_members_press {
                                handler.call(());
                            }
                        },
                        AvatarGroup {
                            avatars: active_members,
                            max: 3,
                            on_press_more: move |_| {
                                if let Some(handler) = on_members_press {
                                    handler.call(());
                                }
                            },
                        }
                        span { class: "fd-member-count", style: "color: {colors.text_secondary};", "{member_count} members" }
                    }
                }
                button {
                    class: "fd-icon-button",
                    style: "color: {colors.icon};",
                    title: "Settings",
                    onclick: move |_| {
                        if let Some(handler) = on_settings_press {
                            handler.call(());
                        }
                    },
                    "⚙"
                }
            }
            div { class: "fd-filter-row",
                for filter in MemoryFilter::ALL {
                    FilterPill {
                        key: "{filter}",
                        filter: filter,
                        active: filter == current_filter,
                        on_select: move |f| {
                            if let Some(handler) = on_filter_change {
                                handler.call(f);
                            }
                        },
                    }
                }
            }
            div { class: "fd-divider", style: "background: {colors.border};" }
        }
    }
}

#[component]
fn FilterPill(filter: MemoryFilter, active: bool, on_select: EventHandler<MemoryFilter>) -> Element {
    let theme = use_theme();
    let colors = theme.colors();
    let (background, border, text, weight) = if active {
        (PRIMARY.s100, PRIMARY.s600, PRIMARY.s600, 600)
    } else {
        (colors.background_secondary, colors.border, colors.text, 400)
    };
    let icon = filter.icon();
    let label = filter.label();

    rsx! {
        button {
            class: "fd-filter-pill",
            style: "background: {background}; border-color: {border}; color: {text}; font-weight: {weight};",
            onclick: move |_| on_select.call(filter),
            span { "{icon}" }
            span { "{label}" }
        }
    }
}

#[component]
pub fn DateSeparator(label: String) -> Element {
    let theme = use_theme();
    let colors = theme.colors();

    rsx! {
        div { class: "fd-date-separator",
            div { class: "fd-date-line", style: "background: {colors.border};" }
            span {
                class: "fd-date-label",
                style: "background: {colors.background_secondary}; color: {colors.text_secondary};",
                "{label}"
            }
            div { class: "fd-date-line", style: "background: {colors.border};" }
        }
    }
}
