use dioxus::prelude::*;

use super::{ AvatarSize, FamilyAvatar, ThemeToggle, ToggleSize };
use crate::data::{ FAMILY_MEMBER_COUNT, FAMILY_NAME };
use crate::routes::Route;
use crate::theme::PRIMARY;
use crate::utils::use_theme;

pub const DRAWER_MAX_WIDTH: u32 = 320;
pub const DRAWER_VIEWPORT_SHARE: u32 = 75;

pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: fn() -> Route,
}

pub static NAVIGATION: [NavItem; 5] = [
    NavItem { label: "Family Chat", icon: "💬", route: || Route::Chat },
    NavItem { label: "Timeline", icon: "🕑", route: || Route::Timeline },
    NavItem { label: "Family Members", icon: "👪", route: || Route::placeholder("members") },
    NavItem { label: "Design System", icon: "🎨", route: || Route::DesignSystem },
    NavItem { label: "Settings", icon: "⚙", route: || Route::Settings },
];

#[component]
pub fn MobileDrawer(is_open: bool, on_close: EventHandler<()>) -> Element {
    let theme = use_theme();
    let colors = theme.colors();
    let navigator = use_navigator();
    let offset = if is_open { "0" } else { "-100%" };
    let overlay_opacity = if is_open { "0.5" } else { "0" };
    let overlay_events = if is_open { "auto" } else { "none" };

    let go = move |route: Route| {
        log::info!("Navigating to {}", route);
        navigator.push(route);
        on_close.call(());
    };

    rsx! {
        div {
            class: "fd-drawer-overlay",
            style: "opacity: {overlay_opacity}; pointer-events: {overlay_events};",
            onclick: move |_| on_close.call(()),
        }
        nav {
            class: "fd-drawer",
            style: "width: min({DRAWER_VIEWPORT_SHARE}vw, {DRAWER_MAX_WIDTH}px); transform: translateX({offset}); background: {colors.background};",
            div { class: "fd-drawer-header",
                FamilyAvatar {
                    name: FAMILY_NAME.to_string(),
                    size: AvatarSize::Large,
                    background_color: PRIMARY.s600.to_string(),
                }
                div { class: "fd-drawer-family", style: "color: {colors.text};", "{FAMILY_NAME}" }
                div { class: "fd-drawer-count", style: "color: {colors.text_secondary};", "{FAMILY_MEMBER_COUNT} members" }
            }
            div { class: "fd-drawer-nav",
                for item in NAVIGATION.iter() {
                    button {
                        key: "{item.label}",
                        class: "fd-nav-item",
                        style: "color: {colors.text};",
                        onclick: {
                            let route = (item.route)();
                            move |_| go(route.clone())
                        },
                        span { class: "fd-nav-icon", style: "color: {colors.icon};", "{item.icon}" }
                        span { "{item.label}" }
                    }
                }
            }
            div { class: "fd-drawer-bottom", style: "border-top-color: {colors.border};",
                button {
                    class: "fd-nav-item",
                    style: "color: {colors.text};",
                    onclick: move |_| go(Route::placeholder("profile")),
                    FamilyAvatar {
                        name: "You".to_string(),
                        size: AvatarSize::Small,
                        image_url: "https://i.pravatar.cc/150?u=currentuser".to_string(),
                    }
                    div { class: "fd-profile-info",
                        div { class: "fd-profile-name", "Your Name" }
                        div { class: "fd-profile-status", style: "color: {colors.text_secondary};", "View Profile" }
                    }
                }
                div { class: "fd-theme-row",
                    span { style: "color: {colors.text_secondary};", "Theme" }
                    ThemeToggle { size: ToggleSize::Small }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_targets_are_distinct() {
        let targets: Vec<String> = NAVIGATION.iter().map(|item| (item.route)().to_string()).collect();
        assert_eq!(targets, ["/chat", "/", "/members", "/design", "/settings"]);
    }
}
