use dioxus::prelude::*;

use crate::components::{ MobileDrawer, ThemeToggle, ToggleSize };
use crate::routes::Route;
use crate::utils::use_theme;

#[component]
pub fn AppShell() -> Element {
    let theme = use_theme();
    let colors = theme.colors();
    let mut drawer_open = use_signal(|| false);
    let title = use_route::<Route>().title();

    rsx! {
        div { class: "fd-shell", style: "background: {colors.background};",
            MobileDrawer { is_open: drawer_open(), on_close: move |_| drawer_open.set(false) }
            header {
                class: "fd-app-header",
                style: "background: {colors.background}; border-bottom-color: {colors.border};",
                button {
                    class: "fd-icon-button",
                    style: "color: {colors.icon};",
                    title: "Menu",
                    onclick: move |_| drawer_open.set(true),
                    "☰"
                }
                h2 { class: "fd-app-title", style: "color: {colors.text};", "{title}" }
                ThemeToggle { size: ToggleSize::Small }
            }
            main { class: "fd-screen",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn ComingSoon(segments: Vec<String>) -> Element {
    let theme = use_theme();
    let colors = theme.colors();
    let path = segments.join("/");
    log::info!("No screen for /{}", path);

    rsx! {
        div { class: "fd-placeholder",
            h1 { style: "color: {colors.text};", "Coming soon..." }
            p { style: "color: {colors.text_secondary};", "/{path}" }
            Link { to: Route::Timeline, class: "fd-link", "Back to the timeline" }
        }
    }
}
