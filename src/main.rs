use dioxus::prelude::*;
use famding::theme::{ default_reporter, default_storage, ThemeStore };
use famding::{ apply_document_scheme, use_theme_provider, Route };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).ok();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_theme_provider(|| ThemeStore::new(default_storage(), default_reporter()));

    use_effect(move || apply_document_scheme(theme.scheme()));

    let vars = theme.colors().css_vars();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div {
            class: if theme.is_dark() { "fd-root dark" } else { "fd-root" },
            style: "{vars}",
            if theme.is_loaded() {
                Router::<Route> {}
            }
        }
    }
}
