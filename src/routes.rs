use dioxus::prelude::*;
use crate::views::{ AppShell, Chat, ComingSoon, DesignSystem, Settings, Timeline };

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[layout(AppShell)]
    #[route("/")]
    Timeline,
    #[route("/chat")]
    Chat,
    #[route("/settings")]
    Settings,
    #[route("/design")]
    DesignSystem,
    #[route("/:..segments")] ComingSoon {
        segments: Vec<String>,
    },
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Timeline => "Timeline",
            Route::Chat => "Family Chat",
            Route::Settings => "Settings",
            Route::DesignSystem => "Design System",
            Route::ComingSoon { .. } => "FamDing",
        }
    }

    pub fn placeholder(name: &str) -> Self {
        Route::ComingSoon { segments: vec![name.to_string()] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!("/chat".parse::<Route>().ok(), Some(Route::Chat));
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Timeline));
        assert_eq!(Route::Settings.to_string(), "/settings");
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert_eq!("/members".parse::<Route>().ok(), Some(Route::placeholder("members")));
        assert_eq!(Route::placeholder("profile").title(), "FamDing");
    }
}
