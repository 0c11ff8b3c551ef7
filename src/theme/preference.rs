use super::ColorScheme;

pub const USER_THEME_KEY: &str = "userTheme";
pub const IS_SYSTEM_THEME_KEY: &str = "isSystemTheme";

/// The persisted theme preference.
///
/// The active scheme is never stored. It is derived from this value and
/// whatever the host reports at the time of the query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePreference {
    pub use_system_theme: bool,
    pub user_scheme: ColorScheme,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self {
            use_system_theme: true,
            user_scheme: ColorScheme::Light,
        }
    }
}

impl ThemePreference {
    pub fn active(&self, reported: Option<ColorScheme>) -> ColorScheme {
        if self.use_system_theme {
            reported.unwrap_or(ColorScheme::Light)
        } else {
            self.user_scheme
        }
    }

    pub fn mode(&self) -> ThemeMode {
        if self.use_system_theme { ThemeMode::FollowingSystem } else { ThemeMode::Overridden }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    FollowingSystem,
    Overridden,
}

impl ThemeMode {
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::FollowingSystem => "Following system",
            ThemeMode::Overridden => "Manual",
        }
    }
}

/// What subscribers receive after each change to the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub preference: ThemePreference,
    pub mode: ThemeMode,
    pub active: ColorScheme,
}

pub(crate) fn encode_flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

pub(crate) fn decode_flag(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMES: [ColorScheme; 2] = [ColorScheme::Light, ColorScheme::Dark];

    #[test]
    fn override_ignores_platform() {
        for user_scheme in SCHEMES {
            for reported in [None, Some(ColorScheme::Light), Some(ColorScheme::Dark)] {
                let pref = ThemePreference { use_system_theme: false, user_scheme };
                assert_eq!(pref.active(reported), user_scheme);
            }
        }
    }

    #[test]
    fn system_mode_tracks_platform_or_light() {
        for user_scheme in SCHEMES {
            let pref = ThemePreference { use_system_theme: true, user_scheme };
            assert_eq!(pref.active(Some(ColorScheme::Dark)), ColorScheme::Dark);
            assert_eq!(pref.active(Some(ColorScheme::Light)), ColorScheme::Light);
            assert_eq!(pref.active(None), ColorScheme::Light);
        }
    }

    #[test]
    fn mode_follows_flag() {
        assert_eq!(ThemePreference::default().mode(), ThemeMode::FollowingSystem);
        let pref = ThemePreference { use_system_theme: false, user_scheme: ColorScheme::Dark };
        assert_eq!(pref.mode(), ThemeMode::Overridden);
    }

    #[test]
    fn flags_round_trip_storage_strings() {
        assert_eq!(decode_flag(encode_flag(true)), Some(true));
        assert_eq!(decode_flag(encode_flag(false)), Some(false));
        assert_eq!(decode_flag("TRUE"), None);
    }
}
