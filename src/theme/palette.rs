//! FamDing design tokens ("Friendly Modernism").

use super::ColorScheme;

/// A ten-step color scale, 50 through 900.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scale {
    pub s50: &'static str,
    pub s100: &'static str,
    pub s200: &'static str,
    pub s300: &'static str,
    pub s400: &'static str,
    pub s500: &'static str,
    pub s600: &'static str,
    pub s700: &'static str,
    pub s800: &'static str,
    pub s900: &'static str,
}

impl Scale {
    pub fn steps(&self) -> [(u16, &'static str); 10] {
        [
            (50, self.s50),
            (100, self.s100),
            (200, self.s200),
            (300, self.s300),
            (400, self.s400),
            (500, self.s500),
            (600, self.s600),
            (700, self.s700),
            (800, self.s800),
            (900, self.s900),
        ]
    }
}

// Soft blue
pub const PRIMARY: Scale = Scale {
    s50: "#f0f9ff",
    s100: "#e0f2fe",
    s200: "#bae6fd",
    s300: "#7dd3fc",
    s400: "#38bdf8",
    s500: "#0ea5e9",
    s600: "#0284c7",
    s700: "#0369a1",
    s800: "#075985",
    s900: "#0c4a6e",
};

// Warm coral
pub const SECONDARY: Scale = Scale {
    s50: "#fef7f0",
    s100: "#feecdc",
    s200: "#fcd9bd",
    s300: "#fdba8c",
    s400: "#ff8a4c",
    s500: "#ff6b35",
    s600: "#ea580c",
    s700: "#c2410c",
    s800: "#9a3412",
    s900: "#7c2d12",
};

pub const SUCCESS: Scale = Scale {
    s50: "#f0fdf4",
    s100: "#dcfce7",
    s200: "#bbf7d0",
    s300: "#86efac",
    s400: "#4ade80",
    s500: "#22c55e",
    s600: "#16a34a",
    s700: "#15803d",
    s800: "#166534",
    s900: "#14532d",
};

pub const WARNING: Scale = Scale {
    s50: "#fffbeb",
    s100: "#fef3c7",
    s200: "#fde68a",
    s300: "#fcd34d",
    s400: "#fbbf24",
    s500: "#f59e0b",
    s600: "#d97706",
    s700: "#b45309",
    s800: "#92400e",
    s900: "#78350f",
};

pub const ERROR: Scale = Scale {
    s50: "#fef2f2",
    s100: "#fee2e2",
    s200: "#fecaca",
    s300: "#fca5a5",
    s400: "#f87171",
    s500: "#ef4444",
    s600: "#dc2626",
    s700: "#b91c1c",
    s800: "#991b1b",
    s900: "#7f1d1d",
};

pub const GRAY: Scale = Scale {
    s50: "#f9fafb",
    s100: "#f3f4f6",
    s200: "#e5e7eb",
    s300: "#d1d5db",
    s400: "#9ca3af",
    s500: "#6b7280",
    s600: "#4b5563",
    s700: "#374151",
    s800: "#1f2937",
    s900: "#111827",
};

pub const WHITE: &str = "#ffffff";
pub const BLACK: &str = "#000000";
pub const TRANSPARENT: &str = "transparent";

/// Semantic colors that change with the scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub background: &'static str,
    pub background_secondary: &'static str,
    pub tint: &'static str,
    pub icon: &'static str,
    pub tab_icon_default: &'static str,
    pub tab_icon_selected: &'static str,
    pub border: &'static str,
    pub card_background: &'static str,
    pub shadow: &'static str,
}

pub const LIGHT: ThemeColors = ThemeColors {
    text: GRAY.s900,
    text_secondary: GRAY.s600,
    background: WHITE,
    background_secondary: GRAY.s50,
    tint: PRIMARY.s600,
    icon: GRAY.s500,
    tab_icon_default: GRAY.s400,
    tab_icon_selected: PRIMARY.s600,
    border: GRAY.s200,
    card_background: WHITE,
    shadow: BLACK,
};

pub const DARK: ThemeColors = ThemeColors {
    text: WHITE,
    text_secondary: GRAY.s300,
    background: "#0f172a",
    background_secondary: GRAY.s800,
    tint: PRIMARY.s400,
    icon: GRAY.s400,
    tab_icon_default: GRAY.s500,
    tab_icon_selected: PRIMARY.s400,
    border: GRAY.s700,
    card_background: GRAY.s800,
    shadow: BLACK,
};

impl ThemeColors {
    pub fn for_scheme(scheme: ColorScheme) -> &'static ThemeColors {
        match scheme {
            ColorScheme::Light => &LIGHT,
            ColorScheme::Dark => &DARK,
        }
    }

    /// CSS custom properties consumed by `main.css`.
    pub fn css_vars(&self) -> String {
        [
            ("text", self.text),
            ("text-secondary", self.text_secondary),
            ("background", self.background),
            ("background-secondary", self.background_secondary),
            ("tint", self.tint),
            ("icon", self.icon),
            ("tab-icon-default", self.tab_icon_default),
            ("tab-icon-selected", self.tab_icon_selected),
            ("border", self.border),
            ("card-background", self.card_background),
            ("shadow", self.shadow),
        ]
            .iter()
            .map(|(name, value)| format!("--fd-{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_colors_by_scheme() {
        assert_eq!(ThemeColors::for_scheme(ColorScheme::Light).background, WHITE);
        assert_eq!(ThemeColors::for_scheme(ColorScheme::Dark).background, "#0f172a");
        assert_eq!(DARK.tint, PRIMARY.s400);
    }

    #[test]
    fn css_vars_cover_every_token() {
        let vars = LIGHT.css_vars();
        assert!(vars.starts_with("--fd-text: #111827;"));
        assert!(vars.contains("--fd-card-background: #ffffff;"));
        assert_eq!(vars.matches("--fd-").count(), 11);
    }

    #[test]
    fn steps_are_ordered() {
        let steps = GRAY.steps();
        assert_eq!(steps[0], (50, "#f9fafb"));
        assert_eq!(steps[9], (900, "#111827"));
    }
}
