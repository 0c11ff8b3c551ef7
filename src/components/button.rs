use dioxus::prelude::*;

use crate::theme::{ ThemeColors, PRIMARY, SECONDARY, TRANSPARENT, WHITE };
use crate::utils::use_theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IconPosition {
    #[default]
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeMetrics {
    pub padding_vertical: u32,
    pub padding_horizontal: u32,
    pub font_size: u32,
    pub icon_size: u32,
}

impl ButtonSize {
    pub fn metrics(self) -> SizeMetrics {
        match self {
            ButtonSize::Small => SizeMetrics { padding_vertical: 8, padding_horizontal: 16, font_size: 14, icon_size: 16 },
            ButtonSize::Medium => SizeMetrics { padding_vertical: 12, padding_horizontal: 24, font_size: 16, icon_size: 20 },
            ButtonSize::Large => SizeMetrics { padding_vertical: 16, padding_horizontal: 32, font_size: 18, icon_size: 24 },
        }
    }
}

impl ButtonVariant {
    pub fn background(self) -> &'static str {
        match self {
            ButtonVariant::Primary => PRIMARY.s600,
            ButtonVariant::Secondary => SECONDARY.s500,
            ButtonVariant::Outline | ButtonVariant::Ghost => TRANSPARENT,
        }
    }

    /// Text and icon color.
    pub fn foreground(self, colors: &ThemeColors) -> &'static str {
        match self {
            ButtonVariant::Primary | ButtonVariant::Secondary => WHITE,
            ButtonVariant::Outline => PRIMARY.s600,
            ButtonVariant::Ghost => colors.text,
        }
    }
}

pub fn button_style(
    variant: ButtonVariant,
    size: ButtonSize,
    dimmed: bool,
    colors: &ThemeColors
) -> String {
    let m = size.metrics();
    let border = match variant {
        ButtonVariant::Outline => format!("2px solid {}", PRIMARY.s600),
        _ => "none".to_string(),
    };
    format!(
        "padding: {}px {}px; background: {}; color: {}; border: {}; font-size: {}px; opacity: {};",
        m.padding_vertical,
        m.padding_horizontal,
        variant.background(),
        variant.foreground(colors),
        border,
        m.font_size,
        if dimmed { "0.6" } else { "1" }
    )
}

#[component]
pub fn FamDingButton(
    title: String,
    on_press: EventHandler<()>,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    icon: Option<String>,
    #[props(default)] icon_position: IconPosition,
    #[props(default)] loading: bool,
    #[props(default)] disabled: bool,
    #[props(default)] full_width: bool,
) -> Element {
    let theme = use_theme();
    let inactive = disabled || loading;
    let style = button_style(variant, size, inactive, theme.colors());
    let icon_size = size.metrics().icon_size;
    let class = if full_width { "fd-button fd-button-full" } else { "fd-button" };
    let (left, right) = match (icon, icon_position) {
        (Some(icon), IconPosition::Left) => (Some(icon), None),
        (Some(icon), IconPosition::Right) => (None, Some(icon)),
        (None, _) => (None, None),
    };
    let left = left.map(|icon| rsx! {
        span { class: "fd-button-icon-left", style: "font-size: {icon_size}px;", "{icon}" }
    });
    let right = right.map(|icon| rsx! {
        span { class: "fd-button-icon-right", style: "font-size: {icon_size}px;", "{icon}" }
    });

    rsx! {
        button {
            class: class,
            style: style,
            disabled: inactive,
            onclick: move |_| on_press.call(()),
            if loading {
                span { class: "fd-spinner", title: "Loading" }
            } else {
                {left}
                span { class: "fd-button-label", "{title}" }
                {right}
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

#[component]
pub fn ButtonGroup(
    children: Element,
    #[props(default)] direction: Direction,
    #[props(default = 8)] spacing: u32,
) -> Element {
    let flow = match direction {
        Direction::Horizontal => "row",
        Direction::Vertical => "column",
    };
    rsx! {
        div {
            class: "fd-button-group",
            style: "flex-direction: {flow}; gap: {spacing}px;",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ DARK, LIGHT };

    #[test]
    fn metrics_grow_with_size() {
        assert_eq!(ButtonSize::Small.metrics().padding_horizontal, 16);
        assert_eq!(ButtonSize::Medium.metrics().font_size, 16);
        assert_eq!(ButtonSize::Large.metrics().icon_size, 24);
    }

    #[test]
    fn ghost_text_follows_scheme() {
        assert_eq!(ButtonVariant::Ghost.foreground(&LIGHT), LIGHT.text);
        assert_eq!(ButtonVariant::Ghost.foreground(&DARK), WHITE);
        assert_eq!(ButtonVariant::Outline.foreground(&DARK), PRIMARY.s600);
    }

    #[test]
    fn disabled_buttons_are_dimmed() {
        let style = button_style(ButtonVariant::Primary, ButtonSize::Medium, true, &LIGHT);
        assert!(style.contains("opacity: 0.6;"));
        assert!(style.contains("background: #0284c7;"));

        let style = button_style(ButtonVariant::Outline, ButtonSize::Small, false, &LIGHT);
        assert!(style.contains("border: 2px solid #0284c7;"));
        assert!(style.contains("opacity: 1;"));
    }
}
