use dioxus::prelude::*;

use crate::components::{
    AvatarGroup,
    AvatarSize,
    ButtonGroup,
    ButtonSize,
    ButtonVariant,
    Direction,
    FabSize,
    FamDingButton,
    FamilyAvatar,
    FloatingActionButton,
    IconPosition,
    MessageBubble,
    SpeedDial,
    SpeedDialAction,
};
use crate::data::{ ACTIVE_MEMBERS, SAMPLE_MESSAGES };
use crate::theme::{ Scale, ERROR, GRAY, PRIMARY, SECONDARY, SUCCESS, WARNING };
use crate::utils::use_theme;

const SCALES: [(&str, Scale); 6] = [
    ("Primary", PRIMARY),
    ("Secondary", SECONDARY),
    ("Success", SUCCESS),
    ("Warning", WARNING),
    ("Error", ERROR),
    ("Gray", GRAY),
];

#[component]
pub fn DesignSystem() -> Element {
    let theme = use_theme();
    let colors = theme.colors();
    let mut dial_open = use_signal(|| false);
    let actions = vec![
        SpeedDialAction { icon: "📷".to_string(), label: "Photo".to_string(), color: None },
        SpeedDialAction { icon: "🎥".to_string(), label: "Video".to_string(), color: Some(SECONDARY.s500.to_string()) },
        SpeedDialAction { icon: "✎".to_string(), label: "Note".to_string(), color: Some(SUCCESS.s500.to_string()) },
    ];

    rsx! {
        div { class: "fd-design", style: "color: {colors.text};",
            h1 { "Design System" }

            h2 { "Palette" }
            for (name, scale) in SCALES {
                PaletteRow { key: "{name}", name: name.to_string(), scale: scale }
            }

            h2 { "Buttons" }
            ButtonGroup {
                FamDingButton { title: "Primary".to_string(), on_press: move |_| log::info!("Primary pressed") }
                FamDingButton { title: "Secondary".to_string(), variant: ButtonVariant::Secondary, on_press: move |_| log::info!("Secondary pressed") }
                FamDingButton { title: "Outline".to_string(), variant: ButtonVariant::Outline, on_press: move |_| log::info!("Outline pressed") }
                FamDingButton { title: "Ghost".to_string(), variant: ButtonVariant::Ghost, on_press: move |_| log::info!("Ghost pressed") }
            }
            ButtonGroup { direction: Direction::Vertical, spacing: 12,
                FamDingButton { title: "Small".to_string(), size: ButtonSize::Small, icon: "♥".to_string(), on_press: move |_| {} }
                FamDingButton { title: "Large".to_string(), size: ButtonSize::Large, icon: "→".to_string(), icon_position: IconPosition::Right, on_press: move |_| {} }
                FamDingButton { title: "Loading".to_string(), loading: true, on_press: move |_| {} }
                FamDingButton { title: "Disabled".to_string(), disabled: true, on_press: move |_| {} }
                FamDingButton { title: "Full width".to_string(), full_width: true, on_press: move |_| {} }
            }

            h2 { "Avatars" }
            div { class: "fd-showcase-row",
                FamilyAvatar { name: "Grandma Rose".to_string(), size: AvatarSize::Small, is_online: true }
                FamilyAvatar { name: "Dad".to_string(), image_url: "https://i.pravatar.cc/150?u=dad".to_string(), size: AvatarSize::Medium, show_name: true }
                FamilyAvatar { name: "Uncle Mike".to_string(), size: AvatarSize::Large, show_name: true, is_online: true }
                FamilyAvatar { name: "The Martinez Family".to_string(), size: AvatarSize::XLarge, background_color: PRIMARY.s600.to_string() }
            }
            AvatarGroup { avatars: ACTIVE_MEMBERS.clone(), on_press_more: move |_| log::info!("More members pressed") }

            h2 { "Messages" }
            for message in SAMPLE_MESSAGES.iter().take(5) {
                MessageBubble { key: "{message.id}", message: message.clone() }
            }

            h2 { "Floating buttons" }
            div { class: "fd-showcase-row",
                FloatingActionButton { on_press: move |_| {}, mini: true }
                FloatingActionButton { on_press: move |_| {}, size: FabSize::Large, icon: "+".to_string() }
                FloatingActionButton { on_press: move |_| {}, icon: "+".to_string(), label: "New memory".to_string(), color: PRIMARY.s600.to_string() }
            }
            div { class: "fd-speed-dial-demo",
                SpeedDial {
                    open: dial_open(),
                    on_toggle: move |_| dial_open.set(!dial_open()),
                    actions: actions,
                    on_action: move |label: String| log::info!("Speed dial action: {}", label),
                }
            }
        }
    }
}

#[component]
fn PaletteRow(name: String, scale: Scale) -> Element {
    rsx! {
        div { class: "fd-palette-row",
            span { class: "fd-palette-name", "{name}" }
            for (step, hex) in scale.steps() {
                div { key: "{step}", class: "fd-swatch", style: "background: {hex};", title: "{hex}",
                    span { class: "fd-swatch-step", "{step}" }
                }
            }
        }
    }
}
