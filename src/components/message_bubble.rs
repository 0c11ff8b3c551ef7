use dioxus::prelude::*;

use super::{ AvatarSize, FamilyAvatar };
use crate::data::{ time::clock_label, ChatMessage, DeliveryStatus, MessageKind };
use crate::theme::{ ColorScheme, ThemeColors, GRAY, PRIMARY, WHITE };
use crate::utils::use_theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BubbleColors {
    pub background: &'static str,
    pub text: &'static str,
    pub timestamp: &'static str,
}

pub fn bubble_colors(is_own: bool, scheme: ColorScheme) -> BubbleColors {
    let colors = ThemeColors::for_scheme(scheme);
    if is_own {
        BubbleColors { background: PRIMARY.s600, text: WHITE, timestamp: PRIMARY.s100 }
    } else {
        let background = if scheme.is_dark() { GRAY.s700 } else { GRAY.s100 };
        BubbleColors { background, text: colors.text, timestamp: colors.text_secondary }
    }
}

pub fn status_color(status: DeliveryStatus, timestamp: &'static str) -> &'static str {
    if status == DeliveryStatus::Read { PRIMARY.s300 } else { timestamp }
}

#[component]
pub fn MessageBubble(
    message: ChatMessage,
    on_press: Option<EventHandler<String>>,
    on_long_press: Option<EventHandler<String>>,
) -> Element {
    let theme = use_theme();
    let palette = bubble_colors(message.is_own, theme.scheme());
    let text = palette.text;
    let sent = clock_label(message.sent_at);
    let caption = (!message.body.is_empty()).then(|| message.body.clone());

    let content = match &message.kind {
        MessageKind::Text => rsx! {
            p { class: "fd-bubble-text", style: "color: {text};", "{message.body}" }
        },
        MessageKind::Voice { duration } => {
            let duration = duration.clone().unwrap_or_else(|| "0:00".to_string());
            rsx! {
                div { class: "fd-voice", style: "color: {text};",
                    span { "🎤" }
                    span { class: "fd-voice-waveform", style: "background: {text};" }
                    span { class: "fd-voice-duration", "{duration}" }
                }
            }
        }
        MessageKind::Image { media_url } => {
            let image = media_url.clone().map(|url| rsx! {
                img { class: "fd-bubble-image", src: "{url}", alt: "Shared image" }
            });
            let caption = caption.clone().map(|c| rsx! {
                p { class: "fd-bubble-caption", style: "color: {text};", "{c}" }
            });
            rsx! {
                div { class: "fd-bubble-media", {image} {caption} }
            }
        }
        MessageKind::Video => {
            let caption = caption.clone().map(|c| rsx! {
                p { class: "fd-bubble-caption", style: "color: {text};", "{c}" }
            });
            rsx! {
                div { class: "fd-bubble-media",
                    div { class: "fd-video-placeholder fd-bubble-video", style: "color: {WHITE};", "▶" }
                    {caption}
                }
            }
        }
    };

    let status = message.is_own.then(|| {
        let color = status_color(message.status, palette.timestamp);
        let icon = message.status.icon();
        rsx! {
            span { class: "fd-bubble-status", style: "color: {color};", "{icon}" }
        }
    });

    let avatar = (!message.is_own).then(|| rsx! {
        FamilyAvatar {
            name: message.author_name.clone(),
            image_url: message.author_avatar.clone(),
            size: AvatarSize::Small,
        }
    });
    let secondary = theme.colors().text_secondary;
    let author = (!message.is_own).then(|| rsx! {
        div { class: "fd-bubble-author", style: "color: {secondary};", "{message.author_name}" }
    });

    let press_id = message.id.clone();
    let long_press_id = message.id.clone();

    rsx! {
        div { class: if message.is_own { "fd-message fd-message-own" } else { "fd-message" },
            {avatar}
            div { class: "fd-bubble-column",
                {author}
                div {
                    class: if message.is_own { "fd-bubble fd-bubble-own" } else { "fd-bubble fd-bubble-other" },
                    style: "background: {palette.background};",
                    onclick: move |_| {
                        if let Some(handler) = on_press {
                            handler.call(press_id.clone());
                        }
                    },
                    oncontextmenu: move |evt| {
                        evt.prevent_default();
                        if let Some(handler) = on_long_press {
                            handler.call(long_press_id.clone());
                        }
                    },
                    {content}
                }
                div { class: if message.is_own { "fd-bubble-meta fd-bubble-meta-own" } else { "fd-bubble-meta" },
                    span { style: "color: {palette.timestamp};", "{sent}" }
                    {status}
                }
            }
        }
    }
}
