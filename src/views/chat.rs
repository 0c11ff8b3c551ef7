use dioxus::prelude::*;

use crate::components::{ AvatarSize, FamilyAvatar, MessageBubble };
use crate::data::{ FAMILY_MEMBER_COUNT, FAMILY_ONLINE_COUNT, SAMPLE_MESSAGES, TYPING_MEMBERS };
use crate::theme::{ PRIMARY, WHITE };
use crate::utils::use_theme;

pub const MAX_MESSAGE_LENGTH: usize = 1000;

/// The text to send, or `None` when the draft is blank.
pub fn outgoing(draft: &str) -> Option<String> {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_MESSAGE_LENGTH).collect())
    }
}

#[component]
pub fn Chat() -> Element {
    let theme = use_theme();
    let colors = theme.colors();
    let mut draft = use_signal(String::new);
    let can_send = outgoing(&draft.read()).is_some();

    let mut send = move || {
        let text = outgoing(&draft.peek());
        if let Some(text) = text {
            log::info!("Sending message: {}", text);
            draft.set(String::new());
        }
    };

    let typing = TYPING_MEMBERS.first().cloned().map(|member| rsx! {
        div { class: "fd-typing",
            FamilyAvatar { name: member.name, image_url: member.image_url, size: AvatarSize::Small }
            div { class: "fd-typing-bubble", style: "background: {colors.background_secondary};",
                span { class: "fd-dot", style: "background: {colors.text_secondary};" }
                span { class: "fd-dot", style: "background: {colors.text_secondary};" }
                span { class: "fd-dot", style: "background: {colors.text_secondary};" }
            }
        }
    });

    rsx! {
        div { class: "fd-chat",
            div { class: "fd-chat-header", style: "border-bottom-color: {colors.border};",
                div { class: "fd-chat-info",
                    div { class: "fd-chat-title",
                        span { class: "fd-chat-name", style: "color: {colors.text};", "Family Chat" }
                        span { style: "color: {PRIMARY.s600};", "🛡" }
                    }
                    span { class: "fd-chat-count", style: "color: {colors.text_secondary};",
                        "{FAMILY_MEMBER_COUNT} members • {FAMILY_ONLINE_COUNT} online"
                    }
                }
                button { class: "fd-icon-button", style: "color: {colors.icon};", title: "Video call", "📹" }
                button { class: "fd-icon-button", style: "color: {colors.icon};", title: "Details", "ⓘ" }
            }
            div { class: "fd-messages",
                for message in SAMPLE_MESSAGES.iter() {
                    MessageBubble {
                        key: "{message.id}",
                        message: message.clone(),
                        on_press: move |id: String| log::info!("Message pressed: {}", id),
                        on_long_press: move |id: String| log::info!("Message long pressed: {}", id),
                    }
                }
                {typing}
                div {
                    class: "fd-messages-end",
                    onmounted: move |evt| async move {
                        if let Err(e) = evt.scroll_to(ScrollBehavior::Instant).await {
                            log::debug!("Could not scroll chat to the bottom: {:?}", e);
                        }
                    },
                }
            }
            div { class: "fd-input-bar", style: "background: {colors.background}; border-top-color: {colors.border};",
                button { class: "fd-icon-button", style: "color: {PRIMARY.s600};", title: "Attach", "⊕" }
                div { class: "fd-input", style: "background: {colors.background_secondary};",
                    textarea {
                        class: "fd-textarea",
                        style: "color: {colors.text};",
                        placeholder: "Type a message...",
                        rows: "1",
                        maxlength: "{MAX_MESSAGE_LENGTH}",
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
                                evt.prevent_default();
                                send();
                            }
                        },
                    }
                    button { class: "fd-icon-button", style: "color: {colors.icon};", title: "Emoji", "☺" }
                }
                if can_send {
                    button {
                        class: "fd-send",
                        style: "background: {PRIMARY.s600}; color: {WHITE};",
                        onclick: move |_| send(),
                        "➤"
                    }
                } else {
                    button { class: "fd-icon-button", style: "color: {PRIMARY.s600};", title: "Voice message", "🎤" }
                }
            }
        }
    }
}
