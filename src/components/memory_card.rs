use chrono::Utc;
use dioxus::prelude::*;

use crate::data::{ time::relative_label, MediaKind, Memory };
use crate::theme::{ PRIMARY, SECONDARY };
use crate::utils::use_theme;

/// Label on the react action: the reaction total, or "React" when there are none.
pub fn react_label(memory: &Memory) -> String {
    match memory.reaction_total() {
        0 => "React".to_string(),
        total => total.to_string(),
    }
}

#[component]
pub fn MemoryCard(
    memory: Memory,
    on_press: Option<EventHandler<String>>,
    on_favorite: Option<EventHandler<String>>,
    on_react: Option<EventHandler<String>>,
) -> Element {
    let theme = use_theme();
    let colors = theme.colors();
    let posted = relative_label(memory.posted_at, Utc::now());
    let reacts = react_label(&memory);
    let favorite_color = if memory.is_favorited { SECONDARY.s600 } else { colors.text_secondary };

    let author = match &memory.author_avatar {
        Some(url) => rsx! { img { class: "fd-card-avatar", src: "{url}", alt: "{memory.author_name}" } },
        None => {
            let initial: String = memory.author_name.chars().next().into_iter().flat_map(char::to_uppercase).collect();
            rsx! {
                div {
                    class: "fd-card-avatar fd-card-avatar-placeholder",
                    style: "background: {PRIMARY.s200}; color: {PRIMARY.s700};",
                    "{initial}"
                }
            }
        }
    };

    let media = match (memory.media, &memory.media_url) {
        (Some(MediaKind::Photo), Some(url)) => rsx! {
            div { class: "fd-card-media",
                img { src: "{url}", alt: "Shared photo" }
            }
        },
        (Some(MediaKind::Video), _) => rsx! {
            div { class: "fd-card-media fd-video-placeholder",
                style: "background: {colors.background_secondary}; color: {colors.icon};",
                "▶"
            }
        },
        _ => rsx! {},
    };

    let id = memory.id.clone();
    let favorite_id = memory.id.clone();
    let react_id = memory.id.clone();

    rsx! {
        article {
            class: "fd-card",
            style: "background: {colors.card_background}; border-color: {colors.border};",
            onclick: move |_| {
                if let Some(handler) = on_press {
                    handler.call(id.clone());
                }
            },
            header { class: "fd-card-header",
                div { class: "fd-card-author",
                    {author}
                    div {
                        div { class: "fd-card-author-name", style: "color: {colors.text};", "{memory.author_name}" }
                        div { class: "fd-card-timestamp", style: "color: {colors.text_secondary};", "{posted}" }
                    }
                }
                if memory.is_favorited {
                    span {
                        class: "fd-favorite-badge",
                        style: "background: {SECONDARY.s100}; color: {SECONDARY.s600};",
                        "♥"
                    }
                }
            }
            p { class: "fd-card-content", style: "color: {colors.text};", "{memory.content}" }
            {media}
            footer { class: "fd-card-actions", style: "border-top-color: {colors.border};",
                button {
                    class: "fd-card-action",
                    style: "color: {colors.text_secondary};",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        if let Some(handler) = on_react {
                            handler.call(react_id.clone());
                        }
                    },
                    "♡ {reacts}"
                }
                button {
                    class: "fd-card-action",
                    style: "color: {favorite_color};",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        if let Some(handler) = on_favorite {
                            handler.call(favorite_id.clone());
                        }
                    },
                    if memory.is_favorited { "♥ Favorited" } else { "♡ Favorite" }
                }
                button {
                    class: "fd-card-action",
                    style: "color: {colors.text_secondary};",
                    onclick: move |evt| evt.stop_propagation(),
                    "↗ Share"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SAMPLE_MEMORIES;

    #[test]
    fn react_label_shows_total_or_prompt() {
        let mut memory = SAMPLE_MEMORIES[1].clone();
        assert_eq!(react_label(&memory), "5");
        memory.reactions.clear();
        assert_eq!(react_label(&memory), "React");
    }
}
