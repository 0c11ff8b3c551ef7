use dioxus::prelude::*;

use crate::data::FamilyMember;
use crate::theme::{ GRAY, PRIMARY, SUCCESS, WHITE };
use crate::utils::use_theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl AvatarSize {
    pub fn pixels(self) -> u32 {
        match self {
            AvatarSize::Small => 32,
            AvatarSize::Medium => 40,
            AvatarSize::Large => 56,
            AvatarSize::XLarge => 80,
        }
    }

    pub fn font_size(self) -> u32 {
        match self {
            AvatarSize::Small => 14,
            AvatarSize::Medium => 18,
            AvatarSize::Large => 24,
            AvatarSize::XLarge => 32,
        }
    }
}

/// First letter of each of the first two words, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

pub fn overflow_count(total: usize, max: usize) -> usize {
    total.saturating_sub(max)
}

#[component]
pub fn FamilyAvatar(
    name: String,
    image_url: Option<String>,
    #[props(default)] size: AvatarSize,
    #[props(default)] show_name: bool,
    #[props(default)] is_online: bool,
    on_press: Option<EventHandler<()>>,
    background_color: Option<String>,
) -> Element {
    let px = size.pixels();
    let font = size.font_size();
    let dot = px / 4;
    let ring = (px / 20).max(1);

    let face = match image_url {
        Some(url) => rsx! {
            img {
                class: "fd-avatar-img",
                src: "{url}",
                alt: "{name}",
                width: "{px}",
                height: "{px}",
            }
        },
        None => {
            let (bg, fg) = match &background_color {
                Some(bg) => (bg.clone(), WHITE),
                None => (PRIMARY.s200.to_string(), PRIMARY.s700),
            };
            let letters = initials(&name);
            rsx! {
                div {
                    class: "fd-avatar-initials",
                    style: "width: {px}px; height: {px}px; background: {bg}; color: {fg}; font-size: {font}px;",
                    "{letters}"
                }
            }
        }
    };

    rsx! {
        div { class: "fd-avatar",
            div {
                class: if on_press.is_some() { "fd-avatar-disc fd-pressable" } else { "fd-avatar-disc" },
                onclick: move |_| {
                    if let Some(handler) = on_press {
                        handler.call(());
                    }
                },
                {face}
                if is_online {
                    span {
                        class: "fd-avatar-online",
                        style: "width: {dot}px; height: {dot}px; border-width: {ring}px; background: {SUCCESS.s500};",
                    }
                }
            }
            if show_name {
                span { class: "fd-avatar-name", {first_name(&name).to_string()} }
            }
        }
    }
}

#[component]
pub fn AvatarGroup(
    avatars: Vec<FamilyMember>,
    #[props(default = 3)] max: usize,
    #[props(default = AvatarSize::Small)] size: AvatarSize,
    on_press_more: Option<EventHandler<()>>,
) -> Element {
    let theme = use_theme();
    let colors = theme.colors();
    let px = size.pixels();
    let overlap = px * 3 / 10;
    let remaining = overflow_count(avatars.len(), max);
    let shown: Vec<FamilyMember> = avatars.into_iter().take(max).collect();
    let depth = shown.len();
    let stacked: Vec<(usize, String, FamilyMember)> = shown
        .into_iter()
        .enumerate()
        .map(|(index, member)| {
            let offset = if index == 0 { 0 } else { overlap };
            (index, format!("margin-left: -{}px; z-index: {};", offset, depth - index), member)
        })
        .collect();

    rsx! {
        div { class: "fd-avatar-group",
            for (index, style, member) in stacked {
                div {
                    key: "{index}",
                    class: "fd-avatar-group-item",
                    style: style,
                    FamilyAvatar { name: member.name, image_url: member.image_url, size: size }
                }
            }
            if remaining > 0 {
                button {
                    class: "fd-avatar-more",
                    style: "width: {px}px; height: {px}px; margin-left: -{overlap}px; background: {colors.background_secondary}; color: {colors.text}; border-color: {GRAY.s50};",
                    onclick: move |_| {
                        if let Some(handler) = on_press_more {
                            handler.call(());
                        }
                    },
                    "+{remaining}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_two_words() {
        assert_eq!(initials("Grandma Rose"), "GR");
        assert_eq!(initials("The Martinez Family"), "TM");
        assert_eq!(initials("dad"), "D");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn first_name_is_the_first_word() {
        assert_eq!(first_name("Cousin Sarah"), "Cousin");
        assert_eq!(first_name("Mom"), "Mom");
        assert_eq!(first_name(""), "");
    }

    #[test]
    fn overflow_counts_hidden_avatars() {
        assert_eq!(overflow_count(5, 3), 2);
        assert_eq!(overflow_count(2, 3), 0);
    }

    #[test]
    fn size_table() {
        let sizes = [AvatarSize::Small, AvatarSize::Medium, AvatarSize::Large, AvatarSize::XLarge];
        let px: Vec<u32> = sizes.iter().map(|s| s.pixels()).collect();
        let font: Vec<u32> = sizes.iter().map(|s| s.font_size()).collect();
        assert_eq!(px, [32, 40, 56, 80]);
        assert_eq!(font, [14, 18, 24, 32]);
    }
}
