use std::fmt::{ Display, Formatter };

use chrono::{ DateTime, NaiveTime, Utc };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reaction {
    pub kind: String,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Memory {
    pub id: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub posted_at: DateTime<Utc>,
    pub content: String,
    pub media_url: Option<String>,
    pub media: Option<MediaKind>,
    pub reactions: Vec<Reaction>,
    pub is_favorited: bool,
}

impl Memory {
    pub fn reaction_total(&self) -> u32 {
        self.reactions.iter().map(|r| r.count).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MemoryFilter {
    #[default]
    All,
    Favorites,
    Photos,
    Videos,
}

impl MemoryFilter {
    pub const ALL: [MemoryFilter; 4] = [
        MemoryFilter::All,
        MemoryFilter::Favorites,
        MemoryFilter::Photos,
        MemoryFilter::Videos,
    ];

    pub fn matches(self, memory: &Memory) -> bool {
        match self {
            MemoryFilter::All => true,
            MemoryFilter::Favorites => memory.is_favorited,
            MemoryFilter::Photos => memory.media == Some(MediaKind::Photo),
            MemoryFilter::Videos => memory.media == Some(MediaKind::Video),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MemoryFilter::All => "All",
            MemoryFilter::Favorites => "Favorites",
            MemoryFilter::Photos => "Photos",
            MemoryFilter::Videos => "Videos",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MemoryFilter::All => "🏠",
            MemoryFilter::Favorites => "♥",
            MemoryFilter::Photos => "🖼",
            MemoryFilter::Videos => "🎥",
        }
    }

    pub fn apply<'a>(self, memories: &'a [Memory]) -> Vec<&'a Memory> {
        memories.iter().filter(|m| self.matches(m)).collect()
    }
}

impl Display for MemoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FamilyMember {
    pub name: String,
    pub image_url: Option<String>,
}

impl FamilyMember {
    pub fn new(name: &str, image_url: Option<&str>) -> Self {
        Self { name: name.to_string(), image_url: image_url.map(str::to_string) }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MessageKind {
    Text,
    Voice { duration: Option<String> },
    Image { media_url: Option<String> },
    Video,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeliveryStatus {
    Sending,
    #[default]
    Sent,
    Delivered,
    Read,
}

impl DeliveryStatus {
    pub fn icon(self) -> &'static str {
        match self {
            DeliveryStatus::Sending => "🕓",
            DeliveryStatus::Sent => "✓",
            DeliveryStatus::Delivered | DeliveryStatus::Read => "✓✓",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub body: String,
    pub sent_at: NaiveTime,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub is_own: bool,
    pub kind: MessageKind,
    pub status: DeliveryStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory(id: &str, media: Option<MediaKind>, is_favorited: bool) -> Memory {
        Memory {
            id: id.to_string(),
            author_name: "Mom".to_string(),
            author_avatar: None,
            posted_at: Utc::now(),
            content: String::new(),
            media_url: None,
            media,
            reactions: vec![],
            is_favorited,
        }
    }

    #[test]
    fn filters_select_matching_memories() {
        let memories = vec![
            memory("1", Some(MediaKind::Photo), true),
            memory("2", None, false),
            memory("3", Some(MediaKind::Video), false),
            memory("4", Some(MediaKind::Photo), false),
        ];
        let ids = |filter: MemoryFilter| -> Vec<String> {
            filter.apply(&memories).iter().map(|m| m.id.clone()).collect()
        };

        assert_eq!(ids(MemoryFilter::All), ["1", "2", "3", "4"]);
        assert_eq!(ids(MemoryFilter::Favorites), ["1"]);
        assert_eq!(ids(MemoryFilter::Photos), ["1", "4"]);
        assert_eq!(ids(MemoryFilter::Videos), ["3"]);
    }

    #[test]
    fn reaction_total_sums_counts() {
        let mut m = memory("1", None, false);
        assert_eq!(m.reaction_total(), 0);
        m.reactions = vec![
            Reaction { kind: "heart".into(), count: 4 },
            Reaction { kind: "laugh".into(), count: 6 },
        ];
        assert_eq!(m.reaction_total(), 10);
    }

    #[test]
    fn read_and_delivered_share_the_double_check() {
        assert_eq!(DeliveryStatus::Read.icon(), DeliveryStatus::Delivered.icon());
        assert_ne!(DeliveryStatus::Sent.icon(), DeliveryStatus::Delivered.icon());
        assert_eq!(DeliveryStatus::default(), DeliveryStatus::Sent);
    }
}
