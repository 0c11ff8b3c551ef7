use chrono::{ Duration, NaiveTime, Utc };
use lazy_static::lazy_static;

use super::model::*;

pub const FAMILY_NAME: &str = "The Martinez Family";
pub const FAMILY_MEMBER_COUNT: u32 = 12;
pub const FAMILY_ONLINE_COUNT: u32 = 5;

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn reactions(list: &[(&str, u32)]) -> Vec<Reaction> {
    list.iter().map(|(kind, count)| Reaction { kind: kind.to_string(), count: *count }).collect()
}

lazy_static! {
    pub static ref SAMPLE_MEMORIES: Vec<Memory> = {
        let now = Utc::now();
        vec![
            Memory {
                id: "1".to_string(),
                author_name: "Grandma Rose".to_string(),
                author_avatar: None,
                posted_at: now - Duration::hours(2),
                content: "Look who learned to ride a bike today! So proud of my little champion 🚴‍♂️".to_string(),
                media_url: Some("https://picsum.photos/400/300".to_string()),
                media: Some(MediaKind::Photo),
                reactions: reactions(&[("heart", 5)]),
                is_favorited: true,
            },
            Memory {
                id: "2".to_string(),
                author_name: "Dad".to_string(),
                author_avatar: None,
                posted_at: now - Duration::hours(5),
                content: "Family BBQ this weekend was amazing! Thanks everyone for coming. The kids had such a great time in the pool.".to_string(),
                media_url: None,
                media: None,
                reactions: reactions(&[("heart", 3), ("thumbs", 2)]),
                is_favorited: false,
            },
            Memory {
                id: "3".to_string(),
                author_name: "Mom".to_string(),
                author_avatar: None,
                posted_at: now - Duration::days(1),
                content: "Happy 8th birthday to our sunshine! Time flies so fast. Remember when you were just learning to walk? Now you're teaching your little brother! 🎂🎉".to_string(),
                media_url: Some("https://picsum.photos/400/400".to_string()),
                media: Some(MediaKind::Photo),
                reactions: reactions(&[("heart", 12)]),
                is_favorited: true,
            },
            Memory {
                id: "4".to_string(),
                author_name: "Uncle Mike".to_string(),
                author_avatar: None,
                posted_at: now - Duration::days(2),
                content: "Caught this beautiful sunset at the lake house. Wish you all could have been here!".to_string(),
                media_url: Some("https://picsum.photos/400/250".to_string()),
                media: Some(MediaKind::Photo),
                reactions: reactions(&[("heart", 7)]),
                is_favorited: false,
            },
            Memory {
                id: "5".to_string(),
                author_name: "Cousin Sarah".to_string(),
                author_avatar: None,
                posted_at: now - Duration::days(3),
                content: "Just wanted to share this funny video of the kids playing together last Christmas. They're growing up so fast! Miss you all.".to_string(),
                media_url: None,
                media: Some(MediaKind::Video),
                reactions: reactions(&[("heart", 4), ("laugh", 6)]),
                is_favorited: false,
            },
        ]
    };

    pub static ref ACTIVE_MEMBERS: Vec<FamilyMember> = vec![
        FamilyMember::new("Grandma Rose", Some("https://i.pravatar.cc/150?u=grandma")),
        FamilyMember::new("Dad", Some("https://i.pravatar.cc/150?u=dad")),
        FamilyMember::new("Mom", Some("https://i.pravatar.cc/150?u=mom")),
        FamilyMember::new("Uncle Mike", None),
        FamilyMember::new("Cousin Sarah", None),
    ];

    pub static ref TYPING_MEMBERS: Vec<FamilyMember> = vec![
        FamilyMember::new("Cousin Sarah", Some("https://i.pravatar.cc/150?u=sarah")),
    ];

    pub static ref SAMPLE_MESSAGES: Vec<ChatMessage> = vec![
        ChatMessage {
            id: "1".to_string(),
            body: "Hey everyone! Just wanted to check in and see how everyone is doing 😊".to_string(),
            sent_at: at(10, 23),
            author_name: "Mom".to_string(),
            author_avatar: Some("https://i.pravatar.cc/150?u=mom".to_string()),
            is_own: false,
            kind: MessageKind::Text,
            status: DeliveryStatus::Read,
        },
        ChatMessage {
            id: "2".to_string(),
            body: "Doing great! Just finished my morning run. How about you?".to_string(),
            sent_at: at(10, 25),
            author_name: "You".to_string(),
            author_avatar: None,
            is_own: true,
            kind: MessageKind::Text,
            status: DeliveryStatus::Read,
        },
        ChatMessage {
            id: "3".to_string(),
            body: "Good morning! I'm at the farmer's market. Look at these beautiful flowers!".to_string(),
            sent_at: at(10, 28),
            author_name: "Grandma Rose".to_string(),
            author_avatar: Some("https://i.pravatar.cc/150?u=grandma".to_string()),
            is_own: false,
            kind: MessageKind::Image { media_url: Some("https://picsum.photos/300/200".to_string()) },
            status: DeliveryStatus::Read,
        },
        ChatMessage {
            id: "4".to_string(),
            body: "Those are gorgeous! 🌻".to_string(),
            sent_at: at(10, 30),
            author_name: "You".to_string(),
            author_avatar: None,
            is_own: true,
            kind: MessageKind::Text,
            status: DeliveryStatus::Read,
        },
        ChatMessage {
            id: "5".to_string(),
            body: "Just recorded a message for little Timmy's birthday!".to_string(),
            sent_at: at(10, 32),
            author_name: "Uncle Mike".to_string(),
            author_avatar: None,
            is_own: false,
            kind: MessageKind::Voice { duration: Some("0:45".to_string()) },
            status: DeliveryStatus::Read,
        },
        ChatMessage {
            id: "6".to_string(),
            body: "That's so sweet! He's going to love it. Can't believe he's turning 8 already!".to_string(),
            sent_at: at(10, 35),
            author_name: "Mom".to_string(),
            author_avatar: Some("https://i.pravatar.cc/150?u=mom".to_string()),
            is_own: false,
            kind: MessageKind::Text,
            status: DeliveryStatus::Read,
        },
        ChatMessage {
            id: "7".to_string(),
            body: "Time flies! Remember when he was just learning to walk? 🥺".to_string(),
            sent_at: at(10, 36),
            author_name: "You".to_string(),
            author_avatar: None,
            is_own: true,
            kind: MessageKind::Text,
            status: DeliveryStatus::Delivered,
        },
        ChatMessage {
            id: "8".to_string(),
            body: "I found this old video of his first steps!".to_string(),
            sent_at: at(10, 38),
            author_name: "Dad".to_string(),
            author_avatar: Some("https://i.pravatar.cc/150?u=dad".to_string()),
            is_own: false,
            kind: MessageKind::Video,
            status: DeliveryStatus::Read,
        },
    ];
}
