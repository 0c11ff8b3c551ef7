use chrono::{ DateTime, Local, TimeZone, Utc };
use dioxus::prelude::*;

use crate::components::{ DateSeparator, FabSize, FloatingActionButton, MemoryCard, TimelineHeader };
use crate::data::time::{ time_bucket, TimeBucket };
use crate::data::{ Memory, MemoryFilter, ACTIVE_MEMBERS, FAMILY_MEMBER_COUNT, FAMILY_NAME, SAMPLE_MEMORIES };
use crate::routes::Route;

/// Groups memories under date separators, newest bucket first. Empty buckets
/// are dropped and the input order is kept inside each bucket.
pub fn bucketed<Tz: TimeZone>(
    memories: &[&Memory],
    now: DateTime<Utc>,
    tz: &Tz
) -> Vec<(TimeBucket, Vec<Memory>)> {
    let mut sections: Vec<(TimeBucket, Vec<Memory>)> = Vec::new();
    for memory in memories {
        let bucket = time_bucket(memory.posted_at, now, tz);
        match sections.iter_mut().find(|(b, _)| *b == bucket) {
            Some((_, list)) => list.push((*memory).clone()),
            None => sections.push((bucket, vec![(*memory).clone()])),
        }
    }
    sections.sort_by_key(|(bucket, _)| *bucket);
    sections
}

#[component]
pub fn Timeline() -> Element {
    let mut filter = use_signal(MemoryFilter::default);
    let navigator = use_navigator();

    let visible = filter().apply(&SAMPLE_MEMORIES);
    let sections: Vec<(String, Vec<Memory>)> = bucketed(&visible, Utc::now(), &Local)
        .into_iter()
        .map(|(bucket, memories)| (bucket.label().to_string(), memories))
        .collect();
    let empty = sections.is_empty();

    rsx! {
        div { class: "fd-timeline",
            TimelineHeader {
                family_name: FAMILY_NAME.to_string(),
                member_count: FAMILY_MEMBER_COUNT,
                active_members: ACTIVE_MEMBERS.clone(),
                current_filter: filter(),
                on_filter_change: move |next: MemoryFilter| {
                    log::info!("Timeline filter: {}", next);
                    filter.set(next);
                },
                on_settings_press: move |_| {
                    navigator.push(Route::Settings);
                },
                on_members_press: move |_| log::info!("Members pressed"),
            }
            div { class: "fd-timeline-scroll",
                if empty {
                    p { class: "fd-empty", "Nothing here yet." }
                }
                for (label, memories) in sections {
                    TimelineSection { key: "{label}", label: label.clone(), memories: memories.clone() }
                }
                div { class: "fd-bottom-spacer" }
            }
            div { class: "fd-fab-anchor",
                FloatingActionButton {
                    on_press: move |_| log::info!("FAB pressed - Create new memory"),
                    icon: "♥".to_string(),
                    size: FabSize::Medium,
                }
            }
        }
    }
}

#[component]
fn TimelineSection(label: String, memories: Vec<Memory>) -> Element {
    rsx! {
        DateSeparator { label: label }
        for memory in memories {
            MemoryCard {
                key: "{memory.id}",
                memory: memory.clone(),
                on_press: move |id: String| log::info!("Memory pressed: {}", id),
                on_favorite: move |id: String| log::info!("Favorite pressed: {}", id),
                on_react: move |id: String| log::info!("React pressed: {}", id),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn posted(id: &str, at: DateTime<Utc>) -> Memory {
        Memory {
            id: id.to_string(),
            author_name: "Dad".to_string(),
            author_avatar: None,
            posted_at: at,
            content: String::new(),
            media_url: None,
            media: None,
            reactions: vec![],
            is_favorited: false,
        }
    }

    #[test]
    fn sections_follow_bucket_order() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 18, 0, 0).unwrap();
        let memories = [
            posted("old", now - Duration::days(10)),
            posted("a", now - Duration::hours(2)),
            posted("week", now - Duration::days(2)),
            posted("b", now - Duration::hours(4)),
        ];
        let refs: Vec<&Memory> = memories.iter().collect();
        let sections = bucketed(&refs, now, &Utc);

        let shape: Vec<(TimeBucket, Vec<&str>)> = sections
            .iter()
            .map(|(bucket, list)| (*bucket, list.iter().map(|m| m.id.as_str()).collect()))
            .collect();
        assert_eq!(shape, vec![
            (TimeBucket::Today, vec!["a", "b"]),
            (TimeBucket::ThisWeek, vec!["week"]),
            (TimeBucket::Earlier, vec!["old"]),
        ]);
    }

    #[test]
    fn no_memories_no_sections() {
        assert!(bucketed(&[], Utc::now(), &Local).is_empty());
    }
}
