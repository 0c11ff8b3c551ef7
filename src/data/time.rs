use chrono::{ DateTime, Duration, NaiveTime, TimeZone, Utc };

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeBucket {
    Today,
    ThisWeek,
    Earlier,
}

impl TimeBucket {
    pub fn label(self) -> &'static str {
        match self {
            TimeBucket::Today => "Today",
            TimeBucket::ThisWeek => "This Week",
            TimeBucket::Earlier => "Earlier",
        }
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 { format!("1 {} ago", unit) } else { format!("{} {}s ago", n, unit) }
}

/// "2 hours ago", "Yesterday", "3 days ago", then a short date.
pub fn relative_label(posted: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(posted);
    if elapsed < Duration::minutes(1) {
        return "Just now".to_string();
    }
    if elapsed < Duration::hours(1) {
        return plural(elapsed.num_minutes(), "minute");
    }
    if elapsed < Duration::hours(24) {
        return plural(elapsed.num_hours(), "hour");
    }
    match elapsed.num_days() {
        1 => "Yesterday".to_string(),
        n if n < 7 => format!("{} days ago", n),
        _ => posted.format("%b %-d").to_string(),
    }
}

/// "Today" means the same calendar day in `tz`, which callers set to the
/// viewer's zone (`chrono::Local`).
pub fn time_bucket<Tz: TimeZone>(posted: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> TimeBucket {
    if posted.with_timezone(tz).date_naive() == now.with_timezone(tz).date_naive() {
        TimeBucket::Today
    } else if now.signed_duration_since(posted) < Duration::days(7) {
        TimeBucket::ThisWeek
    } else {
        TimeBucket::Earlier
    }
}

pub fn clock_label(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn labels_scale_with_age() {
        let now = noon();
        assert_eq!(relative_label(now - Duration::seconds(20), now), "Just now");
        assert_eq!(relative_label(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_label(now - Duration::minutes(45), now), "45 minutes ago");
        assert_eq!(relative_label(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(relative_label(now - Duration::hours(30), now), "Yesterday");
        assert_eq!(relative_label(now - Duration::days(3), now), "3 days ago");
        assert_eq!(relative_label(now - Duration::days(20), now), "May 26");
    }

    #[test]
    fn buckets_split_on_calendar_day_then_week() {
        let now = noon();
        assert_eq!(time_bucket(now - Duration::hours(5), now, &Utc), TimeBucket::Today);
        assert_eq!(time_bucket(now - Duration::hours(13), now, &Utc), TimeBucket::ThisWeek);
        assert_eq!(time_bucket(now - Duration::days(6), now, &Utc), TimeBucket::ThisWeek);
        assert_eq!(time_bucket(now - Duration::days(8), now, &Utc), TimeBucket::Earlier);
    }

    #[test]
    fn today_follows_the_viewers_calendar_day() {
        // 02:00 UTC is 19:00 the previous evening in UTC-7.
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 2, 0, 0).unwrap();
        let posted = now - Duration::hours(5);
        let pacific = FixedOffset::west_opt(7 * 3600).unwrap();

        assert_eq!(time_bucket(posted, now, &pacific), TimeBucket::Today);
        assert_eq!(time_bucket(posted, now, &Utc), TimeBucket::ThisWeek);

        // 20:00 UTC is already the next day in UTC+9.
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 20, 0, 0).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(time_bucket(now - Duration::hours(4), now, &tokyo), TimeBucket::Today);
        assert_eq!(time_bucket(now - Duration::hours(6), now, &tokyo), TimeBucket::ThisWeek);
        assert_eq!(time_bucket(now - Duration::hours(6), now, &Utc), TimeBucket::Today);
    }

    #[test]
    fn clock_uses_twelve_hour_format() {
        let t = NaiveTime::from_hms_opt(10, 23, 0).unwrap();
        assert_eq!(clock_label(t), "10:23 AM");
        let t = NaiveTime::from_hms_opt(14, 5, 0).unwrap();
        assert_eq!(clock_label(t), "2:05 PM");
    }
}
