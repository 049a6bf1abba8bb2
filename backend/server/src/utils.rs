use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, NaiveDate, Utc};

/// Accepts `YYYY-MM-DD` or an RFC 3339 datetime, keeping only the date.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|datetime| datetime.date_naive())
        })
}

/// `None` for absent or whitespace-only values.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Report ids from creation-time epoch milliseconds, bumped so they never repeat or go
/// backwards. Start from [`IdGenerator::resume_after`] to continue past ids already stored.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator whose ids all come after `last`.
    pub fn resume_after(last: i64) -> Self {
        Self {
            last: AtomicI64::new(last),
        }
    }

    pub fn next(&self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();

        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(millis.max(last + 1))
            })
            .unwrap_or_else(|last| last);

        millis.max(previous + 1).to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_date("2024-01-01"),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(
            parse_date("  2024-12-31 "),
            NaiveDate::from_ymd_opt(2024, 12, 31)
        );
    }

    #[test]
    fn test_parse_rfc3339() {
        assert_eq!(
            parse_date("2024-03-10T18:45:00Z"),
            NaiveDate::from_ymd_opt(2024, 3, 10)
        );
        assert_eq!(
            parse_date("2024-03-10T23:59:59+05:30"),
            NaiveDate::from_ymd_opt(2024, 3, 10)
        );
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("01/02/2024"), None);
    }

    #[test]
    fn test_present() {
        assert_eq!(present(None), None);
        assert_eq!(present(Some(String::new())), None);
        assert_eq!(present(Some("   ".to_string())), None);
        assert_eq!(present(Some("Dengue".to_string())), Some("Dengue".to_string()));
    }

    #[test]
    fn test_ids_strictly_increase() {
        let ids = IdGenerator::new();
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let millis = now.timestamp_millis();

        assert_eq!(ids.next(now), millis.to_string());
        assert_eq!(ids.next(now), (millis + 1).to_string());
        assert_eq!(ids.next(now), (millis + 2).to_string());

        let later = now + chrono::Duration::seconds(1);
        assert_eq!(ids.next(later), later.timestamp_millis().to_string());
    }

    #[test]
    fn test_resumed_ids_skip_past_last() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let ahead = now.timestamp_millis() + 5;

        let ids = IdGenerator::resume_after(ahead);
        assert_eq!(ids.next(now), (ahead + 1).to_string());

        let ids = IdGenerator::resume_after(0);
        assert_eq!(ids.next(now), now.timestamp_millis().to_string());
    }
}
