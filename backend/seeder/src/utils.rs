use chrono::{Duration, NaiveDate, Utc};

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn format(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Every date from `days_before` days ago to `days_after` days ahead, oldest first.
pub fn date_range(today: NaiveDate, days_before: u32, days_after: u32) -> Vec<NaiveDate> {
    (-i64::from(days_before)..=i64::from(days_after))
        .map(|offset| today + Duration::days(offset))
        .collect()
}

pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}
