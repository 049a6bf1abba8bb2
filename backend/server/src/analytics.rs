use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::{models::CaseReport, policy::ALERT_WINDOW_DAYS};

/// Headline totals for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub today_total: i64,
    pub week_total: i64,
    pub total: i64,
    pub report_count: usize,
}

/// Whole days between `now` and midnight UTC of `date`, rounded up, in either direction.
fn days_apart(now: DateTime<Utc>, date: NaiveDate) -> u64 {
    let day = Duration::days(1).num_milliseconds().unsigned_abs();
    let gap = (now - date.and_time(NaiveTime::MIN).and_utc())
        .num_milliseconds()
        .unsigned_abs();

    gap.div_ceil(day)
}

/// `week_total` counts reports dated at most seven started days from `now` on either side.
/// Once `now` is past midnight, a report dated exactly a week back falls outside.
pub fn summarize(reports: &[CaseReport], now: DateTime<Utc>) -> Summary {
    let today = now.date_naive();

    reports.iter().fold(Summary::default(), |mut summary, report| {
        let distance = days_apart(now, report.timestamp);

        if report.timestamp == today {
            summary.today_total += report.cases;
        }
        if distance <= ALERT_WINDOW_DAYS.unsigned_abs() {
            summary.week_total += report.cases;
        }

        summary.total += report.cases;
        summary.report_count += 1;
        summary
    })
}
