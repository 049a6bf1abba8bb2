use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::{
    models::{Alert, AlertSeverity, CaseReport},
    policy::{ALERT_WINDOW_DAYS, is_alert_worthy},
};

/// Earliest instant inside the rolling window ending at `now`.
pub fn window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(ALERT_WINDOW_DAYS)
}

/// A report date stands for midnight UTC of that day.
pub fn in_window(date: NaiveDate, start: DateTime<Utc>) -> bool {
    date.and_time(NaiveTime::MIN).and_utc() >= start
}

/// One high-severity alert per disease whose total over the last seven days exceeds the alert
/// threshold. Alerts are ordered by disease name.
///
/// Ids and timestamps come from `now`, so two calls over the same data produce equal content
/// under different ids.
pub fn compute_alerts(reports: &[CaseReport], now: DateTime<Utc>) -> Vec<Alert> {
    let start = window_start(now);

    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();
    for report in reports.iter().filter(|r| in_window(r.timestamp, start)) {
        *totals.entry(report.disease.as_str()).or_default() += report.cases;
    }

    totals
        .into_iter()
        .filter(|(_, total)| is_alert_worthy(*total))
        .map(|(disease, total)| Alert {
            id: format!("{disease}-{}", now.timestamp_millis()),
            message: format!("Severe {disease} outbreak with {total} cases"),
            severity: AlertSeverity::High,
            timestamp: now,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn report(disease: &str, cases: i64, days_ago: i64) -> CaseReport {
        CaseReport {
            id: format!("{disease}-{days_ago}"),
            disease: disease.to_string(),
            city: "Delhi".to_string(),
            cases,
            timestamp: (now() - Duration::days(days_ago)).date_naive(),
            lat: 28.6139,
            lng: 77.209,
            created_at: now(),
        }
    }

    #[test]
    fn test_exactly_threshold_is_quiet() {
        let reports = vec![report("Dengue", 600, 1), report("Dengue", 400, 3)];

        assert!(compute_alerts(&reports, now()).is_empty());
    }

    #[test]
    fn test_above_threshold_alerts_once() {
        let reports = vec![report("Dengue", 600, 1), report("Dengue", 401, 3)];

        let alerts = compute_alerts(&reports, now());
        assert_eq!(alerts.len(), 1);

        let alert = &alerts[0];
        assert_eq!(alert.message, "Severe Dengue outbreak with 1001 cases");
        assert_eq!(alert.severity, AlertSeverity::High);
        assert_eq!(alert.timestamp, now());
        assert_eq!(alert.id, format!("Dengue-{}", now().timestamp_millis()));
    }

    #[test]
    fn test_old_reports_are_ignored() {
        let reports = vec![
            report("Cholera", 900, 2),
            report("Cholera", 5000, 8),
            report("Cholera", 200, 6),
        ];

        let alerts = compute_alerts(&reports, now());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].message, "Severe Cholera outbreak with 1100 cases");
    }

    #[test]
    fn test_boundary_day_excluded_after_midnight() {
        let reports = vec![report("Dengue", 5000, 7)];

        assert!(compute_alerts(&reports, now()).is_empty());
    }

    #[test]
    fn test_boundary_day_included_at_midnight() {
        let midnight = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let reports = vec![report("Dengue", 5000, 7)];

        assert_eq!(compute_alerts(&reports, midnight).len(), 1);
    }

    #[test]
    fn test_grouped_per_disease() {
        let reports = vec![
            report("Malaria", 800, 0),
            report("Typhoid", 800, 0),
            report("malaria", 800, 0),
            report("Typhoid", 300, 4),
        ];

        let alerts = compute_alerts(&reports, now());
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].message.starts_with("Severe Typhoid"));
    }

    #[test]
    fn test_identity_not_stable_across_calls() {
        let reports = vec![report("Influenza", 2000, 0)];
        let later = now() + Duration::milliseconds(5);

        let first = compute_alerts(&reports, now());
        let second = compute_alerts(&reports, later);

        assert_eq!(first[0].message, second[0].message);
        assert_ne!(first[0].id, second[0].id);
    }

    #[test]
    fn test_window_start() {
        let start = window_start(now());

        assert_eq!(start, Utc.with_ymd_and_hms(2024, 6, 8, 12, 0, 0).unwrap());
        assert!(!in_window(NaiveDate::from_ymd_opt(2024, 6, 8).unwrap(), start));
        assert!(in_window(NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(), start));
    }
}
