//! Case-count thresholds shared by map colouring, marker sizing and alerting.

use serde::Serialize;

pub const MEDIUM_RISK_THRESHOLD: i64 = 500;
pub const HIGH_RISK_THRESHOLD: i64 = 1000;

/// A disease's rolling total must strictly exceed this to raise an alert.
pub const ALERT_THRESHOLD: i64 = HIGH_RISK_THRESHOLD;
pub const ALERT_WINDOW_DAYS: i64 = 7;

pub const MIN_MARKER_RADIUS: f64 = 12.0;
pub const MAX_MARKER_RADIUS: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    #[serde(rename = "Low Risk")]
    LowRisk,
    #[serde(rename = "Medium Risk")]
    MediumRisk,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl Severity {
    pub fn classify(total: i64) -> Self {
        if total > HIGH_RISK_THRESHOLD {
            Severity::HighRisk
        } else if total > MEDIUM_RISK_THRESHOLD {
            Severity::MediumRisk
        } else {
            Severity::LowRisk
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Severity::LowRisk => "#22c55e",
            Severity::MediumRisk => "#eab308",
            Severity::HighRisk => "#ef4444",
        }
    }
}

/// Map marker radius: `log2(total) * 2` clamped to `[12, 25]`.
///
/// Totals of zero or below have no logarithm and get the floor radius.
pub fn marker_radius(total: i64) -> f64 {
    if total <= 0 {
        return MIN_MARKER_RADIUS;
    }

    ((total as f64).log2() * 2.0).clamp(MIN_MARKER_RADIUS, MAX_MARKER_RADIUS)
}

pub fn is_alert_worthy(total: i64) -> bool {
    total > ALERT_THRESHOLD
}
