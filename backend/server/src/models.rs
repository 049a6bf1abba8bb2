//! Wire and storage shapes.
//!
//! [`CaseReport`] is the only persisted row. [`AggregatedLocation`], [`Alert`] and
//! [`Summary`](crate::analytics::Summary) are derived on every read and never stored.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::policy::Severity;

/// One submitted report for one city and date.
///
/// `lat`/`lng` are copied from the city registry at insertion and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct CaseReport {
    pub id: String,
    pub disease: String,
    pub city: String,
    pub cases: i64,
    pub timestamp: NaiveDate,
    pub lat: f64,
    pub lng: f64,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/cases`. Every field is optional so absence maps to a validation error
/// instead of a transport rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCase {
    pub disease: Option<String>,
    pub city: Option<String>,
    pub cases: Option<u32>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoricalQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CityQuery {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetCommand {
    #[serde(default)]
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseTally {
    pub cases: i64,
    pub last_update: NaiveDate,
}

/// All reports sharing one exact coordinate pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedLocation {
    pub city: String,
    pub lat: f64,
    pub lng: f64,
    pub diseases: BTreeMap<String, DiseaseTally>,
    pub total_cases: i64,
    pub severity: Severity,
    pub color: &'static str,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub id: String,
    pub message: String,
    pub severity: AlertSeverity,
    pub timestamp: DateTime<Utc>,
}
