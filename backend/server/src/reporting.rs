//! # Reporting workflow
//!
//! Turns one submitted report into a stored [`CaseReport`]:
//!
//! 1. Reject when disease, city, cases or timestamp is absent or blank.
//! 2. Resolve the city against the registry, rejecting unknown names.
//! 3. Assign an id from the creation time.
//! 4. Copy the registry coordinates onto the report.
//! 5. Insert it. Storage failures come back unchanged, nothing is retried.
//!
//! Disease names are free text and the report date may be any valid date.
use chrono::{DateTime, NaiveDate, Utc};
use registry::{CityEntry, CityRegistry};
use tracing::debug;

use crate::{
    database::CaseStore,
    error::{AppError, ValidationError},
    models::{CaseReport, NewCase},
    utils::{IdGenerator, parse_date, present},
};

/// A submission that passed validation, with its city resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidReport {
    pub disease: String,
    pub city: String,
    pub cases: i64,
    pub timestamp: NaiveDate,
    pub location: &'static CityEntry,
}

pub fn validate(input: NewCase, cities: &CityRegistry) -> Result<ValidReport, ValidationError> {
    let NewCase {
        disease,
        city,
        cases,
        timestamp,
    } = input;

    let (Some(disease), Some(city), Some(cases), Some(timestamp)) =
        (present(disease), present(city), cases, present(timestamp))
    else {
        return Err(ValidationError::MissingFields);
    };

    let location = cities
        .resolve(&city)
        .ok_or(ValidationError::InvalidCity)?;
    let timestamp = parse_date(&timestamp).ok_or(ValidationError::InvalidTimestamp)?;

    Ok(ValidReport {
        disease,
        city,
        cases: i64::from(cases),
        timestamp,
        location,
    })
}

pub fn build_report(valid: ValidReport, ids: &IdGenerator, now: DateTime<Utc>) -> CaseReport {
    CaseReport {
        id: ids.next(now),
        disease: valid.disease,
        city: valid.city,
        cases: valid.cases,
        timestamp: valid.timestamp,
        lat: valid.location.lat,
        lng: valid.location.lng,
        created_at: now,
    }
}

pub async fn submit(
    store: &CaseStore,
    cities: &CityRegistry,
    ids: &IdGenerator,
    input: NewCase,
    now: DateTime<Utc>,
) -> Result<CaseReport, AppError> {
    let valid = validate(input, cities)?;
    let report = build_report(valid, ids, now);

    store.insert(&report).await?;

    debug!(
        "Stored report {} ({} x{} in {})",
        report.id, report.disease, report.cases, report.city
    );
    Ok(report)
}
