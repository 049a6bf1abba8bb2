//! Pull-based request surface. Every call reads the store fresh; nothing is cached.

use chrono::{DateTime, Utc};

use crate::{
    aggregation::aggregate,
    alerts::compute_alerts,
    analytics::{Summary, summarize},
    database::CaseStore,
    error::{AppError, ValidationError},
    models::{AggregatedLocation, Alert, CaseReport, HistoricalQuery},
    utils::{parse_date, present},
};

pub const RESET_PHRASE: &str = "deletedata";

pub async fn list_cases(store: &CaseStore) -> Result<Vec<CaseReport>, AppError> {
    Ok(store.list_all().await?)
}

pub async fn list_historical(
    store: &CaseStore,
    query: HistoricalQuery,
) -> Result<Vec<CaseReport>, AppError> {
    let (Some(start), Some(end)) = (present(query.start_date), present(query.end_date)) else {
        return Err(ValidationError::MissingDateRange.into());
    };

    let start = parse_date(&start).ok_or(ValidationError::InvalidDate)?;
    let end = parse_date(&end).ok_or(ValidationError::InvalidDate)?;

    Ok(store.list_by_range(start, end).await?)
}

pub async fn list_alerts(store: &CaseStore, now: DateTime<Utc>) -> Result<Vec<Alert>, AppError> {
    let reports = store.list_all().await?;

    Ok(compute_alerts(&reports, now))
}

pub async fn map_view(store: &CaseStore) -> Result<Vec<AggregatedLocation>, AppError> {
    let reports = store.list_all().await?;

    Ok(aggregate(&reports))
}

pub async fn analytics(store: &CaseStore, now: DateTime<Utc>) -> Result<Summary, AppError> {
    let reports = store.list_all().await?;

    Ok(summarize(&reports, now))
}

/// Wipes the store only when `phrase` is exactly [`RESET_PHRASE`].
pub async fn reset_store(store: &CaseStore, phrase: &str) -> Result<u64, AppError> {
    if phrase != RESET_PHRASE {
        return Err(ValidationError::InvalidCommand.into());
    }

    Ok(store.wipe_all().await?)
}
