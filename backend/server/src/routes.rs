use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{SubsecRound, Utc};
use registry::{COMMON_DISEASES, CityEntry, Disease};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::{
    analytics::Summary,
    error::{AppError, ValidationError},
    models::{
        AggregatedLocation, Alert, CaseReport, CityQuery, HistoricalQuery, NewCase, ResetCommand,
    },
    operations, reporting,
    state::AppState,
};

type SharedState = State<Arc<AppState>>;

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn list_cases_handler(
    State(state): SharedState,
) -> Result<Json<Vec<CaseReport>>, AppError> {
    operations::list_cases(&state.store).await.map(Json)
}

pub async fn submit_case_handler(
    State(state): SharedState,
    payload: Result<Json<NewCase>, JsonRejection>,
) -> Result<Json<CaseReport>, AppError> {
    let Json(input) = payload.map_err(|e| {
        warn!("Unreadable case payload: {e}");
        ValidationError::MalformedPayload
    })?;

    let now = Utc::now().trunc_subsecs(3);
    let report = reporting::submit(&state.store, &state.cities, &state.ids, input, now).await?;

    Ok(Json(report))
}

pub async fn historical_handler(
    State(state): SharedState,
    Query(query): Query<HistoricalQuery>,
) -> Result<Json<Vec<CaseReport>>, AppError> {
    operations::list_historical(&state.store, query)
        .await
        .map(Json)
}

pub async fn alerts_handler(State(state): SharedState) -> Result<Json<Vec<Alert>>, AppError> {
    operations::list_alerts(&state.store, Utc::now())
        .await
        .map(Json)
}

pub async fn map_handler(
    State(state): SharedState,
) -> Result<Json<Vec<AggregatedLocation>>, AppError> {
    operations::map_view(&state.store).await.map(Json)
}

pub async fn analytics_handler(State(state): SharedState) -> Result<Json<Summary>, AppError> {
    operations::analytics(&state.store, Utc::now())
        .await
        .map(Json)
}

pub async fn cities_handler(
    State(state): SharedState,
    Query(query): Query<CityQuery>,
) -> Json<Vec<&'static CityEntry>> {
    Json(state.cities.search(&query.query))
}

pub async fn diseases_handler() -> Json<&'static [Disease]> {
    let diseases: &'static [Disease] = &COMMON_DISEASES;

    Json(diseases)
}

pub async fn reset_handler(
    State(state): SharedState,
    payload: Result<Json<ResetCommand>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let command = payload
        .map(|Json(reset)| reset.command)
        .map_err(|_| ValidationError::InvalidCommand)?;

    let removed = operations::reset_store(&state.store, &command).await?;
    info!("Reset requested, {removed} reports removed");

    Ok(Json(json!({ "message": "Database reset successful" })))
}
