//! Record endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult, ValidationFailure},
    models::{Record, RecordPayload},
    AppState,
};

use super::parse_leading_int;

/// Malformed ids are reported exactly like unknown ones
fn record_id(raw: &str) -> AppResult<i64> {
    parse_leading_int(raw).ok_or_else(|| AppError::NotFound(format!("Malformed record id {:?}", raw)))
}

/// Apply the name rule to a request body and return the accepted name
fn validated_name(payload: Result<Json<RecordPayload>, JsonRejection>) -> AppResult<String> {
    let Json(payload) = payload?;
    Ok(payload.validated_name()?)
}

/// List all records
#[utoipa::path(
    get,
    path = "/",
    tag = "records",
    responses(
        (status = 200, description = "All records in insertion order", body = Vec<Record>)
    )
)]
pub async fn list_records(State(state): State<AppState>) -> AppResult<Json<Vec<Record>>> {
    let records = state.services.records.list()?;
    Ok(Json(records))
}

/// Get record by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "records",
    params(("id" = String, Path, description = "Record ID, parsed from its leading digits")),
    responses(
        (status = 200, description = "Record details", body = Record),
        (status = 404, description = "Entry id not found.", body = String, content_type = "text/plain")
    )
)]
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Record>> {
    let record = state.services.records.get_by_id(record_id(&id)?)?;
    Ok(Json(record))
}

/// Create a record
#[utoipa::path(
    post,
    path = "/",
    tag = "records",
    request_body = RecordPayload,
    responses(
        (status = 200, description = "Record created", body = Record),
        (status = 400, description = "Name failed validation", body = ValidationFailure)
    )
)]
pub async fn create_record(
    State(state): State<AppState>,
    payload: Result<Json<RecordPayload>, JsonRejection>,
) -> AppResult<Json<Record>> {
    let name = validated_name(payload)?;
    let record = state.services.records.create(name)?;
    Ok(Json(record))
}

/// Replace a record's name
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "records",
    params(("id" = String, Path, description = "Record ID, parsed from its leading digits")),
    request_body = RecordPayload,
    responses(
        (status = 200, description = "Record updated", body = Record),
        (status = 400, description = "Name failed validation", body = ValidationFailure),
        (status = 404, description = "Entry id not found.", body = String, content_type = "text/plain")
    )
)]
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RecordPayload>, JsonRejection>,
) -> AppResult<Json<Record>> {
    // Unknown ids win over invalid bodies
    let id = record_id(&id)?;
    state.services.records.get_by_id(id)?;

    let name = validated_name(payload)?;
    let record = state.services.records.rename(id, name)?;
    Ok(Json(record))
}

/// Delete a record
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "records",
    params(("id" = String, Path, description = "Record ID, parsed from its leading digits")),
    responses(
        (status = 200, description = "Record deleted, returned as it was", body = Record),
        (status = 404, description = "Entry id not found.", body = String, content_type = "text/plain")
    )
)]
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Record>> {
    let record = state.services.records.delete(record_id(&id)?)?;
    Ok(Json(record))
}
