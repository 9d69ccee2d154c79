use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    Json,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::database::models::UpdateJobFields;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

fn job_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|e| ApiError::bad_request(e.body_text()))
}

/// GET /jobs/:id - Get a single job
pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Value> {
    let id = job_id(path)?;
    let job = state.jobs().get(id).await?;
    Ok(ApiResponse::success(json!({ "job": job })))
}

/// PATCH /jobs/:id - Partially update a job (admin only)
///
/// Body: any non-empty subset of `{ title, salary, equity }`.
pub async fn patch(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateJobFields>, JsonRejection>,
) -> ApiResult<Value> {
    let id = job_id(path)?;
    let Json(fields) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    fields.validate()?;

    let job = state.jobs().update(id, fields).await?;
    tracing::info!("Job {} updated", job.id);

    Ok(ApiResponse::success(json!({ "job": job })))
}

/// DELETE /jobs/:id - Delete a job (admin only)
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Value> {
    let id = job_id(path)?;
    state.jobs().remove(id).await?;
    tracing::info!("Job {} deleted", id);

    Ok(ApiResponse::success(json!({ "deleted": id })))
}
