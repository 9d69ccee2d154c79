use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    Json,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::database::models::NewJob;
use crate::error::ApiError;
use crate::filter::{JobFilterWhere, JobFilters};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// POST /jobs - Create a job (admin only)
///
/// Body: `{ title, salary?, equity?, companyHandle }`
/// Returns `201 { job: { id, title, salary, equity, companyHandle } }`
pub async fn post(
    State(state): State<AppState>,
    payload: Result<Json<NewJob>, JsonRejection>,
) -> ApiResult<Value> {
    let Json(new_job) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    new_job.validate()?;

    let job = state.jobs().create(new_job).await?;
    tracing::info!("Job {} created", job.id);

    Ok(ApiResponse::created(json!({ "job": job })))
}

/// GET /jobs - List jobs, optionally filtered
///
/// Query: `title` (substring, case-insensitive), `minSalary`, `hasEquity`.
/// Returns `{ jobs: [...] }`: ordered by id without filters, by title with.
pub async fn get(
    State(state): State<AppState>,
    query: Result<Query<JobFilters>, QueryRejection>,
) -> ApiResult<Value> {
    let Query(filters) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;
    JobFilterWhere::validate(&filters)?;

    let repository = state.jobs();
    let jobs = if filters.is_empty() {
        repository.find_all().await?
    } else {
        repository.find(&filters).await?
    };

    Ok(ApiResponse::success(json!({ "jobs": jobs })))
}
