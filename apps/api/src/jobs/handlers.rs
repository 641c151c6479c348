//! Axum route handlers for the job catalog.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobPosting>,
}

/// GET /api/jobs
///
/// Lists the postings the engine would score right now. A missing catalog
/// lists nothing.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<JobListResponse>, AppError> {
    let snapshot = state.job_source.snapshot().await?;
    Ok(Json(JobListResponse {
        jobs: snapshot.jobs,
    }))
}
