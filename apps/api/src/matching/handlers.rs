//! Axum route handlers for the Matching API.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::aggregate::{Factor, MatchTier};
use crate::matching::engine::rank_jobs;
use crate::matching::role::{classify_role, RoleFamily};
use crate::models::candidate::CandidateProfile;
use crate::models::result::MatchResult;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub candidate_name: String,
    pub candidate_education: Option<Value>,
    /// Family the first preferred role classified into, if any.
    pub target_role_family: Option<RoleFamily>,
    pub total_jobs: usize,
    /// `false` when the job source had no data at all.
    pub source_available: bool,
    pub matches: Vec<MatchResult>,
}

#[derive(Debug, Serialize)]
pub struct FactorWeight {
    pub factor: Factor,
    pub weight: f64,
    pub percentage: u32,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TierThreshold {
    pub tier: MatchTier,
    pub min_score: f64,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WeightsResponse {
    pub weights: Vec<FactorWeight>,
    pub tiers: Vec<TierThreshold>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/match/calculate
///
/// Scores the candidate against every job in the current job snapshot and
/// returns the results ranked by total score.
pub async fn handle_calculate(
    State(state): State<AppState>,
    payload: Result<Json<CandidateProfile>, JsonRejection>,
) -> Result<Json<MatchResponse>, AppError> {
    let Json(candidate) = payload?;
    candidate.validate()?;

    let run_id = Uuid::new_v4();
    let started = Instant::now();

    let snapshot = state.job_source.snapshot().await?;
    let total_jobs = snapshot.jobs.len();
    let target_role_family = candidate.primary_role().and_then(classify_role);

    let candidate = Arc::new(candidate);
    let matches = rank_jobs(Arc::clone(&candidate), snapshot.jobs).await?;

    info!(
        %run_id,
        candidate = %candidate.full_name,
        jobs = total_jobs,
        role_family = ?target_role_family,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Match run complete"
    );

    Ok(Json(MatchResponse {
        run_id,
        generated_at: Utc::now(),
        candidate_name: candidate.full_name.clone(),
        candidate_education: candidate.education.clone(),
        target_role_family,
        total_jobs,
        source_available: snapshot.available,
        matches,
    }))
}

/// GET /api/match/weights
///
/// Static scoring configuration for client display.
pub async fn handle_weights() -> Json<WeightsResponse> {
    Json(weights_response())
}

fn weights_response() -> WeightsResponse {
    WeightsResponse {
        weights: Factor::ALL
            .into_iter()
            .map(|factor| FactorWeight {
                factor,
                weight: factor.weight(),
                percentage: (factor.weight() * 100.0).round() as u32,
                description: factor.description(),
            })
            .collect(),
        tiers: MatchTier::ALL
            .into_iter()
            .map(|tier| TierThreshold {
                tier,
                min_score: tier.min_score(),
                label: tier.label(),
            })
            .collect(),
    }
}
