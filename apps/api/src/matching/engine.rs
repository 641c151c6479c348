//! Scores every job for one candidate and ranks the results.
//!
//! Each job is a pure function of `(candidate, job)`, so jobs fan out across the
//! blocking pool and are joined back before the single-threaded stable sort.
//! Jobs tied on total score keep their input order.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::debug;

use crate::errors::AppError;
use crate::matching::aggregate::{round1, total_score, FactorScores, MatchTier};
use crate::matching::experience::score_experience;
use crate::matching::explain::explain;
use crate::matching::location::score_location;
use crate::matching::role::score_role;
use crate::matching::salary::score_salary;
use crate::matching::skills::score_skills;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;
use crate::models::result::MatchResult;

/// Scores one job. No shared state; safe to call from any thread.
pub fn evaluate_job(candidate: &CandidateProfile, job: &JobPosting) -> MatchResult {
    let skills = score_skills(
        &candidate.skills,
        &job.required_skills,
        &job.nice_to_have_skills,
    );
    let location = score_location(
        candidate.primary_location(),
        job.location.as_deref(),
        job.is_remote,
    );
    let (expected_min, expected_max) = candidate.salary_bounds();
    let (job_min, job_max) = job.disclosed_salary();
    let salary = score_salary(expected_min, expected_max, job_min, job_max);
    let (min_years, max_years) = job.experience_band();
    let experience = score_experience(candidate.experience_years, min_years, max_years);
    let role = score_role(candidate.primary_role(), &job.title);

    let raw = FactorScores {
        skills: skills.score,
        location,
        salary,
        experience,
        role,
    };
    let total = total_score(&raw);
    let scores = raw.rounded();
    let skill_match_percentage = round1(skills.required_coverage());
    let explanation = explain(&scores, skill_match_percentage, &skills.missing_required);

    debug!(
        job_id = job.id,
        total,
        skills = scores.skills,
        location = scores.location,
        salary = scores.salary,
        experience = scores.experience,
        role = scores.role,
        "Scored job"
    );

    MatchResult {
        job_id: job.id,
        job_title: job.title.clone(),
        company: job.company.clone(),
        location: job.location_label(),
        salary_range: job.salary_range_label(),
        total_score: total,
        match_tier: MatchTier::from_score(total),
        scores,
        matching_skills: skills.matched,
        missing_required_skills: skills.missing_required,
        missing_optional_skills: skills.missing_optional,
        skill_match_percentage,
        explanation: explanation.explanation,
        top_reason_for_match: explanation.top_reason,
        top_area_to_improve: explanation.top_improvement,
    }
}

/// Scores all jobs concurrently, then ranks them. An empty collection yields an empty list.
///
/// A failed scoring task fails the whole run; remaining tasks are aborted when
/// the `JoinSet` drops.
pub async fn rank_jobs(
    candidate: Arc<CandidateProfile>,
    jobs: Vec<JobPosting>,
) -> Result<Vec<MatchResult>, AppError> {
    if jobs.is_empty() {
        return Ok(Vec::new());
    }

    let mut slots: Vec<Option<MatchResult>> = vec![None; jobs.len()];
    let mut set = JoinSet::new();
    for (index, job) in jobs.into_iter().enumerate() {
        let candidate = Arc::clone(&candidate);
        set.spawn_blocking(move || (index, evaluate_job(&candidate, &job)));
    }

    while let Some(joined) = set.join_next().await {
        let (index, result) = joined.map_err(|e| {
            AppError::Internal(anyhow::anyhow!("job scoring task failed: {e}"))
        })?;
        slots[index] = Some(result);
    }

    // Reassemble in input order so the stable sort breaks ties by it.
    let mut results: Vec<MatchResult> = slots.into_iter().flatten().collect();
    sort_by_total(&mut results);
    Ok(results)
}

/// Same ranking as `rank_jobs`, computed on the calling thread.
#[cfg(test)]
pub fn rank_jobs_sequential(candidate: &CandidateProfile, jobs: &[JobPosting]) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = jobs.iter().map(|job| evaluate_job(candidate, job)).collect();
    sort_by_total(&mut results);
    results
}

fn sort_by_total(results: &mut [MatchResult]) {
    // `sort_by` is stable.
    results.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
}
