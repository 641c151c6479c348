use serde::{Deserialize, Serialize};

use crate::matching::aggregate::{FactorScores, MatchTier};

/// Ranked, explained outcome of scoring one job for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: i64,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub salary_range: String,

    pub total_score: f64, // 0 – 100, one decimal
    pub match_tier: MatchTier,

    #[serde(flatten)]
    pub scores: FactorScores, // each 0 – 100, one decimal

    pub matching_skills: Vec<String>,
    pub missing_required_skills: Vec<String>,
    pub missing_optional_skills: Vec<String>,
    pub skill_match_percentage: f64,

    pub explanation: String,
    pub top_reason_for_match: String,
    pub top_area_to_improve: String,
}
