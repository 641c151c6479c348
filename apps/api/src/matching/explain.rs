//! Human-readable rationale for a factor breakdown.

use crate::matching::aggregate::{Factor, FactorScores};

const MISSING_SKILLS_SHOWN: usize = 3;
const IMPROVEMENT_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub explanation: String,
    pub top_reason: String,
    pub top_improvement: String,
}

/// `scores` are the display (rounded) factor scores.
pub fn explain(
    scores: &FactorScores,
    skill_match_percentage: f64,
    missing_required: &[String],
) -> Explanation {
    let (best, best_score) = best_factor(scores);
    let (worst, worst_score) = worst_factor(scores);

    let mut parts = Vec::new();

    if scores.skills >= 80.0 {
        parts.push(format!(
            "Strong skills alignment ({}% match)",
            skill_match_percentage.trunc()
        ));
    } else if !missing_required.is_empty() {
        let shown: Vec<&str> = missing_required
            .iter()
            .take(MISSING_SKILLS_SHOWN)
            .map(String::as_str)
            .collect();
        parts.push(format!("Missing key skills: {}", shown.join(", ")));
    }

    if scores.location == 100.0 {
        parts.push("Location is a perfect fit".to_string());
    } else if scores.location < 50.0 {
        parts.push("Location may require relocation".to_string());
    }

    if scores.salary >= 90.0 {
        parts.push("Salary expectations align well".to_string());
    }

    if scores.experience >= 90.0 {
        parts.push("Experience level matches requirements".to_string());
    } else if scores.experience < 60.0 {
        parts.push("May need more experience for this role".to_string());
    }

    let explanation = if parts.is_empty() {
        "Match score calculated based on profile data.".to_string()
    } else {
        format!("{}.", parts.join(". "))
    };

    let top_reason = format!("{} ({}%)", best.name(), best_score.trunc());

    let top_improvement = if worst_score < IMPROVEMENT_THRESHOLD {
        format!(
            "Improve your {} match (currently {}%)",
            worst.name().to_lowercase(),
            worst_score.trunc()
        )
    } else {
        "All factors are well-matched!".to_string()
    };

    Explanation {
        explanation,
        top_reason,
        top_improvement,
    }
}

/// Highest-scoring factor; ties go to the earliest in evaluation order.
pub fn best_factor(scores: &FactorScores) -> (Factor, f64) {
    pick(scores, |candidate, current| candidate > current)
}

/// Lowest-scoring factor; ties go to the earliest in evaluation order.
pub fn worst_factor(scores: &FactorScores) -> (Factor, f64) {
    pick(scores, |candidate, current| candidate < current)
}

fn pick(scores: &FactorScores, replaces: impl Fn(f64, f64) -> bool) -> (Factor, f64) {
    let mut iter = scores.iter();
    let first = iter.next().unwrap_or((Factor::Skills, scores.skills));
    iter.fold(first, |chosen, next| {
        if replaces(next.1, chosen.1) {
            next
        } else {
            chosen
        }
    })
}
