//! Years-of-experience fit against a job's experience band.

const QUALIFIED: f64 = 100.0;
const OVERQUALIFIED_FLOOR: f64 = 60.0;
const PENALTY_PER_YEAR_OVER: f64 = 5.0;
const UNDERQUALIFIED_FLOOR: f64 = 20.0;

pub fn score_experience(candidate_years: f64, min_years: f64, max_years: Option<f64>) -> f64 {
    // Entry level: everyone qualifies, and the ratio below never divides by zero.
    if min_years <= 0.0 {
        return QUALIFIED;
    }

    if let Some(max_years) = max_years {
        if candidate_years > max_years {
            let over_by = candidate_years - max_years;
            return (QUALIFIED - over_by * PENALTY_PER_YEAR_OVER).max(OVERQUALIFIED_FLOOR);
        }
    }

    if candidate_years >= min_years {
        return QUALIFIED;
    }

    (candidate_years / min_years * 100.0).max(UNDERQUALIFIED_FLOOR)
}
