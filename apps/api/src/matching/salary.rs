//! Compensation alignment, compared on range midpoints.

const NOT_DISCLOSED: f64 = 60.0;
const NO_EXPECTATION: f64 = 70.0;
const MEETS_EXPECTATION: f64 = 100.0;
const FLOOR: f64 = 30.0;

/// Midpoint ratio bands, highest first.
const RATIO_BANDS: &[(f64, f64)] = &[(0.9, 90.0), (0.8, 75.0), (0.7, 60.0)];

/// Zero bounds count as absent on both sides.
pub fn score_salary(
    expected_min: Option<u64>,
    expected_max: Option<u64>,
    job_min: Option<u64>,
    job_max: Option<u64>,
) -> f64 {
    let Some(job_mid) = midpoint(job_min, job_max) else {
        return NOT_DISCLOSED;
    };
    let Some(expected_mid) = midpoint(expected_min, expected_max) else {
        return NO_EXPECTATION;
    };

    if job_mid >= expected_mid {
        return MEETS_EXPECTATION;
    }

    let ratio = job_mid / expected_mid;
    RATIO_BANDS
        .iter()
        .find(|(floor, _)| ratio >= *floor)
        .map(|(_, score)| *score)
        .unwrap_or_else(|| (ratio * 100.0).max(FLOOR))
}

/// Midpoint of a possibly half-open range; a lone bound is the whole range.
fn midpoint(min: Option<u64>, max: Option<u64>) -> Option<f64> {
    let min = min.filter(|v| *v > 0);
    let max = max.filter(|v| *v > 0);
    match (min, max) {
        (None, None) => None,
        (Some(lo), None) => Some(lo as f64),
        (None, Some(hi)) => Some(hi as f64 / 2.0),
        (Some(lo), Some(hi)) => Some((lo as f64 + hi as f64) / 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_without_salary_is_neutral_low() {
        assert_eq!(score_salary(Some(800000), Some(800000), None, None), 60.0);
        assert_eq!(score_salary(None, None, Some(0), Some(0)), 60.0);
    }

    #[test]
    fn test_candidate_without_expectation_is_neutral_positive() {
        assert_eq!(score_salary(None, None, Some(500000), Some(700000)), 70.0);
        assert_eq!(score_salary(Some(0), None, Some(500000), Some(700000)), 70.0);
    }

    #[test]
    fn test_job_meets_or_exceeds_expectation() {
        assert_eq!(score_salary(Some(800000), Some(800000), Some(800000), Some(800000)), 100.0);
        assert_eq!(score_salary(Some(500000), None, Some(1500000), Some(2500000)), 100.0);
    }

    #[test]
    fn test_within_ten_percent() {
        // expected mid 800000, job mid 750000 → ratio 0.9375
        assert_eq!(score_salary(Some(800000), Some(800000), Some(600000), Some(900000)), 90.0);
    }

    #[test]
    fn test_ratio_bands() {
        assert_eq!(score_salary(Some(100), Some(100), Some(85), Some(85)), 75.0);
        assert_eq!(score_salary(Some(100), Some(100), Some(72), Some(72)), 60.0);
        assert_eq!(score_salary(Some(100), Some(100), Some(50), Some(50)), 50.0);
    }

    #[test]
    fn test_floor_at_thirty() {
        assert_eq!(score_salary(Some(1000), Some(1000), Some(100), Some(100)), 30.0);
    }

    #[test]
    fn test_lone_max_bound() {
        // Only the max disclosed: midpoint is max/2 (missing min counts as 0).
        assert_eq!(score_salary(Some(100), Some(100), None, Some(200)), 100.0);
        assert_eq!(score_salary(Some(100), Some(100), None, Some(180)), 90.0);
    }
}
