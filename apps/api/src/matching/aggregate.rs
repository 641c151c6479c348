//! Weighted aggregation of the five factor scores into a total and a tier.

use serde::{Deserialize, Serialize};

/// The five scoring factors, in their fixed evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Skills,
    Location,
    Salary,
    Experience,
    Role,
}

impl Factor {
    pub const ALL: [Factor; 5] = [
        Factor::Skills,
        Factor::Location,
        Factor::Salary,
        Factor::Experience,
        Factor::Role,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Factor::Skills => "Skills",
            Factor::Location => "Location",
            Factor::Salary => "Salary",
            Factor::Experience => "Experience",
            Factor::Role => "Role",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Factor::Skills => "Technical skill alignment",
            Factor::Location => "Geographic fit or remote compatibility",
            Factor::Salary => "Compensation expectations alignment",
            Factor::Experience => "Years of experience match",
            Factor::Role => "Job title and role type match",
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Factor::Skills => 0.40,
            Factor::Location => 0.20,
            Factor::Salary => 0.15,
            Factor::Experience => 0.15,
            Factor::Role => 0.10,
        }
    }
}

/// Raw factor scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    #[serde(rename = "skills_score")]
    pub skills: f64,
    #[serde(rename = "location_score")]
    pub location: f64,
    #[serde(rename = "salary_score")]
    pub salary: f64,
    #[serde(rename = "experience_score")]
    pub experience: f64,
    #[serde(rename = "role_score")]
    pub role: f64,
}

impl FactorScores {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Skills => self.skills,
            Factor::Location => self.location,
            Factor::Salary => self.salary,
            Factor::Experience => self.experience,
            Factor::Role => self.role,
        }
    }

    /// `(factor, score)` pairs in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    pub fn rounded(&self) -> Self {
        Self {
            skills: round1(self.skills),
            location: round1(self.location),
            salary: round1(self.salary),
            experience: round1(self.experience),
            role: round1(self.role),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl MatchTier {
    /// Highest band first; `from_score` takes the first band whose floor is met.
    pub const ALL: [MatchTier; 4] = [
        MatchTier::Excellent,
        MatchTier::Good,
        MatchTier::Fair,
        MatchTier::Poor,
    ];

    pub fn min_score(self) -> f64 {
        match self {
            MatchTier::Excellent => 85.0,
            MatchTier::Good => 70.0,
            MatchTier::Fair => 50.0,
            MatchTier::Poor => 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent Match",
            MatchTier::Good => "Good Match",
            MatchTier::Fair => "Fair Match",
            MatchTier::Poor => "Poor Match",
        }
    }

    pub fn from_score(total: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|tier| total >= tier.min_score())
            .unwrap_or(MatchTier::Poor)
    }
}

/// Weighted total rounded to one decimal, clamped to `[0, 100]`.
pub fn total_score(scores: &FactorScores) -> f64 {
    let total: f64 = scores.iter().map(|(f, s)| s * f.weight()).sum();
    round1(total.clamp(0.0, 100.0))
}

/// One decimal, halves to even.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(skills: f64, location: f64, salary: f64, experience: f64, role: f64) -> FactorScores {
        FactorScores {
            skills,
            location,
            salary,
            experience,
            role,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let sum: f64 = Factor::ALL.iter().map(|f| f.weight()).sum();
        assert!((sum - 1.0).abs() < 1e-12, "Weights summed to {sum}");
    }

    #[test]
    fn test_total_matches_worked_example() {
        // 73.3×.40 + 100×.20 + 90×.15 + 25×.15 + 85×.10 = 75.07
        let total = total_score(&scores(73.3, 100.0, 90.0, 25.0, 85.0));
        assert_eq!(total, 75.1);
        assert_eq!(MatchTier::from_score(total), MatchTier::Good);
    }

    #[test]
    fn test_total_extremes() {
        assert_eq!(total_score(&scores(100.0, 100.0, 100.0, 100.0, 100.0)), 100.0);
        assert_eq!(total_score(&scores(0.0, 0.0, 0.0, 0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(MatchTier::from_score(100.0), MatchTier::Excellent);
        assert_eq!(MatchTier::from_score(85.0), MatchTier::Excellent);
        assert_eq!(MatchTier::from_score(84.9), MatchTier::Good);
        assert_eq!(MatchTier::from_score(70.0), MatchTier::Good);
        assert_eq!(MatchTier::from_score(69.9), MatchTier::Fair);
        assert_eq!(MatchTier::from_score(50.0), MatchTier::Fair);
        assert_eq!(MatchTier::from_score(49.9), MatchTier::Poor);
        assert_eq!(MatchTier::from_score(0.0), MatchTier::Poor);
    }

    #[test]
    fn test_tier_is_monotonic_across_range() {
        let rank = |t: MatchTier| MatchTier::ALL.iter().position(|x| *x == t).unwrap();
        let mut previous = rank(MatchTier::from_score(0.0));
        for step in 0..=1000 {
            let current = rank(MatchTier::from_score(step as f64 / 10.0));
            assert!(current <= previous, "Tier dropped at {}", step as f64 / 10.0);
            previous = current;
        }
    }

    #[test]
    fn test_tier_floors_descend() {
        let floors: Vec<f64> = MatchTier::ALL.iter().map(|t| t.min_score()).collect();
        assert!(floors.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(*floors.last().unwrap(), 0.0);
    }

    #[test]
    fn test_iter_preserves_evaluation_order() {
        let names: Vec<&str> = scores(1.0, 2.0, 3.0, 4.0, 5.0)
            .iter()
            .map(|(f, _)| f.name())
            .collect();
        assert_eq!(names, vec!["Skills", "Location", "Salary", "Experience", "Role"]);
    }

    #[test]
    fn test_rounded_one_decimal() {
        let r = scores(73.333333, 100.0, 90.0, 25.0, 85.0).rounded();
        assert_eq!(r.skills, 73.3);
    }

    #[test]
    fn test_total_rounds_half_to_even() {
        // 0 + 20 + 9 + 3.75 + 8.5 = 41.25
        assert_eq!(total_score(&scores(0.0, 100.0, 60.0, 25.0, 85.0)), 41.2);
        assert_eq!(round1(0.25), 0.2);
        assert_eq!(round1(0.75), 0.8);
    }
}
