use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{AppError, FieldError};

/// Compensation expectation. Either a single figure or a `{min, max}` range,
/// in the same integer units the job catalog uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpectedSalary {
    Amount(u64),
    Range { min: Option<u64>, max: Option<u64> },
}

impl ExpectedSalary {
    /// Returns `(min, max)`. A single figure is both bounds.
    pub fn bounds(&self) -> (Option<u64>, Option<u64>) {
        match *self {
            ExpectedSalary::Amount(amount) => (Some(amount), Some(amount)),
            ExpectedSalary::Range { min, max } => (min, max),
        }
    }
}

/// The candidate side of a match request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub full_name: String,
    pub skills: Vec<String>,
    /// Ordered by preference. Only the first entry is scored.
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    #[serde(default)]
    pub experience_years: f64,
    #[serde(default)]
    pub expected_salary: Option<ExpectedSalary>,
    /// Ordered by preference. Only the first entry is scored.
    #[serde(default)]
    pub preferred_roles: Vec<String>,
    /// Display-only; never read by the scorers.
    #[serde(default)]
    pub education: Option<Value>,
}

impl CandidateProfile {
    pub fn primary_location(&self) -> Option<&str> {
        self.preferred_locations.first().map(String::as_str)
    }

    pub fn primary_role(&self) -> Option<&str> {
        self.preferred_roles.first().map(String::as_str)
    }

    pub fn salary_bounds(&self) -> (Option<u64>, Option<u64>) {
        self.expected_salary
            .map(|salary| salary.bounds())
            .unwrap_or((None, None))
    }

    /// Collects every field-level problem before any scoring happens.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();

        if !self.experience_years.is_finite() || self.experience_years < 0.0 {
            errors.push(FieldError::new(
                "experience_years",
                "must be a non-negative number",
            ));
        }

        if let Some(ExpectedSalary::Range {
            min: Some(min),
            max: Some(max),
        }) = self.expected_salary
        {
            if min > max {
                errors.push(FieldError::new(
                    "expected_salary",
                    format!("min ({min}) must not exceed max ({max})"),
                ));
            }
        }

        for (field, values) in [
            ("skills", &self.skills),
            ("preferred_locations", &self.preferred_locations),
            ("preferred_roles", &self.preferred_roles),
        ] {
            for (i, value) in values.iter().enumerate() {
                if value.trim().is_empty() {
                    errors.push(FieldError::new(
                        format!("{field}[{i}]"),
                        "must not be blank",
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}
