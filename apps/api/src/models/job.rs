use serde::{Deserialize, Serialize};

/// One job record as supplied by the job source. `id` and `title` are required;
/// everything else falls back to the catalog's own conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub is_remote: bool,
    #[serde(default)]
    pub salary_min: Option<u64>,
    #[serde(default)]
    pub salary_max: Option<u64>,
    #[serde(default)]
    pub min_experience_years: Option<f64>,
    #[serde(default)]
    pub max_experience_years: Option<f64>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub nice_to_have_skills: Vec<String>,
}

impl JobPosting {
    /// Salary bounds with the catalog's `0 = not disclosed` convention applied.
    pub fn disclosed_salary(&self) -> (Option<u64>, Option<u64>) {
        (
            self.salary_min.filter(|v| *v > 0),
            self.salary_max.filter(|v| *v > 0),
        )
    }

    /// `(min, max)` experience band. A missing min is 0; a max of 0 means unbounded.
    pub fn experience_band(&self) -> (f64, Option<f64>) {
        (
            self.min_experience_years.unwrap_or(0.0),
            self.max_experience_years.filter(|v| *v > 0.0),
        )
    }

    pub fn location_label(&self) -> String {
        match self.location.as_deref().map(str::trim) {
            Some(loc) if !loc.is_empty() => loc.to_string(),
            _ => "Not specified".to_string(),
        }
    }

    pub fn salary_range_label(&self) -> String {
        match self.disclosed_salary() {
            (Some(min), Some(max)) => format!("{min} - {max}"),
            _ => "Not disclosed".to_string(),
        }
    }
}
