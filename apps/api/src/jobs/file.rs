use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::jobs::{JobSnapshot, JobSource};
use crate::models::job::JobPosting;

/// On-disk catalog shape: `{"jobs": [...]}`. Other top-level keys are ignored.
#[derive(Debug, Deserialize)]
struct JobCatalog {
    #[serde(default)]
    jobs: Vec<JobPosting>,
}

/// Reads a JSON job catalog from disk on every snapshot; nothing is cached.
pub struct JsonFileJobSource {
    path: PathBuf,
}

impl JsonFileJobSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl JobSource for JsonFileJobSource {
    async fn snapshot(&self) -> Result<JobSnapshot, AppError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Job catalog {} not found; matching against an empty collection",
                    self.path.display()
                );
                return Ok(JobSnapshot::unavailable());
            }
            Err(e) => {
                return Err(AppError::JobSource(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        let catalog: JobCatalog = serde_json::from_str(&raw).map_err(|e| {
            AppError::JobSource(format!(
                "malformed job catalog {}: {e}",
                self.path.display()
            ))
        })?;

        debug!("Loaded {} jobs from {}", catalog.jobs.len(), self.path.display());
        Ok(JobSnapshot::available(catalog.jobs))
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}
