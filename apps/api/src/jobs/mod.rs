//! The collaborator that hands the engine a snapshot of job postings.
//!
//! Default: `JsonFileJobSource` (catalog file re-read per request).
//! Tests: `StaticJobSource` (fixed in-memory snapshot).
//!
//! `AppState` holds an `Arc<dyn JobSource>`, chosen at startup.

pub mod file;
pub mod handlers;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::job::JobPosting;

pub use file::JsonFileJobSource;

/// Fully materialised job data for one match run.
#[derive(Debug, Clone, Default)]
pub struct JobSnapshot {
    pub jobs: Vec<JobPosting>,
    /// `false` when the source had nothing to offer at all, as opposed to an
    /// empty catalog. Lets callers tell "no jobs available" from "no jobs matched".
    pub available: bool,
}

impl JobSnapshot {
    pub fn available(jobs: Vec<JobPosting>) -> Self {
        Self {
            jobs,
            available: true,
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }
}

#[async_trait]
pub trait JobSource: Send + Sync {
    async fn snapshot(&self) -> Result<JobSnapshot, AppError>;

    /// Short label for startup logging.
    fn describe(&self) -> String;
}

/// In-memory source returning the same snapshot every time.
#[cfg(test)]
pub struct StaticJobSource(pub JobSnapshot);

#[cfg(test)]
#[async_trait]
impl JobSource for StaticJobSource {
    async fn snapshot(&self) -> Result<JobSnapshot, AppError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} jobs)", self.0.jobs.len())
    }
}
