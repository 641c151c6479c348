use std::sync::Arc;

use crate::jobs::JobSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable job collaborator. Default: JsonFileJobSource over `Config::jobs_file`.
    pub job_source: Arc<dyn JobSource>,
}
