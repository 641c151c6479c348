use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_JOBS_FILE: &str = "data/jobs.json";

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare environment still starts the service.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON job catalog read by the file job source on every match request.
    pub jobs_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            jobs_file: std::env::var("JOBS_FILE")
                .unwrap_or_else(|_| DEFAULT_JOBS_FILE.to_string())
                .into(),
        })
    }
}
