// src/config.rs
//! Service endpoint configuration, resolved from the environment

use std::env;

const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl ServiceConfig {
    /// Resolve from `RESUME_SERVICE_URL` / `RESUME_SERVICE_TIMEOUT_SECS`,
    /// falling back to the local dev service.
    pub fn from_env() -> Self {
        let base_url =
            env::var("RESUME_SERVICE_URL").unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());

        let timeout_seconds = env::var("RESUME_SERVICE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_seconds,
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}
