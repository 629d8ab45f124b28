use anyhow::{Context, Result};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8001";
pub const DEFAULT_DIFFICULTY: &str = "intermediate";

/// Panel configuration loaded from environment variables.
/// Every variable is optional; defaults target a backend running locally on port 8001.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub difficulty: String,
    /// No timeout unless set. A hung request keeps the busy flag raised.
    pub request_timeout_secs: Option<u64>,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            request_timeout_secs: None,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let request_timeout_secs = match std::env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            base_url: optional_env("ANALYSIS_BASE_URL", DEFAULT_BASE_URL),
            difficulty: optional_env("ASSESSMENT_DIFFICULTY", DEFAULT_DIFFICULTY),
            request_timeout_secs,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
