use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const PREDICT_PATH: &str = "/predict";

/// Where the classification service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    /// Reads overrides baked in at build time. The browser has no process
    /// environment, so `PREDICT_API_URL` and `PREDICT_TIMEOUT_MS` are taken
    /// from the compiler's environment.
    pub fn from_env() -> Self {
        Self::from_values(option_env!("PREDICT_API_URL"), option_env!("PREDICT_TIMEOUT_MS"))
    }

    pub fn from_values(base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(raw) = timeout_ms {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.timeout = Duration::from_millis(ms),
                _ => log::warn!(
                    "Ignoring invalid PREDICT_TIMEOUT_MS {:?}, using {} ms",
                    raw,
                    DEFAULT_TIMEOUT_MS
                ),
            }
        }

        config
    }

    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url, PREDICT_PATH)
    }
}
