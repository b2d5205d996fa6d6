use crate::browser::SessionConfig;
use crate::error::{ProbeError, Result};
use std::time::Duration;

/// Environment variable naming the base URL probes run against
pub const ENV_BASE_URL: &str = "PROBE_BASE_URL";

/// Environment variable toggling headless mode (`true`/`false`/`1`/`0`)
pub const ENV_HEADLESS: &str = "PROBE_HEADLESS";

/// Environment variable bounding navigation and selector waits, in milliseconds
pub const ENV_TIMEOUT_MS: &str = "PROBE_TIMEOUT_MS";

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Configuration for a [`SiteProbe`](crate::probe::SiteProbe).
///
/// Every field is explicit and validated; [`from_env`](Self::from_env) is a
/// convenience constructor, not an implicit channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Base URL that relative paths are joined onto
    pub base_url: String,

    /// Run the browser headless
    pub headless: bool,

    /// Bound for navigation and selector waits
    pub nav_timeout: Duration,
}

impl ProbeConfig {
    /// Configuration for probing `base_url` with default timeout and headless
    /// mode. The URL must be http(s).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = validate_base_url(base_url.into())?;
        Ok(Self {
            base_url,
            headless: true,
            nav_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        })
    }

    /// Read configuration from `PROBE_BASE_URL`, `PROBE_HEADLESS`, and
    /// `PROBE_TIMEOUT_MS`, validating each. Unset variables fall back to
    /// defaults; malformed values are errors.
    pub fn from_env() -> Result<Self> {
        let base_url = match std::env::var(ENV_BASE_URL) {
            Ok(value) => validate_base_url(value)?,
            Err(_) => DEFAULT_BASE_URL.to_string(),
        };

        let headless = match std::env::var(ENV_HEADLESS) {
            Ok(value) => parse_headless(&value)?,
            Err(_) => true,
        };

        let nav_timeout = match std::env::var(ENV_TIMEOUT_MS) {
            Ok(value) => Duration::from_millis(parse_timeout_ms(&value)?),
            Err(_) => Duration::from_millis(DEFAULT_TIMEOUT_MS),
        };

        Ok(Self {
            base_url,
            headless,
            nav_timeout,
        })
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn nav_timeout(mut self, timeout: Duration) -> Self {
        self.nav_timeout = timeout;
        self
    }

    /// Join a path onto the base URL. Absolute http(s) URLs pass through
    /// unchanged.
    pub fn join_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.base_url.trim_end_matches('/');
        if path.is_empty() {
            return base.to_string();
        }

        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Session launch options matching this probe configuration
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new().headless(self.headless)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headless: true,
            nav_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

fn validate_base_url(url: String) -> Result<String> {
    let trimmed = url.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ProbeError::InvalidConfig(format!(
            "Base URL must start with http:// or https://, got '{}'",
            trimmed
        )))
    }
}

fn parse_headless(value: &str) -> Result<bool> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(ProbeError::InvalidConfig(format!(
            "{} must be true/false/1/0, got '{}'",
            ENV_HEADLESS, other
        ))),
    }
}

fn parse_timeout_ms(value: &str) -> Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ProbeError::InvalidConfig(format!(
            "{} must be a positive integer of milliseconds, got '{}'",
            ENV_TIMEOUT_MS, value
        ))),
    }
}
