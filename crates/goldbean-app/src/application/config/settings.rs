use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use goldbean_infrastructure::config::TimeoutConfig;
use goldbean_infrastructure::http::client::DEFAULT_BASE_URL;
use goldbean_infrastructure::notification::DEFAULT_SERVERCHAN_BASE_URL;

pub const TOKEN_LIST_VAR: &str = "TOKEN_LIST";
pub const SEND_KEY_LIST_VAR: &str = "SEND_KEY_LIST";
pub const PLATFORM_BASE_URL_VAR: &str = "JLC_BASE_URL";
pub const SERVERCHAN_BASE_URL_VAR: &str = "SERVERCHAN_BASE_URL";
pub const DELAY_MIN_VAR: &str = "SIGN_DELAY_MIN_SECS";
pub const DELAY_MAX_VAR: &str = "SIGN_DELAY_MAX_SECS";
pub const HTTP_TIMEOUT_VAR: &str = "HTTP_TIMEOUT_SECS";
pub const LOG_DIR_VAR: &str = "GOLDBEAN_LOG_DIR";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("请设置 TOKEN_LIST")]
    MissingTokens,

    #[error("请设置 SEND_KEY_LIST")]
    MissingSendKeys,

    #[error("{var} must be a non-negative integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be an absolute http(s) URL, got '{value}'")]
    InvalidUrl { var: &'static str, value: String },

    #[error("Delay range is empty: min {min}s is greater than max {max}s")]
    InvalidDelayRange { min: u64, max: u64 },
}

/// Inclusive bounds of the pause between two accounts, in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min_secs: u64,
    pub max_secs: u64,
}

impl Default for DelayRange {
    fn default() -> Self {
        Self {
            min_secs: 5,
            max_secs: 15,
        }
    }
}

/// Everything a run needs, read once at startup
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub token_list: String,
    pub send_key_list: String,
    pub platform_base_url: String,
    pub serverchan_base_url: String,
    pub delay: DelayRange,
    pub timeouts: TimeoutConfig,
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let platform_base_url = non_empty(PLATFORM_BASE_URL_VAR)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_url(PLATFORM_BASE_URL_VAR, &platform_base_url)?;

        let serverchan_base_url = non_empty(SERVERCHAN_BASE_URL_VAR)
            .unwrap_or_else(|| DEFAULT_SERVERCHAN_BASE_URL.to_string());
        validate_url(SERVERCHAN_BASE_URL_VAR, &serverchan_base_url)?;

        let defaults = DelayRange::default();
        let delay = DelayRange {
            min_secs: parse_u64(DELAY_MIN_VAR, non_empty(DELAY_MIN_VAR))?
                .unwrap_or(defaults.min_secs),
            max_secs: parse_u64(DELAY_MAX_VAR, non_empty(DELAY_MAX_VAR))?
                .unwrap_or(defaults.max_secs),
        };
        if delay.min_secs > delay.max_secs {
            return Err(ConfigError::InvalidDelayRange {
                min: delay.min_secs,
                max: delay.max_secs,
            });
        }

        let mut timeouts = TimeoutConfig::default();
        if let Some(secs) = parse_u64(HTTP_TIMEOUT_VAR, non_empty(HTTP_TIMEOUT_VAR))? {
            if secs == 0 {
                return Err(ConfigError::InvalidNumber {
                    var: HTTP_TIMEOUT_VAR,
                    value: secs.to_string(),
                });
            }
            timeouts = timeouts.with_http_request(Duration::from_secs(secs));
        }

        Ok(Self {
            token_list: lookup(TOKEN_LIST_VAR).unwrap_or_default(),
            send_key_list: lookup(SEND_KEY_LIST_VAR).unwrap_or_default(),
            platform_base_url,
            serverchan_base_url,
            delay,
            timeouts,
            log_dir: non_empty(LOG_DIR_VAR).map(PathBuf::from),
        })
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("token_list", &redacted(&self.token_list))
            .field("send_key_list", &redacted(&self.send_key_list))
            .field("platform_base_url", &self.platform_base_url)
            .field("serverchan_base_url", &self.serverchan_base_url)
            .field("delay", &self.delay)
            .field("timeouts", &self.timeouts)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}

/// Credential lists are shown only as set or unset
fn redacted(value: &str) -> &'static str {
    if value.trim().is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

fn parse_u64(var: &'static str, raw: Option<String>) -> Result<Option<u64>, ConfigError> {
    raw.map(|value| {
        value
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNumber { var, value })
    })
    .transpose()
}

fn validate_url(var: &'static str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl {
            var,
            value: value.to_string(),
        })
    }
}
