//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend base URL that `/api/*` is forwarded to, without trailing slash.
    pub api_url: String,
    pub proxy_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `LOSTFOUND_API_URL`: default `http://127.0.0.1:8080`
    /// - `LOSTFOUND_PROXY_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let proxy_timeout_secs =
            parse_or("LOSTFOUND_PROXY_TIMEOUT_SECS", lookup("LOSTFOUND_PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?;
        if proxy_timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "LOSTFOUND_PROXY_TIMEOUT_SECS", value: "0".into() });
        }

        let api_url = lookup("LOSTFOUND_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = api_url.trim().trim_end_matches('/').to_string();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid { var: "LOSTFOUND_API_URL", value: api_url });
        }

        Ok(Self { port, api_url, proxy_timeout_secs })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
