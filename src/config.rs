use std::{env, time::Duration};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub heatmap_min_color: String,
    pub heatmap_max_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#6366f1".to_string(),
            secondary: "#8b5cf6".to_string(),
            heatmap_min_color: "#FFFFFF".to_string(),
            heatmap_max_color: "#7cb5ec".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_url: String,
    pub api_token: Option<String>,
    pub login_url: String,
    pub request_timeout: Duration,
    pub theme: Theme,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = parse_number("PORT", var("PORT"), 8080)?;
        let timeout_secs = parse_number("ANALYSIS_TIMEOUT_SECS", var("ANALYSIS_TIMEOUT_SECS"), 30)?;

        let api_url = var("ANALYSIS_API_URL")
            .unwrap_or_else(|| "http://localhost:8000".to_string())
            .trim_end_matches('/')
            .to_string();
        let login_url = var("AUTH_LOGIN_URL").unwrap_or_else(|| format!("{api_url}/login"));

        Ok(Self {
            port,
            api_token: var("ANALYSIS_API_TOKEN"),
            login_url,
            request_timeout: Duration::from_secs(timeout_secs),
            api_url,
            theme: Theme::default(),
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}
