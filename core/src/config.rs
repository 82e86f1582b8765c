//! Client configuration read from the environment.

use std::env;

pub const API_URL_VAR: &str = "TODO_API_URL";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000/todos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// URL of the to-do collection resource.
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_api_url(env::var(API_URL_VAR).ok())
    }

    fn from_api_url(value: Option<String>) -> Self {
        match value.map(|v| v.trim().to_string()) {
            Some(url) if !url.is_empty() => Self { api_url: url },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_uses_default() {
        assert_eq!(ClientConfig::from_api_url(None), ClientConfig::default());
    }

    #[test]
    fn blank_var_uses_default() {
        let config = ClientConfig::from_api_url(Some("  ".to_string()));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn explicit_url_is_used() {
        let config = ClientConfig::from_api_url(Some("http://api.test/todos".to_string()));
        assert_eq!(config.api_url, "http://api.test/todos");
    }
}
