use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://app.asana.com/api/1.0";

/// Connection settings fixed for the lifetime of one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub token: String,
}

impl Config {
    pub fn new(token: Option<String>, base_url: Option<String>) -> Result<Self> {
        let token = match token {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(Error::MissingToken),
        };
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Ok(Self { base_url, token })
    }
}
