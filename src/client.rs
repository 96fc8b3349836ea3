use std::fmt;

use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};

/// Form-encoded request body.
pub type Form<'a> = &'a [(&'a str, String)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A remote JSON API reachable through absolute URLs.
pub trait Api {
    fn base_url(&self) -> &str;

    /// Issue one request. Only HTTP 200 counts as success; its body must be JSON.
    fn call(&self, method: Method, url: &str, form: Option<Form<'_>>) -> Result<Value>;

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }

    fn get(&self, url: &str) -> Result<Value> {
        self.call(Method::Get, url, None)
    }
}

/// Blocking HTTP client carrying the bearer token on every request.
pub struct HttpClient {
    http: Client,
    config: Config,
}

impl HttpClient {
    pub fn new(config: Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("asana-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }
}

impl Api for HttpClient {
    fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn call(&self, method: Method, url: &str, form: Option<Form<'_>>) -> Result<Value> {
        debug!("{method} {url}");
        let mut request = self
            .http
            .request(method.into(), url)
            .bearer_auth(&self.config.token);
        if let Some(form) = form {
            request = request.form(form);
        }
        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;
        debug!("{method} {url} -> {status}");

        if status != StatusCode::OK {
            return Err(Error::Api(failure_text(&body)));
        }
        serde_json::from_str(&body).map_err(|e| Error::Malformed(format!("{e} (from {url})")))
    }
}

/// Derive the user-facing text for a failed response body.
///
/// A single `{"message", "help"}` error object becomes `"{message}. {help}"`.
/// Any other JSON body is returned re-serialized in full, and a non-JSON
/// body is returned as-is.
pub fn failure_text(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };
    if let Some([only]) = value.get("errors").and_then(Value::as_array).map(Vec::as_slice) {
        let message = only.get("message").and_then(Value::as_str);
        let help = only.get("help").and_then(Value::as_str);
        if let (Some(message), Some(help)) = (message, help) {
            return format!("{message}. {help}");
        }
    }
    value.to_string()
}
