use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("ASANA_TOKEN is not set (pass --token or export ASANA_TOKEN)")]
    MissingToken,

    /// No record of `kind` carries exactly `name`.
    #[error("unable to find {kind} '{name}'")]
    NotFound { kind: &'static str, name: String },

    /// Non-200 response; the text is the most specific message the service gave.
    #[error("{0}")]
    Api(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    // The wrapped error is the source; `{:#}` appends its message.
    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
