// MIT License - Copyright (c) 2026 prosegur-smart contributors
// Prosegur Smart client

/// All errors that can occur in the prosegur-smart library.
#[derive(Debug, thiserror::Error)]
pub enum ProsegurError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("'{code}' is not a recognised installation status code")]
    UnrecognizedStatusCode { code: String },

    #[error("Installation index {index} out of range ({len} installations)")]
    InstallationIndex { index: usize, len: usize },

    #[error("Missing or malformed field: {field}")]
    MissingField { field: &'static str },

    #[error("Unsupported country: {code} (expected PT or ES)")]
    UnsupportedCountry { code: String },

    #[error("Could not login (HTTP {status})")]
    LoginFailed { status: u16 },

    #[error("Request refused by backend (HTTP {status})")]
    Refused { status: u16 },

    #[error("Prosegur backend is unresponsive (HTTP {status})")]
    BackendUnavailable { status: u16 },

    #[error("HTTP {status}: couldn't {method} {path}: {body}")]
    UnexpectedStatus {
        status: u16,
        method: String,
        path: String,
        body: String,
    },
}

impl ProsegurError {
    /// Whether this error is transient and the request could be retried by the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProsegurError::Http(e) => e.is_timeout() || e.is_connect(),
            ProsegurError::BackendUnavailable { .. } | ProsegurError::Refused { .. } => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProsegurError>;
