//! Error types for the translation core.

use thiserror::Error;

/// A request that was rejected before any network traffic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("source locale '{0}' is not a 2-letter ISO 639-1 code")]
    InvalidLocale(String),

    #[error("target locales must be a non-empty list of 2-letter ISO 639-1 codes (got [{}])", .0.join(", "))]
    InvalidLocaleList(Vec<String>),

    #[error("unknown locale code '{0}'")]
    UnknownLocale(String),

    #[error("no sentences to translate")]
    EmptyInput,
}

/// Everything that can go wrong during a single translation call.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}", transport_message(.status, .message))]
    Transport {
        status: Option<u16>,
        message: String,
    },

    #[error("completion is not complete (finish_reason: {finish_reason})")]
    IncompleteResponse { finish_reason: String },

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),

    #[error("malformed translation payload: {0}")]
    MalformedPayload(String),
}

impl TranslateError {
    /// Short tag naming the failure kind, used in log fields and exit codes.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Validation(_) => "validation",
            Self::Transport { .. } => "transport",
            Self::IncompleteResponse { .. } => "incomplete_response",
            Self::MalformedResponse(_) => "malformed_response",
            Self::MalformedPayload(_) => "malformed_payload",
        }
    }

    pub(crate) fn transport(err: &reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {err}")
        } else {
            format!("failed to reach completion endpoint: {err}")
        };
        Self::Transport {
            status: err.status().map(|s| s.as_u16()),
            message,
        }
    }
}

fn transport_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("API request failed with status {code}: {message}"),
        None => message.to_string(),
    }
}
