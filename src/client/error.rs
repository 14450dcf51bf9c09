use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Server answered with a non-2xx status.
    ///
    /// `message` is the server's message, or "Request failed with status N" when
    /// the body carried none. `errors` holds per-field validation messages.
    #[error("{message}")]
    Status {
        message: String,
        status: u16,
        errors: Option<HashMap<String, Vec<String>>>,
    },

    /// A 401 could not be recovered by refreshing; stored tokens were cleared.
    #[error("Session expired. Please login again.")]
    SessionExpired,

    /// The request never produced a response.
    #[error("Network error. Please check your connection.")]
    Network(#[source] reqwest::Error),

    /// Response body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of the failure; `0` when no response was received.
    pub fn status(&self) -> u16 {
        match self {
            Self::Status { status, .. } => *status,
            Self::SessionExpired => 401,
            Self::Network(_) | Self::Decode(_) => 0,
        }
    }

    pub fn errors(&self) -> Option<&HashMap<String, Vec<String>>> {
        match self {
            Self::Status { errors, .. } => errors.as_ref(),
            _ => None,
        }
    }
}
