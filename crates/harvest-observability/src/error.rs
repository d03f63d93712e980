//! Observability errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObservabilityError {
    /// Session id without the `sess_` prefix or with an empty body.
    #[error("Invalid session id: {0}")]
    InvalidSessionId(String),

    /// A global subscriber is already installed, or the filter did not parse.
    #[error("Failed to initialise tracing: {0}")]
    SubscriberInit(String),
}
