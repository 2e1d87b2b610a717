use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Errors returned by wallet operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP exchange itself failed: the request never produced a
    /// response, or the response was unusable (non-2xx with no parseable
    /// body, or a non-2xx body that carried no provider error code).
    #[error("transport error: {0}")]
    Transport(String),

    /// A 2xx response whose body was not valid JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The provider reported a business failure inside the response body.
    /// The HTTP status is irrelevant: presence of `errorCode` is the sole
    /// discriminator.
    #[error("remote error: {0}")]
    Remote(RemoteError),

    /// A phone/card detection call completed over HTTP but resolved to
    /// "no match found", so the dependent payment was never constructed.
    #[error("detection failed: {0}")]
    DetectionFailed(String),

    /// Invalid configuration or caller input, caught before any network
    /// call is made.
    #[error("config error: {0}")]
    Config(String),
}

/// A provider-reported failure, carried verbatim.
///
/// `error_code` is extracted from the body's `errorCode` field; `body`
/// holds the full payload so callers can branch on provider-specific
/// fields (`description`, `userMessage`, ...).
#[derive(Debug, Clone)]
pub struct RemoteError {
    pub error_code: String,
    pub body: Value,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_code)?;
        if let Some(description) = self.body.get("description").and_then(Value::as_str) {
            write!(f, " ({description})")?;
        }
        Ok(())
    }
}
