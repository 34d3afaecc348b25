//! HTTP client for the gateway API.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the shared types do not pull in `reqwest`.

mod payments;

pub use payments::PaymentClient;

use crate::error::ApiError;

/// Header carrying the merchant terminal identifier, sent on every request.
pub const TERMINAL_ID_HEADER: &str = "X-Terminal-Id";

/// Header carrying the pre-shared signature token, sent when configured.
pub const SIGNATURE_HEADER: &str = "X-Signature";

/// Errors produced by the SDK HTTP client.
///
/// The three fault categories are disjoint: `Json`/`Url` are local faults
/// (the call never left the process, or its result did not match the wire
/// schema), `Http` is a transport fault (the call never completed at the
/// API level), and `Api` means the gateway itself rejected the request.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, timeout,
    /// cancellation, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with status >= 400.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A request body could not be encoded, or a response body could not
    /// be decoded, as JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    /// The classified gateway error, when this is an API fault.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(error) => Some(error),
            _ => None,
        }
    }
}
