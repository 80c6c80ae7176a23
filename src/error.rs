//! Error types for Confluence Cloud API operations.

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error raised by client construction, request execution, or response
/// decoding.
///
/// HTTP status codes map onto the `AuthenticationFailed` /
/// `ServiceUnavailable` / `InternalServerError` / `Conflict` /
/// `UnknownStatus` variants; everything else is surfaced where it occurred
/// and never retried or wrapped further.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// Base URL or resolved endpoint is empty or not a valid absolute URI.
  #[error("invalid endpoint: {0}")]
  InvalidEndpoint(String),

  /// Network-level failure (DNS, connect, TLS handshake), propagated
  /// verbatim from the transport.
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  /// Server answered 401 Unauthorized.
  #[error("authentication failed")]
  AuthenticationFailed,

  /// Server answered 503; carries the status line.
  #[error("service is not available: {0}")]
  ServiceUnavailable(String),

  /// Server answered 500; carries the status line.
  #[error("internal server error: {0}")]
  InternalServerError(String),

  /// Server answered 409; carries the status line.
  #[error("conflict: {0}")]
  Conflict(String),

  /// Any status code outside the classified set; carries the status line
  /// including the numeric code.
  #[error("unknown response status: {0}")]
  UnknownStatus(String),

  /// Request or response body was not JSON of the expected shape.
  #[error("decode error: {0}")]
  Decode(#[from] serde_json::Error),
}
