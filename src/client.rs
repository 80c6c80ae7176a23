//! HTTP client for the Confluence Cloud REST API.
//!
//! [`ConfluenceClient`] holds the validated base endpoint, the transport,
//! and optional basic-auth credentials. Every operation in this crate funnels
//! through [`ConfluenceClient::request`], which attaches headers, performs a
//! single send, and classifies the response status.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Method, Request, StatusCode};
use tracing::{debug, trace};
use url::Url;

use crate::error::{Error, Result};
use crate::models::Content;

/// Confluence Cloud API client.
///
/// Obtain one via [`ConfluenceClient::new`] (owned transport, basic auth) or
/// [`ConfluenceClient::with_client`] (caller-supplied transport, e.g. for
/// OAuth). Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct ConfluenceClient {
  base_url: String,
  http: reqwest::Client,
  username: String,
  token: String,
}

impl ConfluenceClient {
  /// Create a client that owns its transport and authenticates with HTTP
  /// Basic credentials.
  ///
  /// TLS certificate verification starts enabled; see
  /// [`ConfluenceClient::verify_tls`] to change it. Passing empty credentials
  /// is allowed and yields anonymous access to public spaces.
  ///
  /// # Arguments
  /// * `base_url` - API endpoint including the REST prefix, e.g.
  ///   `https://example.atlassian.net/wiki/rest/api`
  /// * `username` - The user's email address
  /// * `token` - The API token
  ///
  /// # Errors
  /// Returns [`Error::InvalidEndpoint`] when `base_url` is empty or not an
  /// absolute URI, or [`Error::Transport`] when the HTTP client cannot be
  /// built.
  pub fn new(base_url: impl Into<String>, username: impl Into<String>, token: impl Into<String>) -> Result<Self> {
    let base_url = validate_base_url(&base_url.into())?;

    Ok(Self {
      base_url,
      http: build_http_client(true)?,
      username: username.into(),
      token: token.into(),
    })
  }

  /// Create a client around an existing `reqwest::Client`.
  ///
  /// No credentials are stored: requests go out unauthenticated unless the
  /// supplied transport injects its own authentication (OAuth middleware,
  /// proxy headers, and so on). The transport is treated as opaque and never
  /// reconfigured by this crate.
  ///
  /// # Errors
  /// Returns [`Error::InvalidEndpoint`] when `base_url` is empty or not an
  /// absolute URI.
  pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Result<Self> {
    let base_url = validate_base_url(&base_url.into())?;

    Ok(Self {
      base_url,
      http: client,
      username: String::new(),
      token: String::new(),
    })
  }

  /// The validated base URL, without a trailing slash.
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Enable or disable TLS certificate verification.
  ///
  /// Replaces the transport with a freshly built one, discarding any custom
  /// client previously supplied via [`ConfluenceClient::with_client`]. Must
  /// not be called while requests are in flight on clones of this client.
  ///
  /// # Errors
  /// Returns [`Error::Transport`] when the replacement client cannot be
  /// built.
  pub fn verify_tls(&mut self, enabled: bool) -> Result<()> {
    self.http = build_http_client(enabled)?;
    Ok(())
  }

  /// Attach HTTP Basic authentication to `req`.
  ///
  /// The header is added only when both username and token are non-empty;
  /// otherwise the request is left untouched, supporting anonymous access to
  /// public spaces.
  pub fn auth(&self, req: &mut Request) {
    if !self.username.is_empty() && !self.token.is_empty() {
      let credentials = format!("{}:{}", self.username, self.token);
      let header = format!("Basic {}", BASE64.encode(credentials.as_bytes()));
      let value = HeaderValue::from_str(&header).expect("base64 credentials are always a valid header value");
      req.headers_mut().insert(AUTHORIZATION, value);
    }
  }

  /// Send a prepared request and classify the response.
  ///
  /// Sets `Accept: application/json, */*`, attaches credentials when
  /// available, and performs exactly one network attempt. The response body
  /// is returned raw for 200/201/206; 204/205 yield an empty buffer without
  /// an error.
  ///
  /// # Errors
  /// * [`Error::Transport`] for network-level failures, unmodified.
  /// * [`Error::AuthenticationFailed`] for 401.
  /// * [`Error::ServiceUnavailable`] for 503, [`Error::InternalServerError`]
  ///   for 500, [`Error::Conflict`] for 409, each carrying the status line.
  /// * [`Error::UnknownStatus`] for any other code, carrying the numeric
  ///   code and status text.
  pub async fn request(&self, mut req: Request) -> Result<Vec<u8>> {
    req
      .headers_mut()
      .insert(ACCEPT, HeaderValue::from_static("application/json, */*"));

    // only auth when credentials were supplied at construction
    if !self.username.is_empty() || !self.token.is_empty() {
      self.auth(&mut req);
    }

    debug!("request: {} {}", req.method(), req.url());
    if let Some(body) = req.body().and_then(|body| body.as_bytes()) {
      trace!("request body: {}", String::from_utf8_lossy(body));
    }

    let response = self.http.execute(req).await?;
    let status = response.status();
    let body = response.bytes().await?;

    debug!("response: {} ({} bytes)", status_line(status), body.len());
    trace!("response body: {}", String::from_utf8_lossy(&body));

    match status.as_u16() {
      200 | 201 | 206 => Ok(body.to_vec()),
      204 | 205 => Ok(Vec::new()),
      401 => Err(Error::AuthenticationFailed),
      503 => Err(Error::ServiceUnavailable(status_line(status))),
      500 => Err(Error::InternalServerError(status_line(status))),
      409 => Err(Error::Conflict(status_line(status))),
      _ => Err(Error::UnknownStatus(status_line(status))),
    }
  }

  /// Issue a content request with an arbitrary method: the single entry
  /// point for creating, updating, and deleting content.
  ///
  /// A provided `content` body is JSON-serialized and sent with
  /// `Content-Type: application/json`; the response body is decoded into
  /// [`Content`].
  ///
  /// # Arguments
  /// * `endpoint` - Absolute URL of the content resource, typically built
  ///   with [`ConfluenceClient::content_endpoint`] or
  ///   [`ConfluenceClient::content_id_endpoint`].
  /// * `method` - HTTP method to use, e.g. [`Method::POST`] to create or
  ///   [`Method::PUT`] to update.
  /// * `content` - Optional request body.
  ///
  /// # Errors
  /// Propagates [`ConfluenceClient::request`] failures unchanged and returns
  /// [`Error::Decode`] when either body fails JSON (de)serialization.
  pub async fn send_content_request(&self, endpoint: Url, method: Method, content: Option<&Content>) -> Result<Content> {
    let mut req = Request::new(method, endpoint);

    if let Some(content) = content {
      let payload = serde_json::to_vec(content)?;
      req.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
      *req.body_mut() = Some(payload.into());
    }

    let body = self.request(req).await?;
    let content: Content = serde_json::from_slice(&body)?;
    Ok(content)
  }

  /// Join the base URL with a resource path suffix and re-parse the result
  /// as a strict absolute URI.
  pub(crate) fn resolve(&self, path: &str) -> Result<Url> {
    parse_absolute(&format!("{}{}", self.base_url, path))
  }
}

/// Parse an absolute URL, mapping failures to [`Error::InvalidEndpoint`].
pub(crate) fn parse_absolute(location: &str) -> Result<Url> {
  Url::parse(location).map_err(|err| Error::InvalidEndpoint(format!("{location}: {err}")))
}

/// Validate and normalize a caller-supplied base URL.
fn validate_base_url(location: &str) -> Result<String> {
  if location.is_empty() {
    return Err(Error::InvalidEndpoint("empty URL".to_string()));
  }

  let trimmed = location.trim_end_matches('/');
  Url::parse(trimmed).map_err(|err| Error::InvalidEndpoint(format!("{location}: {err}")))?;

  Ok(trimmed.to_string())
}

/// Build an owned transport with the crate's user agent.
fn build_http_client(verify_tls: bool) -> Result<reqwest::Client> {
  let client = reqwest::Client::builder()
    .user_agent(concat!("confluence-cloud/", env!("CARGO_PKG_VERSION")))
    .danger_accept_invalid_certs(!verify_tls)
    .build()?;

  Ok(client)
}

/// Reconstruct the status line, e.g. `503 Service Unavailable`.
fn status_line(status: StatusCode) -> String {
  match status.canonical_reason() {
    Some(reason) => format!("{} {}", status.as_u16(), reason),
    None => status.as_u16().to_string(),
  }
}
