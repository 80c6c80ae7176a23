//! Typed query parameters for content and search requests.
//!
//! Builders turn a query struct into the key/value pairs that go on the
//! request URL. A field set to its zero value (`0`, `""`, empty list or map,
//! `false`) is omitted entirely rather than sent as an empty parameter, so
//! the wire query carries exactly the filters the caller chose.

use std::collections::BTreeMap;

/// Filters and paging controls for content listings (`GET /content/`).
///
/// Construct with struct-update syntax, leaving unused filters at their
/// defaults:
///
/// ```
/// use confluence_cloud::ContentQuery;
///
/// let query = ContentQuery {
///   space_key: "DOCS".to_string(),
///   limit: 25,
///   ..Default::default()
/// };
/// assert_eq!(query.to_query_params(), vec![("limit", "25".to_string()), ("spaceKey", "DOCS".to_string())]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentQuery {
  /// Properties to expand in the response, e.g. `body.storage` or
  /// `children.attachment`; joined with commas on the wire.
  pub expand: Vec<String>,
  /// Maximum number of items per page; `0` leaves the server default.
  pub limit: u32,
  /// Sort order as a field path plus direction, e.g.
  /// `history.createdDate desc`.
  pub order_by: String,
  /// Publication day (`yyyy-mm-dd`), required when querying blogposts.
  pub posting_day: String,
  /// Space key to search within.
  pub space_key: String,
  /// Zero-based offset of the first item to return.
  pub start: u32,
  /// Content status filter: `current`, `trashed`, `draft`, or `any`.
  pub status: String,
  /// Title to match, required when querying pages.
  pub title: String,
  /// Event trigger filter, e.g. `viewed`.
  pub trigger: String,
  /// Content type to list: `page` or `blogpost`.
  pub content_type: String,
  /// Specific version to fetch; `0` means the latest.
  pub version: u32,
}

impl ContentQuery {
  /// Wire parameters for this query, zero-valued fields omitted.
  pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if !self.expand.is_empty() {
      params.push(("expand", self.expand.join(",")));
    }
    if self.version != 0 {
      params.push(("version", self.version.to_string()));
    }
    if self.limit != 0 {
      params.push(("limit", self.limit.to_string()));
    }
    if !self.order_by.is_empty() {
      params.push(("orderby", self.order_by.clone()));
    }
    if !self.posting_day.is_empty() {
      params.push(("postingDay", self.posting_day.clone()));
    }
    if !self.space_key.is_empty() {
      params.push(("spaceKey", self.space_key.clone()));
    }
    if self.start != 0 {
      params.push(("start", self.start.to_string()));
    }
    if !self.status.is_empty() {
      params.push(("status", self.status.clone()));
    }
    if !self.title.is_empty() {
      params.push(("title", self.title.clone()));
    }
    if !self.trigger.is_empty() {
      params.push(("trigger", self.trigger.clone()));
    }
    if !self.content_type.is_empty() {
      params.push(("type", self.content_type.clone()));
    }
    params
  }
}

/// Parameters for CQL searches (`GET /search`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchContentQuery {
  /// The CQL query to execute.
  pub cql: String,
  /// Execution context for the query (`spaceKey`, `contentId`,
  /// `contentStatuses`); sent as a JSON-encoded object. A `BTreeMap` keeps
  /// the encoding stable across runs.
  pub cql_context: BTreeMap<String, String>,
  /// Cursor into a result set, taken from the `next` or `prev` URL of a
  /// previous search response.
  pub cursor: String,
  /// Maximum number of results per page; `0` leaves the server default.
  pub limit: u32,
  /// Include content from archived spaces.
  pub include_archived_spaces: bool,
}

impl SearchContentQuery {
  /// Wire parameters for this query, zero-valued fields omitted.
  pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if !self.cql.is_empty() {
      params.push(("cql", self.cql.clone()));
    }
    if !self.cql_context.is_empty()
      && let Ok(context) = serde_json::to_string(&self.cql_context)
    {
      params.push(("cqlcontext", context));
    }
    if self.limit != 0 {
      params.push(("limit", self.limit.to_string()));
    }
    if !self.cursor.is_empty() {
      params.push(("cursor", self.cursor.clone()));
    }
    if self.include_archived_spaces {
      params.push(("includeArchivedSpaces", "true".to_string()));
    }
    params
  }
}
