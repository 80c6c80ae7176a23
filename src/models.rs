//! Data transfer objects mirroring Confluence Cloud REST API payloads.
//!
//! Content-side records follow the API's "omit what is absent" convention:
//! missing JSON fields decode to their default values, and default values
//! are skipped again on encode, so a decoded value re-serializes to the
//! payload it came from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serialization guard shared by numeric counters and nested records.
fn is_default<T: Default + PartialEq>(value: &T) -> bool {
  *value == T::default()
}

/// One page of a content listing, as returned by `/content/` and by
/// pagination (`next`) links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
  /// Content items on this page of results.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub results: Vec<ContentResult>,
  /// Zero-based offset of this page within the full listing.
  #[serde(default, skip_serializing_if = "is_default")]
  pub start: u32,
  /// Page size the server applied.
  #[serde(default, skip_serializing_if = "is_default")]
  pub limit: u32,
  /// Number of items actually present in `results`.
  #[serde(default, skip_serializing_if = "is_default")]
  pub size: u32,
  #[serde(rename = "_links", default, skip_serializing_if = "is_default")]
  /// Navigation links, including the `next` cursor when more pages exist.
  pub links: Links,
}

/// A single content item: page, blogpost, or attachment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentResult {
  /// Unique identifier assigned by Confluence.
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub id: String,
  #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
  /// Content type such as `"page"`, `"blogpost"`, or `"attachment"`.
  pub content_type: String,
  /// Publication status such as `"current"` or `"trashed"`.
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub status: String,
  /// Title displayed in the Confluence UI.
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub title: String,
  /// Nested child collections; attachments live here.
  #[serde(default, skip_serializing_if = "is_default")]
  pub children: Children,
  /// Body content in its storage representation.
  #[serde(default, skip_serializing_if = "is_default")]
  pub body: Body,
  #[serde(rename = "_expandable", default, skip_serializing_if = "is_default")]
  /// Fields the server can expand on request.
  pub expandable: Expandable,
  #[serde(rename = "_links", default, skip_serializing_if = "is_default")]
  /// Links for this item (web UI, download, self).
  pub links: Links,
  /// Attachment metadata such as the media type.
  #[serde(default, skip_serializing_if = "is_default")]
  pub metadata: Metadata,
}

/// Child collections nested under a content item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Children {
  /// The item's attachment collection, itself paginated.
  #[serde(default, skip_serializing_if = "is_default")]
  pub attachment: Attachment,
}

/// A paginated attachment collection, structurally identical to [`Content`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
  /// Attachments on this page of the collection.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub results: Vec<ContentResult>,
  /// Zero-based offset of this page within the collection.
  #[serde(default, skip_serializing_if = "is_default")]
  pub start: u32,
  /// Page size the server applied.
  #[serde(default, skip_serializing_if = "is_default")]
  pub limit: u32,
  /// Number of items actually present in `results`.
  #[serde(default, skip_serializing_if = "is_default")]
  pub size: u32,
  #[serde(rename = "_links", default, skip_serializing_if = "is_default")]
  /// Navigation links; `next` points at the following page while one exists.
  pub links: Links,
}

/// Body wrapper holding the storage representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
  /// Storage-format body, present when expanded via `body.storage`.
  #[serde(default, skip_serializing_if = "is_default")]
  pub storage: Storage,
}

/// Confluence storage-format content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Storage {
  /// Raw XHTML markup.
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub value: String,
  /// Representation name (typically `"storage"`).
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub representation: String,
  #[serde(rename = "embeddedContent", default, skip_serializing_if = "Vec::is_empty")]
  /// Embedded content references, shape left to the server.
  pub embedded_content: Vec<serde_json::Value>,
  #[serde(rename = "_expandable", default, skip_serializing_if = "is_default")]
  /// Fields the server can expand on request.
  pub expandable: Expandable,
}

/// Attachment metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
  #[serde(rename = "mediaType", default, skip_serializing_if = "String::is_empty")]
  /// MIME type reported for an attachment.
  pub media_type: String,
}

/// Expandable field references returned alongside content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expandable {
  /// API path for expanding the containing space.
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub space: String,
}

/// Navigation and self-reference links embedded in API responses.
///
/// An empty string means the server did not supply that link. `base` plus
/// `next` resolve to the absolute URL of the following page of results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
  /// Absolute base URL of the Confluence instance.
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub base: String,
  #[serde(rename = "self", default, skip_serializing_if = "String::is_empty")]
  /// Canonical API URL of the resource.
  pub self_link: String,
  /// Relative cursor link to the next page of results, empty on the last
  /// page.
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub next: String,
  /// Short-form UI link.
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub tinyui: String,
  /// Web UI path of the resource.
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub webui: String,
  /// Download path for attachment bytes.
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub download: String,
}

/// One page of CQL search results returned by `/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPageResults {
  /// Search hits on this page.
  #[serde(default)]
  pub results: Vec<SearchPageResult>,
  /// Zero-based offset of this page.
  #[serde(default)]
  pub start: u32,
  /// Page size the server applied.
  #[serde(default)]
  pub limit: u32,
  /// Number of hits present in `results`.
  #[serde(default)]
  pub size: u32,
  #[serde(rename = "totalSize", default)]
  /// Total number of hits across all pages.
  pub total_size: u32,
  #[serde(rename = "cqlQuery", default)]
  /// The CQL query the server executed.
  pub cql_query: String,
  #[serde(rename = "searchDuration", default)]
  /// Server-side search duration in milliseconds.
  pub search_duration: u32,
  #[serde(rename = "_links", default)]
  /// Navigation links for paging through the hits.
  pub links: Links,
}

/// A single search hit with excerpt and container context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPageResult {
  /// The matched content item.
  #[serde(default)]
  pub content: Content,
  /// Title of the matched item.
  #[serde(default)]
  pub title: String,
  /// Highlighted excerpt around the match.
  #[serde(default)]
  pub excerpt: String,
  /// Web URL of the matched item.
  #[serde(default)]
  pub url: String,
  #[serde(rename = "resultParentContainer", default)]
  /// Immediate parent container (usually the parent page).
  pub result_parent_container: ContainerSummary,
  #[serde(rename = "resultGlobalContainer", default)]
  /// Top-level container (usually the space).
  pub result_global_container: ContainerSummary,
  /// Breadcrumb trail from the space root to the item.
  #[serde(default)]
  pub breadcrumbs: Vec<Breadcrumb>,
  #[serde(rename = "entityType", default)]
  /// Entity class of the hit, such as `"content"`.
  pub entity_type: String,
  #[serde(rename = "iconCssClass", default)]
  /// CSS class hint for rendering an icon.
  pub icon_css_class: String,
  #[serde(rename = "lastModified", default)]
  /// Last modification timestamp, when the server supplies one.
  pub last_modified: Option<DateTime<Utc>>,
  #[serde(rename = "friendlyLastModified", default)]
  /// Human-readable rendering of `last_modified`.
  pub friendly_last_modified: String,
}

/// Compact description of a containing space or page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerSummary {
  /// Container title.
  #[serde(default)]
  pub title: String,
  #[serde(rename = "displayUrl", default)]
  /// Web URL of the container.
  pub display_url: String,
}

/// One element of a search hit's breadcrumb trail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
  /// Display label.
  #[serde(default)]
  pub label: String,
  /// Link target.
  #[serde(default)]
  pub url: String,
  /// Separator glyph the UI renders after the label.
  #[serde(default)]
  pub separator: String,
}
