//! Confluence Cloud REST API client
//!
//! This library provides typed access to Confluence Cloud content and search:
//! HTTP basic authentication, status classification into structured errors,
//! query building with zero-value suppression, and cursor pagination.
//!
//! [`Method`] and [`Url`] are re-exported so callers can drive
//! [`ConfluenceClient::send_content_request`] without depending on `reqwest`
//! or `url` directly.
//!
//! ```no_run
//! use confluence_cloud::{ConfluenceClient, ContentQuery};
//!
//! # #[tokio::main]
//! # async fn main() -> confluence_cloud::Result<()> {
//! let client = ConfluenceClient::new(
//!   "https://example.atlassian.net/wiki/rest/api",
//!   "user@example.com",
//!   "api-token",
//! )?;
//!
//! let page = client
//!   .get_content(&ContentQuery {
//!     space_key: "DOCS".to_string(),
//!     limit: 25,
//!     ..Default::default()
//!   })
//!   .await?;
//!
//! for result in &page.results {
//!   println!("{} {}", result.id, result.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
mod content;
pub mod error;
pub mod models;
pub mod query;
mod search;

pub use api::ConfluenceApi;
pub use client::ConfluenceClient;
pub use error::{Error, Result};
pub use models::{
  Attachment, Body, Breadcrumb, Children, ContainerSummary, Content, ContentResult, Expandable, Links, Metadata,
  SearchPageResult, SearchPageResults, Storage,
};
pub use query::{ContentQuery, SearchContentQuery};
pub use reqwest::Method;
pub use url::Url;
