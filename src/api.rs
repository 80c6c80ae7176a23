//! Trait definitions for interacting with Confluence.

use async_trait::async_trait;
use reqwest::Method;
use url::Url;

use crate::client::ConfluenceClient;
use crate::error::Result;
use crate::models::{Content, ContentResult, Links, SearchPageResults};
use crate::query::{ContentQuery, SearchContentQuery};

/// Trait for Confluence API operations (enables testing with fake
/// implementations).
#[async_trait]
pub trait ConfluenceApi: Send + Sync {
  /// Fetch one page of content matching `query`.
  ///
  /// # Arguments
  /// * `query` - Filters and paging controls; zero values are not sent.
  ///
  /// # Returns
  /// One page of results together with the links needed to fetch the next
  /// page.
  async fn get_content(&self, query: &ContentQuery) -> Result<Content>;

  /// Fetch the page following the one that produced `links`.
  ///
  /// # Arguments
  /// * `links` - The `links` of a previously fetched page.
  ///
  /// # Returns
  /// The next page, or `None` when `links` carries no continuation.
  async fn get_content_from_next(&self, links: &Links) -> Result<Option<Content>>;

  /// Collect every attachment of a content item across all pages.
  ///
  /// # Arguments
  /// * `result` - Content item with expanded `children.attachment`.
  /// * `base_url` - Site base the relative next links are resolved against.
  ///
  /// # Returns
  /// All attachments in server order, the embedded ones first.
  async fn get_attachments_from_result(&self, result: &ContentResult, base_url: &str) -> Result<Vec<ContentResult>>;

  /// Run a CQL search.
  ///
  /// # Arguments
  /// * `query` - CQL expression plus paging and context controls.
  ///
  /// # Returns
  /// One page of search results with relevance metadata.
  async fn get_search_content_results(&self, query: &SearchContentQuery) -> Result<SearchPageResults>;

  /// Issue a content write with an arbitrary HTTP method.
  ///
  /// # Arguments
  /// * `endpoint` - Absolute URL of the content resource.
  /// * `method` - HTTP method to use.
  /// * `content` - Optional JSON request body.
  ///
  /// # Returns
  /// The content record the server echoed back.
  async fn send_content_request(&self, endpoint: Url, method: Method, content: Option<&Content>) -> Result<Content>;
}

#[async_trait]
impl ConfluenceApi for ConfluenceClient {
  async fn get_content(&self, query: &ContentQuery) -> Result<Content> {
    ConfluenceClient::get_content(self, query).await
  }

  async fn get_content_from_next(&self, links: &Links) -> Result<Option<Content>> {
    ConfluenceClient::get_content_from_next(self, links).await
  }

  async fn get_attachments_from_result(&self, result: &ContentResult, base_url: &str) -> Result<Vec<ContentResult>> {
    ConfluenceClient::get_attachments_from_result(self, result, base_url).await
  }

  async fn get_search_content_results(&self, query: &SearchContentQuery) -> Result<SearchPageResults> {
    ConfluenceClient::get_search_content_results(self, query).await
  }

  async fn send_content_request(&self, endpoint: Url, method: Method, content: Option<&Content>) -> Result<Content> {
    ConfluenceClient::send_content_request(self, endpoint, method, content).await
  }
}
