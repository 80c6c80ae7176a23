//! Content operations: listing, cursor pagination, and attachment
//! enumeration.

use reqwest::{Method, Request};
use url::Url;

use crate::client::{ConfluenceClient, parse_absolute};
use crate::error::Result;
use crate::models::{Content, ContentResult, Links};
use crate::query::ContentQuery;

impl ConfluenceClient {
  /// Endpoint of the content collection, `<base>/content/`.
  ///
  /// # Errors
  /// Returns [`Error::InvalidEndpoint`](crate::Error::InvalidEndpoint) when
  /// the joined URL does not parse.
  pub fn content_endpoint(&self) -> Result<Url> {
    self.resolve("/content/")
  }

  /// Endpoint of a single content item, `<base>/content/<id>`.
  ///
  /// # Errors
  /// Returns [`Error::InvalidEndpoint`](crate::Error::InvalidEndpoint) when
  /// the joined URL does not parse.
  pub fn content_id_endpoint(&self, id: &str) -> Result<Url> {
    self.resolve(&format!("/content/{id}"))
  }

  /// Endpoint of a child collection, `<base>/content/<id>/child/<child_type>`,
  /// e.g. `child/attachment` for a page's attachments.
  ///
  /// # Errors
  /// Returns [`Error::InvalidEndpoint`](crate::Error::InvalidEndpoint) when
  /// the joined URL does not parse.
  pub fn content_child_endpoint(&self, id: &str, child_type: &str) -> Result<Url> {
    self.resolve(&format!("/content/{id}/child/{child_type}"))
  }

  /// Endpoint of an arbitrary sub-resource, `<base>/content/<id>/<segment>`,
  /// e.g. `history` or `restriction`.
  ///
  /// # Errors
  /// Returns [`Error::InvalidEndpoint`](crate::Error::InvalidEndpoint) when
  /// the joined URL does not parse.
  pub fn content_generic_endpoint(&self, id: &str, segment: &str) -> Result<Url> {
    self.resolve(&format!("/content/{id}/{segment}"))
  }

  /// Fetch one page of content matching `query`.
  ///
  /// Query parameters with zero values are omitted from the request; see
  /// [`ContentQuery`] for the supported filters. The returned page carries
  /// the pagination links used by
  /// [`get_content_from_next`](ConfluenceClient::get_content_from_next).
  ///
  /// # Errors
  /// Propagates [`request`](ConfluenceClient::request) failures and returns
  /// [`Error::Decode`](crate::Error::Decode) when the body is not a valid
  /// content page.
  pub async fn get_content(&self, query: &ContentQuery) -> Result<Content> {
    let mut endpoint = self.content_endpoint()?;
    let params = query.to_query_params();
    if !params.is_empty() {
      endpoint.query_pairs_mut().extend_pairs(params);
    }

    self.fetch_content_page(endpoint).await
  }

  /// Fetch the page after the one that produced `links`.
  ///
  /// Returns `Ok(None)` when `links` has no base URL or no next cursor,
  /// which is the natural end of iteration:
  ///
  /// ```no_run
  /// # use confluence_cloud::{ConfluenceClient, ContentQuery};
  /// # #[tokio::main]
  /// # async fn main() -> confluence_cloud::Result<()> {
  /// # let client = ConfluenceClient::new("https://test.test", "", "")?;
  /// let mut page = Some(client.get_content(&ContentQuery::default()).await?);
  /// while let Some(current) = page {
  ///   for result in &current.results {
  ///     println!("{}", result.title);
  ///   }
  ///   page = client.get_content_from_next(&current.links).await?;
  /// }
  /// # Ok(())
  /// # }
  /// ```
  ///
  /// # Errors
  /// Returns [`Error::InvalidEndpoint`](crate::Error::InvalidEndpoint) when
  /// base and cursor do not combine into a valid URL, and otherwise the same
  /// failures as [`get_content`](ConfluenceClient::get_content).
  pub async fn get_content_from_next(&self, links: &Links) -> Result<Option<Content>> {
    if links.base.is_empty() || links.next.is_empty() {
      return Ok(None);
    }

    let endpoint = parse_absolute(&format!("{}{}", links.base, links.next))?;
    let content = self.fetch_content_page(endpoint).await?;
    Ok(Some(content))
  }

  /// Collect every attachment of `result`, following pagination to the end.
  ///
  /// The attachments embedded in `result` (fetched with e.g.
  /// `expand=children.attachment`) seed the list; additional pages are
  /// requested from `base_url` joined with each page's next cursor until a
  /// page carries no cursor. Order is preserved across pages.
  ///
  /// # Arguments
  /// * `result` - Content item whose attachments to enumerate.
  /// * `base_url` - Site base the relative next links are resolved against,
  ///   typically the `base` of a previously fetched page's links.
  ///
  /// # Errors
  /// Returns [`Error::InvalidEndpoint`](crate::Error::InvalidEndpoint) for a
  /// malformed continuation URL, and otherwise the same failures as
  /// [`get_content`](ConfluenceClient::get_content). Results gathered before
  /// the failure are discarded.
  pub async fn get_attachments_from_result(&self, result: &ContentResult, base_url: &str) -> Result<Vec<ContentResult>> {
    let mut attachments = result.children.attachment.results.clone();
    let mut next = result.children.attachment.links.next.clone();

    while !next.is_empty() {
      let endpoint = parse_absolute(&format!("{base_url}{next}"))?;
      let page = self.fetch_content_page(endpoint).await?;

      attachments.extend(page.results);
      next = page.links.next;
    }

    Ok(attachments)
  }

  /// GET `endpoint` and decode the body as a content page.
  async fn fetch_content_page(&self, endpoint: Url) -> Result<Content> {
    let req = Request::new(Method::GET, endpoint);
    let body = self.request(req).await?;
    let content: Content = serde_json::from_slice(&body)?;
    Ok(content)
  }
}
