//! CQL search against the site-wide search endpoint.

use reqwest::{Method, Request};
use url::Url;

use crate::client::ConfluenceClient;
use crate::error::Result;
use crate::models::SearchPageResults;
use crate::query::SearchContentQuery;

impl ConfluenceClient {
  /// Endpoint of the search resource, `<base>/search`.
  ///
  /// # Errors
  /// Returns [`Error::InvalidEndpoint`](crate::Error::InvalidEndpoint) when
  /// the joined URL does not parse.
  pub fn search_endpoint(&self) -> Result<Url> {
    self.resolve("/search")
  }

  /// Run a CQL search and return one page of results.
  ///
  /// The CQL expression itself is passed through verbatim; validation is
  /// left to the server, which reports malformed queries as HTTP errors.
  /// Continue iteration by copying the next page's cursor out of the
  /// response links into [`SearchContentQuery::cursor`].
  ///
  /// # Errors
  /// Propagates [`request`](ConfluenceClient::request) failures and returns
  /// [`Error::Decode`](crate::Error::Decode) when the body is not a valid
  /// search page.
  pub async fn get_search_content_results(&self, query: &SearchContentQuery) -> Result<SearchPageResults> {
    let mut endpoint = self.search_endpoint()?;
    let params = query.to_query_params();
    if !params.is_empty() {
      endpoint.query_pairs_mut().extend_pairs(params);
    }

    let req = Request::new(Method::GET, endpoint);
    let body = self.request(req).await?;
    let results: SearchPageResults = serde_json::from_slice(&body)?;
    Ok(results)
  }
}
