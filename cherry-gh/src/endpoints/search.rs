//! # GitHub Search Endpoints
//!
//! Paginated access to the GitHub issue search API. The search API returns
//! results one page at a time; `SearchPages` is a lazy cursor over those
//! pages, and [`GitHubClient::search_issues`] drives it to completion.

use anyhow::{Context, Result};
use tracing::{debug, info, instrument, trace, warn};

use crate::client::GitHubClient;
use crate::consts::{SEARCH_PER_PAGE, SEARCH_RESULT_CAP};
use crate::models::{SearchItem, SearchResults};

/// Lazy cursor over the pages of one search query.
///
/// Each call to [`SearchPages::next_page`] issues one GET request with an
/// incrementing `page` parameter, starting at 1, and yields `None` on the
/// first page whose `items` array is empty or absent.
pub struct SearchPages<'a> {
  client: &'a GitHubClient,
  query: String,
  page: u32,
  done: bool,
}

impl<'a> SearchPages<'a> {
  pub(crate) fn new(client: &'a GitHubClient, query: impl Into<String>) -> Self {
    Self {
      client,
      query: query.into(),
      page: 0,
      done: false,
    }
  }

  /// Fetch the next page of results, or `None` once the results are exhausted
  pub async fn next_page(&mut self) -> Result<Option<Vec<SearchItem>>> {
    if self.done {
      return Ok(None);
    }

    self.page += 1;
    let results = self.client.search_issues_page(&self.query, self.page).await?;

    if self.page == 1 && results.total_count > SEARCH_RESULT_CAP {
      warn!(
        "Search matched {} results but the GitHub search API only returns the first {}",
        results.total_count, SEARCH_RESULT_CAP
      );
    }

    if results.items.is_empty() {
      self.done = true;
      return Ok(None);
    }

    Ok(Some(results.items))
  }
}

impl GitHubClient {
  /// Fetch a single page of issue search results.
  ///
  /// # Errors
  ///
  /// Returns an error if authentication fails, the request cannot be sent,
  /// or the response cannot be parsed.
  #[instrument(skip(self), level = "debug")]
  pub async fn search_issues_page(&self, query: &str, page: u32) -> Result<SearchResults> {
    debug!("Searching issues, page {}: {}", page, query);

    let url = format!("{}/search/issues", self.base_url);
    let per_page = SEARCH_PER_PAGE.to_string();
    let page_param = page.to_string();

    let response = self
      .get(&url)
      .query(&[
        ("q", query),
        ("per_page", per_page.as_str()),
        ("page", page_param.as_str()),
      ])
      .send()
      .await
      .context(format!("GET {url} failed"))?;

    let status = response.status();
    debug!("GitHub API response status: {}", status);

    match status {
      reqwest::StatusCode::OK => {
        let results = response
          .json::<SearchResults>()
          .await
          .context("Failed to parse GitHub search response")?;
        trace!("Search page {}: {} items", page, results.items.len());
        Ok(results)
      }
      reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
        warn!("Authentication failed when accessing GitHub API");
        Err(anyhow::anyhow!(
          "Authentication failed. Please check your GitHub credentials."
        ))
      }
      reqwest::StatusCode::UNPROCESSABLE_ENTITY => {
        let error_text = response.text().await.unwrap_or_default();
        Err(anyhow::anyhow!("GitHub rejected search query '{query}': {error_text}"))
      }
      _ => {
        let error_text = response.text().await.unwrap_or_default();
        warn!("Unexpected GitHub API error: HTTP {} - {}", status, error_text);
        Err(anyhow::anyhow!("Unexpected error: HTTP {status} - {error_text}"))
      }
    }
  }

  /// Fetch every result for a search query, page by page.
  ///
  /// Pagination stops at the first page whose item list is empty; any
  /// non-success response aborts the whole fetch.
  #[instrument(skip(self), level = "debug")]
  pub async fn search_issues(&self, query: &str) -> Result<Vec<SearchItem>> {
    let mut pages = SearchPages::new(self, query);
    let mut items = Vec::new();

    while let Some(page) = pages.next_page().await? {
      items.extend(page);
    }

    info!("Search '{}' returned {} items", query, items.len());
    Ok(items)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::client::create_github_client;

  fn search_item(number: u64) -> serde_json::Value {
    json!({
      "number": number,
      "html_url": format!("https://github.com/owner/repo/pull/{number}"),
      "title": format!("Change #{number}")
    })
  }

  #[tokio::test]
  async fn test_search_single_page_then_empty() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client("test_token").with_base_url(mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/search/issues"))
      .and(query_param("q", "is:pr is:merged milestone:3.0.1"))
      .and(query_param("page", "1"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "total_count": 2,
        "items": [search_item(10), search_item(12)]
      })))
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/search/issues"))
      .and(query_param("page", "2"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "total_count": 2,
        "items": []
      })))
      .mount(&mock_server)
      .await;

    let items = client.search_issues("is:pr is:merged milestone:3.0.1").await?;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].number, 10);
    assert_eq!(items[1].number, 12);

    Ok(())
  }

  #[tokio::test]
  async fn test_search_accumulates_multiple_pages() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client("test_token").with_base_url(mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/search/issues"))
      .and(query_param("page", "1"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "total_count": 3,
        "items": [search_item(1), search_item(2)]
      })))
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/search/issues"))
      .and(query_param("page", "2"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "total_count": 3,
        "items": [search_item(3)]
      })))
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/search/issues"))
      .and(query_param("page", "3"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "total_count": 3,
        "items": []
      })))
      .mount(&mock_server)
      .await;

    let items = client.search_issues("is:issue is:closed milestone:3.0.1").await?;

    assert_eq!(items.len(), 3);
    assert_eq!(items[2].number, 3);

    Ok(())
  }

  #[tokio::test]
  async fn test_search_empty_first_page() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client("test_token").with_base_url(mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/search/issues"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "total_count": 0,
        "items": []
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let items = client.search_issues("is:pr is:merged milestone:nothing").await?;

    assert!(items.is_empty());

    Ok(())
  }

  #[tokio::test]
  async fn test_search_absent_items_terminates() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client("test_token").with_base_url(mock_server.uri());

    // Some error-shaped responses omit the items array entirely
    Mock::given(method("GET"))
      .and(path("/search/issues"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total_count": 0 })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let items = client.search_issues("is:pr is:merged milestone:nothing").await?;

    assert!(items.is_empty());

    Ok(())
  }

  #[tokio::test]
  async fn test_search_http_failure() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client("bad_token").with_base_url(mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/search/issues"))
      .respond_with(ResponseTemplate::new(401))
      .mount(&mock_server)
      .await;

    let result = client.search_issues("is:pr is:merged milestone:3.0.1").await;

    assert!(result.is_err());

    Ok(())
  }

  #[tokio::test]
  async fn test_search_pages_cursor_is_lazy() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client("test_token").with_base_url(mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/search/issues"))
      .and(query_param("page", "1"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "total_count": 1,
        "items": [search_item(7)]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let mut pages = SearchPages::new(&client, "is:pr is:merged milestone:3.0.1");

    // Only the first page is requested until the caller asks for more
    let first = pages.next_page().await?.unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].number, 7);

    Ok(())
  }
}
