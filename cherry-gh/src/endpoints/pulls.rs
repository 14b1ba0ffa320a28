//! # GitHub Pull Request Endpoints
//!
//! GitHub API endpoint implementations for pull request operations. Cherry
//! only needs the detail record of a single pull request, which carries the
//! merge commit SHA and merge timestamp.

use anyhow::{Context, Result};
use tracing::{debug, info, instrument, trace, warn};

use crate::client::GitHubClient;
use crate::models::PullRequestDetail;

impl GitHubClient {
  /// Get a specific pull request.
  ///
  /// # Errors
  ///
  /// Returns an error if the pull request is not found, authentication fails,
  /// the request cannot be sent, or the response cannot be parsed.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_pull_request(&self, owner: &str, repo: &str, pr_number: u64) -> Result<PullRequestDetail> {
    info!("Fetching pull request #{} for {}/{}", pr_number, owner, repo);

    let url = format!("{}/repos/{}/{}/pulls/{}", self.base_url, owner, repo, pr_number);

    trace!("GitHub API URL: {}", url);

    let response = self.get(&url).send().await.context(format!("GET {url} failed"))?;

    let status = response.status();
    debug!("GitHub API response status: {}", status);

    match status {
      reqwest::StatusCode::OK => {
        let pr = response
          .json::<PullRequestDetail>()
          .await
          .context("Failed to parse GitHub pull request response")?;
        trace!("Pull request: {:?}", pr);
        Ok(pr)
      }
      reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
        warn!("Authentication failed when accessing GitHub API");
        Err(anyhow::anyhow!(
          "Authentication failed. Please check your GitHub credentials."
        ))
      }
      reqwest::StatusCode::NOT_FOUND => Err(anyhow::anyhow!(
        "Pull request #{} not found for {}/{}",
        pr_number,
        owner,
        repo
      )),
      _ => {
        let error_text = response.text().await.unwrap_or_default();
        warn!("Unexpected GitHub API error: HTTP {} - {}", status, error_text);
        Err(anyhow::anyhow!("Unexpected error: HTTP {status} - {error_text}"))
      }
    }
  }
}
