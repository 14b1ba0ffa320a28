//! GitHub Issues API endpoint implementations.

use anyhow::{Context, Result};
use tracing::{debug, info, instrument, trace, warn};

use crate::client::GitHubClient;
use crate::models::TimelineEvent;

impl GitHubClient {
  /// Get the timeline of a specific issue.
  ///
  /// The timeline carries `cross-referenced` events, which is how an issue
  /// links back to the pull request that closed it.
  ///
  /// # Errors
  ///
  /// Returns an error if the issue is not found, authentication fails,
  /// the request cannot be sent, or the response cannot be parsed.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue_timeline(&self, owner: &str, repo: &str, issue_number: u64) -> Result<Vec<TimelineEvent>> {
    info!("Fetching timeline for issue #{} in {}/{}", issue_number, owner, repo);

    let url = format!(
      "{}/repos/{}/{}/issues/{}/timeline",
      self.base_url, owner, repo, issue_number
    );

    trace!("GitHub API URL: {}", url);

    let response = self.get(&url).send().await.context(format!("GET {url} failed"))?;

    let status = response.status();
    debug!("GitHub API response status: {}", status);

    match status {
      reqwest::StatusCode::OK => {
        let events = response
          .json::<Vec<TimelineEvent>>()
          .await
          .context("Failed to parse GitHub issue timeline response")?;
        trace!("Timeline for issue #{}: {} events", issue_number, events.len());
        Ok(events)
      }
      reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
        warn!("Authentication failed when accessing GitHub API");
        Err(anyhow::anyhow!(
          "Authentication failed. Please check your GitHub credentials."
        ))
      }
      reqwest::StatusCode::NOT_FOUND => Err(anyhow::anyhow!(
        "Issue #{} not found for {}/{}",
        issue_number,
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
