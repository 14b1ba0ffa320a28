//! # Milestone Resolution
//!
//! Resolves a release milestone into the set of pull requests merged under
//! it. A pull request belongs to a milestone either because it is tagged with
//! the milestone directly, or because it closed an issue that is. Both paths
//! go through the search API; the issue path additionally walks each issue's
//! timeline to find the cross-referenced merged pull request.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument, warn};

use crate::client::GitHubClient;
use crate::models::{MergedPullRequest, PullRequestId, SearchItem};

/// Which identity deduplication keys on.
///
/// Within a single repository the number is canonical; the URL key is useful
/// when cross-checking output against other tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupeKey {
  /// Repository-scoped pull request number
  Number,
  /// Canonical `html_url` of the pull request
  Url,
}

impl DedupeKey {
  fn id_for(self, number: u64, html_url: &str) -> PullRequestId {
    match self {
      Self::Number => PullRequestId::Number(number),
      Self::Url => PullRequestId::Url(html_url.to_string()),
    }
  }
}

impl GitHubClient {
  /// Resolve a milestone to the deduplicated set of merged pull requests.
  ///
  /// The result is ordered by identity, not by merge time; use
  /// [`GitHubClient::merged_pr_details`] for merge-time ordering.
  #[instrument(skip(self), level = "debug")]
  pub async fn merged_prs_for_milestone(
    &self,
    owner: &str,
    repo: &str,
    milestone: &str,
    key: DedupeKey,
  ) -> Result<Vec<PullRequestId>> {
    let ids = self.milestone_pr_index(owner, repo, milestone, key).await?;
    Ok(ids.into_keys().collect())
  }

  /// Resolve a milestone to merged pull requests with their merge commit SHA
  /// and merge timestamp, sorted by merge time ascending when `order` is set
  /// (identity order otherwise).
  ///
  /// A pull request in the set that turns out to carry no merge data is
  /// skipped with a warning rather than aborting the run.
  #[instrument(skip(self), level = "debug")]
  pub async fn merged_pr_details(
    &self,
    owner: &str,
    repo: &str,
    milestone: &str,
    key: DedupeKey,
    order: bool,
  ) -> Result<Vec<MergedPullRequest>> {
    let ids = self.milestone_pr_index(owner, repo, milestone, key).await?;

    let mut details = Vec::with_capacity(ids.len());
    for (id, number) in ids {
      let pr = self
        .get_pull_request(owner, repo, number)
        .await
        .context(format!("Failed to fetch detail for pull request #{number}"))?;

      match (pr.merge_commit_sha, pr.merged_at) {
        (Some(sha), Some(merged_at)) => details.push(MergedPullRequest { id, sha, merged_at }),
        _ => warn!("Pull request #{} has no merge data; skipping", number),
      }
    }

    if order {
      details.sort_by_key(|pr| pr.merged_at);
    }
    Ok(details)
  }

  /// Union of directly-tagged and issue-linked merged pull requests, keyed by
  /// the chosen identity and mapped to the PR number for later detail lookups.
  async fn milestone_pr_index(
    &self,
    owner: &str,
    repo: &str,
    milestone: &str,
    key: DedupeKey,
  ) -> Result<BTreeMap<PullRequestId, u64>> {
    let mut ids = BTreeMap::new();

    for item in self.prs_by_milestone(owner, repo, milestone).await? {
      ids.insert(key.id_for(item.number, &item.html_url), item.number);
    }

    for (number, html_url) in self.prs_by_issue_milestone(owner, repo, milestone).await? {
      ids.insert(key.id_for(number, &html_url), number);
    }

    info!("Milestone '{}' resolves to {} merged pull requests", milestone, ids.len());
    Ok(ids)
  }

  /// Merged pull requests tagged with the milestone directly
  async fn prs_by_milestone(&self, owner: &str, repo: &str, milestone: &str) -> Result<Vec<SearchItem>> {
    let query = format!("repo:{owner}/{repo} is:pr is:merged milestone:{milestone}");
    self.search_issues(&query).await
  }

  /// Merged pull requests that closed an issue tagged with the milestone.
  ///
  /// Returns (number, html_url) pairs of the linked pull requests. An issue
  /// with no cross-referenced merged pull request contributes nothing.
  async fn prs_by_issue_milestone(&self, owner: &str, repo: &str, milestone: &str) -> Result<Vec<(u64, String)>> {
    let query = format!("repo:{owner}/{repo} is:issue is:closed milestone:{milestone}");
    let issues = self.search_issues(&query).await?;

    let mut linked = Vec::new();
    for issue in issues {
      let events = self
        .get_issue_timeline(owner, repo, issue.number)
        .await
        .context(format!("Failed to fetch timeline for issue #{}", issue.number))?;

      let before = linked.len();
      for event in events {
        if event.event != "cross-referenced" {
          continue;
        }
        let Some(source) = event.source else { continue };
        if source.source_type != "issue" {
          continue;
        }
        let Some(source_issue) = source.issue else { continue };
        // Only sources that are themselves merged pull requests count
        let merged = source_issue
          .pull_request
          .as_ref()
          .is_some_and(|pr| pr.merged_at.is_some());
        if merged {
          linked.push((source_issue.number, source_issue.html_url));
        }
      }

      if linked.len() == before {
        debug!("Issue #{} has no linked merged pull request", issue.number);
      }
    }

    Ok(linked)
  }
}
