use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Represents GitHub authentication credentials
#[derive(Clone)]
pub struct GitHubAuth {
  pub token: String,
}

/// One page of results from the GitHub search API
#[derive(Debug, Deserialize)]
pub struct SearchResults {
  pub total_count: u64,
  #[serde(default)]
  pub items: Vec<SearchItem>,
}

/// A single issue or pull request returned by the search API
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
  pub number: u64,
  pub html_url: String,
  pub title: String,
}

/// An activity record on an issue's timeline
#[derive(Debug, Deserialize)]
pub struct TimelineEvent {
  pub event: String,
  pub source: Option<TimelineSource>,
}

/// The source of a `cross-referenced` timeline event
#[derive(Debug, Deserialize)]
pub struct TimelineSource {
  #[serde(rename = "type")]
  pub source_type: String,
  pub issue: Option<TimelineIssue>,
}

/// The issue (or pull request) a timeline event points back to
#[derive(Debug, Deserialize)]
pub struct TimelineIssue {
  pub number: u64,
  pub html_url: String,
  pub pull_request: Option<PullRequestMarker>,
}

/// Marker object present on issues that are actually pull requests
#[derive(Debug, Deserialize)]
pub struct PullRequestMarker {
  pub merged_at: Option<DateTime<Utc>>,
}

/// Detail record for a single pull request
#[derive(Debug, Deserialize)]
pub struct PullRequestDetail {
  pub number: u64,
  pub html_url: String,
  pub state: String,
  pub merge_commit_sha: Option<String>,
  pub merged_at: Option<DateTime<Utc>>,
}

/// Identity of a pull request, keyed either by its repository-scoped number
/// or by its canonical URL.
///
/// GitHub gives every pull request both identities; which one deduplication
/// should key on is a caller choice, not two different entities.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PullRequestId {
  Number(u64),
  Url(String),
}

impl PullRequestId {
  /// The pull request number, when this identity carries one
  pub fn number(&self) -> Option<u64> {
    match self {
      Self::Number(number) => Some(*number),
      Self::Url(_) => None,
    }
  }
}

impl fmt::Display for PullRequestId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Number(number) => write!(f, "{number}"),
      Self::Url(url) => write!(f, "{url}"),
    }
  }
}

/// A merged pull request with the data needed to cherry-pick it
#[derive(Debug, Clone)]
pub struct MergedPullRequest {
  pub id: PullRequestId,
  pub sha: String,
  pub merged_at: DateTime<Utc>,
}
