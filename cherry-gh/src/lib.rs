//! # GitHub API Client
//!
//! Provides the GitHub REST API integration cherry needs to resolve a release
//! milestone into merged pull requests: search pagination, pull request
//! details, and issue timelines.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod milestone;
pub mod models;

// Re-export the client
pub use client::{GitHubClient, create_github_client};
// Re-export the resolver types
pub use milestone::DedupeKey;
// Re-export models
pub use models::{GitHubAuth, MergedPullRequest, PullRequestDetail, PullRequestId, SearchItem, TimelineEvent};
