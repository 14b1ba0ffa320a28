//! # GitHub API Endpoints
//!
//! Organized endpoint implementations for the GitHub API resources cherry
//! consumes: issue search, pull requests, and issue timelines.

pub mod issues;
pub mod pulls;
pub mod search;
