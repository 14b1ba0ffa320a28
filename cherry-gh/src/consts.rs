//! Constants for the cherry-gh client

/// Base URL for the official SaaS GitHub API
pub const API_BASE_URL: &str = "https://api.github.com";

/// User-Agent header value for the GitHub API client
pub const USER_AGENT: &str = concat!("cherry-cli/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github+json";

/// Page size used for search requests
pub const SEARCH_PER_PAGE: u32 = 100;

/// The search API never returns more than this many results for one query
pub const SEARCH_RESULT_CAP: u64 = 1000;
