//! GitHub REST adapter.
//!
//! Implements the `GitHubApi` port with `reqwest`: card, column and project
//! lookups for resolution, and the issue label endpoints.

pub mod client;
pub mod models;
pub mod retry;

pub use client::{GitHubClient, GitHubClientConfig, GITHUB_API_BASE};
pub use retry::RetryPolicy;
