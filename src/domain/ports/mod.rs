//! Port trait definitions (Hexagonal Architecture)
//!
//! - GitHubApi: the GitHub REST operations used by the services
//!
//! Services depend on these traits only, so tests can point them at a mock
//! server or an in-memory fake.

pub mod github_api;

pub use github_api::GitHubApi;
