//! card-labeler - project column labels for GitHub issues
//!
//! Runs as a step of a GitHub Actions workflow triggered by `project_card`
//! events. The card is resolved to its issue and project, and the issue's
//! labels are updated to those configured for the card's column.
//!
//! # Architecture
//!
//! The crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors and the GitHub API port
//! - **Service Layer** (`services`): Card resolution and label application
//! - **Adapters** (`adapters`): GitHub REST API client
//! - **Infrastructure Layer** (`infrastructure`): Configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use card_labeler::{CardEvent, GitHubClient, IssueResolver};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Arc::new(GitHubClient::new(std::env::var("GITHUB_TOKEN")?)?);
//!     let resolution = IssueResolver::new(client)
//!         .get_related_info(&CardEvent::for_card(1))
//!         .await?;
//!     println!("{resolution:?}");
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::github::{GitHubClient, GitHubClientConfig, RetryPolicy};
pub use domain::errors::{ApiError, DomainError, ResolveError};
pub use domain::models::{
    CardEvent, Config, LabelRules, RelatedInfo, RepoContext, Resolution,
};
pub use domain::ports::GitHubApi;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{IssueResolver, LabelOutcome, Labeler, RemovalReport};
