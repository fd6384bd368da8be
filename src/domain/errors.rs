//! Domain errors for card-labeler.

use thiserror::Error;

/// Errors surfaced by a [`GitHubApi`](crate::domain::ports::GitHubApi) implementation.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("GitHub resource not found: {path}")]
    NotFound { path: String },

    #[error("GitHub rejected the credentials ({status})")]
    Unauthorized { status: u16 },

    #[error("GitHub API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("GitHub request failed: {0}")]
    Transport(String),

    #[error("GitHub response could not be decoded: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the API answered 404 for the requested resource.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Transient errors are worth retrying: rate limiting, server errors and
    /// network failures.
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::Transport(_) => true,
            Self::NotFound { .. } | Self::Unauthorized { .. } | Self::Decode(_) => false,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Failures while resolving a project card to its issue.
///
/// A card that does not exist or is not linked to an issue is not an error;
/// see [`Resolution`](crate::domain::models::Resolution). These variants mean
/// the API answered in a shape that cannot be resolved.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to get issue number")]
    IssueNumber,

    #[error("Failed to get project number")]
    ProjectNumber,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Domain-level errors that can occur in card-labeler.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid repository '{0}': expected owner/repo")]
    InvalidRepository(String),

    #[error("Invalid label rules: {0}")]
    InvalidRules(String),

    #[error("Invalid event payload: {0}")]
    InvalidEvent(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_yaml::Error> for DomainError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::InvalidRules(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidEvent(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_error_messages_are_fixed() {
        assert_eq!(
            ResolveError::IssueNumber.to_string(),
            "Failed to get issue number"
        );
        assert_eq!(
            ResolveError::ProjectNumber.to_string(),
            "Failed to get project number"
        );
    }

    #[test]
    fn test_transient_classification() {
        let status = |status| ApiError::Status {
            status,
            body: String::new(),
        };
        assert!(status(429).is_transient());
        assert!(status(500).is_transient());
        assert!(status(503).is_transient());
        assert!(!status(422).is_transient());
        assert!(ApiError::Transport("timed out".into()).is_transient());
        assert!(!ApiError::Unauthorized { status: 401 }.is_transient());
        assert!(!ApiError::NotFound { path: "/x".into() }.is_transient());
        assert!(!ApiError::Decode("eof".into()).is_transient());
    }

    #[test]
    fn test_not_found_predicate() {
        assert!(ApiError::NotFound { path: "/x".into() }.is_not_found());
        assert!(!ApiError::Transport("reset".into()).is_not_found());
    }
}
