//! GitHub REST request bodies and error payloads.
//!
//! Response resources live in [`crate::domain::models`] because the
//! [`GitHubApi`](crate::domain::ports::GitHubApi) port returns them.

use serde::{Deserialize, Serialize};

/// Request body for adding labels to an issue.
#[derive(Debug, Clone, Serialize)]
pub struct AddLabelsRequest<'a> {
    /// Labels to add, in the order given by the caller.
    pub labels: &'a [String],
}

/// Error body returned by the GitHub API.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubErrorBody {
    pub message: String,
}
