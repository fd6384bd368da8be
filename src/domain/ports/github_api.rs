use async_trait::async_trait;

use crate::domain::errors::ApiResult;
use crate::domain::models::{Card, Column, Label, Project, RepoContext};

/// Port for the GitHub REST operations card-labeler needs.
///
/// Implementations own authentication, transport and retry. A 404 must be
/// reported as [`ApiError::NotFound`](crate::domain::errors::ApiError::NotFound).
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// `GET /projects/columns/cards/{card_id}`
    async fn get_card(&self, card_id: u64) -> ApiResult<Card>;

    /// `GET /projects/columns/{column_id}`
    async fn get_column(&self, column_id: u64) -> ApiResult<Column>;

    /// `GET /projects/{project_id}`
    async fn get_project(&self, project_id: u64) -> ApiResult<Project>;

    /// `GET /repos/{owner}/{repo}/issues/{issue_number}/labels`, in API order
    async fn list_issue_labels(&self, repo: &RepoContext, issue_number: u64)
        -> ApiResult<Vec<Label>>;

    /// `DELETE /repos/{owner}/{repo}/issues/{issue_number}/labels/{name}`
    async fn remove_issue_label(
        &self,
        repo: &RepoContext,
        issue_number: u64,
        name: &str,
    ) -> ApiResult<()>;

    /// `POST /repos/{owner}/{repo}/issues/{issue_number}/labels`
    async fn add_issue_labels(
        &self,
        repo: &RepoContext,
        issue_number: u64,
        labels: &[String],
    ) -> ApiResult<()>;
}
