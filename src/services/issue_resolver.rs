//! Resolves project cards to their issues and manages issue labels.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::domain::errors::{ApiError, ApiResult, ResolveError};
use crate::domain::models::{
    parse_trailing_number, CardContext, CardEvent, RelatedInfo, RepoContext, Resolution,
};
use crate::domain::ports::GitHubApi;

/// Per-label outcome of [`IssueResolver::remove_labels`].
#[derive(Debug, Default)]
pub struct RemovalReport {
    pub removed: Vec<String>,
    pub failed: Vec<(String, ApiError)>,
}

impl RemovalReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failed_names(&self) -> Vec<String> {
        self.failed.iter().map(|(name, _)| name.clone()).collect()
    }
}

pub struct IssueResolver<A: GitHubApi + ?Sized> {
    api: Arc<A>,
}

impl<A: GitHubApi + ?Sized> IssueResolver<A> {
    pub const fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Resolve the card of `event` to its project number and issue number.
    #[instrument(skip(self, event), fields(card_id = event.project_card.id))]
    pub async fn get_related_info(&self, event: &CardEvent) -> Result<Resolution, ResolveError> {
        let resolution = self.resolve_card(event).await?;
        Ok(resolution.map(|context| context.related))
    }

    /// Like [`get_related_info`](Self::get_related_info), but also keeps the
    /// project and column names.
    ///
    /// Calls are sequential: card, then column, then project.
    pub async fn resolve_card(
        &self,
        event: &CardEvent,
    ) -> Result<Resolution<CardContext>, ResolveError> {
        let card_id = event.project_card.id;

        let card = match self.api.get_card(card_id).await {
            Ok(card) => card,
            Err(err) if err.is_not_found() => {
                debug!(card_id, "card not found");
                return Ok(Resolution::CardNotFound);
            }
            Err(err) => {
                warn!(card_id, error = %err, "card fetch failed");
                return Ok(Resolution::CardUnavailable(err.to_string()));
            }
        };

        let content_url = card.content_url.as_deref().unwrap_or_default();
        if content_url.is_empty() {
            debug!(card_id, "card has no linked content");
            return Ok(Resolution::NotLinked);
        }

        let Some(issue_number) = parse_trailing_number(content_url) else {
            return Err(ResolveError::IssueNumber);
        };
        let Some(column_id) = parse_trailing_number(&card.column_url) else {
            return Err(ResolveError::ProjectNumber);
        };
        let event_column = event.project_card.column_id;
        if event_column.is_some_and(|id| id != column_id) {
            warn!(?event_column, column_id, "card moved since the event, using its current column");
        }

        let column = self.api.get_column(column_id).await?;
        let project_id = column
            .project_url
            .as_deref()
            .and_then(parse_trailing_number)
            .ok_or(ResolveError::ProjectNumber)?;

        let project = self.api.get_project(project_id).await?;
        let project_number = project.number.ok_or(ResolveError::ProjectNumber)?;

        debug!(
            card_id,
            issue_number,
            project_number,
            column = %column.name,
            "resolved card"
        );

        Ok(Resolution::Resolved(CardContext {
            related: RelatedInfo {
                project_id: project_number,
                issue_number,
            },
            project_name: project.name,
            column_name: column.name,
        }))
    }

    /// Label names of an issue, in API order.
    pub async fn get_labels(
        &self,
        issue_number: u64,
        repo: &RepoContext,
    ) -> ApiResult<Vec<String>> {
        let labels = self.api.list_issue_labels(repo, issue_number).await?;
        Ok(labels.into_iter().map(|label| label.name).collect())
    }

    /// Remove each label with its own request. Every label is attempted even
    /// when an earlier one fails.
    pub async fn remove_labels(
        &self,
        issue_number: u64,
        names: &[String],
        repo: &RepoContext,
    ) -> RemovalReport {
        let mut report = RemovalReport::default();
        for name in names {
            match self.api.remove_issue_label(repo, issue_number, name).await {
                Ok(()) => report.removed.push(name.clone()),
                Err(err) => {
                    warn!(label = %name, issue_number, error = %err, "failed to remove label");
                    report.failed.push((name.clone(), err));
                }
            }
        }
        report
    }

    /// Add all labels in one request. An empty list sends nothing.
    pub async fn add_labels(
        &self,
        issue_number: u64,
        names: &[String],
        repo: &RepoContext,
    ) -> ApiResult<()> {
        if names.is_empty() {
            return Ok(());
        }
        self.api.add_issue_labels(repo, issue_number, names).await?;
        info!(issue_number, count = names.len(), "labels added");
        Ok(())
    }
}
