//! Applies label rules when a card is placed in a column.
//!
//! The issue ends up with the labels of the card's current column. Labels
//! that belong to other columns of the same project are removed. Labels the
//! rules do not mention are left alone.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use crate::domain::errors::DomainResult;
use crate::domain::models::{CardEvent, LabelRules, RepoContext, Resolution};
use crate::domain::ports::GitHubApi;

use super::issue_resolver::IssueResolver;

/// Result of processing one card event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LabelOutcome {
    Skipped { reason: String },
    Applied {
        issue_number: u64,
        added: Vec<String>,
        removed: Vec<String>,
        failed_removals: Vec<String>,
    },
}

/// Labels to add and remove for one issue.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LabelPlan {
    pub add: Vec<String>,
    pub remove: Vec<String>,
}

impl LabelPlan {
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

/// Compute the changes that give `current` the `target` labels.
///
/// Label names compare case-insensitively, as GitHub does. Only labels listed
/// in `other_columns` are ever removed, spelled the way `current` has them.
pub fn plan_label_changes(
    current: &[String],
    target: &[String],
    other_columns: &[&str],
) -> LabelPlan {
    let mut add: Vec<String> = Vec::new();
    for label in target {
        if !has_label(current, label) && !has_label(&add, label) {
            add.push(label.clone());
        }
    }

    let remove = current
        .iter()
        .filter(|label| has_label(other_columns, label))
        .filter(|label| !has_label(target, label))
        .cloned()
        .collect();

    LabelPlan { add, remove }
}

fn has_label<S: AsRef<str>>(labels: &[S], name: &str) -> bool {
    labels
        .iter()
        .any(|label| label.as_ref().eq_ignore_ascii_case(name))
}

pub struct Labeler<A: GitHubApi + ?Sized> {
    resolver: IssueResolver<A>,
    rules: LabelRules,
}

impl<A: GitHubApi + ?Sized> Labeler<A> {
    pub const fn new(api: Arc<A>, rules: LabelRules) -> Self {
        Self {
            resolver: IssueResolver::new(api),
            rules,
        }
    }

    fn skipped(reason: impl Into<String>) -> LabelOutcome {
        let reason = reason.into();
        info!(%reason, "nothing to label");
        LabelOutcome::Skipped { reason }
    }

    #[instrument(skip(self, event), fields(card_id = event.project_card.id, repo = %repo))]
    pub async fn apply(&self, event: &CardEvent, repo: &RepoContext) -> DomainResult<LabelOutcome> {
        if !event.places_card() {
            let action = event.action.as_deref().unwrap_or_default();
            let reason = format!("action '{action}' does not place a card");
            return Ok(Self::skipped(reason));
        }

        let context = match self.resolver.resolve_card(event).await? {
            Resolution::Resolved(context) => context,
            unresolved => {
                let reason = unresolved.describe_absence().unwrap_or_default();
                return Ok(Self::skipped(reason));
            }
        };
        let issue_number = context.related.issue_number;

        let Some(target) = self.rules.labels_for(
            &context.project_name,
            context.related.project_id,
            &context.column_name,
        ) else {
            return Ok(Self::skipped(format!(
                "no label rule for project '{}' column '{}'",
                context.project_name, context.column_name
            )));
        };
        let other_columns = self.rules.labels_of_other_columns(
            &context.project_name,
            context.related.project_id,
            &context.column_name,
        );

        let current = self.resolver.get_labels(issue_number, repo).await?;
        let plan = plan_label_changes(&current, target, &other_columns);
        if plan.is_empty() {
            info!(issue_number, "labels already up to date");
        }

        let report = self
            .resolver
            .remove_labels(issue_number, &plan.remove, repo)
            .await;
        self.resolver
            .add_labels(issue_number, &plan.add, repo)
            .await?;

        info!(
            issue_number,
            added = ?plan.add,
            removed = ?report.removed,
            "labels applied"
        );

        Ok(LabelOutcome::Applied {
            issue_number,
            failed_removals: report.failed_names(),
            added: plan.add,
            removed: report.removed,
        })
    }
}
