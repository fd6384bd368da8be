//! Services: card resolution and label application.

pub mod issue_resolver;
pub mod labeler;

#[cfg(test)]
pub(crate) mod test_support;

pub use issue_resolver::{IssueResolver, RemovalReport};
pub use labeler::{plan_label_changes, LabelOutcome, LabelPlan, Labeler};
