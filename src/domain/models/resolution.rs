use serde::Serialize;

/// A card resolved to the issue it references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelatedInfo {
    /// The number of the project owning the card's column.
    pub project_id: u64,
    pub issue_number: u64,
}

/// [`RelatedInfo`] plus the names the label rules are keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardContext {
    pub related: RelatedInfo,
    pub project_name: String,
    pub column_name: String,
}

/// Outcome of resolving a card.
///
/// Only `Resolved` carries a value. The other variants say there was nothing
/// to resolve and are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Resolution<T = RelatedInfo> {
    Resolved(T),
    /// The card fetch answered 404.
    CardNotFound,
    /// The card fetch failed for another reason.
    CardUnavailable(String),
    /// The card has no linked content, e.g. a note.
    NotLinked,
}

impl<T> Resolution<T> {
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn resolved(self) -> Option<T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::CardNotFound | Self::CardUnavailable(_) | Self::NotLinked => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Resolution<U> {
        match self {
            Self::Resolved(value) => Resolution::Resolved(f(value)),
            Self::CardNotFound => Resolution::CardNotFound,
            Self::CardUnavailable(reason) => Resolution::CardUnavailable(reason),
            Self::NotLinked => Resolution::NotLinked,
        }
    }

    /// Human readable reason for an unresolved outcome.
    pub fn describe_absence(&self) -> Option<String> {
        match self {
            Self::Resolved(_) => None,
            Self::CardNotFound => Some("card not found".to_string()),
            Self::CardUnavailable(reason) => Some(format!("card unavailable: {reason}")),
            Self::NotLinked => Some("card is not linked to an issue".to_string()),
        }
    }
}
