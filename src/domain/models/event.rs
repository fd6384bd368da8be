use serde::{Deserialize, Serialize};

/// The `project_card` webhook payload delivered to the workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEvent {
    /// `created`, `moved`, `converted`, `edited` or `deleted`.
    #[serde(default)]
    pub action: Option<String>,
    pub project_card: CardRef,
}

/// The card reference embedded in a [`CardEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRef {
    pub id: u64,
    /// Column the card sits in after the event.
    #[serde(default)]
    pub column_id: Option<u64>,
}

impl CardEvent {
    /// Build a bare event for a card id, as used by the `resolve` command.
    pub const fn for_card(id: u64) -> Self {
        Self {
            action: None,
            project_card: CardRef {
                id,
                column_id: None,
            },
        }
    }

    /// Whether the event moved a card into its current column. Events with no
    /// action are treated as relevant.
    pub fn places_card(&self) -> bool {
        matches!(
            self.action.as_deref(),
            None | Some("created" | "moved" | "converted")
        )
    }
}
