//! Projects (classic) resources as returned by the GitHub REST API.
//!
//! Fields the API may omit are `Option`s so that resolution can handle the
//! absent case explicitly instead of failing at decode time.

use serde::{Deserialize, Serialize};

/// A project card (`GET /projects/columns/cards/{card_id}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: u64,
    /// API URL of the linked issue or pull request. Absent on note-only cards.
    #[serde(default)]
    pub content_url: Option<String>,
    pub column_url: String,
}

/// A project column (`GET /projects/columns/{column_id}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub project_url: Option<String>,
}

/// A classic project (`GET /projects/{project_id}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub name: String,
}

/// A label attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

/// Parse the trailing path segment of an API URL as a positive number.
///
/// `https://api.github.com/repos/o/r/issues/123` yields `Some(123)`.
pub fn parse_trailing_number(url: &str) -> Option<u64> {
    url.rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<u64>().ok())
        .filter(|number| *number > 0)
}
