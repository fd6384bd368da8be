pub mod card;
pub mod config;
pub mod event;
pub mod repo;
pub mod resolution;
pub mod rules;

pub use card::{parse_trailing_number, Card, Column, Label, Project};
pub use config::{Config, GitHubConfig, LoggingConfig, RetryConfig};
pub use event::{CardEvent, CardRef};
pub use repo::RepoContext;
pub use resolution::{CardContext, RelatedInfo, Resolution};
pub use rules::LabelRules;
