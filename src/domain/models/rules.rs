//! Label rules: which labels an issue carries while its card sits in a
//! given column.
//!
//! ```yaml
//! Roadmap:
//!   To do:
//!     - status: todo
//!   Done:
//!     - status: done
//!     - shipped
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

type ColumnRules = BTreeMap<String, Vec<String>>;

/// Project name (or number) → column name → labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelRules {
    projects: BTreeMap<String, ColumnRules>,
}

impl LabelRules {
    pub fn from_yaml_str(yaml: &str) -> DomainResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let rules: Self = serde_yaml::from_str(yaml)?;
        rules.validate()?;
        Ok(rules)
    }

    fn validate(&self) -> DomainResult<()> {
        for (project, columns) in &self.projects {
            for (column, labels) in columns {
                if labels.iter().any(|label| label.trim().is_empty()) {
                    return Err(DomainError::InvalidRules(format!(
                        "empty label name under '{project}' / '{column}'"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Columns configured for a project, looked up by name first and then by
    /// project number.
    fn columns(&self, project_name: &str, project_number: u64) -> Option<&ColumnRules> {
        self.projects
            .get(project_name)
            .or_else(|| self.projects.get(&project_number.to_string()))
    }

    /// Labels for cards in `column` of the given project.
    pub fn labels_for(
        &self,
        project_name: &str,
        project_number: u64,
        column: &str,
    ) -> Option<&[String]> {
        self.columns(project_name, project_number)?
            .get(column)
            .map(Vec::as_slice)
    }

    /// Labels configured for every column of the project except `column`.
    pub fn labels_of_other_columns(
        &self,
        project_name: &str,
        project_number: u64,
        column: &str,
    ) -> Vec<&str> {
        let Some(columns) = self.columns(project_name, project_number) else {
            return Vec::new();
        };
        let mut labels: Vec<&str> = columns
            .iter()
            .filter(|(name, _)| name.as_str() != column)
            .flat_map(|(_, labels)| labels.iter().map(String::as_str))
            .collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }
}
