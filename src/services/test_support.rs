//! In-memory [`GitHubApi`] used by service unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::models::{Card, Column, Label, Project, RepoContext};
use crate::domain::ports::GitHubApi;

#[derive(Default)]
pub struct FakeGitHub {
    pub cards: HashMap<u64, Card>,
    pub columns: HashMap<u64, Column>,
    pub projects: HashMap<u64, Project>,
    /// Status returned by every card fetch instead of a card.
    pub card_failure: Option<u16>,
    /// Labels of the single issue the fake knows about.
    pub labels: Mutex<Vec<String>>,
    /// Label names whose removal fails with a 500.
    pub failing_removals: Vec<String>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeGitHub {
    /// Card 1 → issue 123, column 367 "Done", project 1002604 number 120 "Roadmap".
    pub fn linked() -> Self {
        let mut fake = Self::default();
        fake.cards.insert(
            1,
            Card {
                id: 1,
                content_url: Some(
                    "https://api.github.com/repos/Codertocat/Hello-World/issues/123".into(),
                ),
                column_url: "https://api.github.com/projects/columns/367".into(),
            },
        );
        fake.columns.insert(
            367,
            Column {
                id: 367,
                name: "Done".into(),
                project_url: Some("https://api.github.com/projects/1002604".into()),
            },
        );
        fake.projects.insert(
            1_002_604,
            Project {
                id: 1_002_604,
                number: Some(120),
                name: "Roadmap".into(),
            },
        );
        fake
    }

    pub fn with_labels(self, labels: &[&str]) -> Self {
        let labels: Vec<String> = labels.iter().map(ToString::to_string).collect();
        *self.labels.lock().unwrap() = labels;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn current_labels(&self) -> Vec<String> {
        self.labels.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn not_found(path: String) -> ApiError {
    ApiError::NotFound { path }
}

fn server_error(status: u16) -> ApiError {
    ApiError::Status {
        status,
        body: "boom".into(),
    }
}

#[async_trait]
impl GitHubApi for FakeGitHub {
    async fn get_card(&self, card_id: u64) -> ApiResult<Card> {
        self.record(format!("get_card {card_id}"));
        let path = format!("/projects/columns/cards/{card_id}");
        match self.card_failure {
            Some(404) => Err(not_found(path)),
            Some(status) => Err(server_error(status)),
            None => {
                let card = self.cards.get(&card_id).cloned();
                card.ok_or_else(|| not_found(path))
            }
        }
    }

    async fn get_column(&self, column_id: u64) -> ApiResult<Column> {
        self.record(format!("get_column {column_id}"));
        self.columns
            .get(&column_id)
            .cloned()
            .ok_or_else(|| not_found(format!("/projects/columns/{column_id}")))
    }

    async fn get_project(&self, project_id: u64) -> ApiResult<Project> {
        self.record(format!("get_project {project_id}"));
        self.projects
            .get(&project_id)
            .cloned()
            .ok_or_else(|| not_found(format!("/projects/{project_id}")))
    }

    async fn list_issue_labels(
        &self,
        repo: &RepoContext,
        issue_number: u64,
    ) -> ApiResult<Vec<Label>> {
        self.record(format!("list_labels {repo}#{issue_number}"));
        let labels = self.current_labels().into_iter();
        Ok(labels.map(|name| Label { name }).collect())
    }

    async fn remove_issue_label(
        &self,
        repo: &RepoContext,
        issue_number: u64,
        name: &str,
    ) -> ApiResult<()> {
        self.record(format!("remove_label {repo}#{issue_number} {name}"));
        if self.failing_removals.iter().any(|label| label == name) {
            return Err(server_error(500));
        }
        let mut labels = self.labels.lock().unwrap();
        let before = labels.len();
        labels.retain(|label| label != name);
        if labels.len() == before {
            return Err(not_found(format!("label {name}")));
        }
        Ok(())
    }

    async fn add_issue_labels(
        &self,
        repo: &RepoContext,
        issue_number: u64,
        labels: &[String],
    ) -> ApiResult<()> {
        let names = labels.join(",");
        self.record(format!("add_labels {repo}#{issue_number} {names}"));
        let mut current = self.labels.lock().unwrap();
        for label in labels {
            if !current.iter().any(|c| c.eq_ignore_ascii_case(label)) {
                current.push(label.clone());
            }
        }
        Ok(())
    }
}
