//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use card_labeler::{GitHubClient, GitHubClientConfig, RepoContext, RetryPolicy};
use mockito::{Mock, ServerGuard};
use serde_json::{json, Value};

pub const API_URL: &str = "https://api.github.com";
pub const TOKEN: &str = "test-token";
pub const OWNER: &str = "Codertocat";
pub const REPO: &str = "Hello-World";

pub fn repo() -> RepoContext {
    RepoContext::new(OWNER, REPO)
}

/// A client pointed at the mock server, with retries disabled.
pub fn client(server: &ServerGuard) -> Arc<GitHubClient> {
    client_with_retry(server, RetryPolicy::disabled())
}

pub fn client_with_retry(server: &ServerGuard, retry: RetryPolicy) -> Arc<GitHubClient> {
    let config = GitHubClientConfig {
        token: TOKEN.to_string(),
        base_url: server.url(),
        retry,
        ..GitHubClientConfig::default()
    };
    let client = GitHubClient::with_config(config).expect("valid config");
    Arc::new(client)
}

/// A client whose base URL refuses connections, with retries disabled.
pub fn unreachable_client() -> Arc<GitHubClient> {
    let config = GitHubClientConfig {
        token: TOKEN.to_string(),
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 5,
        retry: RetryPolicy::disabled(),
        ..GitHubClientConfig::default()
    };
    let client = GitHubClient::with_config(config).expect("valid config");
    Arc::new(client)
}

pub fn card_body(card_id: u64, content_url: Option<&str>, column_id: u64) -> Value {
    json!({
        "url": format!("https://api.github.com/projects/columns/cards/{card_id}"),
        "id": card_id,
        "note": null,
        "archived": false,
        "column_url": format!("https://api.github.com/projects/columns/{column_id}"),
        "content_url": content_url,
        "project_url": "https://api.github.com/projects/120",
    })
}

pub fn column_body(column_id: u64, name: &str, project_id: u64) -> Value {
    json!({
        "url": format!("https://api.github.com/projects/columns/{column_id}"),
        "project_url": format!("https://api.github.com/projects/{project_id}"),
        "id": column_id,
        "name": name,
    })
}

pub fn project_body(project_id: u64, number: Option<u64>, name: &str) -> Value {
    json!({
        "id": project_id,
        "number": number,
        "name": name,
        "state": "open",
    })
}

pub fn labels_body(names: &[&str]) -> Value {
    Value::Array(
        names
            .iter()
            .enumerate()
            .map(|(i, name)| json!({ "id": i + 1, "name": name }))
            .collect(),
    )
}

pub fn issue_url(number: u64) -> String {
    format!("{API_URL}/repos/{OWNER}/{REPO}/issues/{number}")
}

pub async fn mock_json(server: &mut ServerGuard, method: &str, path: &str, body: &Value) -> Mock {
    server
        .mock(method, path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

/// Mock card 1 -> column 367 "Done" -> project 1002604 number 120 "Roadmap",
/// linked to issue 123.
pub async fn mock_linked_card(server: &mut ServerGuard) -> Vec<Mock> {
    vec![
        mock_json(
            server,
            "GET",
            "/projects/columns/cards/1",
            &card_body(1, Some(&issue_url(123)), 367),
        )
        .await,
        mock_json(
            server,
            "GET",
            "/projects/columns/367",
            &column_body(367, "Done", 1_002_604),
        )
        .await,
        mock_json(
            server,
            "GET",
            "/projects/1002604",
            &project_body(1_002_604, Some(120), "Roadmap"),
        )
        .await,
    ]
}
