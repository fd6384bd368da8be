//! GitHub HTTP client.
//!
//! Implements the [`GitHubApi`] port over the GitHub REST API v3. Every
//! request carries bearer authentication and the GitHub media-type headers,
//! and is retried on transient failures according to a [`RetryPolicy`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::models::{Card, Column, Config, Label, Project, RepoContext};
use crate::domain::ports::GitHubApi;
use crate::infrastructure::logging::SecretScrubber;

use super::models::{AddLabelsRequest, GitHubErrorBody};
use super::retry::RetryPolicy;

/// Base URL for the GitHub REST API v3.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Connection settings for [`GitHubClient`].
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    pub token: String,
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub retry: RetryPolicy,
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: GITHUB_API_BASE.to_string(),
            user_agent: "card-labeler".to_string(),
            timeout_secs: 30,
            retry: RetryPolicy::default(),
        }
    }
}

impl From<&Config> for GitHubClientConfig {
    fn from(config: &Config) -> Self {
        Self {
            token: config.github.token.clone(),
            base_url: config.github.api_url.clone(),
            user_agent: config.github.user_agent.clone(),
            timeout_secs: config.github.timeout_secs,
            retry: RetryPolicy::from(&config.retry),
        }
    }
}

/// HTTP client for the GitHub REST API v3.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
    token: String,
    retry: RetryPolicy,
    scrubber: SecretScrubber,
}

impl GitHubClient {
    /// Create a client for api.github.com with default settings.
    pub fn new(token: impl Into<String>) -> ApiResult<Self> {
        Self::with_config(GitHubClientConfig {
            token: token.into(),
            ..GitHubClientConfig::default()
        })
    }

    pub fn with_config(config: GitHubClientConfig) -> ApiResult<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token,
            retry: config.retry,
            scrubber: SecretScrubber::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an authorized request for an API path.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{path}", self.base_url))
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION);

        if self.token.is_empty() {
            builder
        } else {
            builder.bearer_auth(&self.token)
        }
    }

    /// Send a request built by `build`, retrying transient failures.
    ///
    /// `build` runs once per attempt since a `RequestBuilder` is consumed
    /// by sending it.
    async fn dispatch<F>(&self, path: &str, build: F) -> ApiResult<Response>
    where
        F: Fn() -> RequestBuilder,
    {
        self.retry
            .execute(|| {
                let request = build();
                async move {
                    let response = request.send().await?;
                    self.check_status(path, response).await
                }
            })
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = || self.request(Method::GET, path);
        let response = self.dispatch(path, request).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(format!("{path}: {e}")))
    }

    /// Map a non-success response to an [`ApiError`].
    async fn check_status(&self, path: &str, response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<GitHubErrorBody>(&body) {
            Ok(error) => error.message,
            Err(_) => body,
        };
        let message = self.scrubber.scrub_message(&message);
        debug!(%status, path, message = %message, "GitHub API error response");

        Err(match status {
            StatusCode::NOT_FOUND => ApiError::NotFound {
                path: path.to_string(),
            },
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized {
                status: status.as_u16(),
            },
            _ => ApiError::Status {
                status: status.as_u16(),
                body: message,
            },
        })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

fn issue_labels_path(repo: &RepoContext, issue_number: u64) -> String {
    format!(
        "/repos/{}/{}/issues/{issue_number}/labels",
        repo.owner, repo.repo
    )
}

#[async_trait]
impl GitHubApi for GitHubClient {
    #[instrument(skip(self))]
    async fn get_card(&self, card_id: u64) -> ApiResult<Card> {
        let path = format!("/projects/columns/cards/{card_id}");
        self.get_json(&path).await
    }

    #[instrument(skip(self))]
    async fn get_column(&self, column_id: u64) -> ApiResult<Column> {
        let path = format!("/projects/columns/{column_id}");
        self.get_json(&path).await
    }

    #[instrument(skip(self))]
    async fn get_project(&self, project_id: u64) -> ApiResult<Project> {
        let path = format!("/projects/{project_id}");
        self.get_json(&path).await
    }

    #[instrument(skip(self), fields(repo = %repo))]
    async fn list_issue_labels(
        &self,
        repo: &RepoContext,
        issue_number: u64,
    ) -> ApiResult<Vec<Label>> {
        let path = format!("{}?per_page=100", issue_labels_path(repo, issue_number));
        let labels: Vec<Label> = self.get_json(&path).await?;
        debug!(count = labels.len(), "fetched issue labels");
        Ok(labels)
    }

    #[instrument(skip(self), fields(repo = %repo))]
    async fn remove_issue_label(
        &self,
        repo: &RepoContext,
        issue_number: u64,
        name: &str,
    ) -> ApiResult<()> {
        let labels_path = issue_labels_path(repo, issue_number);
        let path = format!("{labels_path}/{}", urlencoding::encode(name));
        let request = || self.request(Method::DELETE, &path);
        self.dispatch(&path, request).await?;
        info!(label = name, issue_number, "removed label");
        Ok(())
    }

    #[instrument(skip(self), fields(repo = %repo))]
    async fn add_issue_labels(
        &self,
        repo: &RepoContext,
        issue_number: u64,
        labels: &[String],
    ) -> ApiResult<()> {
        let path = issue_labels_path(repo, issue_number);
        let body = AddLabelsRequest { labels };
        let request = || self.request(Method::POST, &path).json(&body);
        self.dispatch(&path, request).await?;
        info!(?labels, issue_number, "added labels");
        Ok(())
    }
}
