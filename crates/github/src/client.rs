//! GitHub REST API client.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use octovitals_engine::{DataProvider, EventRecord, ProfileError, RepoRecord, Result, UserRecord};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

/// GitHub requests are paginated in pages of at most this many records.
const PAGE_SIZE: usize = 100;

/// Provider configuration.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    pub token: Option<String>,
    pub user_agent: String,
    /// Overridable for tests and GitHub Enterprise installs.
    pub base_url: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: std::env::var("GITHUB_TOKEN").ok(),
            user_agent: "OctoVitals/0.1 (+https://github.com/octovitals/octovitals)".to_string(),
            base_url: "https://api.github.com".to_string(),
        }
    }
}

/// GitHub REST data provider.
pub struct GithubProvider {
    client: Client,
    base_url: String,
}

impl GithubProvider {
    pub fn new(config: GithubConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| ProfileError::Unknown(format!("invalid user agent: {}", e)))?,
        );

        if let Some(ref token) = config.token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| ProfileError::Unknown(format!("invalid token: {}", e)))?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ProfileError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get(&self, url: &str, username: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProfileError::Network(e.to_string()))?;

        check_rate_limit(&response)?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ProfileError::UserNotFound(username.to_string())),
            status if !status.is_success() => {
                Err(ProfileError::Unknown(format!("GitHub API error: {}", status)))
            }
            _ => Ok(response),
        }
    }
}

#[async_trait]
impl DataProvider for GithubProvider {
    async fn fetch_user(&self, username: &str) -> Result<UserRecord> {
        let url = format!("{}/users/{}", self.base_url, username);
        let response = self.get(&url, username).await?;
        response
            .json()
            .await
            .map_err(|e| ProfileError::Network(e.to_string()))
    }

    async fn fetch_repositories(&self, username: &str, max_count: usize) -> Result<Vec<RepoRecord>> {
        let per_page = max_count.min(PAGE_SIZE);
        let mut records: Vec<RepoRecord> = Vec::new();

        for page in 1.. {
            let url = format!(
                "{}/users/{}/repos?sort=pushed&per_page={}&page={}",
                self.base_url, username, per_page, page
            );
            let response = self.get(&url, username).await?;
            let batch: Vec<RepoRecord> = response
                .json()
                .await
                .map_err(|e| ProfileError::Network(e.to_string()))?;

            let got = batch.len();
            records.extend(batch);
            debug!(username, page, got, total = records.len(), "fetched repository page");

            if records.len() >= max_count || got < per_page {
                break;
            }
        }

        records.truncate(max_count);
        Ok(records)
    }

    async fn fetch_recent_events(&self, username: &str, max_count: usize) -> Result<Vec<EventRecord>> {
        let per_page = max_count.min(PAGE_SIZE);
        let url = format!(
            "{}/users/{}/events/public?per_page={}",
            self.base_url, username, per_page
        );
        let response = self.get(&url, username).await?;
        let mut events: Vec<EventRecord> = response
            .json()
            .await
            .map_err(|e| ProfileError::Network(e.to_string()))?;
        events.truncate(max_count);
        Ok(events)
    }
}

/// Detect an exhausted rate limit from the `x-ratelimit-*` response headers.
fn check_rate_limit(response: &Response) -> Result<()> {
    let status = response.status();
    if status != StatusCode::FORBIDDEN && status != StatusCode::TOO_MANY_REQUESTS {
        return Ok(());
    }

    let remaining = response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok());
    if remaining != Some("0") {
        return Ok(());
    }

    let reset_at = response
        .headers()
        .get("x-ratelimit-reset")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i64>().ok())
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single());

    Err(ProfileError::RateLimited { reset_at })
}
