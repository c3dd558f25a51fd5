//! Data provider seam.
//!
//! The engine never talks to the network itself. A [`DataProvider`] hands it
//! already-parsed wire records; mapping into domain models is pure and total,
//! so the analyzers downstream have no failure paths.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use crate::error::Result;
use crate::models::{Event, EventKind, Repository, User};

/// Source of profile data, injected into the analyzer.
///
/// `fetch_user` and `fetch_repositories` are required; a failure there fails
/// the whole analysis. `fetch_recent_events` is best-effort enrichment and
/// the engine degrades to an empty event list when it errors.
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn fetch_user(&self, username: &str) -> Result<UserRecord>;

    /// Fetch up to `max_count` repositories, paginating internally as needed.
    async fn fetch_repositories(&self, username: &str, max_count: usize) -> Result<Vec<RepoRecord>>;

    /// Fetch up to `max_count` recent public events.
    async fn fetch_recent_events(&self, username: &str, max_count: usize) -> Result<Vec<EventRecord>>;
}

/// Wire shape of a GitHub user, field names per the REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Normalize into the domain model. Empty strings become absent, and a
    /// blog value that is not a parseable URL degrades to absent too.
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            username: self.login,
            display_name: non_empty(self.name),
            bio: non_empty(self.bio),
            company: non_empty(self.company),
            location: non_empty(self.location),
            blog_url: non_empty(self.blog).and_then(normalize_url),
            social_handle: non_empty(self.twitter_username),
            public_repos: self.public_repos,
            followers: self.followers,
            following: self.following,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Wire shape of a GitHub repository.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoRecord {
    pub id: u64,
    pub name: String,
    pub owner: OwnerRecord,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub watchers_count: u32,
    #[serde(default)]
    pub open_issues_count: u32,
    #[serde(default)]
    pub size: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwnerRecord {
    pub login: String,
}

impl RepoRecord {
    pub fn into_repository(self) -> Repository {
        Repository {
            id: self.id,
            name: self.name,
            owner: self.owner.login,
            description: non_empty(self.description),
            language: non_empty(self.language),
            topics: self.topics,
            is_fork: self.fork,
            is_archived: self.archived,
            is_disabled: self.disabled,
            stars: self.stargazers_count,
            forks: self.forks_count,
            watchers: self.watchers_count,
            open_issues: self.open_issues_count,
            size_kb: self.size,
            created_at: self.created_at,
            updated_at: self.updated_at,
            pushed_at: self.pushed_at,
        }
    }
}

/// Wire shape of a GitHub timeline event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: EventRepoRecord,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRepoRecord {
    pub name: String,
}

impl EventRecord {
    pub fn into_event(self) -> Event {
        Event {
            id: self.id,
            kind: EventKind::from_raw(&self.kind),
            repo_name: self.repo.name,
            created_at: self.created_at,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// GitHub lets users store blog links without a scheme ("octocat.dev").
/// Accept those by retrying with https; anything still unparseable is absent.
fn normalize_url(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if let Ok(url) = Url::parse(trimmed) {
        return Some(url.to_string());
    }
    Url::parse(&format!("https://{}", trimmed))
        .ok()
        .map(|url| url.to_string())
}
