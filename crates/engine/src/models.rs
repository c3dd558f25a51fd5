//! Domain models for profile analysis.
//!
//! Immutable snapshots built once per analysis run. Every time-relative
//! derivation takes an explicit `now` so the engine stays deterministic.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A GitHub account as seen by the analyzers.
///
/// Optional profile fields are normalized at the provider boundary: an empty
/// string never appears here, only `None`.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub blog_url: Option<String>,
    pub social_handle: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Followers per account followed; plain follower count when the user
    /// follows nobody.
    pub fn follower_ratio(&self) -> f64 {
        if self.following > 0 {
            f64::from(self.followers) / f64::from(self.following)
        } else {
            f64::from(self.followers)
        }
    }

    /// Share of the six optional profile fields that are filled in, as a
    /// truncated percentage (0-100).
    pub fn profile_completeness(&self) -> u8 {
        let fields = [
            &self.display_name,
            &self.bio,
            &self.location,
            &self.company,
            &self.blog_url,
            &self.social_handle,
        ];
        let present = fields.iter().filter(|f| f.is_some()).count();
        (present * 100 / fields.len()) as u8
    }
}

/// A repository pushed within this window counts as active.
const ACTIVE_WINDOW_DAYS: i64 = 183;

/// A repository owned by the analyzed user.
#[derive(Debug, Clone, Serialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub owner: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub is_fork: bool,
    pub is_archived: bool,
    pub is_disabled: bool,
    pub stars: u32,
    pub forks: u32,
    pub watchers: u32,
    pub open_issues: u32,
    pub size_kb: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
}

impl Repository {
    /// Whether the repository saw a push within the last six months.
    /// A repository that was never pushed is never active.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.pushed_at
            .is_some_and(|pushed| (now - pushed).num_days() <= ACTIVE_WINDOW_DAYS)
    }

    /// Upkeep score (0-100) from push recency, description, topics, stars,
    /// archival state, and the open-issue load relative to stars.
    pub fn maintenance_score(&self, now: DateTime<Utc>) -> u8 {
        let mut score: u32 = 0;

        if let Some(pushed) = self.pushed_at {
            score += match (now - pushed).num_days() {
                d if d < 30 => 40,
                d if d < 90 => 30,
                d if d < 180 => 20,
                d if d < 365 => 10,
                _ => 0,
            };
        }

        if self.description.is_some() {
            score += 15;
        }

        if !self.topics.is_empty() {
            score += 10;
        }

        score += match self.stars {
            0 => 0,
            1..=9 => 5,
            10..=49 => 10,
            50..=99 => 15,
            _ => 20,
        };

        if !self.is_archived {
            score += 10;
        }

        if self.stars > 0 && self.open_issues <= self.stars / 2 {
            score += 5;
        }

        score.min(100) as u8
    }
}

/// Classified GitHub event type. Unrecognized wire strings collapse to
/// `Other` rather than failing the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventKind {
    Push,
    PullRequest,
    PullRequestReview,
    Issues,
    IssueComment,
    Create,
    Delete,
    Fork,
    Watch,
    Release,
    Member,
    Public,
    Other,
}

impl EventKind {
    /// Parse a raw GitHub event type string (`"PushEvent"` etc.).
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "PushEvent" => Self::Push,
            "PullRequestEvent" => Self::PullRequest,
            "PullRequestReviewEvent" => Self::PullRequestReview,
            "IssuesEvent" => Self::Issues,
            "IssueCommentEvent" => Self::IssueComment,
            "CreateEvent" => Self::Create,
            "DeleteEvent" => Self::Delete,
            "ForkEvent" => Self::Fork,
            "WatchEvent" => Self::Watch,
            "ReleaseEvent" => Self::Release,
            "MemberEvent" => Self::Member,
            "PublicEvent" => Self::Public,
            _ => Self::Other,
        }
    }

    /// Whether this kind represents code being written or reviewed, as
    /// opposed to stars, forks, and other social signals.
    pub fn is_coding_activity(self) -> bool {
        matches!(self, Self::Push | Self::PullRequest | Self::PullRequestReview)
    }
}

/// A public activity event on the user's timeline.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: String,
    pub kind: EventKind,
    pub repo_name: String,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Whole days elapsed between the event and `now`.
    pub fn age_in_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn now() -> DateTime<Utc> {
        "2026-08-01T12:00:00Z".parse().unwrap()
    }

    fn user() -> User {
        User {
            id: 1,
            username: "octocat".into(),
            display_name: None,
            bio: None,
            company: None,
            location: None,
            blog_url: None,
            social_handle: None,
            public_repos: 0,
            followers: 0,
            following: 0,
            created_at: now(),
            updated_at: now(),
        }
    }

    fn repo() -> Repository {
        Repository {
            id: 1,
            name: "demo".into(),
            owner: "octocat".into(),
            description: None,
            language: None,
            topics: Vec::new(),
            is_fork: false,
            is_archived: false,
            is_disabled: false,
            stars: 0,
            forks: 0,
            watchers: 0,
            open_issues: 0,
            size_kb: 0,
            created_at: now(),
            updated_at: now(),
            pushed_at: None,
        }
    }

    #[test]
    fn test_follower_ratio_divides_by_following() {
        let u = User { followers: 120, following: 40, ..user() };
        assert!((u.follower_ratio() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_follower_ratio_with_zero_following_is_followers() {
        let u = User { followers: 7, following: 0, ..user() };
        assert!((u.follower_ratio() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_profile_completeness_truncates() {
        let u = User {
            display_name: Some("The Octocat".into()),
            bio: Some("I build things".into()),
            location: Some("San Francisco".into()),
            company: Some("GitHub".into()),
            blog_url: Some("https://octocat.dev".into()),
            ..user()
        };
        // 5 of 6 fields -> 83, not 83.33
        assert_eq!(u.profile_completeness(), 83);
    }

    #[test]
    fn test_profile_completeness_bounds() {
        assert_eq!(user().profile_completeness(), 0);
        let full = User {
            display_name: Some("a".into()),
            bio: Some("b".into()),
            location: Some("c".into()),
            company: Some("d".into()),
            blog_url: Some("e".into()),
            social_handle: Some("f".into()),
            ..user()
        };
        assert_eq!(full.profile_completeness(), 100);
    }

    #[test]
    fn test_never_pushed_repo_is_never_active() {
        assert!(!repo().is_active(now()));
    }

    #[test]
    fn test_recently_pushed_repo_is_active() {
        let r = Repository { pushed_at: Some(now() - TimeDelta::days(10)), ..repo() };
        assert!(r.is_active(now()));
        let stale = Repository { pushed_at: Some(now() - TimeDelta::days(200)), ..repo() };
        assert!(!stale.is_active(now()));
    }

    #[test]
    fn test_maintenance_score_is_capped() {
        let r = Repository {
            description: Some("desc".into()),
            topics: vec!["cli".into()],
            stars: 500,
            open_issues: 3,
            pushed_at: Some(now() - TimeDelta::days(1)),
            ..repo()
        };
        // 40 + 15 + 10 + 20 + 10 + 5 = 100
        assert_eq!(r.maintenance_score(now()), 100);
    }

    #[test]
    fn test_maintenance_score_bare_repo() {
        // Only the not-archived signal applies.
        assert_eq!(repo().maintenance_score(now()), 10);
        let archived = Repository { is_archived: true, ..repo() };
        assert_eq!(archived.maintenance_score(now()), 0);
    }

    #[test]
    fn test_maintenance_issue_ratio_needs_stars() {
        // Zero stars: the issue-ratio signal never fires.
        let r = Repository { open_issues: 0, ..repo() };
        assert_eq!(r.maintenance_score(now()), 10);
        let starred = Repository { stars: 10, open_issues: 5, ..repo() };
        // 10 (stars) + 10 (not archived) + 5 (issues <= stars/2)
        assert_eq!(starred.maintenance_score(now()), 25);
        let swamped = Repository { stars: 10, open_issues: 6, ..repo() };
        assert_eq!(swamped.maintenance_score(now()), 20);
    }

    #[test]
    fn test_event_kind_parsing() {
        assert_eq!(EventKind::from_raw("PushEvent"), EventKind::Push);
        assert_eq!(EventKind::from_raw("PullRequestReviewEvent"), EventKind::PullRequestReview);
        assert_eq!(EventKind::from_raw("SomethingNewEvent"), EventKind::Other);
        assert_eq!(EventKind::from_raw(""), EventKind::Other);
    }

    #[test]
    fn test_coding_activity_flags() {
        assert!(EventKind::Push.is_coding_activity());
        assert!(EventKind::PullRequest.is_coding_activity());
        assert!(EventKind::PullRequestReview.is_coding_activity());
        assert!(!EventKind::Watch.is_coding_activity());
        assert!(!EventKind::Issues.is_coding_activity());
        assert!(!EventKind::Other.is_coding_activity());
    }
}
