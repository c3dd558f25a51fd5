//! Orchestration: fetch, map, classify, analyze, aggregate.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::{
    analyze_activity, analyze_community, analyze_languages, analyze_profile,
    analyze_repositories, classify_activity, language_shares, ActivityAnalysis,
    CommunityAnalysis, LanguageAnalysis, ProfileAnalysis, RepositoryAnalysis,
};
use crate::compare::{compare_analyses, Comparison};
use crate::error::{ProfileError, Result};
use crate::models::{Event, Repository, User};
use crate::provider::{DataProvider, EventRecord, RepoRecord};
use crate::score::{CategoryScore, HealthScore, ScoreWeights};

/// Repositories fetched per analysis.
pub const MAX_REPOSITORIES: usize = 100;
/// Recent events fetched per analysis.
pub const MAX_EVENTS: usize = 30;

/// Everything the engine knows about one profile after a single run.
///
/// Built only once all five category analyses have completed; never mutated
/// afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub user: User,
    pub health: HealthScore,
    pub activity: ActivityAnalysis,
    pub repositories: RepositoryAnalysis,
    pub community: CommunityAnalysis,
    pub profile: ProfileAnalysis,
    pub languages: LanguageAnalysis,
    pub analyzed_at: DateTime<Utc>,
}

/// Profile analyzer with an injected data provider and weight configuration.
pub struct Analyzer<P> {
    provider: P,
    weights: ScoreWeights,
}

impl<P: DataProvider> Analyzer<P> {
    pub fn new(provider: P) -> Self {
        Self::with_weights(provider, ScoreWeights::default())
    }

    pub fn with_weights(provider: P, weights: ScoreWeights) -> Self {
        Self { provider, weights }
    }

    /// Analyze one profile at the given reference time.
    ///
    /// The three provider calls run concurrently. User and repository
    /// failures fail the analysis; an event failure only logs a warning and
    /// proceeds with an empty timeline. Dropping the returned future cancels
    /// the run without committing a partial result.
    pub async fn analyze(&self, username: &str, now: DateTime<Utc>) -> Result<AnalysisResult> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ProfileError::UserNotFound(String::new()));
        }

        info!(username, "analyzing profile");

        let (user, repos, events) = tokio::join!(
            self.provider.fetch_user(username),
            self.provider.fetch_repositories(username, MAX_REPOSITORIES),
            self.provider.fetch_recent_events(username, MAX_EVENTS),
        );

        let user = user?.into_user();
        let repositories: Vec<Repository> =
            repos?.into_iter().map(RepoRecord::into_repository).collect();
        let mut events: Vec<Event> = match events {
            Ok(records) => records.into_iter().map(EventRecord::into_event).collect(),
            Err(e) => {
                warn!(username, error = %e, "event fetch failed, continuing without events");
                Vec::new()
            }
        };
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let status = classify_activity(&events, now);
        let shares = language_shares(&repositories);

        let activity = analyze_activity(status, &events, &repositories, now);
        let repo_analysis = analyze_repositories(&repositories, now);
        let community = analyze_community(&user);
        let profile = analyze_profile(&user);
        let languages = analyze_languages(&shares, &repositories);

        let health = HealthScore::compute(vec![
            CategoryScore {
                name: "Activity",
                score: activity.score,
                weight: self.weights.activity,
                detail: format!(
                    "{} status, {} events in the last 30 days, {} trend",
                    activity.status, activity.recent_events, activity.trend
                ),
            },
            CategoryScore {
                name: "Repositories",
                score: repo_analysis.score,
                weight: self.weights.repositories,
                detail: format!(
                    "{} repositories ({} active), {} stars, avg maintenance {:.0}",
                    repo_analysis.total,
                    repo_analysis.active,
                    repo_analysis.total_stars,
                    repo_analysis.avg_maintenance
                ),
            },
            CategoryScore {
                name: "Community",
                score: community.score,
                weight: self.weights.community,
                detail: format!(
                    "{} followers, {} level",
                    community.followers, community.level
                ),
            },
            CategoryScore {
                name: "Profile",
                score: profile.score,
                weight: self.weights.profile,
                detail: format!("{}% of profile fields filled", profile.score),
            },
            CategoryScore {
                name: "Languages",
                score: languages.score,
                weight: self.weights.languages,
                detail: match languages.primary_language {
                    Some(ref primary) => {
                        format!("{} languages, mostly {}", languages.language_count, primary)
                    }
                    None => "no languages detected".to_string(),
                },
            },
        ]);

        info!(username, overall = health.overall, "analysis complete");

        Ok(AnalysisResult {
            user,
            health,
            activity,
            repositories: repo_analysis,
            community,
            profile,
            languages,
            analyzed_at: now,
        })
    }

    /// Analyze two profiles concurrently and compare them metric by metric.
    /// Both analyses must succeed.
    pub async fn compare(&self, first: &str, second: &str, now: DateTime<Utc>) -> Result<Comparison> {
        let (first, second) = tokio::join!(self.analyze(first, now), self.analyze(second, now));
        Ok(compare_analyses(first?, second?))
    }
}
