//! OctoVitals Analysis Engine
//!
//! Turns a GitHub username into a composite 0-100 health score across five
//! categories: activity, repository quality, community, profile
//! completeness, and language diversity.
//!
//! The engine is deterministic: network access lives behind the injected
//! [`DataProvider`], and every time-relative computation takes an explicit
//! `now`, so identical inputs always produce identical scores.

pub mod analysis;
mod analyzer;
mod compare;
mod error;
mod models;
mod provider;
mod score;

pub use analysis::{
    ActivityAnalysis, ActivityStatus, ActivityTrend, CommunityAnalysis, EngagementLevel,
    LanguageAnalysis, LanguageShare, ProfileAnalysis, RepositoryAnalysis,
};
pub use analyzer::{AnalysisResult, Analyzer, MAX_EVENTS, MAX_REPOSITORIES};
pub use compare::{compare_analyses, Comparison, MetricWinner};
pub use error::{ProfileError, Result};
pub use models::{Event, EventKind, Repository, User};
pub use provider::{DataProvider, EventRecord, EventRepoRecord, OwnerRecord, RepoRecord, UserRecord};
pub use score::{CategoryScore, HealthScore, ScoreWeights};
