//! Category analyzers.
//!
//! Five pure functions, one per scoring category. Each consumes domain
//! models plus an explicit `now` where time matters, and produces an
//! analysis struct carrying a 0-100 sub-score. None of them can fail.

mod activity;
mod community;
mod languages;
mod profile;
mod repositories;

pub use activity::{
    analyze_activity, classify_activity, ActivityAnalysis, ActivityStatus, ActivityTrend,
};
pub use community::{analyze_community, CommunityAnalysis, EngagementLevel};
pub use languages::{analyze_languages, language_shares, LanguageAnalysis, LanguageShare};
pub use profile::{analyze_profile, ProfileAnalysis};
pub use repositories::{analyze_repositories, RepositoryAnalysis};
