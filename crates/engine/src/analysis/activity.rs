//! Activity analysis: recency, trend, and consistency of public events.

use chrono::{DateTime, Utc, Weekday};
use serde::Serialize;

use crate::models::{Event, Repository};

/// How recently and densely the user has been pushing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityStatus {
    VeryActive,
    Active,
    Moderate,
    Inactive,
    Dormant,
}

impl std::fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VeryActive => write!(f, "very active"),
            Self::Active => write!(f, "active"),
            Self::Moderate => write!(f, "moderate"),
            Self::Inactive => write!(f, "inactive"),
            Self::Dormant => write!(f, "dormant"),
        }
    }
}

/// Direction of recent activity relative to the older half of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityTrend {
    Increasing,
    Stable,
    Decreasing,
    Inactive,
}

impl std::fmt::Display for ActivityTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Increasing => write!(f, "increasing"),
            Self::Stable => write!(f, "stable"),
            Self::Decreasing => write!(f, "decreasing"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

/// Activity category result.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityAnalysis {
    pub status: ActivityStatus,
    pub days_since_last: Option<i64>,
    pub recent_events: usize,
    pub trend: ActivityTrend,
    pub most_active_weekday: Option<Weekday>,
    pub consistency: u8,
    pub score: u8,
}

/// Classify activity status from the event timeline.
///
/// The rules are ordered and first-match-wins: a week-fresh timeline with
/// ten coding events in the last 30 days is very active, a month-old one is
/// moderate, anything beyond 90 days is dormant.
pub fn classify_activity(events: &[Event], now: DateTime<Utc>) -> ActivityStatus {
    let Some(days) = events.iter().map(|e| e.age_in_days(now)).min() else {
        return ActivityStatus::Dormant;
    };

    let coding_30d = events
        .iter()
        .filter(|e| e.kind.is_coding_activity() && e.age_in_days(now) <= 30)
        .count();

    if days <= 7 && coding_30d >= 10 {
        ActivityStatus::VeryActive
    } else if days <= 7 && coding_30d >= 3 {
        ActivityStatus::Active
    } else if days <= 14 {
        ActivityStatus::Active
    } else if days <= 30 {
        ActivityStatus::Moderate
    } else if days <= 90 {
        ActivityStatus::Inactive
    } else {
        ActivityStatus::Dormant
    }
}

/// Analyze the activity category. `events` must be sorted newest-first; the
/// orchestrator guarantees that ordering.
pub fn analyze_activity(
    status: ActivityStatus,
    events: &[Event],
    repositories: &[Repository],
    now: DateTime<Utc>,
) -> ActivityAnalysis {
    let days_since_last = events.iter().map(|e| e.age_in_days(now)).min();
    let recent_events = events.iter().filter(|e| e.age_in_days(now) <= 30).count();
    let trend = compute_trend(events, now);
    let consistency = consistency_score(events, repositories, now);
    let score = activity_score(status, days_since_last, consistency);

    ActivityAnalysis {
        status,
        days_since_last,
        recent_events,
        trend,
        most_active_weekday: most_active_weekday(repositories),
        consistency,
        score,
    }
}

/// Compare event density between the newer and older halves of the timeline.
///
/// The two halves are counted against different age windows (<=30 days vs
/// 31-60 days). That asymmetry is deliberate: scores must stay compatible
/// with the established behavior, so the windows are not "fixed" here.
fn compute_trend(events: &[Event], now: DateTime<Utc>) -> ActivityTrend {
    if events.len() < 5 {
        return if events.is_empty() {
            ActivityTrend::Inactive
        } else {
            ActivityTrend::Stable
        };
    }

    let mid = events.len() / 2;
    let recent = events[..mid]
        .iter()
        .filter(|e| e.age_in_days(now) <= 30)
        .count();
    let older = events[mid..]
        .iter()
        .filter(|e| {
            let age = e.age_in_days(now);
            (31..=60).contains(&age)
        })
        .count();

    if recent > older + 2 {
        ActivityTrend::Increasing
    } else if older > recent + 2 {
        ActivityTrend::Decreasing
    } else {
        ActivityTrend::Stable
    }
}

/// Blend of active-repository share and recent event volume, 0-100.
fn consistency_score(events: &[Event], repositories: &[Repository], now: DateTime<Utc>) -> u8 {
    let total = repositories.len().max(1);
    let active = repositories.iter().filter(|r| r.is_active(now)).count();
    let active_fraction = active as f64 / total as f64;

    let events_90d = events.iter().filter(|e| e.age_in_days(now) <= 90).count();
    let volume_fraction = (events_90d as f64 / 30.0).min(1.0);

    (100.0 * (0.5 * active_fraction + 0.5 * volume_fraction)).round() as u8
}

/// Majority vote over the weekday each repository was last pushed.
/// Ties go to the earliest weekday in Monday-first order.
fn most_active_weekday(repositories: &[Repository]) -> Option<Weekday> {
    use chrono::Datelike;

    let mut counts = [0usize; 7];
    for repo in repositories {
        if let Some(pushed) = repo.pushed_at {
            counts[pushed.weekday().num_days_from_monday() as usize] += 1;
        }
    }

    let mut best = 0;
    for (i, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = i;
        }
    }
    if counts[best] == 0 {
        return None;
    }

    const WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];
    Some(WEEKDAYS[best])
}

fn activity_score(
    status: ActivityStatus,
    days_since_last: Option<i64>,
    consistency: u8,
) -> u8 {
    let mut score: u32 = match status {
        ActivityStatus::VeryActive => 40,
        ActivityStatus::Active => 32,
        ActivityStatus::Moderate => 20,
        ActivityStatus::Inactive => 10,
        ActivityStatus::Dormant => 0,
    };

    if let Some(days) = days_since_last {
        score += match days {
            0..=7 => 30,
            8..=14 => 25,
            15..=30 => 20,
            31..=60 => 10,
            _ => 0,
        };
    }

    score += (f64::from(consistency) * 0.3).floor() as u32;

    score.min(100) as u8
}
