//! Repository quality analysis: portfolio composition and upkeep.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Repository;

/// Repository category result.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryAnalysis {
    pub total: usize,
    pub original: usize,
    pub forked: usize,
    pub active: usize,
    pub archived: usize,
    pub avg_maintenance: f64,
    pub total_stars: u64,
    pub total_forks: u64,
    pub stars_per_repo: f64,
    /// Top five repositories by star count, ties kept in input order.
    pub top_repos: Vec<Repository>,
    pub score: u8,
}

/// Analyze the repository portfolio.
pub fn analyze_repositories(repositories: &[Repository], now: DateTime<Utc>) -> RepositoryAnalysis {
    let total = repositories.len();
    let forked = repositories.iter().filter(|r| r.is_fork).count();
    let original = total - forked;
    let active = repositories.iter().filter(|r| r.is_active(now)).count();
    let archived = repositories.iter().filter(|r| r.is_archived).count();

    let avg_maintenance = if total > 0 {
        repositories
            .iter()
            .map(|r| f64::from(r.maintenance_score(now)))
            .sum::<f64>()
            / total as f64
    } else {
        0.0
    };

    let total_stars: u64 = repositories.iter().map(|r| u64::from(r.stars)).sum();
    let total_forks: u64 = repositories.iter().map(|r| u64::from(r.forks)).sum();
    let stars_per_repo = if total > 0 {
        total_stars as f64 / total as f64
    } else {
        0.0
    };

    // Stable sort keeps input order for equal star counts.
    let mut top_repos: Vec<Repository> = repositories.to_vec();
    top_repos.sort_by(|a, b| b.stars.cmp(&a.stars));
    top_repos.truncate(5);

    let score = quality_score(total, original, active, avg_maintenance, total_stars);

    RepositoryAnalysis {
        total,
        original,
        forked,
        active,
        archived,
        avg_maintenance,
        total_stars,
        total_forks,
        stars_per_repo,
        top_repos,
        score,
    }
}

fn quality_score(
    total: usize,
    original: usize,
    active: usize,
    avg_maintenance: f64,
    total_stars: u64,
) -> u8 {
    let mut score: u32 = 0;

    if total > 0 {
        score += 10;
    }

    let original_pct = percentage(original, total);
    score += match original_pct {
        p if p >= 70.0 => 20,
        p if p >= 50.0 => 15,
        p if p >= 30.0 => 10,
        _ => 0,
    };

    let active_pct = percentage(active, total);
    score += match active_pct {
        p if p >= 50.0 => 20,
        p if p >= 30.0 => 15,
        p if p >= 10.0 => 10,
        _ => 0,
    };

    score += (avg_maintenance * 0.3).floor() as u32;

    score += match total_stars {
        0 => 0,
        1..=9 => 3,
        10..=49 => 6,
        50..=99 => 10,
        100..=499 => 14,
        500..=999 => 17,
        _ => 20,
    };

    score.min(100) as u8
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / total as f64
}
