//! Language diversity analysis.
//!
//! Shares are derived from each repository's primary language; a per-repo
//! byte-level breakdown is out of scope, so frequency is the proxy.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::Repository;

/// One language's share of the portfolio, in percent.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageShare {
    pub name: String,
    pub percentage: f64,
}

/// Language category result.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageAnalysis {
    pub language_count: usize,
    pub primary_language: Option<String>,
    pub top_languages: Vec<LanguageShare>,
    pub score: u8,
}

/// Aggregate primary-language frequency into percentage shares, sorted
/// descending. Ties sort by name so the output is deterministic.
pub fn language_shares(repositories: &[Repository]) -> Vec<LanguageShare> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for repo in repositories {
        if let Some(ref language) = repo.language {
            *counts.entry(language.as_str()).or_default() += 1;
        }
    }

    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<LanguageShare> = counts
        .into_iter()
        .map(|(name, count)| LanguageShare {
            name: name.to_string(),
            percentage: count as f64 * 100.0 / total as f64,
        })
        .collect();
    shares.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    shares
}

/// Analyze the language category from pre-sorted shares and the portfolio.
pub fn analyze_languages(shares: &[LanguageShare], repositories: &[Repository]) -> LanguageAnalysis {
    let mut distinct: Vec<&str> = repositories
        .iter()
        .filter_map(|r| r.language.as_deref())
        .collect();
    distinct.sort_unstable();
    distinct.dedup();
    let language_count = distinct.len();

    LanguageAnalysis {
        language_count,
        primary_language: shares.first().map(|s| s.name.clone()),
        top_languages: shares.iter().take(5).cloned().collect(),
        score: diversity_score(language_count),
    }
}

fn diversity_score(language_count: usize) -> u8 {
    match language_count {
        0 => 0,
        1 => 20,
        2 => 40,
        3 => 60,
        4..=5 => 80,
        _ => 100,
    }
}
