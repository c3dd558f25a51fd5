//! Head-to-head comparison of two completed analyses.

use serde::Serialize;

use crate::analyzer::AnalysisResult;

/// Which side won a single metric. Equal values are always a tie; neither
/// side is favored arbitrarily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricWinner {
    First,
    Second,
    Tie,
}

impl MetricWinner {
    fn decide<T: PartialOrd>(first: T, second: T) -> Self {
        if first > second {
            Self::First
        } else if second > first {
            Self::Second
        } else {
            Self::Tie
        }
    }
}

/// Per-metric winners for two analyzed profiles.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub first: AnalysisResult,
    pub second: AnalysisResult,
    pub followers: MetricWinner,
    pub public_repos: MetricWinner,
    pub total_stars: MetricWinner,
    pub total_forks: MetricWinner,
    pub health: MetricWinner,
}

/// Compare two completed analyses by plain numeric greater-than per metric.
pub fn compare_analyses(first: AnalysisResult, second: AnalysisResult) -> Comparison {
    let followers = MetricWinner::decide(first.user.followers, second.user.followers);
    let public_repos = MetricWinner::decide(first.user.public_repos, second.user.public_repos);
    let total_stars = MetricWinner::decide(first.repositories.total_stars, second.repositories.total_stars);
    let total_forks = MetricWinner::decide(first.repositories.total_forks, second.repositories.total_forks);
    let health = MetricWinner::decide(first.health.overall, second.health.overall);

    Comparison {
        first,
        second,
        followers,
        public_repos,
        total_stars,
        total_forks,
        health,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decide_is_symmetric_under_swap() {
        assert_eq!(MetricWinner::decide(3, 1), MetricWinner::First);
        assert_eq!(MetricWinner::decide(1, 3), MetricWinner::Second);
        assert_eq!(MetricWinner::decide(2, 2), MetricWinner::Tie);
        assert_eq!(MetricWinner::decide(0, 0), MetricWinner::Tie);
    }
}
