//! Weighted health-score aggregation.

use serde::Serialize;

/// Category weights applied to the five sub-scores.
///
/// Precondition: the weights sum to 1.0. The aggregator does not enforce
/// this; violating it lets the overall score leave the 0-100 range.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreWeights {
    pub activity: f64,
    pub repositories: f64,
    pub community: f64,
    pub profile: f64,
    pub languages: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            activity: 0.30,
            repositories: 0.25,
            community: 0.20,
            profile: 0.15,
            languages: 0.10,
        }
    }
}

/// One category's contribution to the overall score, kept for display.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub name: &'static str,
    pub score: u8,
    pub weight: f64,
    pub detail: String,
}

/// Overall 0-100 health score plus its per-category breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct HealthScore {
    pub overall: u8,
    pub breakdown: Vec<CategoryScore>,
}

impl HealthScore {
    /// Weighted sum of the sub-scores, floored. Not capped: sub-scores are
    /// already <=100 each, so the sum stays in range when weights sum to 1.
    pub fn compute(breakdown: Vec<CategoryScore>) -> Self {
        let overall = breakdown
            .iter()
            .map(|c| f64::from(c.score) * c.weight)
            .sum::<f64>()
            .floor() as u8;
        Self { overall, breakdown }
    }

    /// Human-readable rating label for the overall score.
    pub fn rating(&self) -> &'static str {
        match self.overall {
            0..=19 => "Getting Started",
            20..=39 => "Developing",
            40..=59 => "Fair",
            60..=74 => "Good",
            75..=89 => "Great",
            _ => "Excellent",
        }
    }
}
