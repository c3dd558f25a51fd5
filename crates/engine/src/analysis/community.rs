//! Community analysis: follower reach and engagement.

use serde::Serialize;

use crate::models::User;

/// Classification of community reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EngagementLevel {
    Newcomer,
    Emerging,
    Growing,
    Established,
    Influencer,
}

impl EngagementLevel {
    /// Classify from follower count and follower ratio.
    ///
    /// The rules overlap and evaluation order matters, so this is a plain
    /// sequential chain rather than a match on ranges.
    pub fn classify(followers: u32, ratio: f64) -> Self {
        if followers >= 1000 && ratio >= 5.0 {
            Self::Influencer
        } else if (followers >= 500 && ratio >= 2.0) || followers >= 1000 {
            Self::Established
        } else if followers >= 100 || ratio >= 1.0 {
            Self::Growing
        } else if followers >= 10 {
            Self::Emerging
        } else {
            Self::Newcomer
        }
    }
}

impl std::fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Newcomer => write!(f, "newcomer"),
            Self::Emerging => write!(f, "emerging"),
            Self::Growing => write!(f, "growing"),
            Self::Established => write!(f, "established"),
            Self::Influencer => write!(f, "influencer"),
        }
    }
}

/// Community category result.
#[derive(Debug, Clone, Serialize)]
pub struct CommunityAnalysis {
    pub followers: u32,
    pub following: u32,
    pub follower_ratio: f64,
    pub level: EngagementLevel,
    pub score: u8,
}

/// Analyze the community category.
pub fn analyze_community(user: &User) -> CommunityAnalysis {
    let ratio = user.follower_ratio();
    let level = EngagementLevel::classify(user.followers, ratio);
    let score = community_score(user.followers, user.following, level);

    CommunityAnalysis {
        followers: user.followers,
        following: user.following,
        follower_ratio: ratio,
        level,
        score,
    }
}

fn community_score(followers: u32, following: u32, level: EngagementLevel) -> u8 {
    let mut score: u32 = match followers {
        0 => 0,
        1..=9 => 5,
        10..=49 => 10,
        50..=99 => 20,
        100..=499 => 30,
        500..=999 => 40,
        _ => 50,
    };

    score += match level {
        EngagementLevel::Influencer => 30,
        EngagementLevel::Established => 25,
        EngagementLevel::Growing => 18,
        EngagementLevel::Emerging => 10,
        EngagementLevel::Newcomer => 5,
    };

    score += match following {
        0..=4 => 0,
        5..=19 => 10,
        20..=49 => 15,
        _ => 20,
    };

    score.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn user(followers: u32, following: u32) -> User {
        let ts: DateTime<Utc> = "2026-08-01T12:00:00Z".parse().unwrap();
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
            followers,
            following,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_engagement_boundaries() {
        assert_eq!(EngagementLevel::classify(0, 0.0), EngagementLevel::Newcomer);
        assert_eq!(EngagementLevel::classify(1000, 5.0), EngagementLevel::Influencer);
        // One short on either axis drops to Established.
        assert_eq!(EngagementLevel::classify(999, 5.0), EngagementLevel::Established);
        assert_eq!(EngagementLevel::classify(1000, 4.9), EngagementLevel::Established);
        assert_eq!(EngagementLevel::classify(500, 2.0), EngagementLevel::Established);
        assert_eq!(EngagementLevel::classify(499, 2.0), EngagementLevel::Growing);
        assert_eq!(EngagementLevel::classify(100, 0.1), EngagementLevel::Growing);
        // A tiny account with more followers than followed still counts as growing.
        assert_eq!(EngagementLevel::classify(5, 1.0), EngagementLevel::Growing);
        assert_eq!(EngagementLevel::classify(10, 0.5), EngagementLevel::Emerging);
        assert_eq!(EngagementLevel::classify(9, 0.9), EngagementLevel::Newcomer);
    }

    #[test]
    fn test_established_via_raw_follower_count() {
        // followers >= 1000 with a weak ratio lands on the second rule.
        assert_eq!(EngagementLevel::classify(2000, 0.3), EngagementLevel::Established);
    }

    #[test]
    fn test_score_for_empty_account() {
        // Newcomer bonus alone.
        let analysis = analyze_community(&user(0, 0));
        assert_eq!(analysis.level, EngagementLevel::Newcomer);
        assert_eq!(analysis.score, 5);
    }

    #[test]
    fn test_score_caps_at_100() {
        let analysis = analyze_community(&user(5000, 1000));
        assert_eq!(analysis.level, EngagementLevel::Influencer);
        // 50 + 30 + 20 capped
        assert_eq!(analysis.score, 100);
    }

    #[test]
    fn test_score_mid_range() {
        // 120 followers, following 10: 30 + 18 + 10 = 58
        let analysis = analyze_community(&user(120, 10));
        assert_eq!(analysis.level, EngagementLevel::Growing);
        assert_eq!(analysis.score, 58);
    }
}
