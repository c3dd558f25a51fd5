//! Profile completeness analysis.

use serde::Serialize;

use crate::models::User;

/// Which optional profile fields are filled in. The completion percentage
/// doubles as the category sub-score with no further transformation.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileAnalysis {
    pub has_display_name: bool,
    pub has_bio: bool,
    pub has_location: bool,
    pub has_company: bool,
    pub has_blog: bool,
    pub has_social: bool,
    pub score: u8,
}

pub fn analyze_profile(user: &User) -> ProfileAnalysis {
    ProfileAnalysis {
        has_display_name: user.display_name.is_some(),
        has_bio: user.bio.is_some(),
        has_location: user.location.is_some(),
        has_company: user.company.is_some(),
        has_blog: user.blog_url.is_some(),
        has_social: user.social_handle.is_some(),
        score: user.profile_completeness(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn bare_user() -> User {
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
            followers: 0,
            following: 0,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_empty_profile() {
        let analysis = analyze_profile(&bare_user());
        assert!(!analysis.has_bio);
        assert!(!analysis.has_blog);
        assert_eq!(analysis.score, 0);
    }

    #[test]
    fn test_full_profile() {
        let user = User {
            display_name: Some("The Octocat".into()),
            bio: Some("bio".into()),
            company: Some("GitHub".into()),
            location: Some("SF".into()),
            blog_url: Some("https://octocat.dev/".into()),
            social_handle: Some("octocat".into()),
            ..bare_user()
        };
        let analysis = analyze_profile(&user);
        assert!(analysis.has_display_name && analysis.has_social);
        assert_eq!(analysis.score, 100);
    }

    #[test]
    fn test_partial_profile_truncates() {
        let user = User { bio: Some("bio".into()), ..bare_user() };
        // 1 of 6 -> 16
        assert_eq!(analyze_profile(&user).score, 16);
    }
}
