//! Error taxonomy shared by the engine and its data providers.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failure modes surfaced by `analyze` and `compare`.
///
/// Providers map their transport-level failures into these variants; the
/// engine itself propagates them unchanged and never retries.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("rate limited{}", .reset_at.map_or_else(String::new, |t| format!(", resets at {}", t)))]
    RateLimited { reset_at: Option<DateTime<Utc>> },

    #[error("unexpected error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
