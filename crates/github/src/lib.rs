//! OctoVitals GitHub Data Provider
//!
//! Implements the engine's [`DataProvider`](octovitals_engine::DataProvider)
//! seam against the GitHub REST API: user lookup, paginated repository
//! listing, and best-effort recent-event listing, with rate-limit detection.

mod client;

pub use client::{GithubConfig, GithubProvider};
