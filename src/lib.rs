//! # Pick Two
//!
//! Scoring and standings engine for a weekly NFL "pick two" league.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (teams, games, picks, leagues, outcomes)
//! - **calculate**: Pick scoring, standings, BYE quota, weekly ordering, eligibility
//! - **storage**: JSONL snapshot files on the local filesystem
//! - **api**: Read-only REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;

/// Resolve a user-typed team (short name or id, any case) or `BYE`.
pub fn parse_selection(s: &str, teams: &[Team]) -> Option<Selection> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if s.eq_ignore_ascii_case(BYE_SHORT_NAME) {
        return Some(Selection::Bye);
    }

    teams
        .iter()
        .find(|t| t.short_name.eq_ignore_ascii_case(s) || t.id.as_str() == s)
        .cloned()
        .map(Selection::Team)
}
