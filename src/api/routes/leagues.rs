use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::byes::bye_statuses;
use crate::calculate::{
    evaluate_league, leaderboard, weekly_view, EntryError, PlayerResults, RankingKey,
};
use crate::models::{ByeStatus, LeaderboardEntry, LeagueId, PlayerId, Team, WeeklyRow};
use crate::storage::LeagueSnapshot;

#[derive(Debug, Deserialize)]
pub struct StandingsParams {
    /// `total`, `last`, or `me` for just the viewer's line
    pub sort: Option<String>,
    pub me: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ViewerParams {
    pub me: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub league_id: LeagueId,
    pub sort: RankingKey,
    pub scoring_week: u32,
    pub entries: Vec<LeaderboardEntry>,
}

#[derive(Debug, Serialize)]
pub struct GridResponse {
    pub league_id: LeagueId,
    pub teams: Vec<Team>,
    pub results: PlayerResults,
    pub errors: Vec<EntryError>,
}

#[derive(Debug, Serialize)]
pub struct ByesResponse {
    pub league_id: LeagueId,
    pub current_week: u32,
    pub bye_quota: u32,
    pub players: BTreeMap<PlayerId, ByeStatus>,
}

#[derive(Debug, Serialize)]
pub struct WeekResponse {
    pub league_id: LeagueId,
    pub week: u32,
    pub rows: Vec<WeeklyRow>,
}

fn parse_sort(sort: Option<&str>) -> Result<(RankingKey, bool), ApiError> {
    match sort {
        None => Ok((RankingKey::Total, false)),
        Some("me") => Ok((RankingKey::Total, true)),
        Some(other) => other
            .parse()
            .map(|key| (key, false))
            .map_err(ApiError::BadRequest),
    }
}

pub async fn standings(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<StandingsParams>,
) -> Result<Json<StandingsResponse>, ApiError> {
    let (key, only_current) = parse_sort(params.sort.as_deref())?;
    let me = params.me.map(PlayerId::from);
    if only_current && me.is_none() {
        return Err(ApiError::BadRequest(
            "sort=me requires the me parameter".to_string(),
        ));
    }

    let snapshot = LeagueSnapshot::load(&state.storage, &LeagueId::from(id))?;
    let league = &snapshot.league;
    let report = evaluate_league(league, &snapshot.games, state.scoring.bye_quota);
    let entries = leaderboard(league, &report.standings, key, me.as_ref(), only_current);

    Ok(Json(StandingsResponse {
        league_id: league.id.clone(),
        sort: key,
        scoring_week: league.scoring_week(),
        entries,
    }))
}

pub async fn grid(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GridResponse>, ApiError> {
    let snapshot = LeagueSnapshot::load(&state.storage, &LeagueId::from(id))?;
    let report = evaluate_league(&snapshot.league, &snapshot.games, state.scoring.bye_quota);

    let mut teams = snapshot.teams;
    teams.sort_by(|a, b| a.short_name.cmp(&b.short_name));

    Ok(Json(GridResponse {
        league_id: snapshot.league.id,
        teams,
        results: report.player_results,
        errors: report.errors,
    }))
}

pub async fn byes(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ByesResponse>, ApiError> {
    let snapshot = LeagueSnapshot::load(&state.storage, &LeagueId::from(id))?;
    let league = &snapshot.league;

    Ok(Json(ByesResponse {
        league_id: league.id.clone(),
        current_week: league.current_week,
        bye_quota: state.scoring.bye_quota,
        players: bye_statuses(league, state.scoring.bye_quota),
    }))
}

pub async fn week(
    State(state): State<AppState>,
    Path((id, week)): Path<(String, u32)>,
    Query(params): Query<ViewerParams>,
) -> Result<Json<WeekResponse>, ApiError> {
    let snapshot = LeagueSnapshot::load(&state.storage, &LeagueId::from(id))?;
    let me = params.me.map(PlayerId::from);
    let rows = weekly_view(&snapshot.league, &snapshot.games, week, me.as_ref())?;

    Ok(Json(WeekResponse {
        league_id: snapshot.league.id,
        week,
        rows,
    }))
}
