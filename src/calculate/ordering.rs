//! Row and column ordering for a single week's pick table.
//!
//! Presentation only: nothing here feeds back into scoring.
//!
//! 1. Each pair puts its more popular team on the left (alphabetical on ties).
//! 2. Rows sort by left-pick popularity, with BYE rows and players without
//!    picks sunk to the bottom. Right picks sort by *ascending* popularity so
//!    a row's rarer second pick sits next to its neighbours' common ones.
//! 3. One forward pass flips any row whose left pick repeats the previous
//!    row's right pick.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{is_current_player, League, PlayerId, Selection, WeeklyRow};

use super::outcome::team_result;
use super::standings::LeagueScores;
use super::{EngineError, GameResultIndex};

/// Team short name → number of players who picked it that week.
pub type PickFrequencies = BTreeMap<String, u32>;

/// A player's pair for the week, or `None` if they have not picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerPicks {
    pub player_id: PlayerId,
    pub pair: Option<[Selection; 2]>,
}

impl PlayerPicks {
    fn left(&self) -> Option<&str> {
        self.pair.as_ref().map(|p| p[0].short_name())
    }

    fn right(&self) -> Option<&str> {
        self.pair.as_ref().map(|p| p[1].short_name())
    }

    fn group(&self) -> u8 {
        match &self.pair {
            None => 2,
            Some(pair) if pair[0].is_bye() => 1,
            Some(_) => 0,
        }
    }
}

/// Count how many players picked each team (BYE included).
pub fn pick_frequencies(rows: &[PlayerPicks]) -> PickFrequencies {
    let mut frequencies = PickFrequencies::new();
    for pair in rows.iter().filter_map(|r| r.pair.as_ref()) {
        for selection in pair {
            *frequencies
                .entry(selection.short_name().to_string())
                .or_default() += 1;
        }
    }
    frequencies
}

fn frequency(frequencies: &PickFrequencies, short_name: &str) -> u32 {
    frequencies.get(short_name).copied().unwrap_or(0)
}

/// Order the week's rows for display.
pub fn order_pairs(mut rows: Vec<PlayerPicks>, frequencies: &PickFrequencies) -> Vec<PlayerPicks> {
    for row in rows.iter_mut() {
        if let Some(pair) = row.pair.as_mut() {
            let (a, b) = (pair[0].short_name(), pair[1].short_name());
            let swap = match frequency(frequencies, b).cmp(&frequency(frequencies, a)) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => b < a,
            };
            if swap {
                pair.swap(0, 1);
            }
        }
    }

    rows.sort_by(|x, y| compare_rows(x, y, frequencies));

    for i in 1..rows.len() {
        let (before, after) = rows.split_at_mut(i);
        let previous_right = before[i - 1].right();
        let row = &mut after[0];
        if previous_right.is_some() && row.left() == previous_right {
            if let Some(pair) = row.pair.as_mut() {
                pair.swap(0, 1);
            }
        }
    }

    rows
}

fn compare_rows(x: &PlayerPicks, y: &PlayerPicks, frequencies: &PickFrequencies) -> Ordering {
    let group = x.group().cmp(&y.group());
    if group != Ordering::Equal || x.group() != 0 {
        return group.then_with(|| x.player_id.cmp(&y.player_id));
    }

    let (x_left, y_left) = (x.left().unwrap_or_default(), y.left().unwrap_or_default());
    let (x_right, y_right) = (x.right().unwrap_or_default(), y.right().unwrap_or_default());

    frequency(frequencies, y_left)
        .cmp(&frequency(frequencies, x_left))
        .then_with(|| x_left.cmp(y_left))
        .then_with(|| frequency(frequencies, x_right).cmp(&frequency(frequencies, y_right)))
        .then_with(|| x_right.cmp(y_right))
        .then_with(|| x.player_id.cmp(&y.player_id))
}

/// Build the display rows for one revealed week.
///
/// Only exact pairs are shown; a malformed week displays as "no picks"
/// and is reported through the league's entry errors.
pub fn weekly_display_order(
    league: &League,
    week: u32,
    scores: &LeagueScores,
    index: &GameResultIndex<'_>,
    current_user: Option<&PlayerId>,
) -> Result<Vec<WeeklyRow>, EngineError> {
    if !league.is_week_revealed(week) {
        return Err(EngineError::WeekNotRevealed {
            week,
            revealed_week: league.revealed_week,
        });
    }

    let rows: Vec<PlayerPicks> = league
        .players
        .iter()
        .map(|player| {
            let picks = league.picks_for(&player.id, week);
            let pair = match picks.as_slice() {
                [first, second] => Some([first.team.clone(), second.team.clone()]),
                _ => None,
            };
            PlayerPicks {
                player_id: player.id.clone(),
                pair,
            }
        })
        .collect();

    let frequencies = pick_frequencies(&rows);
    let ordered = order_pairs(rows, &frequencies);

    let display = ordered
        .into_iter()
        .map(|row| {
            let display_name = league
                .player(&row.player_id)
                .map(|p| p.display_name.clone())
                .unwrap_or_default();
            let outcome = scores
                .for_player_week(&row.player_id, week)
                .map(|scored| scored.score.outcome);
            let is_current_player = is_current_player(&row.player_id, current_user);

            match row.pair {
                Some([left, right]) => {
                    let left_result = team_result(week, &left, index).ok();
                    let right_result = team_result(week, &right, index).ok();
                    WeeklyRow {
                        left_class: left_result.map(|r| r.css_class().to_string()),
                        right_class: right_result.map(|r| r.css_class().to_string()),
                        outcome_class: outcome.map(|o| o.css_class().to_string()),
                        left_result,
                        right_result,
                        left_pick: Some(left.short_name().to_string()),
                        right_pick: Some(right.short_name().to_string()),
                        player_id: row.player_id,
                        display_name,
                        outcome,
                        is_current_player,
                    }
                }
                None => WeeklyRow {
                    player_id: row.player_id,
                    display_name,
                    left_pick: None,
                    right_pick: None,
                    left_result: None,
                    right_result: None,
                    left_class: None,
                    right_class: None,
                    outcome: None,
                    outcome_class: None,
                    is_current_player,
                },
            }
        })
        .collect();

    Ok(display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::standings::score_league;
    use crate::models::{Game, GameResult, Pick, Player, PickOutcome, Team, TeamResult};
    use pretty_assertions::assert_eq;

    fn team(short: &str) -> Team {
        Team::new(format!("t-{}", short.to_lowercase()), short, short)
    }

    fn sel(short: &str) -> Selection {
        if short == "BYE" {
            Selection::Bye
        } else {
            Selection::Team(team(short))
        }
    }

    fn row(player: &str, picks: Option<[&str; 2]>) -> PlayerPicks {
        PlayerPicks {
            player_id: player.into(),
            pair: picks.map(|[a, b]| [sel(a), sel(b)]),
        }
    }

    fn layout(rows: &[PlayerPicks]) -> Vec<(String, Option<String>, Option<String>)> {
        rows.iter()
            .map(|r| {
                (
                    r.player_id.to_string(),
                    r.left().map(str::to_string),
                    r.right().map(str::to_string),
                )
            })
            .collect()
    }

    fn entry(player: &str, left: &str, right: &str) -> (String, Option<String>, Option<String>) {
        (player.to_string(), Some(left.to_string()), Some(right.to_string()))
    }

    #[test]
    fn test_frequencies() {
        let rows = vec![
            row("p1", Some(["KC", "SF"])),
            row("p2", Some(["DAL", "KC"])),
            row("p3", Some(["BYE", "BYE"])),
            row("p4", None),
        ];
        let freq = pick_frequencies(&rows);
        assert_eq!(freq["KC"], 2);
        assert_eq!(freq["SF"], 1);
        assert_eq!(freq["DAL"], 1);
        assert_eq!(freq["BYE"], 2);
    }

    #[test]
    fn test_popular_pick_front_loaded_and_bye_last() {
        let rows = vec![
            row("p3", Some(["BYE", "BYE"])),
            row("p1", Some(["SF", "KC"])),
            row("p2", Some(["DAL", "KC"])),
        ];
        let freq = pick_frequencies(&rows);
        let ordered = order_pairs(rows, &freq);

        assert_eq!(
            layout(&ordered),
            vec![
                entry("p2", "KC", "DAL"),
                entry("p1", "KC", "SF"),
                entry("p3", "BYE", "BYE"),
            ]
        );
    }

    #[test]
    fn test_no_picks_sink_below_byes() {
        let rows = vec![
            row("none", None),
            row("bye", Some(["BYE", "BYE"])),
            row("p1", Some(["NE", "MIA"])),
        ];
        let freq = pick_frequencies(&rows);
        let ordered = order_pairs(rows, &freq);

        let ids: Vec<_> = ordered.iter().map(|r| r.player_id.to_string()).collect();
        assert_eq!(ids, vec!["p1", "bye", "none"]);
    }

    #[test]
    fn test_right_pick_sorts_by_ascending_frequency() {
        // BUF x3, KC x2, ATL x2, MIN x1
        let rows = vec![
            row("p1", Some(["BUF", "KC"])),
            row("p2", Some(["BUF", "MIN"])),
            row("p3", Some(["BUF", "ATL"])),
            row("p4", Some(["KC", "ATL"])),
        ];
        let freq = pick_frequencies(&rows);
        let ordered = order_pairs(rows, &freq);

        // BUF-left rows: MIN (1), then ATL and KC (2) alphabetically. p4 normalizes to ATL/KC.
        let ids: Vec<_> = ordered.iter().map(|r| r.player_id.to_string()).collect();
        assert_eq!(ids, vec!["p2", "p3", "p1", "p4"]);
    }

    #[test]
    fn test_adjacency_pass_flips_repeated_team() {
        // After sorting: p1 [KC, SF], p2 [SF, DAL]; p2 left repeats p1 right
        let rows = vec![
            row("p1", Some(["KC", "SF"])),
            row("p2", Some(["SF", "DAL"])),
            row("p3", Some(["KC", "SF"])),
            row("p4", Some(["KC", "NYJ"])),
        ];
        let freq = pick_frequencies(&rows);
        assert_eq!(freq["KC"], 3);
        assert_eq!(freq["SF"], 3);
        let ordered = order_pairs(rows, &freq);

        assert_eq!(
            layout(&ordered),
            vec![
                entry("p4", "KC", "NYJ"),
                entry("p1", "KC", "SF"),
                entry("p3", "KC", "SF"),
                entry("p2", "DAL", "SF"),
            ]
        );
    }

    #[test]
    fn test_adjacency_pass_compares_against_flipped_row() {
        let rows = vec![
            row("r1", Some(["X", "Y"])),
            row("r2", Some(["Y", "Z"])),
            row("r3", Some(["Y", "W"])),
        ];
        let freq: PickFrequencies = [("X", 5), ("Y", 4), ("Z", 1), ("W", 0)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let ordered = order_pairs(rows, &freq);

        // Sorted r1, r3, r2. r3 flips against r1, then r2 flips against r3's new right side.
        assert_eq!(
            layout(&ordered),
            vec![
                entry("r1", "X", "Y"),
                entry("r3", "W", "Y"),
                entry("r2", "Z", "Y"),
            ]
        );
    }

    fn week_league() -> (League, Vec<Game>) {
        let picks = vec![
            Pick::new("l".into(), "p1".into(), 1, 0, sel("KC")),
            Pick::new("l".into(), "p1".into(), 1, 1, sel("SF")),
            Pick::new("l".into(), "p2".into(), 1, 0, sel("KC")),
            Pick::new("l".into(), "p2".into(), 1, 1, sel("DAL")),
            Pick::new("l".into(), "p3".into(), 1, 0, sel("BYE")),
            Pick::new("l".into(), "p3".into(), 1, 1, sel("BYE")),
        ];
        let league = League::new("l", 2024, 2, 1)
            .with_players(vec![
                Player::new("p1", "Pat"),
                Player::new("p2", "Sam"),
                Player::new("p3", "Lee"),
                Player::new("p4", "Max"),
            ])
            .with_picks(picks);
        let games = vec![
            Game::new("1", 1, team("KC"), team("BAL")).with_result(GameResult::final_score(27, 20)),
            Game::new("2", 1, team("SF"), team("PIT")).with_result(GameResult::final_score(10, 13)),
            Game::new("3", 1, team("DAL"), team("NYG")),
        ];
        (league, games)
    }

    #[test]
    fn test_weekly_display_order() {
        let (league, games) = week_league();
        let index = GameResultIndex::build(&games);
        let scores = score_league(&league, &index);
        let me = PlayerId::from("p1");

        let rows = weekly_display_order(&league, 1, &scores, &index, Some(&me)).unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.player_id.to_string()).collect();
        assert_eq!(ids, vec!["p2", "p1", "p3", "p4"]);

        let p1 = &rows[1];
        assert_eq!(p1.display_name, "Pat");
        assert_eq!(p1.left_pick.as_deref(), Some("KC"));
        assert_eq!(p1.left_result, Some(TeamResult::Win));
        assert_eq!(p1.right_result, Some(TeamResult::Loss));
        assert_eq!(p1.outcome, Some(PickOutcome::Split { week: 1 }));
        assert_eq!(p1.left_class.as_deref(), Some("gameresult-win"));
        assert_eq!(p1.right_class.as_deref(), Some("gameresult-loss"));
        assert_eq!(p1.outcome_class.as_deref(), Some("outcome-split"));
        assert!(p1.is_current_player);

        assert_eq!(rows[0].outcome, Some(PickOutcome::Unknown { week: 1 }));
        assert_eq!(rows[2].outcome, Some(PickOutcome::Bye { week: 1 }));
        assert_eq!(rows[2].left_result, Some(TeamResult::Bye));
        assert_eq!(rows[3].left_pick, None);
        assert_eq!(rows[2].outcome_class.as_deref(), Some("outcome-bye"));
        assert_eq!(rows[3].outcome, None);
        assert_eq!(rows[3].outcome_class, None);
        assert!(!rows[3].is_current_player);
    }

    #[test]
    fn test_unrevealed_week_is_rejected() {
        let (league, games) = week_league();
        let index = GameResultIndex::build(&games);
        let scores = score_league(&league, &index);

        let err = weekly_display_order(&league, 2, &scores, &index, None).unwrap_err();
        assert_eq!(
            err,
            EngineError::WeekNotRevealed {
                week: 2,
                revealed_week: 1
            }
        );
    }
}
