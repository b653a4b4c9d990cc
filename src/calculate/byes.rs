//! BYE quota accounting.

use std::collections::BTreeMap;

use tracing::warn;

use crate::models::{ByeStatus, League, Pick, PlayerId};

/// BYE weeks each player may take per season.
pub const DEFAULT_BYE_QUOTA: u32 = 2;

/// BYE weeks consumed by `bye_picks` BYE picks. A lone BYE pick from a
/// malformed week still counts as a whole week.
pub fn bye_weeks_used(bye_picks: u32) -> u32 {
    bye_picks.div_ceil(2)
}

/// Quota usage for one player's season of picks.
///
/// Overconsumption is reported through `violated`, never clamped.
pub fn bye_status<'a>(
    picks: impl IntoIterator<Item = &'a Pick>,
    quota: u32,
    current_week: u32,
) -> ByeStatus {
    let mut bye_picks = 0u32;
    let mut bye_this_week = false;

    for pick in picks.into_iter().filter(|p| p.is_bye()) {
        bye_picks += 1;
        if pick.week == current_week {
            bye_this_week = true;
        }
    }

    let used = bye_weeks_used(bye_picks);
    let remaining = quota as i32 - used as i32;

    ByeStatus {
        used,
        remaining,
        violated: remaining < 0,
        bye_this_week,
    }
}

/// Quota usage for every player in the league.
pub fn bye_statuses(league: &League, quota: u32) -> BTreeMap<PlayerId, ByeStatus> {
    league
        .players
        .iter()
        .map(|player| {
            let status = bye_status(league.picks_by(&player.id), quota, league.current_week);
            if status.violated {
                warn!(
                    "Player {} has used {} BYE weeks (quota {})",
                    player.id, status.used, quota
                );
            }
            (player.id.clone(), status)
        })
        .collect()
}
