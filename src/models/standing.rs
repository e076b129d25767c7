//! Derived views: standings rows and next-round pairings. Never stored.

use crate::models::player::PlayerId;
use crate::models::tournament::{TournamentError, TournamentId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which tournaments a standings request covers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandingsScope {
    /// One row per (player, tournament) enrollment across every tournament.
    #[default]
    All,
    /// Only the players enrolled in this tournament.
    Tournament(TournamentId),
}

/// One player's record within one tournament.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: PlayerId,
    pub player_name: String,
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    pub wins: u32,
    pub matches_played: u32,
    /// Fraction of matches won, in `[0.0, 1.0]`. 0.0 when no matches were played.
    pub win_percentage: f64,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}/{} ({:.0}%)",
            self.player_name,
            self.tournament_name,
            self.wins,
            self.matches_played,
            self.win_percentage * 100.0
        )
    }
}

/// Win fraction for a record. Zero matches gives 0.0, never a division fault.
pub fn win_percentage(wins: u32, matches_played: u32) -> Result<f64, TournamentError> {
    if wins > matches_played {
        return Err(TournamentError::InvalidWinPercentage {
            wins,
            matches: matches_played,
        });
    }
    if matches_played == 0 {
        return Ok(0.0);
    }
    Ok(f64::from(wins) / f64::from(matches_played))
}

/// Two players meeting in the next round. The higher-ranked player comes first.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub player_1_id: PlayerId,
    pub player_1_name: String,
    pub player_2_id: PlayerId,
    pub player_2_name: String,
}
