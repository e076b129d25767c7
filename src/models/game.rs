//! Match results. There are no draws: every match has a winner and a loser.

use crate::models::player::PlayerId;
use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};

/// One completed match within one tournament. Append-only.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub tournament_id: TournamentId,
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
}

impl MatchResult {
    pub fn new(tournament_id: TournamentId, winner_id: PlayerId, loser_id: PlayerId) -> Self {
        Self {
            tournament_id,
            winner_id,
            loser_id,
        }
    }

    /// True if the player took part in this match, on either side.
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.winner_id == player_id || self.loser_id == player_id
    }
}
