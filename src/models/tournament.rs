//! Tournament and the errors raised by tournament operations.

use crate::models::player::PlayerId;
use crate::store::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for a tournament, assigned by the store.
pub type TournamentId = i64;

/// Errors that can occur during tournament operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// No tournament with this id exists.
    #[error("tournament {0} not found")]
    TournamentNotFound(TournamentId),
    /// No player with this id exists.
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),
    /// Pairing needs an even number of enrolled players.
    #[error("cannot pair an odd number of players ({0})")]
    OddPlayerCount(usize),
    /// The underlying store failed; passed through unchanged and never retried here.
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
    /// Wins exceed matches played. Zero matches is not this error, it is 0%.
    #[error("invalid win percentage: {wins} wins in {matches} matches")]
    InvalidWinPercentage { wins: u32, matches: u32 },
    /// Player or tournament name is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,
    /// A player cannot beat themselves.
    #[error("player {0} cannot play against themselves")]
    SelfMatch(PlayerId),
    /// The player is not on the tournament's roster.
    #[error("player {player_id} is not enrolled in tournament {tournament_id}")]
    NotEnrolled {
        tournament_id: TournamentId,
        player_id: PlayerId,
    },
}

impl TournamentError {
    /// True for the NotFound family (missing tournament or player).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TournamentError::TournamentNotFound(_) | TournamentError::PlayerNotFound(_)
        )
    }
}

/// A tournament. Created independently of players; players join through the roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
}

impl Tournament {
    pub fn new(id: TournamentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
