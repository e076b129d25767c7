//! Durable records for players, tournaments, rosters and matches.
//!
//! The standings and pairing logic only ever reads through [`Store::snapshot`] and
//! [`Store::snapshot_all`], so every computation sees one consistent view of the data.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::models::{MatchResult, Player, PlayerId, Tournament, TournamentId};
use thiserror::Error;

/// Failures of the backing store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("store lock poisoned")]
    LockPoisoned,
    /// A write would break a relation between records.
    #[error("constraint violated: {0}")]
    ConstraintViolation(String),
}

/// A tournament with its roster and match history, read as one unit.
#[derive(Clone, Debug, PartialEq)]
pub struct TournamentSnapshot {
    pub tournament: Tournament,
    /// Enrolled players, sorted by id ascending.
    pub players: Vec<Player>,
    pub matches: Vec<MatchResult>,
}

/// Simple insert/select/delete operations per entity.
///
/// Implementations assign ids in ascending order and return lists sorted by id.
pub trait Store {
    fn register_player(&self, name: &str) -> Result<Player, StoreError>;

    fn create_tournament(&self, name: &str) -> Result<Tournament, StoreError>;

    /// Add a player to a tournament's roster. Enrolling the same pair twice is a no-op.
    fn enroll(&self, tournament_id: TournamentId, player_id: PlayerId) -> Result<(), StoreError>;

    /// Append a match. Fails unless winner and loser are both on the tournament's roster.
    fn record_match(
        &self,
        tournament_id: TournamentId,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> Result<MatchResult, StoreError>;

    /// Remove every match record.
    fn delete_matches(&self) -> Result<(), StoreError>;

    /// Remove every player, with their roster entries and matches.
    fn delete_players(&self) -> Result<(), StoreError>;

    /// Remove every tournament, with their roster entries and matches.
    fn delete_tournaments(&self) -> Result<(), StoreError>;

    fn get_player(&self, id: PlayerId) -> Result<Option<Player>, StoreError>;

    fn get_tournament(&self, id: TournamentId) -> Result<Option<Tournament>, StoreError>;

    fn list_players(&self) -> Result<Vec<Player>, StoreError>;

    fn list_tournaments(&self) -> Result<Vec<Tournament>, StoreError>;

    fn list_enrolled_players(&self, tournament_id: TournamentId) -> Result<Vec<Player>, StoreError>;

    fn list_matches(&self, tournament_id: TournamentId) -> Result<Vec<MatchResult>, StoreError>;

    fn count_players(&self) -> Result<usize, StoreError>;

    fn count_tournaments(&self) -> Result<usize, StoreError>;

    /// Consistent read of one tournament. `None` if the tournament does not exist.
    fn snapshot(&self, tournament_id: TournamentId) -> Result<Option<TournamentSnapshot>, StoreError>;

    /// Consistent read of every tournament, sorted by tournament id.
    fn snapshot_all(&self) -> Result<Vec<TournamentSnapshot>, StoreError>;
}
