//! Swiss-system tournament organizer: store, standings, and adjacent-rank pairings.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    compute_standings, create_tournament, enroll_player, pair_adjacent, rank_order,
    register_player, report_match, PairingEngine, StandingsCalculator,
};
pub use models::{
    win_percentage, MatchResult, Pairing, Player, PlayerId, Standing, StandingsScope, Tournament,
    TournamentError, TournamentId,
};
pub use store::{MemoryStore, SqliteStore, Store, StoreError, TournamentSnapshot};
