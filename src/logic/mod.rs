//! Tournament business logic: registration, standings, pairings.

mod pairing;
mod registration;
mod standings;

pub use pairing::{pair_adjacent, PairingEngine};
pub use registration::{create_tournament, enroll_player, register_player, report_match};
pub use standings::{compute_standings, rank_order, StandingsCalculator};
