//! Data structures for a Swiss tournament: players, tournaments, matches, derived standings.

mod game;
mod player;
mod standing;
mod tournament;

pub use game::MatchResult;
pub use player::{Player, PlayerId};
pub use standing::{win_percentage, Pairing, Standing, StandingsScope};
pub use tournament::{Tournament, TournamentError, TournamentId};
