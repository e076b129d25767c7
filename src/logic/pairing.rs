//! Next-round pairings by adjacent rank.
//!
//! This is the simplified Swiss rule: no rematch avoidance and no byes.

use crate::logic::standings::StandingsCalculator;
use crate::models::{Pairing, Standing, StandingsScope, TournamentError, TournamentId};
use crate::store::Store;

/// Pair ranked standings as (0,1), (2,3), ... Each player meets the neighbour just below them.
///
/// An odd number of rows fails with `OddPlayerCount`; no partial pairing is returned.
pub fn pair_adjacent(standings: &[Standing]) -> Result<Vec<Pairing>, TournamentError> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }
    let pairings = standings
        .chunks_exact(2)
        .map(|pair| Pairing {
            player_1_id: pair[0].player_id,
            player_1_name: pair[0].player_name.clone(),
            player_2_id: pair[1].player_id,
            player_2_name: pair[1].player_name.clone(),
        })
        .collect();
    Ok(pairings)
}

/// Produces pairings from the current standings. Pure given the store's contents.
pub struct PairingEngine<'a, S: Store + ?Sized> {
    standings: StandingsCalculator<'a, S>,
}

impl<'a, S: Store + ?Sized> PairingEngine<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            standings: StandingsCalculator::new(store),
        }
    }

    /// Pairings for the next round of a tournament, covering every enrolled player once.
    pub fn pairings(&self, tournament_id: TournamentId) -> Result<Vec<Pairing>, TournamentError> {
        let standings = self
            .standings
            .standings(StandingsScope::Tournament(tournament_id))?;
        let pairings = pair_adjacent(&standings).inspect_err(|e| {
            log::warn!("Cannot pair tournament {}: {}", tournament_id, e);
        })?;
        log::debug!(
            "Paired {} players into {} matches for tournament {}",
            standings.len(),
            pairings.len(),
            tournament_id
        );
        Ok(pairings)
    }
}
