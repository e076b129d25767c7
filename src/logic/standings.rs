//! Standings: wins, matches played and win percentage per enrolled player.

use crate::models::{win_percentage, Standing, StandingsScope, TournamentError};
use crate::store::{Store, TournamentSnapshot};
use std::cmp::Ordering;

/// Rank order: wins descending, then player id ascending, then tournament id ascending.
///
/// The player id tie-break makes the order total, which pairing relies on.
pub fn rank_order(a: &Standing, b: &Standing) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then(a.player_id.cmp(&b.player_id))
        .then(a.tournament_id.cmp(&b.tournament_id))
}

/// Compute one tournament's standings from a consistent snapshot, ranked.
///
/// 1. For each enrolled player, scan the matches they took part in.
/// 2. Derive win percentage (0 when no matches).
/// 3. Sort by [`rank_order`].
///
/// Matches naming a player who is not on the roster do not produce rows.
pub fn compute_standings(snapshot: &TournamentSnapshot) -> Result<Vec<Standing>, TournamentError> {
    let mut standings = snapshot
        .players
        .iter()
        .map(|p| {
            let (wins, matches_played) = snapshot
                .matches
                .iter()
                .filter(|m| m.involves(p.id))
                .fold((0u32, 0u32), |(wins, played), m| {
                    (wins + u32::from(m.winner_id == p.id), played + 1)
                });
            Ok(Standing {
                player_id: p.id,
                player_name: p.name.clone(),
                tournament_id: snapshot.tournament.id,
                tournament_name: snapshot.tournament.name.clone(),
                wins,
                matches_played,
                win_percentage: win_percentage(wins, matches_played)?,
            })
        })
        .collect::<Result<Vec<_>, TournamentError>>()?;

    standings.sort_by(rank_order);
    Ok(standings)
}

/// Reads standings from a store. Holds no state of its own.
pub struct StandingsCalculator<'a, S: Store + ?Sized> {
    store: &'a S,
}

impl<'a, S: Store + ?Sized> StandingsCalculator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Ranked standings for one tournament, or one row per enrollment across all tournaments.
    ///
    /// A tournament id that does not exist fails with `TournamentNotFound`.
    pub fn standings(&self, scope: StandingsScope) -> Result<Vec<Standing>, TournamentError> {
        let standings = match scope {
            StandingsScope::Tournament(id) => {
                let snapshot = self
                    .store
                    .snapshot(id)?
                    .ok_or(TournamentError::TournamentNotFound(id))?;
                compute_standings(&snapshot)?
            }
            StandingsScope::All => {
                let mut all = Vec::new();
                for snapshot in self.store.snapshot_all()? {
                    all.extend(compute_standings(&snapshot)?);
                }
                all.sort_by(rank_order);
                all
            }
        };
        log::debug!("Computed {} standings rows for {:?}", standings.len(), scope);
        Ok(standings)
    }
}
