//! In-process store: all tables behind a single `RwLock`.

use super::{Store, StoreError, TournamentSnapshot};
use crate::models::{MatchResult, Player, PlayerId, Tournament, TournamentId};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Tables {
    next_player_id: PlayerId,
    next_tournament_id: TournamentId,
    players: BTreeMap<PlayerId, Player>,
    tournaments: BTreeMap<TournamentId, Tournament>,
    roster: BTreeSet<(TournamentId, PlayerId)>,
    matches: Vec<MatchResult>,
}

impl Tables {
    fn enrolled(&self, tournament_id: TournamentId) -> Vec<Player> {
        self.roster
            .range((tournament_id, PlayerId::MIN)..=(tournament_id, PlayerId::MAX))
            .filter_map(|(_, pid)| self.players.get(pid).cloned())
            .collect()
    }

    fn matches_in(&self, tournament_id: TournamentId) -> Vec<MatchResult> {
        self.matches
            .iter()
            .filter(|m| m.tournament_id == tournament_id)
            .copied()
            .collect()
    }

    fn snapshot(&self, tournament: &Tournament) -> TournamentSnapshot {
        TournamentSnapshot {
            tournament: tournament.clone(),
            players: self.enrolled(tournament.id),
            matches: self.matches_in(tournament.id),
        }
    }
}

/// Store kept in memory. Useful for tests and short-lived sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Store for MemoryStore {
    fn register_player(&self, name: &str) -> Result<Player, StoreError> {
        let mut t = self.write()?;
        t.next_player_id += 1;
        let player = Player::new(t.next_player_id, name);
        t.players.insert(player.id, player.clone());
        Ok(player)
    }

    fn create_tournament(&self, name: &str) -> Result<Tournament, StoreError> {
        let mut t = self.write()?;
        t.next_tournament_id += 1;
        let tournament = Tournament::new(t.next_tournament_id, name);
        t.tournaments.insert(tournament.id, tournament.clone());
        Ok(tournament)
    }

    fn enroll(&self, tournament_id: TournamentId, player_id: PlayerId) -> Result<(), StoreError> {
        self.write()?.roster.insert((tournament_id, player_id));
        Ok(())
    }

    fn record_match(
        &self,
        tournament_id: TournamentId,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> Result<MatchResult, StoreError> {
        let mut t = self.write()?;
        for player_id in [winner_id, loser_id] {
            if !t.roster.contains(&(tournament_id, player_id)) {
                return Err(StoreError::ConstraintViolation(format!(
                    "player {player_id} is not enrolled in tournament {tournament_id}"
                )));
            }
        }
        let result = MatchResult::new(tournament_id, winner_id, loser_id);
        t.matches.push(result);
        Ok(result)
    }

    fn delete_matches(&self) -> Result<(), StoreError> {
        self.write()?.matches.clear();
        Ok(())
    }

    fn delete_players(&self) -> Result<(), StoreError> {
        let mut t = self.write()?;
        t.matches.clear();
        t.roster.clear();
        t.players.clear();
        Ok(())
    }

    fn delete_tournaments(&self) -> Result<(), StoreError> {
        let mut t = self.write()?;
        t.matches.clear();
        t.roster.clear();
        t.tournaments.clear();
        Ok(())
    }

    fn get_player(&self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        Ok(self.read()?.players.get(&id).cloned())
    }

    fn get_tournament(&self, id: TournamentId) -> Result<Option<Tournament>, StoreError> {
        Ok(self.read()?.tournaments.get(&id).cloned())
    }

    fn list_players(&self) -> Result<Vec<Player>, StoreError> {
        Ok(self.read()?.players.values().cloned().collect())
    }

    fn list_tournaments(&self) -> Result<Vec<Tournament>, StoreError> {
        Ok(self.read()?.tournaments.values().cloned().collect())
    }

    fn list_enrolled_players(&self, tournament_id: TournamentId) -> Result<Vec<Player>, StoreError> {
        Ok(self.read()?.enrolled(tournament_id))
    }

    fn list_matches(&self, tournament_id: TournamentId) -> Result<Vec<MatchResult>, StoreError> {
        Ok(self.read()?.matches_in(tournament_id))
    }

    fn count_players(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.players.len())
    }

    fn count_tournaments(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.tournaments.len())
    }

    fn snapshot(&self, tournament_id: TournamentId) -> Result<Option<TournamentSnapshot>, StoreError> {
        let t = self.read()?;
        Ok(t.tournaments.get(&tournament_id).map(|tour| t.snapshot(tour)))
    }

    fn snapshot_all(&self) -> Result<Vec<TournamentSnapshot>, StoreError> {
        let t = self.read()?;
        Ok(t.tournaments.values().map(|tour| t.snapshot(tour)).collect())
    }
}
