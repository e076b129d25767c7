//! Relational store on SQLite.

use super::{Store, StoreError, TournamentSnapshot};
use crate::models::{MatchResult, Player, PlayerId, Tournament, TournamentId};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Store backed by a single SQLite connection. Every snapshot is read inside one transaction.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a database file and make sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Private database that lives as long as the store.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(include_str!("schema.sql"))?;
        log::debug!("SQLite schema ready");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<MatchResult> {
    Ok(MatchResult {
        tournament_id: row.get(0)?,
        winner_id: row.get(1)?,
        loser_id: row.get(2)?,
    })
}

fn query_tournament(conn: &Connection, id: TournamentId) -> rusqlite::Result<Option<Tournament>> {
    conn.query_row(
        "SELECT id, name FROM tournaments WHERE id = ?1",
        params![id],
        parse_tournament_row,
    )
    .optional()
}

fn query_tournaments(conn: &Connection) -> rusqlite::Result<Vec<Tournament>> {
    let mut stmt = conn.prepare("SELECT id, name FROM tournaments ORDER BY id")?;
    let rows = stmt
        .query_map([], parse_tournament_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

fn query_enrolled(conn: &Connection, tournament_id: TournamentId) -> rusqlite::Result<Vec<Player>> {
    let sql = "SELECT p.id, p.name FROM players p
               JOIN tournament_players tp ON tp.player_id = p.id
               WHERE tp.tournament_id = ?1
               ORDER BY p.id";
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

fn query_matches(conn: &Connection, tournament_id: TournamentId) -> rusqlite::Result<Vec<MatchResult>> {
    let sql = "SELECT tournament_id, winner_id, loser_id FROM matches WHERE tournament_id = ?1 ORDER BY id";
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

fn build_snapshot(conn: &Connection, tournament: Tournament) -> rusqlite::Result<TournamentSnapshot> {
    let players = query_enrolled(conn, tournament.id)?;
    let matches = query_matches(conn, tournament.id)?;
    Ok(TournamentSnapshot {
        tournament,
        players,
        matches,
    })
}

fn count(conn: &Connection, table_sql: &str) -> Result<usize, StoreError> {
    let n: i64 = conn.query_row(table_sql, [], |row| row.get(0))?;
    Ok(n as usize)
}

impl Store for SqliteStore {
    fn register_player(&self, name: &str) -> Result<Player, StoreError> {
        let conn = self.lock()?;
        let player = conn.query_row(
            "INSERT INTO players (name) VALUES (?1) RETURNING id, name",
            params![name],
            parse_player_row,
        )?;
        Ok(player)
    }

    fn create_tournament(&self, name: &str) -> Result<Tournament, StoreError> {
        let conn = self.lock()?;
        let tournament = conn.query_row(
            "INSERT INTO tournaments (name) VALUES (?1) RETURNING id, name",
            params![name],
            parse_tournament_row,
        )?;
        Ok(tournament)
    }

    fn enroll(&self, tournament_id: TournamentId, player_id: PlayerId) -> Result<(), StoreError> {
        self.lock()?.execute(
            "INSERT OR IGNORE INTO tournament_players (tournament_id, player_id) VALUES (?1, ?2)",
            params![tournament_id, player_id],
        )?;
        Ok(())
    }

    fn record_match(
        &self,
        tournament_id: TournamentId,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> Result<MatchResult, StoreError> {
        let conn = self.lock()?;
        let result = conn.query_row(
            "INSERT INTO matches (tournament_id, winner_id, loser_id) VALUES (?1, ?2, ?3)
             RETURNING tournament_id, winner_id, loser_id",
            params![tournament_id, winner_id, loser_id],
            parse_match_row,
        )?;
        Ok(result)
    }

    fn delete_matches(&self) -> Result<(), StoreError> {
        self.lock()?.execute("DELETE FROM matches", [])?;
        Ok(())
    }

    fn delete_players(&self) -> Result<(), StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM matches", [])?;
        tx.execute("DELETE FROM tournament_players", [])?;
        tx.execute("DELETE FROM players", [])?;
        tx.commit()?;
        Ok(())
    }

    fn delete_tournaments(&self) -> Result<(), StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM matches", [])?;
        tx.execute("DELETE FROM tournament_players", [])?;
        tx.execute("DELETE FROM tournaments", [])?;
        tx.commit()?;
        Ok(())
    }

    fn get_player(&self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        let conn = self.lock()?;
        let player = conn
            .query_row(
                "SELECT id, name FROM players WHERE id = ?1",
                params![id],
                parse_player_row,
            )
            .optional()?;
        Ok(player)
    }

    fn get_tournament(&self, id: TournamentId) -> Result<Option<Tournament>, StoreError> {
        let conn = self.lock()?;
        Ok(query_tournament(&conn, id)?)
    }

    fn list_players(&self) -> Result<Vec<Player>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT id, name FROM players ORDER BY id")?;
        let rows = stmt
            .query_map([], parse_player_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    fn list_tournaments(&self) -> Result<Vec<Tournament>, StoreError> {
        let conn = self.lock()?;
        Ok(query_tournaments(&conn)?)
    }

    fn list_enrolled_players(&self, tournament_id: TournamentId) -> Result<Vec<Player>, StoreError> {
        let conn = self.lock()?;
        Ok(query_enrolled(&conn, tournament_id)?)
    }

    fn list_matches(&self, tournament_id: TournamentId) -> Result<Vec<MatchResult>, StoreError> {
        let conn = self.lock()?;
        Ok(query_matches(&conn, tournament_id)?)
    }

    fn count_players(&self) -> Result<usize, StoreError> {
        let conn = self.lock()?;
        count(&conn, "SELECT count(*) FROM players")
    }

    fn count_tournaments(&self) -> Result<usize, StoreError> {
        let conn = self.lock()?;
        count(&conn, "SELECT count(*) FROM tournaments")
    }

    fn snapshot(&self, tournament_id: TournamentId) -> Result<Option<TournamentSnapshot>, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let snapshot = match query_tournament(&tx, tournament_id)? {
            Some(tournament) => Some(build_snapshot(&tx, tournament)?),
            None => None,
        };
        tx.commit()?;
        Ok(snapshot)
    }

    fn snapshot_all(&self) -> Result<Vec<TournamentSnapshot>, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let snapshots = query_tournaments(&tx)?
            .into_iter()
            .map(|tournament| build_snapshot(&tx, tournament))
            .collect::<rusqlite::Result<Vec<_>>>()?;
        tx.commit()?;
        Ok(snapshots)
    }
}
