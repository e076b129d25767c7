//! Integration tests against the SQLite store: same behaviour as the in-memory store.

use std::sync::Arc;
use std::thread;
use swiss_tournament::{
    create_tournament, enroll_player, register_player, report_match, PairingEngine, Player,
    SqliteStore, StandingsCalculator, StandingsScope, Store, TournamentError, TournamentId,
};

fn tournament_with_players(store: &SqliteStore, names: &[&str]) -> (TournamentId, Vec<Player>) {
    let tournament = create_tournament(store, "Winter Championship").unwrap();
    let players: Vec<Player> = names
        .iter()
        .map(|name| register_player(store, name).unwrap())
        .collect();
    for p in &players {
        enroll_player(store, tournament.id, p.id).unwrap();
    }
    (tournament.id, players)
}

#[test]
fn standings_and_pairings_over_sqlite() {
    let store = SqliteStore::open_in_memory().unwrap();
    let (tid, p) = tournament_with_players(
        &store,
        &["Twilight Sparkle", "Fluttershy", "Applejack", "Pinkie Pie"],
    );
    report_match(&store, tid, p[0].id, p[1].id).unwrap();
    report_match(&store, tid, p[2].id, p[3].id).unwrap();

    let standings = StandingsCalculator::new(&store)
        .standings(StandingsScope::Tournament(tid))
        .unwrap();
    let summary: Vec<_> = standings
        .iter()
        .map(|s| (s.player_id, s.wins, s.matches_played))
        .collect();
    assert_eq!(
        summary,
        vec![
            (p[0].id, 1, 1),
            (p[2].id, 1, 1),
            (p[1].id, 0, 1),
            (p[3].id, 0, 1)
        ]
    );

    let pairings = PairingEngine::new(&store).pairings(tid).unwrap();
    assert_eq!((pairings[0].player_1_id, pairings[0].player_2_id), (p[0].id, p[2].id));
    assert_eq!((pairings[1].player_1_id, pairings[1].player_2_id), (p[1].id, p[3].id));
}

#[test]
fn sqlite_counts_and_deletes() {
    let store = SqliteStore::open_in_memory().unwrap();
    let (tid, p) = tournament_with_players(&store, &["A", "B"]);
    report_match(&store, tid, p[0].id, p[1].id).unwrap();
    assert_eq!(store.count_players().unwrap(), 2);
    assert_eq!(store.count_tournaments().unwrap(), 1);

    store.delete_matches().unwrap();
    assert!(store.list_matches(tid).unwrap().is_empty());
    assert_eq!(store.list_enrolled_players(tid).unwrap(), p);

    store.delete_players().unwrap();
    assert_eq!(store.count_players().unwrap(), 0);
    assert!(store.list_enrolled_players(tid).unwrap().is_empty());

    store.delete_tournaments().unwrap();
    assert_eq!(store.count_tournaments().unwrap(), 0);
    assert!(store.get_tournament(tid).unwrap().is_none());
}

#[test]
fn sqlite_enrollment_is_idempotent() {
    let store = SqliteStore::open_in_memory().unwrap();
    let (tid, p) = tournament_with_players(&store, &["A", "B"]);
    enroll_player(&store, tid, p[1].id).unwrap();
    assert_eq!(store.list_enrolled_players(tid).unwrap().len(), 2);
}

#[test]
fn sqlite_rejects_matches_for_players_off_the_roster() {
    let store = SqliteStore::open_in_memory().unwrap();
    let (tid, p) = tournament_with_players(&store, &["A"]);
    let outsider = register_player(&store, "Outsider").unwrap();

    // Validation catches it first ...
    assert!(matches!(
        report_match(&store, tid, p[0].id, outsider.id),
        Err(TournamentError::NotEnrolled { .. })
    ));
    // ... and the schema refuses it when written directly.
    assert!(store.record_match(tid, p[0].id, outsider.id).is_err());
}

#[test]
fn sqlite_unknown_tournament_is_not_found() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(store.snapshot(9).unwrap().is_none());
    assert!(matches!(
        StandingsCalculator::new(&store).standings(StandingsScope::Tournament(9)),
        Err(TournamentError::TournamentNotFound(9))
    ));
}

#[test]
fn sqlite_all_scope_covers_every_enrollment() {
    let store = SqliteStore::open_in_memory().unwrap();
    let fall = create_tournament(&store, "Fall").unwrap();
    let winter = create_tournament(&store, "Winter").unwrap();
    let a = register_player(&store, "A").unwrap();
    let b = register_player(&store, "B").unwrap();
    for t in [fall.id, winter.id] {
        enroll_player(&store, t, a.id).unwrap();
        enroll_player(&store, t, b.id).unwrap();
    }
    let snapshots = store.snapshot_all().unwrap();
    assert_eq!(snapshots.len(), 2);

    let all = StandingsCalculator::new(&store)
        .standings(StandingsScope::All)
        .unwrap();
    assert_eq!(all.len(), 4);
}

#[test]
fn sqlite_file_survives_reopen() {
    let path = std::env::temp_dir().join(format!("swiss-reopen-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);
    {
        let store = SqliteStore::open(&path).unwrap();
        tournament_with_players(&store, &["A", "B"]);
    }
    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.count_players().unwrap(), 2);
    assert_eq!(store.snapshot_all().unwrap()[0].players.len(), 2);
    drop(store);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn concurrent_reports_and_standings_stay_consistent() {
    let store = Arc::new(SqliteStore::open_in_memory().unwrap());
    let (tid, p) = tournament_with_players(&store, &["A", "B", "C", "D"]);

    let writer = {
        let store = Arc::clone(&store);
        let p = p.clone();
        thread::spawn(move || {
            for _ in 0..25 {
                report_match(store.as_ref(), tid, p[0].id, p[1].id).unwrap();
                report_match(store.as_ref(), tid, p[2].id, p[3].id).unwrap();
            }
        })
    };
    for _ in 0..25 {
        let standings = StandingsCalculator::new(store.as_ref())
            .standings(StandingsScope::Tournament(tid))
            .unwrap();
        let played: u32 = standings.iter().map(|s| s.matches_played).sum();
        assert_eq!(played % 2, 0);
        assert_eq!(standings.len(), 4);
    }
    writer.join().unwrap();

    let standings = StandingsCalculator::new(store.as_ref())
        .standings(StandingsScope::Tournament(tid))
        .unwrap();
    let played: u32 = standings.iter().map(|s| s.matches_played).sum();
    assert_eq!(played, 100);
}
