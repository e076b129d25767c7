//! Registration and result reporting: validate, then write through the store.

use crate::models::{MatchResult, Player, PlayerId, Tournament, TournamentError, TournamentId};
use crate::store::Store;

fn clean_name(name: &str) -> Result<&str, TournamentError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TournamentError::EmptyName);
    }
    Ok(trimmed)
}

fn require_tournament<S: Store + ?Sized>(
    store: &S,
    tournament_id: TournamentId,
) -> Result<Tournament, TournamentError> {
    store
        .get_tournament(tournament_id)?
        .ok_or(TournamentError::TournamentNotFound(tournament_id))
}

/// Register a new player. Names need not be unique.
pub fn register_player<S: Store + ?Sized>(store: &S, name: &str) -> Result<Player, TournamentError> {
    let player = store.register_player(clean_name(name)?)?;
    log::info!("Registered player {} ({})", player.id, player.name);
    Ok(player)
}

/// Create a new tournament. Names need not be unique.
pub fn create_tournament<S: Store + ?Sized>(
    store: &S,
    name: &str,
) -> Result<Tournament, TournamentError> {
    let tournament = store.create_tournament(clean_name(name)?)?;
    log::info!("Created tournament {} ({})", tournament.id, tournament.name);
    Ok(tournament)
}

/// Add a registered player to a tournament's roster. Enrolling twice is a no-op.
pub fn enroll_player<S: Store + ?Sized>(
    store: &S,
    tournament_id: TournamentId,
    player_id: PlayerId,
) -> Result<(), TournamentError> {
    require_tournament(store, tournament_id)?;
    if store.get_player(player_id)?.is_none() {
        return Err(TournamentError::PlayerNotFound(player_id));
    }
    store.enroll(tournament_id, player_id)?;
    log::info!("Enrolled player {} in tournament {}", player_id, tournament_id);
    Ok(())
}

/// Record the outcome of one match. Both players must be enrolled in the tournament.
pub fn report_match<S: Store + ?Sized>(
    store: &S,
    tournament_id: TournamentId,
    winner_id: PlayerId,
    loser_id: PlayerId,
) -> Result<MatchResult, TournamentError> {
    if winner_id == loser_id {
        return Err(TournamentError::SelfMatch(winner_id));
    }
    require_tournament(store, tournament_id)?;

    let roster = store.list_enrolled_players(tournament_id)?;
    for player_id in [winner_id, loser_id] {
        if !roster.iter().any(|p| p.id == player_id) {
            log::warn!(
                "Rejected match in tournament {}: player {} not enrolled",
                tournament_id,
                player_id
            );
            return Err(TournamentError::NotEnrolled {
                tournament_id,
                player_id,
            });
        }
    }

    let result = store.record_match(tournament_id, winner_id, loser_id)?;
    log::info!(
        "Tournament {}: player {} beat player {}",
        tournament_id,
        winner_id,
        loser_id
    );
    Ok(result)
}
