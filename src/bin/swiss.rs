//! Command-line front end over a SQLite tournament database.
//! Run with: cargo run --bin swiss -- <command>
//! Database file comes from --database, else SWISS_DATABASE, else ./tournament.db.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use swiss_tournament::config::AppConfig;
use swiss_tournament::{
    create_tournament, enroll_player, register_player, report_match, PairingEngine, PlayerId,
    SqliteStore, StandingsCalculator, StandingsScope, Store, TournamentId,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament standings and pairings")]
struct Cli {
    /// SQLite database file
    #[arg(short, long, global = true)]
    database: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
enum Command {
    /// Register a new player
    RegisterPlayer { name: String },
    /// Create a new tournament
    CreateTournament { name: String },
    /// Add a player to a tournament's roster
    Enroll {
        tournament: TournamentId,
        player: PlayerId,
    },
    /// Record a match result
    Report {
        tournament: TournamentId,
        winner: PlayerId,
        loser: PlayerId,
    },
    /// List all players
    Players,
    /// List all tournaments
    Tournaments,
    /// Show standings for one tournament, or every enrollment if omitted
    Standings {
        #[arg(short, long)]
        tournament: Option<TournamentId>,
    },
    /// Show next-round pairings for a tournament
    Pairings { tournament: TournamentId },
    /// Delete records
    Reset {
        /// Only delete match results
        #[arg(long)]
        matches_only: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = AppConfig::from_env().with_database_override(cli.database.clone());
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Err(e) = run(&config, &cli.command) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(config: &AppConfig, command: &Command) -> Result<()> {
    let store = SqliteStore::open(&config.database_path)
        .with_context(|| format!("Failed to open database {}", config.database_path))?;
    log::debug!("Using database {}", config.database_path);

    match command {
        Command::RegisterPlayer { name } => print_json(&register_player(&store, name)?),
        Command::CreateTournament { name } => print_json(&create_tournament(&store, name)?),
        Command::Enroll { tournament, player } => {
            enroll_player(&store, *tournament, *player)?;
            Ok(())
        }
        Command::Report {
            tournament,
            winner,
            loser,
        } => print_json(&report_match(&store, *tournament, *winner, *loser)?),
        Command::Players => print_json(&store.list_players()?),
        Command::Tournaments => print_json(&store.list_tournaments()?),
        Command::Standings { tournament } => {
            let scope = tournament.map_or(StandingsScope::All, StandingsScope::Tournament);
            print_json(&StandingsCalculator::new(&store).standings(scope)?)
        }
        Command::Pairings { tournament } => {
            print_json(&PairingEngine::new(&store).pairings(*tournament)?)
        }
        Command::Reset { matches_only } => {
            store.delete_matches()?;
            if !matches_only {
                store.delete_players()?;
                store.delete_tournaments()?;
            }
            log::info!("Reset complete (matches only: {})", matches_only);
            Ok(())
        }
    }
}
