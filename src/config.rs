//! Runtime settings for the `swiss` binary, read from the environment.

use std::env;

/// Environment variable naming the SQLite database file.
pub const DATABASE_ENV: &str = "SWISS_DATABASE";

fn default_database_path() -> String {
    "tournament.db".to_string()
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppConfig {
    pub database_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_path: env::var(DATABASE_ENV).unwrap_or_else(|_| default_database_path()),
        }
    }

    /// Command-line database path wins over the environment.
    pub fn with_database_override(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.database_path = path;
        }
        self
    }
}
