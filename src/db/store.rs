use futures::future::BoxFuture;
use std::error::Error;
use thiserror::Error;

use crate::models::game::Game;
use crate::models::team_stats::TeamStats;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by store backends regardless of the underlying database.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {message}")]
    Unavailable {
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StoreError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: impl Into<String>, source: impl Error + Send + Sync + 'static) -> Self {
        StoreError::Unavailable {
            message: message.into(),
            source: Box::new(source),
        }
    }
}

/// Abstraction over the persistence layer for games and team statistics.
///
/// `put_game` and `put_stats` are insert-or-replace; `put_stats` is keyed on
/// the team id so there is never more than one stats row per team.
pub trait AthleticsStore: Send + Sync {
    fn get_game<'a>(&'a self, game_id: &'a str) -> BoxFuture<'a, StoreResult<Option<Game>>>;
    fn list_games_by_team<'a>(&'a self, team_id: &'a str) -> BoxFuture<'a, StoreResult<Vec<Game>>>;
    fn put_game(&self, game: Game) -> BoxFuture<'_, StoreResult<Game>>;
    fn delete_game<'a>(&'a self, game_id: &'a str) -> BoxFuture<'a, StoreResult<()>>;
    fn get_stats<'a>(&'a self, team_id: &'a str) -> BoxFuture<'a, StoreResult<Option<TeamStats>>>;
    fn put_stats(&self, stats: TeamStats) -> BoxFuture<'_, StoreResult<TeamStats>>;
}
