use std::collections::HashMap;

use futures::future::BoxFuture;
use tokio::sync::Mutex;

use crate::db::store::{AthleticsStore, StoreResult};
use crate::models::game::Game;
use crate::models::team_stats::TeamStats;

/// In-memory store backing the test suite and database-free local runs.
/// Games are keyed by game id, stats rows by team id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: Mutex<HashMap<String, Game>>,
    stats: Mutex<HashMap<String, TeamStats>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AthleticsStore for MemoryStore {
    fn get_game<'a>(&'a self, game_id: &'a str) -> BoxFuture<'a, StoreResult<Option<Game>>> {
        Box::pin(async move { Ok(self.games.lock().await.get(game_id).cloned()) })
    }

    fn list_games_by_team<'a>(&'a self, team_id: &'a str) -> BoxFuture<'a, StoreResult<Vec<Game>>> {
        Box::pin(async move {
            let games = self.games.lock().await;
            let mut team_games: Vec<Game> = games
                .values()
                .filter(|g| g.team_id == team_id)
                .cloned()
                .collect();
            team_games.sort_by(|a, b| {
                (a.game_date, a.start_time).cmp(&(b.game_date, b.start_time))
            });
            Ok(team_games)
        })
    }

    fn put_game(&self, game: Game) -> BoxFuture<'_, StoreResult<Game>> {
        Box::pin(async move {
            self.games.lock().await.insert(game.id.clone(), game.clone());
            Ok(game)
        })
    }

    fn delete_game<'a>(&'a self, game_id: &'a str) -> BoxFuture<'a, StoreResult<()>> {
        Box::pin(async move {
            self.games.lock().await.remove(game_id);
            Ok(())
        })
    }

    fn get_stats<'a>(&'a self, team_id: &'a str) -> BoxFuture<'a, StoreResult<Option<TeamStats>>> {
        Box::pin(async move { Ok(self.stats.lock().await.get(team_id).cloned()) })
    }

    fn put_stats(&self, stats: TeamStats) -> BoxFuture<'_, StoreResult<TeamStats>> {
        Box::pin(async move {
            self.stats
                .lock()
                .await
                .insert(stats.team_id.clone(), stats.clone());
            Ok(stats)
        })
    }
}
