use futures::future::BoxFuture;
use sqlx::PgPool;
use tracing::debug;

use crate::db::store::{AthleticsStore, StoreError, StoreResult};
use crate::models::game::Game;
use crate::models::team_stats::TeamStats;

const GAME_COLUMNS: &str =
    "id, team_id, opponent, game_date, start_time, end_time, location, status, created_at, updated_at";

const STATS_COLUMNS: &str =
    "id, team_id, wins, losses, points, medals, records, events, top_performer, last_updated";

/// Postgres-backed store.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AthleticsStore for PgStore {
    fn get_game<'a>(&'a self, game_id: &'a str) -> BoxFuture<'a, StoreResult<Option<Game>>> {
        Box::pin(async move {
            sqlx::query_as::<_, Game>(&format!(
                "SELECT {GAME_COLUMNS} FROM games WHERE id = $1"
            ))
            .bind(game_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::unavailable(format!("fetching game {game_id}"), e))
        })
    }

    fn list_games_by_team<'a>(&'a self, team_id: &'a str) -> BoxFuture<'a, StoreResult<Vec<Game>>> {
        Box::pin(async move {
            sqlx::query_as::<_, Game>(&format!(
                "SELECT {GAME_COLUMNS} FROM games WHERE team_id = $1 ORDER BY game_date, start_time"
            ))
            .bind(team_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::unavailable(format!("listing games for team {team_id}"), e))
        })
    }

    fn put_game(&self, game: Game) -> BoxFuture<'_, StoreResult<Game>> {
        Box::pin(async move {
            debug!("Upserting game {} for team {}", game.id, game.team_id);
            sqlx::query_as::<_, Game>(&format!(
                r#"
                INSERT INTO games ({GAME_COLUMNS})
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                ON CONFLICT (id) DO UPDATE SET
                    team_id = EXCLUDED.team_id,
                    opponent = EXCLUDED.opponent,
                    game_date = EXCLUDED.game_date,
                    start_time = EXCLUDED.start_time,
                    end_time = EXCLUDED.end_time,
                    location = EXCLUDED.location,
                    status = EXCLUDED.status,
                    updated_at = EXCLUDED.updated_at
                RETURNING {GAME_COLUMNS}
                "#
            ))
            .bind(&game.id)
            .bind(&game.team_id)
            .bind(&game.opponent)
            .bind(game.game_date)
            .bind(game.start_time)
            .bind(game.end_time)
            .bind(&game.location)
            .bind(game.status)
            .bind(game.created_at)
            .bind(game.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::unavailable(format!("writing game {}", game.id), e))
        })
    }

    fn delete_game<'a>(&'a self, game_id: &'a str) -> BoxFuture<'a, StoreResult<()>> {
        Box::pin(async move {
            sqlx::query("DELETE FROM games WHERE id = $1")
                .bind(game_id)
                .execute(&self.pool)
                .await
                .map_err(|e| StoreError::unavailable(format!("deleting game {game_id}"), e))?;
            Ok(())
        })
    }

    fn get_stats<'a>(&'a self, team_id: &'a str) -> BoxFuture<'a, StoreResult<Option<TeamStats>>> {
        Box::pin(async move {
            sqlx::query_as::<_, TeamStats>(&format!(
                "SELECT {STATS_COLUMNS} FROM team_stats WHERE team_id = $1"
            ))
            .bind(team_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::unavailable(format!("fetching stats for team {team_id}"), e))
        })
    }

    fn put_stats(&self, stats: TeamStats) -> BoxFuture<'_, StoreResult<TeamStats>> {
        Box::pin(async move {
            debug!(
                "Upserting stats for team {}: {}W/{}L",
                stats.team_id, stats.wins, stats.losses
            );
            // Single-statement upsert keyed on team_id: concurrent
            // reconciliations are last-writer-wins but can never produce a
            // second row or a torn one.
            sqlx::query_as::<_, TeamStats>(&format!(
                r#"
                INSERT INTO team_stats ({STATS_COLUMNS})
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                ON CONFLICT (team_id) DO UPDATE SET
                    wins = EXCLUDED.wins,
                    losses = EXCLUDED.losses,
                    points = EXCLUDED.points,
                    medals = EXCLUDED.medals,
                    records = EXCLUDED.records,
                    events = EXCLUDED.events,
                    top_performer = EXCLUDED.top_performer,
                    last_updated = EXCLUDED.last_updated
                RETURNING {STATS_COLUMNS}
                "#
            ))
            .bind(stats.id)
            .bind(&stats.team_id)
            .bind(stats.wins)
            .bind(stats.losses)
            .bind(stats.points)
            .bind(stats.medals)
            .bind(&stats.records)
            .bind(stats.events)
            .bind(&stats.top_performer)
            .bind(stats.last_updated)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::unavailable(format!("writing stats for team {}", stats.team_id), e))
        })
    }
}
