// src/models/game.rs
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// One scheduled or completed contest. The id is caller-assigned and
/// immutable once created; all date/time fields are stored in UTC.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: String,
    pub team_id: String,
    pub opponent: Option<String>,
    pub game_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub status: GameStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Scheduled,
    Ongoing,
    Win,
    Loss,
    Disqualified,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "scheduled",
            GameStatus::Ongoing => "ongoing",
            GameStatus::Win => "win",
            GameStatus::Loss => "loss",
            GameStatus::Disqualified => "disqualified",
        }
    }

    /// Whether this status counts towards a team's win/loss aggregates.
    pub fn is_outcome(&self) -> bool {
        matches!(self, GameStatus::Win | GameStatus::Loss)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload submitted by the scheduling UI for both creates and edits.
///
/// Date and time fields arrive as strings (`YYYY-MM-DD`, `HH:MM` or
/// `HH:MM:SS`) exactly as the forms post them; parsing happens during
/// validation so a bad value surfaces as a field-level error instead of a
/// deserialization failure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GameWriteRequest {
    pub team_id: String,
    pub opponent: Option<String>,
    pub game_date: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub status: GameStatus,
}
