use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::game::{Game, GameStatus};

/// Temporal phase of a game relative to the current instant. Never stored:
/// it is re-derived from the schedule on every read and write, so a stale
/// persisted phase cannot exist.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    PreGame,
    DuringGame,
    PostGame,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GamePhase::PreGame => "pre-game",
            GamePhase::DuringGame => "in progress",
            GamePhase::PostGame => "post-game",
        };
        f.write_str(s)
    }
}

/// Fields of a game record, as the edit rules see them. `Roster` and
/// `Notes` are owned by the participation screens; they appear here so the
/// presentation layer can drive its form state off `editable_fields` alone.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GameField {
    Team,
    Opponent,
    Date,
    StartTime,
    EndTime,
    Location,
    Roster,
    Status,
    Notes,
}

/// Service responsible for deriving a game's phase and the status/field
/// rules attached to each phase.
///
/// All stored dates and times are interpreted as UTC; `now` is injected by
/// the caller so the derivation stays deterministic under test.
pub struct GameClock;

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock {
    pub fn new() -> Self {
        Self
    }

    /// Classify where a game sits relative to `now`.
    ///
    /// Pre-game strictly before the scheduled start; post-game strictly
    /// after the scheduled end when an end time exists. Everything else,
    /// including an open-ended game past its start, is in progress.
    pub fn classify(
        &self,
        game_date: NaiveDate,
        start_time: NaiveTime,
        end_time: Option<NaiveTime>,
        now: DateTime<Utc>,
    ) -> GamePhase {
        let game_start = game_date.and_time(start_time).and_utc();
        if now < game_start {
            return GamePhase::PreGame;
        }
        if let Some(end) = end_time {
            let game_end = game_date.and_time(end).and_utc();
            if now > game_end {
                return GamePhase::PostGame;
            }
        }
        GamePhase::DuringGame
    }

    /// Classify a persisted game record.
    pub fn classify_game(&self, game: &Game, now: DateTime<Utc>) -> GamePhase {
        self.classify(game.game_date, game.start_time, game.end_time, now)
    }

    /// Statuses legally assignable in a phase.
    pub fn allowed_statuses(&self, phase: GamePhase) -> &'static [GameStatus] {
        match phase {
            GamePhase::PreGame => &[GameStatus::Scheduled],
            GamePhase::DuringGame => &[GameStatus::Ongoing],
            GamePhase::PostGame => &[
                GameStatus::Win,
                GameStatus::Loss,
                GameStatus::Disqualified,
            ],
        }
    }

    pub fn status_allowed(&self, phase: GamePhase, status: GameStatus) -> bool {
        self.allowed_statuses(phase).contains(&status)
    }

    /// The status a write is forced to carry in this phase, if any. In the
    /// post-game phase nothing is forced; the caller picks from
    /// `allowed_statuses` instead.
    pub fn forced_status(&self, phase: GamePhase) -> Option<GameStatus> {
        match phase {
            GamePhase::PreGame => Some(GameStatus::Scheduled),
            GamePhase::DuringGame => Some(GameStatus::Ongoing),
            GamePhase::PostGame => None,
        }
    }

    /// Fields an edit may touch in a phase. Anything absent is frozen:
    /// schedule and roster lock once the game starts, and only outcome plus
    /// annotations stay open once it ends.
    pub fn editable_fields(&self, phase: GamePhase) -> &'static [GameField] {
        match phase {
            GamePhase::PreGame => &[
                GameField::Team,
                GameField::Opponent,
                GameField::Date,
                GameField::StartTime,
                GameField::EndTime,
                GameField::Location,
                GameField::Roster,
            ],
            GamePhase::DuringGame => &[GameField::Status],
            GamePhase::PostGame => &[GameField::Status, GameField::Notes],
        }
    }

    pub fn field_editable(&self, phase: GamePhase, field: GameField) -> bool {
        self.editable_fields(phase).contains(&field)
    }
}
