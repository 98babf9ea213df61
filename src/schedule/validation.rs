use chrono::{NaiveDate, NaiveTime, Utc};

use crate::error::ValidationError;
use crate::models::game::{Game, GameStatus, GameWriteRequest};
use crate::schedule::clock::{GameClock, GamePhase};

/// Schedule fields of a write request after string parsing.
#[derive(Debug, Clone, Copy)]
pub struct ParsedSchedule {
    pub game_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: Option<NaiveTime>,
}

/// Centralized validation for game writes: parses the form's date/time
/// strings and applies the phase edit rules from [`GameClock`].
pub struct GameValidator {
    clock: GameClock,
}

impl Default for GameValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl GameValidator {
    pub fn new() -> Self {
        Self { clock: GameClock::new() }
    }

    /// Parse the request's date and time strings. Forms post dates as
    /// `YYYY-MM-DD` and times as `HH:MM` (seconds optional).
    pub fn parse_schedule(&self, request: &GameWriteRequest) -> Result<ParsedSchedule, ValidationError> {
        let game_date = parse_date(&request.game_date)?;
        let start_time = parse_time("start_time", &request.start_time)?;
        let end_time = match request.end_time.as_deref() {
            Some(raw) => Some(parse_time("end_time", raw)?),
            None => None,
        };
        // Start and end share one calendar date, so an end at or before the
        // start would put the whole in-progress window out of reach.
        if let Some(end) = end_time {
            if end <= start_time {
                return Err(ValidationError::EndBeforeStart {
                    start: start_time,
                    end,
                });
            }
        }
        Ok(ParsedSchedule {
            game_date,
            start_time,
            end_time,
        })
    }

    pub fn validate_identifiers(&self, game_id: &str, team_id: &str) -> Result<(), ValidationError> {
        if game_id.trim().is_empty() {
            return Err(ValidationError::BlankIdentifier { field: "game id" });
        }
        if team_id.trim().is_empty() {
            return Err(ValidationError::BlankIdentifier { field: "team id" });
        }
        Ok(())
    }

    /// Status a newly created game is stored with. Before and during the
    /// game the status is forced regardless of what the form submitted;
    /// a post-game create must pick a legal outcome itself.
    pub fn resolve_create_status(
        &self,
        phase: GamePhase,
        requested: GameStatus,
    ) -> Result<GameStatus, ValidationError> {
        if let Some(forced) = self.clock.forced_status(phase) {
            return Ok(forced);
        }
        if self.clock.status_allowed(phase, requested) {
            Ok(requested)
        } else {
            Err(ValidationError::StatusNotAllowed {
                status: requested,
                phase,
            })
        }
    }

    /// Apply an edit request to a stored game under the rules of the phase
    /// current at edit time, returning the record to persist.
    ///
    /// The phase is derived from the *stored* schedule: an edit cannot move
    /// a game's own goalposts to unlock frozen fields.
    pub fn validate_update(
        &self,
        phase: GamePhase,
        existing: &Game,
        request: &GameWriteRequest,
        schedule: &ParsedSchedule,
    ) -> Result<Game, ValidationError> {
        match phase {
            GamePhase::PreGame => {
                // Everything is editable, but the status stays Scheduled no
                // matter what the form submitted.
                let mut updated = existing.clone();
                updated.team_id = request.team_id.clone();
                updated.opponent = request.opponent.clone();
                updated.game_date = schedule.game_date;
                updated.start_time = schedule.start_time;
                updated.end_time = schedule.end_time;
                updated.location = request.location.clone();
                updated.status = GameStatus::Scheduled;
                updated.updated_at = Utc::now();
                Ok(updated)
            }
            GamePhase::DuringGame | GamePhase::PostGame => {
                self.reject_frozen_changes(phase, existing, request, schedule)?;
                if !self.clock.status_allowed(phase, request.status) {
                    return Err(ValidationError::StatusNotAllowed {
                        status: request.status,
                        phase,
                    });
                }
                let mut updated = existing.clone();
                updated.status = request.status;
                updated.updated_at = Utc::now();
                Ok(updated)
            }
        }
    }

    fn reject_frozen_changes(
        &self,
        phase: GamePhase,
        existing: &Game,
        request: &GameWriteRequest,
        schedule: &ParsedSchedule,
    ) -> Result<(), ValidationError> {
        let frozen = |field: &'static str| ValidationError::FieldFrozen { field, phase };

        if request.team_id != existing.team_id {
            return Err(frozen("team_id"));
        }
        if request.opponent != existing.opponent {
            return Err(frozen("opponent"));
        }
        if schedule.game_date != existing.game_date {
            return Err(frozen("game_date"));
        }
        if schedule.start_time != existing.start_time {
            return Err(frozen("start_time"));
        }
        if schedule.end_time != existing.end_time {
            return Err(frozen("end_time"));
        }
        if request.location != existing.location {
            return Err(frozen("location"));
        }
        Ok(())
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ValidationError::MalformedDate {
        value: raw.to_owned(),
    })
}

fn parse_time(field: &'static str, raw: &str) -> Result<NaiveTime, ValidationError> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| ValidationError::MalformedTime {
            field,
            value: raw.to_owned(),
        })
}
