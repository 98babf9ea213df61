use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::db::store::AthleticsStore;
use crate::error::{CoreError, ValidationError};
use crate::models::game::{Game, GameWriteRequest};
use crate::schedule::clock::GameClock;
use crate::schedule::validation::GameValidator;
use crate::stats::reconciler::StatsReconciler;

/// Main schedule service orchestrating game writes: derives the phase,
/// enforces the phase's status and field rules, persists, and keeps team
/// stats reconciled on outcome-affecting changes.
///
/// A game write and its follow-up reconciliation are two separate store
/// operations. When the second fails the first stays committed and the
/// error propagates as retryable; `StatsReconciler::reconcile_many` is the
/// compensation path.
pub struct ScheduleService {
    store: Arc<dyn AthleticsStore>,
    clock: GameClock,
    validator: GameValidator,
    reconciler: StatsReconciler,
}

impl ScheduleService {
    pub fn new(store: Arc<dyn AthleticsStore>) -> Self {
        Self {
            clock: GameClock::new(),
            validator: GameValidator::new(),
            reconciler: StatsReconciler::new(store.clone()),
            store,
        }
    }

    /// Create a game under the caller-assigned id. Status is forced to the
    /// phase's value before and during the game; a post-game create must
    /// carry a legal outcome itself.
    pub async fn create_game(
        &self,
        game_id: &str,
        request: &GameWriteRequest,
        now: DateTime<Utc>,
    ) -> Result<Game, CoreError> {
        self.validator.validate_identifiers(game_id, &request.team_id)?;
        let schedule = self.validator.parse_schedule(request)?;

        if self.store.get_game(game_id).await?.is_some() {
            return Err(ValidationError::DuplicateGame {
                id: game_id.to_owned(),
            }
            .into());
        }

        let phase = self.clock.classify(
            schedule.game_date,
            schedule.start_time,
            schedule.end_time,
            now,
        );
        let status = self.validator.resolve_create_status(phase, request.status)?;

        let created_at = Utc::now();
        let game = Game {
            id: game_id.to_owned(),
            team_id: request.team_id.clone(),
            opponent: request.opponent.clone(),
            game_date: schedule.game_date,
            start_time: schedule.start_time,
            end_time: schedule.end_time,
            location: request.location.clone(),
            status,
            created_at,
            updated_at: created_at,
        };

        let stored = self.store.put_game(game).await?;
        info!(
            "Created game {} for team {} ({}, status {})",
            stored.id, stored.team_id, phase, stored.status
        );

        if stored.status.is_outcome() {
            self.reconciler.reconcile(&stored.team_id).await?;
        }
        Ok(stored)
    }

    /// Edit a game under the rules of the phase current at edit time. The
    /// phase comes from the stored schedule, not the submitted one.
    pub async fn update_game(
        &self,
        game_id: &str,
        request: &GameWriteRequest,
        now: DateTime<Utc>,
    ) -> Result<Game, CoreError> {
        let existing = self
            .store
            .get_game(game_id)
            .await?
            .ok_or_else(|| CoreError::game_not_found(game_id))?;

        let schedule = self.validator.parse_schedule(request)?;
        let phase = self.clock.classify_game(&existing, now);
        let updated = self
            .validator
            .validate_update(phase, &existing, request, &schedule)?;

        let stored = self.store.put_game(updated).await?;
        info!(
            "Updated game {} ({}, status {} -> {})",
            stored.id, phase, existing.status, stored.status
        );

        if StatsReconciler::outcome_changed(existing.status, stored.status) {
            self.reconciler.reconcile(&stored.team_id).await?;
        }
        Ok(stored)
    }

    /// Delete a game. Unconstrained by phase; the owning team is
    /// re-reconciled when the deleted game carried an outcome so its
    /// counters do not keep counting a removed result.
    pub async fn delete_game(&self, game_id: &str) -> Result<(), CoreError> {
        let existing = self
            .store
            .get_game(game_id)
            .await?
            .ok_or_else(|| CoreError::game_not_found(game_id))?;

        self.store.delete_game(game_id).await?;
        info!("Deleted game {} for team {}", game_id, existing.team_id);

        if existing.status.is_outcome() {
            self.reconciler.reconcile(&existing.team_id).await?;
        }
        Ok(())
    }

    pub async fn get_game(&self, game_id: &str) -> Result<Game, CoreError> {
        self.store
            .get_game(game_id)
            .await?
            .ok_or_else(|| CoreError::game_not_found(game_id))
    }

    pub async fn list_team_games(&self, team_id: &str) -> Result<Vec<Game>, CoreError> {
        Ok(self.store.list_games_by_team(team_id).await?)
    }

    /// The reconciler bound to this service's store, for compensation
    /// sweeps run by the operational layer.
    pub fn reconciler(&self) -> &StatsReconciler {
        &self.reconciler
    }
}
