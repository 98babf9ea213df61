use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::db::store::AthleticsStore;
use crate::error::CoreError;
use crate::models::game::GameStatus;
use crate::models::team_stats::TeamStats;

/// Service responsible for keeping a team's win/loss counters equal to the
/// count of its games recorded as won/lost.
pub struct StatsReconciler {
    store: Arc<dyn AthleticsStore>,
}

impl StatsReconciler {
    pub fn new(store: Arc<dyn AthleticsStore>) -> Self {
        Self { store }
    }

    /// Recount the team's outcomes from every game on record (past and
    /// future, no time filter) and overwrite its stats row, creating the row
    /// on first reconciliation. Manual fields (points, medals, records,
    /// events, top performer) pass through untouched.
    ///
    /// Idempotent: re-running without intervening game changes stores the
    /// same counters again. If the counting read fails nothing is written.
    pub async fn reconcile(&self, team_id: &str) -> Result<TeamStats, CoreError> {
        let games = self.store.list_games_by_team(team_id).await?;
        let wins = games.iter().filter(|g| g.status == GameStatus::Win).count() as i32;
        let losses = games.iter().filter(|g| g.status == GameStatus::Loss).count() as i32;

        let stats = match self.store.get_stats(team_id).await? {
            Some(mut existing) => {
                existing.wins = wins;
                existing.losses = losses;
                existing.last_updated = Utc::now();
                existing
            }
            None => TeamStats::new_for_team(team_id, wins, losses),
        };

        let stored = self.store.put_stats(stats).await?;
        info!(
            "Reconciled stats for team {}: {} wins, {} losses across {} games",
            team_id,
            stored.wins,
            stored.losses,
            games.len()
        );
        Ok(stored)
    }

    /// Compensation sweep for teams whose stats may have gone stale, e.g.
    /// after a game write succeeded but its follow-up reconciliation failed.
    /// Safe to run at any time.
    pub async fn reconcile_many(&self, team_ids: &[&str]) -> Result<(), CoreError> {
        for team_id in team_ids {
            self.reconcile(team_id).await?;
        }
        Ok(())
    }

    /// Whether a status transition affects the win/loss aggregates: moving
    /// into or out of the outcome set, or flipping between win and loss.
    /// No-op transitions never trigger a reconciliation.
    pub fn outcome_changed(old: GameStatus, new: GameStatus) -> bool {
        old != new && (old.is_outcome() || new.is_outcome())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_transitions_trigger_reconciliation() {
        assert!(StatsReconciler::outcome_changed(GameStatus::Ongoing, GameStatus::Win));
        assert!(StatsReconciler::outcome_changed(GameStatus::Win, GameStatus::Loss));
        assert!(StatsReconciler::outcome_changed(GameStatus::Loss, GameStatus::Disqualified));
    }

    #[test]
    fn non_outcome_transitions_do_not_trigger() {
        assert!(!StatsReconciler::outcome_changed(GameStatus::Ongoing, GameStatus::Ongoing));
        assert!(!StatsReconciler::outcome_changed(GameStatus::Win, GameStatus::Win));
        assert!(!StatsReconciler::outcome_changed(
            GameStatus::Ongoing,
            GameStatus::Disqualified
        ));
        assert!(!StatsReconciler::outcome_changed(
            GameStatus::Scheduled,
            GameStatus::Ongoing
        ));
    }
}
