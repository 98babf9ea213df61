use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Aggregate record for one team, at most one row per team.
///
/// `wins` and `losses` are owned by the reconciler and always equal the
/// count of that team's games with a `win`/`loss` status after a successful
/// reconciliation. The remaining fields are maintained by hand through the
/// admin screens and are never touched here.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TeamStats {
    pub id: Uuid,
    pub team_id: String,
    pub wins: i32,
    pub losses: i32,
    pub points: Option<i32>,
    pub medals: Option<i32>,
    pub records: Option<String>,
    pub events: Option<i32>,
    pub top_performer: Option<String>,
    pub last_updated: DateTime<Utc>,
}

impl TeamStats {
    /// Fresh row for a team that has never been reconciled before. Manual
    /// fields start unset.
    pub fn new_for_team(team_id: &str, wins: i32, losses: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_id: team_id.to_owned(),
            wins,
            losses,
            points: None,
            medals: None,
            records: None,
            events: None,
            top_performer: None,
            last_updated: Utc::now(),
        }
    }
}
