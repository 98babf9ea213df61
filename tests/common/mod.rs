use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use athletics_backend::db::memory::MemoryStore;
use athletics_backend::models::game::{Game, GameStatus, GameWriteRequest};
use athletics_backend::schedule::games::ScheduleService;

/// Schedule service over a fresh in-memory store, plus the store handle for
/// direct seeding and inspection.
pub fn spawn_service() -> (ScheduleService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (ScheduleService::new(store.clone()), store)
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn write_request(
    team_id: &str,
    game_date: &str,
    start_time: &str,
    end_time: Option<&str>,
    status: GameStatus,
) -> GameWriteRequest {
    GameWriteRequest {
        team_id: team_id.to_owned(),
        opponent: Some("State University".to_owned()),
        game_date: game_date.to_owned(),
        start_time: start_time.to_owned(),
        end_time: end_time.map(str::to_owned),
        location: Some("Memorial Field House".to_owned()),
        status,
    }
}

/// A persisted-shape game record for seeding the store directly, bypassing
/// the phase rules.
pub fn seeded_game(id: &str, team_id: &str, game_date: &str, status: GameStatus) -> Game {
    let created_at = Utc::now();
    Game {
        id: id.to_owned(),
        team_id: team_id.to_owned(),
        opponent: Some("Rival College".to_owned()),
        game_date: NaiveDate::parse_from_str(game_date, "%Y-%m-%d").unwrap(),
        start_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        end_time: Some(NaiveTime::from_hms_opt(17, 0, 0).unwrap()),
        location: None,
        status,
        created_at,
        updated_at: created_at,
    }
}
