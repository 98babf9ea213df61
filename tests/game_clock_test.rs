use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use athletics_backend::models::game::GameStatus;
use athletics_backend::schedule::clock::{GameClock, GameField, GamePhase};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn before_start_is_pre_game() {
    let clock = GameClock::new();
    let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
    let phase = clock.classify(date(2026, 3, 14), time(15, 0), Some(time(17, 0)), now);
    assert_eq!(phase, GamePhase::PreGame);
}

#[test]
fn between_start_and_end_is_during_game() {
    let clock = GameClock::new();
    let now = Utc.with_ymd_and_hms(2026, 3, 14, 16, 0, 0).unwrap();
    let phase = clock.classify(date(2026, 3, 14), time(15, 0), Some(time(17, 0)), now);
    assert_eq!(phase, GamePhase::DuringGame);
}

#[test]
fn after_end_is_post_game() {
    let clock = GameClock::new();
    let now = Utc.with_ymd_and_hms(2026, 3, 14, 17, 0, 1).unwrap();
    let phase = clock.classify(date(2026, 3, 14), time(15, 0), Some(time(17, 0)), now);
    assert_eq!(phase, GamePhase::PostGame);
}

#[test]
fn start_and_end_instants_count_as_during() {
    let clock = GameClock::new();
    let at_start = Utc.with_ymd_and_hms(2026, 3, 14, 15, 0, 0).unwrap();
    let at_end = Utc.with_ymd_and_hms(2026, 3, 14, 17, 0, 0).unwrap();
    assert_eq!(
        clock.classify(date(2026, 3, 14), time(15, 0), Some(time(17, 0)), at_start),
        GamePhase::DuringGame
    );
    assert_eq!(
        clock.classify(date(2026, 3, 14), time(15, 0), Some(time(17, 0)), at_end),
        GamePhase::DuringGame
    );
}

#[test]
fn no_end_time_never_becomes_post_game() {
    let clock = GameClock::new();
    let much_later = Utc.with_ymd_and_hms(2026, 3, 20, 9, 0, 0).unwrap();
    let phase = clock.classify(date(2026, 3, 14), time(15, 0), None, much_later);
    assert_eq!(phase, GamePhase::DuringGame);
}

#[test]
fn allowed_statuses_per_phase() {
    let clock = GameClock::new();
    assert_eq!(
        clock.allowed_statuses(GamePhase::PreGame),
        &[GameStatus::Scheduled]
    );
    assert_eq!(
        clock.allowed_statuses(GamePhase::DuringGame),
        &[GameStatus::Ongoing]
    );
    assert_eq!(
        clock.allowed_statuses(GamePhase::PostGame),
        &[GameStatus::Win, GameStatus::Loss, GameStatus::Disqualified]
    );
}

#[test]
fn forced_status_per_phase() {
    let clock = GameClock::new();
    assert_eq!(
        clock.forced_status(GamePhase::PreGame),
        Some(GameStatus::Scheduled)
    );
    assert_eq!(
        clock.forced_status(GamePhase::DuringGame),
        Some(GameStatus::Ongoing)
    );
    assert_eq!(clock.forced_status(GamePhase::PostGame), None);
}

#[test]
fn pre_game_fields_are_all_editable_except_status() {
    let clock = GameClock::new();
    for field in [
        GameField::Team,
        GameField::Opponent,
        GameField::Date,
        GameField::StartTime,
        GameField::EndTime,
        GameField::Location,
        GameField::Roster,
    ] {
        assert!(clock.field_editable(GamePhase::PreGame, field));
    }
    assert!(!clock.field_editable(GamePhase::PreGame, GameField::Status));
}

#[test]
fn during_game_only_status_is_editable() {
    let clock = GameClock::new();
    assert_eq!(
        clock.editable_fields(GamePhase::DuringGame),
        &[GameField::Status]
    );
    assert!(!clock.field_editable(GamePhase::DuringGame, GameField::Location));
    assert!(!clock.field_editable(GamePhase::DuringGame, GameField::Roster));
}

#[test]
fn post_game_allows_status_and_notes_only() {
    let clock = GameClock::new();
    assert_eq!(
        clock.editable_fields(GamePhase::PostGame),
        &[GameField::Status, GameField::Notes]
    );
    assert!(!clock.field_editable(GamePhase::PostGame, GameField::Date));
    assert!(!clock.field_editable(GamePhase::PostGame, GameField::Roster));
}
