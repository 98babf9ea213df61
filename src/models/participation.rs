use serde::{Deserialize, Serialize};

/// Join of a game and an athlete with an optional free-text performance
/// note. Purely associative; the roster screens own its persistence and
/// consult [`crate::schedule::clock::GameClock::editable_fields`] to decide
/// when it may change.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameParticipation {
    pub game_id: String,
    pub athlete_id: String,
    pub performance_note: Option<String>,
}
