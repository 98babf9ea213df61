pub mod game;
pub mod participation;
pub mod team_stats;
