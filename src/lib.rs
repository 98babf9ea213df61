//! Core library for the athletics department backend: phase-aware game
//! scheduling and team statistics reconciliation over a pluggable store.
//!
//! The presentation layer (screens, routing, auth) lives elsewhere and calls
//! in through [`schedule::games::ScheduleService`],
//! [`schedule::clock::GameClock`] and [`stats::reconciler::StatsReconciler`].

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod schedule;
pub mod stats;
pub mod telemetry;
