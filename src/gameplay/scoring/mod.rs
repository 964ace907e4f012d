//! Contact-driven scoring: a pure tracker plus the bevy glue that feeds it
//! rapier contact-end events and publishes `ScoreChanged`.

pub mod plugin;
pub mod tracker;

pub use plugin::{score_contact_ends, ScoreChanged, Scoreboard, ScoringPlugin};
pub use tracker::{ContactKind, ScoreChange, ScoreTracker, SensorZone};
