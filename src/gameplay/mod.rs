pub mod ball_drop;
pub mod plates;
pub mod scene;
pub mod scoring;
