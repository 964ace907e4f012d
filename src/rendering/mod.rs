pub mod camera;
pub mod lights;
pub mod score_label;
