pub mod config;

pub use config::{
    BallConfig, CameraConfig, GameConfig, GravityConfig, LabelConfig, LightConfig, PlateConfig,
    Point3, Rgb, WindowConfig,
};

/// Default layer list: tracked base file plus an optional untracked local override.
pub const DEFAULT_CONFIG_PATHS: [&str; 2] =
    ["assets/config/game.ron", "assets/config/game.local.ron"];
