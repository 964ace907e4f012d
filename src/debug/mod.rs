//! Debug module: feature gated runtime stats, logging and overlay.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod modes;
#[cfg(feature = "debug")]
mod overlay;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use modes::*;

#[cfg(feature = "debug")]
use crate::core::config::GameConfig;
#[cfg(feature = "debug")]
use crate::core::system::system_order::PresentationSet;
#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use bevy_rapier3d::render::{DebugRenderContext, RapierDebugRenderPlugin};

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use keys::debug_key_input_system;
        use logging::debug_logging_system;
        use overlay::{debug_overlay_spawn, debug_overlay_update};
        use stats::debug_stats_collect_system;

        fn seed_wireframe_from_config(cfg: Res<GameConfig>, mut state: ResMut<DebugState>) {
            state.rapier_wireframe = cfg.rapier_debug;
        }

        fn toggle_rapier_debug(state: Res<DebugState>, ctx: Option<ResMut<DebugRenderContext>>) {
            if let Some(mut c) = ctx {
                if c.enabled != state.rapier_wireframe {
                    c.enabled = state.rapier_wireframe;
                }
            }
        }

        app.add_plugins(RapierDebugRenderPlugin {
            enabled: false,
            ..default()
        })
        .init_resource::<DebugState>()
        .init_resource::<DebugStats>()
        .add_systems(Startup, (seed_wireframe_from_config, debug_overlay_spawn))
        .add_systems(
            Update,
            (
                debug_key_input_system,
                debug_stats_collect_system,
                toggle_rapier_debug,
                debug_logging_system,
                debug_overlay_update,
            )
                .chain()
                .in_set(PresentationSet),
        );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}

#[cfg(all(test, feature = "debug"))]
mod tests {
    use super::overlay::overlay_text;
    use super::*;

    #[test]
    fn overlay_mentions_score_and_keys() {
        let stats = DebugStats {
            score: 3,
            armed_balls: 1,
            ..Default::default()
        };
        let s = overlay_text(&stats, &GameConfig::default());
        assert!(s.contains("score 3 armed 1"));
        assert!(s.contains("F2 colliders"));
    }
}
