use bevy::prelude::*;

use super::modes::{DebugState, DebugStats};
use crate::core::config::GameConfig;

#[derive(Component)]
pub(crate) struct DebugOverlayText;

pub fn debug_overlay_spawn(mut commands: Commands) {
    commands.spawn((
        Text::new(String::new()),
        TextFont {
            font_size: 14.0,
            ..Default::default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(4.0),
            left: Val::Px(6.0),
            ..Default::default()
        },
        DebugOverlayText,
        Name::new("DebugOverlay"),
    ));
}

pub(crate) fn overlay_text(stats: &DebugStats, cfg: &GameConfig) -> String {
    format!(
        "FPS {:.1} ft {:.1}ms score {} armed {} falling {}\n\
gravY {} reset {:.1}s plates y[{}, {}]  F1 overlay  F2 colliders",
        stats.fps,
        stats.frame_time_ms,
        stats.score,
        stats.armed_balls,
        stats.falling_balls,
        cfg.gravity.y,
        cfg.ball.reset_delay,
        cfg.plates.bottom_y,
        cfg.plates.top_y,
    )
}

pub(crate) fn debug_overlay_update(
    state: Res<DebugState>,
    stats: Res<DebugStats>,
    cfg: Res<GameConfig>,
    mut q_text: Query<&mut Text, With<DebugOverlayText>>,
) {
    let Ok(mut text) = q_text.single_mut() else { return };
    if !state.overlay_visible {
        if !text.0.is_empty() {
            text.0.clear();
        }
        return;
    }
    if state.is_changed() || stats.is_changed() || cfg.is_changed() {
        text.0 = overlay_text(&stats, &cfg);
    }
}
