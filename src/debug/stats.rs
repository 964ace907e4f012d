use super::modes::{DebugState, DebugStats};
use crate::core::components::Ball;
use crate::gameplay::ball_drop::BallDrop;
use crate::gameplay::scoring::Scoreboard;
use bevy::prelude::*;

/// Exponential moving average; the first sample seeds the value.
fn smooth(prev: f32, sample: f32) -> f32 {
    if prev == 0.0 {
        sample
    } else {
        prev * 0.9 + sample * 0.1
    }
}

pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    board: Res<Scoreboard>,
    q_falling: Query<(), (With<Ball>, With<BallDrop>)>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    stats.fps = smooth(stats.fps, 1.0 / dt);
    stats.frame_time_ms = smooth(stats.frame_time_ms, dt * 1000.0);
    stats.score = board.current_score();
    stats.armed_balls = board.armed_count();
    stats.falling_balls = q_falling.iter().count();
}
