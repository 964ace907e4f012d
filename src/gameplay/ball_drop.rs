// This file is part of Contact Score.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::Ball;
use crate::core::config::{BallConfig, GameConfig};
use crate::core::system::system_order::GameplaySet;
use crate::interaction::tap::SceneTapped;

/// Present while the ball is falling; removal marks it fixed at the start again.
#[derive(Component, Debug, Deref, DerefMut)]
pub struct BallDrop(pub Timer);

pub struct BallDropPlugin;

impl Plugin for BallDropPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SceneTapped>().add_systems(
            Update,
            (start_ball_drop, reset_dropped_balls)
                .chain()
                .in_set(GameplaySet),
        );
    }
}

/// Tapping a resting (fixed) ball switches it to dynamic. Taps while it falls are ignored.
pub fn start_ball_drop(
    mut commands: Commands,
    mut taps: EventReader<SceneTapped>,
    cfg: Res<GameConfig>,
    balls: Query<(), (With<Ball>, Without<BallDrop>)>,
) {
    for tap in taps.read() {
        if balls.get(tap.entity).is_err() {
            continue;
        }
        let delay = reset_delay_secs(&cfg.ball);
        info!(target: "session", "dropping ball {:?}; reset in {delay:.1}s", tap.entity);
        commands.entity(tap.entity).insert((
            RigidBody::Dynamic,
            Velocity::zero(),
            BallDrop(Timer::from_seconds(delay, TimerMode::Once)),
        ));
    }
}

/// Non-finite delays fall back to the default one.
fn reset_delay_secs(ball: &BallConfig) -> f32 {
    if ball.reset_delay.is_finite() {
        ball.reset_delay.max(0.0)
    } else {
        BallConfig::default().reset_delay
    }
}

/// Once the drop timer expires, fix the ball again and return it to its start.
pub fn reset_dropped_balls(
    mut commands: Commands,
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut q: Query<(Entity, &mut BallDrop, &mut Transform), With<Ball>>,
) {
    for (entity, mut fall, mut transform) in &mut q {
        if !fall.tick(time.delta()).finished() {
            continue;
        }
        commands
            .entity(entity)
            .insert((RigidBody::Fixed, Velocity::zero()))
            .remove::<BallDrop>();
        transform.translation = cfg.ball.start.to_vec3();
        transform.rotation = Quat::IDENTITY;
        debug!(target: "session", "ball {:?} reset to start", entity);
    }
}
