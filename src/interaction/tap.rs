// This file is part of Contact Score.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_rapier3d::prelude::*;

use crate::core::system::system_order::InputSet;

/// Farthest hit considered by a tap ray (world units).
const TAP_RAY_LENGTH: f32 = 100.0;

/// A pointer tap that hit a collider in the scene.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneTapped {
    pub entity: Entity,
}

pub struct TapPlugin;

impl Plugin for TapPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SceneTapped>()
            .add_systems(Update, detect_scene_taps.in_set(InputSet));
    }
}

/// Screen positions that started a tap this frame (left click or touch start).
fn tap_positions(
    buttons: &ButtonInput<MouseButton>,
    touches: &Touches,
    window: &Window,
) -> Vec<Vec2> {
    let mut out: Vec<Vec2> = touches.iter_just_pressed().map(|t| t.position()).collect();
    if buttons.just_pressed(MouseButton::Left) {
        if let Some(cursor) = window.cursor_position() {
            out.push(cursor);
        }
    }
    out
}

fn detect_scene_taps(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    rapier_context: ReadRapierContext,
    mut tapped: EventWriter<SceneTapped>,
) {
    let Ok(window) = windows.single() else { return };
    let positions = tap_positions(&buttons, &touches, window);
    if positions.is_empty() {
        return;
    }
    let Ok((camera, cam_transform)) = cameras.single() else { return };
    let Ok(context) = rapier_context.single() else { return };
    for screen_pos in positions {
        let Ok(ray) = camera.viewport_to_world(cam_transform, screen_pos) else {
            continue;
        };
        if let Some((entity, toi)) = context.cast_ray(
            ray.origin,
            *ray.direction,
            TAP_RAY_LENGTH,
            true,
            QueryFilter::default(),
        ) {
            debug!(target: "input", "tap at {:?} hit {:?} (toi {:.2})", screen_pos, entity, toi);
            tapped.write(SceneTapped { entity });
        }
    }
}
