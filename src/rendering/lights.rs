// This file is part of Contact Score.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::config::GameConfig;

pub struct LightsPlugin;

impl Plugin for LightsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_lights);
    }
}

/// One omni point light plus a dim ambient fill.
fn setup_lights(mut commands: Commands, cfg: Res<GameConfig>) {
    let l = &cfg.lights;
    commands.spawn((
        PointLight {
            intensity: l.point_intensity,
            range: 50.0,
            ..default()
        },
        Transform::from_translation(l.point_position.to_vec3()),
        Name::new("OmniLight"),
    ));
    commands.insert_resource(AmbientLight {
        color: l.ambient_color.to_color(),
        brightness: l.ambient_brightness,
        ..default()
    });
}
