// This file is part of Contact Score.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::config::GameConfig;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier for the drop scene

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_systems(Update, apply_configured_gravity);
    }
}

/// Rapier keeps its configuration on the context entity; mirror `gravity.y`
/// onto it whenever they differ (covers startup and config hot-reload).
pub fn apply_configured_gravity(
    cfg: Res<GameConfig>,
    mut rapier_cfgs: Query<&mut RapierConfiguration>,
) {
    let wanted = Vect::new(0.0, cfg.gravity.y, 0.0);
    for mut rapier_cfg in &mut rapier_cfgs {
        if rapier_cfg.gravity != wanted {
            info!(target: "config", "rapier gravity -> {:?}", wanted);
            rapier_cfg.gravity = wanted;
        }
    }
}
