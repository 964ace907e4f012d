// This file is part of Contact Score.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::configure_update_sets;
use crate::debug::DebugPlugin;
use crate::gameplay::ball_drop::BallDropPlugin;
use crate::gameplay::plates::PlateVisibilityPlugin;
use crate::gameplay::scene::ScenePlugin;
use crate::gameplay::scoring::ScoringPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::interaction::tap::TapPlugin;
use crate::physics::rapier_setup::PhysicsSetupPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::lights::LightsPlugin;
use crate::rendering::score_label::ScoreLabelPlugin;

/// Warnings gathered while loading config, before logging was available.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigWarnings(pub Vec<String>);

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        configure_update_sets(app);
        app.init_resource::<GameConfig>()
            .init_resource::<ConfigWarnings>()
            .add_systems(Startup, report_config_warnings)
            .add_plugins((
                PhysicsSetupPlugin,
                ScenePlugin,
                CameraPlugin,
                LightsPlugin,
                TapPlugin,
                BallDropPlugin,
                PlateVisibilityPlugin,
                ScoringPlugin,
                ScoreLabelPlugin,
                DebugPlugin,
                ConfigHotReloadPlugin,
                AutoClosePlugin,
            ));
    }
}

fn report_config_warnings(warnings: Res<ConfigWarnings>) {
    for w in &warnings.0 {
        warn!(target: "config", "{w}");
    }
}
