// This file is part of Contact Score.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::{collections::HashMap, path::PathBuf, time::SystemTime};

use crate::core::config::{GameConfig, DEFAULT_CONFIG_PATHS};

/// Files watched for changes, in layer order.
#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    pub interval_secs: f32,
}
impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: DEFAULT_CONFIG_PATHS.iter().map(PathBuf::from).collect(),
            interval_secs: 0.5,
        }
    }
}

impl ConfigReloadSettings {
    fn poll_interval(&self) -> f32 {
        if self.interval_secs.is_finite() {
            self.interval_secs.max(0.05)
        } else {
            0.5
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}
impl ConfigReloadState {
    /// Seeded with the current mtimes so only edits after startup trigger a reload.
    fn seeded(settings: &ConfigReloadSettings) -> Self {
        let mut state = Self {
            last_mod: HashMap::new(),
            timer: Timer::from_seconds(settings.poll_interval(), TimerMode::Repeating),
        };
        scan_modified(&mut state, &settings.paths);
        state
    }
}

pub struct ConfigHotReloadPlugin;
impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let settings = app
                .world()
                .get_resource::<ConfigReloadSettings>()
                .cloned()
                .unwrap_or_default();
            let state = ConfigReloadState::seeded(&settings);
            app.insert_resource(settings)
                .insert_resource(state)
                .add_systems(Update, poll_and_reload_config);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = app;
    }
}

/// Record the newest mtime per path; true when any file is newer than last seen.
fn scan_modified(state: &mut ConfigReloadState, paths: &[PathBuf]) -> bool {
    let mut dirty = false;
    for path in paths {
        let Ok(modified) = std::fs::metadata(path).and_then(|m| m.modified()) else {
            continue;
        };
        let seen = state
            .last_mod
            .entry(path.clone())
            .or_insert(SystemTime::UNIX_EPOCH);
        if modified > *seen {
            *seen = modified;
            dirty = true;
        }
    }
    dirty
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<GameConfig>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let interval = settings.poll_interval();
    if (state.timer.duration().as_secs_f32() - interval).abs() > f32::EPSILON {
        state
            .timer
            .set_duration(std::time::Duration::from_secs_f32(interval));
    }
    if !state.timer.tick(time.delta()).finished() {
        return;
    }
    if !scan_modified(&mut state, &settings.paths) {
        return;
    }
    let (new_cfg, _used, errors) = GameConfig::load_layered(settings.paths.iter());
    for e in errors {
        warn!(target: "config", "CONFIG HOT-RELOAD issue: {e}");
    }
    if *cfg_res == new_cfg {
        return;
    }
    for w in new_cfg.validate() {
        warn!(target: "config", "{w}");
    }
    info!(target: "config", "Config hot-reload applied");
    if let Ok(mut window) = windows.single_mut() {
        if window.width() != new_cfg.window.width || window.height() != new_cfg.window.height {
            window
                .resolution
                .set(new_cfg.window.width, new_cfg.window.height);
        }
        if window.title != new_cfg.window.title {
            window.title.clone_from(&new_cfg.window.title);
        }
    }
    *cfg_res = new_cfg;
}
