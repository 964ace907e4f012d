// This file is part of Contact Score.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;

use contact_score::app::game::ConfigWarnings;
use contact_score::core::config::DEFAULT_CONFIG_PATHS;
use contact_score::interaction::session::config_hot_reload::ConfigReloadSettings;
use contact_score::{GameConfig, GamePlugin};

/// Tap the ball to drop it through the two contact plates.
#[derive(Parser, Debug)]
#[command(name = "contact_score", version, about)]
struct Cli {
    /// RON config layer (repeatable, later layers win). Replaces the default
    /// `assets/config/game.ron` + `game.local.ron` pair.
    #[arg(long = "config", value_name = "PATH")]
    config: Vec<PathBuf>,
    /// Exit after this many seconds (overrides `window.autoClose`).
    #[arg(long, value_name = "SECS")]
    auto_close: Option<f32>,
}

/// Explicit layers must all load; the default pair tolerates a missing local override.
fn load_config(cli: &Cli) -> anyhow::Result<(GameConfig, Vec<PathBuf>, Vec<String>)> {
    if cli.config.is_empty() {
        let paths: Vec<PathBuf> = DEFAULT_CONFIG_PATHS.iter().map(PathBuf::from).collect();
        let (cfg, _used, errors) = GameConfig::load_layered(&paths);
        // the local override is optional
        let local = DEFAULT_CONFIG_PATHS[1];
        let notes = errors
            .into_iter()
            .filter(|e| !(e.starts_with(local) && e.contains("read error")))
            .collect();
        return Ok((cfg, paths, notes));
    }
    let cfg = GameConfig::load_layered_strict(&cli.config).map_err(|errors| {
        anyhow::anyhow!("loading config layers:\n  {}", errors.join("\n  "))
    })?;
    Ok((cfg, cli.config.clone(), Vec::new()))
}

fn main() -> anyhow::Result<()> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let cli = Cli::parse();
    let (mut cfg, paths, mut warnings) = load_config(&cli)?;
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }
    warnings.extend(cfg.validate());

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ConfigReloadSettings {
            paths,
            ..default()
        })
        .insert_resource(ConfigWarnings(warnings))
        .insert_resource(cfg)
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}
