// This file is part of Contact Score.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::core::config::GameConfig;
use crate::gameplay::scoring::Scoreboard;
use bevy::prelude::*;

#[derive(Resource, Deref, DerefMut)]
pub struct AutoCloseTimer(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Update, check_autoclose);
    }
}

fn setup_autoclose(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if !secs.is_finite() {
        warn!(target: "session", "AutoClose: {secs} is not a finite duration; disabled");
        return;
    }
    if secs > 0.0 {
        info!(target: "session", seconds = secs, "AutoClose: will exit after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_autoclose(
    time: Res<Time>,
    mut timer: Option<ResMut<AutoCloseTimer>>,
    board: Option<Res<Scoreboard>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(t) = timer.as_mut() else { return };
    if t.tick(time.delta()).just_finished() {
        let score = board.map_or(0, |b| b.current_score());
        info!(target: "session", "AutoClose: timer finished (final score {score}), requesting app exit");
        ev_exit.write(AppExit::Success);
    }
}
