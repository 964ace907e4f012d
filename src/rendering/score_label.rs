// This file is part of Contact Score.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::PresentationSet;
use crate::gameplay::scoring::ScoreChanged;

/// UI text showing the session score.
#[derive(Component)]
pub struct ScoreLabel;

pub fn score_text(score: u64) -> String {
    format!("Score: {score}")
}

pub struct ScoreLabelPlugin;

impl Plugin for ScoreLabelPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ScoreChanged>()
            .add_systems(Startup, spawn_score_label)
            .add_systems(
                Update,
                (update_score_label, apply_label_style).in_set(PresentationSet),
            );
    }
}

pub fn spawn_score_label(mut commands: Commands, cfg: Res<GameConfig>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                top: Val::Percent(12.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Name::new("ScoreLabelRoot"),
        ))
        .with_children(|p| {
            p.spawn((
                ScoreLabel,
                Text::new(score_text(0)),
                TextFont {
                    font_size: cfg.label.font_size,
                    ..default()
                },
                TextColor(cfg.label.color.to_color()),
                Name::new("Label"),
            ));
        });
}

/// Re-render only from the latest change; identical values are skipped.
pub fn update_score_label(
    mut changes: EventReader<ScoreChanged>,
    mut q_text: Query<&mut Text, With<ScoreLabel>>,
) {
    let Some(last) = changes.read().last() else { return };
    if last.old == last.new {
        return;
    }
    let s = score_text(last.new);
    for mut text in &mut q_text {
        if text.0 != s {
            text.0.clone_from(&s);
        }
    }
}

/// Keep font size and colour in step with hot-reloaded config.
fn apply_label_style(
    cfg: Res<GameConfig>,
    mut q: Query<(&mut TextFont, &mut TextColor), With<ScoreLabel>>,
) {
    if !cfg.is_changed() {
        return;
    }
    let color = cfg.label.color.to_color();
    for (mut font, mut text_color) in &mut q {
        if font.font_size != cfg.label.font_size {
            font.font_size = cfg.label.font_size;
        }
        if text_color.0 != color {
            text_color.0 = color;
        }
    }
}
