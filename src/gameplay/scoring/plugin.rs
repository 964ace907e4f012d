// This file is part of Contact Score.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;

use super::tracker::ScoreTracker;
use crate::core::components::{resolve_contact, Ball, ContactRole};
use crate::core::config::GameConfig;
use crate::core::system::system_order::ScoringSet;

/// Session score state, keyed by ball entity.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct Scoreboard(pub ScoreTracker<Entity>);

/// Written whenever the score moves; consumers re-render from `new`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreChanged {
    pub old: u64,
    pub new: u64,
}

pub struct ScoringPlugin;

impl Plugin for ScoringPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Scoreboard>()
            .add_event::<ScoreChanged>()
            .add_systems(
                Update,
                (score_contact_ends, forget_removed_balls).in_set(ScoringSet),
            );
    }
}

/// Feed rapier contact-end events into the tracker. `Started` events carry no
/// scoring meaning: a ball can stay inside a zone across several steps.
pub fn score_contact_ends(
    mut collisions: EventReader<CollisionEvent>,
    roles: Query<&ContactRole>,
    cfg: Option<Res<GameConfig>>,
    mut board: ResMut<Scoreboard>,
    mut changed: EventWriter<ScoreChanged>,
) {
    let log_contacts = cfg.is_some_and(|c| c.log_contacts);
    for ev in collisions.read() {
        let CollisionEvent::Stopped(e1, e2, _flags) = ev else {
            continue;
        };
        let a = resolve_contact(*e1, roles.get(*e1).ok());
        let b = resolve_contact(*e2, roles.get(*e2).ok());
        if log_contacts {
            debug!(target: "contacts", "contact ended: {:?} <-> {:?}", a, b);
        }
        if let Some(change) = board.on_contact_ended(a, b) {
            info!(target: "score", old = change.old, new = change.new, "Score: {}", change.new);
            changed.write(ScoreChanged {
                old: change.old,
                new: change.new,
            });
        }
    }
}

fn forget_removed_balls(mut removed: RemovedComponents<Ball>, mut board: ResMut<Scoreboard>) {
    for e in removed.read() {
        if board.forget(e) {
            debug!(target: "score", "disarmed despawned ball {:?}", e);
        }
    }
}
