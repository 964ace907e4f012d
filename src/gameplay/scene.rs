// This file is part of Contact Score.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::{Ball, BallRadius, ContactPlate, ContactRole};
use crate::core::config::GameConfig;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, (spawn_ball, spawn_contact_plates));
    }
}

/// Spawn the ball at rest as a fixed body. A tap switches the body to dynamic;
/// fixed against the fixed plates it produces no contact events.
pub fn spawn_ball(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ball = &cfg.ball;
    let radius = ball.radius.max(0.01);
    commands.spawn((
        Ball,
        BallRadius(radius),
        ContactRole::Ball,
        Mesh3d(meshes.add(Sphere::new(radius))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: ball.color.to_color(),
            ..default()
        })),
        Transform::from_translation(ball.start.to_vec3()),
        RigidBody::Fixed,
        Collider::ball(radius),
        Restitution::coefficient(ball.restitution),
        ActiveEvents::COLLISION_EVENTS,
        Name::new("Ball"),
    ));
    info!(target: "session", "ball ready at {:?} (tap it to drop)", ball.start.to_vec3());
}

pub fn spawn_contact_plates(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let p = &cfg.plates;
    let mesh = meshes.add(Cuboid::new(p.width, p.thickness, p.depth));
    let visibility = if p.visible {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    for (role, y, name) in [
        (ContactRole::BottomZone, p.bottom_y, "ContactBottom"),
        (ContactRole::TopZone, p.top_y, "ContactTop"),
    ] {
        commands.spawn((
            ContactPlate,
            role,
            Mesh3d(mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: p.color.to_color(),
                ..default()
            })),
            Transform::from_xyz(0.0, y, 0.0),
            visibility,
            Collider::cuboid(p.width * 0.5, p.thickness * 0.5, p.depth * 0.5),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
            Name::new(name),
        ));
    }
}
