// This file is part of Contact Score.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::gameplay::scoring::tracker::ContactKind;

/// Marker component identifying the ball entity (collider, later a rigid body).
#[derive(Component)]
pub struct Ball;

/// Logical radius used both for the collider and the sphere mesh.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BallRadius(pub f32);

/// Marker for the two contact plates.
#[derive(Component)]
pub struct ContactPlate;

/// Scoring role resolved once at scene construction.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactRole {
    Ball,
    TopZone,
    BottomZone,
}

impl ContactRole {
    pub fn kind(self, entity: Entity) -> ContactKind<Entity> {
        match self {
            ContactRole::Ball => ContactKind::Ball(entity),
            ContactRole::TopZone => ContactKind::TopZone,
            ContactRole::BottomZone => ContactKind::BottomZone,
        }
    }
}

/// Resolve an entity's scoring role; entities without a role are `Other`.
pub fn resolve_contact(entity: Entity, role: Option<&ContactRole>) -> ContactKind<Entity> {
    role.map_or(ContactKind::Other, |r| r.kind(entity))
}
