// This file is part of Contact Score.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::core::config::{CameraConfig, GameConfig};
use crate::core::system::system_order::InputSet;

/// Keeps pitch just short of the poles so `looking_at` stays well defined.
const MAX_PITCH: f32 = 1.5;
/// Pixel-unit wheel events are scaled down to roughly match line units.
const PIXELS_PER_LINE: f32 = 40.0;

/// Spherical camera rig orbiting the origin.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl OrbitCamera {
    pub fn transform(&self) -> Transform {
        let rot = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        let eye = rot * Vec3::new(0.0, 0.0, self.distance);
        Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Y)
    }

    /// Apply a drag (pixels) and a zoom amount (lines) within the configured limits.
    pub fn apply_input(&mut self, drag: Vec2, zoom: f32, cfg: &CameraConfig) {
        self.yaw -= drag.x * cfg.orbit_sensitivity;
        self.pitch = (self.pitch - drag.y * cfg.orbit_sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
        self.distance = clamp_distance(self.distance - zoom * cfg.zoom_speed, cfg);
    }
}

fn clamp_distance(d: f32, cfg: &CameraConfig) -> f32 {
    if cfg.min_distance > 0.0 && cfg.min_distance <= cfg.max_distance {
        d.clamp(cfg.min_distance, cfg.max_distance)
    } else {
        d.max(0.1)
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, orbit_camera_input.in_set(InputSet));
    }
}

fn setup_camera(mut commands: Commands, cfg: Res<GameConfig>) {
    let rig = OrbitCamera {
        yaw: 0.0,
        pitch: 0.0,
        distance: clamp_distance(cfg.camera.distance, &cfg.camera),
    };
    commands.spawn((Camera3d::default(), rig.transform(), rig, Name::new("Camera")));
}

fn orbit_camera_input(
    cfg: Res<GameConfig>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    mut q: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let drag: Vec2 = if buttons.pressed(MouseButton::Right) {
        motion.read().map(|m| m.delta).sum()
    } else {
        motion.clear();
        Vec2::ZERO
    };
    let zoom: f32 = wheel
        .read()
        .map(|w| match w.unit {
            MouseScrollUnit::Line => w.y,
            MouseScrollUnit::Pixel => w.y / PIXELS_PER_LINE,
        })
        .sum();
    if !cfg.camera.orbit_enabled || (drag == Vec2::ZERO && zoom == 0.0) {
        return;
    }
    for (mut rig, mut transform) in &mut q {
        rig.apply_input(drag, zoom, &cfg.camera);
        *transform = rig.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rig_sits_on_positive_z() {
        let rig = OrbitCamera { yaw: 0.0, pitch: 0.0, distance: 5.0 };
        let t = rig.transform();
        assert!((t.translation - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
        // looking down -Z towards the origin
        assert!((t.forward().as_vec3() - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn input_respects_limits() {
        let cfg = CameraConfig::default();
        let mut rig = OrbitCamera { yaw: 0.0, pitch: 0.0, distance: cfg.distance };
        rig.apply_input(Vec2::new(0.0, -1.0e6), 1.0e6, &cfg);
        assert!(rig.pitch <= MAX_PITCH);
        assert_eq!(rig.distance, cfg.min_distance);
        rig.apply_input(Vec2::ZERO, -1.0e6, &cfg);
        assert_eq!(rig.distance, cfg.max_distance);
        let t = rig.transform();
        assert!((t.translation.length() - cfg.max_distance).abs() < 1e-3);
    }
}
