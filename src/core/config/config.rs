// This file is part of Contact Score.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use ron::value::Value;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 1280.0,
            title: "Collision Test".into(),
            auto_close: 0.0,
        }
    }
}

/// Plain xyz triple so RON files stay independent of the math crate's serde support.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}
impl Default for Rgb {
    fn default() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0 }
    }
}
impl Rgb {
    pub fn to_color(self) -> Color {
        Color::srgb(self.r, self.g, self.b)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -9.81 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub start: Point3,
    pub color: Rgb,
    /// Seconds between a drop and the ball returning to `start`.
    pub reset_delay: f32,
    pub restitution: f32,
}
impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 0.25,
            start: Point3::new(0.0, 2.0, 0.0),
            color: Rgb { r: 1.0, g: 0.5, b: 0.0 },
            reset_delay: 2.0,
            restitution: 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlateConfig {
    pub width: f32,
    pub thickness: f32,
    pub depth: f32,
    pub top_y: f32,
    pub bottom_y: f32,
    pub visible: bool,
    pub color: Rgb,
}
impl Default for PlateConfig {
    fn default() -> Self {
        Self {
            width: 1.0,
            thickness: 0.1,
            depth: 1.0,
            top_y: 1.0,
            bottom_y: -1.0,
            visible: true,
            color: Rgb { r: 0.8, g: 0.8, b: 0.8 },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub distance: f32,
    pub orbit_enabled: bool,
    /// Radians per pixel of drag.
    pub orbit_sensitivity: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 5.0,
            orbit_enabled: true,
            orbit_sensitivity: 0.005,
            zoom_speed: 0.5,
            min_distance: 2.0,
            max_distance: 20.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LightConfig {
    pub point_position: Point3,
    pub point_intensity: f32,
    pub ambient_color: Rgb,
    pub ambient_brightness: f32,
}
impl Default for LightConfig {
    fn default() -> Self {
        Self {
            point_position: Point3::new(0.0, 10.0, 10.0),
            point_intensity: 2_000_000.0,
            ambient_color: Rgb { r: 0.33, g: 0.33, b: 0.33 },
            ambient_brightness: 300.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LabelConfig {
    pub font_size: f32,
    pub color: Rgb,
}
impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_size: 42.0,
            color: Rgb::default(),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub ball: BallConfig,
    pub plates: PlateConfig,
    pub camera: CameraConfig,
    pub lights: LightConfig,
    pub label: LabelConfig,
    /// Log every contact-end pair at debug level (target `contacts`).
    pub log_contacts: bool,
    pub rapier_debug: bool,
}

/// Deep-merge RON maps; anything else in `overlay` replaces `base`.
fn merge_value(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Map(base_map), Value::Map(overlay_map)) => {
            for (key, value) in overlay_map {
                let existing = base_map
                    .iter_mut()
                    .find(|(k, _)| **k == key)
                    .map(|(_, v)| v);
                if let Some(existing) = existing {
                    merge_value(existing, value);
                } else {
                    base_map.insert(key, value);
                }
            }
        }
        (b, o) => *b = o,
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Merge every readable file in order (later files win) and deserialize the result.
    /// Returns the config, the paths actually used and any per-file errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        for p in paths {
            let path = p.as_ref();
            let txt = match fs::read_to_string(path) {
                Ok(txt) => txt,
                Err(e) => {
                    errors.push(format!("{}: read error: {e}", path.display()));
                    continue;
                }
            };
            match ron::from_str::<Value>(&txt) {
                Ok(val) => {
                    match merged.as_mut() {
                        Some(cur) => merge_value(cur, val),
                        None => merged = Some(val),
                    }
                    used.push(path.display().to_string());
                }
                Err(e) => errors.push(format!("{}: parse error: {e}", path.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    /// Like `load_layered`, but every layer must read, parse and merge cleanly.
    pub fn load_layered_strict<P, I>(paths: I) -> Result<Self, Vec<String>>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        let (cfg, _used, errors) = Self::load_layered(paths);
        if errors.is_empty() {
            Ok(cfg)
        } else {
            Err(errors)
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if !self.window.auto_close.is_finite() {
            w.push(format!(
                "window.autoClose {} is not finite -> treated as disabled",
                self.window.auto_close
            ));
        } else if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.gravity.y.abs() < 1e-4 {
            w.push("gravity.y magnitude near zero; the ball will float".into());
        } else if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); the ball will rise instead of falling",
                self.gravity.y
            ));
        }
        if self.ball.radius <= 0.0 {
            w.push("ball.radius must be > 0".into());
        }
        if !self.ball.reset_delay.is_finite() {
            w.push(format!(
                "ball.reset_delay {} is not finite -> default delay used",
                self.ball.reset_delay
            ));
        } else if self.ball.reset_delay <= 0.0 {
            w.push(format!(
                "ball.reset_delay {} must be > 0; the ball would reset before moving",
                self.ball.reset_delay
            ));
        }
        if !(0.0..=1.5).contains(&self.ball.restitution) {
            w.push(format!(
                "ball.restitution {} outside recommended 0..1.5",
                self.ball.restitution
            ));
        }
        let p = &self.plates;
        if p.width <= 0.0 || p.thickness <= 0.0 || p.depth <= 0.0 {
            w.push("plate dimensions must be > 0".into());
        }
        if p.top_y <= p.bottom_y {
            w.push(format!(
                "plates.top_y ({}) must be above plates.bottom_y ({}); no top-then-bottom pass is possible",
                p.top_y, p.bottom_y
            ));
        }
        if self.ball.start.y - self.ball.radius <= p.top_y + p.thickness * 0.5 {
            w.push(format!(
                "ball.start.y ({}) does not clear the top plate; the first drop may not arm",
                self.ball.start.y
            ));
        }
        let c = &self.camera;
        if c.min_distance <= 0.0 || c.min_distance > c.max_distance {
            w.push(format!(
                "camera distance limits invalid (min {}, max {})",
                c.min_distance, c.max_distance
            ));
        } else if !(c.min_distance..=c.max_distance).contains(&c.distance) {
            w.push(format!(
                "camera.distance {} outside [{}, {}]; it will be clamped",
                c.distance, c.min_distance, c.max_distance
            ));
        }
        if self.label.font_size <= 0.0 {
            w.push("label.font_size must be > 0".into());
        }
        w
    }
}
