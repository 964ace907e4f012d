// This file is part of Contact Score.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::components::ContactPlate;
use crate::core::system::system_order::GameplaySet;
use crate::interaction::tap::SceneTapped;

pub struct PlateVisibilityPlugin;

impl Plugin for PlateVisibilityPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SceneTapped>()
            .add_systems(Update, toggle_tapped_plates.in_set(GameplaySet));
    }
}

/// Tapping a plate flips it between shown and hidden. The sensor stays active
/// either way, so a hidden plate can still be tapped back into view.
pub fn toggle_tapped_plates(
    mut taps: EventReader<SceneTapped>,
    mut plates: Query<(&mut Visibility, Option<&Name>), With<ContactPlate>>,
) {
    for tap in taps.read() {
        let Ok((mut visibility, name)) = plates.get_mut(tap.entity) else {
            continue;
        };
        let next = match *visibility {
            Visibility::Hidden => Visibility::Visible,
            _ => Visibility::Hidden,
        };
        *visibility = next;
        debug!(target: "session", "plate {:?} -> {:?}", name.map(Name::as_str), next);
    }
}
