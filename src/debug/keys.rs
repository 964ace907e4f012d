use super::modes::DebugState;
use bevy::prelude::*;

/// F1 toggles the stats overlay, F2 the rapier collider wireframe.
pub fn debug_key_input_system(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    if keys.just_pressed(KeyCode::F1) {
        state.overlay_visible = !state.overlay_visible;
    }
    if keys.just_pressed(KeyCode::F2) {
        state.rapier_wireframe = !state.rapier_wireframe;
        info!(
            "RAPIER_WIREFRAME {} frame={}",
            if state.rapier_wireframe { "on" } else { "off" },
            state.frame_counter
        );
    }
}
