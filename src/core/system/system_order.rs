//! Central system ordering labels to make the update sequence explicit.
//! Stages (high-level):
//! 1. Input (pointer taps resolved into scene hits)
//! 2. Gameplay (ball drops/resets, plate toggles)
//! 3. Scoring (contact-end events from the previous physics step)
//! 4. Presentation (label / overlay text)
//! Rapier itself runs in `PostUpdate` via its plugin.
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct GameplaySet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ScoringSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PresentationSet;

/// Chain the sets in `Update`. Safe to call from several plugins.
pub fn configure_update_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (InputSet, GameplaySet, ScoringSet, PresentationSet).chain(),
    );
}
