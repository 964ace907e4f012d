use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::RigidBody;
use contact_score::core::components::{Ball, ContactPlate, ContactRole};
use contact_score::core::config::GameConfig;
use contact_score::gameplay::ball_drop::{BallDrop, BallDropPlugin};
use contact_score::gameplay::plates::PlateVisibilityPlugin;
use contact_score::interaction::tap::SceneTapped;

const STEP: Duration = Duration::from_millis(250);

fn app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(STEP))
        .init_resource::<GameConfig>()
        .add_plugins((BallDropPlugin, PlateVisibilityPlugin));
    app
}

fn spawn_ball(app: &mut App, at: Vec3) -> Entity {
    app.world_mut()
        .spawn((
            Ball,
            ContactRole::Ball,
            RigidBody::Fixed,
            Transform::from_translation(at),
        ))
        .id()
}

fn tap(app: &mut App, entity: Entity) {
    app.world_mut().send_event(SceneTapped { entity });
}

#[test]
fn tapping_ball_drops_it_and_resets_after_delay() {
    let mut app = app();
    let start = app.world().resource::<GameConfig>().ball.start.to_vec3();
    let delay = app.world().resource::<GameConfig>().ball.reset_delay;
    let ball = spawn_ball(&mut app, start);

    tap(&mut app, ball);
    app.update();
    assert_eq!(app.world().get::<RigidBody>(ball), Some(&RigidBody::Dynamic));
    assert!(app.world().get::<BallDrop>(ball).is_some());

    // move it off the start so the reset is observable
    app.world_mut().get_mut::<Transform>(ball).unwrap().translation.y = -3.0;

    let steps = (delay / STEP.as_secs_f32()).ceil() as usize + 2;
    for _ in 0..steps {
        app.update();
    }
    assert_eq!(app.world().get::<RigidBody>(ball), Some(&RigidBody::Fixed));
    assert!(app.world().get::<BallDrop>(ball).is_none());
    assert_eq!(app.world().get::<Transform>(ball).unwrap().translation, start);
}

#[test]
fn tap_while_falling_does_not_restart_timer() {
    let mut app = app();
    let ball = spawn_ball(&mut app, Vec3::new(0.0, 2.0, 0.0));
    tap(&mut app, ball);
    app.update();
    app.update();
    let elapsed_before = app.world().get::<BallDrop>(ball).unwrap().elapsed();
    tap(&mut app, ball);
    app.update();
    let elapsed_after = app.world().get::<BallDrop>(ball).unwrap().elapsed();
    assert!(elapsed_after > elapsed_before);
}

#[test]
fn tapping_other_entities_does_not_drop() {
    let mut app = app();
    let ball = spawn_ball(&mut app, Vec3::ZERO);
    let wall = app.world_mut().spawn(Transform::default()).id();
    tap(&mut app, wall);
    app.update();
    assert_eq!(app.world().get::<RigidBody>(ball), Some(&RigidBody::Fixed));
}

#[test]
fn tapping_plate_toggles_visibility() {
    let mut app = app();
    let plate = app
        .world_mut()
        .spawn((ContactPlate, ContactRole::TopZone, Visibility::Visible))
        .id();
    tap(&mut app, plate);
    app.update();
    assert_eq!(app.world().get::<Visibility>(plate), Some(&Visibility::Hidden));
    tap(&mut app, plate);
    app.update();
    assert_eq!(app.world().get::<Visibility>(plate), Some(&Visibility::Visible));
}
