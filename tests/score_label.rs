use bevy::prelude::*;
use contact_score::core::config::GameConfig;
use contact_score::gameplay::scoring::ScoreChanged;
use contact_score::rendering::score_label::{ScoreLabel, ScoreLabelPlugin};

fn app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<GameConfig>()
        .add_plugins(ScoreLabelPlugin);
    app.update();
    app
}

fn label(app: &mut App) -> String {
    let mut q = app.world_mut().query_filtered::<&Text, With<ScoreLabel>>();
    q.single(app.world()).expect("one score label").0.clone()
}

#[test]
fn starts_at_zero() {
    let mut app = app();
    assert_eq!(label(&mut app), "Score: 0");
}

#[test]
fn follows_latest_change() {
    let mut app = app();
    app.world_mut().send_event(ScoreChanged { old: 0, new: 1 });
    app.world_mut().send_event(ScoreChanged { old: 1, new: 2 });
    app.update();
    assert_eq!(label(&mut app), "Score: 2");
}

#[test]
fn font_size_tracks_config() {
    let mut app = app();
    app.world_mut().resource_mut::<GameConfig>().label.font_size = 20.0;
    app.update();
    let mut q = app
        .world_mut()
        .query_filtered::<&TextFont, With<ScoreLabel>>();
    let font = q.single(app.world()).unwrap();
    assert_eq!(font.font_size, 20.0);
}
