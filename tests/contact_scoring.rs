use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;
use bevy_rapier3d::rapier::geometry::CollisionEventFlags;
use contact_score::core::components::{Ball, ContactRole};
use contact_score::gameplay::scoring::{ScoreChanged, Scoreboard, ScoringPlugin};

struct Scene {
    app: App,
    top: Entity,
    bottom: Entity,
    wall: Entity,
}

fn scene() -> Scene {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_event::<CollisionEvent>()
        .add_plugins(ScoringPlugin);
    let top = app.world_mut().spawn(ContactRole::TopZone).id();
    let bottom = app.world_mut().spawn(ContactRole::BottomZone).id();
    // unrelated geometry: no role
    let wall = app.world_mut().spawn(Name::new("Wall")).id();
    Scene { app, top, bottom, wall }
}

impl Scene {
    fn ball(&mut self) -> Entity {
        self.app.world_mut().spawn((Ball, ContactRole::Ball)).id()
    }

    fn end(&mut self, a: Entity, b: Entity) {
        self.app
            .world_mut()
            .send_event(CollisionEvent::Stopped(a, b, CollisionEventFlags::SENSOR));
    }

    /// Run one frame and return only the score changes written during it.
    fn step(&mut self) -> Vec<ScoreChanged> {
        let mut cursor = self
            .app
            .world()
            .resource::<Events<ScoreChanged>>()
            .get_cursor_current();
        self.app.update();
        let events = self.app.world().resource::<Events<ScoreChanged>>();
        cursor.read(events).copied().collect()
    }

    fn score(&self) -> u64 {
        self.app.world().resource::<Scoreboard>().current_score()
    }
}

#[test]
fn top_then_bottom_scores_one() {
    let mut s = scene();
    let ball = s.ball();
    s.end(ball, s.top);
    assert!(s.step().is_empty());
    s.end(s.bottom, ball);
    assert_eq!(s.step(), vec![ScoreChanged { old: 0, new: 1 }]);
    assert_eq!(s.score(), 1);
}

#[test]
fn bottom_alone_does_not_score() {
    let mut s = scene();
    let ball = s.ball();
    s.end(ball, s.bottom);
    assert!(s.step().is_empty());
    assert_eq!(s.score(), 0);
}

#[test]
fn double_top_counts_once() {
    let mut s = scene();
    let ball = s.ball();
    s.end(ball, s.top);
    s.end(ball, s.top);
    s.end(ball, s.bottom);
    assert_eq!(s.step(), vec![ScoreChanged { old: 0, new: 1 }]);
    s.end(ball, s.bottom);
    assert!(s.step().is_empty());
    assert_eq!(s.score(), 1);
}

#[test]
fn two_balls_interleaved_within_one_step() {
    let mut s = scene();
    let b1 = s.ball();
    let b2 = s.ball();
    s.end(b1, s.top);
    s.end(b2, s.top);
    s.end(b1, s.bottom);
    s.end(b2, s.bottom);
    assert_eq!(
        s.step(),
        vec![
            ScoreChanged { old: 0, new: 1 },
            ScoreChanged { old: 1, new: 2 }
        ]
    );
}

#[test]
fn unrelated_pairs_are_ignored() {
    let mut s = scene();
    let ball = s.ball();
    let other_ball = s.ball();
    s.end(ball, s.top);
    s.end(ball, s.wall);
    s.end(s.wall, s.bottom);
    s.end(s.top, s.bottom);
    s.end(ball, other_ball);
    s.step();
    let board = s.app.world().resource::<Scoreboard>();
    assert_eq!(board.current_score(), 0);
    assert!(board.is_armed(ball));
    assert_eq!(board.armed_count(), 1);
}

#[test]
fn many_cycles_across_frames() {
    let mut s = scene();
    let ball = s.ball();
    for i in 1..=5u64 {
        s.end(ball, s.top);
        s.step();
        s.end(ball, s.bottom);
        assert_eq!(s.step(), vec![ScoreChanged { old: i - 1, new: i }]);
    }
    assert_eq!(s.score(), 5);
}
