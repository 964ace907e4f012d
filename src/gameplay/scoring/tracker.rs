// This file is part of Contact Score.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Engine-independent scoring state machine.
//!
//! A ball becomes *armed* when a contact with the top zone ends and scores a
//! point when a later contact with the bottom zone ends. Each ball is tracked
//! independently; anything that is not a ball/zone pair is ignored.

use std::collections::HashSet;
use std::hash::Hash;

/// One of the two sensor volumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorZone {
    Top,
    Bottom,
}

/// Resolved role of one side of a contact pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind<B> {
    Ball(B),
    TopZone,
    BottomZone,
    /// Scene geometry with no scoring meaning.
    Other,
}

impl<B> ContactKind<B> {
    fn zone(&self) -> Option<SensorZone> {
        match self {
            ContactKind::TopZone => Some(SensorZone::Top),
            ContactKind::BottomZone => Some(SensorZone::Bottom),
            _ => None,
        }
    }
}

/// Score transition reported by [`ScoreTracker::on_contact_ended`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreChange {
    pub old: u64,
    pub new: u64,
}

#[derive(Debug, Clone)]
pub struct ScoreTracker<B> {
    armed: HashSet<B>,
    score: u64,
}

impl<B: Eq + Hash> Default for ScoreTracker<B> {
    fn default() -> Self {
        Self {
            armed: HashSet::new(),
            score: 0,
        }
    }
}

impl<B: Copy + Eq + Hash> ScoreTracker<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one contact-end notification. Argument order does not matter.
    /// Returns `Some` only when the score moved.
    pub fn on_contact_ended(&mut self, a: ContactKind<B>, b: ContactKind<B>) -> Option<ScoreChange> {
        let (ball, zone) = match (a, b) {
            (ContactKind::Ball(ball), other) | (other, ContactKind::Ball(ball)) => {
                (ball, other.zone()?)
            }
            _ => return None,
        };

        match zone {
            SensorZone::Top => {
                self.armed.insert(ball);
                None
            }
            SensorZone::Bottom => {
                if !self.armed.remove(&ball) {
                    return None;
                }
                let old = self.score;
                self.score += 1;
                Some(ScoreChange { old, new: self.score })
            }
        }
    }

    pub fn current_score(&self) -> u64 {
        self.score
    }

    pub fn is_armed(&self, ball: B) -> bool {
        self.armed.contains(&ball)
    }

    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }

    /// Drop a ball that left the session without awarding anything.
    pub fn forget(&mut self, ball: B) -> bool {
        self.armed.remove(&ball)
    }
}

#[cfg(test)]
mod tests {
    use super::ContactKind::{Ball, BottomZone, Other, TopZone};
    use super::*;

    #[test]
    fn top_then_bottom_scores_once() {
        let mut t = ScoreTracker::new();
        assert_eq!(t.on_contact_ended(Ball(1), TopZone), None);
        assert!(t.is_armed(1));
        assert_eq!(
            t.on_contact_ended(Ball(1), BottomZone),
            Some(ScoreChange { old: 0, new: 1 })
        );
        assert_eq!(t.current_score(), 1);
        assert!(!t.is_armed(1));
    }

    #[test]
    fn bottom_without_top_is_ignored() {
        let mut t = ScoreTracker::new();
        assert_eq!(t.on_contact_ended(Ball(1), BottomZone), None);
        assert_eq!(t.current_score(), 0);
        assert_eq!(t.armed_count(), 0);
    }

    #[test]
    fn repeated_top_contacts_arm_once() {
        let mut t = ScoreTracker::new();
        t.on_contact_ended(Ball(1), TopZone);
        t.on_contact_ended(TopZone, Ball(1));
        assert_eq!(t.armed_count(), 1);
        assert_eq!(t.current_score(), 0);
        t.on_contact_ended(Ball(1), BottomZone);
        // second bottom pass is a no-op: the ball is no longer armed
        assert_eq!(t.on_contact_ended(Ball(1), BottomZone), None);
        assert_eq!(t.current_score(), 1);
    }

    #[test]
    fn interleaved_balls_score_independently() {
        let mut t = ScoreTracker::new();
        t.on_contact_ended(Ball(1), TopZone);
        t.on_contact_ended(Ball(2), TopZone);
        assert_eq!(
            t.on_contact_ended(Ball(1), BottomZone),
            Some(ScoreChange { old: 0, new: 1 })
        );
        assert!(t.is_armed(2));
        assert_eq!(
            t.on_contact_ended(BottomZone, Ball(2)),
            Some(ScoreChange { old: 1, new: 2 })
        );
    }

    #[test]
    fn pairs_without_exactly_one_ball_and_one_zone_are_ignored() {
        let mut t = ScoreTracker::new();
        t.on_contact_ended(Ball(7), TopZone);
        let pairs = [
            (Ball(7), Ball(8)),
            (TopZone, BottomZone),
            (BottomZone, BottomZone),
            (Other, Other),
            (Ball(7), Other),
            (Other, BottomZone),
        ];
        for (a, b) in pairs {
            assert_eq!(t.on_contact_ended(a, b), None, "{a:?} / {b:?}");
        }
        assert_eq!(t.current_score(), 0);
        assert!(t.is_armed(7));
        assert_eq!(t.armed_count(), 1);
    }

    #[test]
    fn forget_disarms_without_scoring() {
        let mut t = ScoreTracker::new();
        t.on_contact_ended(Ball(3), TopZone);
        assert!(t.forget(3));
        assert!(!t.forget(3));
        assert_eq!(t.on_contact_ended(Ball(3), BottomZone), None);
        assert_eq!(t.current_score(), 0);
    }

    /// Score always matches a naive per-ball flag model over a long mixed stream.
    #[test]
    fn matches_flag_model_on_mixed_stream() {
        let mut t = ScoreTracker::new();
        let mut flags = [false; 4];
        let mut expected = 0u64;
        let mut seed: u32 = 0x1234_5678;
        for _ in 0..2_000 {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let ball = (seed >> 8) as usize % 4;
            let other = match (seed >> 16) % 3 {
                0 => TopZone,
                1 => BottomZone,
                _ => Other,
            };
            match other {
                TopZone => flags[ball] = true,
                BottomZone if flags[ball] => {
                    flags[ball] = false;
                    expected += 1;
                }
                _ => {}
            }
            let before = t.current_score();
            let change = if seed & 1 == 0 {
                t.on_contact_ended(Ball(ball), other)
            } else {
                t.on_contact_ended(other, Ball(ball))
            };
            assert!(t.current_score() >= before);
            if let Some(c) = change {
                assert_eq!(c.new, c.old + 1);
            }
            assert_eq!(t.current_score(), expected);
            assert_eq!(t.is_armed(ball), flags[ball]);
        }
    }
}
