//! Player movement and the per-direction boundary policy tables.
//!
//! Every move shifts the player by `MOVE_STEP` along one axis and then consults a
//! single rule for that direction: if the rule's trigger matches the new coordinate,
//! the coordinate is replaced by `reset_to`.

use crate::config::{MOVE_STEP, PLAYER_MAX_X, PLAYER_MAX_Y, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::types::{Direction, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Legacy arcade rules. Up and down wrap only on an exact hit of the edge,
    /// left pins to 10, right snaps back to 10 at the midpoint. A player can step off
    /// the play-field with this table (see tests).
    Classic,
    /// Every direction wraps to the opposite end of the player's area.
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Equals(i32),
    AtLeast(i32),
    Below(i32),
    Above(i32),
}

impl Trigger {
    fn matches(self, value: i32) -> bool {
        match self {
            Trigger::Equals(edge) => value == edge,
            Trigger::AtLeast(edge) => value >= edge,
            Trigger::Below(edge) => value < edge,
            Trigger::Above(edge) => value > edge,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryRule {
    pub trigger: Trigger,
    pub reset_to: i32,
}

impl BoundaryPolicy {
    pub fn rule(self, direction: Direction) -> BoundaryRule {
        use Direction::*;
        let (trigger, reset_to) = match (self, direction) {
            (BoundaryPolicy::Classic, Up) => (Trigger::Equals(0), WINDOW_HEIGHT),
            (BoundaryPolicy::Classic, Down) => (Trigger::Equals(WINDOW_HEIGHT), 0),
            (BoundaryPolicy::Classic, Left) => (Trigger::Equals(0), MOVE_STEP),
            (BoundaryPolicy::Classic, Right) => (Trigger::AtLeast(WINDOW_WIDTH / 2), MOVE_STEP),
            (BoundaryPolicy::Wrap, Up) => (Trigger::Below(0), PLAYER_MAX_Y),
            (BoundaryPolicy::Wrap, Down) => (Trigger::Above(PLAYER_MAX_Y), 0),
            (BoundaryPolicy::Wrap, Left) => (Trigger::Below(0), PLAYER_MAX_X),
            (BoundaryPolicy::Wrap, Right) => (Trigger::Above(PLAYER_MAX_X), 0),
        };
        BoundaryRule { trigger, reset_to }
    }
}

/// Move the player one step in `direction` and apply the policy's boundary rule
pub fn step_player(player: &mut Rect, direction: Direction, policy: BoundaryPolicy) {
    let coord = match direction {
        Direction::Up => {
            player.y -= MOVE_STEP;
            &mut player.y
        }
        Direction::Down => {
            player.y += MOVE_STEP;
            &mut player.y
        }
        Direction::Left => {
            player.x -= MOVE_STEP;
            &mut player.x
        }
        Direction::Right => {
            player.x += MOVE_STEP;
            &mut player.x
        }
    };

    let rule = policy.rule(direction);
    if rule.trigger.matches(*coord) {
        *coord = rule.reset_to;
    }
}
