//! Per-tick motion for the player and paradoxes
//!
//! Both steppers are pure: they take the current entity and return the next
//! one, leaving the caller to decide when to commit it.

use super::state::{Paradox, Player};
use crate::settings::SimConfig;
use crate::{Point, clamp_to_playfield, distance};

/// Advance the player one tick along `path`
///
/// A waypoint closer than the arrival radius is consumed without moving;
/// only one waypoint is consumed per tick. The last waypoint stops the
/// player where it stands.
pub fn step_player(player: &Player, path: &[Point], config: &SimConfig) -> Player {
    let mut next = *player;
    if !player.moving || path.is_empty() {
        return next;
    }
    let Some(&target) = path.get(player.path_index) else {
        return next;
    };

    let d = distance(player.pos, target);
    if d < config.arrival_radius {
        if player.path_index + 1 < path.len() {
            next.path_index += 1;
        } else {
            next.moving = false;
        }
    } else {
        let dir = (target - player.pos) / d;
        next.pos += dir * config.player_speed;
    }
    next
}

/// Advance one paradox, bouncing off the playfield edges
pub fn step_paradox(paradox: &Paradox, width: f32, height: f32) -> Paradox {
    let mut next = paradox.clone();
    if !paradox.active {
        return next;
    }

    let tentative = paradox.pos + paradox.vel;
    if tentative.x <= 0.0 || tentative.x >= width {
        next.vel.x = -next.vel.x;
    }
    if tentative.y <= 0.0 || tentative.y >= height {
        next.vel.y = -next.vel.y;
    }
    next.pos = clamp_to_playfield(tentative, width, height);
    next
}

/// Advance every paradox one tick
pub fn step_paradoxes(paradoxes: &[Paradox], config: &SimConfig) -> Vec<Paradox> {
    paradoxes
        .iter()
        .map(|p| step_paradox(p, config.width, config.height))
        .collect()
}
