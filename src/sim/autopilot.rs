//! Demo-mode path planner
//!
//! Plays the game without a human: draws a path that visits the remaining
//! items in greedy nearest-first order. Paradoxes are not avoided, so the
//! autopilot can lose.

use super::state::Session;
use crate::{Point, distance};

/// Plan a path from the player through every uncollected item
///
/// The first point is the player's own position, so a committed plan
/// always has more than one point when any item remains.
pub fn plan_route(session: &Session) -> Vec<Point> {
    let mut remaining: Vec<Point> = session
        .items
        .iter()
        .filter(|i| !i.collected)
        .map(|i| i.pos)
        .collect();

    let mut route = Vec::with_capacity(remaining.len() + 1);
    let mut cursor = session.player.pos;
    route.push(cursor);

    while !remaining.is_empty() {
        let nearest = remaining
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                distance(cursor, **a)
                    .partial_cmp(&distance(cursor, **b))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(idx, _)| idx);
        let Some(idx) = nearest else { break };
        cursor = remaining.swap_remove(idx);
        route.push(cursor);
    }

    route
}
