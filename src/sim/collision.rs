//! Pickup, paradox contact and level completion checks
//!
//! All proximity tests are plain circle-vs-point distance checks against a
//! single player position supplied by the caller.

use serde::{Deserialize, Serialize};

use super::state::{Item, Paradox, Player, SimEvent};
use crate::consts::{
    THREE_STAR_THRESHOLD, TIME_BONUS_PER_SECOND, TIME_BONUS_THRESHOLD,
};
use crate::{Point, distance};

/// Outcome of finishing a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub stars: u8,
    /// Seconds counted toward the bonus
    pub time_bonus: u32,
}

impl Completion {
    /// Score added for the time bonus
    pub fn bonus_points(&self) -> u64 {
        self.time_bonus as u64 * TIME_BONUS_PER_SECOND
    }
}

/// Collect every uncollected item within `radius` of `at`
///
/// Credits the player for each pickup and reports it.
pub fn collect_items(
    items: &mut [Item],
    player: &mut Player,
    at: Point,
    radius: f32,
) -> Vec<SimEvent> {
    let mut events = Vec::new();
    for item in items.iter_mut().filter(|i| !i.collected) {
        if distance(item.pos, at) < radius {
            item.collected = true;
            let points = item.kind.score();
            player.crystals += item.kind.crystals();
            player.score += points;
            log::debug!("Collected {:?} #{} (+{})", item.kind, item.id, points);
            events.push(SimEvent::ItemCollected {
                id: item.id,
                kind: item.kind,
                points,
            });
        }
    }
    events
}

/// First active paradox touching `at`, if any
pub fn paradox_contact(paradoxes: &[Paradox], at: Point, radius: f32) -> Option<u32> {
    paradoxes
        .iter()
        .filter(|p| p.active)
        .find(|p| distance(p.pos, at) < radius)
        .map(|p| p.id)
}

/// Star rating for the seconds left at completion
pub fn star_rating(time_left: u32) -> u8 {
    if time_left > THREE_STAR_THRESHOLD {
        3
    } else if time_left > TIME_BONUS_THRESHOLD {
        2
    } else {
        1
    }
}

/// Seconds above the bonus threshold
pub fn time_bonus(time_left: u32) -> u32 {
    time_left.saturating_sub(TIME_BONUS_THRESHOLD)
}

/// Level is complete once a non-empty item set is fully collected
pub fn check_completion(items: &[Item], time_left: u32) -> Option<Completion> {
    if items.is_empty() || !items.iter().all(|i| i.collected) {
        return None;
    }
    Some(Completion {
        stars: star_rating(time_left),
        time_bonus: time_bonus(time_left),
    })
}
