//! Simulation tick and countdown
//!
//! A tick is one atomic transaction over the whole session:
//! motion, then pickups, then paradox contact, then completion.

use super::collision::{check_completion, collect_items, paradox_contact};
use super::motion::{step_paradoxes, step_player};
use super::state::{GamePhase, Session, SimEvent};

/// Advance the session by one simulation tick
///
/// Does nothing unless the session is playing. Proximity checks use the
/// player's position from before this tick's motion.
pub fn tick(session: &mut Session) -> Vec<SimEvent> {
    if session.phase != GamePhase::Playing {
        return Vec::new();
    }
    session.time_ticks += 1;

    let at = session.player.pos;

    // Motion
    session.player = step_player(&session.player, &session.path, &session.config);
    session.paradoxes = step_paradoxes(&session.paradoxes, &session.config);

    // Pickups
    let mut events = collect_items(
        &mut session.items,
        &mut session.player,
        at,
        session.config.pickup_radius(),
    );

    // Paradox contact wins over a same-tick completion
    if let Some(id) = paradox_contact(&session.paradoxes, at, session.config.contact_radius()) {
        log::info!(
            "Level {} failed: paradox #{} hit at tick {} (score {})",
            session.level,
            id,
            session.time_ticks,
            session.player.score
        );
        session.phase = GamePhase::GameOver;
        events.push(SimEvent::ParadoxContact { id });
        return events;
    }

    if let Some(done) = check_completion(&session.items, session.time_left) {
        session.stars = done.stars;
        session.player.score += done.bonus_points();
        session.phase = GamePhase::LevelComplete;
        log::info!(
            "Level {} complete: {} stars, {}s left, score {}",
            session.level,
            done.stars,
            session.time_left,
            session.player.score
        );
        events.push(SimEvent::LevelComplete {
            stars: done.stars,
            time_bonus: done.time_bonus,
        });
    }

    events
}

/// Pure form of [`tick`]: returns the next session and leaves `session` untouched
pub fn advance(session: &Session) -> (Session, Vec<SimEvent>) {
    let mut next = session.clone();
    let events = tick(&mut next);
    (next, events)
}

/// One second of the level clock
///
/// Only runs while playing. Hitting zero ends the level.
pub fn countdown(session: &mut Session) -> Vec<SimEvent> {
    if session.phase != GamePhase::Playing {
        return Vec::new();
    }
    if session.time_left <= 1 {
        session.time_left = 0;
        session.phase = GamePhase::GameOver;
        log::info!("Level {} failed: time expired", session.level);
        return vec![SimEvent::TimeExpired];
    }
    session.time_left -= 1;
    Vec::new()
}
