//! Real-time cadence for hosts
//!
//! Turns wall-clock frame deltas into fixed simulation ticks and whole
//! countdown seconds. The two cadences are independent and both stop the
//! moment the session leaves `Playing`.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GamePhase, Session, SimEvent, countdown, tick};

/// Seconds per countdown step
const COUNTDOWN_PERIOD: f64 = 1.0;
/// Slack for frame deltas that were rounded on the host side
const COUNTDOWN_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    tick_accumulator: f32,
    /// Kept in f64 so sixty 60 Hz frames add up to a full second
    countdown_accumulator: f64,
    /// `Session::play_spans` seen on the last playing frame
    last_span: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any partial tick or second
    pub fn reset(&mut self) {
        self.tick_accumulator = 0.0;
        self.countdown_accumulator = 0.0;
    }

    /// Partial second carried toward the next countdown step
    pub fn countdown_progress(&self) -> f64 {
        self.countdown_accumulator
    }

    /// Feed one frame's elapsed time (seconds) into the session
    pub fn advance(&mut self, session: &mut Session, dt: f32) -> Vec<SimEvent> {
        if session.phase != GamePhase::Playing {
            self.reset();
            return Vec::new();
        }
        // A pause/resume or level load since the last frame starts fresh
        if self.last_span != Some(session.play_spans) {
            self.reset();
            self.last_span = Some(session.play_spans);
        }

        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.tick_accumulator += dt;
        self.countdown_accumulator += dt as f64;

        let mut events = Vec::new();

        let mut substeps = 0;
        while self.tick_accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(tick(session));
            self.tick_accumulator -= SIM_DT;
            substeps += 1;

            if session.phase != GamePhase::Playing {
                self.reset();
                return events;
            }
        }
        if substeps == MAX_SUBSTEPS {
            // Backlog beyond the substep cap is dropped
            self.tick_accumulator = self.tick_accumulator.min(SIM_DT);
        }

        while self.countdown_accumulator >= COUNTDOWN_PERIOD - COUNTDOWN_EPSILON {
            self.countdown_accumulator = (self.countdown_accumulator - COUNTDOWN_PERIOD).max(0.0);
            events.extend(countdown(session));
            if session.phase != GamePhase::Playing {
                self.reset();
                break;
            }
        }

        events
    }
}
