//! Chrono Cleaners - path-drawing arcade cleanup game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (level layout, motion, collisions, session state)
//! - `clock`: Frame/countdown cadence for hosts that drive the simulation in real time
//! - `input`: Stroke capture and display-to-playfield scaling
//! - `settings`: Data-driven simulation tuning

pub mod clock;
pub mod input;
pub mod settings;
pub mod sim;

pub use clock::FrameClock;
pub use input::{StrokeBuilder, Viewport};
pub use settings::{ConfigError, SimConfig};

use glam::Vec2;

/// A point in playfield space (origin top-left, y down)
pub type Point = Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the clock will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Entity sizes (diameters)
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const PARADOX_SIZE: f32 = 25.0;

    /// Player movement along a path (units per tick)
    pub const PLAYER_SPEED: f32 = 3.0;
    /// Distance under which a waypoint counts as reached
    pub const ARRIVAL_RADIUS: f32 = 5.0;
    /// Where the player appears at every level start
    pub const PLAYER_SPAWN: (f32, f32) = (100.0, 300.0);

    /// Items spawn at least this far from every edge
    pub const ITEM_SPAWN_MARGIN: f32 = 50.0;
    pub const BASE_ITEM_COUNT: u32 = 5;
    pub const ITEMS_PER_LEVEL: u32 = 2;
    pub const MAX_ITEM_COUNT: u32 = 15;
    /// Highest level the generator will lay out
    pub const MAX_LEVEL: u32 = 999;

    /// Level timer (seconds)
    pub const LEVEL_TIME_LIMIT: u32 = 120;
    /// Seconds left above which completion awards a time bonus
    pub const TIME_BONUS_THRESHOLD: u32 = 60;
    pub const TIME_BONUS_PER_SECOND: u64 = 5;
    /// Seconds left above which completion earns three stars
    pub const THREE_STAR_THRESHOLD: u32 = 90;
}

/// Euclidean distance between two playfield points
#[inline]
pub fn distance(a: Point, b: Point) -> f32 {
    (b - a).length()
}

/// Clamp a point into the `[0, width] x [0, height]` rectangle
#[inline]
pub fn clamp_to_playfield(p: Point, width: f32, height: f32) -> Point {
    Vec2::new(p.x.clamp(0.0, width), p.y.clamp(0.0, height))
}
