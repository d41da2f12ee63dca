//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock reads
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod level;
pub mod motion;
pub mod session;
pub mod state;
pub mod tick;

pub use autopilot::plan_route;
pub use collision::{Completion, check_completion, collect_items, paradox_contact};
pub use level::{generate_level, item_count, paradox_count};
pub use motion::{step_paradox, step_paradoxes, step_player};
pub use session::Command;
pub use state::{
    GamePhase, Item, ItemKind, Paradox, Player, RngState, Session, SimEvent,
};
pub use tick::{advance, countdown, tick};
