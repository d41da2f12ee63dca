//! Session state and core simulation types
//!
//! Everything the renderer reads each frame lives here. All of it is
//! serializable so a host can snapshot a session as JSON.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::settings::SimConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing simulated
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen mid-level
    Paused,
    /// Level failed (paradox contact or time out)
    GameOver,
    /// Every item collected
    LevelComplete,
}

/// Collectible item types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Trash,
    Crystal,
    Artifact,
}

impl ItemKind {
    /// Points awarded on pickup
    pub fn score(&self) -> u64 {
        match self {
            ItemKind::Trash => 10,
            ItemKind::Crystal => 20,
            ItemKind::Artifact => 50,
        }
    }

    /// Crystals added to the player's inventory on pickup
    pub fn crystals(&self) -> u32 {
        match self {
            ItemKind::Crystal => 2,
            ItemKind::Trash | ItemKind::Artifact => 1,
        }
    }
}

/// A collectible lying on the playfield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub pos: Point,
    pub kind: ItemKind,
    pub collected: bool,
}

/// A bouncing hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paradox {
    pub id: u32,
    pub pos: Point,
    pub vel: Vec2,
    /// Inactive paradoxes neither move nor collide
    pub active: bool,
}

/// The cleaner the player steers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Point,
    /// Index of the waypoint currently being approached
    pub path_index: usize,
    /// Following a committed path
    pub moving: bool,
    pub crystals: u32,
    pub score: u64,
}

impl Player {
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            path_index: 0,
            moving: false,
            crystals: 0,
            score: 0,
        }
    }

    /// Put the player back at the spawn point, keeping run totals
    pub fn respawn(&mut self, pos: Point) {
        self.pos = pos;
        self.path_index = 0;
        self.moving = false;
    }
}

/// Something that happened during a tick or countdown step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    ItemCollected { id: u32, kind: ItemKind, points: u64 },
    ParadoxContact { id: u32 },
    TimeExpired,
    LevelComplete { stars: u8, time_bonus: u32 },
}

/// RNG state wrapper for serialization
///
/// Layouts are seeded from the run seed, the level number and how many
/// layouts have been generated so far, so a retry gets a fresh layout while
/// a replay with the same commands gets the same ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub layouts: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, layouts: 0 }
    }

    /// RNG for the next layout of `level`
    pub fn level_rng(&mut self, level: u32) -> Pcg32 {
        let mixed = self
            .seed
            .wrapping_add((level as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
            .wrapping_add(self.layouts.wrapping_mul(2_654_435_761));
        self.layouts += 1;
        Pcg32::seed_from_u64(mixed)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub config: SimConfig,
    pub rng_state: RngState,
    pub phase: GamePhase,
    /// Current level (1-based)
    pub level: u32,
    pub player: Player,
    /// Waypoints of the last committed path
    pub path: Vec<Point>,
    pub items: Vec<Item>,
    pub paradoxes: Vec<Paradox>,
    /// Seconds remaining on the level clock
    pub time_left: u32,
    /// Rating awarded at level completion (0 until then)
    pub stars: u8,
    /// Ticks simulated in the current level
    pub time_ticks: u64,
    /// Bumped every time the session enters `Playing` (level load or resume)
    #[serde(default)]
    pub play_spans: u64,
}

impl Session {
    /// Create a session sitting at the menu
    pub fn new(config: SimConfig) -> Self {
        let spawn = Vec2::new(config.player_spawn.0, config.player_spawn.1);
        Self {
            rng_state: RngState::new(config.seed),
            phase: GamePhase::Menu,
            level: 1,
            player: Player::new(spawn),
            path: Vec::new(),
            items: Vec::new(),
            paradoxes: Vec::new(),
            time_left: config.time_limit,
            stars: 0,
            time_ticks: 0,
            play_spans: 0,
            config,
        }
    }

    pub fn spawn_point(&self) -> Point {
        Vec2::new(self.config.player_spawn.0, self.config.player_spawn.1)
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Items still on the playfield
    pub fn items_remaining(&self) -> usize {
        self.items.iter().filter(|i| !i.collected).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_item_yields() {
        assert_eq!(ItemKind::Trash.score(), 10);
        assert_eq!(ItemKind::Crystal.score(), 20);
        assert_eq!(ItemKind::Artifact.score(), 50);
        assert_eq!(ItemKind::Trash.crystals(), 1);
        assert_eq!(ItemKind::Crystal.crystals(), 2);
        assert_eq!(ItemKind::Artifact.crystals(), 1);
    }

    #[test]
    fn test_new_session_at_menu() {
        let session = Session::new(SimConfig::default());
        assert_eq!(session.phase, GamePhase::Menu);
        assert_eq!(session.level, 1);
        assert_eq!(session.time_left, 120);
        assert_eq!(session.player.pos, Vec2::new(100.0, 300.0));
        assert!(session.items.is_empty());
    }

    #[test]
    fn test_level_rng_reproducible() {
        let mut a = RngState::new(42);
        let mut b = RngState::new(42);
        let x: u32 = a.level_rng(3).random();
        let y: u32 = b.level_rng(3).random();
        assert_eq!(x, y);

        // Second layout of the same level differs from the first
        let again: u32 = a.level_rng(3).random();
        assert_ne!(x, again);
        assert_eq!(a.layouts, 2);
    }
}
