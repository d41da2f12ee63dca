//! Session lifecycle commands
//!
//! Every command is a synchronous transition. A command that is not valid in
//! the current phase is ignored and reports `false`.

use serde::{Deserialize, Serialize};

use super::level::{clamp_level, generate_level};
use super::state::{GamePhase, Session};
use crate::Point;

/// Commands the host can issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Start { level: u32 },
    Pause,
    Resume,
    ToMenu,
    Retry,
    NextLevel,
    CommitPath(Vec<Point>),
}

impl Session {
    /// Apply a command, returning whether it was accepted
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start { level } => self.start(level),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::ToMenu => self.to_menu(),
            Command::Retry => self.retry(),
            Command::NextLevel => self.next_level(),
            Command::CommitPath(points) => self.commit_path(points),
        }
    }

    /// Begin a new run at `level` (clamped to `1..=MAX_LEVEL`)
    pub fn start(&mut self, level: u32) -> bool {
        if self.phase != GamePhase::Menu {
            return self.ignored("start");
        }
        self.player.score = 0;
        self.player.crystals = 0;
        self.load_level(clamp_level(level));
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return self.ignored("pause");
        }
        self.phase = GamePhase::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return self.ignored("resume");
        }
        self.phase = GamePhase::Playing;
        self.play_spans += 1;
        true
    }

    pub fn to_menu(&mut self) -> bool {
        match self.phase {
            GamePhase::Paused | GamePhase::GameOver | GamePhase::LevelComplete => {
                self.phase = GamePhase::Menu;
                true
            }
            _ => self.ignored("to_menu"),
        }
    }

    /// Replay the failed level with a fresh layout
    pub fn retry(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return self.ignored("retry");
        }
        self.load_level(self.level);
        true
    }

    pub fn next_level(&mut self) -> bool {
        if self.phase != GamePhase::LevelComplete {
            return self.ignored("next_level");
        }
        self.load_level(clamp_level(self.level.saturating_add(1)));
        true
    }

    /// Hand the player a freshly drawn path
    ///
    /// Accepted only while playing and standing still. The player starts
    /// moving when the path has more than one point.
    pub fn commit_path(&mut self, points: Vec<Point>) -> bool {
        if self.phase != GamePhase::Playing || self.player.moving {
            return self.ignored("commit_path");
        }
        self.player.path_index = 0;
        self.player.moving = points.len() > 1;
        self.path = points;
        true
    }

    /// Replace the layout and reset per-level state, then start playing
    fn load_level(&mut self, level: u32) {
        let mut rng = self.rng_state.level_rng(level);
        let (items, paradoxes) = generate_level(level, &self.config, &mut rng);

        self.level = level;
        self.items = items;
        self.paradoxes = paradoxes;
        self.player.respawn(self.spawn_point());
        self.path.clear();
        self.time_left = self.config.time_limit;
        self.stars = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        self.play_spans += 1;

        log::info!(
            "Level {} started: {} items, {} paradoxes, {}s",
            level,
            self.items.len(),
            self.paradoxes.len(),
            self.time_left
        );
    }

    fn ignored(&self, command: &str) -> bool {
        log::debug!("Ignoring {} while {:?}", command, self.phase);
        false
    }
}
