//! Input boundary helpers
//!
//! The host captures pointer/touch events; these types turn them into
//! playfield-space strokes and commit them to the session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::sim::{GamePhase, Session};

/// Where the playfield is drawn on the host's display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Map a display-space point into a `field_width x field_height` playfield
    ///
    /// Returns `None` for a collapsed viewport.
    pub fn to_playfield(
        self,
        client: Point,
        field_width: f32,
        field_height: f32,
    ) -> Option<Point> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let scale = Vec2::new(field_width / self.width, field_height / self.height);
        Some((client - Vec2::new(self.left, self.top)) * scale)
    }
}

/// A path being drawn by the player
#[derive(Debug, Clone, Default)]
pub struct StrokeBuilder {
    points: Vec<Point>,
    active: bool,
}

impl StrokeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Points captured so far (for drawing the stroke preview)
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Pointer down. Only accepted while playing and the player is idle.
    pub fn begin(&mut self, session: &Session, at: Point) -> bool {
        if session.phase != GamePhase::Playing || session.player.moving {
            return false;
        }
        self.points.clear();
        self.points.push(at);
        self.active = true;
        true
    }

    /// Pointer move
    pub fn extend(&mut self, session: &Session, at: Point) -> bool {
        if !self.active || session.phase != GamePhase::Playing {
            return false;
        }
        self.points.push(at);
        true
    }

    /// Pointer up or leave: hand the stroke to the session
    pub fn finish(&mut self, session: &mut Session) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        let points = std::mem::take(&mut self.points);
        let count = points.len();
        let accepted = session.commit_path(points);
        if accepted {
            log::debug!("Committed stroke with {} points", count);
        }
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SimConfig;

    fn playing() -> Session {
        let mut session = Session::new(SimConfig::default());
        session.start(1);
        session
    }

    #[test]
    fn test_viewport_scaling() {
        let viewport = Viewport::new(10.0, 20.0, 400.0, 300.0);
        let p = viewport
            .to_playfield(Vec2::new(210.0, 170.0), 800.0, 600.0)
            .unwrap();
        assert_eq!(p, Vec2::new(400.0, 300.0));

        let collapsed = Viewport::new(0.0, 0.0, 0.0, 300.0);
        assert_eq!(collapsed.to_playfield(Vec2::ZERO, 800.0, 600.0), None);
    }

    #[test]
    fn test_stroke_commits_path() {
        let mut session = playing();
        let mut stroke = StrokeBuilder::new();

        assert!(stroke.begin(&session, Vec2::new(100.0, 300.0)));
        assert!(stroke.extend(&session, Vec2::new(120.0, 300.0)));
        assert!(stroke.extend(&session, Vec2::new(140.0, 310.0)));
        assert_eq!(stroke.points().len(), 3);

        assert!(stroke.finish(&mut session));
        assert!(!stroke.is_active());
        assert!(session.player.moving);
        assert_eq!(session.path.len(), 3);

        // Can't start a new stroke mid-move
        assert!(!stroke.begin(&session, Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_tap_does_not_move_player() {
        let mut session = playing();
        let mut stroke = StrokeBuilder::new();
        stroke.begin(&session, Vec2::new(300.0, 300.0));
        assert!(stroke.finish(&mut session));
        assert!(!session.player.moving);
    }

    #[test]
    fn test_stroke_outside_play() {
        let mut session = Session::new(SimConfig::default());
        let mut stroke = StrokeBuilder::new();
        assert!(!stroke.begin(&session, Vec2::ZERO));
        assert!(!stroke.extend(&session, Vec2::ONE));
        assert!(!stroke.finish(&mut session));

        session.start(1);
        stroke.begin(&session, Vec2::ZERO);
        session.pause();
        assert!(!stroke.extend(&session, Vec2::ONE));
        assert!(!stroke.finish(&mut session));
        assert!(session.path.is_empty());
    }
}
