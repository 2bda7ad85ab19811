//! Turtle state and operations for 2D plant interpretation.

use crate::segment::Segment;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// The state of the drawing turtle.
///
/// Tracks the pen position and the heading it will step along. This is the
/// whole state saved by `[` and restored by `]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current world-space position of the pen.
    pub position: Vec2,

    /// Current heading in radians, measured counter-clockwise from `+X`.
    pub heading: f32,
}

impl Default for TurtleState {
    /// Starts at the origin facing straight up, so the plant grows along `+Y`.
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: FRAC_PI_2,
        }
    }
}

impl TurtleState {
    /// Unit vector along the current heading.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }

    /// Steps forward by `length` and returns the stroke just drawn.
    pub fn advance(&mut self, length: f32) -> Segment {
        let start = self.position;
        self.position += self.direction() * length;
        Segment::new(start, self.position)
    }

    /// Rotates by `angle` radians; positive turns counter-clockwise.
    pub fn turn(&mut self, angle: f32) {
        self.heading += angle;
    }
}

/// Operations that can be performed by the plant turtle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TurtleOp {
    /// Draw one stroke of the step length (`F`).
    Forward,
    /// Turn by `sign * angle` (`+` is `1.0`, `-` is `-1.0`).
    Turn(f32),
    /// Save the turtle state onto the branch stack (`[`).
    Push,
    /// Restore the most recently pushed turtle state (`]`).
    Pop,
    /// No-op: symbol has no registered meaning.
    Ignore,
}
