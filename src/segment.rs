//! Output geometry: strokes in drawing order and the boxes that frame them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single drawn stroke, from where the turtle stood to where it stepped.
///
/// Segments are emitted in the order their `F` symbols appear in the sentence.
/// Renderers rely on that order to animate growth one stroke per frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }
}

/// An axis-aligned rectangle in world space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Builds a box from two corners in any order.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Builds a box from `(x_min, x_max)` and `(y_min, y_max)` ranges.
    pub fn from_ranges(x: (f32, f32), y: (f32, f32)) -> Self {
        Self::new(Vec2::new(x.0, y.0), Vec2::new(x.1, y.1))
    }

    /// Smallest box containing every endpoint, or `None` for an empty slice.
    pub fn enclosing(segments: &[Segment]) -> Option<Self> {
        let first = segments.first()?;
        let mut bounds = Self::new(first.start, first.end);
        for seg in &segments[1..] {
            bounds.min = bounds.min.min(seg.start).min(seg.end);
            bounds.max = bounds.max.max(seg.start).max(seg.end);
        }
        Some(bounds)
    }

    /// Grows the box by `margin` on every side.
    pub fn padded(&self, margin: f32) -> Self {
        Self::new(self.min - Vec2::splat(margin), self.max + Vec2::splat(margin))
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}
