//! Rendering surfaces for generated segments.
//!
//! Generation never depends on a renderer. A [`SegmentSink`] receives the view
//! setup and the [`Animation`] timing once, then one segment per animation frame
//! in generation order. The animation alone decides how long a frame lasts.

mod json;
mod svg;

pub use json::{FrameRecord, JsonFrameSink, JsonFrames};
pub use svg::SvgSink;

use crate::error::Result;
use crate::segment::{Bounds, Segment};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed coordinate range and labelling for a rendering surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewSetup {
    pub bounds: Bounds,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Stroke width in output units.
    pub line_width: f32,
}

impl Default for ViewSetup {
    fn default() -> Self {
        Self {
            bounds: Bounds::from_ranges((-10.0, 10.0), (0.0, 20.0)),
            title: "Procedural Plant Growth with L-System and Photosynthesis".to_string(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            line_width: 2.0,
        }
    }
}

/// A surface that reveals segments incrementally.
pub trait SegmentSink {
    /// Declares the coordinate range, labels and frame timing before any frame is shown.
    fn begin(
        &mut self,
        view: &ViewSetup,
        animation: &Animation,
        frame_count: usize,
    ) -> Result<()>;

    /// Shows `segment` at animation step `frame`.
    fn reveal(&mut self, frame: usize, segment: &Segment) -> Result<()>;

    /// Called once after the last frame.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Frame-by-frame driver: segment `i` is revealed at frame `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Animation {
    pub frame_interval: Duration,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(200),
        }
    }
}

impl Animation {
    pub fn new(frame_interval: Duration) -> Self {
        Self { frame_interval }
    }

    /// Total running time for `frame_count` frames.
    pub fn duration(&self, frame_count: usize) -> Duration {
        self.frame_interval
            .saturating_mul(u32::try_from(frame_count).unwrap_or(u32::MAX))
    }

    /// Feeds every segment to `sink`, in order, without modifying them.
    pub fn play(
        &self,
        segments: &[Segment],
        view: &ViewSetup,
        sink: &mut dyn SegmentSink,
    ) -> Result<()> {
        tracing::debug!(
            frames = segments.len(),
            interval_ms = self.frame_interval.as_millis() as u64,
            "playing animation"
        );
        sink.begin(view, self, segments.len())?;
        for (frame, segment) in segments.iter().enumerate() {
            sink.reveal(frame, segment)?;
        }
        sink.finish()
    }
}
