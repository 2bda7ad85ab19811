//! Plain-data recording of an animation for external players.

use super::{Animation, SegmentSink, ViewSetup};
use crate::error::Result;
use crate::segment::Segment;
use serde::{Deserialize, Serialize};

/// One revealed stroke.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame: usize,
    pub segment: Segment,
}

/// Everything a [`JsonFrameSink`] saw, ready for serialization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonFrames {
    pub view: Option<ViewSetup>,
    pub frame_interval_ms: u64,
    pub frames: Vec<FrameRecord>,
}

/// Records the animation as plain data for external players.
#[derive(Debug, Default)]
pub struct JsonFrameSink {
    frames: JsonFrames,
}

impl JsonFrameSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &JsonFrames {
        &self.frames
    }

    pub fn into_frames(self) -> JsonFrames {
        self.frames
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.frames)?)
    }
}

impl SegmentSink for JsonFrameSink {
    fn begin(
        &mut self,
        view: &ViewSetup,
        animation: &Animation,
        frame_count: usize,
    ) -> Result<()> {
        self.frames.view = Some(view.clone());
        self.frames.frame_interval_ms =
            u64::try_from(animation.frame_interval.as_millis()).unwrap_or(u64::MAX);
        self.frames.frames = Vec::with_capacity(frame_count);
        Ok(())
    }

    fn reveal(&mut self, frame: usize, segment: &Segment) -> Result<()> {
        self.frames.frames.push(FrameRecord {
            frame,
            segment: *segment,
        });
        Ok(())
    }
}
