//! # symbios-plant
//!
//! Procedural plant growth for [Symbios](https://crates.io/crates/symbios)-style L-Systems,
//! drawn in 2D with a bracketed turtle.
//!
//! A [`Grammar`] is rewritten into a sentence, a [`PlantInterpreter`] walks the
//! sentence into ordered [`Segment`]s whose stride is set by the plant's
//! [`Environment`] (light and water), and any [`SegmentSink`] can replay those
//! segments one per animation frame. Generation never depends on the renderer.

pub mod config;
pub mod environment;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod pipeline;
pub mod render;
pub mod segment;
pub mod turtle;

pub use config::*;
pub use environment::*;
pub use error::PlantError;
pub use grammar::*;
pub use interpreter::*;
pub use pipeline::{PlantGrowth, grow};
pub use render::{Animation, JsonFrameSink, SegmentSink, SvgSink, ViewSetup};
pub use segment::*;
pub use turtle::*;
