//! One-way flow: expand the grammar, interpret the sentence, animate the strokes.

use crate::config::PlantConfig;
use crate::error::Result;
use crate::interpreter::PlantInterpreter;
use crate::render::{SegmentSink, ViewSetup};
use crate::segment::Segment;
use serde::{Deserialize, Serialize};

/// The generated plant: its sentence and the strokes drawn from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlantGrowth {
    pub sentence: String,
    pub segments: Vec<Segment>,
}

/// Expands the configured grammar and interprets the result.
pub fn grow(config: &PlantConfig) -> Result<PlantGrowth> {
    let grammar = config.grammar();
    let sentence = match config.max_sentence_len {
        Some(max) => grammar.try_expand(max)?,
        None => grammar.expand(),
    };
    let interpreter = PlantInterpreter::new(config.interpreter_config());
    let segments = interpreter.interpret(&sentence, &config.environment)?;
    tracing::info!(
        symbols = sentence.len(),
        segments = segments.len(),
        "plant grown"
    );
    Ok(PlantGrowth { sentence, segments })
}

/// Animates `growth` onto `sink` using the configured view and frame timing.
pub fn render(
    config: &PlantConfig,
    growth: &PlantGrowth,
    sink: &mut dyn SegmentSink,
) -> Result<()> {
    render_with_view(config, &config.view_setup(), growth, sink)
}

/// Like [`render`], with an explicit view (for example one fitted to the plant).
pub fn render_with_view(
    config: &PlantConfig,
    view: &ViewSetup,
    growth: &PlantGrowth,
    sink: &mut dyn SegmentSink,
) -> Result<()> {
    config.animation().play(&growth.segments, view, sink)
}
