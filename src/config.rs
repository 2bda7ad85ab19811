//! Serde-backed configuration for a full growth-and-render run.
//!
//! Every field has a default, so `{}` is a valid config that reproduces the
//! classic five-iteration weed.

use crate::environment::Environment;
use crate::error::{PlantError, Result};
use crate::grammar::Grammar;
use crate::interpreter::InterpreterConfig;
use crate::render::{Animation, ViewSetup};
use crate::segment::Bounds;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Axis ranges and labels for the output figure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub x_range: (f32, f32),
    pub y_range: (f32, f32),
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub line_width: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        let view = ViewSetup::default();
        Self {
            x_range: (view.bounds.min.x, view.bounds.max.x),
            y_range: (view.bounds.min.y, view.bounds.max.y),
            title: view.title,
            x_label: view.x_label,
            y_label: view.y_label,
            line_width: view.line_width,
        }
    }
}

/// Parameters for one run of the pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantConfig {
    pub axiom: String,
    pub rules: BTreeMap<char, String>,
    pub iterations: usize,
    /// Turn angle in radians.
    pub angle: f32,
    pub max_stack_depth: usize,
    pub environment: Environment,
    pub view: ViewConfig,
    pub frame_interval_ms: u64,
    /// Optional cap on expanded sentence length.
    pub max_sentence_len: Option<usize>,
}

impl Default for PlantConfig {
    fn default() -> Self {
        let grammar = Grammar::plant();
        let interp = InterpreterConfig::default();
        Self {
            axiom: grammar.axiom().to_string(),
            rules: grammar.rules().clone(),
            iterations: grammar.iterations(),
            angle: interp.angle,
            max_stack_depth: interp.max_stack_depth,
            environment: Environment::default(),
            view: ViewConfig::default(),
            frame_interval_ms: 200,
            max_sentence_len: None,
        }
    }
}

impl PlantConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading plant config");
        Self::from_json_str(&text)
    }

    /// Rejects settings no run could use. Environment ranges are deliberately not checked.
    pub fn validate(&self) -> Result<()> {
        if !self.angle.is_finite() {
            return Err(PlantError::Config(format!(
                "angle must be finite, got {}",
                self.angle
            )));
        }
        let (x0, x1) = self.view.x_range;
        let (y0, y1) = self.view.y_range;
        if !(x0 < x1 && y0 < y1) {
            return Err(PlantError::Config(format!(
                "view ranges must be increasing, got x {x0}..{x1}, y {y0}..{y1}"
            )));
        }
        if self.frame_interval_ms == 0 {
            return Err(PlantError::Config(
                "frame_interval_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn grammar(&self) -> Grammar {
        Grammar::new(self.axiom.clone(), self.iterations).with_rules(self.rules.clone())
    }

    pub fn interpreter_config(&self) -> InterpreterConfig {
        InterpreterConfig {
            angle: self.angle,
            max_stack_depth: self.max_stack_depth,
        }
    }

    pub fn view_setup(&self) -> ViewSetup {
        ViewSetup {
            bounds: Bounds::from_ranges(self.view.x_range, self.view.y_range),
            title: self.view.title.clone(),
            x_label: self.view.x_label.clone(),
            y_label: self.view.y_label.clone(),
            line_width: self.view.line_width,
        }
    }

    pub fn animation(&self) -> Animation {
        Animation::new(Duration::from_millis(self.frame_interval_ms))
    }
}
