//! Interpreter that converts an expanded L-System sentence into ordered [`Segment`]s.
//!
//! The entry point is [`PlantInterpreter`]. Configure it with an [`InterpreterConfig`],
//! optionally rebind symbols via [`PlantInterpreter::set_op`], then call
//! [`PlantInterpreter::interpret`] with a sentence (usually from
//! [`Grammar::expand`](crate::Grammar::expand)) or
//! [`PlantInterpreter::interpret_state`] with a [`symbios::SymbiosState`].

use crate::environment::Environment;
use crate::error::{PlantError, Result};
use crate::segment::Segment;
use crate::turtle::{TurtleOp, TurtleState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f32::consts::FRAC_PI_6;
use symbios::{SymbiosState, SymbolTable};

/// Configuration for plant interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Turn angle (in radians) applied by `+` and `-`.
    pub angle: f32,
    /// Maximum stack depth for push/pop operations.
    pub max_stack_depth: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            angle: FRAC_PI_6,
            max_stack_depth: 1024,
        }
    }
}

/// The conventional bracketed 2D turtle alphabet.
const STANDARD_SYMBOLS: [(char, TurtleOp); 5] = [
    ('F', TurtleOp::Forward),
    ('+', TurtleOp::Turn(1.0)),
    ('-', TurtleOp::Turn(-1.0)),
    ('[', TurtleOp::Push),
    (']', TurtleOp::Pop),
];

/// Interprets L-System output as 2D turtle strokes.
pub struct PlantInterpreter {
    op_map: HashMap<char, TurtleOp>,
    config: InterpreterConfig,
}

impl PlantInterpreter {
    /// Creates an interpreter with the standard `F + - [ ]` alphabet registered.
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            op_map: STANDARD_SYMBOLS.into_iter().collect(),
            config,
        }
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Assigns a [`TurtleOp`] to `symbol`, replacing any previous binding.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// The operation bound to `symbol`; unbound symbols are [`TurtleOp::Ignore`].
    pub fn op(&self, symbol: char) -> TurtleOp {
        self.op_map.get(&symbol).copied().unwrap_or(TurtleOp::Ignore)
    }

    /// Walks `sentence` left to right and returns every stroke in drawing order.
    ///
    /// The turtle starts at the origin facing `+Y`. The stroke length is taken from
    /// `environment` once, before the walk. `[` saves position and heading, `]`
    /// restores them; a `]` with nothing to restore aborts with
    /// [`PlantError::UnbalancedBranch`].
    pub fn interpret(&self, sentence: &str, environment: &Environment) -> Result<Vec<Segment>> {
        let mut walk = Walk::new(&self.config, environment);
        for (position, ch) in sentence.chars().enumerate() {
            walk.apply(position, self.op(ch))?;
        }
        Ok(walk.finish())
    }

    /// Walks a module string produced by the `symbios` derivation engine.
    ///
    /// Each symbol name interned in `interner` that is a single character of the
    /// alphabet is mapped to its operation; all other symbols are ignored. Module
    /// parameters do not affect the geometry.
    pub fn interpret_state(
        &self,
        state: &SymbiosState,
        interner: &SymbolTable,
        environment: &Environment,
    ) -> Result<Vec<Segment>> {
        let mut id_map: Vec<TurtleOp> = Vec::new();
        for (&symbol, &op) in &self.op_map {
            if let Some(id) = interner.resolve_id(&symbol.to_string()) {
                let idx = id as usize;
                if idx >= id_map.len() {
                    id_map.resize(idx + 1, TurtleOp::Ignore);
                }
                id_map[idx] = op;
            }
        }

        let mut walk = Walk::new(&self.config, environment);
        for position in 0..state.len() {
            let view = match state.get_view(position) {
                Some(v) => v,
                None => break,
            };
            let op = id_map
                .get(view.sym as usize)
                .copied()
                .unwrap_or(TurtleOp::Ignore);
            walk.apply(position, op)?;
        }
        Ok(walk.finish())
    }
}

impl Default for PlantInterpreter {
    fn default() -> Self {
        Self::new(InterpreterConfig::default())
    }
}

/// Mutable state of a single interpretation pass.
struct Walk<'a> {
    config: &'a InterpreterConfig,
    length: f32,
    turtle: TurtleState,
    stack: Vec<TurtleState>,
    segments: Vec<Segment>,
}

impl<'a> Walk<'a> {
    fn new(config: &'a InterpreterConfig, environment: &Environment) -> Self {
        if !environment.is_within_range() {
            tracing::warn!(
                light = environment.light_intensity,
                water = environment.water_availability,
                "environment outside [0, 1]; step length may be meaningless"
            );
        }
        Self {
            config,
            length: environment.step_length(),
            turtle: TurtleState::default(),
            stack: Vec::new(),
            segments: Vec::new(),
        }
    }

    fn apply(&mut self, position: usize, op: TurtleOp) -> Result<()> {
        match op {
            TurtleOp::Forward => {
                let segment = self.turtle.advance(self.length);
                self.segments.push(segment);
            }
            TurtleOp::Turn(sign) => self.turtle.turn(self.config.angle * sign),
            TurtleOp::Push => {
                if self.stack.len() >= self.config.max_stack_depth {
                    return Err(PlantError::BranchTooDeep {
                        position,
                        max: self.config.max_stack_depth,
                    });
                }
                self.stack.push(self.turtle);
            }
            TurtleOp::Pop => {
                self.turtle = self
                    .stack
                    .pop()
                    .ok_or(PlantError::UnbalancedBranch { position })?;
            }
            TurtleOp::Ignore => {}
        }
        Ok(())
    }

    fn finish(self) -> Vec<Segment> {
        if !self.stack.is_empty() {
            tracing::debug!(open = self.stack.len(), "sentence ended with open branches");
        }
        tracing::debug!(segments = self.segments.len(), "interpretation finished");
        self.segments
    }
}
