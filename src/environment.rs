//! Growing conditions that scale the plant's stride.

use serde::{Deserialize, Serialize};

/// Light and water available to the plant, each nominally in `[0, 1]`.
///
/// Values outside that range are accepted; the step length stays well defined
/// but loses its physical meaning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    pub light_intensity: f32,
    pub water_availability: f32,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            light_intensity: 0.1,
            water_availability: 0.6,
        }
    }
}

impl Environment {
    pub fn new(light_intensity: f32, water_availability: f32) -> Self {
        Self {
            light_intensity,
            water_availability,
        }
    }

    /// Length of a single `F` stroke: `light * water * 2`.
    pub fn step_length(&self) -> f32 {
        self.light_intensity * self.water_availability * 2.0
    }

    /// `true` when both factors lie in `[0, 1]`.
    pub fn is_within_range(&self) -> bool {
        (0.0..=1.0).contains(&self.light_intensity)
            && (0.0..=1.0).contains(&self.water_availability)
    }
}
