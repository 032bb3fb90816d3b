use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::env::Observation;

/// Number of observation components a policy weighs.
pub const WEIGHT_COUNT: usize = 4;

/// Linear policy: one weight per observation component, decided by the sign
/// of the weighted sum.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearPolicy {
    weights: [f64; WEIGHT_COUNT],
}

impl LinearPolicy {
    pub fn new(weights: [f64; WEIGHT_COUNT]) -> Self {
        Self { weights }
    }

    /// Draw a fresh candidate with each weight uniform in [-1, 1).
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let mut weights = [0.0; WEIGHT_COUNT];
        for weight in &mut weights {
            *weight = rng.gen_range(-1.0..1.0);
        }
        Self { weights }
    }

    pub fn weights(&self) -> [f64; WEIGHT_COUNT] {
        self.weights
    }

    /// Weighted sum of the observation components.
    pub fn score(&self, observation: &Observation) -> f64 {
        observation
            .as_array()
            .iter()
            .zip(self.weights.iter())
            .map(|(component, weight)| component * weight)
            .sum()
    }

    /// Decide the push for an observation.
    ///
    /// A weighted sum that is >= 0 maps to [`Action::Right`]; the tie at
    /// exactly zero deliberately goes right. Pure function: no state, same
    /// inputs always give the same action.
    pub fn action(&self, observation: &Observation) -> Action {
        if self.score(observation) >= 0.0 {
            Action::Right
        } else {
            Action::Left
        }
    }
}

impl fmt::Display for LinearPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.6}, {:.6}, {:.6}, {:.6}]",
            self.weights[0], self.weights[1], self.weights[2], self.weights[3]
        )
    }
}
