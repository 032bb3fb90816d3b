use rand::Rng;

use crate::action::Action;
use crate::agent::Agent;
use crate::env::{ActionSpace, Observation};

/// Baseline agent that ignores the observation and samples uniformly from the
/// action space.
pub struct RandomAgent<R: Rng> {
    action_space: ActionSpace,
    rng: R,
}

impl<R: Rng> RandomAgent<R> {
    pub fn new(action_space: ActionSpace, rng: R) -> Self {
        Self { action_space, rng }
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn act(&mut self, _observation: &Observation) -> Action {
        self.action_space.sample(&mut self.rng)
    }
}
