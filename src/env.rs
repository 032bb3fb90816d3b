use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::error::EnvError;

/// State vector reported by the environment after a reset or a step.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Cart position along the track (metres).
    pub position: f64,
    /// Cart velocity (m/s).
    pub velocity: f64,
    /// Pole angle from vertical (radians).
    pub angle: f64,
    /// Pole angular velocity (rad/s).
    pub angular_velocity: f64,
}

impl Observation {
    pub fn new(position: f64, velocity: f64, angle: f64, angular_velocity: f64) -> Self {
        Self {
            position,
            velocity,
            angle,
            angular_velocity,
        }
    }

    /// Components in their canonical order: position, velocity, angle,
    /// angular velocity.
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.position,
            self.velocity,
            self.angle,
            self.angular_velocity,
        ]
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:>8.4} {:>8.4} {:>8.4} {:>8.4}]",
            self.position, self.velocity, self.angle, self.angular_velocity
        )
    }
}

/// Outcome of advancing the environment by one action.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Observation after the action was applied.
    pub observation: Observation,
    /// Immediate reward for this step.
    pub reward: f64,
    /// Whether the episode terminated on this step.
    pub done: bool,
}

/// The set of valid discrete actions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpace {
    n: usize,
}

impl ActionSpace {
    /// Discrete space with `n` valid actions, indexed from zero.
    pub fn discrete(n: usize) -> Self {
        Self { n }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Draw a uniformly random valid action.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Action {
        Action::from_index(rng.gen_range(0..self.n))
            .expect("action space index must be in range")
    }
}

/// Interface for episodic environments the rollout loops can drive.
///
/// One production implementation ([`CartPole`](crate::CartPole)) simulates the
/// physics; tests substitute scripted stubs.
pub trait Environment {
    /// Reinitialize the simulation and return the initial observation.
    fn reset(&mut self) -> Observation;

    /// Apply one action and advance the simulation by a single timestep.
    fn step(&mut self, action: Action) -> Result<Step, EnvError>;

    /// Textual visualization of the current state, if the environment
    /// supports rendering.
    fn render(&self) -> Option<String>;

    /// The set of actions this environment accepts.
    fn action_space(&self) -> ActionSpace;
}
