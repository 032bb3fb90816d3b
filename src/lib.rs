//! Cart-pole balancing environment with random-search policy optimization,
//! built for small reinforcement-learning experiments.

pub mod action;
pub mod agent;
pub mod agents;
pub mod cartpole;
pub mod env;
pub mod error;
pub mod policy;
pub mod search;
pub mod visualize;

pub use crate::action::Action;
pub use crate::agent::Agent;
pub use crate::agents::{PolicyAgent, RandomAgent, create_agent_from_spec, label_for_spec};
pub use crate::cartpole::{CartPole, CartPoleBuilder, CartPoleConfig};
pub use crate::env::{ActionSpace, Environment, Observation, Step};
pub use crate::error::EnvError;
pub use crate::policy::{LinearPolicy, WEIGHT_COUNT};
pub use crate::search::{
    BestPolicy, DEFAULT_MAX_STEPS, DEFAULT_TRIALS, Demonstration, RandomSearch, SearchConfig,
    SearchOutcome, demonstrate, run_episode,
};
pub use crate::visualize::{TrackOptions, render_track};
