use std::f64::consts::PI;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::action::Action;
use crate::env::{ActionSpace, Environment, Observation, Step};
use crate::error::EnvError;
use crate::visualize::{TrackOptions, render_track};

const DEFAULT_SEED: u64 = 0xBA1A_CED5_EED5_0C27;

/// Physical constants and limits for the cart-pole simulation.
///
/// Defaults follow the classic control formulation: a 1 kg cart with a
/// 0.1 kg pole of half-length 0.5 m, pushed with a fixed 10 N force and
/// integrated with a 0.02 s Euler step.
#[derive(Clone, Copy, Debug)]
pub struct CartPoleConfig {
    pub seed: u64,
    pub gravity: f64,
    pub cart_mass: f64,
    pub pole_mass: f64,
    /// Half the pole length (the pivot-to-centre-of-mass distance).
    pub pole_half_length: f64,
    pub force_mag: f64,
    /// Integration timestep in seconds.
    pub tau: f64,
    /// Episode ends when |position| exceeds this bound.
    pub position_threshold: f64,
    /// Episode ends when |angle| exceeds this bound (radians).
    pub angle_threshold: f64,
    /// Reset draws each state component uniformly from
    /// [-reset_bound, reset_bound).
    pub reset_bound: f64,
}

impl Default for CartPoleConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            gravity: 9.8,
            cart_mass: 1.0,
            pole_mass: 0.1,
            pole_half_length: 0.5,
            force_mag: 10.0,
            tau: 0.02,
            position_threshold: 2.4,
            angle_threshold: 12.0 * 2.0 * PI / 360.0,
            reset_bound: 0.05,
        }
    }
}

/// Builder that enables deterministic state injection for testing.
pub struct CartPoleBuilder {
    config: CartPoleConfig,
    initial_state: Option<[f64; 4]>,
}

impl CartPoleBuilder {
    pub fn new() -> Self {
        Self {
            config: CartPoleConfig::default(),
            initial_state: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_config(mut self, config: CartPoleConfig) -> Self {
        self.config = config;
        self
    }

    /// Make every reset start from this exact state instead of drawing a
    /// random one. The order is position, velocity, angle, angular velocity.
    pub fn with_initial_state(mut self, state: [f64; 4]) -> Self {
        self.initial_state = Some(state);
        self
    }

    pub fn build(self) -> Result<CartPole, EnvError> {
        CartPole::from_builder(self)
    }
}

impl Default for CartPoleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Cart-pole balancing environment.
///
/// A pole is hinged to a cart on a frictionless track; each step pushes the
/// cart left or right and the episode ends when the pole falls past the angle
/// threshold or the cart leaves the track. Every step taken earns reward 1.0,
/// including the step that terminates the episode.
pub struct CartPole {
    config: CartPoleConfig,
    total_mass: f64,
    pole_mass_length: f64,
    state: [f64; 4],
    initial_state: Option<[f64; 4]>,
    done: bool,
    rng: StdRng,
}

impl CartPole {
    pub fn builder() -> CartPoleBuilder {
        CartPoleBuilder::new()
    }

    /// Environment with default physics and the given reset seed.
    pub fn new(seed: u64) -> Result<Self, EnvError> {
        CartPoleBuilder::new().with_seed(seed).build()
    }

    pub fn config(&self) -> CartPoleConfig {
        self.config
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    fn from_builder(builder: CartPoleBuilder) -> Result<Self, EnvError> {
        let CartPoleBuilder {
            config,
            initial_state,
        } = builder;
        if config.tau <= 0.0 {
            return Err(EnvError::InvalidConfiguration(
                "integration timestep must be positive",
            ));
        }
        if config.cart_mass <= 0.0 || config.pole_mass <= 0.0 {
            return Err(EnvError::InvalidConfiguration("masses must be positive"));
        }
        if config.position_threshold <= 0.0 || config.angle_threshold <= 0.0 {
            return Err(EnvError::InvalidConfiguration(
                "termination thresholds must be positive",
            ));
        }
        if config.reset_bound <= 0.0 && initial_state.is_none() {
            return Err(EnvError::InvalidConfiguration(
                "reset bound must be positive",
            ));
        }
        let mut env = Self {
            total_mass: config.cart_mass + config.pole_mass,
            pole_mass_length: config.pole_mass * config.pole_half_length,
            state: [0.0; 4],
            initial_state,
            done: false,
            rng: StdRng::seed_from_u64(config.seed),
            config,
        };
        env.reset();
        Ok(env)
    }

    fn observation(&self) -> Observation {
        let [x, x_dot, theta, theta_dot] = self.state;
        Observation::new(x, x_dot, theta, theta_dot)
    }

    fn out_of_bounds(&self) -> bool {
        let [x, _, theta, _] = self.state;
        x.abs() > self.config.position_threshold || theta.abs() > self.config.angle_threshold
    }
}

impl Environment for CartPole {
    fn reset(&mut self) -> Observation {
        match self.initial_state {
            Some(state) => self.state = state,
            None => {
                let bound = self.config.reset_bound;
                for component in &mut self.state {
                    *component = self.rng.gen_range(-bound..bound);
                }
            }
        }
        self.done = false;
        self.observation()
    }

    fn step(&mut self, action: Action) -> Result<Step, EnvError> {
        if self.done {
            return Err(EnvError::EpisodeOver);
        }

        let [x, x_dot, theta, theta_dot] = self.state;
        let force = match action {
            Action::Left => -self.config.force_mag,
            Action::Right => self.config.force_mag,
        };

        let cos_theta = theta.cos();
        let sin_theta = theta.sin();
        let temp =
            (force + self.pole_mass_length * theta_dot * theta_dot * sin_theta) / self.total_mass;
        let theta_acc = (self.config.gravity * sin_theta - cos_theta * temp)
            / (self.config.pole_half_length
                * (4.0 / 3.0 - self.config.pole_mass * cos_theta * cos_theta / self.total_mass));
        let x_acc = temp - self.pole_mass_length * theta_acc * cos_theta / self.total_mass;

        // Semi-explicit Euler, position before velocity.
        let tau = self.config.tau;
        self.state[0] = x + tau * x_dot;
        self.state[1] = x_dot + tau * x_acc;
        self.state[2] = theta + tau * theta_dot;
        self.state[3] = theta_dot + tau * theta_acc;

        self.done = self.out_of_bounds();

        Ok(Step {
            observation: self.observation(),
            reward: 1.0,
            done: self.done,
        })
    }

    fn render(&self) -> Option<String> {
        Some(render_track(&self.observation(), TrackOptions::default()))
    }

    fn action_space(&self) -> ActionSpace {
        ActionSpace::discrete(2)
    }
}
