use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::agents::PolicyAgent;
use crate::env::Environment;
use crate::error::EnvError;
use crate::policy::LinearPolicy;

/// Trial count the lesson historically used.
pub const DEFAULT_TRIALS: usize = 300;
/// Step cap per episode the lesson historically used.
pub const DEFAULT_MAX_STEPS: usize = 200;

/// Run one episode: reset, then act/step until termination or the step cap.
///
/// Returns the cumulative reward. Environment faults propagate unchanged;
/// there is no retry.
pub fn run_episode<E, A>(env: &mut E, agent: &mut A, max_steps: usize) -> Result<f64, EnvError>
where
    E: Environment + ?Sized,
    A: Agent + ?Sized,
{
    let mut observation = env.reset();
    let mut total_reward = 0.0;
    for _ in 0..max_steps {
        let action = agent.act(&observation);
        let step = env.step(action)?;
        total_reward += step.reward;
        observation = step.observation;
        if step.done {
            break;
        }
    }
    Ok(total_reward)
}

/// Best candidate observed so far during a search run.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BestPolicy {
    pub policy: LinearPolicy,
    pub reward: f64,
    /// Zero-based index of the trial that produced this candidate.
    pub trial: usize,
}

/// Result of a full search run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// The winning candidate, or `None` when no trial earned a reward
    /// strictly above zero (every trial may legitimately score 0).
    pub best: Option<BestPolicy>,
    /// Reward of every trial, in trial order.
    pub rewards: Vec<f64>,
}

impl SearchOutcome {
    pub fn best_reward(&self) -> f64 {
        self.best.map(|best| best.reward).unwrap_or(0.0)
    }
}

/// Configuration for a random search run.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    pub trials: usize,
    pub max_steps: usize,
}

impl SearchConfig {
    pub fn new(trials: usize, max_steps: usize) -> Result<Self, EnvError> {
        if max_steps == 0 {
            return Err(EnvError::InvalidConfiguration(
                "episode step cap must be positive",
            ));
        }
        Ok(Self { trials, max_steps })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Random search over linear policy weights.
///
/// Each trial draws a fresh candidate uniformly in [-1, 1) per weight,
/// evaluates it with one episode, and keeps the candidate only when its
/// reward strictly exceeds the best seen so far. The reported best reward is
/// therefore monotone nondecreasing over trial indices.
pub struct RandomSearch<R: Rng> {
    config: SearchConfig,
    rng: R,
}

impl<R: Rng> RandomSearch<R> {
    pub fn new(config: SearchConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Run all trials against `env`, invoking `on_improvement` each time the
    /// best candidate is replaced. With zero trials no episode runs and the
    /// outcome has no best candidate.
    pub fn run<E: Environment>(
        &mut self,
        env: &mut E,
        mut on_improvement: impl FnMut(&BestPolicy),
    ) -> Result<SearchOutcome, EnvError> {
        let mut best: Option<BestPolicy> = None;
        let mut rewards = Vec::with_capacity(self.config.trials);
        for trial in 0..self.config.trials {
            let policy = LinearPolicy::sample(&mut self.rng);
            let mut agent = PolicyAgent::new(policy);
            let reward = run_episode(env, &mut agent, self.config.max_steps)?;
            rewards.push(reward);
            let best_reward = best.map(|record| record.reward).unwrap_or(0.0);
            if reward > best_reward {
                let record = BestPolicy {
                    policy,
                    reward,
                    trial,
                };
                on_improvement(&record);
                best = Some(record);
            }
        }
        Ok(SearchOutcome { best, rewards })
    }
}

/// Outcome of replaying a policy for display.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Demonstration {
    pub reward: f64,
    pub steps: usize,
    /// Whether the rollout earned the maximum attainable reward
    /// (one per step for `max_steps` steps).
    pub solved: bool,
}

/// Replay one episode with the given policy, handing each rendered frame to
/// `on_frame` along with its step index.
pub fn demonstrate<E: Environment>(
    env: &mut E,
    policy: &LinearPolicy,
    max_steps: usize,
    mut on_frame: impl FnMut(usize, &str),
) -> Result<Demonstration, EnvError> {
    let mut observation = env.reset();
    let mut reward = 0.0;
    let mut steps = 0;
    for step_index in 0..max_steps {
        if let Some(frame) = env.render() {
            on_frame(step_index, &frame);
        }
        let action = policy.action(&observation);
        let step = env.step(action)?;
        reward += step.reward;
        observation = step.observation;
        steps += 1;
        if step.done {
            break;
        }
    }
    Ok(Demonstration {
        reward,
        steps,
        solved: reward >= max_steps as f64,
    })
}
