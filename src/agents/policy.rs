use crate::action::Action;
use crate::agent::Agent;
use crate::env::Observation;
use crate::policy::LinearPolicy;

/// Agent driven by a fixed linear policy.
pub struct PolicyAgent {
    policy: LinearPolicy,
}

impl PolicyAgent {
    pub fn new(policy: LinearPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &LinearPolicy {
        &self.policy
    }
}

impl Agent for PolicyAgent {
    fn act(&mut self, observation: &Observation) -> Action {
        self.policy.action(observation)
    }
}
