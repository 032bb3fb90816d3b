use crate::action::Action;
use crate::env::Observation;

/// Interface for defining custom action-selection strategies.
pub trait Agent {
    fn act(&mut self, observation: &Observation) -> Action;
}
