use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::agent::Agent;
use crate::agents::{PolicyAgent, RandomAgent};
use crate::env::ActionSpace;
use crate::policy::{LinearPolicy, WEIGHT_COUNT};

/// Returns a normalized label for an agent spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create an agent instance from a CLI-style spec.
/// Supported specs:
/// - random[:seed]
/// - policy:w0,w1,w2,w3
pub fn create_agent_from_spec(
    spec: &str,
    action_space: ActionSpace,
    seed: u64,
) -> Result<Box<dyn Agent>, Box<dyn Error>> {
    let spec_lower = spec.to_ascii_lowercase();
    if spec_lower.starts_with("random") {
        let custom_seed = spec
            .split_once(':')
            .and_then(|(_, value)| value.trim().parse::<u64>().ok())
            .unwrap_or(seed);
        Ok(Box::new(RandomAgent::new(
            action_space,
            StdRng::seed_from_u64(custom_seed),
        )))
    } else if spec_lower.starts_with("policy") {
        let (_, weight_list) = spec
            .split_once(':')
            .ok_or("policy spec requires weights, e.g. policy:0.1,-0.2,0.9,0.4")?;
        let parsed: Result<Vec<f64>, _> = weight_list
            .split(',')
            .map(|value| value.trim().parse::<f64>())
            .collect();
        let parsed = parsed.map_err(|_| format!("invalid policy weights: {weight_list}"))?;
        if parsed.len() != WEIGHT_COUNT {
            return Err(format!(
                "expected {WEIGHT_COUNT} policy weights, received {}",
                parsed.len()
            )
            .into());
        }
        let mut weights = [0.0; WEIGHT_COUNT];
        weights.copy_from_slice(&parsed);
        Ok(Box::new(PolicyAgent::new(LinearPolicy::new(weights))))
    } else {
        Err(format!("unrecognized agent spec: {spec}").into())
    }
}
