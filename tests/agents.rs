use rand::SeedableRng;
use rand::rngs::StdRng;

use polebot::{
    Action, ActionSpace, Agent, Observation, RandomAgent, create_agent_from_spec, label_for_spec,
};

fn origin() -> Observation {
    Observation::new(0.0, 0.0, 0.0, 0.0)
}

#[test]
fn labels_normalize_to_the_head_token() {
    assert_eq!(label_for_spec("random"), "random");
    assert_eq!(label_for_spec("Random:17"), "random");
    assert_eq!(label_for_spec(" policy:0.1,0.2,0.3,0.4 "), "policy");
}

#[test]
fn random_agent_only_emits_valid_actions() {
    let space = ActionSpace::discrete(2);
    let mut agent = RandomAgent::new(space, StdRng::seed_from_u64(8));
    let observation = origin();
    for _ in 0..200 {
        let action = agent.act(&observation);
        assert!(action.index() < space.len());
    }
}

#[test]
fn random_agents_with_the_same_seed_agree() {
    let space = ActionSpace::discrete(2);
    let mut first = RandomAgent::new(space, StdRng::seed_from_u64(123));
    let mut second = RandomAgent::new(space, StdRng::seed_from_u64(123));
    let observation = origin();
    for _ in 0..50 {
        assert_eq!(first.act(&observation), second.act(&observation));
    }
}

#[test]
fn registry_builds_a_policy_agent_from_weights() {
    let space = ActionSpace::discrete(2);
    let mut agent =
        create_agent_from_spec("policy:1.0,0.0,0.0,0.0", space, 0).expect("valid spec");
    let pushed_right = Observation::new(0.5, 0.0, 0.0, 0.0);
    let pushed_left = Observation::new(-0.5, 0.0, 0.0, 0.0);
    assert_eq!(agent.act(&pushed_right), Action::Right);
    assert_eq!(agent.act(&pushed_left), Action::Left);
}

#[test]
fn registry_builds_a_seeded_random_agent() {
    let space = ActionSpace::discrete(2);
    let mut first = create_agent_from_spec("random:55", space, 0).expect("valid spec");
    let mut second = create_agent_from_spec("random:55", space, 999).expect("valid spec");
    let observation = origin();
    for _ in 0..50 {
        assert_eq!(first.act(&observation), second.act(&observation));
    }
}

#[test]
fn registry_rejects_malformed_specs() {
    let space = ActionSpace::discrete(2);
    assert!(create_agent_from_spec("policy", space, 0).is_err());
    assert!(create_agent_from_spec("policy:1.0,2.0", space, 0).is_err());
    assert!(create_agent_from_spec("policy:a,b,c,d", space, 0).is_err());
    assert!(create_agent_from_spec("greedy", space, 0).is_err());
}
