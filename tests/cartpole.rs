use rand::SeedableRng;
use rand::rngs::StdRng;

use polebot::{
    Action, CartPole, CartPoleConfig, EnvError, Environment, RandomAgent, run_episode,
};

#[test]
fn same_seed_gives_identical_trajectories() -> Result<(), EnvError> {
    let mut left_env = CartPole::new(42)?;
    let mut right_env = CartPole::new(42)?;

    let first = left_env.reset();
    let second = right_env.reset();
    assert_eq!(first, second);

    for step in 0..25 {
        let action = if step % 3 == 0 {
            Action::Left
        } else {
            Action::Right
        };
        let a = left_env.step(action)?;
        let b = right_env.step(action)?;
        assert_eq!(a, b);
        if a.done {
            break;
        }
    }
    Ok(())
}

#[test]
fn reset_draws_state_within_the_configured_bound() -> Result<(), EnvError> {
    let mut env = CartPole::new(7)?;
    for _ in 0..50 {
        let observation = env.reset();
        for component in observation.as_array() {
            assert!((-0.05..0.05).contains(&component));
        }
    }
    Ok(())
}

#[test]
fn right_push_accelerates_cart_and_tips_pole_left() -> Result<(), EnvError> {
    let mut env = CartPole::builder()
        .with_initial_state([0.0, 0.0, 0.0, 0.0])
        .build()?;
    env.reset();
    let step = env.step(Action::Right)?;
    assert!(step.observation.velocity > 0.0);
    // Position integrates the previous (zero) velocity, so it has not moved yet.
    assert_eq!(step.observation.position, 0.0);
    // The cart slides out from under the pole, so the pole rotates the other way.
    assert!(step.observation.angular_velocity < 0.0);
    assert!(!step.done);
    Ok(())
}

#[test]
fn episode_terminates_past_the_angle_threshold() -> Result<(), EnvError> {
    // 0.3 rad is already past the 12 degree limit; the first step must end it.
    let mut env = CartPole::builder()
        .with_initial_state([0.0, 0.0, 0.3, 0.0])
        .build()?;
    env.reset();
    let step = env.step(Action::Left)?;
    assert!(step.done);
    assert_eq!(step.reward, 1.0, "the terminating step still pays its reward");
    assert!(env.is_done());
    Ok(())
}

#[test]
fn episode_terminates_past_the_track_edge() -> Result<(), EnvError> {
    let mut env = CartPole::builder()
        .with_initial_state([2.39, 3.0, 0.0, 0.0])
        .build()?;
    env.reset();
    let step = env.step(Action::Right)?;
    assert!(step.observation.position > 2.4);
    assert!(step.done);
    Ok(())
}

#[test]
fn stepping_a_finished_episode_is_an_error() -> Result<(), EnvError> {
    let mut env = CartPole::builder()
        .with_initial_state([0.0, 0.0, 0.3, 0.0])
        .build()?;
    env.reset();
    let step = env.step(Action::Left)?;
    assert!(step.done);
    let result = env.step(Action::Left);
    assert!(matches!(result, Err(EnvError::EpisodeOver)));
    Ok(())
}

#[test]
fn reset_clears_the_done_flag() -> Result<(), EnvError> {
    let mut env = CartPole::builder()
        .with_initial_state([0.0, 0.0, 0.3, 0.0])
        .build()?;
    env.reset();
    let step = env.step(Action::Left)?;
    assert!(step.done);
    env.reset();
    assert!(!env.is_done());
    let step = env.step(Action::Left)?;
    assert!(step.done, "injected initial state applies to every reset");
    Ok(())
}

#[test]
fn invalid_physics_configuration_is_rejected() {
    let config = CartPoleConfig {
        tau: 0.0,
        ..CartPoleConfig::default()
    };
    let result = CartPole::builder().with_config(config).build();
    assert!(matches!(result, Err(EnvError::InvalidConfiguration(_))));

    let config = CartPoleConfig {
        pole_mass: -0.1,
        ..CartPoleConfig::default()
    };
    let result = CartPole::builder().with_config(config).build();
    assert!(matches!(result, Err(EnvError::InvalidConfiguration(_))));
}

#[test]
fn random_rollout_reward_stays_within_bounds() -> Result<(), EnvError> {
    let mut env = CartPole::new(1234)?;
    let mut agent = RandomAgent::new(env.action_space(), StdRng::seed_from_u64(99));
    for _ in 0..10 {
        let reward = run_episode(&mut env, &mut agent, 200)?;
        assert!(reward >= 1.0);
        assert!(reward <= 200.0);
    }
    Ok(())
}

#[test]
fn rendering_produces_a_track_line() -> Result<(), EnvError> {
    let mut env = CartPole::new(5)?;
    env.reset();
    let frame = env.render().expect("cartpole renders text frames");
    assert!(frame.starts_with('['));
    assert!(frame.contains('|') || frame.contains('/') || frame.contains('\\'));
    Ok(())
}
