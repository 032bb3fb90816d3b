use std::env;
use std::error::Error;
use std::process;

use polebot::{CartPole, Environment, create_agent_from_spec};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;
const DEFAULT_MAX_STEPS: usize = 1000;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let mut seed = DEFAULT_SEED;
    let mut max_steps = DEFAULT_MAX_STEPS;
    let mut quiet = false;
    let mut agent_spec: Option<String> = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--seed requires a value".to_string())?;
                seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed value: {value}"))?;
            }
            "--max-steps" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--max-steps requires a value".to_string())?;
                max_steps = value
                    .parse::<usize>()
                    .map_err(|_| format!("invalid max-steps value: {value}"))?;
            }
            "--quiet" => quiet = true,
            "--help" => {
                print_usage();
                return Ok(());
            }
            other if agent_spec.is_none() => agent_spec = Some(other.to_string()),
            other => return Err(format!("unexpected argument: {other}").into()),
        }
    }
    if max_steps == 0 {
        return Err("max-steps must be positive".into());
    }

    let spec = agent_spec.unwrap_or_else(|| String::from("random"));
    let mut env = CartPole::new(seed)?;
    let mut agent = create_agent_from_spec(&spec, env.action_space(), seed ^ 0x9E37_79B9)?;

    let mut observation = env.reset();
    for step in 1..=max_steps {
        if !quiet {
            if let Some(frame) = env.render() {
                println!("{frame}");
            }
        }
        let action = agent.act(&observation);
        let outcome = env.step(action)?;
        observation = outcome.observation;
        if !quiet {
            println!("{observation}");
        }
        if outcome.done {
            println!("This completed in {step} steps.");
            return Ok(());
        }
    }
    println!("Still balancing after {max_steps} steps.");
    Ok(())
}

fn print_usage() {
    println!("Usage: rollout [OPTIONS] [AGENT]");
    println!("  --seed <u64>          Seed for the environment and agent (default: {DEFAULT_SEED:#x})");
    println!("  --max-steps <usize>   Stop after the specified number of steps (default: {DEFAULT_MAX_STEPS})");
    println!("  --quiet               Suppress per-step rendering and observations");
    println!("  --help                Show this help message");
    println!("Agent specs:");
    println!("  random[:seed]         Uniform random action sampling (default)");
    println!("  policy:w0,w1,w2,w3    Fixed linear policy with the given weights");
}
