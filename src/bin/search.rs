use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use plotters::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use polebot::{
    CartPole, DEFAULT_MAX_STEPS, DEFAULT_TRIALS, RandomSearch, SearchConfig, SearchOutcome,
    demonstrate,
};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xCA27_u64 << 32 | 0x5EED_u64;

#[derive(Parser, Debug)]
#[command(
    name = "search",
    about = "Random-search linear policy weights for the cart-pole task."
)]
struct Args {
    /// Number of candidate policies to evaluate
    #[arg(short = 't', long = "trials", default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Base RNG seed (environment and weight sampling are derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Step cap per episode
    #[arg(long = "max-steps", default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Render the demonstration rollout frame by frame
    #[arg(long = "render", action = ArgAction::SetTrue)]
    render: bool,

    /// Skip the demonstration rollout after the search
    #[arg(long = "no-demo", action = ArgAction::SetTrue)]
    no_demo: bool,

    /// Write a per-trial reward chart to this PNG file
    #[arg(short = 'o', long = "chart")]
    chart: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = SearchConfig::new(args.trials, args.max_steps)?;
    let mut env = CartPole::new(mix_seed(args.seed, 0))?;
    let sample_rng = StdRng::seed_from_u64(mix_seed(args.seed, 1));
    let mut search = RandomSearch::new(config, sample_rng);

    println!(
        "Searching {} candidate policies ({} steps per episode).\n",
        args.trials, args.max_steps
    );
    let outcome = search.run(&mut env, |record| {
        println!(
            "Trial #{:<4} new best reward {:>6.1} with weights {}",
            record.trial, record.reward, record.policy
        );
    })?;

    let Some(best) = outcome.best else {
        println!("\nNo trial earned a reward above zero; no best policy to report.");
        maybe_chart(&args, &outcome)?;
        return Ok(());
    };

    println!("\nBest policy found at trial #{}:", best.trial);
    println!("  weights: {}", best.policy);
    println!("  reward:  {:.1}", best.reward);

    if !args.no_demo {
        println!("\nReplaying the best policy:");
        let demo = demonstrate(&mut env, &best.policy, args.max_steps, |step, frame| {
            if args.render {
                println!("{step:>4} {frame}");
            }
        })?;
        println!("Reward when done: {:.1} ({} steps)", demo.reward, demo.steps);
        if demo.solved {
            println!("Congrats! The pole stayed up for the full episode.");
        } else {
            println!("Unfortunately, even the best weights were not enough.");
        }
    }

    maybe_chart(&args, &outcome)?;
    Ok(())
}

fn maybe_chart(args: &Args, outcome: &SearchOutcome) -> Result<(), Box<dyn Error>> {
    if let Some(path) = &args.chart {
        if outcome.rewards.is_empty() {
            return Err("cannot chart an empty search run".into());
        }
        render_reward_chart(path, outcome)?;
        println!("\nChart written to {}", path.display());
    }
    Ok(())
}

fn mix_seed(base: u64, stream: u64) -> u64 {
    // Simple reversible mixer (xorshift-like mix).
    let mut z = base ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z ^= z >> 12;
    z ^= z << 25;
    z ^= z >> 27;
    z
}

fn render_reward_chart(out: &PathBuf, outcome: &SearchOutcome) -> Result<(), Box<dyn Error>> {
    let rewards = &outcome.rewards;
    let max_reward = rewards.iter().cloned().fold(1.0_f64, f64::max);

    let root = BitMapBackend::new(out, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| format!("{e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Random search: reward per trial",
            ("sans-serif", 28).into_font(),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..rewards.len(), 0.0f64..max_reward * 1.05)
        .map_err(|e| format!("{e}"))?;

    chart
        .configure_mesh()
        .y_desc("Episode reward")
        .x_desc("Trial")
        .draw()
        .map_err(|e| format!("{e}"))?;

    chart
        .draw_series(
            rewards
                .iter()
                .enumerate()
                .map(|(trial, reward)| Circle::new((trial, *reward), 2, BLUE.filled())),
        )
        .map_err(|e| format!("{e}"))?
        .label("trial reward");

    // Running best overlay shows the monotone improvement curve.
    let mut running_best = 0.0_f64;
    let best_series: Vec<(usize, f64)> = rewards
        .iter()
        .enumerate()
        .map(|(trial, reward)| {
            running_best = running_best.max(*reward);
            (trial, running_best)
        })
        .collect();
    chart
        .draw_series(LineSeries::new(best_series, RED.stroke_width(2)))
        .map_err(|e| format!("{e}"))?
        .label("best so far");

    root.present().map_err(|e| format!("{e}"))?;
    Ok(())
}
