use ballsim::{load_scenario, Scenario};
use ballsim::{run_2d, run_headless};
use ballsim::bench_tick;

use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Bouncing balls with elastic collisions")]
struct Args {
    /// Scenario file under `scenarios/` [default: default.yaml, built-in defaults if absent]
    #[arg(short)]
    file_name: Option<String>,

    /// Override the scenario seed
    #[arg(long)]
    seed: Option<u64>,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Ticks to run in headless mode
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Time ticks for growing body counts and exit
    #[arg(long)]
    bench: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_tick();
        return Ok(());
    }

    let mut scenario_cfg = load_scenario(&PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios"), args.file_name.as_deref())?;
    if let Some(seed) = args.seed {
        scenario_cfg.bodies.seed = Some(seed);
    }

    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    if args.headless {
        run_headless(scenario, args.ticks);
    } else {
        run_2d(scenario);
    }

    Ok(())
}
