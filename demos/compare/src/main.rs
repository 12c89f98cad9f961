//! compare — run the baseline sweep and the adaptive nearest-request
//! dispatcher against the same random demand and report their costs.
//!
//! ```text
//! compare run --policy adaptive --passengers 50
//! compare compare --passengers 200 --output output/compare
//! compare --config config.toml series --max 1000
//! ```

mod config;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;

use lift_core::{Building, DemandRng, Passenger};
use lift_demand::{generate, load_demand_csv, write_demand_csv};
use lift_dispatch::{Dispatcher, NearestRequestDispatcher, Policy, SweepDispatcher};
use lift_output::{CsvWriter, OutputWriter, TraceObserver, series_rows};
use lift_sim::{Comparison, NoopObserver, SeriesRunner, SimBuilder};

use config::load_config;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[clap(name = "compare", version, about = "Baseline vs adaptive elevator dispatch")]
pub struct Cli {
    /// TOML configuration file.
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of floors (overrides the config file).
    #[clap(long, global = true)]
    pub floors: Option<u32>,

    /// Car capacity (overrides the config file).
    #[clap(long, global = true)]
    pub capacity: Option<u32>,

    /// Master RNG seed (overrides the config file).
    #[clap(long, global = true)]
    pub seed: Option<u64>,

    /// Seed from OS entropy instead; runs are not reproducible.
    #[clap(long, global = true, conflicts_with = "seed")]
    pub entropy: bool,

    /// Checkpoints in a series (overrides the config file).
    #[clap(long, global = true)]
    pub points: Option<usize>,

    /// Worker threads for a series; all cores when omitted.
    #[clap(long, global = true)]
    pub threads: Option<usize>,

    /// Directory for `series.csv` and `trace.csv`.  Nothing is written
    /// when omitted.
    #[clap(long, global = true)]
    pub output: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one policy and print its cost.
    Run {
        /// `baseline` or `adaptive`.
        #[clap(long, default_value = "adaptive")]
        policy: Policy,

        #[clap(flatten)]
        demand: DemandArgs,
    },

    /// Run both policies on the same demand.
    Compare {
        #[clap(flatten)]
        demand: DemandArgs,
    },

    /// Compare both policies at evenly spaced demand sizes up to `--max`.
    Series {
        /// Largest demand size.
        #[clap(long, default_value_t = 1000)]
        max: usize,
    },
}

#[derive(clap::Args, Debug)]
pub struct DemandArgs {
    /// Passengers to generate.
    #[clap(long, default_value_t = 100)]
    passengers: usize,

    /// Read demand from this CSV instead of generating it.
    #[clap(long, conflicts_with = "passengers")]
    demand: Option<PathBuf>,

    /// Save the demand used for this run as CSV.
    #[clap(long)]
    save_demand: Option<PathBuf>,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut rng = if cli.entropy { DemandRng::from_entropy() } else { DemandRng::new(config.seed) };

    info!(
        "building: {} floors, capacity {}; seed {}",
        config.building.floor_count,
        config.building.capacity,
        if cli.entropy { "entropy".to_string() } else { config.seed.to_string() },
    );

    let mut writer = match &cli.output {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            Some(CsvWriter::new(dir)?)
        }
        None => None,
    };

    let t0 = Instant::now();
    match &cli.command {
        Command::Run { policy, demand } => {
            let passengers = resolve_demand(demand, &config.building, &mut rng)?;
            let (cost, w) = run_policy(*policy, config.building, &passengers, writer.take())?;
            writer = w;
            println!("{policy}: {} passengers, cost {cost}", passengers.len());
        }
        Command::Compare { demand } => {
            let passengers = resolve_demand(demand, &config.building, &mut rng)?;
            let (baseline_cost, w) = run_policy(Policy::Baseline, config.building, &passengers, writer.take())?;
            let (adaptive_cost, w) = run_policy(Policy::Adaptive, config.building, &passengers, w)?;
            writer = w;
            print_comparison(&Comparison { passengers: passengers.len(), baseline_cost, adaptive_cost });
        }
        Command::Series { max } => {
            let series = SeriesRunner::new(config.building)
                .point_count(config.point_count)
                .num_threads(config.num_threads)
                .run(*max, &mut rng)?;
            println!("{:>12} {:>14} {:>14} {:>8}", "passengers", "baseline", "adaptive", "ratio");
            println!("{}", "-".repeat(51));
            for point in &series.points {
                println!(
                    "{:>12} {:>14} {:>14} {:>8}",
                    point.passengers,
                    point.baseline_cost,
                    point.adaptive_cost,
                    ratio(point),
                );
            }
            if let Some(w) = writer.as_mut() {
                w.write_series(&series_rows(&series))?;
            }
        }
    }

    if let Some(mut w) = writer {
        w.finish()?;
        if let Some(dir) = &cli.output {
            println!("output written to {}", dir.display());
        }
    }
    info!("finished in {:.3} s", t0.elapsed().as_secs_f64());
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Load or generate the demand for one invocation, saving it if asked.
fn resolve_demand(args: &DemandArgs, building: &Building, rng: &mut DemandRng) -> Result<Vec<Passenger>> {
    let passengers = match &args.demand {
        Some(path) => {
            let loaded = load_demand_csv(path, building)
                .with_context(|| format!("failed to load demand from {}", path.display()))?;
            info!("loaded {} passengers from {}", loaded.len(), path.display());
            loaded
        }
        None => generate(rng, building, args.passengers)?,
    };

    if let Some(path) = &args.save_demand {
        save_demand(path, &passengers)?;
    }
    Ok(passengers)
}

fn save_demand(path: &Path, passengers: &[Passenger]) -> Result<()> {
    write_demand_csv(path, passengers)
        .with_context(|| format!("failed to save demand to {}", path.display()))?;
    info!("saved {} passengers to {}", passengers.len(), path.display());
    Ok(())
}

/// Run `policy` once, tracing every move into `writer` when one is given.
fn run_policy(
    policy:     Policy,
    building:   Building,
    passengers: &[Passenger],
    writer:     Option<CsvWriter>,
) -> Result<(u64, Option<CsvWriter>)> {
    match policy {
        Policy::Baseline => run_with(SweepDispatcher, policy, building, passengers, writer),
        Policy::Adaptive => run_with(NearestRequestDispatcher, policy, building, passengers, writer),
    }
}

fn run_with<D: Dispatcher>(
    dispatcher: D,
    policy:     Policy,
    building:   Building,
    passengers: &[Passenger],
    writer:     Option<CsvWriter>,
) -> Result<(u64, Option<CsvWriter>)> {
    let mut sim = SimBuilder::new(building, dispatcher)
        .passengers(passengers.to_vec())
        .build()?;

    let Some(writer) = writer else {
        let cost = sim.run(&mut NoopObserver)?;
        return Ok((cost, None));
    };

    let mut obs = TraceObserver::new(writer, policy);
    let cost = sim.run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        bail!("failed to write {policy} trace: {e}");
    }
    info!("{policy}: {} moves, {} delivered", sim.moves, sim.delivered);
    Ok((cost, Some(obs.into_writer())))
}

fn print_comparison(c: &Comparison) {
    println!("passengers : {}", c.passengers);
    println!("baseline   : {}", c.baseline_cost);
    println!("adaptive   : {}", c.adaptive_cost);
    println!("ratio      : {}", ratio(c));
}

/// Adaptive cost as a fraction of baseline cost.
fn ratio(c: &Comparison) -> String {
    if c.baseline_cost == 0 {
        return "-".to_string();
    }
    format!("{:.3}", c.adaptive_cost as f64 / c.baseline_cost as f64)
}
