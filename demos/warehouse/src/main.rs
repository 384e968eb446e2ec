//! warehouse — runnable AGV floor demo.
//!
//! Loads a TOML scenario (or the built-in 12×12 single-order run), drives
//! the simulation through a `SharedSim` handle in request-sized batches,
//! writes CSV output and prints the final metrics as JSON.
//!
//! ```text
//! warehouse [SCENARIO.toml] [--out DIR]
//! RUST_LOG=agv_sim=debug warehouse demos/warehouse/scenario.toml
//! ```

mod scenario;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use agv_grid::AStarRouter;
use agv_output::{CsvWriter, SimOutputObserver};
use agv_sim::{MAX_STEP_BATCH, SharedSim, SimBuilder, SimObserver};

use scenario::{DEFAULT_SCENARIO, Scenario};

const DEFAULT_OUT_DIR: &str = "output/warehouse";

struct Args {
    scenario: Option<PathBuf>,
    out_dir:  PathBuf,
}

fn parse_args() -> Result<Args> {
    let mut scenario = None;
    let mut out_dir = PathBuf::from(DEFAULT_OUT_DIR);
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => out_dir = args.next().context("--out needs a directory")?.into(),
            flag if flag.starts_with('-') => bail!("unknown flag {flag}"),
            path if scenario.is_none() => scenario = Some(PathBuf::from(path)),
            extra => bail!("unexpected argument {extra}"),
        }
    }
    Ok(Args { scenario, out_dir })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args()?;

    // 1. Scenario.
    let scenario = match &args.scenario {
        Some(path) => Scenario::from_file(path)?,
        None => Scenario::parse(DEFAULT_SCENARIO)?,
    };
    let orders = scenario.all_orders();
    info!(
        source = %args.scenario.as_ref().map_or("built-in".into(), |p| p.display().to_string()),
        rows = scenario.sim.rows,
        cols = scenario.sim.cols,
        agents = scenario.sim.agv_starts.len(),
        orders = orders.len(),
        max_steps = scenario.sim.max_steps,
        "scenario loaded"
    );

    // 2. Sim behind the shared handle.
    let sim = SimBuilder::new(scenario.sim.clone(), AStarRouter)
        .orders(orders)
        .build()
        .context("invalid scenario")?;
    let shared = SharedSim::new(sim);

    // 3. Output.
    let writer = CsvWriter::new(&args.out_dir)
        .with_context(|| format!("opening output in {}", args.out_dir.display()))?;
    let mut obs = SimOutputObserver::new(writer);

    // 4. Run in batches, the way a request layer would call `step`.
    let t0 = Instant::now();
    loop {
        let ran = shared.with(|sim| sim.step_with(MAX_STEP_BATCH, &mut obs))?;
        let metrics = shared.metrics()?;
        info!(
            time = metrics.time,
            done = metrics.tasks_done,
            total = metrics.tasks_total,
            collisions = metrics.collisions,
            "batch finished"
        );
        if ran < MAX_STEP_BATCH {
            break;
        }
    }
    let final_time = shared.with(|sim| sim.time())?;
    obs.on_sim_end(final_time);
    if let Some(e) = obs.take_error() {
        warn!("output error: {e}");
    }
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, out = %args.out_dir.display(), "run complete");

    // 5. Summary.
    let state = shared.state()?;
    println!("{:<8} {:<10} {:<8} {:<8} {:<10}", "Agent", "Pos", "Active", "Dist", "Carrying");
    println!("{}", "-".repeat(46));
    for a in &state.agents {
        println!(
            "{:<8} {:<10} {:<8} {:<8} {:<10}",
            a.id.0,
            a.pos.to_string(),
            a.active_ticks,
            a.dist,
            a.carrying.as_ref().map_or("-", |o| o.as_str()),
        );
    }
    println!();
    for o in &state.orders {
        println!("{:<6} {} -> {}  {}", o.id.as_str(), o.pick, o.drop, o.status);
    }
    println!();
    println!("{}", serde_json::to_string_pretty(&shared.metrics()?)?);

    Ok(())
}
