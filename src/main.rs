use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ultraviolet::{Vec2, Vec3};

use coulomb_sim::app::{FixedStepScheduler, FrameDriver, SimCommand};
use coulomb_sim::config::{self, SimConfig, UpdateMode};
use coulomb_sim::picking::Camera;
use coulomb_sim::plotting::ExportFormat;
use coulomb_sim::SimulationState;

/// Headless runner: spawn charges, integrate a number of frames, report.
#[derive(Parser, Debug)]
#[command(name = "coulomb_sim", version, about)]
struct Args {
    /// TOML file with simulation parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, default_value_t = config::DEFAULT_FRAMES)]
    frames: usize,

    #[arg(short, long)]
    seed: Option<u64>,

    /// Spawn at x,y,z (random ±1 charge) or x,y,z,q; repeatable
    #[arg(long = "spawn", value_parser = parse_spawn)]
    spawns: Vec<(Vec3, Option<f32>)>,

    /// Simulate this many random pointer clicks through the default camera
    #[arg(long, default_value_t = 0)]
    random: usize,

    #[arg(long, value_enum)]
    mode: Option<UpdateMode>,

    /// Log diagnostics every N frames (0 = only at the end)
    #[arg(long, default_value_t = 0)]
    report_every: usize,

    /// Write every particle's speed series here after the run
    #[arg(long)]
    export: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "csv")]
    format: ExportFormat,
}

fn parse_spawn(s: &str) -> std::result::Result<(Vec3, Option<f32>), String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|e| format!("bad number {p:?}: {e}")))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        [x, y, z] => Ok((Vec3::new(*x, *y, *z), None)),
        [x, y, z, q] => Ok((Vec3::new(*x, *y, *z), Some(*q))),
        _ => Err(format!("expected x,y,z or x,y,z,q, got {s:?}")),
    }
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut cfg = match &args.config {
        Some(path) => SimConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(mode) = args.mode {
        cfg.update_mode = mode;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let cfg = load_config(&args)?;
    if args.spawns.is_empty() && args.random == 0 {
        bail!("nothing to simulate: pass --spawn and/or --random");
    }
    info!(?cfg, "starting simulation");

    let mut click_rng = match cfg.seed {
        Some(seed) => fastrand::Rng::with_seed(seed ^ 0x9e37_79b9_7f4a_7c15),
        None => fastrand::Rng::new(),
    };
    let dt = cfg.dt;
    let (mut driver, tx) = FrameDriver::new(SimulationState::new(cfg));
    driver.report_every = args.report_every;

    for &(position, charge) in &args.spawns {
        tx.send(SimCommand::Spawn { position, charge })?;
    }
    let camera = Camera::new(16.0 / 9.0);
    for _ in 0..args.random {
        let ndc = Vec2::new(click_rng.f32() * 2.0 - 1.0, click_rng.f32() * 2.0 - 1.0);
        tx.send(SimCommand::SpawnAtPointer { ndc, camera })?;
    }

    driver.run(&mut FixedStepScheduler::new(dt, args.frames));

    if let Some(path) = args.export {
        tx.send(SimCommand::ExportSeries { path: path.clone(), format: args.format })?;
        driver
            .drain_commands()
            .with_context(|| format!("exporting series to {}", path.display()))?;
    }

    let report = driver.state().diagnostics();
    info!("{report}");
    #[cfg(feature = "profiling")]
    {
        coulomb_sim::PROFILER.lock().log_report();
    }
    if report.non_finite_count > 0 {
        tracing::warn!(count = report.non_finite_count, "run ended with non-finite particles");
    }
    Ok(())
}
