use levsim::{ScenarioConfig, Scenario, RunSummary, PlotData};
use levsim::{run_plots, bench_integrator};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`, built-in reference run when omitted
    #[arg(short)]
    file_name: Option<String>,

    /// Run and log the summary without opening the plot window
    #[arg(long)]
    headless: bool,

    /// Time the integrator for a range of step counts and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;

    log::info!("loaded scenario {}", config_path.display());
    Ok(scenario_cfg)
}

fn log_summary(summary: &RunSummary) {
    let rows = [
        ("position (m)", summary.position),
        ("pressure front (Pa)", summary.pressure_front),
        ("pressure back (Pa)", summary.pressure_back),
        ("net force (N)", summary.net_force),
    ];
    for (name, e) in rows {
        log::info!("{name:>20}: min = {:.6e}, max = {:.6e}, span = {:.6e}", e.min, e.max, e.span());
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_integrator()?;
        return Ok(());
    }

    let scenario_cfg = match &args.file_name {
        Some(file_name) => load_scenario_from_yaml(file_name)?,
        None => ScenarioConfig::default(),
    };
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    let params = &scenario.parameters;
    log::info!(
        "integrating {} steps, dt = {:.3e} s, wavelength = {:.6} m",
        params.time_steps,
        params.dt(),
        params.wavelength()
    );
    log::info!(
        "driving wave: omega = {:.6e} rad/s, k = {:.6e} rad/m",
        params.angular_frequency(),
        params.wave_number()
    );

    let run = scenario.run();
    log::info!("final position {:.6e} m", run.last_position());
    log_summary(&run.summary);

    if args.headless {
        return Ok(());
    }

    let downsampled = scenario.downsample(&run);
    log::debug!("plotting {} samples per trace", downsampled.len());

    run_plots(PlotData::new(&downsampled, &params.frequency_label()))
}
