use std::time::Instant;

use crate::configuration::config::{ConfigError, ScenarioConfig};
use crate::simulation::scenario::Scenario;

/// Build the reference scenario with a different step count
fn make_scenario(time_steps: usize) -> Result<Scenario, ConfigError> {
    let mut cfg = ScenarioConfig::default();
    cfg.parameters.time_steps = time_steps;
    Scenario::build_scenario(cfg)
}

/// Time full runs of the integrator for a range of step counts
/// Paste output directly into a spreadsheet to graph
pub fn bench_integrator() -> Result<(), ConfigError> {
    bench_step_counts(&[1_000, 10_000, 100_000, 1_000_000], 3)
}

fn bench_step_counts(step_counts: &[usize], repeats: usize) -> Result<(), ConfigError> {
    println!("steps,run_ms,ns_per_step");

    for &steps in step_counts {
        let scenario = make_scenario(steps)?;

        // Warm up
        let _ = scenario.run();

        let t0 = Instant::now();
        for _ in 0..repeats {
            let run = scenario.run();
            // keep the optimizer from dropping the run
            std::hint::black_box(run.last_position());
        }
        let run_s = t0.elapsed().as_secs_f64() / repeats.max(1) as f64;

        println!("{},{:.3},{:.2}", steps, run_s * 1000.0, run_s * 1e9 / steps as f64);
    }

    Ok(())
}
