use std::num::NonZeroUsize;

use levsim::configuration::config::ScenarioConfig;
use levsim::simulation::field::{ParabolicField, PressureField};
use levsim::simulation::forces::PressureDifferential;
use levsim::simulation::integrator::{integrate, lookahead_step};
use levsim::simulation::scenario::Scenario;
use levsim::simulation::series::{downsample, Downsampled};
use levsim::simulation::states::Cube;

/// The 80 kHz reference run from the built-in constants
pub fn reference_scenario() -> Scenario {
    Scenario::build_scenario(ScenarioConfig::default()).unwrap()
}

/// Reference scenario with a shorter time grid
pub fn short_scenario(time_steps: usize, downsample_factor: usize) -> Scenario {
    let mut cfg = ScenarioConfig::default();
    cfg.parameters.time_steps = time_steps;
    cfg.plot.downsample_factor = downsample_factor;
    Scenario::build_scenario(cfg).unwrap()
}

/// Sample points spanning a few wavelengths and the whole run
pub fn sample_points() -> Vec<(f64, f64)> {
    let xs = [-0.01, -0.0021, 0.0, 0.00107, 0.003, 0.02];
    let ts = [0.0, 0.0007, 0.0025, 0.0041, 0.005, 0.009];
    xs.iter().flat_map(|&x| ts.iter().map(move |&t| (x, t))).collect()
}

fn close(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(f64::MIN_POSITIVE)
}

// ==================================================================================
// Pressure field tests
// ==================================================================================

#[test]
fn field_coefficients_follow_wavelength() {
    let s = reference_scenario();
    let f = s.forces.field;
    let half = s.parameters.wavelength() / 2.0;

    assert!(close(f.a, -0.05 / (half * half), 1e-15));
    assert!(close(f.b, 0.05 / half, 1e-15));
    assert!(f.a <= 0.0);
}

#[test]
fn spatial_part_is_time_independent() {
    let f = reference_scenario().forces.field;

    for (x, t) in sample_points() {
        let spatial = f.pressure(x, t) - f.offset(t);
        let expected = f.a * x * x + f.b * x;
        assert!(
            (spatial - expected).abs() < 1e-12,
            "x = {x}, t = {t}: {spatial} vs {expected}"
        );
    }
}

#[test]
fn pressure_is_continuous() {
    let f = reference_scenario().forces.field;
    let h = 1e-9;

    for (x, t) in sample_points() {
        let p = f.pressure(x, t);
        assert!((f.pressure(x + h, t) - p).abs() < 1e-3, "jump in x at ({x}, {t})");
        assert!((f.pressure(x, t + h) - p).abs() < 1e-3, "jump in t at ({x}, {t})");
    }
}

#[test]
fn offset_is_exactly_one_at_midpoint() {
    let s = reference_scenario();
    let mid = s.parameters.time_duration / 2.0;

    assert_eq!(s.forces.field.offset(mid), 1.0);
    assert!(s.forces.field.offset(0.0) > 1.0);
    assert!(s.forces.field.offset(s.parameters.time_duration) < 1.0);
}

// ==================================================================================
// Net force tests
// ==================================================================================

#[test]
fn net_force_is_back_minus_front_times_area() {
    let s = reference_scenario();
    let w = s.parameters.cube_width;
    let area = s.parameters.cube_area;
    let f = &s.forces;

    for (x, t) in sample_points() {
        let expected = (f.field.pressure(x - w / 2.0, t) - f.field.pressure(x + w / 2.0, t)) * area;
        let got = f.net_force(x, t);
        assert!((got - expected).abs() < 1e-18, "x = {x}, t = {t}: {got} vs {expected}");
    }
}

#[test]
fn probe_reports_the_faces_it_used() {
    let s = reference_scenario();
    let w = s.parameters.cube_width;
    let sample = s.forces.probe(0.001, 0.002);

    assert_eq!(sample.pressure_front, s.forces.field.pressure(0.001 + w / 2.0, 0.002));
    assert_eq!(sample.pressure_back, s.forces.field.pressure(0.001 - w / 2.0, 0.002));
    assert_eq!(sample.force, s.forces.net_force(0.001, 0.002));
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn reference_first_step() {
    let s = reference_scenario();
    let p = &s.parameters;
    let dt = p.dt();
    assert!((dt - 5e-8).abs() < 1e-22);

    let run = s.run();

    // F(0, 0) = -B * width * area = -(0.05 / 0.00214375) * 0.002 * 0.0001
    let f0 = s.forces.net_force(0.0, 0.0);
    assert_eq!(run.net_forces[0], f0);
    assert!(close(f0, -4.664723032069973e-6, 1e-12), "F(0, 0) = {f0}");

    let x1 = 0.0 + s.cube.v * dt + 0.5 * (f0 / p.cube_mass) * dt * dt;
    assert_eq!(run.positions[0], 0.0);
    assert!(close(run.positions[1], x1, 1e-15), "x[1] = {} vs {x1}", run.positions[1]);
}

#[test]
fn series_lengths_after_run() {
    let s = short_scenario(1234, 10);
    let run = s.run();

    assert_eq!(run.time.len(), 1234);
    assert_eq!(run.positions.len(), 1234 + 1);
    assert_eq!(run.pressures_front.len(), 1234);
    assert_eq!(run.pressures_back.len(), 1234);
    assert_eq!(run.net_forces.len(), 1234);
    assert_eq!(run.steps(), 1234);
}

#[test]
fn time_grid_spans_duration() {
    let s = short_scenario(1000, 10);
    let grid = s.parameters.time_grid();

    assert_eq!(grid.len(), 1000);
    assert_eq!(grid[0], 0.0);
    assert_eq!(grid[999], s.parameters.time_duration);
    assert!(grid.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn velocity_is_never_updated() {
    let s = short_scenario(500, 10);
    let mut cube = s.cube;
    let run = integrate(&mut cube, &s.forces, &s.parameters);
    let dt = s.parameters.dt();

    assert_eq!(cube.v, s.cube.v);
    assert_eq!(cube.x, run.last_position());

    // every step: x_n+1 - x_n = v dt + 1/2 (F_n / m) dt^2 with the same v
    for n in 0..run.steps() {
        let a = run.net_forces[n] / s.parameters.cube_mass;
        let dx = run.positions[n + 1] - run.positions[n];
        let expected = s.cube.v * dt + 0.5 * a * dt * dt;
        assert!((dx - expected).abs() < 1e-18, "step {n}: {dx} vs {expected}");
    }
}

#[test]
fn lookahead_step_without_force_drifts_at_constant_velocity() {
    let field = ParabolicField {
        a: 0.0,
        b: 0.0,
        amplitude: 0.0,
        half_duration: 1.0,
    };
    let forces = PressureDifferential::new(field, 0.002, 1e-4);
    let mut cube = Cube { x: 1.0, v: 2.0 };

    let sample = lookahead_step(&mut cube, &forces, 0.05, 0.0, 0.5);

    assert_eq!(sample.force, 0.0);
    assert_eq!(cube, Cube { x: 2.0, v: 2.0 });
}

#[test]
fn runs_are_deterministic() {
    let s = short_scenario(5000, 7);
    let a = s.run();
    let b = s.run();

    assert_eq!(a, b);
    assert_eq!(s.cube.x, 0.0, "running must not move the scenario's cube");
}

#[test]
fn summary_bounds_every_value() {
    let run = short_scenario(2000, 10).run();
    let sm = run.summary;

    for &x in &run.positions[1..] {
        assert!(sm.position.min <= x && x <= sm.position.max);
    }
    for &f in &run.net_forces {
        assert!(sm.net_force.min <= f && f <= sm.net_force.max);
    }
    assert!(run.pressures_front.contains(&sm.pressure_front.max));
    assert!(run.pressures_back.contains(&sm.pressure_back.min));
    assert!(sm.position.span() > 0.0);
}

// ==================================================================================
// Downsampling tests
// ==================================================================================

#[test]
fn downsampled_lengths_and_entries() {
    let s = short_scenario(1050, 100);
    let run = s.run();
    let ds = s.downsample(&run);

    // ceil(1050 / 100)
    assert_eq!(ds.len(), 11);
    assert_eq!(ds.positions.len(), 11);
    assert_eq!(ds.pressures_front.len(), 11);
    assert_eq!(ds.pressures_back.len(), 11);
    assert_eq!(ds.net_forces.len(), 11);

    for i in 0..ds.len() {
        assert_eq!(ds.time[i], run.time[i * 100]);
        assert_eq!(ds.positions[i], run.positions[i * 100]);
        assert_eq!(ds.net_forces[i], run.net_forces[i * 100]);
    }
}

#[test]
fn trajectory_drops_final_entry_before_striding() {
    // 10 steps -> 11 positions; stride 5 must give 2 positions, not 3
    let s = short_scenario(10, 5);
    let run = s.run();
    let ds = Downsampled::from_run(&run, NonZeroUsize::new(5).unwrap());

    assert_eq!(ds.time.len(), 2);
    assert_eq!(ds.positions, vec![run.positions[0], run.positions[5]]);
}

#[test]
fn reference_downsample_has_one_thousand_points() {
    let s = reference_scenario();
    let run = s.run();
    let ds = s.downsample(&run);
    assert_eq!(ds.len(), 1000);
    assert_eq!(downsample(&run.net_forces, NonZeroUsize::new(100).unwrap()), ds.net_forces);
}

// ==================================================================================
// Scenario loading tests
// ==================================================================================

#[test]
fn bundled_default_yaml_matches_builtin() {
    let cfg = ScenarioConfig::from_yaml_str(include_str!("../scenarios/default.yaml")).unwrap();
    assert_eq!(cfg, ScenarioConfig::default());
}

#[test]
fn invalid_scenario_is_rejected() {
    let mut cfg = ScenarioConfig::default();
    cfg.cube.width = -0.002;
    assert!(Scenario::build_scenario(cfg).is_err());
}

#[test]
fn frequency_label_for_titles() {
    assert_eq!(reference_scenario().parameters.frequency_label(), "80kHz");
}
