//! Fixed-step time integrator for the levitated cube
//!
//! One force evaluation per step, constant-acceleration position update:
//! `x_n+1 = x_n + v*dt + 0.5*a_n*dt^2`. The carried velocity `v` is the
//! initial velocity for the whole run; acceleration moves the position but
//! never feeds back into `v`.

use super::field::PressureField;
use super::forces::{FaceSample, PressureDifferential};
use super::params::Parameters;
use super::states::{Cube, RunSeries};

/// Advance the cube by one step of size `dt`, sampling the field at time `t`
/// Returns the face pressures and force that drove the step
pub fn lookahead_step<F: PressureField>(
    cube: &mut Cube,
    forces: &PressureDifferential<F>,
    mass: f64,
    t: f64,
    dt: f64,
) -> FaceSample {
    // pressures and force at the current position x_n
    let sample = forces.probe(cube.x, t);

    // a_n = F_n / m
    let a = sample.force / mass;

    // x_n+1 = x_n + v dt + 1/2 a_n dt^2, v is left untouched
    cube.x += cube.v * dt + 0.5 * a * dt * dt;

    sample
}

/// Run the cube over the full time grid of `params`
/// The returned series are fully populated; the cube ends at the last position
pub fn integrate<F: PressureField>(
    cube: &mut Cube,
    forces: &PressureDifferential<F>,
    params: &Parameters,
) -> RunSeries {
    let dt = params.dt();
    let mut run = RunSeries::with_capacity(params.time_grid(), cube.x);

    // index loop keeps `run.time` borrowed immutably only per step
    for i in 0..run.time.len() {
        let t = run.time[i];
        let sample = lookahead_step(cube, forces, params.cube_mass, t, dt);

        run.positions.push(cube.x);
        run.pressures_front.push(sample.pressure_front);
        run.pressures_back.push(sample.pressure_back);
        run.net_forces.push(sample.force);

        run.summary.position.update(cube.x);
        run.summary.pressure_front.update(sample.pressure_front);
        run.summary.pressure_back.update(sample.pressure_back);
        run.summary.net_force.update(sample.force);
    }

    run
}
