//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - driving wave (frequency, amplitude, speed of sound, density),
//! - cube mass, face area and width,
//! - total duration and step count of the time grid,
//! - plotting stride

use std::f64::consts::PI;
use std::num::NonZeroUsize;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub frequency: f64, // driving frequency (Hz)
    pub amplitude: f64, // pressure amplitude (Pa)
    pub speed_of_sound: f64, // m/s
    pub density: f64, // medium density (kg/m^3)
    pub cube_mass: f64, // kg
    pub cube_area: f64, // m^2
    pub cube_width: f64, // m
    pub time_duration: f64, // total simulated time (s)
    pub time_steps: usize, // integration steps
    pub downsample_factor: NonZeroUsize, // plotting stride
}

impl Parameters {
    /// Spatial period of the driving wave
    pub fn wavelength(&self) -> f64 {
        self.speed_of_sound / self.frequency
    }

    /// Integration step, `time_duration / time_steps`
    pub fn dt(&self) -> f64 {
        self.time_duration / self.time_steps as f64
    }

    pub fn angular_frequency(&self) -> f64 {
        2.0 * PI * self.frequency
    }

    pub fn wave_number(&self) -> f64 {
        2.0 * PI / self.wavelength()
    }

    /// `time_steps` evenly spaced instants from 0 to `time_duration` inclusive
    ///
    /// The grid spacing is `time_duration / (time_steps - 1)`, which differs
    /// slightly from [`Parameters::dt`]; the integrator samples the field on
    /// this grid but advances the cube by `dt`.
    pub fn time_grid(&self) -> Vec<f64> {
        linspace(0.0, self.time_duration, self.time_steps)
    }

    /// Label used in plot titles, e.g. `80kHz`
    pub fn frequency_label(&self) -> String {
        format!("{:.0}kHz", self.frequency / 1000.0)
    }
}

/// `n` evenly spaced samples over `[start, stop]`, endpoint included
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut grid: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            // pin the endpoint so rounding never overshoots
            grid[n - 1] = stop;
            grid
        }
    }
}
