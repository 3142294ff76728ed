//! Core state types for the levitation run.
//!
//! - `Cube` is the integrator state: position and carried velocity
//! - `Extrema` / `RunSummary` track min/max of each series during the loop
//! - `RunSeries` owns every series produced by one pass over the time grid

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    pub x: f64, // position (m)
    pub v: f64, // velocity (m/s), never updated by acceleration
}

/// Running minimum and maximum of a series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub min: f64,
    pub max: f64,
}

impl Default for Extrema {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl Extrema {
    pub fn update(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// `max - min`, zero when nothing was recorded
    pub fn span(&self) -> f64 {
        if self.min > self.max {
            0.0
        } else {
            self.max - self.min
        }
    }
}

/// Extrema of every series, updated once per step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub position: Extrema, // new positions only, the initial condition is excluded
    pub pressure_front: Extrema,
    pub pressure_back: Extrema,
    pub net_force: Extrema,
}

/// Output of one integration pass
///
/// `positions` holds the initial condition plus one entry per step, every
/// other series holds exactly one entry per step.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSeries {
    pub time: Vec<f64>,
    pub positions: Vec<f64>,
    pub pressures_front: Vec<f64>,
    pub pressures_back: Vec<f64>,
    pub net_forces: Vec<f64>,
    pub summary: RunSummary,
}

impl RunSeries {
    /// Empty series sized for `steps` integration steps, seeded with `x0`
    pub fn with_capacity(time: Vec<f64>, x0: f64) -> Self {
        let steps = time.len();
        let mut positions = Vec::with_capacity(steps + 1);
        positions.push(x0);

        Self {
            time,
            positions,
            pressures_front: Vec::with_capacity(steps),
            pressures_back: Vec::with_capacity(steps),
            net_forces: Vec::with_capacity(steps),
            summary: RunSummary::default(),
        }
    }

    /// Number of completed steps
    pub fn steps(&self) -> usize {
        self.net_forces.len()
    }

    /// Latest position
    pub fn last_position(&self) -> f64 {
        // positions is seeded on construction and only grows
        self.positions[self.positions.len() - 1]
    }
}
