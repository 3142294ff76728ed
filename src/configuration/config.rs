//! Configuration types for loading levitation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – field constants and time grid
//! - [`CubeConfig`]       – cube geometry, mass and initial state
//! - [`PlotConfig`]       – presentation settings
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   frequency: 80000.0      # driving frequency (Hz)
//!   amplitude: 0.05         # pressure amplitude (Pa)
//!   speed_of_sound: 343.0   # m/s
//!   density: 2.0            # medium density (kg/m^3)
//!   time_duration: 0.005    # total simulated time (s)
//!   time_steps: 100000
//!
//! cube:
//!   mass: 0.05              # kg
//!   area: 0.0001            # cross-sectional area (m^2)
//!   width: 0.002            # m
//!   x: 0.0                  # initial position (m)
//!   v: 0.001                # initial velocity (m/s)
//!
//! plot:
//!   downsample_factor: 100
//! ```
//!
//! Every section may be omitted, in which case the reference constants from
//! [`ScenarioConfig::default`] are used.

use serde::Deserialize;
use thiserror::Error;

/// Rejected scenario values
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("time_steps must be at least 1")]
    NoTimeSteps,

    #[error("downsample_factor must be at least 1")]
    ZeroDownsample,
}

/// Field constants and time grid
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub frequency: f64,      // driving frequency (Hz)
    pub amplitude: f64,      // pressure amplitude (Pa)
    pub speed_of_sound: f64, // m/s
    pub density: f64,        // kg/m^3, carried but not used by the parabolic field
    pub time_duration: f64,  // s
    pub time_steps: usize,   // number of integration steps
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            frequency: 80e3,
            amplitude: 0.05,
            speed_of_sound: 343.0,
            density: 2.0,
            time_duration: 0.005,
            time_steps: 100_000,
        }
    }
}

/// Cube geometry, mass and initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CubeConfig {
    pub mass: f64,  // kg
    pub area: f64,  // m^2
    pub width: f64, // m
    pub x: f64,     // initial position (m)
    pub v: f64,     // initial velocity (m/s), held constant by the integrator
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            mass: 0.05,
            area: 0.0001,
            width: 0.002,
            x: 0.0,
            v: 0.001,
        }
    }
}

/// Presentation settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlotConfig {
    pub downsample_factor: usize, // keep every n-th sample when plotting
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            downsample_factor: 100,
        }
    }
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub cube: CubeConfig,
    pub plot: PlotConfig,
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Check every value the runtime relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.parameters;
        let c = &self.cube;

        for (field, value) in [
            ("frequency", p.frequency),
            ("speed_of_sound", p.speed_of_sound),
            ("time_duration", p.time_duration),
            ("mass", c.mass),
            ("area", c.area),
            ("width", c.width),
        ] {
            positive(field, value)?;
        }

        for (field, value) in [
            ("amplitude", p.amplitude),
            ("density", p.density),
            ("x", c.x),
            ("v", c.v),
        ] {
            finite(field, value)?;
        }

        if p.time_steps == 0 {
            return Err(ConfigError::NoTimeSteps);
        }
        if self.plot.downsample_factor == 0 {
            return Err(ConfigError::ZeroDownsample);
        }

        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
