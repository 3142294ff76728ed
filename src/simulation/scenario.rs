//! Build fully-initialized levitation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - numerical and physical parameters (`Parameters`)
//! - the cube's initial state (`Cube`)
//! - the force model (`PressureDifferential` over a `ParabolicField`)

use std::num::NonZeroUsize;

use crate::configuration::config::{ConfigError, ScenarioConfig};
use crate::simulation::field::ParabolicField;
use crate::simulation::forces::PressureDifferential;
use crate::simulation::integrator::integrate;
use crate::simulation::params::Parameters;
use crate::simulation::series::Downsampled;
use crate::simulation::states::{Cube, RunSeries};

/// Runtime bundle for one levitation run
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub cube: Cube,
    pub forces: PressureDifferential<ParabolicField>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        let downsample_factor =
            NonZeroUsize::new(cfg.plot.downsample_factor).ok_or(ConfigError::ZeroDownsample)?;

        // Parameters (runtime) from ParametersConfig + CubeConfig
        let p_cfg = cfg.parameters;
        let c_cfg = cfg.cube;
        let parameters = Parameters {
            frequency: p_cfg.frequency,
            amplitude: p_cfg.amplitude,
            speed_of_sound: p_cfg.speed_of_sound,
            density: p_cfg.density,
            cube_mass: c_cfg.mass,
            cube_area: c_cfg.area,
            cube_width: c_cfg.width,
            time_duration: p_cfg.time_duration,
            time_steps: p_cfg.time_steps,
            downsample_factor,
        };

        // Initial cube state at t = 0
        let cube = Cube {
            x: c_cfg.x,
            v: c_cfg.v,
        };

        let forces = PressureDifferential::new(
            ParabolicField::from_parameters(&parameters),
            parameters.cube_width,
            parameters.cube_area,
        );

        Ok(Self {
            parameters,
            cube,
            forces,
        })
    }

    /// Integrate from the initial state; the scenario itself is not modified
    pub fn run(&self) -> RunSeries {
        let mut cube = self.cube;
        integrate(&mut cube, &self.forces, &self.parameters)
    }

    /// Reduce a finished run with the configured stride
    pub fn downsample(&self, run: &RunSeries) -> Downsampled {
        Downsampled::from_run(run, self.parameters.downsample_factor)
    }
}
