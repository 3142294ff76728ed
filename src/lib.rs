pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Cube, Extrema, RunSeries, RunSummary};
pub use simulation::params::Parameters;
pub use simulation::field::{ParabolicField, PressureField};
pub use simulation::forces::{FaceSample, PressureDifferential};
pub use simulation::integrator::{integrate, lookahead_step};
pub use simulation::series::{downsample, Downsampled};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ConfigError, CubeConfig, ParametersConfig, PlotConfig, ScenarioConfig};

pub use visualization::plots::{run_plots, PlotData};

pub use benchmark::benchmark::bench_integrator;
