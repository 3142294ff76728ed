//! Strided downsampling of a finished run for plotting

use std::num::NonZeroUsize;

use super::states::RunSeries;

/// `series[0], series[k], series[2k], ...`
pub fn downsample(series: &[f64], stride: NonZeroUsize) -> Vec<f64> {
    series.iter().step_by(stride.get()).copied().collect()
}

/// Every series of a run reduced by the same stride
///
/// All fields have the same length. The trajectory drops its final entry
/// before striding so each position lines up with the instant it was
/// sampled at.
#[derive(Debug, Clone, PartialEq)]
pub struct Downsampled {
    pub time: Vec<f64>,
    pub positions: Vec<f64>,
    pub pressures_front: Vec<f64>,
    pub pressures_back: Vec<f64>,
    pub net_forces: Vec<f64>,
}

impl Downsampled {
    pub fn from_run(run: &RunSeries, stride: NonZeroUsize) -> Self {
        let aligned = &run.positions[..run.positions.len().saturating_sub(1)];

        Self {
            time: downsample(&run.time, stride),
            positions: downsample(aligned, stride),
            pressures_front: downsample(&run.pressures_front, stride),
            pressures_back: downsample(&run.pressures_back, stride),
            net_forces: downsample(&run.net_forces, stride),
        }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}
