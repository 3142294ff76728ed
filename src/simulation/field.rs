//! Acoustic pressure fields
//!
//! The only field used by the engine is [`ParabolicField`]: a downward parabola
//! in space whose constant term is itself a downward parabola in time. The
//! constant term peaks at `t = 0`, falls through exactly 1 Pa at the midpoint
//! of the run and keeps falling until the end.

use super::params::Parameters;

/// Instantaneous acoustic pressure at a point
pub trait PressureField {
    /// Pressure (Pa) at position `x` (m) and time `t` (s)
    fn pressure(&self, x: f64, t: f64) -> f64;
}

/// `p(x, t) = A*x^2 + B*x + C(t)`
///
/// - `A = -amplitude / (wavelength/2)^2`
/// - `B = amplitude / (wavelength/2)`
/// - `C(t) = amplitude * (1 - (t / (duration/2))^2) + 1`
///
/// The source model passed a phase offset for the back face probe that was
/// never applied; this field has no offset input and both faces are sampled
/// the same way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParabolicField {
    pub a: f64, // quadratic coefficient (Pa/m^2), never positive
    pub b: f64, // linear coefficient (Pa/m)
    pub amplitude: f64, // Pa
    pub half_duration: f64, // s, where C(t) == 1
}

impl ParabolicField {
    pub fn new(amplitude: f64, wavelength: f64, time_duration: f64) -> Self {
        let half_wavelength = wavelength / 2.0;
        Self {
            a: -amplitude / (half_wavelength * half_wavelength),
            b: amplitude / half_wavelength,
            amplitude,
            half_duration: time_duration / 2.0,
        }
    }

    pub fn from_parameters(p: &Parameters) -> Self {
        Self::new(p.amplitude, p.wavelength(), p.time_duration)
    }

    /// Time independent part, `A*x^2 + B*x`
    pub fn spatial(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x
    }

    /// Time varying constant term `C(t)`
    pub fn offset(&self, t: f64) -> f64 {
        let ratio = t / self.half_duration;
        self.amplitude * (1.0 - ratio * ratio) + 1.0
    }
}

impl PressureField for ParabolicField {
    fn pressure(&self, x: f64, t: f64) -> f64 {
        self.spatial(x) + self.offset(t)
    }
}
