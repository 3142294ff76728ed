//! Net acoustic force on the cube
//!
//! The cube sees the field at two probes, its front face at `x + width/2` and
//! its back face at `x - width/2`. The pressure difference across the faces,
//! times the face area, is the only force acting on it.

use super::field::PressureField;

/// Pressures at both faces and the resulting force at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceSample {
    pub pressure_front: f64, // Pa at x + width/2
    pub pressure_back: f64, // Pa at x - width/2
    pub force: f64, // N, positive pushes toward +x
}

/// Pressure differential force for a cube of given width and face area
#[derive(Debug, Clone)]
pub struct PressureDifferential<F: PressureField> {
    pub field: F,
    pub width: f64, // m
    pub area: f64, // m^2
}

impl<F: PressureField> PressureDifferential<F> {
    pub fn new(field: F, width: f64, area: f64) -> Self {
        Self { field, width, area }
    }

    /// Sample both faces at position `x` and time `t`
    pub fn probe(&self, x: f64, t: f64) -> FaceSample {
        let half_width = self.width / 2.0;
        let pressure_front = self.field.pressure(x + half_width, t);
        let pressure_back = self.field.pressure(x - half_width, t);

        FaceSample {
            pressure_front,
            pressure_back,
            // back minus front: higher pressure behind pushes forward
            force: (pressure_back - pressure_front) * self.area,
        }
    }

    /// `(p(x - w/2, t) - p(x + w/2, t)) * area`
    pub fn net_force(&self, x: f64, t: f64) -> f64 {
        self.probe(x, t).force
    }
}
