pub mod states;
pub mod params;
pub mod field;
pub mod forces;
pub mod integrator;
pub mod series;
pub mod scenario;
