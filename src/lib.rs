//! Magnetic flux density of straight wires and circular loops from a
//! discretized Biot-Savart sum, with the glue needed to put those fields
//! on a grid, export them and draw them.

pub mod config;
pub mod error;
pub mod export;
pub mod field;
pub mod math;
pub mod mesh;
pub mod physics;
pub mod plot;

pub use error::FieldError;
pub use field::VectorField;
pub use physics::{
    field_of_loop, field_of_wire, superpose, CircularLoop, FieldSource, LoopSampling, Source,
    StraightWire,
};

/// (H/m) vacuum magnetic permeability, using the exact pre-2019 SI value of 4π×10⁻⁷.
pub const MU_0: f64 = 4e-7 * core::f64::consts::PI; // [H/m]

/// (H/m) Recurring constant multiple of `mu_0`.
/// Written as a literal rather than `MU_0 / 4π` to avoid a round trip through pi.
pub const MU0_OVER_4PI: f64 = 1e-7; // [H/m]
