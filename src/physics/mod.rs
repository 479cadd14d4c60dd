//! Electromagnetics calculations.
pub mod analytic;
pub mod biotsavart;
pub mod circular_filament;
pub mod linear_filament;
pub mod source;

pub use crate::mesh::LoopSampling;
pub use circular_filament::{field_of_loop, field_of_loop_sampled, CircularLoop};
pub use linear_filament::{field_of_wire, StraightWire};
pub use source::{flux_density_combined, superpose, FieldSource, Source};
