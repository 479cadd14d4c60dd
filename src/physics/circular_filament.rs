//! Magnetics calculations for a circular current filament.
use serde::Deserialize;
use tracing::debug;

use crate::error::FieldError;
use crate::field::VectorField;
use crate::mesh::{circular_loop_element, discretize_circular_loop, Filaments, LoopSampling};

use super::biotsavart::flux_density_parametric;

/// B-field of a circular loop in the z=0 plane, centered on the origin, approximated
/// by a sum over `n` discrete current elements.
///
/// # Arguments
///
/// * `current`: (A) loop current, counter-clockwise seen from +z when positive
/// * `radius`:  (m) loop radius
/// * `n`:       number of elements, at least 2 for a meaningful result
/// * `xyzp`:    (m) observation point coords, each length `m`
///
/// # Commentary
///
/// The angle is sampled at `n` evenly spaced values on `[0, 2π]` with both ends included,
/// so the element at θ=0 is counted twice and the result carries a relative error
/// of about `1/n`. Use [`field_of_loop_sampled`]
/// with [`LoopSampling::Periodic`] to count every element once.
pub fn field_of_loop(
    current: f64,
    radius: f64,
    n: usize,
    xyzp: (&[f64], &[f64], &[f64]),
) -> Result<VectorField, FieldError> {
    field_of_loop_sampled(current, radius, n, LoopSampling::EndpointInclusive, xyzp)
}

/// [`field_of_loop`] with a choice of angular sampling.
pub fn field_of_loop_sampled(
    current: f64,
    radius: f64,
    n: usize,
    sampling: LoopSampling,
    xyzp: (&[f64], &[f64], &[f64]),
) -> Result<VectorField, FieldError> {
    debug!(
        current,
        radius,
        n,
        ?sampling,
        npoints = xyzp.0.len(),
        "circular loop field"
    );
    flux_density_parametric(
        current,
        n,
        circular_loop_element(radius, n, sampling),
        xyzp,
    )
}

/// A circular loop centered on the origin in the z=0 plane.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CircularLoop {
    /// (A) signed current, counter-clockwise seen from +z when positive
    pub current: f64,
    /// (m) loop radius
    pub radius: f64,
    /// number of discrete elements
    pub segments: usize,
    #[serde(default)]
    pub sampling: LoopSampling,
}

impl CircularLoop {
    /// Loop with the default endpoint-inclusive sampling.
    pub fn new(current: f64, radius: f64, segments: usize) -> Self {
        Self {
            current,
            radius,
            segments,
            sampling: LoopSampling::default(),
        }
    }

    pub fn with_sampling(mut self, sampling: LoopSampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// (T) Field at the observation points; see [`field_of_loop_sampled`].
    pub fn flux_density(&self, xyzp: (&[f64], &[f64], &[f64])) -> Result<VectorField, FieldError> {
        field_of_loop_sampled(
            self.current,
            self.radius,
            self.segments,
            self.sampling,
            xyzp,
        )
    }

    /// The current elements the field is summed over.
    pub fn filaments(&self) -> Filaments {
        discretize_circular_loop(self.radius, self.segments, self.sampling)
    }
}
