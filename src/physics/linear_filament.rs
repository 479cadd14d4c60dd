//! Magnetics calculations for a finite straight current filament.
use serde::Deserialize;
use tracing::debug;

use crate::error::FieldError;
use crate::field::VectorField;
use crate::mesh::{discretize_straight_wire, straight_wire_element, Filaments};

use super::biotsavart::flux_density_parametric;

/// B-field of a finite straight wire on the z-axis, approximated by a sum over
/// `n` discrete current elements.
///
/// # Arguments
///
/// * `current`: (A) wire current, flowing toward +z when positive
/// * `length`:  (m) wire length; the wire spans z = -length/2 to +length/2
/// * `n`:       number of elements, at least 2 for a meaningful result
/// * `xyzp`:    (m) observation point coords, each length `m`
///
/// # Commentary
///
/// Samples the wire at `n` evenly spaced points including both ends and gives every
/// sample the same length element `(0, 0, dz)`. This is a first-order rule: the sum
/// covers one `dz` more wire than `length`, and the error shrinks as `1/n`.
/// With `n = 1` the spacing is zero and so is the field (or NaN at a sample point);
/// that case is the caller's to avoid.
///
/// Observation points lying on a sample point produce non-finite values.
pub fn field_of_wire(
    current: f64,
    length: f64,
    n: usize,
    xyzp: (&[f64], &[f64], &[f64]),
) -> Result<VectorField, FieldError> {
    debug!(current, length, n, npoints = xyzp.0.len(), "straight wire field");
    flux_density_parametric(current, n, straight_wire_element(length, n), xyzp)
}

/// A finite straight wire centered on the origin along the z-axis.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StraightWire {
    /// (A) signed current, toward +z when positive
    pub current: f64,
    /// (m) total length
    pub length: f64,
    /// number of discrete elements
    pub segments: usize,
}

impl StraightWire {
    pub fn new(current: f64, length: f64, segments: usize) -> Self {
        Self {
            current,
            length,
            segments,
        }
    }

    /// (T) Field at the observation points; see [`field_of_wire`].
    pub fn flux_density(&self, xyzp: (&[f64], &[f64], &[f64])) -> Result<VectorField, FieldError> {
        field_of_wire(self.current, self.length, self.segments, xyzp)
    }

    /// The current elements the field is summed over.
    pub fn filaments(&self) -> Filaments {
        discretize_straight_wire(self.length, self.segments)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::physics::analytic::{flux_density_finite_wire, flux_density_infinite_wire};

    #[test]
    fn long_wire_approaches_infinite_wire() {
        let (current, length, n, r) = (10.0, 20.0, 10_000, 0.1);
        let b = field_of_wire(current, length, n, (&[r], &[0.0], &[0.0])).unwrap();

        let expected = flux_density_infinite_wire(current, r);
        assert_relative_eq!(expected, 2.0e-5, max_relative = 1e-12);
        assert_relative_eq!(b.vector(0).norm(), expected, max_relative = 0.01);

        // Right-hand rule: +z current seen from +x circulates toward +y
        assert!(b.x[0].abs() < 1e-12);
        assert!(b.y[0] > 0.0);
        assert!(b.z[0].abs() < 1e-12);
    }

    #[test]
    fn short_wire_tracks_finite_closed_form() {
        let (current, length, n) = (3.0, 1.0, 20_001);
        let (rho, z) = (0.4, 0.3);
        let b = field_of_wire(current, length, n, (&[0.0], &[rho], &[z])).unwrap();

        // At (0, rho, z) the azimuthal direction is -x
        let expected = flux_density_finite_wire(current, length, rho, z);
        assert_relative_eq!(-b.x[0], expected, max_relative = 1e-3);
        assert!(b.y[0].abs() < 1e-15);
        assert!(b.z[0].abs() < 1e-15);
    }

    #[test]
    fn reversing_current_reverses_field() {
        let pts = (&[0.2, -0.5][..], &[0.1, 0.3][..], &[0.0, 0.4][..]);
        let fwd = field_of_wire(1.5, 2.0, 50, pts).unwrap();
        let rev = field_of_wire(-1.5, 2.0, 50, pts).unwrap();
        assert_eq!(&fwd * -1.0, rev);
    }

    #[test]
    fn single_segment_has_no_length() {
        let b = field_of_wire(1.0, 2.0, 1, (&[1.0], &[0.0], &[0.0])).unwrap();
        assert_eq!(b, VectorField::zeros(1));
    }

    #[test]
    fn point_on_a_sample_is_not_finite() {
        // n = 3 puts a sample at the origin
        let b = field_of_wire(1.0, 2.0, 3, (&[0.0, 1.0], &[0.0, 0.0], &[0.0, 0.0])).unwrap();
        assert!(!b.x[0].is_finite() || !b.y[0].is_finite() || !b.z[0].is_finite());
        assert!(b.y[1].is_finite());
    }

    #[test]
    fn descriptor_matches_free_function() {
        let wire = StraightWire::new(2.0, 1.0, 64);
        let pts = (&[0.5][..], &[0.5][..], &[0.5][..]);
        assert_eq!(
            wire.flux_density(pts).unwrap(),
            field_of_wire(2.0, 1.0, 64, pts).unwrap()
        );
        assert_eq!(wire.filaments().len(), 64);
    }
}
