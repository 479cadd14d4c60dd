//! Container for a vector field sampled at an ordered set of observation points.
use core::ops::{Add, AddAssign, Mul};

use nalgebra::Vector3;

use crate::error::FieldError;
use crate::math::rss3;

/// (T) One field vector per observation point, stored as three component arrays
/// in the same order as the points that produced it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VectorField {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl VectorField {
    /// All-zero field for `n` observation points; the starting accumulator for every sum.
    pub fn zeros(n: usize) -> Self {
        Self {
            x: vec![0.0; n],
            y: vec![0.0; n],
            z: vec![0.0; n],
        }
    }

    /// Wrap existing component arrays.
    pub fn from_components(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self, FieldError> {
        if y.len() != x.len() || z.len() != x.len() {
            return Err(FieldError::LengthMismatch("field components"));
        }
        Ok(Self { x, y, z })
    }

    /// Number of observation points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Field vector at point `i`.
    ///
    /// # Panics
    ///
    /// If `i` is out of bounds.
    pub fn vector(&self, i: usize) -> Vector3<f64> {
        Vector3::new(self.x[i], self.y[i], self.z[i])
    }

    /// (T) Field magnitude at every point.
    pub fn magnitude(&self) -> Vec<f64> {
        self.x
            .iter()
            .zip(self.y.iter())
            .zip(self.z.iter())
            .map(|((bx, by), bz)| rss3(*bx, *by, *bz))
            .collect()
    }

    /// (T) Largest finite magnitude in the field, or 0 if there is none.
    pub fn max_magnitude(&self) -> f64 {
        self.magnitude()
            .into_iter()
            .filter(|b| b.is_finite())
            .fold(0.0, f64::max)
    }

    /// Whether every component of every vector is finite.
    pub fn is_finite(&self) -> bool {
        self.x
            .iter()
            .chain(self.y.iter())
            .chain(self.z.iter())
            .all(|v| v.is_finite())
    }

    /// Mutable view of the components in the `(x, y, z)` output form the kernels accumulate into.
    pub fn as_mut_slices(&mut self) -> (&mut [f64], &mut [f64], &mut [f64]) {
        (&mut self.x, &mut self.y, &mut self.z)
    }

    /// Pointwise sum with another field over the same points.
    pub fn try_add(&self, other: &Self) -> Result<Self, FieldError> {
        let mut out = self.clone();
        out.try_add_assign(other)?;
        Ok(out)
    }

    /// In-place pointwise sum with another field over the same points.
    pub fn try_add_assign(&mut self, other: &Self) -> Result<(), FieldError> {
        if other.len() != self.len() {
            return Err(FieldError::LengthMismatch(
                "superposed fields must share observation points",
            ));
        }
        for (a, b) in self.x.iter_mut().zip(other.x.iter()) {
            *a += b;
        }
        for (a, b) in self.y.iter_mut().zip(other.y.iter()) {
            *a += b;
        }
        for (a, b) in self.z.iter_mut().zip(other.z.iter()) {
            *a += b;
        }
        Ok(())
    }
}

/// Pointwise sum.
///
/// # Panics
///
/// If the two fields were evaluated at different numbers of points;
/// use [`VectorField::try_add`] when that is not known in advance.
impl Add for &VectorField {
    type Output = VectorField;

    fn add(self, rhs: &VectorField) -> VectorField {
        match self.try_add(rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("{e}"),
        }
    }
}

impl AddAssign<&VectorField> for VectorField {
    fn add_assign(&mut self, rhs: &VectorField) {
        if let Err(e) = self.try_add_assign(rhs) {
            panic!("{e}");
        }
    }
}

impl Mul<f64> for &VectorField {
    type Output = VectorField;

    fn mul(self, rhs: f64) -> VectorField {
        let scale = |v: &[f64]| -> Vec<f64> { v.iter().map(|c| c * rhs).collect() };
        VectorField {
            x: scale(&self.x),
            y: scale(&self.y),
            z: scale(&self.z),
        }
    }
}
