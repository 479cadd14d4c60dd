//! Field sources and their superposition.
use serde::Deserialize;
use tracing::debug;

use crate::error::FieldError;
use crate::field::VectorField;
use crate::mesh::Filaments;

use super::biotsavart::flux_density_biot_savart;
use super::circular_filament::CircularLoop;
use super::linear_filament::StraightWire;

/// Anything that produces a B-field at a set of observation points
/// from a fixed set of discrete current elements.
pub trait FieldSource {
    /// (T) Field at the observation points `xyzp`, one vector per point.
    fn flux_density(&self, xyzp: (&[f64], &[f64], &[f64])) -> Result<VectorField, FieldError>;

    /// (m) The discrete current elements the field is summed over.
    fn filaments(&self) -> Filaments;

    /// (A) Current carried by every element.
    fn current(&self) -> f64;
}

impl FieldSource for StraightWire {
    fn flux_density(&self, xyzp: (&[f64], &[f64], &[f64])) -> Result<VectorField, FieldError> {
        StraightWire::flux_density(self, xyzp)
    }

    fn filaments(&self) -> Filaments {
        StraightWire::filaments(self)
    }

    fn current(&self) -> f64 {
        self.current
    }
}

impl FieldSource for CircularLoop {
    fn flux_density(&self, xyzp: (&[f64], &[f64], &[f64])) -> Result<VectorField, FieldError> {
        CircularLoop::flux_density(self, xyzp)
    }

    fn filaments(&self) -> Filaments {
        CircularLoop::filaments(self)
    }

    fn current(&self) -> f64 {
        self.current
    }
}

/// One of the supported source geometries, as read from a scenario file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    Wire(StraightWire),
    Loop(CircularLoop),
}

impl Source {
    /// Short human-readable label.
    pub fn label(&self) -> String {
        match self {
            Source::Wire(w) => format!("wire (I={} A, L={} m, N={})", w.current, w.length, w.segments),
            Source::Loop(l) => format!("loop (I={} A, a={} m, N={})", l.current, l.radius, l.segments),
        }
    }
}

impl From<StraightWire> for Source {
    fn from(value: StraightWire) -> Self {
        Source::Wire(value)
    }
}

impl From<CircularLoop> for Source {
    fn from(value: CircularLoop) -> Self {
        Source::Loop(value)
    }
}

impl FieldSource for Source {
    fn flux_density(&self, xyzp: (&[f64], &[f64], &[f64])) -> Result<VectorField, FieldError> {
        match self {
            Source::Wire(w) => w.flux_density(xyzp),
            Source::Loop(l) => l.flux_density(xyzp),
        }
    }

    fn filaments(&self) -> Filaments {
        match self {
            Source::Wire(w) => w.filaments(),
            Source::Loop(l) => l.filaments(),
        }
    }

    fn current(&self) -> f64 {
        match self {
            Source::Wire(w) => w.current,
            Source::Loop(l) => l.current,
        }
    }
}

/// (T) Total field of several sources at the same observation points,
/// as the pointwise sum of each source's independently computed field.
///
/// No sources gives an all-zero field.
pub fn superpose<S: FieldSource + ?Sized>(
    sources: &[&S],
    xyzp: (&[f64], &[f64], &[f64]),
) -> Result<VectorField, FieldError> {
    debug!(nsources = sources.len(), npoints = xyzp.0.len(), "superposing sources");
    let mut total = VectorField::zeros(xyzp.0.len());
    for source in sources {
        total.try_add_assign(&source.flux_density(xyzp)?)?;
    }
    Ok(total)
}

/// (T) Total field of several sources evaluated as one combined set of current elements.
///
/// Agrees with [`superpose`] up to floating-point summation order.
pub fn flux_density_combined<S: FieldSource + ?Sized>(
    sources: &[&S],
    xyzp: (&[f64], &[f64], &[f64]),
) -> Result<VectorField, FieldError> {
    let mut fils = Filaments::default();
    let mut ifil = Vec::new();
    for source in sources {
        let f = source.filaments();
        ifil.extend(std::iter::repeat(source.current()).take(f.len()));
        fils.extend(&f);
    }

    let mut total = VectorField::zeros(xyzp.0.len());
    flux_density_biot_savart(xyzp, fils.xyz(), fils.dlxyz(), &ifil, total.as_mut_slices())?;
    Ok(total)
}
