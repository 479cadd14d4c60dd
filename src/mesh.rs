//! Discretization of sources into current elements, and observation point grids.
use core::f64::consts::PI;

use serde::Deserialize;
use tracing::debug;

use crate::error::FieldError;

/// A current element as `((x, y, z), (dlx, dly, dlz))`, both in (m).
pub type Element = ((f64, f64, f64), (f64, f64, f64));

/// `k`-th of `n` evenly spaced samples on `[start, stop]`, endpoints included.
///
/// Matches the values of [`linspace`] exactly, including the pinned final sample.
#[inline]
pub fn linspace_sample(start: f64, stop: f64, n: usize, k: usize) -> f64 {
    if n < 2 || k == 0 {
        start
    } else if k == n - 1 {
        stop
    } else {
        let step = (stop - start) / (n - 1) as f64;
        (k as f64).mul_add(step, start)
    }
}

/// `n` evenly spaced samples on `[start, stop]`, endpoints included.
/// Zero samples gives an empty vec and one sample gives `[start]`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    (0..n).map(|k| linspace_sample(start, stop, n, k)).collect()
}

/// Distance between the first two samples of [`linspace`], or 0 if there are fewer than 2.
#[inline]
pub fn linspace_step(start: f64, stop: f64, n: usize) -> f64 {
    if n < 2 {
        0.0
    } else {
        linspace_sample(start, stop, n, 1) - start
    }
}

/// How the angular parameter of a circular loop is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopSampling {
    /// `n` samples on `[0, 2π]` with both endpoints included.
    ///
    /// The element at θ=0 and the one at θ=2π sit on the same point with the same
    /// tangent, so that element is counted twice and the loop carries an extra
    /// `dθ` of arc. The relative error this introduces is about `1/n`.
    #[default]
    EndpointInclusive,
    /// `n` samples at `2πk/n`, each element counted once.
    Periodic,
}

/// Element generator for a straight wire of length `length` on the z-axis, centered
/// on the origin and pointing in +z, split into `n` elements.
///
/// Element positions are the sample points themselves, not segment midpoints,
/// and every element shares the length vector `(0, 0, dz)`.
pub fn straight_wire_element(length: f64, n: usize) -> impl Fn(usize) -> Element {
    let (z0, z1) = (-length / 2.0, length / 2.0);
    let dz = linspace_step(z0, z1, n);
    move |k| {
        let z = linspace_sample(z0, z1, n, k);
        ((0.0, 0.0, z), (0.0, 0.0, dz))
    }
}

/// Element generator for a circular loop of radius `radius` in the z=0 plane, centered
/// on the origin, counter-clockwise seen from +z, split into `n` elements.
///
/// The length element is the analytic tangent `d(position)/dθ` scaled by `dθ`.
pub fn circular_loop_element(
    radius: f64,
    n: usize,
    sampling: LoopSampling,
) -> impl Fn(usize) -> Element {
    let (dtheta, inclusive) = match sampling {
        LoopSampling::EndpointInclusive => (linspace_step(0.0, 2.0 * PI, n), true),
        LoopSampling::Periodic => (2.0 * PI / n as f64, false),
    };
    move |k| {
        let theta = if inclusive {
            linspace_sample(0.0, 2.0 * PI, n, k)
        } else {
            k as f64 * dtheta
        };
        let (s, c) = theta.sin_cos();
        (
            (radius * c, radius * s, 0.0),
            (-radius * s * dtheta, radius * c * dtheta, 0.0),
        )
    }
}

/// A discretized current path: element positions and directed length elements, each length `n`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filaments {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub dlx: Vec<f64>,
    pub dly: Vec<f64>,
    pub dlz: Vec<f64>,
}

impl Filaments {
    /// Evaluate `element` at indices `0..n`.
    pub fn from_parametrization(n: usize, element: impl Fn(usize) -> Element) -> Self {
        let mut out = Self {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
            dlx: Vec::with_capacity(n),
            dly: Vec::with_capacity(n),
            dlz: Vec::with_capacity(n),
        };
        for k in 0..n {
            let ((x, y, z), (dlx, dly, dlz)) = element(k);
            out.x.push(x);
            out.y.push(y);
            out.z.push(z);
            out.dlx.push(dlx);
            out.dly.push(dly);
            out.dlz.push(dlz);
        }
        out
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// (m) Element positions as `(x, y, z)` slices.
    pub fn xyz(&self) -> (&[f64], &[f64], &[f64]) {
        (&self.x, &self.y, &self.z)
    }

    /// (m) Element length vectors as `(dlx, dly, dlz)` slices.
    pub fn dlxyz(&self) -> (&[f64], &[f64], &[f64]) {
        (&self.dlx, &self.dly, &self.dlz)
    }

    /// Append the elements of `other` after those of `self`.
    pub fn extend(&mut self, other: &Self) {
        self.x.extend_from_slice(&other.x);
        self.y.extend_from_slice(&other.y);
        self.z.extend_from_slice(&other.z);
        self.dlx.extend_from_slice(&other.dlx);
        self.dly.extend_from_slice(&other.dly);
        self.dlz.extend_from_slice(&other.dlz);
    }
}

/// Discretize a straight wire as in [`straight_wire_element`].
pub fn discretize_straight_wire(length: f64, n: usize) -> Filaments {
    Filaments::from_parametrization(n, straight_wire_element(length, n))
}

/// Discretize a circular loop as in [`circular_loop_element`].
pub fn discretize_circular_loop(radius: f64, n: usize, sampling: LoopSampling) -> Filaments {
    Filaments::from_parametrization(n, circular_loop_element(radius, n, sampling))
}

/// Coordinate plane of a planar observation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    /// Spanned by x and y, at fixed z.
    #[default]
    Xy,
    /// Spanned by x and z, at fixed y.
    Xz,
}

impl Plane {
    /// Project a 3D vector onto the plane's `(u, v)` axes.
    #[inline]
    pub fn project(&self, v: (f64, f64, f64)) -> (f64, f64) {
        match self {
            Plane::Xy => (v.0, v.1),
            Plane::Xz => (v.0, v.2),
        }
    }

    /// Place in-plane coordinates `(u, v)` at out-of-plane coordinate `offset`.
    #[inline]
    pub fn embed(&self, u: f64, v: f64, offset: f64) -> (f64, f64, f64) {
        match self {
            Plane::Xy => (u, v, offset),
            Plane::Xz => (u, offset, v),
        }
    }

    /// Axis names, for labels and logs.
    pub fn axis_names(&self) -> (&'static str, &'static str) {
        match self {
            Plane::Xy => ("x", "y"),
            Plane::Xz => ("x", "z"),
        }
    }
}

/// How the points of a [`PointGrid`] are arranged.
#[derive(Debug, Clone, PartialEq)]
pub enum GridLayout {
    /// Row-major `nv` rows of `nu` points; `u` varies fastest.
    Planar {
        plane: Plane,
        offset: f64,
        u: Vec<f64>,
        v: Vec<f64>,
    },
    /// `nz` slabs of `ny` rows of `nx` points; x varies fastest.
    Volume { nx: usize, ny: usize, nz: usize },
}

/// (m) Observation points on a regular grid, flattened into `(x, y, z)` arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct PointGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub layout: GridLayout,
}

impl PointGrid {
    /// Meshgrid over a coordinate plane.
    ///
    /// # Arguments
    ///
    /// * `plane`:      which coordinate plane to span
    /// * `offset`:     (m) fixed value of the out-of-plane coordinate
    /// * `min`, `max`: (m) bounds of the in-plane `(u, v)` coordinates
    /// * `resolution`: number of samples along `u` and `v`, endpoints included
    pub fn planar(
        plane: Plane,
        offset: f64,
        min: [f64; 2],
        max: [f64; 2],
        resolution: [usize; 2],
    ) -> Self {
        let u = linspace(min[0], max[0], resolution[0]);
        let v = linspace(min[1], max[1], resolution[1]);
        let n = u.len() * v.len();

        let (mut x, mut y, mut z) = (
            Vec::with_capacity(n),
            Vec::with_capacity(n),
            Vec::with_capacity(n),
        );
        for vj in &v {
            for ui in &u {
                let p = plane.embed(*ui, *vj, offset);
                x.push(p.0);
                y.push(p.1);
                z.push(p.2);
            }
        }
        debug!(?plane, offset, nu = u.len(), nv = v.len(), "built planar grid");

        Self {
            x,
            y,
            z,
            layout: GridLayout::Planar {
                plane,
                offset,
                u,
                v,
            },
        }
    }

    /// Regular 3D lattice spanning `min` to `max` with `resolution` samples per axis.
    pub fn volume(min: [f64; 3], max: [f64; 3], resolution: [usize; 3]) -> Self {
        let xs = linspace(min[0], max[0], resolution[0]);
        let ys = linspace(min[1], max[1], resolution[1]);
        let zs = linspace(min[2], max[2], resolution[2]);
        let n = xs.len() * ys.len() * zs.len();

        let (mut x, mut y, mut z) = (
            Vec::with_capacity(n),
            Vec::with_capacity(n),
            Vec::with_capacity(n),
        );
        for zk in &zs {
            for yj in &ys {
                for xi in &xs {
                    x.push(*xi);
                    y.push(*yj);
                    z.push(*zk);
                }
            }
        }
        debug!(
            nx = xs.len(),
            ny = ys.len(),
            nz = zs.len(),
            "built volume grid"
        );

        Self {
            x,
            y,
            z,
            layout: GridLayout::Volume {
                nx: xs.len(),
                ny: ys.len(),
                nz: zs.len(),
            },
        }
    }

    /// Points given explicitly, recorded as a single row of a volume layout.
    pub fn from_points(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self, FieldError> {
        if y.len() != x.len() || z.len() != x.len() {
            return Err(FieldError::LengthMismatch("point coordinates"));
        }
        let n = x.len();
        Ok(Self {
            x,
            y,
            z,
            layout: GridLayout::Volume { nx: n, ny: 1, nz: 1 },
        })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// (m) Point coordinates in the `(x, y, z)` form the field functions take.
    pub fn coords(&self) -> (&[f64], &[f64], &[f64]) {
        (&self.x, &self.y, &self.z)
    }
}
