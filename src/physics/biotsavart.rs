//! Biot-Savart calculations for B-field from discrete current elements.
use crate::error::FieldError;
use crate::field::VectorField;
use crate::math::{cross3, dot3};
use crate::mesh::Element;
use crate::MU0_OVER_4PI;

fn check_points(
    xyzp: (&[f64], &[f64], &[f64]),
    out: (&[f64], &[f64], &[f64]),
) -> Result<usize, FieldError> {
    let m = xyzp.0.len();
    if xyzp.1.len() != m || xyzp.2.len() != m {
        return Err(FieldError::LengthMismatch("observation point coordinates"));
    }
    if out.0.len() != m || out.1.len() != m || out.2.len() != m {
        return Err(FieldError::LengthMismatch("output and observation points"));
    }
    Ok(m)
}

/// Accumulate the B-field contribution of a single current element
/// to many observation points.
///
/// # Arguments
///
/// * `current`:  (A) element current
/// * `xyzp`:     (m) observation point coords, each length `m`
/// * `xyzfil`:   (m) element position
/// * `dlxyzfil`: (m) element directed length
/// * `out`:      (T) bx, by, bz at observation points, each length `m`, added to in-place
///
/// # Commentary
///
/// Evaluates $\frac{\mu_0}{4\pi} I \frac{d\vec{l} \times \vec{R}}{|\vec{R}|^3}$ with
/// $\vec{R}$ running from the element position to each observation point.
///
/// An observation point that coincides with the element position gives $0 \cdot \infty$,
/// so the output there becomes NaN. This is the singularity of the continuous law
/// and is left in place.
pub fn flux_density_current_element(
    current: f64,
    xyzp: (&[f64], &[f64], &[f64]),
    xyzfil: (f64, f64, f64),
    dlxyzfil: (f64, f64, f64),
    out: (&mut [f64], &mut [f64], &mut [f64]),
) -> Result<(), FieldError> {
    let (xp, yp, zp) = xyzp;
    let (xfil, yfil, zfil) = xyzfil;
    let (dlx, dly, dlz) = dlxyzfil;
    let (bx, by, bz) = out;

    let m = check_points(xyzp, (&*bx, &*by, &*bz))?;

    // Bake the constant factor into the current
    let current_scaled = MU0_OVER_4PI * current;

    for j in 0..m {
        let rx = xp[j] - xfil; // [m]
        let ry = yp[j] - yfil; // [m]
        let rz = zp[j] - zfil; // [m]

        // 1/r^3 without forming the cube explicitly
        let sumsq = dot3(rx, ry, rz, rx, ry, rz);
        let rnorm3_inv = sumsq.powf(-1.5); // [m^-3]

        let c = rnorm3_inv * current_scaled;
        let (cx, cy, cz) = cross3(dlx, dly, dlz, rx, ry, rz);

        bx[j] = c.mul_add(cx, bx[j]);
        by[j] = c.mul_add(cy, by[j]);
        bz[j] = c.mul_add(cz, bz[j]);
    }

    Ok(())
}

/// B-field of a single current element at many observation points, as a fresh field.
///
/// See [`flux_density_current_element`] for arguments and the singular case.
pub fn biot_savart_element(
    current: f64,
    xyzp: (&[f64], &[f64], &[f64]),
    xyzfil: (f64, f64, f64),
    dlxyzfil: (f64, f64, f64),
) -> Result<VectorField, FieldError> {
    let mut b = VectorField::zeros(xyzp.0.len());
    flux_density_current_element(current, xyzp, xyzfil, dlxyzfil, b.as_mut_slices())?;
    Ok(b)
}

/// B-field of a current path described by a parametrization, summed over its elements.
///
/// # Arguments
///
/// * `current`: (A) current carried by every element of the path
/// * `n`:       number of elements
/// * `element`: maps element index `0..n` to (m) position and directed length
/// * `xyzp`:    (m) observation point coords, each length `m`
///
/// # Commentary
///
/// The result is a Riemann sum of the Biot-Savart integral over the path,
/// so its accuracy is set entirely by how `element` samples the path.
pub fn flux_density_parametric(
    current: f64,
    n: usize,
    element: impl Fn(usize) -> Element,
    xyzp: (&[f64], &[f64], &[f64]),
) -> Result<VectorField, FieldError> {
    let mut b = VectorField::zeros(xyzp.0.len());
    check_points(xyzp, (&b.x, &b.y, &b.z))?;
    for k in 0..n {
        let (xyzfil, dlxyzfil) = element(k);
        flux_density_current_element(current, xyzp, xyzfil, dlxyzfil, b.as_mut_slices())?;
    }
    Ok(b)
}

/// Biot-Savart calculation for B-field contribution from many current elements
/// to many observation points, each element carrying its own current.
///
/// # Arguments
///
/// * `xyzp`:     (m) Observation point coords, each length `m`
/// * `xyzfil`:   (m) Element positions, each length `n`
/// * `dlxyzfil`: (m) Element directed lengths, each length `n`
/// * `ifil`:     (A) Element current, length `n`
/// * `out`:      (T) bx, by, bz at observation points, each length `m`, added to in-place
///
/// # Commentary
///
/// Elements are evaluated at their stored positions, with no midpoint shift,
/// so a discretized source evaluated here reproduces the generator for that source.
pub fn flux_density_biot_savart(
    xyzp: (&[f64], &[f64], &[f64]),
    xyzfil: (&[f64], &[f64], &[f64]),
    dlxyzfil: (&[f64], &[f64], &[f64]),
    ifil: &[f64],
    out: (&mut [f64], &mut [f64], &mut [f64]),
) -> Result<(), FieldError> {
    let (xfil, yfil, zfil) = xyzfil;
    let (dlxfil, dlyfil, dlzfil) = dlxyzfil;
    let (bx, by, bz) = out;

    let n = xfil.len();
    if yfil.len() != n
        || zfil.len() != n
        || dlxfil.len() != n
        || dlyfil.len() != n
        || dlzfil.len() != n
        || ifil.len() != n
    {
        return Err(FieldError::LengthMismatch("current element arrays"));
    }
    check_points(xyzp, (&*bx, &*by, &*bz))?;

    for i in 0..n {
        flux_density_current_element(
            ifil[i],
            xyzp,
            (xfil[i], yfil[i], zfil[i]),
            (dlxfil[i], dlyfil[i], dlzfil[i]),
            (&mut *bx, &mut *by, &mut *bz),
        )?;
    }

    Ok(())
}
