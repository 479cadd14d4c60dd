//! Closed-form fields for the same geometries, used to check the discretized sums.
use core::f64::consts::PI;

use crate::math::{ellipe, ellipk};
use crate::{MU0_OVER_4PI, MU_0};

/// (T) Field magnitude at distance `r` from an infinite straight wire, $\mu_0 I / 2 \pi r$.
pub fn flux_density_infinite_wire(current: f64, r: f64) -> f64 {
    MU_0 * current / (2.0 * PI * r)
}

/// (T) Azimuthal field of a finite straight wire on the z-axis spanning
/// `-length/2` to `length/2`, at cylindrical coords `(rho, z)`.
///
/// Positive for positive current (+z), following the right-hand rule.
///
/// # Commentary
///
/// $B_\phi = \frac{\mu_0 I}{4 \pi \rho} \left[ \frac{z + L/2}{\sqrt{\rho^2 + (z + L/2)^2}} - \frac{z - L/2}{\sqrt{\rho^2 + (z - L/2)^2}} \right]$
pub fn flux_density_finite_wire(current: f64, length: f64, rho: f64, z: f64) -> f64 {
    let zp = z + length / 2.0; // [m] distance past the lower end
    let zm = z - length / 2.0; // [m] distance past the upper end
    let upper = zp / rho.hypot(zp);
    let lower = zm / rho.hypot(zm);

    MU0_OVER_4PI * current / rho * (upper - lower)
}

/// (T) Axial field of a circular loop on its symmetry axis at height `z`,
/// $\mu_0 I a^2 / 2 (a^2 + z^2)^{3/2}$.
pub fn flux_density_loop_on_axis(current: f64, radius: f64, z: f64) -> f64 {
    let a2 = radius * radius;
    MU_0 * current * a2 / (2.0 * (a2 + z * z).powf(1.5))
}

/// (T) Off-axis `(Br, Bz)` for a circular loop of radius `radius` in the z=0 plane,
/// at cylindrical coords `(r, z)`.
///
/// # Commentary
///
/// Near-exact formula (except numerically-evaluated elliptic integrals).
/// See eqns. 12,13 pg. 34 in \[1\], eqn 9.8.7 in \[2\], and all of \[3\].
///
/// The formula for Br as given by \[1\] is missing a factor of (z / r).
/// On the axis itself that factor is singular and the on-axis limit is used instead.
///
/// # References
///
///   \[1\] D. B. Montgomery and J. Terrell,
///         “Some Useful Information For The Design Of Aircore Solenoids,
///         Part I. Relationships Between Magnetic Field, Power, Ampere-Turns
///         And Current Density. Part II. Homogeneous Magnetic Fields,”
///         Massachusetts Inst. Of Tech. Francis Bitter National Magnet Lab, Cambridge, MA,
///         Nov. 1961. Available: <https://apps.dtic.mil/sti/citations/tr/AD0269073>
///
///   \[2\] 8.02 Course Notes. Available: <https://web.mit.edu/8.02t/www/802TEAL3D/visualizations/coursenotes/modules/guide09.pdf>
///
///   \[3\] Eric Dennyson, "Magnet Formulas". Available: <https://tiggerntatie.github.io/emagnet-py/offaxis/off_axis_loop.html>
pub fn flux_density_loop_off_axis(current: f64, radius: f64, r: f64, z: f64) -> (f64, f64) {
    if r == 0.0 {
        return (0.0, flux_density_loop_on_axis(current, radius, z));
    }

    let z2 = z * z; // [m^2]
    let r2 = r * r; // [m^2]
    let a2 = radius * radius; // [m^2]

    let rpr = radius + r;
    let q = rpr.mul_add(rpr, z2); // [m^2]
    let k2 = 4.0 * radius * r / q; // [nondim]

    let a0 = 2.0 * current / q.sqrt(); // [A/m]

    let f = ellipk(k2); // [nondim]
    let s = ellipe(k2) / (1.0 - k2); // [nondim]
    let s_over_q = s / q; // [m^-2]

    // Field intensity with the factor of 4pi pulled out into mu_0
    let hr = (z / r) * a0 * s_over_q.mul_add(a2 + r2 + z2, -f);
    let hz = a0 * s_over_q.mul_add(a2 - r2 - z2, f);

    (MU0_OVER_4PI * hr, MU0_OVER_4PI * hz)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn finite_wire_tends_to_infinite_wire() {
        let b = flux_density_finite_wire(10.0, 1e6, 0.1, 0.0);
        assert_relative_eq!(b, flux_density_infinite_wire(10.0, 0.1), max_relative = 1e-9);
    }

    #[test]
    fn finite_wire_is_symmetric_about_midplane() {
        let above = flux_density_finite_wire(1.0, 2.0, 0.3, 0.7);
        let below = flux_density_finite_wire(1.0, 2.0, 0.3, -0.7);
        assert_relative_eq!(above, below, max_relative = 1e-14);
    }

    #[test]
    fn off_axis_reduces_to_on_axis_near_axis() {
        let (current, radius, z) = (3.0, 0.4, 0.25);
        let (br, bz) = flux_density_loop_off_axis(current, radius, 1e-3, z);
        let on_axis = flux_density_loop_on_axis(current, radius, z);
        assert_relative_eq!(bz, on_axis, max_relative = 1e-4);
        assert!(br > 0.0);
        assert!(br < 1e-2 * on_axis);

        assert_eq!(
            flux_density_loop_off_axis(current, radius, 0.0, z),
            (0.0, on_axis)
        );
    }

    #[test]
    fn off_axis_radial_field_is_odd_in_z() {
        let (br_up, bz_up) = flux_density_loop_off_axis(1.0, 1.0, 0.5, 0.3);
        let (br_dn, bz_dn) = flux_density_loop_off_axis(1.0, 1.0, 0.5, -0.3);
        assert_relative_eq!(br_up, -br_dn, max_relative = 1e-14);
        assert_relative_eq!(bz_up, bz_dn, max_relative = 1e-14);
    }
}
