//! Quaternion conversions: quaternion to matrix and Euler angles to
//! quaternion.

use std::f64::consts::SQRT_2;

use nalgebra as na;

use crate::order::EulerOrder;

/// Converts a unit quaternion to a 3x3 rotation matrix.
///
/// # Arguments
///
/// * `q` - The quaternion, assumed to be of unit norm. The input is not
///   normalized; a non-unit quaternion yields a non-orthonormal matrix.
///
/// # Returns
///
/// The rotation matrix corresponding to `q`.
pub fn quaternion_to_matrix(q: &na::Quaternion<f64>) -> na::Matrix3<f64> {
    // Pre-scaling by sqrt(2) folds the factor of 2 in the standard
    // formula into the pairwise products.
    let q0 = SQRT_2 * q.w;
    let q1 = SQRT_2 * q.i;
    let q2 = SQRT_2 * q.j;
    let q3 = SQRT_2 * q.k;

    let qda = q0 * q1;
    let qdb = q0 * q2;
    let qdc = q0 * q3;
    let qaa = q1 * q1;
    let qab = q1 * q2;
    let qac = q1 * q3;
    let qbb = q2 * q2;
    let qbc = q2 * q3;
    let qcc = q3 * q3;

    na::Matrix3::new(
        1. - qbb - qcc,
        qdc + qab,
        -qdb + qac,
        -qdc + qab,
        1. - qaa - qcc,
        qda + qbc,
        qdb + qac,
        -qda + qbc,
        1. - qaa - qbb,
    )
}

/// Converts Euler angles under the given order to a unit quaternion.
///
/// # Arguments
///
/// * `e` - The three angles in radians, applied in the order encoded by
///   `order`.
/// * `order` - The axis ordering of `e`.
///
/// # Returns
///
/// A unit quaternion representing the same rotation, with the sign
/// convention matching [`crate::matrix::matrix_to_euler`] and
/// [`quaternion_to_matrix`] so that the three conversions round-trip.
pub fn euler_to_quaternion(e: &na::Vector3<f64>, order: EulerOrder) -> na::Quaternion<f64> {
    let (i, j, k) = order.axes();
    let parity = order.parity_odd();

    let ti = e[i] * 0.5;
    let tj = e[j] * if parity { -0.5 } else { 0.5 };
    let th = e[k] * 0.5;
    let (si, ci) = ti.sin_cos();
    let (sj, cj) = tj.sin_cos();
    let (sh, ch) = th.sin_cos();
    let cc = ci * ch;
    let cs = ci * sh;
    let sc = si * ch;
    let ss = si * sh;

    let mut a = [0.0_f64; 3];
    a[i] = cj * sc - sj * cs;
    a[j] = cj * ss + sj * cc;
    a[k] = cj * cs - sj * sc;
    if parity {
        a[j] = -a[j];
    }

    na::Quaternion::new(cj * cc + sj * ss, a[0], a[1], a[2])
}
