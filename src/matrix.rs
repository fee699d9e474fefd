//! Rotation-matrix helpers: row normalization and Euler-angle extraction.

use nalgebra as na;

use crate::order::EulerOrder;

/// Threshold on the middle-angle cosine below which a matrix is treated
/// as gimbal-locked. The `f32` machine epsilon is used even though the
/// working precision is `f64`, so that matrices originating from
/// single-precision sources still land in the stable branch.
const CY_EPSILON: f64 = 16.0 * (f32::EPSILON as f64);

/// Normalizes each row of a matrix to unit length.
///
/// # Arguments
///
/// * `m` - The matrix whose rows are to be normalized.
///
/// # Returns
///
/// A new matrix whose rows are the unit-length normalizations of the
/// rows of `m`. A zero-norm row yields NaN components; callers must not
/// pass a degenerate matrix.
///
/// Note that this only rescales the rows; it does not make them
/// mutually orthogonal.
#[inline]
pub fn normalize_rotation_matrix(m: &na::Matrix3<f64>) -> na::Matrix3<f64> {
    na::Matrix3::from_rows(&[
        m.row(0).normalize(),
        m.row(1).normalize(),
        m.row(2).normalize(),
    ])
}

/// Extracts the two candidate Euler-angle triples from an orthonormal
/// rotation matrix.
///
/// Outside gimbal lock every rotation has exactly two Euler
/// decompositions, related by a half-turn flip of two axes; both are
/// returned. At gimbal lock (the middle-angle cosine at or below
/// [`CY_EPSILON`]) only one decomposition exists, the third angle is
/// pinned to zero, and both returned triples are equal.
fn matrix_to_euler_pair(
    m: &na::Matrix3<f64>,
    order: EulerOrder,
) -> (na::Vector3<f64>, na::Vector3<f64>) {
    let (i, j, k) = order.axes();
    let mut e1 = na::Vector3::zeros();
    let mut e2 = na::Vector3::zeros();

    let cy = m[(i, i)].hypot(m[(i, j)]);
    if cy > CY_EPSILON {
        e1[i] = m[(j, k)].atan2(m[(k, k)]);
        e1[j] = (-m[(i, k)]).atan2(cy);
        e1[k] = m[(i, j)].atan2(m[(i, i)]);
        e2[i] = (-m[(j, k)]).atan2(-m[(k, k)]);
        e2[j] = (-m[(i, k)]).atan2(-cy);
        e2[k] = (-m[(i, j)]).atan2(-m[(i, i)]);
    } else {
        e1[i] = (-m[(k, j)]).atan2(m[(j, j)]);
        e1[j] = (-m[(i, k)]).atan2(cy);
        e1[k] = 0.0;
        e2 = e1;
    }
    if order.parity_odd() {
        e1 = -e1;
        e2 = -e2;
    }
    (e1, e2)
}

/// Converts a rotation matrix to Euler angles under the given order.
///
/// # Arguments
///
/// * `m` - The rotation matrix. It does not need to be pre-normalized;
///   a private copy is row-normalized before extraction to absorb
///   accumulated numeric drift. Rows are not re-orthogonalized, so a
///   matrix far from orthonormal gives no meaningful decomposition.
/// * `order` - The axis ordering of the returned angles.
///
/// # Returns
///
/// A vector of three angles in radians, to be applied in the order
/// encoded by `order`. Of the two candidate decompositions, the one
/// with the smaller sum of absolute angles is returned.
///
/// No errors are raised; degenerate inputs propagate NaN/Inf.
pub fn matrix_to_euler(m: &na::Matrix3<f64>, order: EulerOrder) -> na::Vector3<f64> {
    let n = normalize_rotation_matrix(m);
    let (e1, e2) = matrix_to_euler_pair(&n, order);

    // Pick the more compact of the two decompositions.
    if e1.x.abs() + e1.y.abs() + e1.z.abs() > e2.x.abs() + e2.y.abs() + e2.z.abs() {
        e2
    } else {
        e1
    }
}
