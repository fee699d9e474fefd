#![allow(dead_code)]

use nalgebra as na;

pub fn assert_approx_eq_float(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "Floats {a} and {b} are not approximately equal within tolerance {tol}"
    );
}

pub fn assert_approx_eq_vec(a: na::Vector3<f64>, b: na::Vector3<f64>, tol: f64) {
    assert!(
        (a - b).norm() < tol,
        "Vectors {a:?} and {b:?} are not approximately equal within tolerance {tol}"
    );
}

pub fn assert_approx_eq_mat(a: na::Matrix3<f64>, b: na::Matrix3<f64>, tol: f64) {
    assert!(
        (a - b).norm() < tol,
        "Matrices {a} and {b} are not approximately equal within tolerance {tol}"
    );
}

/// Compares quaternions up to sign: `q` and `-q` encode the same
/// rotation.
pub fn assert_approx_eq_quat(a: na::Quaternion<f64>, b: na::Quaternion<f64>, tol: f64) {
    let dist = (a.coords - b.coords).norm().min((a.coords + b.coords).norm());
    assert!(
        dist < tol,
        "Quaternions {a:?} and {b:?} do not represent approximately the same rotation within tolerance {tol}"
    );
}
