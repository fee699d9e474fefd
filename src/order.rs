//! The six Euler-angle axis orderings.
//!
//! Each order encodes a permutation `(i, j, k)` of the coordinate axis
//! indices `(0, 1, 2)` plus a parity flag. Odd permutations require a
//! sign inversion in the angle formulas, which the conversion functions
//! in [`crate::matrix`] and [`crate::quat`] apply consistently.

/// Axis ordering for an Euler-angle triple.
///
/// The variant name gives the order in which the three rotations are
/// applied, e.g. [`EulerOrder::Xzy`] rotates about X, then Z, then Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EulerOrder {
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
}

impl EulerOrder {
    /// All six orders, in enum declaration order.
    pub const ALL: [Self; 6] = [
        Self::Xyz,
        Self::Xzy,
        Self::Yxz,
        Self::Yzx,
        Self::Zxy,
        Self::Zyx,
    ];

    /// Returns the axis indices `(i, j, k)` for this order,
    /// a permutation of `(0, 1, 2)` with `0 = X`, `1 = Y`, `2 = Z`.
    #[inline]
    pub fn axes(self) -> (usize, usize, usize) {
        match self {
            Self::Xyz => (0, 1, 2),
            Self::Xzy => (0, 2, 1),
            Self::Yxz => (1, 0, 2),
            Self::Yzx => (1, 2, 0),
            Self::Zxy => (2, 0, 1),
            Self::Zyx => (2, 1, 0),
        }
    }

    /// Returns `true` if the axis permutation is odd.
    ///
    /// Odd orders need their angles sign-inverted relative to the even
    /// ones; see [`crate::matrix::matrix_to_euler`] and
    /// [`crate::quat::euler_to_quaternion`].
    #[inline]
    pub fn parity_odd(self) -> bool {
        matches!(self, Self::Xzy | Self::Yxz | Self::Zyx)
    }
}
