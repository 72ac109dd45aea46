use num_traits::Zero;

use crate::lane::Scalar;

/// Vector arithmetic over one lane of `LANES` scalars.
///
/// Implementations must be numerically equivalent to the scalar loop in
/// [`Portable`](crate::lane::Portable), which uses [`Scalar::lane_add`] and
/// [`Scalar::lane_mul`]: integers wrap on overflow and `mul_acc` rounds the
/// product before the addition, so vector and portable lanes agree bit for
/// bit.
pub trait VectorOps: Copy + Send + Sync + 'static {
    /// Element type held in each position of the lane.
    type Scalar: Scalar;

    /// Number of scalars per lane. A positive power of two.
    const LANES: usize;

    /// Lane with every position set to zero.
    #[inline]
    fn zero() -> Self {
        Self::broadcast(<Self::Scalar as Zero>::zero())
    }

    /// Replicate `value` across every position.
    fn broadcast(value: Self::Scalar) -> Self;

    /// Unaligned load of the first `LANES` elements of `src`.
    ///
    /// # Panics
    /// Panics if `src` holds fewer than `LANES` elements.
    fn load(src: &[Self::Scalar]) -> Self;

    /// Unaligned store into the first `LANES` elements of `dst`.
    ///
    /// # Panics
    /// Panics if `dst` holds fewer than `LANES` elements.
    fn store(self, dst: &mut [Self::Scalar]);

    /// Read a single position. `index` must be below `LANES`.
    fn extract(self, index: usize) -> Self::Scalar;

    /// Element-wise addition.
    fn add_lanes(self, other: Self) -> Self;

    /// Element-wise `self * b + acc`, not fused.
    fn mul_acc(self, b: Self, acc: Self) -> Self;
}
