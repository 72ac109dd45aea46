use crate::lane::{Scalar, VectorOps};

/// Lane simulated with a scalar array.
///
/// Always available; used as the default lane for scalars without a vector
/// type and for every scalar under the `portable` feature.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(transparent)]
pub struct Portable<T, const L: usize>(pub [T; L]);

impl<T: Scalar, const L: usize> Portable<T, L> {
    const VALID_WIDTH: () = assert!(
        L.is_power_of_two(),
        "lane width must be a positive power of two"
    );

    /// Wrap an array as a lane.
    #[inline]
    pub fn new(values: [T; L]) -> Self {
        let () = Self::VALID_WIDTH;
        Self(values)
    }

    /// Copy the lane out as an array.
    #[inline]
    pub fn to_array(self) -> [T; L] {
        self.0
    }
}

impl<T: Scalar, const L: usize> VectorOps for Portable<T, L> {
    type Scalar = T;
    const LANES: usize = L;

    #[inline]
    fn broadcast(value: T) -> Self {
        Self::new([value; L])
    }

    #[inline]
    fn load(src: &[T]) -> Self {
        let mut values = [T::zero(); L];
        values.copy_from_slice(&src[..L]);
        Self::new(values)
    }

    #[inline]
    fn store(self, dst: &mut [T]) {
        dst[..L].copy_from_slice(&self.0);
    }

    #[inline]
    fn extract(self, index: usize) -> T {
        self.0[index]
    }

    #[inline]
    fn add_lanes(self, other: Self) -> Self {
        let mut out = self.0;
        for (x, &y) in out.iter_mut().zip(other.0.iter()) {
            *x = x.lane_add(y);
        }
        Self(out)
    }

    #[inline]
    fn mul_acc(self, b: Self, acc: Self) -> Self {
        let mut out = acc.0;
        for i in 0..L {
            out[i] = self.0[i].lane_mul(b.0[i]).lane_add(out[i]);
        }
        Self(out)
    }
}
