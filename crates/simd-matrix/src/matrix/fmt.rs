use std::fmt;

use crate::lane::{LaneScalar, VectorOps};
use crate::matrix::BatchedMatrix;

/// Field width used when the formatter does not specify one.
const DEFAULT_WIDTH: usize = 8;

/// One line per row, values right-aligned in fixed-width fields separated
/// by a single space.
///
/// The field width defaults to 8 and follows the formatter width when one
/// is given; a precision is forwarded to every value.
///
/// ```
/// use simd_matrix::BatchedMatrix;
///
/// let m = BatchedMatrix::<i32, 4, 2>::from_rows([[1, 2], [3, 4], [5, 6], [7, 8]]);
/// assert_eq!(
///     format!("{m:3}"),
///     "  1   2\n  3   4\n  5   6\n  7   8\n"
/// );
/// ```
impl<T, const ROWS: usize, const COLS: usize, V> fmt::Display for BatchedMatrix<T, ROWS, COLS, V>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(DEFAULT_WIDTH);
        let precision = f.precision();

        for i in 0..ROWS {
            for j in 0..COLS {
                let value = self.element(i, j);
                match precision {
                    Some(precision) => write!(f, "{value:>width$.precision$}")?,
                    None => write!(f, "{value:>width$}")?,
                }
                if j + 1 < COLS {
                    f.write_str(" ")?;
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl<T, const ROWS: usize, const COLS: usize, V> fmt::Debug for BatchedMatrix<T, ROWS, COLS, V>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchedMatrix")
            .field("rows", &ROWS)
            .field("cols", &COLS)
            .field("lane_width", &V::LANES)
            .field("data", &self.to_row_major_vec())
            .finish()
    }
}
