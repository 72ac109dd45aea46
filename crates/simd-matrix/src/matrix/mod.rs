//! Fixed-size matrices stored as SIMD lanes.
//!
//! # Layout
//!
//! A `ROWS × COLS` matrix is stored column-major and cut into lanes of
//! `L = V::LANES` consecutive elements of one column:
//!
//! ```text
//! 4×3 matrix, L = 2            storage (ROWS / L = 2 lanes per column)
//!
//! │ a00 a01 a02 │              lane 0: [a00 a10]   column 0
//! │ a10 a11 a12 │              lane 1: [a20 a30]
//! │ a20 a21 a22 │              lane 2: [a01 a11]   column 1
//! │ a30 a31 a32 │              lane 3: [a21 a31]
//!                              lane 4: [a02 a12]   column 2
//!                              lane 5: [a22 a32]
//! ```
//!
//! Lane `b` of column `j` is storage lane `j * ROWS / L + b` and covers the
//! column-major indices `j*ROWS + b*L .. j*ROWS + (b+1)*L`.
//!
//! # Lane Alignment
//!
//! `ROWS` must be a multiple of the lane width. The check runs when a matrix
//! type is instantiated, so a misaligned shape never builds:
//!
//! ```compile_fail
//! use simd_matrix::BatchedMatrix;
//!
//! // f32 lanes hold 4 values; 3 rows cannot be tiled
//! let m = BatchedMatrix::<f32, 3, 3>::zeros();
//! ```

mod fmt;
mod ops;

use std::marker::PhantomData;

use crate::error::{MatrixError, Result};
use crate::lane::{LaneScalar, VectorOps};

/// A `ROWS × COLS` matrix whose storage is a sequence of lanes.
///
/// `V` is the lane strategy; it defaults to the natural lane of `T`
/// ([`LaneScalar::Lane`]). Any [`VectorOps`] with `Scalar = T` can be
/// substituted, e.g. [`Portable`](crate::lane::Portable).
///
/// # Example
///
/// ```
/// use simd_matrix::BatchedMatrix;
///
/// let a = BatchedMatrix::<f32, 4, 4>::from_row_major(&[
///     1.0, 2.0, 3.0, 4.0,
///     5.0, 6.0, 7.0, 8.0,
///     9.0, 10.0, 11.0, 12.0,
///     13.0, 14.0, 15.0, 16.0,
/// ])?;
/// let ones = BatchedMatrix::<f32, 4, 1>::from_row_major(&[1.0; 4])?;
///
/// let sums = &a * &ones;
/// assert_eq!(sums.to_row_major_vec(), vec![10.0, 26.0, 42.0, 58.0]);
/// # Ok::<(), simd_matrix::MatrixError>(())
/// ```
#[derive(Clone)]
pub struct BatchedMatrix<T, const ROWS: usize, const COLS: usize, V = <T as LaneScalar>::Lane>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    lanes: Vec<V>,
    _scalar: PhantomData<T>,
}

impl<T, const ROWS: usize, const COLS: usize, V> BatchedMatrix<T, ROWS, COLS, V>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    const LANE_ALIGNED: () = assert!(
        V::LANES > 0 && ROWS % V::LANES == 0,
        "ROWS must be a multiple of the lane width"
    );

    /// Lanes holding one column.
    pub const LANES_PER_COL: usize = ROWS / V::LANES;

    /// Total number of lanes.
    pub const NUM_LANES: usize = Self::LANES_PER_COL * COLS;

    /// Total number of elements.
    pub const LEN: usize = ROWS * COLS;

    fn from_lanes(lanes: Vec<V>) -> Self {
        let () = Self::LANE_ALIGNED;
        debug_assert_eq!(lanes.len(), Self::NUM_LANES);
        Self {
            lanes,
            _scalar: PhantomData,
        }
    }

    fn check_len(actual: usize) -> Result<()> {
        if actual != Self::LEN {
            return Err(MatrixError::ShapeMismatch {
                expected: Self::LEN,
                actual,
            });
        }
        Ok(())
    }

    /// `values` must hold exactly `LEN` column-major elements.
    fn load_col_major(values: &[T]) -> Self {
        Self::from_lanes(values.chunks_exact(V::LANES).map(V::load).collect())
    }

    /// `out` must hold exactly `LEN` elements.
    fn store_col_major(&self, out: &mut [T]) {
        for (lane, chunk) in self.lanes.iter().zip(out.chunks_exact_mut(V::LANES)) {
            lane.store(chunk);
        }
    }

    /// Create a matrix with every element zero.
    pub fn zeros() -> Self {
        Self::from_lanes(vec![V::zero(); Self::NUM_LANES])
    }

    /// Create a matrix from row-major data.
    ///
    /// The input is transposed to column-major and loaded lane by lane with
    /// unaligned loads.
    ///
    /// # Errors
    /// [`MatrixError::ShapeMismatch`] if `values.len() != ROWS * COLS`.
    pub fn from_row_major(values: &[T]) -> Result<Self> {
        Self::check_len(values.len())?;

        let mut col_major = vec![T::zero(); Self::LEN];
        for i in 0..ROWS {
            for j in 0..COLS {
                col_major[j * ROWS + i] = values[i * COLS + j];
            }
        }

        Ok(Self::load_col_major(&col_major))
    }

    /// Create a matrix from column-major data (no transpose).
    ///
    /// # Errors
    /// [`MatrixError::ShapeMismatch`] if `values.len() != ROWS * COLS`.
    pub fn from_col_major(values: &[T]) -> Result<Self> {
        Self::check_len(values.len())?;
        Ok(Self::load_col_major(values))
    }

    /// Create a matrix from an ordered list of elements in row-major order.
    ///
    /// # Errors
    /// [`MatrixError::ShapeMismatch`] if the list does not hold exactly
    /// `ROWS * COLS` elements.
    ///
    /// ```
    /// use simd_matrix::{BatchedMatrix, MatrixError};
    ///
    /// let err = BatchedMatrix::<i32, 4, 4>::try_from_iter(1..16).unwrap_err();
    /// assert_eq!(err, MatrixError::ShapeMismatch { expected: 16, actual: 15 });
    /// ```
    pub fn try_from_iter<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        Self::from_row_major(&values)
    }

    /// Create a matrix from nested rows.
    pub fn from_rows(rows: [[T; COLS]; ROWS]) -> Self {
        let mut col_major = vec![T::zero(); Self::LEN];
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                col_major[j * ROWS + i] = value;
            }
        }
        Self::load_col_major(&col_major)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        ROWS
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        COLS
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (ROWS, COLS)
    }

    /// Scalars per lane.
    pub fn lane_width(&self) -> usize {
        V::LANES
    }

    /// Lanes in storage order (column-major, lane-tiled).
    pub fn lanes(&self) -> &[V] {
        &self.lanes
    }

    /// Unchecked read; callers guarantee `row < ROWS` and `col < COLS`.
    #[inline]
    pub(crate) fn element(&self, row: usize, col: usize) -> T {
        let idx = col * ROWS + row;
        self.lanes[idx / V::LANES].extract(idx % V::LANES)
    }

    /// Element at row `row`, column `col`.
    ///
    /// # Errors
    /// [`MatrixError::IndexOutOfRange`] if `row >= ROWS` or `col >= COLS`.
    pub fn at(&self, row: usize, col: usize) -> Result<T> {
        if row >= ROWS || col >= COLS {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: ROWS,
                cols: COLS,
            });
        }
        Ok(self.element(row, col))
    }

    /// Element at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.at(row, col).ok()
    }

    /// Iterate over all elements in column-major order.
    pub fn iter_col_major(&self) -> impl Iterator<Item = T> + '_ {
        self.lanes
            .iter()
            .flat_map(|&lane| (0..V::LANES).map(move |i| lane.extract(i)))
    }

    /// Write the elements into `out` in column-major order.
    ///
    /// # Errors
    /// [`MatrixError::ShapeMismatch`] if `out.len() != ROWS * COLS`.
    pub fn export_col_major(&self, out: &mut [T]) -> Result<()> {
        Self::check_len(out.len())?;
        self.store_col_major(out);
        Ok(())
    }

    /// Write the elements into `out` in row-major order.
    ///
    /// # Errors
    /// [`MatrixError::ShapeMismatch`] if `out.len() != ROWS * COLS`.
    pub fn export_row_major(&self, out: &mut [T]) -> Result<()> {
        Self::check_len(out.len())?;

        let col_major = self.to_col_major_vec();
        for i in 0..ROWS {
            for j in 0..COLS {
                out[i * COLS + j] = col_major[j * ROWS + i];
            }
        }
        Ok(())
    }

    /// Copy the elements out in column-major order.
    pub fn to_col_major_vec(&self) -> Vec<T> {
        let mut out = vec![T::zero(); Self::LEN];
        self.store_col_major(&mut out);
        out
    }

    /// Copy the elements out in row-major order.
    pub fn to_row_major_vec(&self) -> Vec<T> {
        let col_major = self.to_col_major_vec();
        let mut out = vec![T::zero(); Self::LEN];
        for i in 0..ROWS {
            for j in 0..COLS {
                out[i * COLS + j] = col_major[j * ROWS + i];
            }
        }
        out
    }
}

impl<T, const N: usize, V> BatchedMatrix<T, N, N, V>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    /// Create the `N × N` identity matrix.
    pub fn identity() -> Self {
        let mut col_major = vec![T::zero(); N * N];
        for i in 0..N {
            col_major[i * N + i] = T::one();
        }
        Self::load_col_major(&col_major)
    }
}

impl<T, const ROWS: usize, const COLS: usize, V> Default for BatchedMatrix<T, ROWS, COLS, V>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const ROWS: usize, const COLS: usize, V> PartialEq for BatchedMatrix<T, ROWS, COLS, V>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.iter_col_major().eq(other.iter_col_major())
    }
}

impl<T, const ROWS: usize, const COLS: usize, V> TryFrom<&[T]> for BatchedMatrix<T, ROWS, COLS, V>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    type Error = MatrixError;

    /// Row-major conversion, see [`BatchedMatrix::from_row_major`].
    fn try_from(values: &[T]) -> Result<Self> {
        Self::from_row_major(values)
    }
}

impl<T, const ROWS: usize, const COLS: usize, V> TryFrom<Vec<T>> for BatchedMatrix<T, ROWS, COLS, V>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    type Error = MatrixError;

    fn try_from(values: Vec<T>) -> Result<Self> {
        Self::from_row_major(&values)
    }
}

impl<T, const ROWS: usize, const COLS: usize, V> From<[[T; COLS]; ROWS]>
    for BatchedMatrix<T, ROWS, COLS, V>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    fn from(rows: [[T; COLS]; ROWS]) -> Self {
        Self::from_rows(rows)
    }
}
