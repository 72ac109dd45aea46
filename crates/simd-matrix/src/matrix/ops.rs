//! Lane-parallel arithmetic.
//!
//! # Multiplication
//!
//! `C = A * B` with `A: ROWS×COLS`, `B: COLS×N` is computed by
//! broadcast-accumulate over whole lanes instead of scalar triple loops:
//!
//! ```text
//! C = 0
//! for j in 0..N:                          // output column
//!     for k in 0..COLS:                   // contraction index
//!         s = broadcast(B[k, j])
//!         for b in 0..ROWS/L:             // lanes of one column
//!             C.lane[j, b] = A.lane[k, b] * s + C.lane[j, b]
//! ```
//!
//! Each `(k, j)` pair costs `ROWS / L` vector multiply-adds. Every output
//! element accumulates its products in `k = 0..COLS` order regardless of the
//! lane width, so portable and vector lanes give identical results.

use std::ops::{Add, AddAssign, Mul};

use crate::lane::{LaneScalar, VectorOps};
use crate::matrix::BatchedMatrix;

impl<T, const ROWS: usize, const COLS: usize, V> BatchedMatrix<T, ROWS, COLS, V>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    /// Matrix product `self * other`.
    ///
    /// Inner dimensions are checked by the type system:
    ///
    /// ```compile_fail
    /// use simd_matrix::BatchedMatrix;
    ///
    /// let a = BatchedMatrix::<f32, 4, 4>::zeros();
    /// let b = BatchedMatrix::<f32, 8, 4>::zeros();
    /// let c = a.matmul(&b);
    /// ```
    pub fn matmul<const N: usize>(
        &self,
        other: &BatchedMatrix<T, COLS, N, V>,
    ) -> BatchedMatrix<T, ROWS, N, V> {
        let per_col = Self::LANES_PER_COL;
        let mut result = BatchedMatrix::<T, ROWS, N, V>::zeros();

        for j in 0..N {
            let c_col = &mut result.lanes[j * per_col..(j + 1) * per_col];
            for k in 0..COLS {
                let scalar = V::broadcast(other.element(k, j));
                let a_col = &self.lanes[k * per_col..(k + 1) * per_col];
                for (c, &a) in c_col.iter_mut().zip(a_col) {
                    *c = a.mul_acc(scalar, *c);
                }
            }
        }

        result
    }
}

impl<'a, T, const ROWS: usize, const COLS: usize, V> Add<&'a BatchedMatrix<T, ROWS, COLS, V>>
    for &'a BatchedMatrix<T, ROWS, COLS, V>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    type Output = BatchedMatrix<T, ROWS, COLS, V>;

    fn add(self, rhs: Self) -> Self::Output {
        let lanes = self
            .lanes
            .iter()
            .zip(rhs.lanes.iter())
            .map(|(&a, &b)| a.add_lanes(b))
            .collect();
        BatchedMatrix::from_lanes(lanes)
    }
}

impl<T, const ROWS: usize, const COLS: usize, V> Add for BatchedMatrix<T, ROWS, COLS, V>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += &rhs;
        self
    }
}

impl<T, const ROWS: usize, const COLS: usize, V> AddAssign<&BatchedMatrix<T, ROWS, COLS, V>>
    for BatchedMatrix<T, ROWS, COLS, V>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    fn add_assign(&mut self, rhs: &Self) {
        for (a, &b) in self.lanes.iter_mut().zip(rhs.lanes.iter()) {
            *a = a.add_lanes(b);
        }
    }
}

impl<T, const ROWS: usize, const COLS: usize, V> AddAssign for BatchedMatrix<T, ROWS, COLS, V>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl<'a, T, const ROWS: usize, const COLS: usize, const N: usize, V>
    Mul<&'a BatchedMatrix<T, COLS, N, V>> for &'a BatchedMatrix<T, ROWS, COLS, V>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    type Output = BatchedMatrix<T, ROWS, N, V>;

    fn mul(self, rhs: &'a BatchedMatrix<T, COLS, N, V>) -> Self::Output {
        self.matmul(rhs)
    }
}

impl<T, const ROWS: usize, const COLS: usize, const N: usize, V> Mul<BatchedMatrix<T, COLS, N, V>>
    for BatchedMatrix<T, ROWS, COLS, V>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    type Output = BatchedMatrix<T, ROWS, N, V>;

    fn mul(self, rhs: BatchedMatrix<T, COLS, N, V>) -> Self::Output {
        self.matmul(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane::Portable;

    fn seq_4x4() -> BatchedMatrix<f32, 4, 4> {
        BatchedMatrix::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ])
    }

    /// Reference i-k-j scalar product on row-major buffers.
    fn naive_matmul(a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Vec<f64> {
        let mut c = vec![0.0; m * n];
        for i in 0..m {
            for p in 0..k {
                for j in 0..n {
                    c[i * n + j] += a[i * k + p] * b[p * n + j];
                }
            }
        }
        c
    }

    #[test]
    fn test_row_sums() {
        let ones = BatchedMatrix::<f32, 4, 1>::from_row_major(&[1.0; 4]).unwrap();
        let c = &seq_4x4() * &ones;
        assert_eq!(c.to_row_major_vec(), vec![10.0, 26.0, 42.0, 58.0]);
    }

    #[test]
    fn test_add_self() {
        let a = seq_4x4();
        let c = &a + &a;
        assert_eq!(
            c.to_row_major_vec(),
            vec![
                2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0,
                30.0, 32.0
            ]
        );
    }

    #[test]
    fn test_add_owned_and_assign() {
        let a = BatchedMatrix::<i32, 4, 1>::from_rows([[1], [2], [3], [4]]);
        let b = BatchedMatrix::<i32, 4, 1>::from_rows([[10], [20], [30], [40]]);

        let c = a.clone() + b.clone();
        assert_eq!(c.to_row_major_vec(), vec![11, 22, 33, 44]);

        let mut d = a;
        d += b;
        assert_eq!(d, c);
    }

    #[test]
    fn test_square_product() {
        // [[1,2,..],..] * [[1,2,..],..]
        let a = seq_4x4();
        let c = &a * &a;

        assert_eq!(c.at(0, 0), Ok(90.0));
        assert_eq!(c.at(0, 3), Ok(120.0));
        assert_eq!(c.at(3, 0), Ok(426.0));
        assert_eq!(c.at(3, 3), Ok(600.0));
    }

    #[test]
    fn test_transposed_input_product() {
        // First operand of the demonstration program: row-major data that
        // reads as the transpose of seq_4x4
        let at = BatchedMatrix::<f32, 4, 4>::from_row_major(&[
            1.0, 5.0, 9.0, 13.0, 2.0, 6.0, 10.0, 14.0, 3.0, 7.0, 11.0, 15.0, 4.0, 8.0, 12.0, 16.0,
        ])
        .unwrap();
        let ones = BatchedMatrix::<f32, 4, 1>::from_row_major(&[1.0; 4]).unwrap();

        // Row sums of the transpose are the column sums of seq_4x4
        let c = &at * &ones;
        assert_eq!(c.to_row_major_vec(), vec![28.0, 32.0, 36.0, 40.0]);
    }

    #[test]
    fn test_non_square_product() {
        // 8x4 * 4x2 = 8x2
        let a_data: Vec<f64> = (0..32).map(|x| x as f64 * 0.5).collect();
        let b_data: Vec<f64> = (0..8).map(|x| (x as f64) - 3.0).collect();

        let a = BatchedMatrix::<f64, 8, 4>::from_row_major(&a_data).unwrap();
        let b = BatchedMatrix::<f64, 4, 2>::from_row_major(&b_data).unwrap();
        let c = a * b;

        assert_eq!(c.shape(), (8, 2));
        assert_eq!(c.to_row_major_vec(), naive_matmul(&a_data, &b_data, 8, 4, 2));
    }

    #[test]
    fn test_identity_product() {
        let a = seq_4x4();
        let id = BatchedMatrix::<f32, 4, 4>::identity();

        assert_eq!(&a * &id, a);
        assert_eq!(&id * &a, a);
    }

    #[test]
    fn test_integer_product() {
        let a = BatchedMatrix::<i32, 4, 4>::try_from_iter(1..=16).unwrap();
        let b = BatchedMatrix::<i32, 4, 4>::identity();
        let c = &a * &(&b + &b);

        // A * 2I = 2A
        assert_eq!(c, &a + &a);
    }

    #[test]
    fn test_i64_portable_default() {
        let a = BatchedMatrix::<i64, 2, 2>::from_rows([[1, 2], [3, 4]]);
        let c = &a * &a;
        assert_eq!(c.to_row_major_vec(), vec![7, 10, 15, 22]);
    }

    #[test]
    fn test_portable_matches_vector_lanes() {
        let a_data: Vec<f32> = (0..64).map(|x| (x as f32 * 0.37).sin()).collect();
        let b_data: Vec<f32> = (0..64).map(|x| (x as f32 * 0.11).cos()).collect();

        let a = BatchedMatrix::<f32, 8, 8>::from_row_major(&a_data).unwrap();
        let b = BatchedMatrix::<f32, 8, 8>::from_row_major(&b_data).unwrap();
        let pa = BatchedMatrix::<f32, 8, 8, Portable<f32, 4>>::from_row_major(&a_data).unwrap();
        let pb = BatchedMatrix::<f32, 8, 8, Portable<f32, 4>>::from_row_major(&b_data).unwrap();

        // Bit-identical, not just close
        assert_eq!((&a * &b).to_row_major_vec(), (&pa * &pb).to_row_major_vec());
    }

    #[test]
    fn test_result_independent_of_lane_width() {
        let a_data: Vec<f64> = (0..64).map(|x| 1.0 / (x as f64 + 1.0)).collect();

        let narrow = BatchedMatrix::<f64, 8, 8, Portable<f64, 2>>::from_row_major(&a_data).unwrap();
        let wide = BatchedMatrix::<f64, 8, 8, Portable<f64, 8>>::from_row_major(&a_data).unwrap();

        assert_eq!(
            (&narrow * &narrow).to_row_major_vec(),
            (&wide * &wide).to_row_major_vec()
        );
    }

    #[test]
    fn test_integer_overflow_wraps_on_every_lane() {
        let rows = [[i32::MAX], [1], [1], [1]];
        let ones = [[1]; 4];

        let v = BatchedMatrix::<i32, 4, 1>::from_rows(rows)
            + BatchedMatrix::<i32, 4, 1>::from_rows(ones);
        let p = BatchedMatrix::<i32, 4, 1, Portable<i32, 4>>::from_rows(rows)
            + BatchedMatrix::<i32, 4, 1, Portable<i32, 4>>::from_rows(ones);

        assert_eq!(v.to_row_major_vec(), vec![i32::MIN, 2, 2, 2]);
        assert_eq!(v.to_row_major_vec(), p.to_row_major_vec());
    }

    #[test]
    fn test_i64_default_product_wraps() {
        let a = BatchedMatrix::<i64, 2, 2>::from_rows([[i64::MAX, 1], [1, 1]]);
        let c = &a * &a;

        // MAX * MAX wraps to 1
        assert_eq!(c.to_row_major_vec(), vec![2, i64::MIN, i64::MIN, 2]);
    }

    #[test]
    fn test_integer_product_overflow_matches_across_lanes() {
        let data: Vec<i32> = (0..16).map(|x| i32::MAX - x * 0x1234_567).collect();

        let v = BatchedMatrix::<i32, 4, 4>::from_row_major(&data).unwrap();
        let p = BatchedMatrix::<i32, 4, 4, Portable<i32, 4>>::from_row_major(&data).unwrap();
        let n = BatchedMatrix::<i32, 4, 4, Portable<i32, 2>>::from_row_major(&data).unwrap();

        let expected = (&v * &v).to_row_major_vec();
        assert_eq!((&p * &p).to_row_major_vec(), expected);
        assert_eq!((&n * &n).to_row_major_vec(), expected);
    }

    #[test]
    fn test_nan_propagates() {
        let mut data = [1.0f32; 16];
        data[5] = f32::NAN;
        let a = BatchedMatrix::<f32, 4, 4>::from_row_major(&data).unwrap();
        let c = &a + &BatchedMatrix::<f32, 4, 4>::zeros();

        assert!(c.at(1, 1).unwrap().is_nan());
        assert_eq!(c.at(0, 0), Ok(1.0));
    }
}
