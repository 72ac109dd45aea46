use crate::error::{MatrixError, Result};
use crate::lane::{LaneScalar, VectorOps};
use crate::matrix::BatchedMatrix;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Matrix product on flat row-major buffers: C = A * B
///
/// # Arguments
/// - `a`: Matrix A data in row-major order (`M × K`)
/// - `b`: Matrix B data in row-major order (`K × N`)
///
/// # Returns
/// Result matrix C of size `M × N` in row-major order
///
/// # Errors
/// [`MatrixError::ShapeMismatch`] if either buffer has the wrong length.
///
/// # Example
///
/// ```
/// use simd_matrix::matmul_row_major;
///
/// let a: Vec<f32> = (1..=16).map(|x| x as f32).collect(); // 4x4
/// let b = vec![1.0f32; 4]; // 4x1
///
/// let c = matmul_row_major::<f32, 4, 4, 1>(&a, &b)?;
/// assert_eq!(c, vec![10.0, 26.0, 42.0, 58.0]);
/// # Ok::<(), simd_matrix::MatrixError>(())
/// ```
pub fn matmul_row_major<T, const M: usize, const K: usize, const N: usize>(
    a: &[T],
    b: &[T],
) -> Result<Vec<T>>
where
    T: LaneScalar,
{
    let a = BatchedMatrix::<T, M, K>::from_row_major(a)?;
    let b = BatchedMatrix::<T, K, N>::from_row_major(b)?;
    Ok(a.matmul(&b).to_row_major_vec())
}

/// Batched matrix multiplication: C[i] = A[i] * B[i] for i = 0..batch_size
///
/// With the `parallel` feature the pairs are multiplied on the rayon
/// thread pool; each product itself stays single-threaded.
///
/// # Errors
/// [`MatrixError::BatchSizeMismatch`] if `a_batch` and `b_batch` differ in
/// length.
///
/// # Example
///
/// ```
/// use simd_matrix::{matmul_batched, BatchedMatrix};
///
/// let a = vec![BatchedMatrix::<f64, 2, 2>::identity(); 3];
/// let b: Vec<_> = (0..3)
///     .map(|i| BatchedMatrix::<f64, 2, 2>::from_rows([[i as f64, 0.0], [0.0, 1.0]]))
///     .collect();
///
/// let c = matmul_batched(&a, &b)?;
/// assert_eq!(c.len(), 3);
/// assert_eq!(c[2].at(0, 0)?, 2.0);
/// # Ok::<(), simd_matrix::MatrixError>(())
/// ```
pub fn matmul_batched<T, const M: usize, const K: usize, const N: usize, V>(
    a_batch: &[BatchedMatrix<T, M, K, V>],
    b_batch: &[BatchedMatrix<T, K, N, V>],
) -> Result<Vec<BatchedMatrix<T, M, N, V>>>
where
    T: LaneScalar,
    V: VectorOps<Scalar = T>,
{
    if a_batch.len() != b_batch.len() {
        return Err(MatrixError::BatchSizeMismatch {
            left: a_batch.len(),
            right: b_batch.len(),
        });
    }

    log::trace!(
        "batched matmul: {} pairs of {}x{} * {}x{}",
        a_batch.len(),
        M,
        K,
        K,
        N
    );

    #[cfg(feature = "parallel")]
    {
        Ok(a_batch
            .par_iter()
            .zip(b_batch.par_iter())
            .map(|(a, b)| a.matmul(b))
            .collect())
    }

    #[cfg(not(feature = "parallel"))]
    {
        Ok(a_batch
            .iter()
            .zip(b_batch.iter())
            .map(|(a, b)| a.matmul(b))
            .collect())
    }
}

/// Strided batched product on contiguous row-major memory.
///
/// # Arguments
/// - `a`: All A matrices back to back (`batch_size × M × K` elements)
/// - `b`: All B matrices back to back (`batch_size × K × N` elements)
/// - `batch_size`: Number of matrix pairs
///
/// # Returns
/// All C matrices back to back (`batch_size × M × N` elements)
///
/// # Errors
/// [`MatrixError::ShapeMismatch`] if a buffer does not hold exactly
/// `batch_size` matrices, or if `batch_size` matrices would not fit in
/// `usize` elements.
///
/// # Example
///
/// ```
/// use simd_matrix::matmul_strided_batched;
///
/// // Two 2x2 pairs
/// let a = vec![
///     1, 2, 3, 4, // A[0]
///     5, 6, 7, 8, // A[1]
/// ];
/// let b = vec![
///     1, 0, 0, 1, // B[0] = I
///     0, 1, 1, 0, // B[1] swaps columns
/// ];
///
/// let c = matmul_strided_batched::<i64, 2, 2, 2>(&a, &b, 2)?;
/// assert_eq!(c, vec![1, 2, 3, 4, 6, 5, 8, 7]);
/// # Ok::<(), simd_matrix::MatrixError>(())
/// ```
pub fn matmul_strided_batched<T, const M: usize, const K: usize, const N: usize>(
    a: &[T],
    b: &[T],
    batch_size: usize,
) -> Result<Vec<T>>
where
    T: LaneScalar,
{
    let a_stride = M * K;
    let b_stride = K * N;
    let c_stride = M * N;

    check_batch_len(batch_size, a_stride, a.len())?;
    check_batch_len(batch_size, b_stride, b.len())?;

    let c_len = batch_size
        .checked_mul(c_stride)
        .ok_or(MatrixError::ShapeMismatch {
            expected: usize::MAX,
            actual: batch_size,
        })?;
    let mut c = vec![T::zero(); c_len];
    if batch_size == 0 || c_stride == 0 {
        return Ok(c);
    }

    log::trace!(
        "strided batched matmul: {} pairs of {}x{} * {}x{}",
        batch_size,
        M,
        K,
        K,
        N
    );

    #[cfg(feature = "parallel")]
    {
        c.par_chunks_mut(c_stride)
            .enumerate()
            .try_for_each(|(i, c_chunk)| {
                let a_slice = &a[i * a_stride..(i + 1) * a_stride];
                let b_slice = &b[i * b_stride..(i + 1) * b_stride];
                let a = BatchedMatrix::<T, M, K>::from_row_major(a_slice)?;
                let b = BatchedMatrix::<T, K, N>::from_row_major(b_slice)?;
                a.matmul(&b).export_row_major(c_chunk)
            })?;
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (i, c_chunk) in c.chunks_mut(c_stride).enumerate() {
            let a_slice = &a[i * a_stride..(i + 1) * a_stride];
            let b_slice = &b[i * b_stride..(i + 1) * b_stride];
            let a = BatchedMatrix::<T, M, K>::from_row_major(a_slice)?;
            let b = BatchedMatrix::<T, K, N>::from_row_major(b_slice)?;
            a.matmul(&b).export_row_major(c_chunk)?;
        }
    }

    Ok(c)
}

/// `actual` must equal `batch_size * stride`; an overflowing product
/// saturates to `usize::MAX` in the error.
fn check_batch_len(batch_size: usize, stride: usize, actual: usize) -> Result<()> {
    match batch_size.checked_mul(stride) {
        Some(expected) if expected == actual => Ok(()),
        expected => Err(MatrixError::ShapeMismatch {
            expected: expected.unwrap_or(usize::MAX),
            actual,
        }),
    }
}
