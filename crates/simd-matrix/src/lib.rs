//! Fixed-size matrices stored as SIMD lanes.
//!
//! `simd-matrix` provides [`BatchedMatrix`], a statically sized matrix whose
//! column-major storage is cut into hardware-width lanes. Addition runs
//! lane by lane and multiplication uses a broadcast-accumulate loop, so the
//! arithmetic is vector instructions end to end.
//!
//! # Quick Start
//!
//! ```
//! use simd_matrix::BatchedMatrix;
//!
//! let a = BatchedMatrix::<f32, 4, 4>::from_rows([
//!     [1.0, 2.0, 3.0, 4.0],
//!     [5.0, 6.0, 7.0, 8.0],
//!     [9.0, 10.0, 11.0, 12.0],
//!     [13.0, 14.0, 15.0, 16.0],
//! ]);
//!
//! // Element-wise sum
//! let twice = &a + &a;
//! assert_eq!(twice.at(3, 3)?, 32.0);
//!
//! // Product with a 4x1 column of ones gives the row sums
//! let ones = BatchedMatrix::<f32, 4, 1>::from_row_major(&[1.0; 4])?;
//! let sums = &a * &ones;
//! assert_eq!(sums.to_row_major_vec(), vec![10.0, 26.0, 42.0, 58.0]);
//!
//! println!("{sums}");
//! # Ok::<(), simd_matrix::MatrixError>(())
//! ```
//!
//! # Shapes
//!
//! Dimensions are const generics. Mismatched products do not type-check and
//! `ROWS` must be a multiple of the lane width of the element type:
//!
//! | Scalar | Lane width | Valid `ROWS` |
//! |--------|------------|--------------|
//! | `f32` | 4 | 4, 8, 12, ... |
//! | `f64` | 2 | 2, 4, 6, ... |
//! | `i32` | 4 | 4, 8, 12, ... |
//! | `i64` | 2 | 2, 4, 6, ... |
//!
//! # Lane Strategies
//!
//! The fourth type parameter selects the lane implementation. The default is
//! the natural lane of the scalar; [`Portable`] runs the same algorithm on
//! plain arrays and produces identical results:
//!
//! ```
//! use simd_matrix::{BatchedMatrix, Portable};
//!
//! type Narrow = BatchedMatrix<f64, 2, 2, Portable<f64, 2>>;
//!
//! let id = Narrow::identity();
//! let m = Narrow::from_rows([[1.0, 2.0], [3.0, 4.0]]);
//! assert_eq!(&m * &id, m);
//! ```
//!
//! # Features
//!
//! - `parallel` (default): batched products run on the rayon thread pool
//! - `portable`: every scalar uses [`Portable`] lanes instead of `wide`
//!   vector types

pub mod api;
pub mod error;
pub mod lane;
pub mod matrix;
pub mod simd;

pub use api::{matmul_batched, matmul_row_major, matmul_strided_batched};
pub use error::{MatrixError, Result};
pub use lane::{LaneScalar, Portable, Scalar, VectorOps};
pub use matrix::BatchedMatrix;
pub use simd::{lane_backend, simd_level, SimdLevel};

/// Matrix running on [`Portable`] lanes of width `L`.
pub type PortableMatrix<T, const ROWS: usize, const COLS: usize, const L: usize> =
    BatchedMatrix<T, ROWS, COLS, Portable<T, L>>;
