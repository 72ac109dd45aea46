//! Matrix products on 4x4 and 4x1 `f32` matrices.
//!
//! Run with `RUST_LOG=debug cargo run --example product` to see the detected
//! SIMD level.

use simd_matrix::{lane_backend, simd_level, BatchedMatrix, MatrixError};

fn main() -> Result<(), MatrixError> {
    env_logger::init();

    let level = simd_level();
    log::info!(
        "host SIMD level {:?} ({} f32 per register), lanes compiled for {:?} ({} f32 per lane)",
        level,
        level.lanes_for::<f32>(),
        lane_backend(),
        BatchedMatrix::<f32, 4, 4>::zeros().lane_width()
    );

    let mat = BatchedMatrix::<f32, 4, 4>::from_row_major(&[
        1.0, 5.0, 9.0, 13.0, //
        2.0, 6.0, 10.0, 14.0, //
        3.0, 7.0, 11.0, 15.0, //
        4.0, 8.0, 12.0, 16.0,
    ])?;

    let mat2 = BatchedMatrix::<f32, 4, 4>::from_row_major(&[
        1.0, 2.0, 3.0, 4.0, //
        5.0, 6.0, 7.0, 8.0, //
        9.0, 10.0, 11.0, 12.0, //
        13.0, 14.0, 15.0, 16.0,
    ])?;

    let mat3 = BatchedMatrix::<f32, 4, 1>::from_row_major(&[1.0; 4])?;

    let result1 = &mat * &mat2;
    let result2 = &mat * &mat3;

    println!("Matrix-matrix multiplication result:\n{result1}");
    println!("Matrix-matrix multiplication result:\n{result2}");

    Ok(())
}
