use once_cell::sync::Lazy;

/// SIMD instruction set level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SimdLevel {
    /// No vector instructions.
    Scalar,
    /// WebAssembly 128-bit SIMD.
    Simd128,
    /// ARM NEON.
    Neon,
    /// x86 SSE2.
    Sse2,
    /// x86 AVX2.
    Avx2,
    /// x86 AVX-512F.
    Avx512,
}

impl SimdLevel {
    /// Width of one vector register in bits (0 for scalar).
    pub fn register_bits(self) -> usize {
        match self {
            SimdLevel::Scalar => 0,
            SimdLevel::Simd128 | SimdLevel::Neon | SimdLevel::Sse2 => 128,
            SimdLevel::Avx2 => 256,
            SimdLevel::Avx512 => 512,
        }
    }

    /// Number of `T` values one register holds.
    pub fn lanes_for<T>(self) -> usize {
        match self.register_bits() {
            0 => 1,
            bits => bits / 8 / std::mem::size_of::<T>(),
        }
    }
}

static DETECTED: Lazy<SimdLevel> = Lazy::new(|| {
    let level = detect();
    log::debug!(
        "detected SIMD level {:?} ({} f32 per register)",
        level,
        level.lanes_for::<f32>()
    );
    level
});

/// Best SIMD level supported by the running CPU. Detected once.
pub fn simd_level() -> SimdLevel {
    *DETECTED
}

#[cfg(target_arch = "x86_64")]
fn detect() -> SimdLevel {
    if is_x86_feature_detected!("avx512f") {
        SimdLevel::Avx512
    } else if is_x86_feature_detected!("avx2") {
        SimdLevel::Avx2
    } else {
        // SSE2 is part of the x86_64 baseline
        SimdLevel::Sse2
    }
}

#[cfg(target_arch = "aarch64")]
fn detect() -> SimdLevel {
    if std::arch::is_aarch64_feature_detected!("neon") {
        SimdLevel::Neon
    } else {
        SimdLevel::Scalar
    }
}

#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
fn detect() -> SimdLevel {
    SimdLevel::Simd128
}

#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    all(target_arch = "wasm32", target_feature = "simd128")
)))]
fn detect() -> SimdLevel {
    SimdLevel::Scalar
}

/// Instruction set the default lanes were compiled for.
///
/// This is a compile-time property: the `portable` feature forces
/// [`SimdLevel::Scalar`].
pub fn lane_backend() -> SimdLevel {
    if cfg!(feature = "portable") {
        SimdLevel::Scalar
    } else if cfg!(all(target_arch = "x86_64", target_feature = "sse2")) {
        SimdLevel::Sse2
    } else if cfg!(all(target_arch = "aarch64", target_feature = "neon")) {
        SimdLevel::Neon
    } else if cfg!(all(target_arch = "wasm32", target_feature = "simd128")) {
        SimdLevel::Simd128
    } else {
        SimdLevel::Scalar
    }
}
