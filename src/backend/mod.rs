//! Compile-time selected backends
//!
//! Every concrete vector gets its capability impls from exactly one place:
//!
//! - `portable`: pure emulation, used for every type no ISA module claims.
//! - `sse2` (x86_64): the 128-bit types, unless `force-scalar` is set.
//! - `avx2` (x86_64 with `target_feature = "avx2"`): the 256-bit types.
//! - `neon` (aarch64): the 128-bit types.
//!
//! A backend instantiates a type through one of the capability macros below
//! and lists, per capability, only the methods it accelerates. Everything
//! it leaves out is the trait default from [`crate::interface`], which
//! still dispatches back through the concrete type, so an override is also
//! used inside every emulated operation built on top of it.
//!
//! Selection is purely compile time (`cfg!` on target features); there is
//! no runtime detection and no dispatch cost.

/// Implements `SimdVec` for `$vec` from its lane array, splicing in any
/// overriding methods.
macro_rules! vector_base {
    ($vec:ident $(, { $($base:tt)* })?) => {
        impl $crate::interface::SimdVec for $vec {
            #[inline]
            fn splat(value: Self::Scalar) -> Self {
                Self { lanes: [value; $vec::LANES] }
            }

            #[inline]
            fn extract_lane(&self, index: usize) -> Self::Scalar {
                self.lanes[index]
            }

            #[inline]
            fn insert_lane(&mut self, index: usize, value: Self::Scalar) {
                self.lanes[index] = value;
            }

            $($($base)*)?
        }
    };
}

/// Instantiate an unsigned integer vector.
macro_rules! uint_vector {
    (
        $vec:ident
        $(, base { $($base:tt)* })?
        $(, bitwise { $($bitwise:tt)* })?
        $(, integer { $($integer:tt)* })?
        $(, shift { $($shift:tt)* })?
        $(,)?
    ) => {
        vector_base!($vec $(, { $($base)* })?);

        impl $crate::interface::SimdBitwise for $vec {
            $($($bitwise)*)?
        }

        impl $crate::interface::SimdInteger for $vec {
            $($($integer)*)?
        }

        impl $crate::interface::SimdShift for $vec {
            $($($shift)*)?
        }

        impl $crate::interface::SimdGather for $vec {}
    };
}

/// Instantiate a signed integer vector.
macro_rules! int_vector {
    (
        $vec:ident
        $(, base { $($base:tt)* })?
        $(, bitwise { $($bitwise:tt)* })?
        $(, integer { $($integer:tt)* })?
        $(, sign { $($sign:tt)* })?
        $(, shift { $($shift:tt)* })?
        $(,)?
    ) => {
        vector_base!($vec $(, { $($base)* })?);

        impl $crate::interface::SimdBitwise for $vec {
            $($($bitwise)*)?
        }

        impl $crate::interface::SimdInteger for $vec {
            $($($integer)*)?
        }

        impl $crate::interface::SimdSign for $vec {
            $($($sign)*)?
        }

        impl $crate::interface::SimdShift for $vec {
            $($($shift)*)?
        }

        impl $crate::interface::SimdGather for $vec {}
    };
}

/// Instantiate a floating point vector.
macro_rules! float_vector {
    (
        $vec:ident
        $(, base { $($base:tt)* })?
        $(, sign { $($sign:tt)* })?
        $(, float { $($float:tt)* })?
        $(,)?
    ) => {
        vector_base!($vec $(, { $($base)* })?);

        impl $crate::interface::SimdSign for $vec {
            $($($sign)*)?
        }

        impl $crate::interface::SimdFloat for $vec {
            $($($float)*)?
        }

        impl $crate::interface::SimdGather for $vec {}
    };
}

/// Emit items only when no ISA module claims the 128-bit types.
macro_rules! cfg_not_vec128 {
    ($($item:item)*) => {
        $(
            #[cfg(not(all(
                not(feature = "force-scalar"),
                any(
                    all(target_arch = "x86_64", target_feature = "sse2"),
                    all(target_arch = "aarch64", target_feature = "neon")
                )
            )))]
            $item
        )*
    };
}

/// Emit items only when no ISA module claims the 256-bit types.
macro_rules! cfg_not_vec256 {
    ($($item:item)*) => {
        $(
            #[cfg(not(all(
                not(feature = "force-scalar"),
                target_arch = "x86_64",
                target_feature = "avx2"
            )))]
            $item
        )*
    };
}

mod portable;

#[cfg(all(not(feature = "force-scalar"), target_arch = "x86_64", target_feature = "sse2"))]
mod sse2;

#[cfg(all(not(feature = "force-scalar"), target_arch = "x86_64", target_feature = "avx2"))]
mod avx2;

#[cfg(all(not(feature = "force-scalar"), target_arch = "aarch64", target_feature = "neon"))]
mod neon;

use crate::types::*;

// ===== Pack and histogram =====
//
// Both are composed entirely from other operations, so they are
// instantiated once for every type regardless of backend.

macro_rules! packable {
    ($($vec:ident)*) => {
        $(impl $crate::interface::SimdPack for $vec {})*
    };
}

macro_rules! histogram_leaf {
    ($($vec:ident)*) => {
        $(
            impl $crate::interface::SimdHistogram for $vec {
                #[inline]
                fn histogram_add_trusted(
                    indices: &$crate::trusted::TrustedIndices<Self>,
                    bins: &mut [Self::Scalar],
                    amount: Self::Scalar,
                ) -> Result<(), $crate::error::IndexOutOfRange> {
                    $crate::emulation::histogram::bulk_add(indices, bins, amount)
                }
            }
        )*
    };
}

macro_rules! histogram_split {
    ($($vec:ident)*) => {
        $(
            impl $crate::interface::SimdHistogram for $vec {
                #[inline]
                fn histogram_add_trusted(
                    indices: &$crate::trusted::TrustedIndices<Self>,
                    bins: &mut [Self::Scalar],
                    amount: Self::Scalar,
                ) -> Result<(), $crate::error::IndexOutOfRange> {
                    $crate::emulation::histogram::split_add(indices, bins, amount)
                }
            }
        )*
    };
}

packable! {
    U8x2 U8x4 U8x8 U8x16 U8x32 U8x64 U8x128
    U16x2 U16x4 U16x8 U16x16 U16x32 U16x64
    U32x2 U32x4 U32x8 U32x16 U32x32
    U64x2 U64x4 U64x8 U64x16
    I8x2 I8x4 I8x8 I8x16 I8x32 I8x64 I8x128
    I16x2 I16x4 I16x8 I16x16 I16x32 I16x64
    I32x2 I32x4 I32x8 I32x16 I32x32
    I64x2 I64x4 I64x8 I64x16
    F32x2 F32x4 F32x8 F32x16 F32x32
    F64x2 F64x4 F64x8 F64x16
}

histogram_leaf! {
    U8x1 U16x1 U32x1 U64x1
}

histogram_split! {
    U8x2 U8x4 U8x8 U8x16 U8x32 U8x64 U8x128
    U16x2 U16x4 U16x8 U16x16 U16x32 U16x64
    U32x2 U32x4 U32x8 U32x16 U32x32
    U64x2 U64x4 U64x8 U64x16
}

/// Instruction set backing the accelerated vector types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Every operation emulated lane by lane.
    Scalar,
    /// SSE2 for 128-bit vectors - baseline on x86_64
    Sse2,
    /// AVX2 for 256-bit vectors, SSE2 for 128-bit vectors
    Avx2,
    /// NEON for 128-bit vectors - baseline on aarch64
    Neon,
}

/// The backend this build was compiled for, widest first: `force-scalar`,
/// then AVX2, SSE2, NEON, and scalar emulation as the fallback.
pub const ACTIVE: Backend = if cfg!(feature = "force-scalar") {
    Backend::Scalar
} else if cfg!(all(target_arch = "x86_64", target_feature = "avx2")) {
    Backend::Avx2
} else if cfg!(all(target_arch = "x86_64", target_feature = "sse2")) {
    Backend::Sse2
} else if cfg!(all(target_arch = "aarch64", target_feature = "neon")) {
    Backend::Neon
} else {
    Backend::Scalar
};

const TYPES_128: &[&str] = &[
    "U8x16", "I8x16", "U16x8", "I16x8", "U32x4", "I32x4", "U64x2", "I64x2", "F32x4", "F64x2",
];

const TYPES_256: &[&str] = &[
    "U8x32", "I8x32", "U16x16", "I16x16", "U32x8", "I32x8", "U64x4", "I64x4", "F32x8", "F64x4",
];

impl Backend {
    /// Returns a human-readable description of the backend
    pub const fn description(self) -> &'static str {
        match self {
            Backend::Scalar => "scalar emulation (no SIMD acceleration)",
            Backend::Sse2 => "SSE2 (128-bit)",
            Backend::Avx2 => "AVX2 (256-bit, SSE2 for 128-bit types)",
            Backend::Neon => "NEON (128-bit)",
        }
    }

    /// Whether vectors of `bits` total width have intrinsic overrides.
    pub const fn accelerates(self, bits: usize) -> bool {
        match self {
            Backend::Scalar => false,
            Backend::Sse2 | Backend::Neon => bits == 128,
            Backend::Avx2 => bits == 128 || bits == 256,
        }
    }

    /// Names of the concrete types with intrinsic overrides.
    pub fn accelerated_types(self) -> Vec<&'static str> {
        let mut types = Vec::new();
        if self.accelerates(128) {
            types.extend_from_slice(TYPES_128);
        }
        if self.accelerates(256) {
            types.extend_from_slice(TYPES_256);
        }
        types
    }
}

/// Whether `V` has intrinsic overrides in this build.
pub fn is_accelerated<V: crate::registry::VecBinding>() -> bool {
    ACTIVE.accelerates(std::mem::size_of::<V>() * 8)
}

/// Reports the selected backend at info level and returns it.
pub fn log_active_backend() -> Backend {
    log::info!("Using {} SIMD backend", ACTIVE.description());
    ACTIVE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_selection() {
        let backend = log_active_backend();
        println!("Selected backend: {:?} ({})", backend, backend.description());

        #[cfg(feature = "force-scalar")]
        assert_eq!(backend, Backend::Scalar);

        #[cfg(all(not(feature = "force-scalar"), target_arch = "x86_64", target_feature = "avx2"))]
        assert_eq!(backend, Backend::Avx2);

        #[cfg(all(not(feature = "force-scalar"), target_arch = "x86_64", not(target_feature = "avx2")))]
        assert_eq!(backend, Backend::Sse2);

        #[cfg(all(not(feature = "force-scalar"), target_arch = "aarch64"))]
        assert_eq!(backend, Backend::Neon);
    }

    #[test]
    fn test_accelerated_widths() {
        assert!(!Backend::Scalar.accelerates(128));
        assert!(Backend::Sse2.accelerates(128));
        assert!(!Backend::Sse2.accelerates(256));
        assert_eq!(Backend::Avx2.accelerated_types().len(), 20);
        assert!(!is_accelerated::<U32x1>());
    }
}
