//! Portable fixed-width SIMD vectors.
//!
//! Every concrete type (`U8x16`, `F64x4`, ...) exposes one trait-based
//! interface. Operations an instruction set can do natively are overridden
//! by the backend selected at compile time; everything else falls back to
//! a lane-by-lane emulation with identical semantics.
//!
//! ```
//! use ferrous_lanes::prelude::*;
//!
//! let a = U32x4::from_array([1, 2, 3, 4]);
//! let b = a.mul_s(3).add(U32x4::splat(1));
//! assert_eq!(b.to_array(), [4, 7, 10, 13]);
//! assert_eq!(b.hadd(), 34);
//!
//! // Masked operations keep the receiver's lanes where the mask is false.
//! let m = b.cmpgt_s(8);
//! assert_eq!(b.sub_ms(&m, 10).to_array(), [4, 7, 0, 3]);
//!
//! // Width-generic code names vectors through the registry.
//! fn double<V: SimdVec>(v: V) -> V {
//!     v.add(v)
//! }
//! let v: Vector<i32, 4> = I32x4::splat(-2);
//! assert_eq!(double(v), I32x4::splat(-4));
//! ```
//!
//! Crate features:
//!
//! - `force-scalar`: disable every intrinsic backend.
//! - `debug-logging`: keep the alignment and histogram diagnostics in
//!   release builds.

mod backend;
pub mod emulation;
pub mod error;
pub mod interface;
pub mod proxy;
pub mod registry;
pub mod scalar;
pub mod trusted;
pub mod types;

pub use backend::{ACTIVE, Backend, is_accelerated, log_active_backend};
pub use error::IndexOutOfRange;
pub use trusted::{TrustedIndex, TrustedIndices};

/// Traits, concrete types and registry aliases in one import.
pub mod prelude {
    pub use crate::error::IndexOutOfRange;
    pub use crate::interface::{
        SimdBitwise, SimdConvert, SimdFloat, SimdFloatVec, SimdGather, SimdHistogram, SimdIntVec,
        SimdInteger, SimdMask, SimdPack, SimdShift, SimdSign, SimdSwizzle, SimdUintVec, SimdVec,
    };
    pub use crate::proxy::{IntermediateIndex, IntermediateMask};
    pub use crate::registry::{
        DoubleLength, FloatCounterpart, HalfLength, IntCounterpart, Mask, Swizzle, UintCounterpart,
        VecBinding, Vector, VectorOf,
    };
    pub use crate::scalar::{FloatScalar, IntScalar, SignedScalar, SimdScalar, UintScalar};
    pub use crate::trusted::{TrustedIndex, TrustedIndices};
    pub use crate::types::*;
}
