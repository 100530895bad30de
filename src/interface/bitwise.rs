use num_traits::Zero;

use super::SimdVec;
use crate::registry::VecBinding;
use crate::scalar::IntScalar;

/// Bitwise operations on integer lanes.
pub trait SimdBitwise: SimdVec + VecBinding<Scalar: IntScalar> {
    binary_family!(
        band, band_m, band_s, band_ms, banda, banda_m, banda_s, banda_ms
            => <Self::Scalar as IntScalar>::lane_and
    );
    binary_family!(
        bor, bor_m, bor_s, bor_ms, bora, bora_m, bora_s, bora_ms
            => <Self::Scalar as IntScalar>::lane_or
    );
    binary_family!(
        bxor, bxor_m, bxor_s, bxor_ms, bxora, bxora_m, bxora_s, bxora_ms
            => <Self::Scalar as IntScalar>::lane_xor
    );
    binary_family!(
        /// `!self & b`, the operand order of `pandn`.
        bandnot, bandnot_m, bandnot_s, bandnot_ms, bandnota, bandnota_m, bandnota_s, bandnota_ms
            => <Self::Scalar as IntScalar>::lane_andnot
    );
    unary_family!(bnot, bnot_m, bnota, bnota_m => <Self::Scalar as IntScalar>::lane_not);

    reduce_family!(
        hband, hband_m, hband_s, hband_ms => <Self::Scalar as IntScalar>::lane_and,
            identity = <Self::Scalar as IntScalar>::ALL_ONES
    );
    reduce_family!(
        hbor, hbor_m, hbor_s, hbor_ms => <Self::Scalar as IntScalar>::lane_or,
            identity = Self::Scalar::zero()
    );
    reduce_family!(
        hbxor, hbxor_m, hbxor_s, hbxor_ms => <Self::Scalar as IntScalar>::lane_xor,
            identity = Self::Scalar::zero()
    );
}
