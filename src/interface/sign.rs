use super::SimdVec;
use crate::registry::VecBinding;
use crate::scalar::SignedScalar;

/// Sign-aware operations, implemented for signed integer and float vectors
/// only. Unsigned vectors do not implement this trait:
///
/// ```compile_fail
/// use ferrous_lanes::prelude::*;
///
/// let v = U32x4::splat(3);
/// let _ = v.neg();
/// ```
///
/// ```
/// use ferrous_lanes::prelude::*;
///
/// let v = I32x4::from_array([3, -2, 0, i32::MIN]);
/// assert_eq!(v.neg().to_array(), [-3, 2, 0, i32::MIN]);
/// assert_eq!(v.abs().to_array(), [3, 2, 0, i32::MIN]);
/// ```
pub trait SimdSign: SimdVec + VecBinding<Scalar: SignedScalar> {
    unary_family!(
        /// Lane-wise negation. `MIN` wraps to itself for integer lanes.
        neg, neg_m, nega, nega_m => <Self::Scalar as SignedScalar>::lane_neg
    );
    unary_family!(
        /// Lane-wise absolute value.
        abs, abs_m, absa, absa_m => <Self::Scalar as SignedScalar>::lane_abs
    );
    binary_family!(
        /// Magnitude of `self` with the sign of `b`.
        copysign, copysign_m, copysign_s, copysign_ms,
        copysigna, copysigna_m, copysigna_s, copysigna_ms
            => <Self::Scalar as SignedScalar>::lane_copysign
    );
}
