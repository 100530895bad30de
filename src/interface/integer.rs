use num_traits::Zero;

use super::SimdBitwise;
use crate::emulation;
use crate::scalar::IntScalar;

/// Integer arithmetic beyond the base set: remainder, saturating add and
/// subtract, and C-style logical connectives.
pub trait SimdInteger: SimdBitwise {
    binary_family!(
        /// Lane-wise remainder; `x % 0 == x`.
        rem, rem_m, rem_s, rem_ms, rema, rema_m, rema_s, rema_ms
            => <Self::Scalar as IntScalar>::lane_rem
    );
    binary_family!(
        /// Saturating addition.
        sadd, sadd_m, sadd_s, sadd_ms, sadda, sadda_m, sadda_s, sadda_ms
            => <Self::Scalar as IntScalar>::lane_sadd
    );
    binary_family!(
        /// Saturating subtraction.
        ssub, ssub_m, ssub_s, ssub_ms, ssuba, ssuba_m, ssuba_s, ssuba_ms
            => <Self::Scalar as IntScalar>::lane_ssub
    );

    /// Lane is true where both operands are non-zero.
    #[inline]
    fn land(self, b: Self) -> Self::Mask {
        emulation::compare(&self, &b, |x: Self::Scalar, y: Self::Scalar| !x.is_zero() && !y.is_zero())
    }

    #[inline]
    fn land_s(self, b: Self::Scalar) -> Self::Mask {
        self.land(Self::splat(b))
    }

    /// Lane is true where either operand is non-zero.
    #[inline]
    fn lor(self, b: Self) -> Self::Mask {
        emulation::compare(&self, &b, |x: Self::Scalar, y: Self::Scalar| !x.is_zero() || !y.is_zero())
    }

    #[inline]
    fn lor_s(self, b: Self::Scalar) -> Self::Mask {
        self.lor(Self::splat(b))
    }
}
