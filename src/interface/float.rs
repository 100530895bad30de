use num_traits::{Float, One, Zero};

use super::SimdSign;
use crate::emulation::{self, math};
use crate::registry::VecBinding;
use crate::scalar::FloatScalar;

/// Floating point math. Every function is applied lane by lane with the
/// scalar `num_traits::Float` routine of the same name.
pub trait SimdFloat: SimdSign + VecBinding<Scalar: FloatScalar> {
    unary_family!(sqrt, sqrt_m, sqrta, sqrta_m => <Self::Scalar as Float>::sqrt);
    unary_family!(
        /// `1 / sqrt(x)`, computed exactly rather than estimated.
        rsqrt, rsqrt_m, rsqrta, rsqrta_m => <Self::Scalar as FloatScalar>::lane_rsqrt
    );
    unary_family!(sin, sin_m, sina, sina_m => <Self::Scalar as Float>::sin);
    unary_family!(cos, cos_m, cosa, cosa_m => <Self::Scalar as Float>::cos);
    unary_family!(tan, tan_m, tana, tana_m => <Self::Scalar as Float>::tan);
    unary_family!(exp, exp_m, expa, expa_m => <Self::Scalar as Float>::exp);
    unary_family!(
        /// Natural logarithm.
        log, log_m, loga, loga_m => <Self::Scalar as Float>::ln
    );
    unary_family!(log2, log2_m, log2a, log2a_m => <Self::Scalar as Float>::log2);
    unary_family!(log10, log10_m, log10a, log10a_m => <Self::Scalar as Float>::log10);
    unary_family!(floor, floor_m, floora, floora_m => <Self::Scalar as Float>::floor);
    unary_family!(ceil, ceil_m, ceila, ceila_m => <Self::Scalar as Float>::ceil);
    unary_family!(
        /// Round half away from zero.
        round, round_m, rounda, rounda_m => <Self::Scalar as Float>::round
    );
    unary_family!(trunc, trunc_m, trunca, trunca_m => <Self::Scalar as Float>::trunc);

    /// `1 / self`.
    #[inline]
    fn rcp(self) -> Self {
        self.rcp_s(Self::Scalar::one())
    }

    #[inline]
    fn rcp_m(self, mask: &Self::Mask) -> Self {
        self.rcp_ms(mask, Self::Scalar::one())
    }

    /// `b / self`.
    #[inline]
    fn rcp_s(self, b: Self::Scalar) -> Self {
        emulation::map(self, |x: Self::Scalar| b / x)
    }

    #[inline]
    fn rcp_ms(self, mask: &Self::Mask, b: Self::Scalar) -> Self {
        emulation::map_masked(self, mask, |x: Self::Scalar| b / x)
    }

    #[inline]
    fn rcpa(&mut self) -> &mut Self {
        *self = (*self).rcp();
        self
    }

    #[inline]
    fn rcpa_m(&mut self, mask: &Self::Mask) -> &mut Self {
        *self = (*self).rcp_m(mask);
        self
    }

    #[inline]
    fn rcpa_s(&mut self, b: Self::Scalar) -> &mut Self {
        *self = (*self).rcp_s(b);
        self
    }

    #[inline]
    fn rcpa_ms(&mut self, mask: &Self::Mask, b: Self::Scalar) -> &mut Self {
        *self = (*self).rcp_ms(mask, b);
        self
    }

    /// Sine and cosine in one pass.
    #[inline]
    fn sincos(self) -> (Self, Self) {
        math::sincos(self)
    }

    binary_family!(
        /// `self` raised to the lane-wise power `b`.
        pow, pow_m, pow_s, pow_ms, powa, powa_m, powa_s, powa_ms => <Self::Scalar as Float>::powf
    );

    predicate!(
        /// Neither infinite nor NaN.
        isfin => <Self::Scalar as Float>::is_finite
    );
    predicate!(isinf => <Self::Scalar as Float>::is_infinite);
    /// Not NaN.
    #[inline]
    fn isan(self) -> Self::Mask {
        emulation::predicate(&self, |x: Self::Scalar| !x.is_nan())
    }
    predicate!(isnan => <Self::Scalar as Float>::is_nan);
    predicate!(isnorm => <Self::Scalar as Float>::is_normal);
    predicate!(issub => <Self::Scalar as FloatScalar>::lane_is_subnormal);
    predicate!(
        /// Positive or negative zero.
        iszero => |x: Self::Scalar| x.is_zero()
    );
    predicate!(
        /// Zero or subnormal.
        iszerosub => math::is_zero_or_subnormal
    );
}
