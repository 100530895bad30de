//! Float helpers that do not map onto a single `num_traits::Float` call.

use num_traits::Float;

use crate::interface::SimdVec;
use crate::registry::VecBinding;
use crate::scalar::FloatScalar;

#[inline]
pub fn is_zero_or_subnormal<T: FloatScalar>(x: T) -> bool {
    x == T::zero() || x.lane_is_subnormal()
}

/// Lane-wise `(sin, cos)`.
#[inline]
pub fn sincos<V>(a: V) -> (V, V)
where
    V: SimdVec + VecBinding<Scalar: FloatScalar>,
{
    let mut sin = a;
    let mut cos = a;
    for i in 0..V::LENGTH {
        let (s, c) = Float::sin_cos(a.extract_lane(i));
        sin.insert_lane(i, s);
        cos.insert_lane(i, c);
    }
    (sin, cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_or_subnormal() {
        assert!(is_zero_or_subnormal(0.0f32));
        assert!(is_zero_or_subnormal(-0.0f64));
        assert!(is_zero_or_subnormal(f32::MIN_POSITIVE / 2.0));
        assert!(!is_zero_or_subnormal(f32::MIN_POSITIVE));
        assert!(!is_zero_or_subnormal(f64::NAN));
    }
}
