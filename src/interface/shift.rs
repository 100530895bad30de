use super::SimdInteger;
use crate::registry::UintCounterpart;
use crate::scalar::IntScalar;

/// Shifts and rotates.
///
/// Vector forms take one amount per lane in the unsigned counterpart,
/// scalar forms a single `u32`. Shifting by the lane width or more gives 0,
/// except `rsh` on signed lanes which fills with the sign bit. Rotate
/// amounts are reduced modulo the lane width.
pub trait SimdShift: SimdInteger + UintCounterpart {
    shift_family!(
        /// Left shift.
        lsh, lsh_m, lsh_s, lsh_ms, lsha, lsha_m, lsha_s, lsha_ms => IntScalar::lane_shl
    );
    shift_family!(
        /// Right shift: logical for unsigned lanes, arithmetic for signed.
        rsh, rsh_m, rsh_s, rsh_ms, rsha, rsha_m, rsha_s, rsha_ms => IntScalar::lane_shr
    );
    shift_family!(
        rol, rol_m, rol_s, rol_ms, rola, rola_m, rola_s, rola_ms => IntScalar::lane_rotl
    );
    shift_family!(
        ror, ror_m, ror_s, ror_ms, rora, rora_m, rora_s, rora_ms => IntScalar::lane_rotr
    );
}
