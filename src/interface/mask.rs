use std::fmt::Debug;

use crate::emulation::mask as emu;
use crate::error::IndexOutOfRange;

/// Emits a mask connective in vector, `bool` and in-place forms.
macro_rules! logic_family {
    ($(#[$meta:meta])* $op:ident, $op_s:ident, $opa:ident, $opa_s:ident => $lane:expr) => {
        $(#[$meta])*
        #[inline]
        fn $op(self, b: Self) -> Self {
            emu::mask_zip(self, b, $lane)
        }

        #[inline]
        fn $op_s(self, b: bool) -> Self {
            self.$op(Self::splat(b))
        }

        #[inline]
        fn $opa(&mut self, b: Self) -> &mut Self {
            *self = (*self).$op(b);
            self
        }

        #[inline]
        fn $opa_s(&mut self, b: bool) -> &mut Self {
            *self = (*self).$op_s(b);
            self
        }
    };
}

/// Per-lane selection of vector operations.
///
/// Masks are pure values; all connectives satisfy the usual boolean
/// algebra lane by lane. How a backend stores the lanes is not observable
/// through this interface.
pub trait SimdMask: Copy + Debug + PartialEq + Send + Sync + 'static {
    const LENGTH: usize;

    /// Broadcast one boolean to every lane.
    fn splat(value: bool) -> Self;

    /// Panics if `index >= LENGTH`.
    fn extract_lane(&self, index: usize) -> bool;

    /// Panics if `index >= LENGTH`.
    fn insert_lane(&mut self, index: usize, value: bool);

    #[inline]
    fn length(&self) -> usize {
        Self::LENGTH
    }

    #[inline]
    fn zero() -> Self {
        Self::splat(false)
    }

    #[inline]
    fn from_fn(f: impl FnMut(usize) -> bool) -> Self {
        emu::mask_from_fn(f)
    }

    /// Read the first `LENGTH` values of `values`.
    #[inline]
    fn from_slice(values: &[bool]) -> Result<Self, IndexOutOfRange> {
        if values.len() < Self::LENGTH {
            return Err(IndexOutOfRange::new(Self::LENGTH - 1, values.len()));
        }
        Ok(Self::from_fn(|i| values[i]))
    }

    /// Lane `i` is bit `i` of `bits`. Bits at or above `LENGTH` are ignored.
    #[inline]
    fn from_bitmask(bits: u128) -> Self {
        Self::from_fn(|i| (bits >> i) & 1 == 1)
    }

    /// Bit `i` is lane `i`, as produced by `movemask`.
    #[inline]
    fn to_bitmask(&self) -> u128 {
        emu::mask_to_bitmask(self)
    }

    #[inline]
    fn extract(&self, index: usize) -> Result<bool, IndexOutOfRange> {
        IndexOutOfRange::check(index, Self::LENGTH).map(|i| self.extract_lane(i))
    }

    #[inline]
    fn insert(&mut self, index: usize, value: bool) -> Result<&mut Self, IndexOutOfRange> {
        let i = IndexOutOfRange::check(index, Self::LENGTH)?;
        self.insert_lane(i, value);
        Ok(self)
    }

    logic_family!(land, land_s, landa, landa_s => |a, b| a & b);
    logic_family!(lor, lor_s, lora, lora_s => |a, b| a | b);
    logic_family!(lxor, lxor_s, lxora, lxora_s => |a, b| a ^ b);
    logic_family!(
        /// `!self & b`.
        landnot, landnot_s, landnota, landnota_s => |a: bool, b: bool| !a & b
    );

    #[inline]
    fn lnot(self) -> Self {
        emu::mask_map(self, |a| !a)
    }

    #[inline]
    fn lnota(&mut self) -> &mut Self {
        *self = (*self).lnot();
        self
    }

    /// True iff every lane is true.
    #[inline]
    fn hland(&self) -> bool {
        emu::mask_fold(self, true, |acc, a| acc & a)
    }

    /// True iff any lane is true.
    #[inline]
    fn hlor(&self) -> bool {
        emu::mask_fold(self, false, |acc, a| acc | a)
    }

    /// True iff an odd number of lanes are true.
    #[inline]
    fn hlxor(&self) -> bool {
        emu::mask_fold(self, false, |acc, a| acc ^ a)
    }

    /// True iff every lane matches.
    #[inline]
    fn cmpe(&self, b: &Self) -> bool {
        (0..Self::LENGTH).all(|i| self.extract_lane(i) == b.extract_lane(i))
    }

    /// Number of true lanes.
    #[inline]
    fn count(&self) -> usize {
        (0..Self::LENGTH).filter(|&i| self.extract_lane(i)).count()
    }
}
