use std::fmt::Debug;

use num_traits::{One, Zero};

use crate::emulation::{self, memory};
use crate::error::IndexOutOfRange;
use crate::proxy::{IntermediateIndex, IntermediateMask};
use crate::registry::VecBinding;
use crate::scalar::SimdScalar;
use crate::trusted::TrustedIndex;

/// Emits the four forms of a three-operand fused operation.
macro_rules! fused_family {
    ($(#[$meta:meta])* $op:ident, $op_m:ident, $opa:ident, $opa_m:ident => $lane:expr) => {
        $(#[$meta])*
        #[inline]
        fn $op(self, b: Self, c: Self) -> Self {
            emulation::zip3(self, b, c, $lane)
        }

        #[inline]
        fn $op_m(self, mask: &Self::Mask, b: Self, c: Self) -> Self {
            emulation::zip3_masked(self, mask, b, c, $lane)
        }

        #[inline]
        fn $opa(&mut self, b: Self, c: Self) -> &mut Self {
            *self = (*self).$op(b, c);
            self
        }

        #[inline]
        fn $opa_m(&mut self, mask: &Self::Mask, b: Self, c: Self) -> &mut Self {
            *self = (*self).$op_m(mask, b, c);
            self
        }
    };
}

/// Base capability shared by every vector type.
///
/// `splat`, `extract_lane` and `insert_lane` are the backend primitives; every
/// other method has a default routed through [`crate::emulation`].
pub trait SimdVec: VecBinding + Copy + Debug + PartialEq + Send + Sync {
    /// Broadcast `value` into every lane.
    fn splat(value: Self::Scalar) -> Self;

    /// Read lane `index`. Panics if `index >= LENGTH`; use
    /// [`extract`](Self::extract) for a checked read.
    fn extract_lane(&self, index: usize) -> Self::Scalar;

    /// Write lane `index`. Panics if `index >= LENGTH`; use
    /// [`insert`](Self::insert) for a checked write.
    fn insert_lane(&mut self, index: usize, value: Self::Scalar);

    // ===== Construction and lane access =====

    #[inline]
    fn length(&self) -> usize {
        Self::LENGTH
    }

    /// Byte alignment required by [`loada`](Self::loada) and
    /// [`storea`](Self::storea).
    #[inline]
    fn alignment(&self) -> usize {
        Self::ALIGNMENT
    }

    #[inline]
    fn zero() -> Self {
        Self::splat(Self::Scalar::zero())
    }

    #[inline]
    fn from_fn(f: impl FnMut(usize) -> Self::Scalar) -> Self {
        emulation::from_fn(f)
    }

    /// Read the first `LENGTH` values of `values`.
    #[inline]
    fn from_slice(values: &[Self::Scalar]) -> Result<Self, IndexOutOfRange> {
        let mut out = Self::zero();
        out.load(values)?;
        Ok(out)
    }

    #[inline]
    fn extract(&self, index: usize) -> Result<Self::Scalar, IndexOutOfRange> {
        IndexOutOfRange::check(index, Self::LENGTH).map(|i| self.extract_lane(i))
    }

    #[inline]
    fn insert(&mut self, index: usize, value: Self::Scalar) -> Result<&mut Self, IndexOutOfRange> {
        let i = IndexOutOfRange::check(index, Self::LENGTH)?;
        self.insert_lane(i, value);
        Ok(self)
    }

    #[inline]
    fn extract_trusted(&self, index: TrustedIndex<Self>) -> Self::Scalar {
        self.extract_lane(index.get())
    }

    #[inline]
    fn insert_trusted(&mut self, index: TrustedIndex<Self>, value: Self::Scalar) -> &mut Self {
        self.insert_lane(index.get(), value);
        self
    }

    /// Single-lane view supporting read, write and compound assignment.
    #[inline]
    fn at(&mut self, index: usize) -> Result<IntermediateIndex<'_, Self>, IndexOutOfRange> {
        let index = TrustedIndex::new(index)?;
        Ok(IntermediateIndex::new(index, self))
    }

    #[inline]
    fn at_trusted(&mut self, index: TrustedIndex<Self>) -> IntermediateIndex<'_, Self> {
        IntermediateIndex::new(index, self)
    }

    /// Masked view: every assignment through the proxy only touches lanes
    /// where `mask` is true.
    #[inline]
    fn masked(&mut self, mask: Self::Mask) -> IntermediateMask<'_, Self> {
        IntermediateMask::new(mask, self)
    }

    // ===== Assignment =====

    #[inline]
    fn assign(&mut self, b: Self) -> &mut Self {
        *self = b;
        self
    }

    #[inline]
    fn assign_m(&mut self, mask: &Self::Mask, b: Self) -> &mut Self {
        *self = (*self).blend(mask, b);
        self
    }

    #[inline]
    fn assign_s(&mut self, b: Self::Scalar) -> &mut Self {
        *self = Self::splat(b);
        self
    }

    #[inline]
    fn assign_ms(&mut self, mask: &Self::Mask, b: Self::Scalar) -> &mut Self {
        *self = (*self).blend_s(mask, b);
        self
    }

    // ===== Memory =====

    /// Load `LENGTH` values from the front of `src`. Any alignment.
    #[inline]
    fn load(&mut self, src: &[Self::Scalar]) -> Result<&mut Self, IndexOutOfRange> {
        memory::load(self, src)?;
        Ok(self)
    }

    /// Load only the lanes where `mask` is true. Only those lanes need to
    /// fit inside `src`.
    #[inline]
    fn load_m(&mut self, mask: &Self::Mask, src: &[Self::Scalar]) -> Result<&mut Self, IndexOutOfRange> {
        memory::load_masked(self, mask, src)?;
        Ok(self)
    }

    /// Load `LENGTH` values from an aligned pointer.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reads of `LENGTH` scalars and aligned to
    /// [`alignment`](Self::alignment) bytes.
    #[inline]
    unsafe fn loada(&mut self, src: *const Self::Scalar) -> &mut Self {
        unsafe { memory::load_aligned(self, src) };
        self
    }

    /// # Safety
    ///
    /// As [`loada`](Self::loada), for the lanes where `mask` is true.
    #[inline]
    unsafe fn loada_m(&mut self, mask: &Self::Mask, src: *const Self::Scalar) -> &mut Self {
        unsafe { memory::load_aligned_masked(self, mask, src) };
        self
    }

    #[inline]
    fn store(&self, dst: &mut [Self::Scalar]) -> Result<(), IndexOutOfRange> {
        memory::store(self, dst)
    }

    #[inline]
    fn store_m(&self, mask: &Self::Mask, dst: &mut [Self::Scalar]) -> Result<(), IndexOutOfRange> {
        memory::store_masked(self, mask, dst)
    }

    /// Store `LENGTH` values through an aligned pointer.
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writes of `LENGTH` scalars and aligned to
    /// [`alignment`](Self::alignment) bytes.
    #[inline]
    unsafe fn storea(&self, dst: *mut Self::Scalar) {
        unsafe { memory::store_aligned(self, dst) }
    }

    /// # Safety
    ///
    /// As [`storea`](Self::storea), for the lanes where `mask` is true.
    #[inline]
    unsafe fn storea_m(&self, mask: &Self::Mask, dst: *mut Self::Scalar) {
        unsafe { memory::store_aligned_masked(self, mask, dst) }
    }

    // ===== Blend and swizzle =====

    /// Lane `i` is `b[i]` where `mask[i]` is true, else `self[i]`.
    #[inline]
    fn blend(self, mask: &Self::Mask, b: Self) -> Self {
        emulation::blend(self, mask, b)
    }

    #[inline]
    fn blend_s(self, mask: &Self::Mask, b: Self::Scalar) -> Self {
        emulation::blend_scalar(self, mask, b)
    }

    #[inline]
    fn blenda(&mut self, mask: &Self::Mask, b: Self) -> &mut Self {
        *self = (*self).blend(mask, b);
        self
    }

    #[inline]
    fn blenda_s(&mut self, mask: &Self::Mask, b: Self::Scalar) -> &mut Self {
        *self = (*self).blend_s(mask, b);
        self
    }

    /// Lane `i` is `self[swizzle[i]]`.
    #[inline]
    fn swizzle(self, swizzle: &Self::Swizzle) -> Self {
        emulation::swizzle(self, swizzle)
    }

    #[inline]
    fn swizzlea(&mut self, swizzle: &Self::Swizzle) -> &mut Self {
        *self = (*self).swizzle(swizzle);
        self
    }

    // ===== Arithmetic =====

    binary_family!(
        /// Lane-wise addition. Integer lanes wrap.
        add, add_m, add_s, add_ms, adda, adda_m, adda_s, adda_ms
            => <Self::Scalar as SimdScalar>::lane_add
    );
    binary_family!(
        /// Lane-wise `self - b`. Integer lanes wrap.
        sub, sub_m, sub_s, sub_ms, suba, suba_m, suba_s, suba_ms
            => <Self::Scalar as SimdScalar>::lane_sub
    );
    binary_family!(
        /// Lane-wise `b - self`.
        subfrom, subfrom_m, subfrom_s, subfrom_ms, subfroma, subfroma_m, subfroma_s, subfroma_ms
            => |a: Self::Scalar, b: Self::Scalar| b.lane_sub(a)
    );
    binary_family!(
        /// Lane-wise multiplication. Integer lanes keep the low half.
        mul, mul_m, mul_s, mul_ms, mula, mula_m, mula_s, mula_ms
            => <Self::Scalar as SimdScalar>::lane_mul
    );
    binary_family!(
        /// Lane-wise division. Integer division by zero yields all ones for
        /// unsigned lanes and `-1` for signed lanes.
        div, div_m, div_s, div_ms, diva, diva_m, diva_s, diva_ms
            => <Self::Scalar as SimdScalar>::lane_div
    );
    binary_family!(
        /// Lane-wise minimum; unordered float lanes yield `b`.
        min, min_m, min_s, min_ms, mina, mina_m, mina_s, mina_ms
            => <Self::Scalar as SimdScalar>::lane_min
    );
    binary_family!(
        /// Lane-wise maximum; unordered float lanes yield `b`.
        max, max_m, max_s, max_ms, maxa, maxa_m, maxa_s, maxa_ms
            => <Self::Scalar as SimdScalar>::lane_max
    );

    // ===== Increment and decrement =====

    /// Add one to every lane, returning the previous value.
    #[inline]
    fn postinc(&mut self) -> Self {
        let previous = *self;
        self.adda_s(Self::Scalar::one());
        previous
    }

    #[inline]
    fn postinc_m(&mut self, mask: &Self::Mask) -> Self {
        let previous = *self;
        self.adda_ms(mask, Self::Scalar::one());
        previous
    }

    #[inline]
    fn preinc(&mut self) -> &mut Self {
        self.adda_s(Self::Scalar::one())
    }

    #[inline]
    fn preinc_m(&mut self, mask: &Self::Mask) -> &mut Self {
        self.adda_ms(mask, Self::Scalar::one())
    }

    #[inline]
    fn postdec(&mut self) -> Self {
        let previous = *self;
        self.suba_s(Self::Scalar::one());
        previous
    }

    #[inline]
    fn postdec_m(&mut self, mask: &Self::Mask) -> Self {
        let previous = *self;
        self.suba_ms(mask, Self::Scalar::one());
        previous
    }

    #[inline]
    fn predec(&mut self) -> &mut Self {
        self.suba_s(Self::Scalar::one())
    }

    #[inline]
    fn predec_m(&mut self, mask: &Self::Mask) -> &mut Self {
        self.suba_ms(mask, Self::Scalar::one())
    }

    // ===== Fused operations =====
    //
    // Computed as two rounded operations; no backend here emits a true FMA.

    fused_family!(
        /// `self * b + c`
        fmuladd, fmuladd_m, fmuladda, fmuladda_m
            => |a: Self::Scalar, b: Self::Scalar, c: Self::Scalar| a.lane_mul(b).lane_add(c)
    );
    fused_family!(
        /// `self * b - c`
        fmulsub, fmulsub_m, fmulsuba, fmulsuba_m
            => |a: Self::Scalar, b: Self::Scalar, c: Self::Scalar| a.lane_mul(b).lane_sub(c)
    );
    fused_family!(
        /// `(self + b) * c`
        faddmul, faddmul_m, faddmula, faddmula_m
            => |a: Self::Scalar, b: Self::Scalar, c: Self::Scalar| a.lane_add(b).lane_mul(c)
    );
    fused_family!(
        /// `(self - b) * c`
        fsubmul, fsubmul_m, fsubmula, fsubmula_m
            => |a: Self::Scalar, b: Self::Scalar, c: Self::Scalar| a.lane_sub(b).lane_mul(c)
    );

    // ===== Comparisons =====

    compare_family!(cmpeq, cmpeq_s => |a: Self::Scalar, b: Self::Scalar| a == b);
    compare_family!(cmpne, cmpne_s => |a: Self::Scalar, b: Self::Scalar| a != b);
    compare_family!(cmpgt, cmpgt_s => |a: Self::Scalar, b: Self::Scalar| a > b);
    compare_family!(cmplt, cmplt_s => |a: Self::Scalar, b: Self::Scalar| a < b);
    compare_family!(cmpge, cmpge_s => |a: Self::Scalar, b: Self::Scalar| a >= b);
    compare_family!(cmple, cmple_s => |a: Self::Scalar, b: Self::Scalar| a <= b);

    /// True iff every lane equals the matching lane of `b`.
    #[inline]
    fn cmpe(&self, b: &Self) -> bool {
        emulation::all_lanes(self, b, |x, y| x == y)
    }

    /// True iff every lane equals `b`.
    #[inline]
    fn cmpe_s(&self, b: Self::Scalar) -> bool {
        self.cmpe(&Self::splat(b))
    }

    /// True iff no two lanes hold equal values.
    #[inline]
    fn unique(&self) -> bool {
        emulation::unique(self)
    }

    // ===== Reductions =====

    reduce_family!(
        /// Sum of all lanes, folded from lane 0.
        hadd, hadd_m, hadd_s, hadd_ms => <Self::Scalar as SimdScalar>::lane_add,
            identity = Self::Scalar::zero()
    );
    reduce_family!(
        /// Product of all lanes.
        hmul, hmul_m, hmul_s, hmul_ms => <Self::Scalar as SimdScalar>::lane_mul,
            identity = Self::Scalar::one()
    );
    reduce_family!(
        /// Largest lane.
        hmax, hmax_m, hmax_s, hmax_ms => <Self::Scalar as SimdScalar>::lane_max,
            identity = <Self::Scalar as SimdScalar>::LOWEST
    );
    reduce_family!(
        /// Smallest lane.
        hmin, hmin_m, hmin_s, hmin_ms => <Self::Scalar as SimdScalar>::lane_min,
            identity = <Self::Scalar as SimdScalar>::HIGHEST
    );
}
