use std::fmt::Debug;

use crate::error::IndexOutOfRange;

/// Lane permutation: lane `i` of a swizzled vector comes from lane
/// `self[i]` of the source.
///
/// Every stored target is below `LENGTH`. The checked constructors reject
/// anything else, so swizzling itself cannot fail.
pub trait SimdSwizzle: Copy + Debug + PartialEq + Send + Sync + 'static {
    const LENGTH: usize;

    /// `self[i] == i` for every lane.
    fn identity() -> Self;

    /// Panics if `index >= LENGTH`.
    fn extract_lane(&self, index: usize) -> usize;

    /// Panics if `index >= LENGTH`. `target` must be below `LENGTH`: debug
    /// builds assert it, release builds reduce it modulo `LENGTH`.
    fn insert_lane(&mut self, index: usize, target: usize);

    #[inline]
    fn length(&self) -> usize {
        Self::LENGTH
    }

    /// Build from the first `LENGTH` targets of `targets`, each of which
    /// must be below `LENGTH`.
    fn from_slice(targets: &[usize]) -> Result<Self, IndexOutOfRange> {
        if targets.len() < Self::LENGTH {
            return Err(IndexOutOfRange::new(Self::LENGTH - 1, targets.len()));
        }
        let mut out = Self::identity();
        for (lane, &target) in targets.iter().take(Self::LENGTH).enumerate() {
            out.insert_lane(lane, IndexOutOfRange::check(target, Self::LENGTH)?);
        }
        Ok(out)
    }

    #[inline]
    fn extract(&self, index: usize) -> Result<usize, IndexOutOfRange> {
        IndexOutOfRange::check(index, Self::LENGTH).map(|i| self.extract_lane(i))
    }

    #[inline]
    fn insert(&mut self, index: usize, target: usize) -> Result<&mut Self, IndexOutOfRange> {
        let i = IndexOutOfRange::check(index, Self::LENGTH)?;
        let target = IndexOutOfRange::check(target, Self::LENGTH)?;
        self.insert_lane(i, target);
        Ok(self)
    }
}
