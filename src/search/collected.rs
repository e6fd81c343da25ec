//! Compact record of which reward cells a partial path has already claimed.

use smallvec::SmallVec;

const WORD_BITS: usize = u64::BITS as usize;

/// Number of reward-bearing cells a [`CollectedMask`] tracks without a heap
/// allocation. Larger grids still work; the mask spills to the heap.
pub const INLINE_REWARD_CAPACITY: usize = 2 * WORD_BITS;

/// A growable bit-set over reward indices (see
/// [`RewardIndex`](crate::search::RewardIndex)).
///
/// Bits are only ever added, and the backing storage is only extended up to
/// the word holding the highest set bit, so two masks holding the same bits
/// always have the same representation. This keeps the derived `Eq` and
/// `Hash` usable as part of a deduplication key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CollectedMask {
    words: SmallVec<[u64; 2]>,
}

impl CollectedMask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, bit: usize) -> bool {
        self.words
            .get(bit / WORD_BITS)
            .is_some_and(|word| word & (1 << (bit % WORD_BITS)) != 0)
    }

    pub fn insert(&mut self, bit: usize) {
        let word = bit / WORD_BITS;
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1 << (bit % WORD_BITS);
    }

    /// A copy of this mask with `bit` set.
    pub fn with(&self, bit: usize) -> Self {
        let mut mask = self.clone();
        mask.insert(bit);
        mask
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether every bit of `self` is also set in `other`.
    pub fn is_subset(&self, other: &CollectedMask) -> bool {
        self.words.len() <= other.words.len()
            && self
                .words
                .iter()
                .zip(other.words.iter())
                .all(|(mine, theirs)| mine & !theirs == 0)
    }

    pub fn spilled(&self) -> bool {
        self.words.spilled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut mask = CollectedMask::new();
        assert!(mask.is_empty());
        mask.insert(3);
        mask.insert(63);
        assert!(mask.contains(3));
        assert!(mask.contains(63));
        assert!(!mask.contains(4));
        assert!(!mask.contains(64));
        assert!(!mask.contains(10_000));
        assert_eq!(mask.len(), 2);
    }

    #[test]
    fn stays_inline_up_to_capacity() {
        let mut mask = CollectedMask::new();
        for bit in 0..INLINE_REWARD_CAPACITY {
            mask.insert(bit);
        }
        assert_eq!(mask.len(), 128);
        assert!(!mask.spilled());

        mask.insert(INLINE_REWARD_CAPACITY);
        assert!(mask.spilled());
        assert!(mask.contains(128));
        assert_eq!(mask.len(), 129);
    }

    #[test]
    fn equal_bits_mean_equal_masks() {
        let a = CollectedMask::new().with(200).with(1);
        let b = CollectedMask::new().with(1).with(200);
        assert_eq!(a, b);
        assert_ne!(a, CollectedMask::new().with(1));
        assert_ne!(CollectedMask::new().with(64), CollectedMask::new().with(0));
    }

    #[test]
    fn subset() {
        let small = CollectedMask::new().with(5);
        let large = small.with(130);
        assert!(small.is_subset(&large));
        assert!(!large.is_subset(&small));
        assert!(CollectedMask::new().is_subset(&small));
    }

    #[test]
    fn with_leaves_receiver_untouched() {
        let parent = CollectedMask::new().with(7);
        let child = parent.with(8);
        assert!(!parent.contains(8));
        assert!(child.contains(7) && child.contains(8));
    }
}
