//! Size-ordered enumeration of attribute subsets.

use super::attribute::{Attribute, AttributeSet};

/// Widest attribute set that can be enumerated (one bit per attribute).
pub const MAX_ENUMERABLE_ATTRIBUTES: usize = u64::BITS as usize;

/// Iterator over every non-empty subset of an attribute set, smallest first.
///
/// Subsets of equal size are produced in a fixed order derived from the
/// attribute ordering, so two runs over the same set always agree. The
/// number of subsets is `2^n - 1`; callers are expected to keep `n` small.
///
/// Sets wider than [`MAX_ENUMERABLE_ATTRIBUTES`] yield nothing.
pub struct Subsets<'a> {
    attributes: Vec<&'a Attribute>,
    size: usize,
    mask: u64,
    done: bool,
}

impl<'a> Subsets<'a> {
    /// Enumerate the non-empty subsets of `set`.
    pub fn new(set: &'a AttributeSet) -> Self {
        let attributes: Vec<&Attribute> = set.iter().collect();
        let done = attributes.is_empty() || attributes.len() > MAX_ENUMERABLE_ATTRIBUTES;

        Self {
            attributes,
            size: 1,
            mask: 1,
            done,
        }
    }

    fn materialize(&self, mask: u64) -> AttributeSet {
        self.attributes
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1u64 << bit) != 0)
            .map(|(_, attribute)| *attribute)
            .collect()
    }

    fn in_range(&self, mask: u64) -> bool {
        let width = self.attributes.len();
        width == MAX_ENUMERABLE_ATTRIBUTES || mask >> width == 0
    }
}

impl Iterator for Subsets<'_> {
    type Item = AttributeSet;

    fn next(&mut self) -> Option<AttributeSet> {
        if self.done {
            return None;
        }

        let current = self.materialize(self.mask);

        match next_with_same_popcount(self.mask).filter(|m| self.in_range(*m)) {
            Some(mask) => self.mask = mask,
            None if self.size < self.attributes.len() => {
                self.size += 1;
                self.mask = lowest_mask(self.size);
            }
            None => self.done = true,
        }

        Some(current)
    }
}

/// Smallest mask with `bits` bits set.
fn lowest_mask(bits: usize) -> u64 {
    if bits >= MAX_ENUMERABLE_ATTRIBUTES {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Next larger integer with the same number of set bits (Gosper's hack).
fn next_with_same_popcount(mask: u64) -> Option<u64> {
    let lowest = mask & mask.wrapping_neg();
    let ripple = mask.checked_add(lowest)?;
    Some((((ripple ^ mask) >> 2) / lowest) | ripple)
}
