//! Helpers for vertex sets encoded as 64-bit masks.

/// Mask containing the vertices `0..order`.
pub fn full_mask(order: usize) -> u64 {
    if order >= 64 {
        u64::MAX
    } else {
        (1u64 << order) - 1
    }
}

/// Mask containing exactly the listed vertices.
pub fn mask_of(vertices: &[usize]) -> u64 {
    vertices.iter().fold(0u64, |mask, &v| mask | (1u64 << v))
}

/// Iterates the set bits of `mask` in ascending order.
pub fn iter_bits(mask: u64) -> BitIter {
    BitIter { remaining: mask }
}

/// Iterator over the members of a vertex mask.
#[derive(Debug, Clone)]
pub struct BitIter {
    remaining: u64,
}

impl Iterator for BitIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let bit = self.remaining.trailing_zeros() as usize;
        self.remaining &= self.remaining - 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.remaining.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for BitIter {}
