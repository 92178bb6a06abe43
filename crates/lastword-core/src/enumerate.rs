//! Free-bit enumeration
//!
//! The last word carries `free` entropy bits that no known word pins down.
//! [`FreeBitCombinations`] walks all `2^free` values lazily in ascending order.
//! It is `Clone`, so a fresh copy restarts from zero.

use crate::error::InvariantViolation;
use crate::WORD_BITS;

/// One assignment of the free bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FreeBits {
    /// Value, right-aligned in the low `width` bits
    pub value: u32,
    /// Field width in bits
    pub width: usize,
}

impl FreeBits {
    /// Individual bits, most significant first
    pub fn to_bits(self) -> Vec<u8> {
        (0..self.width)
            .rev()
            .map(|shift| ((self.value >> shift) & 1) as u8)
            .collect()
    }
}

/// Ascending iterator over every `width`-bit value
#[derive(Debug, Clone)]
pub struct FreeBitCombinations {
    next: u32,
    end: u32,
    width: usize,
}

impl FreeBitCombinations {
    pub fn width(&self) -> usize {
        self.width
    }
}

impl Iterator for FreeBitCombinations {
    type Item = FreeBits;

    fn next(&mut self) -> Option<FreeBits> {
        if self.next >= self.end {
            return None;
        }
        let value = self.next;
        self.next += 1;
        Some(FreeBits {
            value,
            width: self.width,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FreeBitCombinations {}

/// All combinations of `count` free bits.
///
/// `count` may be zero (a single empty combination) and at most one word.
pub fn free_bit_combinations(count: usize) -> Result<FreeBitCombinations, InvariantViolation> {
    if count > WORD_BITS {
        return Err(InvariantViolation::TooManyFreeBits { count });
    }
    Ok(FreeBitCombinations {
        next: 0,
        end: 1u32 << count,
        width: count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_bits_ascending() {
        let patterns: Vec<Vec<u8>> = free_bit_combinations(3)
            .unwrap()
            .map(FreeBits::to_bits)
            .collect();

        assert_eq!(
            patterns,
            vec![
                vec![0, 0, 0],
                vec![0, 0, 1],
                vec![0, 1, 0],
                vec![0, 1, 1],
                vec![1, 0, 0],
                vec![1, 0, 1],
                vec![1, 1, 0],
                vec![1, 1, 1],
            ]
        );
    }

    #[test]
    fn test_counts_and_width() {
        for count in 0..=WORD_BITS {
            let combos = free_bit_combinations(count).unwrap();
            assert_eq!(combos.len(), 1 << count);
            assert!(combos.clone().all(|f| f.width == count));
            assert_eq!(combos.last().map(|f| f.value), Some((1u32 << count) - 1));
        }
    }

    #[test]
    fn test_zero_bits_yields_one_empty_combination() {
        let combos: Vec<FreeBits> = free_bit_combinations(0).unwrap().collect();
        assert_eq!(combos, vec![FreeBits { value: 0, width: 0 }]);
        assert!(combos[0].to_bits().is_empty());
    }

    #[test]
    fn test_restartable() {
        let combos = free_bit_combinations(5).unwrap();
        let first: Vec<_> = combos.clone().collect();
        let second: Vec<_> = combos.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_more_than_one_word_rejected() {
        assert_eq!(
            free_bit_combinations(12).unwrap_err(),
            InvariantViolation::TooManyFreeBits { count: 12 }
        );
    }
}
