//! Entropy and checksum sizes per mnemonic length

use crate::error::Error;
use crate::{Result, WORD_BITS};

/// Supported mnemonic lengths, named by total word count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthClass {
    Words12,
    Words15,
    Words18,
    Words21,
    Words24,
}

impl LengthClass {
    pub const ALL: [LengthClass; 5] = [
        LengthClass::Words12,
        LengthClass::Words15,
        LengthClass::Words18,
        LengthClass::Words21,
        LengthClass::Words24,
    ];

    /// Length class for a phrase missing only its last word
    pub fn from_known_count(count: usize) -> Result<Self> {
        match count {
            11 => Ok(LengthClass::Words12),
            14 => Ok(LengthClass::Words15),
            17 => Ok(LengthClass::Words18),
            20 => Ok(LengthClass::Words21),
            23 => Ok(LengthClass::Words24),
            _ => Err(Error::UnsupportedLength { count }),
        }
    }

    pub fn total_words(self) -> usize {
        match self {
            LengthClass::Words12 => 12,
            LengthClass::Words15 => 15,
            LengthClass::Words18 => 18,
            LengthClass::Words21 => 21,
            LengthClass::Words24 => 24,
        }
    }

    pub fn known_words(self) -> usize {
        self.total_words() - 1
    }

    pub fn checksum_bits(self) -> usize {
        self.total_words() / 3
    }

    /// Always `32 * checksum_bits`
    pub fn entropy_bits(self) -> usize {
        self.checksum_bits() * 32
    }

    /// Entropy bits carried by the last word
    pub fn free_bits(self) -> usize {
        self.entropy_bits() - self.known_words() * WORD_BITS
    }
}

/// `(entropy_bits, checksum_bits)` for a known-word count
pub fn entropy_sizes(known_count: usize) -> Result<(usize, usize)> {
    let class = LengthClass::from_known_count(known_count)?;
    Ok((class.entropy_bits(), class.checksum_bits()))
}
