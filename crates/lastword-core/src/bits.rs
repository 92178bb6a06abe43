//! Bit packing for mnemonic word indices
//!
//! All fields are written MSB-first with an explicit width, so an 11-bit word
//! index `5` lands as `00000000101` without any textual padding step. The
//! buffer keeps an exact bit length; the final partial byte (if any) has its
//! unused low bits zeroed and is never exposed as hash input.

use crate::error::{Error, InvariantViolation};
use crate::wordlist::Wordlist;
use crate::{Result, WORD_BITS};

/// Append-only MSB-first bit sequence.
///
/// # Invariants
/// - `bytes.len() == ceil(len / 8)`
/// - bits at positions `>= len` are zero
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bytes: Vec<u8>,
    len: usize,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Number of bits written
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append the low `width` bits of `value`, most significant first.
    ///
    /// `width` must be at most 32; higher bits of `value` are ignored.
    pub fn push_bits(&mut self, value: u32, width: usize) {
        debug_assert!(width <= 32, "field width {} exceeds 32 bits", width);
        for shift in (0..width.min(32)).rev() {
            self.push_bit((value >> shift) & 1 == 1);
        }
    }

    fn push_bit(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> offset;
        }
        self.len += 1;
    }

    /// Append every bit of `other`
    pub fn extend_from(&mut self, other: &BitBuffer) {
        for pos in 0..other.len {
            self.push_bit(other.bit_at(pos));
        }
    }

    fn bit_at(&self, pos: usize) -> bool {
        self.bytes[pos / 8] & (0x80 >> (pos % 8)) != 0
    }

    /// Read `width` bits starting at bit `start` as a big-endian integer.
    ///
    /// Returns `None` if the range runs past the end or `width > 32`.
    pub fn read_bits(&self, start: usize, width: usize) -> Option<u32> {
        if width > 32 || start.checked_add(width)? > self.len {
            return None;
        }
        Some(
            (start..start + width)
                .fold(0u32, |acc, pos| (acc << 1) | self.bit_at(pos) as u32),
        )
    }

    /// The last `width` bits as a big-endian integer
    pub fn tail(&self, width: usize) -> Option<u32> {
        let start = self.len.checked_sub(width)?;
        self.read_bits(start, width)
    }

    /// Packed bytes, only when the sequence is a whole number of bytes
    pub fn as_bytes(&self) -> std::result::Result<&[u8], InvariantViolation> {
        if self.len % 8 != 0 {
            return Err(InvariantViolation::NotByteAligned { bits: self.len });
        }
        Ok(&self.bytes)
    }
}

/// Encode known words as consecutive 11-bit wordlist indices.
///
/// Order is preserved. Fails on the first word missing from `wordlist`.
pub fn encode_words<S: AsRef<str>>(words: &[S], wordlist: &Wordlist) -> Result<BitBuffer> {
    let mut bits = BitBuffer::with_capacity(words.len() * WORD_BITS);
    for (position, word) in words.iter().enumerate() {
        let word = word.as_ref();
        let index = wordlist.index_of(word).ok_or_else(|| Error::UnknownWord {
            word: word.to_string(),
            position,
        })?;
        bits.push_bits(index as u32, WORD_BITS);
    }
    Ok(bits)
}
