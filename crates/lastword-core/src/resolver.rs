//! Candidate resolution: free bits -> checksum -> final word
//!
//! For one assignment of the free bits:
//! 1. known bits + free bits form the full entropy (must be byte aligned)
//! 2. checksum = leading `checksum_len` bits of SHA-256(entropy)
//! 3. entropy + checksum must split evenly into 11-bit groups
//! 4. the last group indexes the wordlist
//!
//! Because known words always occupy whole groups, the last group is exactly
//! `free bits || checksum`.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::bits::BitBuffer;
use crate::enumerate::FreeBits;
use crate::error::InvariantViolation;
use crate::wordlist::Wordlist;
use crate::{Result, WORD_BITS};

/// A possible last word and the bits that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate<'a> {
    /// Free entropy bits, right-aligned
    pub free_bits: u32,
    /// Checksum bits, right-aligned
    pub checksum: u8,
    /// Wordlist index of the last word
    pub index: u16,
    pub word: &'a str,
}

/// Leading `len` bits of SHA-256(`entropy`), right-aligned.
pub fn checksum(entropy: &[u8], len: usize) -> std::result::Result<u8, InvariantViolation> {
    if len > 8 {
        return Err(InvariantViolation::ChecksumTooLong { bits: len });
    }
    let digest = Sha256::digest(entropy);
    Ok(((digest[0] as u32) >> (8 - len)) as u8)
}

/// Resolve one free-bit assignment to its candidate last word.
pub fn resolve_detailed<'a>(
    wordlist: &'a Wordlist,
    known: &BitBuffer,
    free: FreeBits,
    checksum_len: usize,
) -> Result<Candidate<'a>> {
    let mut totes = BitBuffer::with_capacity(known.len() + free.width + checksum_len);
    totes.extend_from(known);
    totes.push_bits(free.value, free.width);

    let entropy = totes.as_bytes()?;
    let checksum = checksum(entropy, checksum_len)?;
    tracing::trace!(
        entropy = %hex::encode(entropy),
        free_bits = free.value,
        checksum,
        "Computed checksum"
    );

    totes.push_bits(checksum as u32, checksum_len);
    if totes.len() % WORD_BITS != 0 {
        return Err(InvariantViolation::NotWordAligned { bits: totes.len() }.into());
    }

    let index = totes
        .tail(WORD_BITS)
        .ok_or(InvariantViolation::NotWordAligned { bits: totes.len() })? as usize;
    let word = u16::try_from(index)
        .ok()
        .and_then(|i| wordlist.word(i))
        .ok_or(InvariantViolation::IndexOutOfRange {
            index,
            len: wordlist.len(),
        })?;

    Ok(Candidate {
        free_bits: free.value,
        checksum,
        index: index as u16,
        word,
    })
}

/// Resolve one free-bit assignment to its last word.
pub fn resolve_candidate<'a>(
    wordlist: &'a Wordlist,
    known: &BitBuffer,
    free: FreeBits,
    checksum_len: usize,
) -> Result<&'a str> {
    resolve_detailed(wordlist, known, free, checksum_len).map(|c| c.word)
}
