//! Completer: the public entry point tying the pipeline together

use crate::bits::encode_words;
use crate::enumerate::free_bit_combinations;
use crate::error::InvariantViolation;
use crate::resolver::{resolve_detailed, Candidate};
use crate::sizing::LengthClass;
use crate::wordlist::Wordlist;
use crate::Result;

/// Every possible last word for a phrase missing only its final word.
///
/// Candidates are ordered by ascending free-bit value. Duplicates are kept.
pub fn complete<'a, S: AsRef<str>>(known: &[S], wordlist: &'a Wordlist) -> Result<Vec<&'a str>> {
    Ok(complete_detailed(known, wordlist)?
        .into_iter()
        .map(|c| c.word)
        .collect())
}

/// Like [`complete`], keeping the free bits and checksum behind each word.
pub fn complete_detailed<'a, S: AsRef<str>>(
    known: &[S],
    wordlist: &'a Wordlist,
) -> Result<Vec<Candidate<'a>>> {
    // Length is checked before any word is looked up
    let class = LengthClass::from_known_count(known.len())?;
    let known_bits = encode_words(known, wordlist)?;

    let free_count = class
        .entropy_bits()
        .checked_sub(known_bits.len())
        .ok_or(InvariantViolation::EntropyLength {
            expected: class.entropy_bits(),
            actual: known_bits.len(),
        })?;
    let combinations = free_bit_combinations(free_count)?;

    tracing::debug!(
        known_words = known.len(),
        entropy_bits = class.entropy_bits(),
        checksum_bits = class.checksum_bits(),
        free_bits = free_count,
        candidates = combinations.len(),
        "Completing mnemonic"
    );

    combinations
        .map(|free| resolve_detailed(wordlist, &known_bits, free, class.checksum_bits()))
        .collect()
}
