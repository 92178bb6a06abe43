//! Completer error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("word {position} ({word:?}) is not in the wordlist")]
    UnknownWord { word: String, position: usize },

    #[error("unsupported number of known words: {count} (expected one of 11, 14, 17, 20, 23)")]
    UnsupportedLength { count: usize },

    #[error("internal bit accounting error: {0}")]
    Invariant(#[from] InvariantViolation),

    #[error("invalid wordlist: {0}")]
    Wordlist(#[from] WordlistError),
}

/// Bit-length accounting failures.
///
/// These indicate a logic defect rather than bad input. Nothing is padded or
/// truncated to paper over them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("entropy is {bits} bits, not a whole number of bytes")]
    NotByteAligned { bits: usize },

    #[error("entropy + checksum is {bits} bits, not a multiple of 11")]
    NotWordAligned { bits: usize },

    #[error("entropy is {actual} bits, expected {expected}")]
    EntropyLength { expected: usize, actual: usize },

    #[error("free bit count {count} exceeds one word (11 bits)")]
    TooManyFreeBits { count: usize },

    #[error("checksum length {bits} exceeds one byte")]
    ChecksumTooLong { bits: usize },

    #[error("word index {index} outside wordlist of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordlistError {
    #[error("expected 2048 words, found {actual}")]
    WrongSize { actual: usize },

    #[error("line {line} is empty")]
    EmptyWord { line: usize },

    #[error("duplicate word {word:?} at lines {first} and {second}")]
    DuplicateWord {
        word: String,
        first: usize,
        second: usize,
    },
}
