//! lastword-core: final-word recovery for BIP-39 mnemonics
//!
//! Given the first N-1 words of a mnemonic, the last word is constrained only
//! by its checksum. The last 11-bit group splits into:
//!
//! | Known words | Entropy bits | Checksum bits | Free bits | Candidates |
//! |-------------|--------------|---------------|-----------|------------|
//! | 11          | 128          | 4             | 7         | 128        |
//! | 14          | 160          | 5             | 6         | 64         |
//! | 17          | 192          | 6             | 5         | 32         |
//! | 20          | 224          | 7             | 4         | 16         |
//! | 23          | 256          | 8             | 3         | 8          |
//!
//! The pipeline is:
//! - [`encode_words`]: known words -> packed 11-bit indices
//! - [`LengthClass`]: known-word count -> entropy/checksum sizes
//! - [`free_bit_combinations`]: every value of the free bits, ascending
//! - [`resolve_candidate`]: free bits -> SHA-256 checksum -> last word
//!
//! [`complete`] runs all four against a [`Wordlist`].

pub mod bits;
mod completer;
mod enumerate;
mod error;
mod resolver;
mod sizing;
pub mod wordlist;

pub use bits::{encode_words, BitBuffer};
pub use completer::{complete, complete_detailed};
pub use enumerate::{free_bit_combinations, FreeBitCombinations, FreeBits};
pub use error::{Error, InvariantViolation, WordlistError};
pub use resolver::{checksum, resolve_candidate, resolve_detailed, Candidate};
pub use sizing::{entropy_sizes, LengthClass};
pub use wordlist::Wordlist;

pub type Result<T> = std::result::Result<T, Error>;

/// Bits per mnemonic word (2^11 = 2048 wordlist entries)
pub const WORD_BITS: usize = 11;

/// Required number of wordlist entries
pub const WORDLIST_LEN: usize = 1 << WORD_BITS;
