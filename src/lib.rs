//! lastword: recover the final word of a BIP-39 mnemonic
//!
//! Thin facade over [`lastword_core`]; the `lastword` binary lives in
//! `crates/lastword-cli`.

pub use lastword_core::*;
