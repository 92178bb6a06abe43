//! End-to-end: build full mnemonics from entropy, drop the last word, recover it

use lastword::{complete, complete_detailed, Error, Wordlist, WORDLIST_LEN};
use sha2::{Digest, Sha256};

fn synthetic_wordlist() -> Wordlist {
    Wordlist::from_words((0..WORDLIST_LEN).map(|i| format!("w{:04}", i))).unwrap()
}

/// Wordlist agreeing with the English list at the indices the published
/// all-zero and all-ones vectors use
fn vector_wordlist() -> Wordlist {
    let mut words: Vec<String> = (0..WORDLIST_LEN).map(|i| format!("w{:04}", i)).collect();
    words[0] = "abandon".into();
    words[3] = "about".into();
    words[102] = "art".into();
    words[1967] = "vote".into();
    words[2037] = "wrong".into();
    words[2047] = "zoo".into();
    Wordlist::from_words(words).unwrap()
}

/// Entropy -> full mnemonic, computed bit by bit as an independent reference
fn mnemonic(entropy: &[u8], wordlist: &Wordlist) -> Vec<String> {
    let checksum_len = entropy.len() * 8 / 32;
    let digest = Sha256::digest(entropy);

    let mut bits: Vec<u8> = entropy
        .iter()
        .flat_map(|byte| (0..8).rev().map(move |i| (byte >> i) & 1))
        .collect();
    bits.extend((0..checksum_len).map(|i| (digest[0] >> (7 - i)) & 1));

    bits.chunks(11)
        .map(|chunk| {
            let index = chunk.iter().fold(0u16, |acc, &b| (acc << 1) | b as u16);
            wordlist.word(index).unwrap().to_string()
        })
        .collect()
}

/// Deterministic pseudo-random entropy of `len` bytes
fn entropy(seed: u32, len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    let mut counter = 0u32;
    while out.len() < len {
        let mut hasher = Sha256::new();
        hasher.update(seed.to_le_bytes());
        hasher.update(counter.to_le_bytes());
        out.extend_from_slice(&hasher.finalize());
        counter += 1;
    }
    out.truncate(len);
    out
}

#[test]
fn test_true_last_word_always_recovered() {
    let wordlist = synthetic_wordlist();

    for len in [16, 20, 24, 28, 32] {
        for seed in 0..25 {
            let phrase = mnemonic(&entropy(seed, len), &wordlist);
            let (last, known) = phrase.split_last().unwrap();

            let candidates = complete(known, &wordlist).unwrap();
            assert!(
                candidates.contains(&last.as_str()),
                "{}-byte entropy seed {}: {} not among {:?}",
                len,
                seed,
                last,
                candidates
            );
        }
    }
}

#[test]
fn test_every_candidate_completes_a_valid_mnemonic() {
    let wordlist = synthetic_wordlist();

    for len in [16, 24, 32] {
        let phrase = mnemonic(&entropy(99, len), &wordlist);
        let known = &phrase[..phrase.len() - 1];
        let entropy_bits = len * 8;
        let free_bits = entropy_bits - known.len() * 11;

        for candidate in complete_detailed(known, &wordlist).unwrap() {
            // Rebuild the entropy from known words plus the candidate's free bits
            let mut bits: Vec<u8> = known
                .iter()
                .flat_map(|w| {
                    let index = wordlist.index_of(w).unwrap();
                    (0..11).rev().map(move |i| ((index >> i) & 1) as u8)
                })
                .collect();
            bits.extend((0..free_bits).rev().map(|i| ((candidate.free_bits >> i) & 1) as u8));
            let bytes: Vec<u8> = bits
                .chunks(8)
                .map(|c| c.iter().fold(0u8, |acc, &b| (acc << 1) | b))
                .collect();

            let full = mnemonic(&bytes, &wordlist);
            assert_eq!(&full[..known.len()], known);
            assert_eq!(full.last().map(String::as_str), Some(candidate.word));
            assert!(candidate.index < 2048);
        }
    }
}

#[test]
fn test_zero_entropy_vectors() {
    let wordlist = vector_wordlist();

    let twelve = vec!["abandon"; 11];
    let candidates = complete(&twelve, &wordlist).unwrap();
    assert_eq!(candidates.len(), 128);
    assert_eq!(candidates[0], "about");

    let twenty_four = vec!["abandon"; 23];
    let candidates = complete(&twenty_four, &wordlist).unwrap();
    assert_eq!(candidates.len(), 8);
    assert_eq!(candidates[0], "art");
}

#[test]
fn test_all_ones_entropy_vectors() {
    let wordlist = vector_wordlist();

    // Every free bit set is the last enumerated value
    let twelve = vec!["zoo"; 11];
    let candidates = complete(&twelve, &wordlist).unwrap();
    assert_eq!(candidates.len(), 128);
    assert_eq!(candidates[127], "wrong");

    let twenty_four = vec!["zoo"; 23];
    let candidates = complete(&twenty_four, &wordlist).unwrap();
    assert_eq!(candidates.len(), 8);
    assert_eq!(candidates[7], "vote");
}

#[test]
fn test_unsupported_length() {
    let wordlist = synthetic_wordlist();
    let words = vec!["w0001"; 12];
    assert_eq!(
        complete(&words, &wordlist),
        Err(Error::UnsupportedLength { count: 12 })
    );
}

#[test]
fn test_typo_is_named() {
    let wordlist = synthetic_wordlist();
    let mut words = mnemonic(&entropy(3, 20), &wordlist);
    words.pop();
    words[7] = "w00x7".into();

    let err = complete(&words, &wordlist).unwrap_err();
    assert_eq!(
        err,
        Error::UnknownWord {
            word: "w00x7".into(),
            position: 7,
        }
    );
    assert!(err.to_string().contains("w00x7"));
}
