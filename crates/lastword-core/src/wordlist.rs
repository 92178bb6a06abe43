//! Wordlist: the 2048-entry vocabulary mapping 11-bit values to words
//!
//! Built once at startup and passed by reference into the completer. Both
//! directions are O(1): index -> word through the backing vector, word ->
//! index through a hash map.
//!
//! Any list of 2048 distinct, non-empty words is accepted; the language is not
//! inspected. Matching is exact and case-sensitive.

use std::collections::HashMap;

use crate::error::WordlistError;
use crate::WORDLIST_LEN;

#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// Parse a newline-delimited wordlist (index = 0-based line number).
    ///
    /// Trailing whitespace (including `\r`) is stripped from each line and
    /// blank lines at the end of the input are ignored.
    pub fn parse(text: &str) -> Result<Self, WordlistError> {
        let mut lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        Self::from_words(lines)
    }

    /// Build a wordlist from words already in canonical order.
    pub fn from_words<I, S>(words: I) -> Result<Self, WordlistError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != WORDLIST_LEN {
            return Err(WordlistError::WrongSize {
                actual: words.len(),
            });
        }

        let mut index = HashMap::with_capacity(WORDLIST_LEN);
        for (i, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(WordlistError::EmptyWord { line: i + 1 });
            }
            if let Some(&first) = index.get(word.as_str()) {
                return Err(WordlistError::DuplicateWord {
                    word: word.clone(),
                    first: first as usize + 1,
                    second: i + 1,
                });
            }
            index.insert(word.clone(), i as u16); // i < 2048
        }

        Ok(Self { words, index })
    }

    /// Index of `word`, if present
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    /// Word at `index`, if in range
    pub fn word(&self, index: u16) -> Option<&str> {
        self.words.get(index as usize).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
