//! Candidate selection and rendering

use std::collections::HashSet;

use anyhow::Result;
use lastword_core::Candidate;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{Config, OutputFormat};

/// Apply `--unique` and `--random` to the completer's output.
///
/// The completer itself keeps duplicates and order; both filters are
/// presentation choices made here.
pub fn select<'a, R: Rng + ?Sized>(
    candidates: Vec<Candidate<'a>>,
    config: &Config,
    rng: &mut R,
) -> Vec<Candidate<'a>> {
    let mut candidates = if config.unique {
        let mut seen = HashSet::new();
        candidates
            .into_iter()
            .filter(|c| seen.insert(c.word))
            .collect()
    } else {
        candidates
    };

    if config.random {
        candidates = candidates.choose(rng).cloned().into_iter().collect();
    }
    candidates
}

pub fn render(candidates: &[Candidate<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(candidates
            .iter()
            .map(|c| c.word)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(candidates)?),
    }
}
