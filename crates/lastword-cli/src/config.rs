//! Command-line arguments and resolved configuration

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};

/// Environment fallback for `--wordlist`
pub const WORDLIST_ENV: &str = "LASTWORD_WORDLIST";

/// Environment fallback for `--format`
pub const FORMAT_ENV: &str = "LASTWORD_FORMAT";

/// Wordlist used when neither flag nor environment names one
pub const DEFAULT_WORDLIST: &str = "english.txt";

#[derive(Parser, Debug)]
#[command(name = "lastword")]
#[command(about = "List every valid last word for a BIP-39 mnemonic missing its final word")]
pub struct Args {
    /// Known words, separately or as one quoted phrase. Omit to read phrases from stdin.
    pub words: Vec<String>,

    /// Wordlist file, one word per line (falls back to $LASTWORD_WORDLIST, then english.txt)
    #[arg(long)]
    pub wordlist: Option<PathBuf>,

    /// Output format (falls back to $LASTWORD_FORMAT, then text)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Drop repeated words, keeping the first occurrence
    #[arg(long)]
    pub unique: bool,

    /// Print a single candidate chosen at random
    #[arg(long)]
    pub random: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One word per line
    #[default]
    Text,
    /// JSON array of candidates with their free bits and checksum
    Json,
}

/// Settings after merging flags, environment and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub wordlist: PathBuf,
    pub format: OutputFormat,
    pub unique: bool,
    pub random: bool,
}

impl Config {
    /// Resolve against the process environment
    pub fn from_args(args: &Args) -> Result<Self> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup. Flags win over environment.
    pub fn resolve<F>(args: &Args, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let wordlist = args
            .wordlist
            .clone()
            .or_else(|| env(WORDLIST_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORDLIST));

        let format = match (args.format, env(FORMAT_ENV)) {
            (Some(format), _) => format,
            (None, Some(value)) => OutputFormat::from_str(&value, true)
                .map_err(|_| anyhow!("{} must be 'text' or 'json', got {:?}", FORMAT_ENV, value))?,
            (None, None) => OutputFormat::default(),
        };

        Ok(Self {
            wordlist,
            format,
            unique: args.unique,
            random: args.random,
        })
    }
}

/// Split arguments into words, so a quoted phrase and separate words are equivalent
pub fn split_phrase<S: AsRef<str>>(parts: &[S]) -> Vec<String> {
    parts
        .iter()
        .flat_map(|part| part.as_ref().split_whitespace())
        .map(str::to_string)
        .collect()
}
