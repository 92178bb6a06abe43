//! lastword CLI
//!
//! Lists the possible last words of a BIP-39 mnemonic given all the others.
//!
//! Usage:
//!   lastword --wordlist english.txt abandon abandon ... abandon
//!   lastword --format json "zoo zoo ... zoo"
//!   lastword            # interactive: one phrase per stdin line

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use lastword_core::{complete_detailed, Wordlist};
use rand::Rng;
use tracing_subscriber::EnvFilter;

mod config;
mod output;

use config::{split_phrase, Args, Config};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_args(&args)?;
    let wordlist = load_wordlist(&config.wordlist)?;

    let words = split_phrase(&args.words);
    let mut rng = rand::thread_rng();

    if words.is_empty() {
        return interactive(&wordlist, &config, &mut rng);
    }

    let rendered = run(&words, &wordlist, &config, &mut rng)?;
    println!("{}", rendered);
    Ok(())
}

fn load_wordlist(path: &Path) -> Result<Wordlist> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read wordlist from {}", path.display()))?;
    let wordlist = Wordlist::parse(&text)
        .with_context(|| format!("Failed to parse wordlist {}", path.display()))?;

    tracing::info!(path = %path.display(), words = wordlist.len(), "Loaded wordlist");
    Ok(wordlist)
}

fn run<R: Rng + ?Sized>(
    words: &[String],
    wordlist: &Wordlist,
    config: &Config,
    rng: &mut R,
) -> Result<String> {
    let candidates = complete_detailed(words, wordlist)
        .with_context(|| format!("Cannot complete {}-word phrase", words.len()))?;
    tracing::info!(candidates = candidates.len(), "Resolved last word candidates");

    let selected = output::select(candidates, config, rng);
    output::render(&selected, config.format)
}

/// Read phrases line by line until EOF. Errors are reported per line.
fn interactive<R: Rng + ?Sized>(wordlist: &Wordlist, config: &Config, rng: &mut R) -> Result<()> {
    eprintln!("Enter the known words of a mnemonic, one phrase per line (Ctrl-D to quit)");
    let stdin = io::stdin();
    let rejected = answer_lines(
        stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
        wordlist,
        config,
        rng,
    )?;
    tracing::debug!(rejected, "Interactive session finished");
    Ok(())
}

/// Answer each phrase in `input`: candidates go to `out`, prompts and
/// per-line errors to `errors`. Returns the number of rejected lines.
fn answer_lines<B, O, E, R>(
    input: B,
    out: &mut O,
    errors: &mut E,
    wordlist: &Wordlist,
    config: &Config,
    rng: &mut R,
) -> Result<usize>
where
    B: BufRead,
    O: Write,
    E: Write,
    R: Rng + ?Sized,
{
    let mut rejected = 0;
    let mut lines = input.lines();
    loop {
        write!(errors, "> ")?;
        errors.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let words = split_phrase(&[line?]);
        if words.is_empty() {
            continue;
        }

        match run(&words, wordlist, config, &mut *rng) {
            Ok(rendered) => writeln!(out, "{}", rendered)?,
            Err(e) => {
                rejected += 1;
                tracing::warn!(error = %e, "Phrase rejected");
                writeln!(errors, "error: {:#}", e)?;
            }
        }
    }

    Ok(rejected)
}
