//! Console rendering of the result set

use crate::filter::WordSet;
use clap::ValueEnum;
use colored::*;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Width of the longest histogram bar
const BAR_WIDTH: usize = 40;

/// How matching words are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One word per line
    #[default]
    List,
    /// Letter-frequency histogram followed by the words on one line
    Histogram,
}

/// Words in alphabetical order
pub fn sorted_words(words: &WordSet) -> Vec<&str> {
    let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted
}

/// Occurrences of each letter across `words`, most frequent first
pub fn letter_frequencies(words: &WordSet) -> Vec<(char, usize)> {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for letter in words.iter().flat_map(|w| w.chars()) {
        *counts.entry(letter).or_insert(0) += 1;
    }

    let mut frequencies: Vec<_> = counts.into_iter().collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    frequencies
}

/// Render `words` to `out` in the chosen format
///
/// An empty result set renders nothing.
pub fn render<W: Write>(out: &mut W, words: &WordSet, format: OutputFormat) -> io::Result<()> {
    if words.is_empty() {
        return Ok(());
    }

    match format {
        OutputFormat::List => {
            for word in sorted_words(words) {
                writeln!(out, "{}", word)?;
            }
        }
        OutputFormat::Histogram => {
            let frequencies = letter_frequencies(words);
            let max = frequencies.first().map_or(1, |(_, count)| *count).max(1);

            for (letter, count) in &frequencies {
                let width = (count * BAR_WIDTH).div_ceil(max);
                writeln!(
                    out,
                    "  {} {:>5} {}",
                    letter.to_string().cyan().bold(),
                    count,
                    "█".repeat(width).green()
                )?;
            }
            writeln!(out)?;
            writeln!(out, "{}", sorted_words(words).join(" "))?;
        }
    }

    out.flush()
}

/// Render `words` to stdout
pub fn print_words(words: &WordSet, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    render(&mut handle, words, format)
}
