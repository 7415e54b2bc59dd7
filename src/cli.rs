//! Command-line interface definition for wordle-me-this
//!
//! Provides argument parsing and validation for the word listing tool.

use crate::config::Config;
use crate::display::OutputFormat;
use crate::selection::Query;
use clap::Parser;
use std::path::PathBuf;

/// List usable words from the local dictionary word list
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordle-me-this",
    author = "m0h1nd4",
    version,
    about = "List usable words for five-letter word puzzles from the local dict word list",
    long_about = r#"
List usable words for five-letter word puzzles from the local dictionary.

The first run builds a cache of five-letter words from /usr/share/dict/words
in ~/.wmt/words. With no filters a handful of vowel-heavy starter words is
suggested instead.

EXAMPLES:
    # Suggest starter words
    wordle-me-this

    # Words containing "r" and "e" but no "a", "s" or "t"
    wordle-me-this -i re -o ast

    # Known letters in place: "a" third, "k" last
    wordle-me-this __a_k

    # "e" is in the word, but not first and not fourth
    wordle-me-this -x e____ -x ___e_

POSITION MASK:
    A lowercase letter pins that position; any other character ("_", ".",
    "?") leaves it open. Pinned letters are also required letters.
"#
)]
pub struct Args {
    /// Known letter positions, like __a_k
    #[arg(value_name = "POSITION")]
    pub position: Option<String>,

    /// Letters to include
    #[arg(short, long, value_name = "LETTERS")]
    pub include: Option<String>,

    /// Letters to omit
    #[arg(short, long, value_name = "LETTERS")]
    pub omit: Option<String>,

    /// Letters in the word but not at these positions, like e___e (repeatable)
    #[arg(short = 'x', long = "exclude-position", value_name = "MASK")]
    pub exclude_position: Vec<String>,

    /// Skip words with repeated letters
    #[arg(long, default_value_t = false)]
    pub no_dupes: bool,

    /// Rebuild the cached word list
    #[arg(long, default_value_t = false)]
    pub rebuild: bool,

    /// Number of starter words to suggest
    #[arg(short = 'n', long, value_name = "NUM")]
    pub count: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::List)]
    pub format: OutputFormat,

    /// Dictionary words file (default: /usr/share/dict/words)
    #[arg(long, value_name = "PATH")]
    pub dict: Option<PathBuf>,

    /// Directory holding the word cache (default: ~/.wmt)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Quiet mode - words only
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Build the runtime configuration from defaults and overrides
    pub fn config(&self) -> anyhow::Result<Config> {
        let mut config = Config::default();

        if let Some(ref dir) = self.config_dir {
            config.config_dir = dir.clone();
        }
        if let Some(ref dict) = self.dict {
            config.words_file = dict.clone();
        }
        if let Some(count) = self.count {
            if count == 0 {
                anyhow::bail!("Starter word count must be at least 1");
            }
            config.starter_words = count;
        }

        Ok(config)
    }

    /// Normalized query for the selection policy
    pub fn query(&self) -> anyhow::Result<Query> {
        Ok(Query {
            include: parse_letters("include", self.include.as_deref())?,
            omit: parse_letters("omit", self.omit.as_deref())?,
            position: self.position.clone().unwrap_or_default(),
            excluded: self.exclude_position.clone(),
            dupes_ok: !self.no_dupes,
        })
    }
}

/// Lowercase a letter argument, rejecting anything that is not a letter
fn parse_letters(name: &str, letters: Option<&str>) -> anyhow::Result<String> {
    let letters = letters.unwrap_or_default().trim().to_lowercase();

    if let Some(bad) = letters.chars().find(|c| !c.is_alphabetic()) {
        anyhow::bail!("Invalid character '{}' in --{}: only letters are allowed", bad, name);
    }

    Ok(letters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::PositionMask;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("wordle-me-this").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        let query = args.query().unwrap();

        assert!(query.include.is_empty());
        assert!(query.omit.is_empty());
        assert!(query.position.is_empty());
        assert!(query.dupes_ok);
        assert_eq!(args.format, OutputFormat::List);
        assert!(!args.rebuild);
    }

    #[test]
    fn test_full_command_line() {
        let args = parse(&[
            "__A_k", "-i", "RE", "-o", "st", "-x", "e____", "-x", "___e_", "--no-dupes", "--rebuild", "-f",
            "histogram",
        ]);
        let query = args.query().unwrap();

        assert_eq!(query.position, "__A_k");
        assert_eq!(query.include, "re");
        assert_eq!(query.omit, "st");
        assert_eq!(query.excluded, vec!["e____", "___e_"]);
        assert!(!query.dupes_ok);
        assert!(args.rebuild);
        assert_eq!(args.format, OutputFormat::Histogram);
    }

    #[test]
    fn test_uppercase_mask_letters_are_placeholders() {
        let query = parse(&["__A_k", "-x", "E___e"]).query().unwrap();

        let pinned: Vec<_> = PositionMask::new(&query.position).letters().collect();
        assert_eq!(pinned, vec!['k']);

        let excluded: Vec<_> = PositionMask::new(&query.excluded[0]).letters().collect();
        assert_eq!(excluded, vec!['e']);
    }

    #[test]
    fn test_invalid_letters() {
        let args = parse(&["-i", "a1"]);
        assert!(args.query().is_err());
    }

    #[test]
    fn test_config_overrides() {
        let args = parse(&["--dict", "/tmp/dict", "--config-dir", "/tmp/wmt", "-n", "3"]);
        let config = args.config().unwrap();

        assert_eq!(config.words_file, PathBuf::from("/tmp/dict"));
        assert_eq!(config.cache_path(), PathBuf::from("/tmp/wmt/words"));
        assert_eq!(config.starter_words, 3);
    }

    #[test]
    fn test_zero_count_rejected() {
        let args = parse(&["-n", "0"]);
        assert!(args.config().is_err());
    }
}
