//! Runtime configuration shared by the cache builder and the filter engine

use std::path::{Path, PathBuf};

/// Default number of starter words suggested when no filters are given
pub const N_START_WORDS: usize = 5;

/// Length of the words kept in the cache
pub const WORD_LENGTH: usize = 5;

/// Letters counted when ranking words by vowel ratio
pub const VOWELS: &str = "aeiou";

/// System dictionary location
pub const WORDS_FILE: &str = "/usr/share/dict/words";

/// Directory name under `$HOME` holding the cache
pub const CONFIG_DIR_NAME: &str = ".wmt";

/// File name of the cache inside the config directory
pub const CACHE_FILE_NAME: &str = "words";

/// Immutable settings passed to every component
#[derive(Debug, Clone)]
pub struct Config {
    /// Exact length of cached words.
    pub word_length: usize,
    /// Letters treated as vowels.
    pub vowels: Vec<char>,
    /// Number of starter words to suggest.
    pub starter_words: usize,
    /// Directory holding the cache file.
    pub config_dir: PathBuf,
    /// Source dictionary path.
    pub words_file: PathBuf,
    /// Stop scanning the cache at the first blank line.
    pub stop_at_blank_line: bool,
}

impl Default for Config {
    fn default() -> Self {
        let home = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            word_length: WORD_LENGTH,
            vowels: VOWELS.chars().collect(),
            starter_words: N_START_WORDS,
            config_dir: home.join(CONFIG_DIR_NAME),
            words_file: PathBuf::from(WORDS_FILE),
            stop_at_blank_line: true,
        }
    }
}

impl Config {
    /// Configuration rooted at an explicit config directory
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            ..Self::default()
        }
    }

    /// Path of the cached word list
    pub fn cache_path(&self) -> PathBuf {
        self.config_dir.join(CACHE_FILE_NAME)
    }

    /// Whether the cache needs building before filtering
    pub fn needs_build(&self, rebuild: bool) -> bool {
        rebuild || !self.cache_path().exists()
    }

    pub fn words_file(&self) -> &Path {
        &self.words_file
    }

    /// Ratio of distinct vowels in `word` to its length, in `[0, 1]`
    pub fn vowel_ratio(&self, word: &str) -> f64 {
        let len = word.chars().count();
        if len == 0 {
            return 0.0;
        }

        let distinct = self
            .vowels
            .iter()
            .filter(|v| word.contains(**v))
            .count();

        distinct as f64 / len as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_path() {
        let config = Config::with_config_dir("/tmp/wmt");
        assert_eq!(config.cache_path(), PathBuf::from("/tmp/wmt/words"));
        assert_eq!(config.word_length, 5);
        assert_eq!(config.starter_words, 5);
    }

    #[test]
    fn test_vowel_ratio() {
        let config = Config::default();

        assert!((config.vowel_ratio("sorry") - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.vowel_ratio("crwth"), 0.0);
        assert!((config.vowel_ratio("eeeee") - 0.2).abs() < f64::EPSILON);
        assert!((config.vowel_ratio("audio") - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.vowel_ratio(""), 0.0);
    }

    #[test]
    fn test_vowel_ratio_bounds() {
        let config = Config::default();
        for word in ["aeiou", "rhythm", "queue", "apple"] {
            let ratio = config.vowel_ratio(word);
            assert!((0.0..=1.0).contains(&ratio), "{} -> {}", word, ratio);
        }
    }
}
