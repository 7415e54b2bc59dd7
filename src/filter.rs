//! Word filter engine
//!
//! Scans the word cache, applies duplicate-letter and positional constraints,
//! hands each surviving word to a [`Matcher`], then optionally ranks and
//! samples the matches.

use crate::config::Config;
use crate::encoding::CacheLines;
use crate::error::{Result, WordError};
use ahash::RandomState;
use hashbrown::HashSet;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Set of matching words, without ordering
pub type WordSet = HashSet<String, RandomState>;

/// Create an empty [`WordSet`]
pub fn word_set() -> WordSet {
    HashSet::with_hasher(RandomState::new())
}

/// Deduplicated set of letters
#[derive(Debug, Clone, Default)]
pub struct LetterSet {
    letters: HashSet<char, RandomState>,
}

impl LetterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    pub fn extend<I: IntoIterator<Item = char>>(&mut self, letters: I) {
        self.letters.extend(letters);
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }
}

impl From<&str> for LetterSet {
    fn from(letters: &str) -> Self {
        let mut set = Self::new();
        set.extend(letters.chars());
        set
    }
}

/// Predicate deciding whether a word belongs in the result set
pub trait Matcher: Send + Sync {
    fn matches(&self, word: &str, letters: &LetterSet) -> bool;

    /// Short name used in log output
    fn name(&self) -> &'static str;
}

/// Every letter occurs at least once in the word
#[derive(Debug, Clone, Copy, Default)]
pub struct Contains;

impl Matcher for Contains {
    #[inline]
    fn matches(&self, word: &str, letters: &LetterSet) -> bool {
        letters.iter().all(|letter| word.contains(letter))
    }

    fn name(&self) -> &'static str {
        "contains"
    }
}

/// No letter occurs anywhere in the word
#[derive(Debug, Clone, Copy, Default)]
pub struct Excludes;

impl Matcher for Excludes {
    #[inline]
    fn matches(&self, word: &str, letters: &LetterSet) -> bool {
        let unique: HashSet<char, RandomState> = word.chars().collect();
        let remaining = unique.iter().filter(|c| !letters.contains(**c)).count();
        remaining == unique.len()
    }

    fn name(&self) -> &'static str {
        "excludes"
    }
}

/// Accepts everything; starter-word selection is driven by the options
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysTrue;

impl Matcher for AlwaysTrue {
    #[inline]
    fn matches(&self, _word: &str, _letters: &LetterSet) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "starter"
    }
}

/// Per-index letter constraints, like `__a_k`
///
/// A lowercase ASCII letter pins that index; any other character leaves it
/// open. An empty mask constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionMask {
    mask: String,
    slots: Vec<Option<char>>,
}

impl PositionMask {
    pub fn new(mask: &str) -> Self {
        let slots = mask
            .chars()
            .map(|c| c.is_ascii_lowercase().then_some(c))
            .collect();

        Self {
            mask: mask.to_string(),
            slots,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Letters pinned by the mask
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// True when every pinned letter sits at its index in `word`
    pub fn matches(&self, word: &str) -> Result<bool> {
        Ok(self.compare(word)?.all(|(pinned, actual)| pinned == actual))
    }

    /// True when no pinned letter sits at its index in `word`
    pub fn excludes(&self, word: &str) -> Result<bool> {
        Ok(self.compare(word)?.all(|(pinned, actual)| pinned != actual))
    }

    fn compare<'a>(&'a self, word: &'a str) -> Result<impl Iterator<Item = (char, char)> + 'a> {
        let word_len = word.chars().count();
        if !self.is_empty() && word_len != self.len() {
            return Err(WordError::LengthMismatch {
                word: word.to_string(),
                word_len,
                mask: self.mask.clone(),
                mask_len: self.len(),
            });
        }

        Ok(self
            .slots
            .iter()
            .zip(word.chars())
            .filter_map(|(slot, actual)| slot.map(|pinned| (pinned, actual))))
    }
}

/// Per-scan switches
#[derive(Debug, Clone)]
pub struct FilterOptions {
    /// Known letter positions.
    pub position: PositionMask,
    /// Letters known not to be at these positions.
    pub excluded: Vec<PositionMask>,
    /// Bound on the result size; 0 leaves the result unbounded.
    pub max_words: usize,
    /// Allow words with repeated letters.
    pub dupes_ok: bool,
    /// Rank by vowel ratio before bounding.
    pub mostly_vowels: bool,
    /// Randomly sample instead of taking the top results.
    pub random_sample: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            position: PositionMask::default(),
            excluded: Vec::new(),
            max_words: 0,
            dupes_ok: true,
            mostly_vowels: false,
            random_sample: false,
        }
    }
}

impl FilterOptions {
    /// Options for starter-word suggestions
    pub fn starter(max_words: usize) -> Self {
        Self {
            max_words,
            dupes_ok: false,
            mostly_vowels: true,
            random_sample: true,
            ..Self::default()
        }
    }
}

/// True when no letter occurs twice in `word`
pub fn has_unique_letters(word: &str) -> bool {
    let mut seen: HashSet<char, RandomState> = HashSet::with_hasher(RandomState::new());
    word.chars().all(|c| seen.insert(c))
}

/// Scans the word cache named by its configuration
#[derive(Debug, Clone)]
pub struct FilterEngine {
    config: Config,
}

impl FilterEngine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Filter the cache, sampling with the thread-local RNG
    pub fn filter(
        &self,
        matcher: &dyn Matcher,
        letters: &LetterSet,
        options: &FilterOptions,
    ) -> Result<WordSet> {
        self.filter_with_rng(matcher, letters, options, &mut rand::rng())
    }

    /// Filter the cache, sampling with `rng`
    pub fn filter_with_rng<R: Rng + ?Sized>(
        &self,
        matcher: &dyn Matcher,
        letters: &LetterSet,
        options: &FilterOptions,
        rng: &mut R,
    ) -> Result<WordSet> {
        let found = self.scan(matcher, letters, options)?;
        Ok(self.reduce(found, options, rng))
    }

    fn scan(&self, matcher: &dyn Matcher, letters: &LetterSet, options: &FilterOptions) -> Result<WordSet> {
        let path = self.config.cache_path();
        let mut lines = CacheLines::open(&path)?;
        let mut found = word_set();
        let mut scanned = 0u64;

        while let Some(line) = lines.next() {
            let word = line.trim();

            if word.is_empty() {
                if !self.config.stop_at_blank_line {
                    continue;
                }
                if lines.has_remaining_data() {
                    log::warn!("Blank line in {:?} ends the scan before the end of the cache", path);
                }
                break;
            }

            scanned += 1;

            if !options.dupes_ok && !has_unique_letters(word) {
                continue;
            }

            if !options.position.matches(word)? {
                continue;
            }

            if !self.clear_of_excluded(word, &options.excluded)? {
                continue;
            }

            if matcher.matches(word, letters) {
                found.insert(word.to_string());
            }
        }

        log::debug!(
            "{} scan matched {} of {} cached words",
            matcher.name(),
            found.len(),
            scanned
        );

        Ok(found)
    }

    fn clear_of_excluded(&self, word: &str, excluded: &[PositionMask]) -> Result<bool> {
        for mask in excluded {
            if !mask.excludes(word)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Apply ranking and the `max_words` bound
    fn reduce<R: Rng + ?Sized>(&self, found: WordSet, options: &FilterOptions, rng: &mut R) -> WordSet {
        let max_words = options.max_words;
        if max_words == 0 {
            return found;
        }

        // Alphabetical base order keeps ties and seeded samples reproducible.
        let mut words: Vec<String> = found.into_iter().collect();
        words.sort_unstable();

        if options.mostly_vowels {
            words.sort_by(|a, b| {
                self.config
                    .vowel_ratio(b)
                    .total_cmp(&self.config.vowel_ratio(a))
            });
        }

        if options.random_sample {
            let pool = if options.mostly_vowels {
                &words[..words.len().min(max_words.saturating_mul(3))]
            } else {
                &words[..]
            };
            return pool.choose_multiple(rng, max_words).cloned().collect();
        }

        words.into_iter().take(max_words).collect()
    }
}
