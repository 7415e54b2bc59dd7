//! Word cache builder
//!
//! Reduces the system dictionary to the lowercase, punctuation-free words of
//! the target length and rewrites the cache with them.

use crate::config::Config;
use crate::encoding::DictionaryLines;
use crate::error::{Result, WordError};
use crate::output::{ensure_output_dir, CacheWriter};
use std::path::Path;

/// Counters collected while building the cache
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildStats {
    pub lines_read: u64,
    pub proper_nouns: u64,
    pub words_written: u64,
    pub bytes_written: u64,
}

/// Build the cache described by `config` from its dictionary
pub fn build_cache(config: &Config) -> Result<BuildStats> {
    build(config.words_file(), &config.cache_path(), config.word_length)
}

/// Rewrite `dest` with the normalized words of `source` that have exactly
/// `target_length` characters.
pub fn build(source: &Path, dest: &Path, target_length: usize) -> Result<BuildStats> {
    if !source.exists() {
        return Err(WordError::SourceNotFound(source.to_path_buf()));
    }

    if let Some(parent) = dest.parent() {
        ensure_output_dir(parent)?;
    }

    log::debug!("Building word cache {:?} from {:?}", dest, source);

    let lines = DictionaryLines::open(source)?;
    let mut writer = CacheWriter::create(dest)?;
    let mut stats = BuildStats::default();

    for line in lines {
        let line = line?;
        stats.lines_read += 1;

        if line.chars().next().is_some_and(char::is_uppercase) {
            stats.proper_nouns += 1;
            continue;
        }

        if let Some(word) = normalize(&line, target_length) {
            writer.write_line(&word)?;
        }
    }

    writer.flush()?;
    stats.words_written = writer.lines_written();
    stats.bytes_written = writer.bytes_written();

    log::info!(
        "Cached {} of {} dictionary lines ({} proper nouns skipped)",
        stats.words_written,
        stats.lines_read,
        stats.proper_nouns
    );

    Ok(stats)
}

/// Strip punctuation and whitespace; keep the word only at `target_length`
fn normalize(line: &str, target_length: usize) -> Option<String> {
    let stripped: String = line.chars().filter(|c| !c.is_ascii_punctuation()).collect();
    let word = stripped.trim();

    if word.chars().count() == target_length {
        Some(word.to_lowercase())
    } else {
        None
    }
}
