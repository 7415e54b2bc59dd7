//! Cache file output
//!
//! Buffered writer used by the builder to rewrite the word cache.

use crate::error::Result;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Buffer size for cache writing (64KB)
const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Truncating, buffered writer for the word cache
pub struct CacheWriter {
    writer: BufWriter<File>,
    lines_written: u64,
    bytes_written: u64,
}

impl CacheWriter {
    /// Create the cache file, truncating any previous content
    pub fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file),
            lines_written: 0,
            bytes_written: 0,
        })
    }

    /// Write a word followed by a newline
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.lines_written += 1;
        self.bytes_written += line.len() as u64 + 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl Drop for CacheWriter {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Ensure output directory exists
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cache_writer() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words");

        let mut writer = CacheWriter::create(&path).unwrap();
        writer.write_line("apple").unwrap();
        writer.write_line("amble").unwrap();
        writer.flush().unwrap();

        assert_eq!(writer.lines_written(), 2);
        assert_eq!(writer.bytes_written(), 12);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "apple\namble\n");
    }

    #[test]
    fn test_cache_writer_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words");
        std::fs::write(&path, "stale\nwords\nhere\n").unwrap();

        let mut writer = CacheWriter::create(&path).unwrap();
        writer.write_line("fresh").unwrap();
        drop(writer);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_ensure_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");

        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_output_dir(&nested).unwrap();
    }
}
