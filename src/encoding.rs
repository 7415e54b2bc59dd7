//! Line readers for the dictionary and the word cache
//!
//! The system dictionary may use any encoding and is decoded to a UTF-8
//! stream before it is split into lines. The cache is always UTF-8 and is
//! read through a memory map.

use crate::error::Result;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            encoding: encoding_rs::UTF_8,
        }
    }
}

/// Detect the encoding of a file by sampling its content
pub fn detect_encoding(path: &Path) -> Result<EncodingInfo> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut sample = vec![0u8; 64 * 1024];
    let bytes_read = reader.read(&mut sample)?;
    sample.truncate(bytes_read);

    if bytes_read == 0 {
        return Ok(EncodingInfo::default());
    }

    if let Some(encoding) = detect_bom(&sample) {
        return Ok(EncodingInfo {
            name: encoding.name(),
            encoding,
        });
    }

    let mut detector = EncodingDetector::new();
    detector.feed(&sample, bytes_read < 64 * 1024);
    let encoding = detector.guess(None, true);

    Ok(EncodingInfo {
        name: encoding.name(),
        encoding,
    })
}

/// Detect BOM (Byte Order Mark) at the start of content
fn detect_bom(content: &[u8]) -> Option<&'static Encoding> {
    if content.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return Some(encoding_rs::UTF_8);
    }
    if content.starts_with(&[0xFE, 0xFF]) {
        return Some(encoding_rs::UTF_16BE);
    }
    if content.starts_with(&[0xFF, 0xFE]) {
        return Some(encoding_rs::UTF_16LE);
    }
    None
}

/// Dictionary line iterator with automatic transcoding
///
/// The whole file is decoded to UTF-8 before it is split, so UTF-16 input
/// and byte order marks never leak into the lines. Yields lines without
/// their trailing `\n` / `\r\n`.
pub struct DictionaryLines {
    reader: BufReader<DecodeReaderBytes<File, Vec<u8>>>,
    line_buffer: Vec<u8>,
}

impl DictionaryLines {
    /// Open a dictionary, detecting its encoding first
    pub fn open(path: &Path) -> Result<Self> {
        let info = detect_encoding(path)?;
        if info.encoding != encoding_rs::UTF_8 {
            log::info!("Transcoding dictionary {:?} from {}", path, info.name);
        }
        Self::with_encoding(path, info.encoding)
    }

    /// Open a dictionary with a known encoding; a BOM still takes precedence
    pub fn with_encoding(path: &Path, encoding: &'static Encoding) -> Result<Self> {
        let file = File::open(path)?;
        let decoder = DecodeReaderBytesBuilder::new()
            .encoding(Some(encoding))
            .bom_override(true)
            .strip_bom(true)
            .build(file);

        Ok(Self {
            reader: BufReader::with_capacity(64 * 1024, decoder),
            line_buffer: Vec::with_capacity(256),
        })
    }
}

impl Iterator for DictionaryLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line_buffer.clear();

        match self.reader.read_until(b'\n', &mut self.line_buffer) {
            Ok(0) => None,
            Ok(_) => {
                while matches!(self.line_buffer.last(), Some(b'\n') | Some(b'\r')) {
                    self.line_buffer.pop();
                }

                let line = String::from_utf8_lossy(&self.line_buffer).into_owned();
                if line.contains(char::REPLACEMENT_CHARACTER) {
                    log::warn!("Encoding errors in dictionary line, using lossy conversion");
                }
                Some(Ok(line))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

/// Memory-mapped line iterator over the UTF-8 word cache
pub struct CacheLines {
    mmap: Option<memmap2::Mmap>,
    position: usize,
}

impl CacheLines {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;

        // Zero-length files cannot be mapped.
        let mmap = if file.metadata()?.len() == 0 {
            None
        } else {
            // SAFETY: the cache is only rewritten by the builder, which never
            // runs while a scan is in progress.
            Some(unsafe { memmap2::Mmap::map(&file)? })
        };

        Ok(Self { mmap, position: 0 })
    }

    /// Total size of the mapped cache in bytes
    pub fn size(&self) -> usize {
        self.mmap.as_ref().map_or(0, |m| m.len())
    }

    /// Whether any non-blank line remains after the current position
    pub fn has_remaining_data(&self) -> bool {
        self.mmap.as_ref().is_some_and(|m| {
            m[self.position.min(m.len())..]
                .iter()
                .any(|b| !b.is_ascii_whitespace())
        })
    }
}

impl Iterator for CacheLines {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let mmap = self.mmap.as_ref()?;
        if self.position >= mmap.len() {
            return None;
        }

        let remaining = &mmap[self.position..];
        let line_end = memchr::memchr(b'\n', remaining)
            .map(|i| i + 1)
            .unwrap_or(remaining.len());

        let line_bytes = &remaining[..line_end];
        self.position += line_end;

        let line_bytes = line_bytes.strip_suffix(b"\n").unwrap_or(line_bytes);
        let line_bytes = line_bytes.strip_suffix(b"\r").unwrap_or(line_bytes);

        Some(String::from_utf8_lossy(line_bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_utf8_detection() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file, "café").unwrap();

        let info = detect_encoding(file.path()).unwrap();
        assert_eq!(info.name, "UTF-8");
    }

    #[test]
    fn test_dictionary_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "apple\r\nAaron\nample").unwrap();

        let lines: Vec<_> = DictionaryLines::open(file.path())
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert_eq!(lines, vec!["apple", "Aaron", "ample"]);
    }

    #[test]
    fn test_dictionary_latin1() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"caf\xe9s\n").unwrap();

        let lines: Vec<_> = DictionaryLines::with_encoding(file.path(), encoding_rs::WINDOWS_1252)
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert_eq!(lines, vec!["cafés"]);
    }

    #[test]
    fn test_dictionary_utf8_bom() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFapple\nample\n").unwrap();

        let lines: Vec<_> = DictionaryLines::open(file.path())
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert_eq!(lines, vec!["apple", "ample"]);
    }

    #[test]
    fn test_dictionary_utf16le() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "apple\r\namble\nmaybe\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();

        assert_eq!(detect_encoding(file.path()).unwrap().name, "UTF-16LE");

        let lines: Vec<_> = DictionaryLines::open(file.path())
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert_eq!(lines, vec!["apple", "amble", "maybe"]);
    }

    #[test]
    fn test_cache_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "apple\nample\n\namble\n").unwrap();

        let mut lines = CacheLines::open(file.path()).unwrap();
        assert_eq!(lines.next().as_deref(), Some("apple"));
        assert_eq!(lines.next().as_deref(), Some("ample"));
        assert_eq!(lines.next().as_deref(), Some(""));
        assert!(lines.has_remaining_data());
        assert_eq!(lines.next().as_deref(), Some("amble"));
        assert!(!lines.has_remaining_data());
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_cache() {
        let file = NamedTempFile::new().unwrap();

        let mut lines = CacheLines::open(file.path()).unwrap();
        assert_eq!(lines.size(), 0);
        assert_eq!(lines.next(), None);
    }
}
