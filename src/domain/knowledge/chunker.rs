//! Fixed-size character chunking

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Chunk size and overlap, in characters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkingConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

impl ChunkingConfig {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.chunk_size == 0 {
            return Err(DomainError::validation("chunk_size must be greater than 0"));
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(DomainError::validation(
                "chunk_overlap must be less than chunk_size",
            ));
        }

        Ok(())
    }

    fn step(&self) -> usize {
        self.chunk_size - self.chunk_overlap
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
        }
    }
}

/// Split text into windows of `chunk_size` characters, each starting
/// `chunk_size - chunk_overlap` characters after the previous one.
///
/// Counts characters, not bytes, so multi-byte text is never split inside a
/// code point. The last window may be shorter.
pub fn chunk_text(text: &str, config: &ChunkingConfig) -> Result<Vec<String>, DomainError> {
    config.validate()?;

    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let end = (start + config.chunk_size).min(chars.len());
        chunks.push(chars[start..end].iter().collect());
        start += config.step();
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let chunks = chunk_text("", &ChunkingConfig::default()).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_short_text_single_chunk() {
        let chunks = chunk_text("Hello, World!", &ChunkingConfig::default()).unwrap();
        assert_eq!(chunks, vec!["Hello, World!".to_string()]);
    }

    #[test]
    fn test_overlapping_windows() {
        let chunks = chunk_text("abcdefghij", &ChunkingConfig::new(4, 2)).unwrap();
        assert_eq!(chunks, vec!["abcd", "cdef", "efgh", "ghij", "ij"]);
    }

    #[test]
    fn test_default_sizes() {
        let text = "x".repeat(2500);
        let chunks = chunk_text(&text, &ChunkingConfig::default()).unwrap();

        // windows start at 0, 800, 1600, 2400
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0].len(), 1000);
        assert_eq!(chunks[3].len(), 100);
    }

    #[test]
    fn test_multibyte_text() {
        let chunks = chunk_text("ñandú😀é", &ChunkingConfig::new(3, 1)).unwrap();
        assert_eq!(chunks, vec!["ñan", "ndú", "ú😀é", "é"]);
    }

    #[test]
    fn test_invalid_config() {
        assert!(chunk_text("abc", &ChunkingConfig::new(0, 0)).is_err());
        assert!(chunk_text("abc", &ChunkingConfig::new(10, 10)).is_err());
    }
}
