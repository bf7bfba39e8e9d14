// src/process/chunk.rs

use std::io::{self, BufRead};

/// Line-aligned byte hint used in low-memory mode.
pub const LOW_MEMORY_CHUNK_BYTES: usize = 5_000;

/// How much of the decompressed source is held in memory at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkSize {
    /// At most this many lines per chunk.
    Lines(usize),
    /// Lines are added until at least this many bytes are held (one line minimum).
    Bytes(usize),
    /// Everything left in the stream.
    Unbounded,
}

impl ChunkSize {
    fn is_full(&self, lines: usize, bytes: usize) -> bool {
        match *self {
            ChunkSize::Lines(n) => lines >= n.max(1),
            ChunkSize::Bytes(n) => bytes >= n.max(1),
            ChunkSize::Unbounded => false,
        }
    }
}

/// Splits a line stream into chunks of raw lines (terminators included).
pub struct ChunkReader<R> {
    reader: R,
    size: ChunkSize,
    done: bool,
}

impl<R: BufRead> ChunkReader<R> {
    pub fn new(reader: R, size: ChunkSize) -> Self {
        Self {
            reader,
            size,
            done: false,
        }
    }

    fn read_chunk(&mut self) -> io::Result<Vec<Vec<u8>>> {
        let mut lines = Vec::new();
        let mut bytes = 0;
        while !self.size.is_full(lines.len(), bytes) {
            let mut buf = Vec::new();
            let n = self.reader.read_until(b'\n', &mut buf)?;
            if n == 0 {
                self.done = true;
                break;
            }
            bytes += n;
            lines.push(buf);
        }
        Ok(lines)
    }
}

impl<R: BufRead> Iterator for ChunkReader<R> {
    type Item = io::Result<Vec<Vec<u8>>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_chunk() {
            Ok(lines) if lines.is_empty() => None,
            Ok(lines) => Some(Ok(lines)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Cursor;

    fn chunk_lens(input: &str, size: ChunkSize) -> Result<Vec<usize>> {
        let reader = ChunkReader::new(Cursor::new(input.as_bytes().to_vec()), size);
        let mut lens = Vec::new();
        for chunk in reader {
            lens.push(chunk?.len());
        }
        Ok(lens)
    }

    #[test]
    fn line_chunks() -> Result<()> {
        let input = "a\nb\nc\nd\ne\n";
        assert_eq!(chunk_lens(input, ChunkSize::Lines(2))?, vec![2, 2, 1]);
        assert_eq!(chunk_lens(input, ChunkSize::Lines(1))?, vec![1; 5]);
        assert_eq!(chunk_lens(input, ChunkSize::Lines(0))?, vec![1; 5]);
        Ok(())
    }

    #[test]
    fn byte_hint_is_line_aligned() -> Result<()> {
        // each line is 4 bytes
        let input = "aaa\nbbb\nccc\nddd\n";
        assert_eq!(chunk_lens(input, ChunkSize::Bytes(5))?, vec![2, 2]);
        assert_eq!(chunk_lens(input, ChunkSize::Bytes(1))?, vec![1, 1, 1, 1]);
        Ok(())
    }

    #[test]
    fn unbounded_reads_everything() -> Result<()> {
        assert_eq!(chunk_lens("a\nb\nc", ChunkSize::Unbounded)?, vec![3]);
        assert!(chunk_lens("", ChunkSize::Unbounded)?.is_empty());
        Ok(())
    }
}
