//! Character-at-a-time reads for the `,` instruction.

use std::io::{self, BufRead};

/// Reads one UTF-8 encoded character at a time from a buffered reader.
///
/// A malformed sequence yields `U+FFFD` and consumes only its lead byte; the
/// bytes after it are decoded again by the next read. At most one encoded
/// character (four bytes) is held back from the underlying reader.
pub struct CharReader<R> {
    inner: R,
    pending: [u8; 4],
    len: usize,
}

impl<R: BufRead> CharReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: [0; 4],
            len: 0,
        }
    }

    /// Read the next character, or `Ok(None)` at end of stream.
    pub fn read_char(&mut self) -> io::Result<Option<char>> {
        let Some(first) = self.byte_at(0)? else {
            return Ok(None);
        };

        let width = sequence_width(first);
        if width == 1 {
            self.take(1);
            return Ok(Some(char::from(first)));
        }
        if width == 0 {
            self.take(1);
            return Ok(Some(char::REPLACEMENT_CHARACTER));
        }

        for i in 1..width {
            match self.byte_at(i)? {
                Some(b) if b & 0xC0 == 0x80 => {}
                _ => {
                    self.take(1);
                    return Ok(Some(char::REPLACEMENT_CHARACTER));
                }
            }
        }

        let decoded = std::str::from_utf8(&self.pending[..width])
            .ok()
            .and_then(|s| s.chars().next());
        match decoded {
            Some(ch) => {
                self.take(width);
                Ok(Some(ch))
            }
            // Overlong or surrogate encodings.
            None => {
                self.take(1);
                Ok(Some(char::REPLACEMENT_CHARACTER))
            }
        }
    }

    /// Byte `i` of the lookahead, pulling from the reader as needed.
    fn byte_at(&mut self, i: usize) -> io::Result<Option<u8>> {
        while self.len <= i {
            match next_byte(&mut self.inner)? {
                Some(b) => {
                    self.pending[self.len] = b;
                    self.len += 1;
                }
                None => return Ok(None),
            }
        }
        Ok(Some(self.pending[i]))
    }

    fn take(&mut self, n: usize) {
        self.pending.copy_within(n..self.len, 0);
        self.len -= n;
    }
}

/// Encoded length announced by a leading byte, or 0 if it cannot start one.
fn sequence_width(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

fn next_byte<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<u8>> {
    let b = loop {
        match reader.fill_buf() {
            Ok(buf) => break buf.first().copied(),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    };
    if b.is_some() {
        reader.consume(1);
    }
    Ok(b)
}
