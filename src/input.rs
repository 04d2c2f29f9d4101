//! Character input
//!
//! A pull-style reader: hand back the next character or end-of-stream.
//! UTF-8 is decoded incrementally so arbitrarily large inputs stream
//! without buffering whole lines. Malformed bytes decode to U+FFFD; a byte
//! that aborts a multi-byte sequence is pushed back and reprocessed as the
//! start of the next character.

use std::io::{self, Read};

/// Incremental UTF-8 character reader over any byte source
#[derive(Debug)]
pub struct CharReader<R> {
    inner: R,
    /// Byte that aborted a sequence, waiting to be reprocessed
    pending: Option<u8>,
}

impl<R: Read> CharReader<R> {
    /// Wrap a byte source. Callers that care about syscall overhead should
    /// pass a buffered reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: None,
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pending.take() {
            return Ok(Some(byte));
        }
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Pull the next character, or `None` at end of stream
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        let first = match self.next_byte()? {
            Some(byte) => byte,
            None => return Ok(None),
        };

        if first < 0x80 {
            return Ok(Some(first as char));
        }

        let continuation_count = match first {
            0xc2..=0xdf => 1,
            0xe0..=0xef => 2,
            0xf0..=0xf4 => 3,
            // stray continuation byte or invalid lead byte
            _ => return Ok(Some('\u{FFFD}')),
        };

        let mut buf = [first, 0, 0, 0];
        let mut len = 1;
        for _ in 0..continuation_count {
            match self.next_byte()? {
                Some(byte) if (0x80..=0xbf).contains(&byte) => {
                    buf[len] = byte;
                    len += 1;
                },
                Some(byte) => {
                    // not a continuation byte: reprocess it next call
                    self.pending = Some(byte);
                    return Ok(Some('\u{FFFD}'));
                },
                // truncated at end of stream
                None => return Ok(Some('\u{FFFD}')),
            }
        }

        // from_utf8 still rejects overlong encodings and surrogates
        match std::str::from_utf8(&buf[..len]) {
            Ok(s) => Ok(Some(s.chars().next().unwrap_or('\u{FFFD}'))),
            Err(_) => Ok(Some('\u{FFFD}')),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(bytes: &[u8]) -> Vec<char> {
        let mut reader = CharReader::new(bytes);
        let mut chars = Vec::new();
        while let Some(c) = reader.next_char().unwrap() {
            chars.push(c);
        }
        chars
    }

    #[test]
    fn test_ascii() {
        assert_eq!(read_all(b"Hi\n"), vec!['H', 'i', '\n']);
    }

    #[test]
    fn test_multibyte() {
        assert_eq!(read_all("中ö€🎉".as_bytes()), vec!['中', 'ö', '€', '🎉']);
    }

    #[test]
    fn test_empty() {
        assert_eq!(read_all(b""), Vec::<char>::new());
    }

    #[test]
    fn test_truncated_sequence_at_eof() {
        // lead byte of a 3-byte sequence, then nothing
        assert_eq!(read_all(&[0xe4]), vec!['\u{FFFD}']);
        assert_eq!(read_all(&[0xe4, 0xb8]), vec!['\u{FFFD}']);
    }

    #[test]
    fn test_aborted_sequence_reprocesses_byte() {
        // 0xe4 expects two continuations; 'A' aborts and must still appear
        assert_eq!(read_all(&[0xe4, b'A']), vec!['\u{FFFD}', 'A']);
    }

    #[test]
    fn test_stray_continuation_byte() {
        assert_eq!(read_all(&[0x80, b'x']), vec!['\u{FFFD}', 'x']);
    }

    #[test]
    fn test_overlong_encoding_rejected() {
        // 0xc0 0xaf is an overlong '/'
        assert_eq!(read_all(&[0xc0, 0xaf]), vec!['\u{FFFD}', '\u{FFFD}']);
    }
}
