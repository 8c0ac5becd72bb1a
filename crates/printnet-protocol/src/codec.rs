//! Byte-at-a-time line framer.
//!
//! Each transport channel owns one [`LineFramer`]. Bytes are fed in exactly
//! as they arrive; the framer accumulates printable runs, discards runs that
//! were interrupted by binary noise, and scans the accumulated line for a
//! command whenever a terminator byte comes in.

use bytes::{BufMut, BytesMut};

use crate::frame::{parse_command, CommandFrame};

/// Maximum accumulated line length. Printer command lines are short; a run
/// longer than this is binary noise and is discarded like a continuity break.
pub const MAX_LINE_LENGTH: usize = 160;

/// Minimum line length worth scanning. The shortest real command is a
/// three-character G-code word, so lines of 3 bytes or fewer are noise.
pub const MIN_COMMAND_LENGTH: usize = 3;

fn is_printable(byte: u8) -> bool {
    (0x20..=0x7E).contains(&byte)
}

/// Incremental framer for one byte stream.
///
/// State is two fields: the line buffer and a continuity flag recording
/// whether the previous byte was printable. A non-printable byte breaks
/// continuity; the stale buffer is discarded lazily, on the next byte after
/// the break. That ordering matters: a CR both breaks continuity and
/// triggers the scan of the line it terminates, and the follow-up LF of a
/// CRLF pair then sees an already-cleared buffer instead of re-scanning it.
#[derive(Debug)]
pub struct LineFramer {
    /// Accumulated printable bytes since the last reset.
    buffer: BytesMut,
    /// Whether the previous byte was printable.
    continuity: bool,
}

impl LineFramer {
    /// Create a new framer.
    pub fn new() -> Self {
        LineFramer {
            buffer: BytesMut::with_capacity(MAX_LINE_LENGTH),
            continuity: false,
        }
    }

    /// Feed one byte from the transport.
    ///
    /// Returns a [`CommandFrame`] when this byte terminated a line that
    /// carries a well-formed command marker; `None` otherwise. Malformed or
    /// markerless lines are dropped silently.
    pub fn ingest(&mut self, byte: u8) -> Option<CommandFrame> {
        // Lazy reset: a break recorded on the previous byte discards the
        // buffer now, whatever this byte is.
        if !self.continuity {
            self.buffer.clear();
        }
        if is_printable(byte) {
            self.continuity = true;
            if self.buffer.len() >= MAX_LINE_LENGTH {
                // Runaway printable run. Discard it like a continuity break.
                log::debug!("line exceeded {} bytes, discarding", MAX_LINE_LENGTH);
                self.buffer.clear();
                self.continuity = false;
            } else {
                self.buffer.put_u8(byte);
            }
        } else {
            self.continuity = false;
        }
        // Terminators are non-printable, so continuity is already broken by
        // the time we scan; the buffer still holds the line they terminate.
        if (byte == b'\r' || byte == b'\n') && self.buffer.len() > MIN_COMMAND_LENGTH {
            let line = String::from_utf8_lossy(&self.buffer).into_owned();
            return parse_command(&line);
        }
        None
    }

    /// Feed a slice of bytes, collecting every recognized command frame.
    pub fn ingest_slice(&mut self, data: &[u8]) -> Vec<CommandFrame> {
        data.iter().filter_map(|&b| self.ingest(b)).collect()
    }

    /// Number of bytes currently buffered.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Discard any buffered partial line.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.continuity = false;
    }
}

impl Default for LineFramer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_ignored() {
        let mut framer = LineFramer::new();
        assert!(framer.ingest_slice(b"ok\r\n").is_empty());
    }

    #[test]
    fn test_command_after_short_line() {
        let mut framer = LineFramer::new();
        let frames = framer.ingest_slice(b"ok\r\n[ESP800]\r\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].id, 800);
        assert_eq!(frames[0].params, "");
    }

    #[test]
    fn test_repeated_terminators_dispatch_once() {
        // The lazy reset runs before the second terminator is examined, so
        // CR CR LF cannot re-scan the same line.
        let mut framer = LineFramer::new();
        let frames = framer.ingest_slice(b"[ESP800]\r\r\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].id, 800);
    }

    #[test]
    fn test_crlf_dispatches_once() {
        let mut framer = LineFramer::new();
        let frames = framer.ingest_slice(b"[ESP800]\r\n[ESP800]\r\n");
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn test_binary_noise_breaks_continuity() {
        // The run interrupted by the NUL byte is discarded; the tail alone
        // is too short to scan.
        let mut framer = LineFramer::new();
        assert!(framer.ingest_slice(b"[ESP8\x0000]\r\n").is_empty());
    }

    #[test]
    fn test_noise_then_fresh_command() {
        let mut framer = LineFramer::new();
        let mut stream = Vec::new();
        stream.extend_from_slice(b"garbage\x01\x02\x03");
        stream.extend_from_slice(b"[ESP115]V1.0 params-here\n");
        let frames = framer.ingest_slice(&stream);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].id, 115);
        assert_eq!(frames[0].params, "V1.0 params-here");
    }

    #[test]
    fn test_params_preserved_with_leading_text() {
        let mut framer = LineFramer::new();
        let frames = framer.ingest_slice(b"echo:[ESP140]srv\r\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].id, 140);
        assert_eq!(frames[0].params, "srv");
    }

    #[test]
    fn test_runaway_line_stays_bounded() {
        let mut framer = LineFramer::new();
        let noise = vec![b'A'; 10_000];
        assert!(framer.ingest_slice(&noise).is_empty());
        assert!(framer.buffered_len() <= MAX_LINE_LENGTH);
        assert!(framer.ingest(b'\r').is_none());
    }

    #[test]
    fn test_clear_discards_partial_line() {
        let mut framer = LineFramer::new();
        assert!(framer.ingest_slice(b"[ESP80").is_empty());
        framer.clear();
        assert!(framer.ingest_slice(b"0]\r\n").is_empty());
    }
}
