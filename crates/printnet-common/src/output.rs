//! Output sink for command responses and status lines.

/// Destination for response lines produced by command handlers.
///
/// Implementations decide where the text goes: the serial console, the
/// network connection the command arrived on, or a capture buffer in tests.
pub trait OutputSink {
    /// Send one line of text to the output. The implementation appends
    /// whatever line terminator its transport expects.
    fn send_line(&mut self, line: &str);
}

/// Collects sent lines in memory. Useful for buffering responses before a
/// transport flush, and as a capture sink in tests.
impl OutputSink for Vec<String> {
    fn send_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}
