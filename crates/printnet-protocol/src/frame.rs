//! Command-marker parsing.
//!
//! A completed line is scanned for the `[ESP<id>]` marker. The marker may sit
//! anywhere in the line (printer firmware routinely prefixes `echo:` or `ok`
//! to forwarded text); everything after the closing bracket is the parameter
//! text, verbatim.

/// Marker prefix identifying a controller command inside a line.
pub const COMMAND_PREFIX: &str = "[ESP";

/// Marker suffix closing the command id.
pub const COMMAND_SUFFIX: char = ']';

/// A recognized command extracted from one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFrame {
    /// Numeric command id. Always non-zero.
    pub id: i32,
    /// Free-text parameters following the closing bracket. May be empty.
    pub params: String,
}

/// Scan a line for a command marker.
///
/// Returns `None` when the marker prefix or suffix is missing, or when the
/// id text does not read as a non-zero integer. An id of literal `0` is also
/// rejected: the conversion cannot distinguish it from unparseable text, and
/// the command numbering starts at 100, so nothing is lost.
///
/// Lines without a marker are reserved for future parsing of plain printer
/// responses.
pub fn parse_command(line: &str) -> Option<CommandFrame> {
    let start = line.find(COMMAND_PREFIX)?;
    let id_start = start + COMMAND_PREFIX.len();
    let close = line[id_start..].find(COMMAND_SUFFIX)? + id_start;
    let id = atoi(&line[id_start..close]);
    if id == 0 {
        log::trace!("dropping frame with unparseable id: {:?}", line);
        return None;
    }
    Some(CommandFrame {
        id,
        params: line[close + 1..].to_string(),
    })
}

/// C `atoi` conversion: skip leading whitespace, take an optional sign and a
/// run of leading digits, yield 0 when no digits are found. Saturates instead
/// of overflowing.
fn atoi(s: &str) -> i32 {
    let s = s.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let mut value: i64 = 0;
    let mut any = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        any = true;
        value = (value * 10 + d as i64).min(i32::MAX as i64 + 1);
    }
    if !any {
        return 0;
    }
    if negative {
        (-value).max(i32::MIN as i64) as i32
    } else {
        value.min(i32::MAX as i64) as i32
    }
}
