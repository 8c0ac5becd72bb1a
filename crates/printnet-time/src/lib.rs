//! printnet Time-Sync Service
//!
//! Keeps the controller's wall clock correct. The actual NTP machinery lives
//! in the platform's [`TimeSource`](printnet_common::TimeSource); this crate
//! decides *when* synchronization may start (link preconditions, settings),
//! waits for the clock to become plausible, formats the current time for
//! status reports, and parses operator-supplied set-time strings.
//!
//! Synchronization is refused outright when the controller cannot reach the
//! internet: WiFi in access-point mode, an active Bluetooth session, or no
//! link at all. A refused or timed-out start leaves the service stopped and
//! the platform clock untouched beyond the source configuration it tears
//! back down.

mod clock;
mod error;
mod service;

pub use clock::*;
pub use error::*;
pub use service::*;
