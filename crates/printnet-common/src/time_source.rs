//! Platform time-source collaborator.

use thiserror::Error;

use crate::settings::NTP_SERVER_SLOTS;

/// The platform rejected a wall-clock update.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("wall clock rejected: {0}")]
pub struct ClockSetError(pub String);

/// The platform clock: reads the current epoch, accepts NTP source
/// configuration, and accepts manual wall-clock updates.
///
/// On the target hardware this wraps the SDK's SNTP configuration and
/// `settimeofday`; in tests it is a mock whose clock the test advances.
pub trait TimeSource {
    /// Current wall-clock time as seconds since the Unix epoch. Before the
    /// first synchronization this is whatever the platform boots with,
    /// typically a value near zero.
    fn current_epoch_seconds(&self) -> i64;

    /// Configure the NTP sources: total UTC offset and DST adjustment in
    /// seconds, plus up to three server hostnames. Starts (or restarts)
    /// background synchronization against those servers.
    fn configure_sources(
        &mut self,
        offset_seconds: i32,
        dst_seconds: i32,
        servers: &[String; NTP_SERVER_SLOTS],
    );

    /// Set the wall clock to the given epoch time.
    fn set_wall_clock(&mut self, epoch_seconds: i64) -> Result<(), ClockSetError>;
}
