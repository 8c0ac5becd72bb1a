//! Error types for the time service.

use printnet_common::ClockSetError;
use thiserror::Error;

/// Why a synchronization start was refused before any work happened.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyncRefusal {
    /// WiFi is in access-point mode; there is no route to an NTP server.
    #[error("wifi is in access-point mode")]
    AccessPointMode,

    /// The Bluetooth service is active and owns the radio.
    #[error("bluetooth service is active")]
    BluetoothActive,

    /// Neither Ethernet nor WiFi provides a link.
    #[error("no network link is up")]
    NoLink,

    /// Internet time is disabled in the settings.
    #[error("internet time is disabled")]
    InternetTimeDisabled,
}

/// Errors reported by the time service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// A set-time string could not be parsed or held an out-of-range field.
    #[error("invalid time string: {0}")]
    InvalidTimeString(String),

    /// A precondition for starting synchronization was not met.
    #[error("time sync refused: {0}")]
    SyncPrecondition(#[from] SyncRefusal),

    /// The clock never reached a plausible value within the retry budget.
    #[error("clock did not advance after {attempts} attempts")]
    SyncTimeout {
        /// Number of poll attempts made.
        attempts: u32,
    },

    /// The platform rejected the wall-clock update.
    #[error(transparent)]
    ClockSet(#[from] ClockSetError),
}

/// Result type alias for time-service operations.
pub type TimeResult<T> = Result<T, TimeError>;
