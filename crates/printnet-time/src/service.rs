//! The time-sync service proper.

use std::thread;
use std::time::Duration;

use printnet_common::{LinkState, SettingsStore, TimeSource, WifiMode, NTP_SERVER_SLOTS};

use crate::clock::{format_epoch, parse_wall_clock};
use crate::error::{SyncRefusal, TimeError, TimeResult};

/// Maximum clock polls before a sync start gives up.
pub const SYNC_MAX_ATTEMPTS: u32 = 20;

/// Delay between clock polls.
pub const SYNC_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Epochs below this are "clock not set yet". Freshly booted hardware starts
/// counting from zero; any synchronized clock is far past 16 hours in.
pub const EPOCH_SANITY_THRESHOLD: i64 = 8 * 3600 * 2;

/// Drives NTP synchronization of the platform clock.
///
/// The service holds no reference to its collaborators; the embedding
/// firmware passes them into each call, which keeps the service trivially
/// shareable between the command dispatcher and the boot sequence.
#[derive(Debug)]
pub struct TimeService {
    started: bool,
    internet_time: bool,
    poll_interval: Duration,
    max_attempts: u32,
}

impl TimeService {
    /// Create a stopped service with the default retry budget.
    pub fn new() -> Self {
        TimeService {
            started: false,
            internet_time: false,
            poll_interval: SYNC_POLL_INTERVAL,
            max_attempts: SYNC_MAX_ATTEMPTS,
        }
    }

    /// Override the poll interval. Tests use [`Duration::ZERO`].
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Whether the last `begin` completed successfully.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Whether internet time was enabled when `begin` last read the settings.
    pub fn is_internet_time(&self) -> bool {
        self.internet_time
    }

    /// Stop the service and forget the last sync state. Idempotent.
    pub fn end(&mut self) {
        self.started = false;
        self.internet_time = false;
    }

    /// Start clock synchronization.
    ///
    /// Checks the link preconditions, configures the NTP sources from the
    /// settings, then polls the clock until it passes the sanity threshold.
    /// Any failure leaves the service stopped with `started()` false; a
    /// timeout additionally tears the source configuration back down.
    pub fn begin(
        &mut self,
        settings: &dyn SettingsStore,
        link: &dyn LinkState,
        source: &mut dyn TimeSource,
    ) -> TimeResult<()> {
        self.end();
        // An access point serves clients; it has no upstream to ask for time.
        if link.wifi_mode() == WifiMode::AccessPoint {
            return Err(SyncRefusal::AccessPointMode.into());
        }
        if link.bluetooth_active() {
            return Err(SyncRefusal::BluetoothActive.into());
        }
        if !link.ethernet_up() && link.wifi_mode() == WifiMode::Off {
            return Err(SyncRefusal::NoLink.into());
        }
        if !settings.internet_time_enabled() {
            return Err(SyncRefusal::InternetTimeDisabled.into());
        }
        self.internet_time = true;

        let servers: [String; NTP_SERVER_SLOTS] =
            [settings.ntp_server(0), settings.ntp_server(1), settings.ntp_server(2)];
        let offset_seconds = settings.timezone_offset_hours() as i32 * 3600;
        let dst_seconds = if settings.dst_enabled() { 3600 } else { 0 };
        source.configure_sources(offset_seconds, dst_seconds, &servers);

        let mut now = source.current_epoch_seconds();
        let mut attempts = 0;
        while now < EPOCH_SANITY_THRESHOLD && attempts < self.max_attempts {
            thread::sleep(self.poll_interval);
            attempts += 1;
            now = source.current_epoch_seconds();
        }
        if now < EPOCH_SANITY_THRESHOLD {
            log::warn!("clock never advanced past sanity threshold, giving up sync");
            self.end();
            return Err(TimeError::SyncTimeout { attempts });
        }
        log::info!("time sync started, clock at {}", format_epoch(now));
        self.started = true;
        Ok(())
    }

    /// Current wall clock as `YYYY-MM-DD HH:MM:SS`.
    pub fn current_time(&self, source: &dyn TimeSource) -> String {
        format_epoch(source.current_epoch_seconds())
    }

    /// Set the wall clock from an operator-supplied string.
    ///
    /// Accepts `YYYY-MM-DD-HH-MM-SS` with `-`, `:` or `#` separators. The
    /// NTP sources are reset before the manual value is applied so a later
    /// background sync cannot silently fight it.
    pub fn set_time(&self, source: &mut dyn TimeSource, input: &str) -> TimeResult<()> {
        let epoch = parse_wall_clock(input)?;
        let no_servers: [String; NTP_SERVER_SLOTS] = Default::default();
        source.configure_sources(0, 0, &no_servers);
        source.set_wall_clock(epoch)?;
        Ok(())
    }
}

impl Default for TimeService {
    fn default() -> Self {
        Self::new()
    }
}
