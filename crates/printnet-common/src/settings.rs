//! Read-only settings store collaborator.

/// Number of NTP server slots the controller supports.
pub const NTP_SERVER_SLOTS: usize = 3;

/// Read-only access to the persisted controller settings.
///
/// The actual storage (EEPROM, flash preferences, a config file in a
/// simulator) lives outside this workspace; this trait is the surface the
/// time service reads through.
pub trait SettingsStore {
    /// Time-zone offset from UTC, in whole hours.
    fn timezone_offset_hours(&self) -> i8;

    /// Whether daylight-saving time is in effect.
    fn dst_enabled(&self) -> bool;

    /// NTP server hostname for the given slot (0-based, up to
    /// [`NTP_SERVER_SLOTS`]). Empty string when the slot is unset.
    fn ntp_server(&self, slot: usize) -> String;

    /// Whether NTP-based wall-clock synchronization is enabled.
    fn internet_time_enabled(&self) -> bool;
}

/// A fixed, in-memory settings store.
///
/// Embedders that load their configuration once at boot can fill this in and
/// hand it to the time service; tests use it directly.
#[derive(Debug, Clone)]
pub struct StaticSettings {
    /// Time-zone offset from UTC, in whole hours.
    pub timezone_offset_hours: i8,
    /// Whether daylight-saving time is in effect.
    pub dst_enabled: bool,
    /// NTP server hostnames.
    pub ntp_servers: [String; NTP_SERVER_SLOTS],
    /// Whether NTP synchronization is enabled.
    pub internet_time_enabled: bool,
}

impl Default for StaticSettings {
    fn default() -> Self {
        StaticSettings {
            timezone_offset_hours: 0,
            dst_enabled: false,
            ntp_servers: [
                "pool.ntp.org".to_string(),
                String::new(),
                String::new(),
            ],
            internet_time_enabled: true,
        }
    }
}

impl SettingsStore for StaticSettings {
    fn timezone_offset_hours(&self) -> i8 {
        self.timezone_offset_hours
    }

    fn dst_enabled(&self) -> bool {
        self.dst_enabled
    }

    fn ntp_server(&self, slot: usize) -> String {
        self.ntp_servers.get(slot).cloned().unwrap_or_default()
    }

    fn internet_time_enabled(&self) -> bool {
        self.internet_time_enabled
    }
}
