//! Link-state queries for the network interfaces.

/// Operating mode of the WiFi interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiMode {
    /// Radio disabled.
    Off,
    /// Access-point only; no route to the internet.
    AccessPoint,
    /// Joined to an infrastructure network.
    Station,
}

/// Queries against the current state of the controller's links.
///
/// The time service refuses to start NTP synchronization when the link state
/// cannot reach the internet (AP-only mode, active Bluetooth, no link at all).
pub trait LinkState {
    /// Current WiFi operating mode.
    fn wifi_mode(&self) -> WifiMode;

    /// Whether the Bluetooth service is currently active.
    fn bluetooth_active(&self) -> bool;

    /// Whether the wired Ethernet link is up.
    fn ethernet_up(&self) -> bool;
}

/// A fixed link-state snapshot, for embedders that poll their drivers once
/// per decision and for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedLinkState {
    /// WiFi operating mode.
    pub wifi_mode: WifiMode,
    /// Bluetooth service active.
    pub bluetooth_active: bool,
    /// Ethernet link up.
    pub ethernet_up: bool,
}

impl Default for FixedLinkState {
    fn default() -> Self {
        FixedLinkState {
            wifi_mode: WifiMode::Station,
            bluetooth_active: false,
            ethernet_up: false,
        }
    }
}

impl LinkState for FixedLinkState {
    fn wifi_mode(&self) -> WifiMode {
        self.wifi_mode
    }

    fn bluetooth_active(&self) -> bool {
        self.bluetooth_active
    }

    fn ethernet_up(&self) -> bool {
        self.ethernet_up
    }
}
