//! Per-transport channel management.

use crate::codec::LineFramer;
use crate::dispatch::CommandHandler;

/// Identifies which byte stream a byte arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    /// The printer-facing serial link.
    Serial,
    /// The TCP connection from the network host.
    Network,
}

/// Owns the framing state for both transports and the shared handler.
///
/// Each transport gets its own [`LineFramer`]; the two streams are fully
/// independent and a partial line on one can never leak into the other. Both
/// feed recognized frames to the same handler.
///
/// Ingest is synchronous and run-to-completion per byte, driven from the
/// host's polling loop. Nothing here needs locking as long as one scanner is
/// not shared across threads.
pub struct ChannelScanner<H: CommandHandler> {
    serial: LineFramer,
    network: LineFramer,
    handler: H,
}

impl<H: CommandHandler> ChannelScanner<H> {
    /// Create a scanner dispatching to `handler`.
    pub fn new(handler: H) -> Self {
        ChannelScanner {
            serial: LineFramer::new(),
            network: LineFramer::new(),
            handler,
        }
    }

    /// Feed one byte from the given transport, dispatching any completed
    /// command.
    pub fn ingest(&mut self, transport: Transport, byte: u8) {
        let framer = match transport {
            Transport::Serial => &mut self.serial,
            Transport::Network => &mut self.network,
        };
        if let Some(frame) = framer.ingest(byte) {
            log::trace!(
                "dispatching command {} from {:?} (params {:?})",
                frame.id,
                transport,
                frame.params
            );
            self.handler.handle(frame.id, &frame.params);
        }
    }

    /// Feed a slice of bytes from the given transport.
    pub fn ingest_slice(&mut self, transport: Transport, data: &[u8]) {
        for &byte in data {
            self.ingest(transport, byte);
        }
    }

    /// Access the handler (e.g. to drain a buffering sink).
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every dispatched (id, params) pair.
    #[derive(Default)]
    struct Recorder {
        frames: Vec<(i32, String)>,
    }

    impl CommandHandler for Recorder {
        fn handle(&mut self, id: i32, params: &str) {
            self.frames.push((id, params.to_string()));
        }
    }

    #[test]
    fn test_routes_both_transports_to_handler() {
        let mut scanner = ChannelScanner::new(Recorder::default());
        scanner.ingest_slice(Transport::Serial, b"[ESP800]\r\n");
        scanner.ingest_slice(Transport::Network, b"[ESP115]V1.0\r\n");
        assert_eq!(
            scanner.handler().frames,
            vec![(800, String::new()), (115, "V1.0".to_string())]
        );
    }

    #[test]
    fn test_channels_do_not_cross_contaminate() {
        // Interleave the two halves of a command across transports; neither
        // stream on its own carries a complete marker.
        let mut scanner = ChannelScanner::new(Recorder::default());
        scanner.ingest_slice(Transport::Serial, b"[ESP8");
        scanner.ingest_slice(Transport::Network, b"00]\r\n");
        scanner.ingest_slice(Transport::Serial, b"\r\n");
        // Serial buffered "[ESP8" (5 bytes, no suffix); network saw "00]".
        assert!(scanner.handler().frames.is_empty());
    }

    #[test]
    fn test_interleaved_streams_frame_independently() {
        let mut scanner = ChannelScanner::new(Recorder::default());
        let serial = b"[ESP800]\r\n";
        let network = b"[ESP115]go\r\n";
        for i in 0..serial.len().max(network.len()) {
            if let Some(&b) = serial.get(i) {
                scanner.ingest(Transport::Serial, b);
            }
            if let Some(&b) = network.get(i) {
                scanner.ingest(Transport::Network, b);
            }
        }
        let mut frames = scanner.handler().frames.clone();
        frames.sort();
        assert_eq!(
            frames,
            vec![(115, "go".to_string()), (800, String::new())]
        );
    }
}
