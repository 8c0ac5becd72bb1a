//! Command dispatch seam.

use printnet_common::OutputSink;

/// Receives every recognized command frame.
///
/// Implementations map command ids to actions. The contract is deliberately
/// loose: handlers must not block, and unknown ids must be quiet no-ops so
/// that newer hosts can talk to older firmware without breaking the stream.
pub trait CommandHandler {
    /// Handle one command.
    fn handle(&mut self, id: i32, params: &str);
}

/// Firmware name reported by the status commands.
pub const FIRMWARE_NAME: &str = "printnet";

/// Firmware version reported by the status commands.
pub const FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The controller's own thin command switch.
///
/// Covers the ids the network controller answers by itself and ignores the
/// rest. Responses go to the [`OutputSink`] collaborator; the wall-clock
/// report is provided by an optional closure so this crate needs no
/// dependency on the time service.
pub struct ControllerDispatcher<S: OutputSink> {
    sink: S,
    clock: Option<Box<dyn FnMut() -> String>>,
}

impl<S: OutputSink> ControllerDispatcher<S> {
    /// Create a dispatcher writing responses to `sink`.
    pub fn new(sink: S) -> Self {
        ControllerDispatcher { sink, clock: None }
    }

    /// Attach a wall-clock provider for the time-report command.
    pub fn with_clock(mut self, clock: impl FnMut() -> String + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Access the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the underlying sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

impl<S: OutputSink> CommandHandler for ControllerDispatcher<S> {
    fn handle(&mut self, id: i32, params: &str) {
        match id {
            // Status / acknowledge.
            800 => {
                self.sink
                    .send_line(&format!("{} v{}", FIRMWARE_NAME, FIRMWARE_VERSION));
            }
            // Firmware version report.
            115 => {
                self.sink.send_line(&format!("version {}", FIRMWARE_VERSION));
            }
            // Wall clock: empty or "srv" params ask for a report; anything
            // else is a time-set request, which belongs to the embedding
            // layer's handler.
            140 => {
                if params.is_empty() || params == "srv" {
                    if let Some(clock) = &mut self.clock {
                        let now = clock();
                        self.sink.send_line(&now);
                    } else {
                        log::debug!("ESP140 received but no clock provider attached");
                    }
                } else {
                    log::debug!("ESP140 time-set request {:?} left to the embedder", params);
                }
            }
            _ => {
                log::debug!("ignoring unknown command id {} (params {:?})", id, params);
            }
        }
    }
}
