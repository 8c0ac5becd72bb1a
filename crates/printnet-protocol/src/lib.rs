//! printnet Command-Line Protocol
//!
//! This crate reconstructs discrete command lines from the byte streams the
//! controller receives on its serial and network links, and dispatches the
//! bracketed command tokens embedded in them.
//!
//! # Protocol Overview
//!
//! Printer traffic is line-based ASCII text, terminated with `\r` or `\n`,
//! with binary data (firmware blobs, bed mesh dumps) freely interleaved.
//! Controller commands are embedded in ordinary lines using a bracketed
//! marker:
//!
//! ```text
//! [ESP<id>]<optional free-text parameters>
//! ```
//!
//! where `<id>` is a non-zero decimal command number, e.g. `[ESP800]` or
//! `[ESP115]V1.0`. Anything that does not carry a well-formed marker is
//! passed over silently; a run of printable bytes interrupted by binary
//! noise is discarded rather than misframed.
//!
//! # Pieces
//!
//! - [`LineFramer`] — per-channel byte-at-a-time accumulator. Feeds each
//!   completed line through the frame parser and yields [`CommandFrame`]s.
//! - [`parse_command`] — locates the `[ESP` marker in a line and splits it
//!   into command id and parameter text.
//! - [`CommandHandler`] / [`ControllerDispatcher`] — the dispatch seam. The
//!   embedding firmware supplies a handler; a thin default implementation
//!   covers the controller's own status commands.
//! - [`ChannelScanner`] — owns one framer per transport and routes every
//!   recognized frame to the shared handler.

mod channel;
mod codec;
mod dispatch;
mod frame;

pub use channel::*;
pub use codec::*;
pub use dispatch::*;
pub use frame::*;
