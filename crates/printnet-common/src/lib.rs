//! Shared collaborator traits for the printnet controller.
//!
//! The command scanner and the time service both talk to the surrounding
//! firmware through a small set of traits defined here: an output sink for
//! response lines, a read-only settings store, link-state queries, and the
//! platform time source. Keeping them in one crate lets the protocol and
//! time crates stay independent of each other and of any concrete platform.

mod link;
mod output;
mod settings;
mod time_source;

pub use link::*;
pub use output::*;
pub use settings::*;
pub use time_source::*;
