//! User-facing messages.
//!
//! All text the command line prints comes from the [`Message`] enum and its
//! `Display` implementation, and is emitted through the `msg_*!` macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
