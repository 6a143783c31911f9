//! OSC wire encoding
//!
//! Minimal OSC 1.0 message builder (float and int32 arguments only) and
//! the tracker address scheme understood by SteamLink-style consumers.

pub mod address;
pub mod message;

pub use address::{tracker_base, TrackerField};
pub use message::{pad_len, write_padded, OscMessage};
