//! # OSC Tracking Output
//!
//! Publishes VR body-tracking poses as Open Sound Control messages over UDP,
//! using the SteamLink-style `/tracking/trackers/<name>/<field>` topic scheme.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                       TRACKING SOURCE (caller)                       │
//! │          Tracking { device_poses: [DevicePose, ...] }                │
//! └──────────────────────────────────┬───────────────────────────────────┘
//!                                    │ send_tracking(&tracking, offset)
//!                                    ▼
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                      OscOutput (output::dispatch)                    │
//! │   for each pose:  DeviceId ──► topic name ──► /tracking/trackers/..  │
//! │   ┌────────────┐ ┌────────────┐ ┌────────────┐ ┌─────────────────┐   │
//! │   │ /position  │ │ /rotation  │ │ /velocity  │ │ /angularvelocity│   │
//! │   │   fff      │ │   ffff     │ │   fff      │ │      fff        │   │
//! │   └─────┬──────┘ └─────┬──────┘ └─────┬──────┘ └───────┬─────────┘   │
//! │         │ only fields whose PoseFlags bit is set                     │
//! │         ▼              ▼              ▼                ▼             │
//! │   ┌──────────────────────────────────────────────────────────────┐   │
//! │   │              OscMessage builder (codec::message)             │   │
//! │   │   [padded address][padded ",fff"][big-endian arguments]      │   │
//! │   └──────────────────────────────┬───────────────────────────────┘   │
//! └──────────────────────────────────┼───────────────────────────────────┘
//!                                    ▼
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │           OscTransport (network::transport) - one UDP socket         │
//! │        best-effort, non-blocking send_to, gated by `enabled`         │
//! └──────────────────────────────────┬───────────────────────────────────┘
//!                                    │ UDP
//!                                    ▼
//!                          OSC consumer (e.g. :9000)
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod network;
pub mod output;
pub mod tracking;

pub use error::{Error, Result};
pub use output::{OscOutput, SharedOscOutput};

/// Application-wide constants
pub mod constants {
    /// Default OSC destination host
    pub const DEFAULT_OSC_HOST: &str = "127.0.0.1";

    /// Default OSC destination port
    pub const DEFAULT_OSC_PORT: u16 = 9000;

    /// Root of every tracker address
    pub const TRACKER_ADDRESS_PREFIX: &str = "/tracking/trackers/";

    /// OSC strings and arguments are aligned to this many bytes
    pub const OSC_ALIGNMENT: usize = 4;

    /// Config file name inside the platform config directory
    pub const CONFIG_FILE_NAME: &str = "osc-output.toml";
}
