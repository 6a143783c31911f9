//! Tracking to OSC dispatch
//!
//! [`OscOutput`] is the public entry point: it owns the transport and turns
//! each tracking snapshot into independent per-field OSC messages.

use bytes::Bytes;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::trace;

use crate::codec::{tracker_base, OscMessage, TrackerField};
use crate::config::OscConfig;
use crate::network::{MessageSink, OscTransport, TransportStats};
use crate::tracking::{ClockOffset, DevicePose, PoseFlags, Tracking};

/// Validity bit gating each field
fn field_flag(field: TrackerField) -> PoseFlags {
    match field {
        TrackerField::Position => PoseFlags::POSITION_VALID,
        TrackerField::Rotation => PoseFlags::ORIENTATION_VALID,
        TrackerField::Velocity => PoseFlags::LINEAR_VELOCITY_VALID,
        TrackerField::AngularVelocity => PoseFlags::ANGULAR_VELOCITY_VALID,
    }
}

/// Encode one field of `pose` under `base`
pub fn encode_field(base: &str, field: TrackerField, pose: &DevicePose) -> Bytes {
    let mut msg = OscMessage::new(&field.address(base));
    match field {
        TrackerField::Position => msg.add_vec3(pose.pose.position),
        TrackerField::Rotation => msg.add_quat(pose.pose.orientation),
        TrackerField::Velocity => msg.add_vec3(pose.linear_velocity),
        TrackerField::AngularVelocity => msg.add_vec3(pose.angular_velocity),
    }
    debug_assert_eq!(msg.arg_count(), field.arity());
    msg.finish()
}

/// Send every valid field of every pose in `tracking` to `sink`.
///
/// Poses are visited in snapshot order and fields in
/// position, rotation, velocity, angularvelocity order. Nothing is encoded
/// when the sink doesn't accept messages. Returns the number of messages
/// handed to the sink.
pub fn dispatch<S: MessageSink + ?Sized>(tracking: &Tracking, sink: &mut S) -> usize {
    if !sink.accepts_messages() {
        return 0;
    }

    let mut count = 0;
    for pose in &tracking.device_poses {
        let base = tracker_base(&pose.device.topic_name());

        for field in TrackerField::ALL {
            if pose.flags.contains(field_flag(field)) {
                sink.send(encode_field(&base, field, pose));
                count += 1;
            }
        }
    }

    trace!(
        "Dispatched {} OSC messages for {} poses",
        count,
        tracking.device_poses.len()
    );
    count
}

/// OSC output for tracking data in SteamLink format
pub struct OscOutput {
    transport: OscTransport,
}

impl OscOutput {
    /// Create a disabled output. Call [`configure`](Self::configure) to enable it.
    pub fn new() -> Self {
        Self::with_transport(OscTransport::new())
    }

    pub fn with_transport(transport: OscTransport) -> Self {
        Self { transport }
    }

    /// Create an output configured from `config`
    pub fn from_config(config: &OscConfig) -> Self {
        let mut output = Self::new();
        output.apply_config(config);
        output
    }

    /// Enable or disable output and set the destination
    pub fn configure(&mut self, enabled: bool, host: &str, port: u16) {
        self.transport.configure(enabled, host, port);
    }

    pub fn apply_config(&mut self, config: &OscConfig) {
        self.configure(config.enabled, &config.host, config.port);
    }

    /// Publish one tracking snapshot. Never fails.
    ///
    /// `offset` is accepted for timestamped bundles and currently unused.
    pub fn send_tracking(&mut self, tracking: &Tracking, _offset: &ClockOffset) {
        if !self.transport.is_enabled() {
            return;
        }
        dispatch(tracking, &mut self.transport);
    }

    pub fn is_enabled(&self) -> bool {
        self.transport.is_enabled()
    }

    pub fn transport(&self) -> &OscTransport {
        &self.transport
    }

    pub fn stats(&self) -> TransportStats {
        self.transport.stats()
    }
}

impl Default for OscOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Output shared between the configuration and tracking threads
pub type SharedOscOutput = Arc<Mutex<OscOutput>>;

/// Create a new shared output
pub fn create_shared_output() -> SharedOscOutput {
    Arc::new(Mutex::new(OscOutput::new()))
}
