//! Tracker address scheme
//!
//! `/tracking/trackers/<name>/{position,rotation,velocity,angularvelocity}`

use crate::constants::TRACKER_ADDRESS_PREFIX;

/// One publishable field of a device pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackerField {
    /// x, y, z
    Position,
    /// Quaternion x, y, z, w
    Rotation,
    /// Linear velocity x, y, z
    Velocity,
    /// Angular velocity x, y, z
    AngularVelocity,
}

impl TrackerField {
    /// Emission order within one device pose
    pub const ALL: [TrackerField; 4] = [
        TrackerField::Position,
        TrackerField::Rotation,
        TrackerField::Velocity,
        TrackerField::AngularVelocity,
    ];

    /// Last address segment
    pub fn suffix(&self) -> &'static str {
        match self {
            TrackerField::Position => "position",
            TrackerField::Rotation => "rotation",
            TrackerField::Velocity => "velocity",
            TrackerField::AngularVelocity => "angularvelocity",
        }
    }

    /// Number of float arguments carried
    pub fn arity(&self) -> usize {
        match self {
            TrackerField::Rotation => 4,
            _ => 3,
        }
    }

    /// Full address below a base from [`tracker_base`]
    pub fn address(&self, base: &str) -> String {
        let suffix = self.suffix();
        let mut address = String::with_capacity(base.len() + 1 + suffix.len());
        address.push_str(base);
        address.push('/');
        address.push_str(suffix);
        address
    }
}

/// `/tracking/trackers/<topic>`
pub fn tracker_base(topic: &str) -> String {
    let mut base = String::with_capacity(TRACKER_ADDRESS_PREFIX.len() + topic.len());
    base.push_str(TRACKER_ADDRESS_PREFIX);
    base.push_str(topic);
    base
}
