//! Tracking snapshot consumed by the OSC output
//!
//! These types mirror what the headset reports each frame. The output only
//! reads them; ownership stays with the caller.

pub mod device;

pub use device::DeviceId;

use std::ops::{BitOr, BitOrAssign};

/// 3D vector in metres or metres per second
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Orientation quaternion, scalar last
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    pub const IDENTITY: Quat = Quat { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Position and orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

/// Which fields of a [`DevicePose`] carry data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PoseFlags(u8);

impl PoseFlags {
    pub const ORIENTATION_VALID: PoseFlags = PoseFlags(1 << 0);
    pub const POSITION_VALID: PoseFlags = PoseFlags(1 << 1);
    pub const LINEAR_VELOCITY_VALID: PoseFlags = PoseFlags(1 << 2);
    pub const ANGULAR_VELOCITY_VALID: PoseFlags = PoseFlags(1 << 3);
    /// Reported by the runtime but not published
    pub const ORIENTATION_TRACKED: PoseFlags = PoseFlags(1 << 4);
    /// Reported by the runtime but not published
    pub const POSITION_TRACKED: PoseFlags = PoseFlags(1 << 5);

    pub const fn empty() -> Self {
        PoseFlags(0)
    }

    /// All four validity bits
    pub const fn all_valid() -> Self {
        PoseFlags(
            Self::ORIENTATION_VALID.0
                | Self::POSITION_VALID.0
                | Self::LINEAR_VELOCITY_VALID.0
                | Self::ANGULAR_VELOCITY_VALID.0,
        )
    }

    pub const fn from_bits(bits: u8) -> Self {
        PoseFlags(bits)
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// True if every bit of `other` is set
    pub const fn contains(&self, other: PoseFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: PoseFlags) {
        self.0 |= other.0;
    }
}

impl BitOr for PoseFlags {
    type Output = PoseFlags;

    fn bitor(self, rhs: PoseFlags) -> PoseFlags {
        PoseFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for PoseFlags {
    fn bitor_assign(&mut self, rhs: PoseFlags) {
        self.insert(rhs);
    }
}

/// Spatial state of one tracked device
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DevicePose {
    pub device: DeviceId,
    pub flags: PoseFlags,
    pub pose: Pose,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
}

impl DevicePose {
    /// A pose with no valid fields
    pub fn new(device: DeviceId) -> Self {
        Self {
            device,
            flags: PoseFlags::empty(),
            pose: Pose::default(),
            linear_velocity: Vec3::default(),
            angular_velocity: Vec3::default(),
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.pose.position = position;
        self.flags |= PoseFlags::POSITION_VALID;
        self
    }

    pub fn with_orientation(mut self, orientation: Quat) -> Self {
        self.pose.orientation = orientation;
        self.flags |= PoseFlags::ORIENTATION_VALID;
        self
    }

    pub fn with_linear_velocity(mut self, velocity: Vec3) -> Self {
        self.linear_velocity = velocity;
        self.flags |= PoseFlags::LINEAR_VELOCITY_VALID;
        self
    }

    pub fn with_angular_velocity(mut self, velocity: Vec3) -> Self {
        self.angular_velocity = velocity;
        self.flags |= PoseFlags::ANGULAR_VELOCITY_VALID;
        self
    }
}

/// One frame of tracking data
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tracking {
    /// Headset clock, nanoseconds
    pub production_timestamp: i64,
    pub device_poses: Vec<DevicePose>,
}

impl Tracking {
    pub fn new(device_poses: Vec<DevicePose>) -> Self {
        Self {
            production_timestamp: 0,
            device_poses,
        }
    }
}

/// Headset-to-server clock offset.
///
/// Accepted by [`OscOutput::send_tracking`](crate::OscOutput::send_tracking)
/// but not used until timestamped bundles are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockOffset {
    pub offset_ns: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        let mut flags = PoseFlags::POSITION_VALID | PoseFlags::ORIENTATION_TRACKED;
        assert!(flags.contains(PoseFlags::POSITION_VALID));
        assert!(!flags.contains(PoseFlags::ORIENTATION_VALID));

        flags |= PoseFlags::ORIENTATION_VALID;
        assert!(flags.contains(PoseFlags::ORIENTATION_VALID | PoseFlags::POSITION_VALID));
        assert_eq!(flags.bits(), 0b0001_0011);
        assert!(PoseFlags::all_valid().contains(PoseFlags::ANGULAR_VELOCITY_VALID));
        assert!(!PoseFlags::all_valid().contains(PoseFlags::POSITION_TRACKED));
    }

    #[test]
    fn test_builder_sets_flags() {
        let pose = DevicePose::new(DeviceId::Head)
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_angular_velocity(Vec3::new(0.0, 1.0, 0.0));

        assert!(pose.flags.contains(PoseFlags::POSITION_VALID));
        assert!(pose.flags.contains(PoseFlags::ANGULAR_VELOCITY_VALID));
        assert!(!pose.flags.contains(PoseFlags::ORIENTATION_VALID));
        assert_eq!(pose.pose.orientation, Quat::IDENTITY);
    }
}
