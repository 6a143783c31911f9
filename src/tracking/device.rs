//! Tracked device identifiers and their OSC topic names

use std::borrow::Cow;

/// Devices the headset can report a pose for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DeviceId {
    Head = 0,
    LeftAim = 1,
    LeftGrip = 2,
    LeftPalm = 3,
    LeftPinch = 4,
    LeftPoke = 5,
    RightAim = 6,
    RightGrip = 7,
    RightPalm = 8,
    RightPinch = 9,
    RightPoke = 10,
    EyeGaze = 11,
}

impl DeviceId {
    pub const ALL: [DeviceId; 12] = [
        DeviceId::Head,
        DeviceId::LeftAim,
        DeviceId::LeftGrip,
        DeviceId::LeftPalm,
        DeviceId::LeftPinch,
        DeviceId::LeftPoke,
        DeviceId::RightAim,
        DeviceId::RightGrip,
        DeviceId::RightPalm,
        DeviceId::RightPinch,
        DeviceId::RightPoke,
        DeviceId::EyeGaze,
    ];

    /// Numeric identifier as sent by the headset
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// SteamLink tracker name for this device.
    ///
    /// Grip, aim and palm of a hand all publish under the same controller
    /// name. Devices without a SteamLink counterpart get `device_<id>`.
    pub fn topic_name(self) -> Cow<'static, str> {
        match self {
            DeviceId::Head => Cow::Borrowed("head"),
            DeviceId::LeftGrip | DeviceId::LeftAim | DeviceId::LeftPalm => {
                Cow::Borrowed("left_controller")
            }
            DeviceId::RightGrip | DeviceId::RightAim | DeviceId::RightPalm => {
                Cow::Borrowed("right_controller")
            }
            DeviceId::EyeGaze => Cow::Borrowed("eye_gaze"),
            DeviceId::LeftPinch
            | DeviceId::LeftPoke
            | DeviceId::RightPinch
            | DeviceId::RightPoke => Cow::Owned(format!("device_{}", self.as_raw())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_names() {
        assert_eq!(DeviceId::Head.topic_name(), "head");
        assert_eq!(DeviceId::LeftAim.topic_name(), "left_controller");
        assert_eq!(DeviceId::LeftPalm.topic_name(), "left_controller");
        assert_eq!(DeviceId::RightGrip.topic_name(), "right_controller");
        assert_eq!(DeviceId::EyeGaze.topic_name(), "eye_gaze");
    }

    #[test]
    fn test_unmapped_devices_fall_back_to_id() {
        assert_eq!(DeviceId::LeftPinch.topic_name(), "device_4");
        assert_eq!(DeviceId::RightPoke.topic_name(), "device_10");
    }

    #[test]
    fn test_every_device_has_a_name() {
        for device in DeviceId::ALL {
            assert!(!device.topic_name().is_empty());
        }
    }
}
