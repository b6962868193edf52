//! Held-key state for the movement keys

use bitflags::bitflags;
use winit::keyboard::KeyCode;

bitflags! {
    /// Movement keys currently held down
    ///
    /// Arrow keys translate in the horizontal plane relative to yaw,
    /// `W`/`S` move vertically, `A`/`D` yaw the camera.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct HeldKeys: u8 {
        const STRAFE_LEFT  = 1 << 0;
        const STRAFE_RIGHT = 1 << 1;
        const FORWARD      = 1 << 2;
        const BACKWARD     = 1 << 3;
        const RISE         = 1 << 4;
        const SINK         = 1 << 5;
        const YAW_LEFT     = 1 << 6;
        const YAW_RIGHT    = 1 << 7;
    }
}

impl HeldKeys {
    /// Map a physical key to its movement flag, if it has one
    pub fn from_key_code(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::ArrowLeft => Some(Self::STRAFE_LEFT),
            KeyCode::ArrowRight => Some(Self::STRAFE_RIGHT),
            KeyCode::ArrowUp => Some(Self::FORWARD),
            KeyCode::ArrowDown => Some(Self::BACKWARD),
            KeyCode::KeyW => Some(Self::RISE),
            KeyCode::KeyS => Some(Self::SINK),
            KeyCode::KeyA => Some(Self::YAW_LEFT),
            KeyCode::KeyD => Some(Self::YAW_RIGHT),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_mapped() {
        assert_eq!(HeldKeys::from_key_code(KeyCode::ArrowLeft), Some(HeldKeys::STRAFE_LEFT));
        assert_eq!(HeldKeys::from_key_code(KeyCode::KeyW), Some(HeldKeys::RISE));
        assert_eq!(HeldKeys::from_key_code(KeyCode::KeyD), Some(HeldKeys::YAW_RIGHT));
    }

    #[test]
    fn test_other_keys_unmapped() {
        for key in [KeyCode::KeyQ, KeyCode::Escape, KeyCode::Space, KeyCode::KeyR] {
            assert_eq!(HeldKeys::from_key_code(key), None, "{:?} should not be a movement key", key);
        }
    }

    #[test]
    fn test_flags_are_distinct() {
        assert_eq!(HeldKeys::all().bits().count_ones(), 8);
    }
}
