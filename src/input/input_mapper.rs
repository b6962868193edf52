//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard and mouse input to high-level actions like Exit or
//! CycleProjection. Movement keys (arrows, W/S, A/D) are NOT mapped here;
//! they go directly to the CameraController.

use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;
use wire4d_input::SliderId;

/// Actions triggered by special input (not movement)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Reset camera and sliders to their starting values (R key)
    ResetCamera,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Switch to the next 4D projection rule (P key)
    CycleProjection,
    /// Move a slider by a number of steps
    NudgeSlider(SliderId, i32),
    /// Left button pressed; may start a slider drag
    PanelPress,
    /// Left button released; ends any slider drag
    PanelRelease,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for movement keys
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::ResetCamera),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::KeyP => Some(InputAction::CycleProjection),
            KeyCode::BracketLeft => Some(InputAction::NudgeSlider(SliderId::W, -1)),
            KeyCode::BracketRight => Some(InputAction::NudgeSlider(SliderId::W, 1)),
            KeyCode::Semicolon => Some(InputAction::NudgeSlider(SliderId::Theta, -1)),
            KeyCode::Quote => Some(InputAction::NudgeSlider(SliderId::Theta, 1)),
            KeyCode::PageDown => Some(InputAction::NudgeSlider(SliderId::Pitch, -1)),
            KeyCode::PageUp => Some(InputAction::NudgeSlider(SliderId::Pitch, 1)),
            KeyCode::Minus => Some(InputAction::NudgeSlider(SliderId::Fov, -1)),
            KeyCode::Equal => Some(InputAction::NudgeSlider(SliderId::Fov, 1)),
            _ => None, // Movement keys handled by controller
        }
    }

    /// Map mouse button to an action
    pub fn map_mouse_button(button: MouseButton, state: ElementState) -> Option<InputAction> {
        match (button, state) {
            (MouseButton::Left, ElementState::Pressed) => Some(InputAction::PanelPress),
            (MouseButton::Left, ElementState::Released) => Some(InputAction::PanelRelease),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_movement_keys_not_mapped() {
        for key in [
            KeyCode::KeyW,
            KeyCode::KeyA,
            KeyCode::KeyS,
            KeyCode::KeyD,
            KeyCode::ArrowUp,
            KeyCode::ArrowLeft,
        ] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released);
        assert_eq!(action, None);
    }

    #[test]
    fn test_slider_nudges() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::BracketRight, ElementState::Pressed),
            Some(InputAction::NudgeSlider(SliderId::W, 1))
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::PageDown, ElementState::Pressed),
            Some(InputAction::NudgeSlider(SliderId::Pitch, -1))
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Minus, ElementState::Pressed),
            Some(InputAction::NudgeSlider(SliderId::Fov, -1))
        );
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyR, ElementState::Pressed),
            Some(InputAction::ResetCamera)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Pressed),
            Some(InputAction::ToggleFullscreen)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyP, ElementState::Pressed),
            Some(InputAction::CycleProjection)
        );
    }

    #[test]
    fn test_left_button_drives_panel() {
        assert_eq!(
            InputMapper::map_mouse_button(MouseButton::Left, ElementState::Pressed),
            Some(InputAction::PanelPress)
        );
        assert_eq!(
            InputMapper::map_mouse_button(MouseButton::Left, ElementState::Released),
            Some(InputAction::PanelRelease)
        );
        assert_eq!(
            InputMapper::map_mouse_button(MouseButton::Right, ElementState::Pressed),
            None
        );
    }
}
