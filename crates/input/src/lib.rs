//! Keyboard input state for the simulation.
//!
//! The presentation layer owns the real event source (DOM listeners, a window
//! loop, or a script in the headless demo) and forwards key transitions here.
//! The simulation reads the flags back on its next frame tick; the only
//! ordering guarantee needed is "last write before the frame wins".

use std::collections::HashSet;

/// Key transition reported by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// The keys the simulation cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    KeyW,
    KeyS,
    KeyA,
    KeyD,
    KeyB,
    KeyC,
    KeyG,
    KeyH,
    KeyM,
    KeyN,
    KeyR,
    KeyT,
    KeyU,
    Space,
    Shift,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
}

impl KeyCode {
    /// Parse a DOM-style key name. Matching is case-insensitive.
    pub fn from_key_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Some(match lower.as_str() {
            "w" => Self::KeyW,
            "s" => Self::KeyS,
            "a" => Self::KeyA,
            "d" => Self::KeyD,
            "b" => Self::KeyB,
            "c" => Self::KeyC,
            "g" => Self::KeyG,
            "h" => Self::KeyH,
            "m" => Self::KeyM,
            "n" => Self::KeyN,
            "r" => Self::KeyR,
            "t" => Self::KeyT,
            "u" => Self::KeyU,
            " " | "space" => Self::Space,
            "shift" => Self::Shift,
            "arrowup" => Self::ArrowUp,
            "arrowdown" => Self::ArrowDown,
            "arrowleft" => Self::ArrowLeft,
            "arrowright" => Self::ArrowRight,
            "pageup" => Self::PageUp,
            "pagedown" => Self::PageDown,
            _ => return None,
        })
    }
}

/// Manages keyboard state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<KeyCode>,
    /// Keys released this frame.
    keys_released: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame edge state. Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    /// Process a key transition forwarded from the presentation layer.
    /// Key repeat does not re-trigger the pressed edge.
    pub fn process_key(&mut self, key: KeyCode, state: KeyState) {
        match state {
            KeyState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            KeyState::Released => {
                self.keys_held.remove(&key);
                self.keys_released.insert(key);
            }
        }
    }

    // Query methods

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Check if a key was pressed this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key was released this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    // Held flight controls

    /// Throttle up (W held).
    pub fn throttle_up(&self) -> bool {
        self.is_key_held(KeyCode::KeyW)
    }

    /// Throttle down (S held).
    pub fn throttle_down(&self) -> bool {
        self.is_key_held(KeyCode::KeyS)
    }

    /// Yaw/bank left (A held).
    pub fn turn_left(&self) -> bool {
        self.is_key_held(KeyCode::KeyA)
    }

    /// Yaw/bank right (D held).
    pub fn turn_right(&self) -> bool {
        self.is_key_held(KeyCode::KeyD)
    }

    /// Nose up (Up arrow held).
    pub fn pitch_up(&self) -> bool {
        self.is_key_held(KeyCode::ArrowUp)
    }

    /// Nose down (Down arrow held).
    pub fn pitch_down(&self) -> bool {
        self.is_key_held(KeyCode::ArrowDown)
    }

    // Edge-triggered actions

    /// Toggle landing gear (G).
    pub fn gear_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::KeyG)
    }

    /// Cargo interaction (Space).
    pub fn interact_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::Space)
    }

    /// Mission menu (M).
    pub fn mission_menu_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::KeyM)
    }

    /// Reset aircraft (R).
    pub fn reset_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::KeyR)
    }

    /// Cycle camera view (C).
    pub fn camera_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::KeyC)
    }

    /// Toggle navigation aids (N).
    pub fn nav_toggle_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::KeyN)
    }

    /// Cycle navigation display mode (B).
    pub fn nav_mode_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::KeyB)
    }

    /// Open upgrade shop (U).
    pub fn shop_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::KeyU)
    }

    /// Toggle trail effect (T).
    pub fn trail_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::KeyT)
    }

    /// Toggle the controls help panel (H).
    pub fn help_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::KeyH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_persists_across_frames_pressed_does_not() {
        let mut input = InputState::new();
        input.process_key(KeyCode::KeyW, KeyState::Pressed);
        assert!(input.throttle_up());
        assert!(input.is_key_pressed(KeyCode::KeyW));

        input.begin_frame();
        assert!(input.throttle_up());
        assert!(!input.is_key_pressed(KeyCode::KeyW));
    }

    #[test]
    fn key_repeat_does_not_retrigger_edge() {
        let mut input = InputState::new();
        input.process_key(KeyCode::Space, KeyState::Pressed);
        input.begin_frame();
        input.process_key(KeyCode::Space, KeyState::Pressed); // OS auto-repeat
        assert!(!input.interact_pressed());
    }

    #[test]
    fn release_clears_held() {
        let mut input = InputState::new();
        input.process_key(KeyCode::KeyA, KeyState::Pressed);
        input.begin_frame();
        input.process_key(KeyCode::KeyA, KeyState::Released);
        assert!(!input.turn_left());
        assert!(input.is_key_released(KeyCode::KeyA));
    }

    #[test]
    fn key_names_parse_case_insensitively() {
        assert_eq!(KeyCode::from_key_name("W"), Some(KeyCode::KeyW));
        assert_eq!(KeyCode::from_key_name("ArrowUp"), Some(KeyCode::ArrowUp));
        assert_eq!(KeyCode::from_key_name(" "), Some(KeyCode::Space));
        assert_eq!(KeyCode::from_key_name("f13"), None);
    }
}
