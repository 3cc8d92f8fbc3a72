//! Input state management
//!
//! Polls keyboard (macroquad) and gamepad once per frame and answers
//! action queries against whichever device fired. The gamepad's button
//! bindings come from the controller profile resolved at attach time.

use macroquad::prelude::{is_key_pressed, KeyCode};

use super::controller::ControllerProfile;
use super::gamepad::Gamepad;
use super::Action;

/// Unified input state for keyboard and gamepad.
pub struct InputState {
    gamepad: Gamepad,
    profile: ControllerProfile,
    pad_name: Option<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
            profile: ControllerProfile::default(),
            pad_name: None,
        }
    }

    /// Call once per frame before checking actions.
    pub fn poll(&mut self) {
        self.gamepad.poll();

        // Re-resolve the profile when the connected pad changes.
        let name = self.gamepad.name();
        if name != self.pad_name {
            match &name {
                Some(n) => {
                    self.profile = ControllerProfile::from_name(n);
                    log::info!("gamepad attached: {n:?}, profile {:?}", self.profile);
                }
                None => log::info!("gamepad detached"),
            }
            self.pad_name = name;
        }
    }

    /// Did this action's edge fire this frame on any device?
    pub fn action_pressed(&self, action: Action) -> bool {
        match action {
            Action::Flap => {
                is_key_pressed(KeyCode::Space)
                    || self.gamepad.is_button_pressed(self.profile.flap_button)
            }
            Action::Restart => {
                is_key_pressed(KeyCode::R)
                    || self.gamepad.is_button_pressed(self.profile.confirm_button)
            }
        }
    }

    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }

    /// Confirm-button label for the end-screen prompt, when a pad is
    /// attached.
    pub fn gamepad_confirm_label(&self) -> Option<&'static str> {
        self.has_gamepad().then(|| self.profile.confirm_label())
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
