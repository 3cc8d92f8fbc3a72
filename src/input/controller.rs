//! Known-controller profiles
//!
//! Maps a gamepad's reported name to the button indices used for the two
//! game actions. One cheap pad reports a nonstandard layout and is matched
//! by its exact name string; everything else gets the standard mapping.

use super::gamepad::button;

/// Name reported by the Twin USB adapter, trailing spaces included.
const TWIN_USB_GAMEPAD: &str = "Twin USB Gamepad      ";

/// Button bindings for one controller model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerProfile {
    pub flap_button: u32,
    pub confirm_button: u32,
}

impl ControllerProfile {
    /// Resolve the profile for a device from its reported name.
    pub fn from_name(name: &str) -> Self {
        if name == TWIN_USB_GAMEPAD {
            // This adapter reports its face buttons on the bumper/select
            // indices of the standard layout.
            Self {
                flap_button: button::RB,
                confirm_button: button::SELECT,
            }
        } else {
            Self::default()
        }
    }

    /// Display name of the confirm binding, for the end-screen prompt.
    pub fn confirm_label(&self) -> &'static str {
        match self.confirm_button {
            button::SELECT => "Select",
            button::START => "Start",
            _ => "the confirm button",
        }
    }
}

impl Default for ControllerProfile {
    /// Standard mapping: south face button flaps, Start confirms.
    fn default() -> Self {
        Self {
            flap_button: button::A,
            confirm_button: button::START,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twin_usb_profile_requires_exact_name() {
        let profile = ControllerProfile::from_name("Twin USB Gamepad      ");
        assert_eq!(profile.flap_button, 5);
        assert_eq!(profile.confirm_button, 8);

        // Same model without the padded name gets the fallback.
        let trimmed = ControllerProfile::from_name("Twin USB Gamepad");
        assert_eq!(trimmed, ControllerProfile::default());
    }

    #[test]
    fn test_unknown_pads_get_standard_mapping() {
        let profile = ControllerProfile::from_name("Xbox Wireless Controller");
        assert_eq!(profile.flap_button, button::A);
        assert_eq!(profile.confirm_button, button::START);
        assert_eq!(profile.confirm_label(), "Start");
    }
}
