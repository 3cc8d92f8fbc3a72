//! Gamepad backend
//!
//! Native: gilrs, with button state flattened into a bitmask over the
//! standard Web Gamepad API indices. Edge detection is a per-frame
//! snapshot comparison taken in `poll()`, so any number of
//! `is_button_pressed` queries within one frame agree with each other.
//! WASM: a stub that reports no gamepad; keyboard input still works.

// Standard gamepad button indices (Web Gamepad API standard mapping,
// Xbox-style layout).
pub mod button {
    pub const A: u32 = 0; // ActionDown / South
    pub const B: u32 = 1; // ActionRight / East
    pub const X: u32 = 2; // ActionLeft / West
    pub const Y: u32 = 3; // ActionUp / North
    pub const LB: u32 = 4; // Left Bumper
    pub const RB: u32 = 5; // Right Bumper
    pub const LT: u32 = 6; // Left Trigger (as button)
    pub const RT: u32 = 7; // Right Trigger (as button)
    pub const SELECT: u32 = 8; // Back/Select
    pub const START: u32 = 9; // Start/Options
}

// ============================================================================
// Native implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use gilrs::{Button as GilrsButton, Gilrs};

    pub struct Gamepad {
        gilrs: Option<Gilrs>,
        last: u32,
        pressed: u32,
    }

    impl Gamepad {
        /// A backend init failure degrades to keyboard-only input.
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(g) => Some(g),
                Err(e) => {
                    log::warn!("gamepad subsystem unavailable: {e}");
                    None
                }
            };
            Self {
                gilrs,
                last: 0,
                pressed: 0,
            }
        }

        /// Call once per frame before any button queries. Drains pending
        /// events and snapshots the press edges for this frame.
        pub fn poll(&mut self) {
            let Some(gilrs) = self.gilrs.as_mut() else {
                return;
            };
            while gilrs.next_event().is_some() {}
            let current = Self::button_mask(gilrs);
            self.pressed = current & !self.last;
            self.last = current;
        }

        pub fn has_gamepad(&self) -> bool {
            self.gilrs
                .as_ref()
                .is_some_and(|g| g.gamepads().next().is_some())
        }

        /// Device name of the first connected pad.
        pub fn name(&self) -> Option<String> {
            let gilrs = self.gilrs.as_ref()?;
            gilrs.gamepads().next().map(|(_, gp)| gp.name().to_string())
        }

        /// Went from up to down between the last two polls.
        pub fn is_button_pressed(&self, button: u32) -> bool {
            self.pressed & (1 << button) != 0
        }

        fn button_mask(gilrs: &Gilrs) -> u32 {
            let Some((_, gp)) = gilrs.gamepads().next() else {
                return 0;
            };
            let mut mask = 0u32;
            if gp.is_pressed(GilrsButton::South) {
                mask |= 1 << super::button::A;
            }
            if gp.is_pressed(GilrsButton::East) {
                mask |= 1 << super::button::B;
            }
            if gp.is_pressed(GilrsButton::West) {
                mask |= 1 << super::button::X;
            }
            if gp.is_pressed(GilrsButton::North) {
                mask |= 1 << super::button::Y;
            }
            if gp.is_pressed(GilrsButton::LeftTrigger) {
                mask |= 1 << super::button::LB;
            }
            if gp.is_pressed(GilrsButton::RightTrigger) {
                mask |= 1 << super::button::RB;
            }
            if gp.is_pressed(GilrsButton::LeftTrigger2) {
                mask |= 1 << super::button::LT;
            }
            if gp.is_pressed(GilrsButton::RightTrigger2) {
                mask |= 1 << super::button::RT;
            }
            if gp.is_pressed(GilrsButton::Select) {
                mask |= 1 << super::button::SELECT;
            }
            if gp.is_pressed(GilrsButton::Start) {
                mask |= 1 << super::button::START;
            }
            mask
        }
    }

    impl Default for Gamepad {
        fn default() -> Self {
            Self::new()
        }
    }
}

// ============================================================================
// WASM stub
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn name(&self) -> Option<String> {
            None
        }

        pub fn is_button_pressed(&self, _button: u32) -> bool {
            false
        }
    }

    impl Default for Gamepad {
        fn default() -> Self {
            Self::new()
        }
    }
}

pub use platform::Gamepad;
