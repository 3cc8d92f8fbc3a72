//! Input handling with gamepad support
//!
//! An action-based layer over macroquad keyboard polling and the gamepad
//! backend. Game code asks for actions, never for keys or button indices;
//! the device-specific mapping lives in the controller profile.

mod actions;
mod controller;
mod gamepad;
mod state;

pub use actions::Action;
pub use controller::ControllerProfile;
pub use gamepad::{button, Gamepad};
pub use state::InputState;
