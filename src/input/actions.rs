//! Game action definitions

/// Everything the player can ask of the game, regardless of device.
///
/// Both actions are edges: a press this frame, not a held state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Start a jump (Space, or the profile's flap button).
    Flap,
    /// Begin a new run from the end screen (R, or the profile's confirm
    /// button).
    Restart,
}
