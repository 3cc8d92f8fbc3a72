//! Game core
//!
//! Everything that advances a run lives here: the pipe arena and its
//! recycling, the player's jump physics, collision/scoring sweeps, and
//! the session that strings them together once per frame. Nothing in
//! this module draws or polls input; the frame loop hands a resolved
//! `FrameInput` in and the renderer reads the session back out.

pub mod collision;
pub mod pipes;
pub mod player;
pub mod session;

pub use pipes::{Pipe, PipeField};
pub use player::Player;
pub use session::{FrameInput, GameSession};

/// Fixed playfield size, also the window size.
pub const SCREEN_WIDTH: f32 = 1366.0;
pub const SCREEN_HEIGHT: f32 = 768.0;

/// Downward speed while falling, pixels per tick.
pub const GRAVITY: f32 = 4.0;

/// Upward speed while rising, pixels per tick.
pub const JUMP_HEIGHT: f32 = 5.0;

/// A jump rises for exactly this many ticks before gravity takes over.
pub const MAX_JUMP_TICKS: u32 = 20;

/// The player never scrolls; only its y changes.
pub const PLAYER_X: f32 = 80.0;
pub const PLAYER_SIZE: f32 = 50.0;

pub const PIPE_WIDTH: f32 = 70.0;
pub const PIPE_COUNT: usize = 7;

/// Horizontal scroll speed, pixels per tick. Doubles as the width of the
/// scoring window so each pipe scores exactly once per pass.
pub const PIPE_SPEED: f32 = 4.0;

/// Center-to-center spacing between pipes, in pipe widths.
pub const PIPE_SPACING: f32 = 4.0;

/// Vertical size of the gap the player flies through.
pub fn pipe_space() -> f32 {
    (SCREEN_HEIGHT / 3.0).floor()
}
