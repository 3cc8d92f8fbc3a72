//! Player physics
//!
//! Vertical movement only: gravity pulls down every tick unless a jump is
//! in flight. A jump is a fixed-duration burst, not an impulse; it rises a
//! constant amount per tick for `MAX_JUMP_TICKS` ticks and then hands back
//! to gravity.

use macroquad::math::Rect;

use super::{GRAVITY, JUMP_HEIGHT, MAX_JUMP_TICKS, PLAYER_SIZE, PLAYER_X, SCREEN_HEIGHT};

/// The two-state jump machine. Entry is gated on the falling state, so a
/// press mid-rise is ignored rather than restarting the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JumpState {
    Rising { ticks: u32 },
    Falling,
}

pub struct Player {
    pub rect: Rect,
    state: JumpState,
}

impl Player {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(PLAYER_X, SCREEN_HEIGHT / 2.0, PLAYER_SIZE, PLAYER_SIZE),
            state: JumpState::Falling,
        }
    }

    /// Back to the spawn height, falling.
    pub fn reset(&mut self) {
        self.rect.y = SCREEN_HEIGHT / 2.0;
        self.state = JumpState::Falling;
    }

    /// Arm a jump from a press edge. Only takes effect while falling;
    /// further edges are swallowed until the current rise runs out.
    pub fn trigger_jump(&mut self) {
        if self.state == JumpState::Falling {
            self.state = JumpState::Rising { ticks: 0 };
        }
    }

    /// Advance one tick of vertical movement.
    pub fn step(&mut self) {
        match self.state {
            JumpState::Rising { ticks } => {
                self.rect.y -= JUMP_HEIGHT;
                let ticks = ticks + 1;
                self.state = if ticks == MAX_JUMP_TICKS {
                    JumpState::Falling
                } else {
                    JumpState::Rising { ticks }
                };
            }
            JumpState::Falling => self.rect.y += GRAVITY,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
