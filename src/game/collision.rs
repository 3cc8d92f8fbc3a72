//! Collision and scoring sweep
//!
//! Runs once per frame, after movement. Every check runs every frame and
//! the hit flag OR-accumulates; a single sweep can both score and end the
//! run.

use macroquad::math::Rect;

use super::pipes::PipeField;
use super::PIPE_SPEED;

/// What one frame's pipe sweep produced.
#[derive(Debug, Default, Clone, Copy)]
pub struct SweepOutcome {
    /// The player overlapped a pipe rect this frame.
    pub hit: bool,
    /// Pipes whose leading edge crossed the player this frame.
    pub scored: u32,
}

/// True while a pipe's leading edge sits in the one-frame band behind the
/// player's x. The band is exactly one tick of scroll wide, so a pipe
/// moving `PIPE_SPEED` per tick lands in it on exactly one frame.
pub fn in_scoring_window(pipe_x: f32, player_x: f32) -> bool {
    pipe_x <= player_x && pipe_x > player_x - PIPE_SPEED
}

/// Check the player against every pipe, both halves independently.
pub fn sweep_pipes(player: &Rect, pipes: &PipeField) -> SweepOutcome {
    let mut outcome = SweepOutcome::default();
    for pipe in pipes.iter() {
        if in_scoring_window(pipe.x(), player.x) {
            outcome.scored += 1;
        }
        if player.overlaps(&pipe.top) || player.overlaps(&pipe.bottom) {
            outcome.hit = true;
        }
    }
    outcome
}

/// Ground contact is terminal.
pub fn hits_ground(player: &Rect, grass: &Rect) -> bool {
    player.overlaps(grass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{PLAYER_SIZE, PLAYER_X};

    #[test]
    fn test_scoring_window_fires_once_per_pass() {
        // Drive a leading edge across the player in PIPE_SPEED steps from
        // far right to far left; exactly one step may land in the window.
        let mut x = 1366.0;
        let mut crossings = 0;
        while x > -100.0 {
            if in_scoring_window(x, PLAYER_X) {
                crossings += 1;
            }
            x -= PIPE_SPEED;
        }
        assert_eq!(crossings, 1);
    }

    #[test]
    fn test_scoring_window_bounds() {
        assert!(in_scoring_window(PLAYER_X, PLAYER_X));
        assert!(in_scoring_window(PLAYER_X - PIPE_SPEED + 1.0, PLAYER_X));
        assert!(!in_scoring_window(PLAYER_X - PIPE_SPEED, PLAYER_X));
        assert!(!in_scoring_window(PLAYER_X + 1.0, PLAYER_X));
    }

    #[test]
    fn test_bottom_pipe_collision() {
        // Player halfway down the screen against a bottom rect whose gap
        // ended 28px above it.
        let player = Rect::new(80.0, 384.0, PLAYER_SIZE, PLAYER_SIZE);
        let bottom = Rect::new(80.0, 356.0, 70.0, 412.0);
        assert!(player.overlaps(&bottom));
    }

    #[test]
    fn test_clear_gap_is_not_a_hit() {
        // Gap from 180 to 436 comfortably brackets a player at 384..434.
        let player = Rect::new(80.0, 384.0, PLAYER_SIZE, PLAYER_SIZE);
        let top = Rect::new(80.0, 0.0, 70.0, 180.0);
        let bottom = Rect::new(80.0, 436.0, 70.0, 332.0);
        assert!(!player.overlaps(&top));
        assert!(!player.overlaps(&bottom));
    }

    #[test]
    fn test_ground_contact() {
        let grass = Rect::new(0.0, 768.0 * 6.0 / 7.0, 1366.0, 768.0 / 7.0 + 10.0);
        let airborne = Rect::new(PLAYER_X, 384.0, PLAYER_SIZE, PLAYER_SIZE);
        let grounded = Rect::new(PLAYER_X, 768.0 * 6.0 / 7.0 - 10.0, PLAYER_SIZE, PLAYER_SIZE);
        assert!(!hits_ground(&airborne, &grass));
        assert!(hits_ground(&grounded, &grass));
    }
}
