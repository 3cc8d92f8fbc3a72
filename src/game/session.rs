//! Game session
//!
//! One endless run plus its end/restart transition. The session owns all
//! mutable state for the frame and is handed read-only to the renderer;
//! input arrives pre-resolved so the core stays free of windowing calls.

use macroquad::math::Rect;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::collision;
use super::pipes::PipeField;
use super::player::Player;
use super::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Input edges resolved for one frame by the input layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameInput {
    pub flap: bool,
    pub restart: bool,
}

pub struct GameSession {
    pub player: Player,
    pub pipes: PipeField,
    pub grass: Rect,
    pub score: u32,
    pub game_over: bool,
    rng: SmallRng,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    pub fn with_rng(mut rng: SmallRng) -> Self {
        Self {
            player: Player::new(),
            pipes: PipeField::new(&mut rng),
            grass: grass_rect(),
            score: 0,
            game_over: false,
            rng,
        }
    }

    /// Advance one frame. While the run is over, only the restart edge is
    /// acted on and the world stays frozen for the end screen.
    pub fn update(&mut self, input: FrameInput) {
        if self.game_over {
            if input.restart {
                self.restart();
            }
            return;
        }

        if collision::hits_ground(&self.player.rect, &self.grass) {
            self.game_over = true;
        }

        if input.flap {
            self.player.trigger_jump();
        }
        self.player.step();

        self.pipes.advance();
        self.pipes.recycle(&mut self.rng);

        let outcome = collision::sweep_pipes(&self.player.rect, &self.pipes);
        self.score += outcome.scored;
        if outcome.hit {
            self.game_over = true;
        }

        if self.game_over {
            log::info!("run over at score {}", self.score);
        }
    }

    /// Fresh run in place: spawn position, zero score, re-randomized pipes.
    fn restart(&mut self) {
        self.player.reset();
        self.pipes.regenerate(&mut self.rng);
        self.score = 0;
        self.game_over = false;
        log::info!("run restarted");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

fn grass_rect() -> Rect {
    Rect::new(
        0.0,
        SCREEN_HEIGHT * 6.0 / 7.0,
        SCREEN_WIDTH,
        SCREEN_HEIGHT / 7.0 + 10.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Pipe, GRAVITY, PIPE_COUNT, PIPE_SPACING, PIPE_SPEED, PIPE_WIDTH};

    fn session() -> GameSession {
        GameSession::with_rng(SmallRng::seed_from_u64(7))
    }

    #[test]
    fn test_frame_moves_world() {
        let mut s = session();
        let player_y = s.player.rect.y;
        let xs: Vec<f32> = s.pipes.iter().map(Pipe::x).collect();
        s.update(FrameInput::default());
        assert_eq!(s.player.rect.y, player_y + GRAVITY);
        for (pipe, old_x) in s.pipes.iter().zip(xs) {
            assert_eq!(pipe.x(), old_x - PIPE_SPEED);
        }
        assert!(!s.game_over);
        assert_eq!(s.score, 0);
    }

    #[test]
    fn test_falling_into_grass_ends_the_run() {
        let mut s = session();
        // No flaps: the player free-falls into the ground within the first
        // few hundred frames.
        for _ in 0..300 {
            s.update(FrameInput::default());
            if s.game_over {
                break;
            }
        }
        assert!(s.game_over);
    }

    #[test]
    fn test_game_over_freezes_world_until_restart() {
        let mut s = session();
        s.game_over = true;
        let player_y = s.player.rect.y;
        let xs: Vec<f32> = s.pipes.iter().map(Pipe::x).collect();
        s.update(FrameInput { flap: true, restart: false });
        assert!(s.game_over);
        assert_eq!(s.player.rect.y, player_y);
        for (pipe, old_x) in s.pipes.iter().zip(xs) {
            assert_eq!(pipe.x(), old_x);
        }
    }

    #[test]
    fn test_restart_resets_fully() {
        let mut s = session();
        s.score = 12;
        for _ in 0..50 {
            s.update(FrameInput::default());
        }
        s.game_over = true;

        s.update(FrameInput { flap: false, restart: true });

        assert!(!s.game_over);
        assert_eq!(s.score, 0);
        assert_eq!(s.player.rect.y, SCREEN_HEIGHT / 2.0);
        for (i, pipe) in s.pipes.iter().enumerate() {
            assert_eq!(pipe.x(), SCREEN_WIDTH + i as f32 * PIPE_WIDTH * PIPE_SPACING);
        }
    }

    #[test]
    fn test_pipes_score_as_they_cross_the_player() {
        let mut s = session();
        // Park the ground out of reach so the run survives the whole sweep;
        // the player free-falls below every pipe and nothing collides.
        s.grass.y = SCREEN_HEIGHT * 3.0;

        // Pipe i starts at SCREEN_WIDTH + i*280 and scrolls 4/frame, so its
        // leading edge lands in the (76, 80] window at frame 322 + 70*i.
        for _ in 0..321 {
            s.update(FrameInput::default());
        }
        assert_eq!(s.score, 0);
        s.update(FrameInput::default());
        assert_eq!(s.score, 1);

        // The remaining six initial pipes cross at 70-frame intervals;
        // stop before the first recycled pipe comes back around at 812.
        for _ in 0..((PIPE_COUNT - 1) * 70) {
            s.update(FrameInput::default());
        }
        assert!(!s.game_over);
        assert_eq!(s.score, PIPE_COUNT as u32);
    }
}
