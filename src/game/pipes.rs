//! Pipe arena
//!
//! The obstacle field is a fixed-size array of pipes created once per run
//! and recycled in place: a pipe that scrolls fully past the left edge is
//! repositioned one spacing interval beyond the current rightmost pipe and
//! gets a fresh gap. The field scrolls forever with fixed memory and no
//! allocation after startup.

use macroquad::math::Rect;
use rand::Rng;

use super::{
    pipe_space, PIPE_COUNT, PIPE_SPACING, PIPE_SPEED, PIPE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// A paired top/bottom barrier with a fixed-height gap between the two.
///
/// Both rects share the same x and width at all times; they move and reset
/// together. `top.h + gap + bottom.h` always spans the full screen height.
#[derive(Debug, Clone, Copy)]
pub struct Pipe {
    pub top: Rect,
    pub bottom: Rect,
}

impl Pipe {
    fn new(x: f32, top_height: f32) -> Self {
        let space = pipe_space();
        Self {
            top: Rect::new(x, 0.0, PIPE_WIDTH, top_height),
            bottom: Rect::new(
                x,
                top_height + space,
                PIPE_WIDTH,
                SCREEN_HEIGHT - space - top_height,
            ),
        }
    }

    /// Horizontal position of the pipe's leading (left) edge.
    pub fn x(&self) -> f32 {
        self.top.x
    }

    fn set_x(&mut self, x: f32) {
        self.top.x = x;
        self.bottom.x = x;
    }

    /// Move the gap: resize the top rect and rebuild the bottom rect so the
    /// pair still spans the screen.
    fn set_gap(&mut self, top_height: f32) {
        let space = pipe_space();
        self.top.h = top_height;
        self.bottom.y = top_height + space;
        self.bottom.h = SCREEN_HEIGHT - space - top_height;
    }
}

/// The fixed-size field of recycled pipes.
pub struct PipeField {
    pipes: [Pipe; PIPE_COUNT],
}

impl PipeField {
    /// Build a freshly randomized field: pipes evenly spaced off the right
    /// edge of the screen, in slot order.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            pipes: std::array::from_fn(|i| Pipe::new(slot_start_x(i), random_top_height(rng))),
        }
    }

    /// Re-randomize every slot back to the initial spaced layout.
    pub fn regenerate(&mut self, rng: &mut impl Rng) {
        for (i, pipe) in self.pipes.iter_mut().enumerate() {
            pipe.set_x(slot_start_x(i));
            pipe.set_gap(random_top_height(rng));
        }
    }

    /// Scroll every pipe left by one tick's worth of movement.
    pub fn advance(&mut self) {
        for pipe in &mut self.pipes {
            let x = pipe.x() - PIPE_SPEED;
            pipe.set_x(x);
        }
    }

    /// Reposition any pipe that has fully left the screen to one spacing
    /// interval past the current rightmost pipe, with a fresh gap. The
    /// rightmost scan runs per recycled pipe so spacing stays uniform no
    /// matter how many slots recycle in one frame.
    pub fn recycle(&mut self, rng: &mut impl Rng) {
        for i in 0..PIPE_COUNT {
            if self.pipes[i].x() < -PIPE_WIDTH {
                let next_x = self.farthest_x() + PIPE_WIDTH * PIPE_SPACING;
                self.pipes[i].set_x(next_x);
                self.pipes[i].set_gap(random_top_height(rng));
            }
        }
    }

    fn farthest_x(&self) -> f32 {
        self.pipes.iter().map(Pipe::x).fold(0.0, f32::max)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.pipes.iter()
    }
}

fn slot_start_x(slot: usize) -> f32 {
    SCREEN_WIDTH + slot as f32 * PIPE_WIDTH * PIPE_SPACING
}

/// Gap offset: integer-valued, anywhere from flush with the top of the
/// screen to one full gap height down.
fn random_top_height(rng: &mut impl Rng) -> f32 {
    rng.gen_range(0..=pipe_space() as i32) as f32
}
