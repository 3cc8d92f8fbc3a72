//! Pipe Dash: steer a square through an endless stream of gated pipes.
//!
//! One fixed-size window, one synchronous frame loop: poll input, advance
//! the session one tick, draw. The session owns all game state; macroquad
//! owns the window, frame pacing, and drawing.

mod game;
mod input;
mod render;

use macroquad::prelude::*;

use game::{FrameInput, GameSession};
use input::{Action, InputState};

fn window_conf() -> Conf {
    Conf {
        window_title: "Pipe Dash".to_owned(),
        window_width: game::SCREEN_WIDTH as i32,
        window_height: game::SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);
        env_logger::init();
    }

    let mut input = InputState::new();
    let mut session = GameSession::new();
    log::info!("session started");

    loop {
        input.poll();
        session.update(FrameInput {
            flap: input.action_pressed(Action::Flap),
            restart: input.action_pressed(Action::Restart),
        });
        render::draw(&session, input.gamepad_confirm_label());
        next_frame().await;
    }
}
