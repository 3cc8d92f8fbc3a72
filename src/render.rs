//! Draw pass
//!
//! Read-only view of the session, drawn back-to-front every frame. The
//! end screen draws on top of the frozen world.

use macroquad::prelude::*;

use crate::game::{GameSession, SCREEN_WIDTH};

const SKY_COLOR: Color = BLUE;
const GRASS_COLOR: Color = GREEN;
const PIPE_COLOR: Color = DARKGREEN;
const PLAYER_COLOR: Color = YELLOW;
const SCORE_COLOR: Color = WHITE;
const END_TEXT_COLOR: Color = BLACK;

pub fn draw(session: &GameSession, gamepad_confirm: Option<&str>) {
    clear_background(SKY_COLOR);

    draw_text(&format!("{} FPS", get_fps()), 8.0, 20.0, 20.0, LIME);

    draw_rect(&session.grass, GRASS_COLOR);

    for pipe in session.pipes.iter() {
        draw_rect(&pipe.top, PIPE_COLOR);
        draw_rect(&pipe.bottom, PIPE_COLOR);
    }

    draw_rect(&session.player.rect, PLAYER_COLOR);

    draw_text(
        &session.score.to_string(),
        SCREEN_WIDTH / 2.0,
        100.0,
        32.0,
        SCORE_COLOR,
    );

    if session.game_over {
        draw_text("You lose", SCREEN_WIDTH / 2.0, 150.0, 24.0, END_TEXT_COLOR);
        let prompt = match gamepad_confirm {
            Some(label) => format!("Press R or {label} to restart"),
            None => String::from("Press R to restart"),
        };
        draw_text(&prompt, SCREEN_WIDTH / 2.0, 250.0, 32.0, END_TEXT_COLOR);
    }
}

fn draw_rect(rect: &Rect, color: Color) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
}
