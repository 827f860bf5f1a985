//! Heads-up display: score, ammo, timer and the game-over banner

use super::{Color, Surface, TextAlign, TextStyle};
use crate::sim::{Outcome, Rect, World};

const MARGIN: f32 = 20.0;
const SCORE_Y: f32 = 40.0;
const AMMO_Y: f32 = 50.0;
const AMMO_BAR: (f32, f32) = (3.0, 20.0);
const AMMO_SPACING: f32 = 5.0;
const TIMER_Y: f32 = 100.0;
const FONT_SIZE: f32 = 25.0;
const BANNER_SIZE: f32 = 70.0;

/// Banner lines for a finished session
pub fn banner(outcome: Outcome) -> (&'static str, &'static str) {
    match outcome {
        Outcome::Won => ("Most Wondrous!", "Well done explorer!"),
        Outcome::Lost => ("Blazes!", "Get my repair kit and try again!"),
    }
}

pub fn draw<S: Surface + ?Sized>(world: &World, surface: &mut S) {
    let text = TextStyle::new(FONT_SIZE, TextAlign::Left);
    surface.draw_text(&format!("Score: {}", world.score), MARGIN, SCORE_Y, &text);

    let bar_color = if world.player.power_up {
        Color::POWERED
    } else {
        Color::WHITE
    };
    for i in 0..world.ammo.rounds() {
        let x = MARGIN + AMMO_SPACING * i as f32;
        surface.fill_rect(Rect::new(x, AMMO_Y, AMMO_BAR.0, AMMO_BAR.1), bar_color);
    }

    let seconds = world.game_time * 0.001;
    surface.draw_text(&format!("Timer: {seconds:.1}"), MARGIN, TIMER_Y, &text);

    if let Some(outcome) = world.outcome() {
        let (headline, subline) = banner(outcome);
        let cx = world.width * 0.5;
        let cy = world.height * 0.5;
        surface.draw_text(
            headline,
            cx,
            cy - 20.0,
            &TextStyle::new(BANNER_SIZE, TextAlign::Center),
        );
        surface.draw_text(
            subline,
            cx,
            cy + 20.0,
            &TextStyle::new(FONT_SIZE, TextAlign::Center),
        );
    }
}
