//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key state folded into a `TickInput` per frame)
//! - Frame timing (timestamps to millisecond deltas)
//! - The canvas-backed drawing surface (web only)

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::sim::TickInput;

/// Keyboard state between frames
///
/// Held keys persist until released; presses are one-shot and cleared when
/// the frame input is taken.
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    up: bool,
    down: bool,
    fire_held: bool,
    fire_pressed: bool,
    toggle_debug: bool,
}

impl Keyboard {
    /// Returns true when the key is one the game handles
    pub fn key_down(&mut self, key: &str) -> bool {
        match key {
            "ArrowUp" => self.up = true,
            "ArrowDown" => self.down = true,
            " " => {
                // Key repeat arrives as further keydowns while held
                if !self.fire_held {
                    self.fire_pressed = true;
                }
                self.fire_held = true;
            }
            "d" | "D" => self.toggle_debug = true,
            _ => return false,
        }
        true
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        match key {
            "ArrowUp" => self.up = false,
            "ArrowDown" => self.down = false,
            " " => self.fire_held = false,
            _ => return false,
        }
        true
    }

    /// Forget held keys (focus lost)
    pub fn release_all(&mut self) {
        self.up = false;
        self.down = false;
        self.fire_held = false;
    }

    /// Input for the next update, clearing one-shot presses
    pub fn take_input(&mut self) -> TickInput {
        let input = TickInput {
            up: self.up,
            down: self.down,
            fire_pressed: self.fire_pressed,
            fire_held: self.fire_held,
            toggle_debug: self.toggle_debug,
        };
        self.fire_pressed = false;
        self.toggle_debug = false;
        input
    }
}

/// Turns animation-frame timestamps into update deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
}

impl FrameClock {
    /// Milliseconds since the previous frame; the first frame is 0
    pub fn delta(&mut self, time: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => (time - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_time = Some(time);
        dt
    }

    /// Next frame starts a fresh delta (after a pause or tab switch)
    pub fn reset(&mut self) {
        self.last_time = None;
    }
}
