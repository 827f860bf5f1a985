//! Timed animation cell
//!
//! A frame index that advances once per fixed interval of accumulated time.
//! Used for sprite sheets and for effects whose lifetime is their frame
//! sequence (explosions, shield).

/// Frame counter driven by accumulated delta time
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationCell {
    /// Current frame (column in the sprite sheet)
    pub frame: u32,
    /// Last valid frame index
    pub max_frame: u32,
    /// Milliseconds per frame (0 = advance every tick)
    interval: f32,
    timer: f32,
}

impl AnimationCell {
    /// Cell advancing at `fps` frames per second
    pub fn with_fps(max_frame: u32, fps: f32) -> Self {
        Self {
            frame: 0,
            max_frame,
            interval: 1000.0 / fps,
            timer: 0.0,
        }
    }

    /// Cell advancing one frame per update call
    pub fn per_tick(max_frame: u32) -> Self {
        Self {
            frame: 0,
            max_frame,
            interval: 0.0,
            timer: 0.0,
        }
    }

    /// Accumulate `dt`; returns true when a frame step is due.
    ///
    /// Once the timer has exceeded the interval the step fires and the
    /// timer restarts from zero.
    fn step_due(&mut self, dt: f32) -> bool {
        if self.interval <= 0.0 {
            return true;
        }
        if self.timer > self.interval {
            self.timer = 0.0;
            true
        } else {
            self.timer += dt;
            false
        }
    }

    /// Advance and wrap back to frame 0 after `max_frame`
    pub fn advance_looping(&mut self, dt: f32) {
        if self.step_due(dt) {
            self.frame = if self.frame < self.max_frame {
                self.frame + 1
            } else {
                0
            };
        }
    }

    /// Advance without wrapping; stops one past `max_frame`
    pub fn advance_once(&mut self, dt: f32) {
        if self.is_finished() {
            return;
        }
        if self.step_due(dt) {
            self.frame += 1;
        }
    }

    /// True once a one-shot sequence has run past its last frame
    pub fn is_finished(&self) -> bool {
        self.frame > self.max_frame
    }

    /// Jump to the finished state without playing
    pub fn finish(&mut self) {
        self.frame = self.max_frame + 1;
        self.timer = 0.0;
    }

    pub fn restart(&mut self) {
        self.frame = 0;
        self.timer = 0.0;
    }
}
