//! Ammo resource with interval-gated regeneration

/// Ammo pool shared by the world and the player.
///
/// The count is fractional because the power-up trickles a tenth of a round
/// per tick; whole rounds are what firing consumes and the HUD shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Ammo {
    count: f32,
    max: f32,
    /// Regeneration period (ms)
    interval: f32,
    timer: f32,
}

impl Ammo {
    pub fn new(count: f32, max: f32, interval: f32) -> Self {
        let max = max.max(0.0);
        Self {
            count: count.clamp(0.0, max),
            max,
            interval,
            timer: 0.0,
        }
    }

    pub fn count(&self) -> f32 {
        self.count
    }

    /// Whole rounds available
    pub fn rounds(&self) -> u32 {
        self.count.floor() as u32
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Discrete regen: once the timer has exceeded the interval, add one
    /// round (capped) and restart; otherwise accumulate.
    pub fn regenerate(&mut self, dt: f32) {
        if self.timer > self.interval {
            if self.count < self.max {
                self.count = (self.count + 1.0).min(self.max);
            }
            self.timer = 0.0;
        } else {
            self.timer += dt;
        }
    }

    /// Consume one round if available
    pub fn try_take(&mut self) -> bool {
        if self.count >= 1.0 {
            self.count -= 1.0;
            true
        } else {
            false
        }
    }

    /// Continuous top-up used while powered
    pub fn trickle(&mut self, amount: f32) {
        self.count = (self.count + amount).min(self.max);
    }

    /// Refill to max if below
    pub fn refill(&mut self) {
        if self.count < self.max {
            self.count = self.max;
        }
    }
}
