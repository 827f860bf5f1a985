//! Data-driven world balance
//!
//! Every field has a default, so a tuning file only needs the values it
//! overrides.

use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// World-level knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Initial world size (pixels)
    pub width: f32,
    pub height: f32,
    /// Session length (ms)
    pub time_limit: f32,
    /// Score that must be exceeded by the time limit to win
    pub winning_score: i64,
    /// Global scroll speed (pixels per tick)
    pub speed: f32,
    pub ammo: f32,
    pub max_ammo: f32,
    /// Ammo regeneration period (ms)
    pub ammo_interval: f32,
    /// Enemy spawn period (ms)
    pub enemy_interval: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: 1500.0,
            height: 500.0,
            time_limit: 30_000.0,
            winning_score: 80,
            speed: 1.0,
            ammo: 20.0,
            max_ammo: 50.0,
            ammo_interval: 350.0,
            enemy_interval: 2000.0,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of numbers; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |field, reason| Err(TuningError::Invalid { field, reason });

        if !(self.width > 0.0) {
            return invalid("width", "must be positive");
        }
        if !(self.height > 0.0) {
            return invalid("height", "must be positive");
        }
        if !(self.time_limit > 0.0) {
            return invalid("time_limit", "must be positive");
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return invalid("speed", "must be a non-negative number");
        }
        if !(self.max_ammo >= 0.0) {
            return invalid("max_ammo", "must be non-negative");
        }
        if !(self.ammo >= 0.0) || self.ammo > self.max_ammo {
            return invalid("ammo", "must be between 0 and max_ammo");
        }
        if !(self.ammo_interval >= 0.0) {
            return invalid("ammo_interval", "must be non-negative");
        }
        if !(self.enemy_interval >= 0.0) {
            return invalid("enemy_interval", "must be non-negative");
        }
        Ok(())
    }
}
