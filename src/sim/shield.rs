//! Damage-absorption shield flash drawn over the player

use super::animation::AnimationCell;
use super::entity::Cue;
use crate::consts::*;

/// Shield animation; idle until the first reset
#[derive(Debug, Clone)]
pub struct Shield {
    pub animation: AnimationCell,
}

impl Default for Shield {
    fn default() -> Self {
        let mut animation = AnimationCell::with_fps(SHIELD_MAX_FRAME, SHIELD_FPS);
        animation.finish();
        Self { animation }
    }
}

impl Shield {
    pub fn update(&mut self, dt: f32) {
        self.animation.advance_once(dt);
    }

    /// Restart the flash and play its cue
    pub fn reset(&mut self, cues: &mut Vec<Cue>) {
        self.animation.restart();
        cues.push(Cue::Shield);
    }

    pub fn is_active(&self) -> bool {
        !self.animation.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let shield = Shield::default();
        assert!(!shield.is_active());
    }

    #[test]
    fn test_reset_plays_and_expires() {
        let mut shield = Shield::default();
        let mut cues = Vec::new();
        shield.reset(&mut cues);
        assert_eq!(cues, vec![Cue::Shield]);
        assert!(shield.is_active());

        for _ in 0..10_000 {
            shield.update(16.0);
            if !shield.is_active() {
                break;
            }
        }
        assert!(!shield.is_active());
        assert_eq!(shield.animation.frame, SHIELD_MAX_FRAME + 1);
    }

    #[test]
    fn test_reset_mid_animation_restarts() {
        let mut shield = Shield::default();
        let mut cues = Vec::new();
        shield.reset(&mut cues);
        for _ in 0..20 {
            shield.update(40.0);
        }
        assert!(shield.animation.frame > 0);
        shield.reset(&mut cues);
        assert_eq!(shield.animation.frame, 0);
        assert_eq!(cues.len(), 2);
    }
}
