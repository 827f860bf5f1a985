//! Shared entity plumbing: frame context, audio cues, mark-then-sweep removal

/// Read-only view of the world handed to entity updates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    pub width: f32,
    pub height: f32,
    /// Global scroll speed (pixels per tick)
    pub speed: f32,
}

/// Fire-and-forget audio cues emitted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Shot,
    Hit,
    Explosion,
    PowerUp,
    PowerDown,
    Shield,
}

impl Cue {
    pub const ALL: [Cue; 6] = [
        Cue::Shot,
        Cue::Hit,
        Cue::Explosion,
        Cue::PowerUp,
        Cue::PowerDown,
        Cue::Shield,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Shot => "shot",
            Cue::Hit => "hit",
            Cue::Explosion => "explosion",
            Cue::PowerUp => "powerUp",
            Cue::PowerDown => "powerDown",
            Cue::Shield => "shield",
        }
    }
}

/// Entities removed by flag at the end of a pass
pub trait Expiring {
    fn is_marked(&self) -> bool;
}

/// Drop every marked entity, keeping order. Returns how many were removed.
///
/// Sweeping an already-swept collection removes nothing.
pub fn sweep<T: Expiring>(items: &mut Vec<T>) -> usize {
    let before = items.len();
    items.retain(|item| !item.is_marked());
    before - items.len()
}
