//! Pointer interaction state.
//!
//! An explicit record owned by the field. Handlers write it; the tick
//! reads it. Nothing else touches it.

use glam::DVec2;

/// Default interaction radius in pixels.
pub const DEFAULT_INTERACTION_RADIUS: f64 = 150.0;

/// Current pointer position plus the constant interaction radius.
///
/// Starts at the origin, so particles near (0, 0) feel repulsion before
/// the first pointer event arrives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    /// Last reported pointer position in viewport pixels.
    pub position: DVec2,
    /// Distance within which proximity displaces a particle.
    pub radius: f64,
}

impl Default for Pointer {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            radius: DEFAULT_INTERACTION_RADIUS,
        }
    }
}

impl Pointer {
    /// Records a new pointer position. Pure state write; no particle moves
    /// until the next tick reads it.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.position = DVec2::new(x, y);
    }
}
