//! The particle data model and its seeded spawn helper.
//!
//! A particle's radius and color are fixed at spawn; only position and
//! velocity change over its lifetime, and velocity only ever changes by
//! boundary sign flips.

use crate::color::Rgba;
use crate::prng::SplitMix64;
use glam::DVec2;

/// Smallest spawn radius in pixels.
pub const MIN_RADIUS: f64 = 0.5;
/// Largest spawn radius in pixels (exclusive).
pub const MAX_RADIUS: f64 = 2.0;
/// Per-axis spawn speed bound in pixels per tick (velocity is in ±this).
pub const MAX_AXIS_SPEED: f64 = 0.25;

/// A 2D point mass with a fixed radius and color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in viewport pixels, nominally within [0, width) x [0, height).
    pub position: DVec2,
    /// Drift velocity in pixels per tick.
    pub velocity: DVec2,
    /// Disc radius in pixels, fixed at spawn.
    pub radius: f64,
    /// Fill color with jittered channels, fixed at spawn.
    pub color: Rgba,
}

impl Particle {
    /// Spawns a particle at a uniformly random position inside the viewport.
    ///
    /// Velocity is uniform in ±[`MAX_AXIS_SPEED`] per axis, radius is uniform
    /// in [[`MIN_RADIUS`], [`MAX_RADIUS`]), and the color is sampled from a
    /// teal-green window (8-bit terms: r 20..70, g 55..255, b 100..250) with
    /// alpha in [0.2, 0.7). The draw order from `rng` is fixed: position,
    /// radius, velocity, color — reordering it changes every seeded field.
    pub fn spawn(rng: &mut SplitMix64, width: f64, height: f64) -> Self {
        let position = DVec2::new(rng.next_range(0.0, width), rng.next_range(0.0, height));
        let radius = rng.next_range(MIN_RADIUS, MAX_RADIUS);
        let velocity = DVec2::new(
            rng.next_range(-MAX_AXIS_SPEED, MAX_AXIS_SPEED),
            rng.next_range(-MAX_AXIS_SPEED, MAX_AXIS_SPEED),
        );
        let color = Rgba::from_bytes(
            rng.next_range(20.0, 70.0) as u8,
            rng.next_range(55.0, 255.0) as u8,
            rng.next_range(100.0, 250.0) as u8,
            rng.next_range(0.2, 0.7),
        );
        Self {
            position,
            velocity,
            radius,
            color,
        }
    }
}
