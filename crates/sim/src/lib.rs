#![deny(unsafe_code)]
//! The driftnet field simulator.
//!
//! A [`Field`] owns a bounded set of drifting particles plus the pointer
//! interaction record. Each tick advances every particle by its velocity,
//! reflects it off the viewport edges with an exact sign flip, and applies
//! a pointer repulsion whose strength decays linearly with distance and
//! vanishes at the interaction radius.
//!
//! The particle count is derived from viewport width and capped, and it is
//! recomputed only on resize. A resize is a destructive reset: the whole
//! set is reseeded from the field's PRNG stream and no particle identity
//! survives, so the field visibly jumps on resize.

use driftnet_core::error::FieldError;
use driftnet_core::params::{param_f64, param_usize};
use driftnet_core::particle::Particle;
use driftnet_core::pointer::{Pointer, DEFAULT_INTERACTION_RADIUS};
use driftnet_core::prng::SplitMix64;
use driftnet_core::simulator::Simulator;
use glam::DVec2;
use serde_json::{json, Value};

/// Default particle density in particles per pixel of viewport width.
const DEFAULT_DENSITY: f64 = 0.1;
/// Default cap on the particle count, bounding per-frame cost.
const DEFAULT_MAX_PARTICLES: usize = 100;
/// Default pointer repulsion scale in pixels of displacement at zero distance.
const DEFAULT_REPULSION_STRENGTH: f64 = 2.0;

/// Simulation parameters for the particle field.
///
/// Use [`Default`] for the reference tuning (density 0.1/px, cap 100,
/// interaction radius 150, repulsion strength 2).
#[derive(Debug, Clone, Copy)]
pub struct FieldParams {
    /// Particles per pixel of viewport width.
    pub density: f64,
    /// Hard cap on the particle count.
    pub max_particles: usize,
    /// Distance within which the pointer displaces particles.
    pub interaction_radius: f64,
    /// Displacement in pixels applied at zero pointer distance.
    pub repulsion_strength: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            max_particles: DEFAULT_MAX_PARTICLES,
            interaction_radius: DEFAULT_INTERACTION_RADIUS,
            repulsion_strength: DEFAULT_REPULSION_STRENGTH,
        }
    }
}

impl FieldParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            density: param_f64(params, "density", DEFAULT_DENSITY),
            max_particles: param_usize(params, "max_particles", DEFAULT_MAX_PARTICLES),
            interaction_radius: param_f64(
                params,
                "interaction_radius",
                DEFAULT_INTERACTION_RADIUS,
            ),
            repulsion_strength: param_f64(
                params,
                "repulsion_strength",
                DEFAULT_REPULSION_STRENGTH,
            ),
        }
    }

    /// Particle count for a viewport of the given width:
    /// `min(floor(width * density), max_particles)`.
    pub fn particle_count(&self, width: f64) -> usize {
        ((width * self.density).floor() as usize).min(self.max_particles)
    }
}

/// The particle field: an owned particle set, the pointer record, and the
/// PRNG stream that seeded them.
pub struct Field {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: Pointer,
    rng: SplitMix64,
    params: FieldParams,
}

impl Field {
    /// Creates a field and seeds its initial particle set.
    ///
    /// Returns `FieldError::InvalidDimensions` if width or height is zero.
    pub fn new(
        width: usize,
        height: usize,
        seed: u64,
        params: FieldParams,
    ) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        let mut field = Self {
            width: width as f64,
            height: height as f64,
            particles: Vec::new(),
            pointer: Pointer {
                radius: params.interaction_radius,
                ..Pointer::default()
            },
            rng: SplitMix64::new(seed),
            params,
        };
        field.reseed();
        Ok(field)
    }

    /// Creates a field from a JSON params object, falling back to defaults
    /// for missing keys.
    pub fn from_json(
        width: usize,
        height: usize,
        seed: u64,
        json_params: &Value,
    ) -> Result<Self, FieldError> {
        Self::new(width, height, seed, FieldParams::from_json(json_params))
    }

    /// Viewport width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Viewport height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The pointer interaction record.
    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// Records a new pointer position for the next tick's repulsion pass.
    ///
    /// Pure state write: no particle moves until `step()` runs.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x, y);
    }

    /// Applies a viewport resize as a destructive reset.
    ///
    /// The particle count is recomputed from the new width and the whole
    /// set is reseeded; nothing from the old set survives.
    ///
    /// Returns `FieldError::InvalidDimensions` if either dimension is zero.
    pub fn on_resize(&mut self, width: usize, height: usize) -> Result<(), FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        self.width = width as f64;
        self.height = height as f64;
        self.reseed();
        log::debug!(
            "resize to {width}x{height}: reseeded {} particles",
            self.particles.len()
        );
        Ok(())
    }

    /// Discards and respawns the entire particle set from the PRNG stream.
    fn reseed(&mut self) {
        let count = self.params.particle_count(self.width);
        self.particles.clear();
        self.particles
            .extend((0..count).map(|_| Particle::spawn(&mut self.rng, self.width, self.height)));
    }
}

impl Simulator for Field {
    fn step(&mut self) -> Result<(), FieldError> {
        let strength = self.params.repulsion_strength;
        for p in &mut self.particles {
            // Drift, then billiard reflection. The overshooting position is
            // kept as-is; only the velocity sign flips.
            p.position += p.velocity;
            if p.position.x > self.width || p.position.x < 0.0 {
                p.velocity.x = -p.velocity.x;
            }
            if p.position.y > self.height || p.position.y < 0.0 {
                p.velocity.y = -p.velocity.y;
            }

            // Repulsion adds to position; it never touches velocity.
            p.position += pointer_displacement(
                p.position - self.pointer.position,
                self.pointer.radius,
                strength,
            );
        }
        Ok(())
    }

    fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn params(&self) -> Value {
        json!({
            "density": self.params.density,
            "max_particles": self.params.max_particles,
            "interaction_radius": self.params.interaction_radius,
            "repulsion_strength": self.params.repulsion_strength,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "density": {
                "type": "number",
                "default": DEFAULT_DENSITY,
                "min": 0.0,
                "max": 1.0,
                "description": "Particles per pixel of viewport width"
            },
            "max_particles": {
                "type": "integer",
                "default": DEFAULT_MAX_PARTICLES,
                "min": 0,
                "max": 10000,
                "description": "Hard cap on the particle count"
            },
            "interaction_radius": {
                "type": "number",
                "default": DEFAULT_INTERACTION_RADIUS,
                "min": 0.0,
                "max": 1000.0,
                "description": "Distance within which the pointer displaces particles"
            },
            "repulsion_strength": {
                "type": "number",
                "default": DEFAULT_REPULSION_STRENGTH,
                "min": 0.0,
                "max": 50.0,
                "description": "Displacement in pixels applied at zero pointer distance"
            }
        })
    }
}

/// Displacement added to a particle at `offset` from the pointer.
///
/// Zero at or beyond `radius`. Inside it, the magnitude is
/// `strength * (radius - distance) / radius`, directed along the
/// pointer-to-particle vector — a linear falloff that vanishes exactly at
/// the radius boundary. At zero distance the direction degenerates; the
/// +x unit vector is used, matching the `atan2(0, 0) == 0` convention.
fn pointer_displacement(offset: DVec2, radius: f64, strength: f64) -> DVec2 {
    let distance = offset.length();
    if distance >= radius {
        return DVec2::ZERO;
    }
    let direction = if distance > 0.0 {
        offset / distance
    } else {
        DVec2::X
    };
    direction * ((radius - distance) / radius) * strength
}
