//! Frame composition: particle discs plus proximity edges.
//!
//! Every frame is drawn from scratch: clear, one filled disc per particle
//! in its fixed spawn color, then a line for every unordered particle pair
//! closer than the connection threshold. Edge opacity decays linearly and
//! reaches zero exactly at the threshold.
//!
//! The pair scan is the naive O(n^2) enumeration. The particle count is
//! capped around 100, where a spatial index would cost more than it saves.

use crate::raster::Raster;
use driftnet_core::color::Rgba;
use driftnet_core::params::param_f64;
use driftnet_core::particle::Particle;

/// Default maximum inter-particle distance at which an edge is drawn.
pub const DEFAULT_CONNECTION_THRESHOLD: f64 = 150.0;
/// Default edge opacity at zero distance.
pub const DEFAULT_BASE_ALPHA: f64 = 0.1;

/// Visual parameters for the proximity edges.
#[derive(Debug, Clone, Copy)]
pub struct EdgeStyle {
    /// Maximum distance at which an edge is drawn.
    pub threshold: f64,
    /// Opacity of an edge between coincident particles.
    pub base_alpha: f64,
    /// Edge color; its alpha is replaced per edge by the falloff.
    pub color: Rgba,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_CONNECTION_THRESHOLD,
            base_alpha: DEFAULT_BASE_ALPHA,
            // Mint green, the one non-particle color in a frame.
            color: Rgba::from_bytes(102, 255, 178, 1.0),
        }
    }
}

impl EdgeStyle {
    /// Extracts `connection_threshold` and `edge_base_alpha` from a JSON
    /// params object, falling back to defaults. The edge color is fixed.
    pub fn from_json(params: &serde_json::Value) -> Self {
        let defaults = Self::default();
        Self {
            threshold: param_f64(params, "connection_threshold", defaults.threshold),
            base_alpha: param_f64(params, "edge_base_alpha", defaults.base_alpha),
            color: defaults.color,
        }
    }

    /// Schema for the style parameters recognized by [`EdgeStyle::from_json`].
    pub fn param_schema() -> serde_json::Value {
        serde_json::json!({
            "connection_threshold": {
                "type": "number",
                "default": DEFAULT_CONNECTION_THRESHOLD,
                "min": 0.0,
                "max": 1000.0,
                "description": "Maximum inter-particle distance at which an edge is drawn"
            },
            "edge_base_alpha": {
                "type": "number",
                "default": DEFAULT_BASE_ALPHA,
                "min": 0.0,
                "max": 1.0,
                "description": "Edge opacity between coincident particles"
            }
        })
    }
}

/// Edge opacity for a pair at `distance`: `base_alpha * (1 - distance/threshold)`,
/// clamped to zero at and beyond the threshold.
pub fn edge_alpha(distance: f64, style: &EdgeStyle) -> f64 {
    if distance >= style.threshold || style.threshold <= 0.0 {
        return 0.0;
    }
    style.base_alpha * (1.0 - distance / style.threshold)
}

/// Renders one frame of the particle field onto `raster`.
///
/// Clears the surface, draws every particle as a filled disc, then walks
/// all unordered pairs and strokes the ones under the threshold with the
/// distance-faded edge color.
pub fn render(particles: &[Particle], style: &EdgeStyle, raster: &mut Raster) {
    raster.clear();

    for p in particles {
        raster.fill_circle(p.position, p.radius, p.color);
    }

    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let distance = a.position.distance(b.position);
            let alpha = edge_alpha(distance, style);
            if alpha > 0.0 {
                raster.plot_line(a.position, b.position, style.color.with_alpha(alpha));
            }
        }
    }
}
