//! RGBA color with straight alpha and source-over compositing.
//!
//! Components are `f64` in [0, 1] for precision during blending; quantization
//! to 8-bit happens only at export time. Alpha is straight (not premultiplied),
//! matching how the raster composites edges over discs over the clear color.

/// A straight-alpha RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black, the clear color of a fresh raster.
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Creates a color, clamping every component to [0, 1].
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Creates a color from 8-bit channels and a [0, 1] alpha, CSS `rgba()` style.
    pub fn from_bytes(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self::new(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a,
        )
    }

    /// Returns this color with its alpha replaced by `a` (clamped).
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Source-over composite of `self` on top of `dst`.
    ///
    /// Straight-alpha Porter-Duff: the result alpha is `sa + da * (1 - sa)`
    /// and color channels are weighted by the contributing alphas. A fully
    /// transparent result is transparent black.
    pub fn over(self, dst: Rgba) -> Rgba {
        let sa = self.a;
        let da = dst.a * (1.0 - sa);
        let out_a = sa + da;
        if out_a <= 0.0 {
            return Rgba::TRANSPARENT;
        }
        Rgba {
            r: (self.r * sa + dst.r * da) / out_a,
            g: (self.g * sa + dst.g * da) / out_a,
            b: (self.b * sa + dst.b * da) / out_a,
            a: out_a,
        }
    }

    /// Quantizes to 8-bit RGBA with rounding.
    pub fn to_bytes(self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_out_of_range_components() {
        let c = Rgba::new(-0.5, 1.5, 0.5, 2.0);
        assert_eq!(c.r, 0.0);
        assert_eq!(c.g, 1.0);
        assert_eq!(c.b, 0.5);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn from_bytes_matches_css_rgba_convention() {
        let c = Rgba::from_bytes(102, 255, 178, 0.1);
        assert!((c.r - 102.0 / 255.0).abs() < 1e-12);
        assert!((c.g - 1.0).abs() < 1e-12);
        assert!((c.b - 178.0 / 255.0).abs() < 1e-12);
        assert!((c.a - 0.1).abs() < 1e-12);
    }

    #[test]
    fn opaque_source_replaces_destination() {
        let src = Rgba::new(0.2, 0.4, 0.6, 1.0);
        let dst = Rgba::new(0.9, 0.9, 0.9, 1.0);
        let out = src.over(dst);
        assert!((out.r - 0.2).abs() < 1e-12);
        assert!((out.g - 0.4).abs() < 1e-12);
        assert!((out.b - 0.6).abs() < 1e-12);
        assert!((out.a - 1.0).abs() < 1e-12);
    }

    #[test]
    fn transparent_source_leaves_destination() {
        let src = Rgba::new(0.2, 0.4, 0.6, 0.0);
        let dst = Rgba::new(0.9, 0.8, 0.7, 0.5);
        let out = src.over(dst);
        assert!((out.r - dst.r).abs() < 1e-12);
        assert!((out.a - dst.a).abs() < 1e-12);
    }

    #[test]
    fn half_alpha_over_transparent_keeps_source_color() {
        let src = Rgba::new(0.4, 1.0, 0.7, 0.5);
        let out = src.over(Rgba::TRANSPARENT);
        assert!((out.r - 0.4).abs() < 1e-12);
        assert!((out.g - 1.0).abs() < 1e-12);
        assert!((out.a - 0.5).abs() < 1e-12);
    }

    #[test]
    fn over_of_two_transparents_is_transparent() {
        let out = Rgba::TRANSPARENT.over(Rgba::TRANSPARENT);
        assert_eq!(out, Rgba::TRANSPARENT);
    }

    #[test]
    fn with_alpha_replaces_only_alpha() {
        let c = Rgba::new(0.1, 0.2, 0.3, 0.9).with_alpha(0.25);
        assert!((c.a - 0.25).abs() < 1e-12);
        assert!((c.r - 0.1).abs() < 1e-12);
    }

    #[test]
    fn to_bytes_rounds_components() {
        let c = Rgba::new(1.0, 0.0, 0.5, 0.2);
        let bytes = c.to_bytes();
        assert_eq!(bytes[0], 255);
        assert_eq!(bytes[1], 0);
        assert_eq!(bytes[2], 128);
        assert_eq!(bytes[3], 51);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn color() -> impl Strategy<Value = Rgba> {
            (0.0_f64..=1.0, 0.0_f64..=1.0, 0.0_f64..=1.0, 0.0_f64..=1.0)
                .prop_map(|(r, g, b, a)| Rgba::new(r, g, b, a))
        }

        proptest! {
            #[test]
            fn over_always_produces_valid_components(src in color(), dst in color()) {
                let out = src.over(dst);
                for (name, v) in [("r", out.r), ("g", out.g), ("b", out.b), ("a", out.a)] {
                    prop_assert!(
                        (0.0..=1.0 + 1e-12).contains(&v) && !v.is_nan(),
                        "{name} component out of range: {v}"
                    );
                }
            }

            #[test]
            fn over_alpha_never_decreases(src in color(), dst in color()) {
                let out = src.over(dst);
                prop_assert!(out.a >= src.a - 1e-12);
            }
        }
    }
}
