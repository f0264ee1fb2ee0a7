//! An owned RGBA pixel surface with source-over compositing.
//!
//! Pixels are stored as f64 components in row-major order so repeated
//! blending does not accumulate 8-bit quantization error; conversion to
//! RGBA8 happens once at export time.

use driftnet_core::color::Rgba;
use driftnet_core::error::FieldError;
use glam::DVec2;

/// A width x height RGBA surface. Fresh and cleared rasters are
/// transparent black.
#[derive(Debug, Clone)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Raster {
    /// Creates a transparent raster of the given dimensions.
    ///
    /// Returns `FieldError::InvalidDimensions` if either dimension is zero
    /// or `width * height` overflows.
    pub fn new(width: usize, height: usize) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(FieldError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; len],
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resets every pixel to transparent black.
    pub fn clear(&mut self) {
        self.pixels.fill(Rgba::TRANSPARENT);
    }

    /// Reads the pixel at `(x, y)`.
    ///
    /// Returns `FieldError::OutOfBounds` for coordinates outside the surface.
    pub fn pixel(&self, x: usize, y: usize) -> Result<Rgba, FieldError> {
        if x >= self.width || y >= self.height {
            return Err(FieldError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pixels[y * self.width + x])
    }

    /// Source-over blends `color` onto the pixel at `(x, y)`.
    ///
    /// Coordinates outside the surface are silently dropped: shapes near
    /// (or past) the viewport edge simply clip.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y * self.width + x;
        self.pixels[idx] = color.over(self.pixels[idx]);
    }

    /// Fills a disc of the given radius centered at `center`.
    ///
    /// Coverage is decided per pixel by sampling the pixel center, giving a
    /// hard (unantialiased) edge. Sub-pixel radii still light the pixel
    /// containing the center.
    pub fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        let r = radius.max(0.0);
        let x0 = (center.x - r).floor() as i64;
        let x1 = (center.x + r).ceil() as i64;
        let y0 = (center.y - r).floor() as i64;
        let y1 = (center.y + r).ceil() as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let px = x as f64 + 0.5;
                let py = y as f64 + 0.5;
                let d2 = (px - center.x).powi(2) + (py - center.y).powi(2);
                let is_home_pixel =
                    (x as f64) == center.x.floor() && (y as f64) == center.y.floor();
                if d2 <= r * r || is_home_pixel {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Plots a thin line from `a` to `b` by stepping one pixel at a time.
    ///
    /// Each covered pixel is blended exactly once per call (consecutive
    /// duplicate steps are skipped), so the stroke opacity equals the color
    /// alpha rather than compounding along the run.
    pub fn plot_line(&mut self, a: DVec2, b: DVec2, color: Rgba) {
        let delta = b - a;
        let steps = delta.length().ceil().max(1.0) as usize;
        let mut last: Option<(i64, i64)> = None;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let p = a + delta * t;
            let cell = (p.x.floor() as i64, p.y.floor() as i64);
            if last != Some(cell) {
                self.blend_pixel(cell.0, cell.1, color);
                last = Some(cell);
            }
        }
    }

    /// Quantizes the surface to an RGBA8 byte buffer of length
    /// `width * height * 4`.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| p.to_bytes())
            .collect()
    }
}
