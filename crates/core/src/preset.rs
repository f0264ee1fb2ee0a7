//! Reproducible specification for a rendered particle field.
//!
//! A [`Preset`] captures everything needed to recreate a frame: viewport
//! dimensions, parameter overrides, PRNG seed, and frame count. Two equal
//! presets fed to the same binary produce bit-identical rasters.

use crate::error::FieldError;
use serde::{Deserialize, Serialize};

/// Reproducible specification for a rendered particle field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    pub width: usize,
    pub height: usize,
    pub params: serde_json::Value,
    pub seed: u64,
    pub frames: usize,
}

impl Preset {
    /// Creates a preset with default params (`{}`) and zero frames.
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
            frames: 0,
        }
    }

    /// Validates non-zero dimensions, that `width * height` does not
    /// overflow, and that `params` is a JSON object.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.width == 0 || self.height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(FieldError::InvalidDimensions)?;
        if !self.params.is_object() {
            return Err(FieldError::InvalidPreset(
                "params must be a JSON object".into(),
            ));
        }
        Ok(())
    }
}
