//! Error types for the driftnet core.

use thiserror::Error;

/// Errors produced by field, raster, and preset operations.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Width or height was zero when creating a field or raster.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// An (x, y) coordinate was outside the raster bounds.
    #[error("pixel ({x}, {y}) out of bounds for raster of size ({width}, {height})")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A preset file or params object could not be interpreted.
    #[error("invalid preset: {0}")]
    InvalidPreset(String),

    /// An I/O failure while writing a snapshot.
    #[error("i/o error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = format!("{}", FieldError::InvalidDimensions);
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn out_of_bounds_includes_coordinates_and_dimensions() {
        let err = FieldError::OutOfBounds {
            x: 12,
            y: 34,
            width: 8,
            height: 6,
        };
        let msg = format!("{err}");
        assert!(msg.contains("12"), "missing x in: {msg}");
        assert!(msg.contains("34"), "missing y in: {msg}");
        assert!(msg.contains('8'), "missing width in: {msg}");
        assert!(msg.contains('6'), "missing height in: {msg}");
    }

    #[test]
    fn invalid_preset_includes_message() {
        let err = FieldError::InvalidPreset("frames missing".into());
        assert!(format!("{err}").contains("frames missing"));
    }

    #[test]
    fn io_includes_message() {
        let err = FieldError::Io("disk full".into());
        assert!(format!("{err}").contains("disk full"));
    }

    #[test]
    fn field_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FieldError>();
    }

    #[test]
    fn field_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<FieldError>();
    }
}
