//! Error types for the compass-field core.

use thiserror::Error;

/// Errors produced by model, grid, and scene operations.
#[derive(Debug, Error)]
pub enum FieldError {
    /// A magnet had a non-positive or non-finite width or height.
    #[error("invalid magnet geometry at index {index}: width {width} and height {height} must be positive")]
    InvalidMagnetGeometry {
        index: usize,
        width: f64,
        height: f64,
    },

    /// A magnet's center had a NaN or infinite coordinate.
    #[error("invalid magnet center at index {index}: ({x}, {y}) must be finite")]
    InvalidMagnetCenter { index: usize, x: f64, y: f64 },

    /// A magnet's strength was not a finite positive number.
    #[error("invalid magnet strength at index {index}: {strength} must be positive")]
    InvalidMagnetStrength { index: usize, strength: f64 },

    /// Column or row count was zero when creating a field grid.
    #[error("invalid dimensions: columns and rows must be non-zero")]
    InvalidDimensions,

    /// A (col, row) coordinate was outside the grid bounds.
    #[error("index ({col}, {row}) out of bounds for grid of size ({cols}, {rows})")]
    OutOfBounds {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },

    /// A scene description could not be parsed or was inconsistent.
    #[error("invalid scene: {0}")]
    InvalidScene(String),

    /// Writing a snapshot or reading a scene file failed.
    #[error("i/o error: {0}")]
    Io(String),
}
