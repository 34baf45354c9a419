//! PNG rendering of a [`FieldGrid`].
//!
//! Feature-gated behind `png` (default on). The pixel buffer conversion
//! itself lives in [`crate::pixel`].

use compass_field_core::{FieldError, FieldGrid};
use std::path::Path;
use tracing::debug;

use crate::pixel::grid_to_rgba;

/// Writes a grid as a grayscale magnitude PNG, one pixel per lattice point.
///
/// Returns `FieldError::InvalidDimensions` if the grid dimensions overflow
/// `u32`, or `FieldError::Io` on write failure.
pub fn write_png(grid: &FieldGrid, path: &Path) -> Result<(), FieldError> {
    let rgba = grid_to_rgba(grid);
    let w = u32::try_from(grid.cols()).map_err(|_| FieldError::InvalidDimensions)?;
    let h = u32::try_from(grid.rows()).map_err(|_| FieldError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| FieldError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| FieldError::Io(e.to_string()))?;
    debug!(path = %path.display(), w, h, "wrote field snapshot");
    Ok(())
}
