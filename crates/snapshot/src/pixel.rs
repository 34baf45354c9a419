//! Pure-computation pixel buffer conversion from a [`FieldGrid`].
//!
//! Field magnitude spans many orders of magnitude near poles, so intensities
//! are `ln(1 + |F|)` normalized by the grid maximum.

use compass_field_core::FieldGrid;

/// Per-cell brightness in [0, 1], row-major.
///
/// A grid whose field is zero everywhere maps to all zeros.
pub fn intensities(grid: &FieldGrid) -> Vec<f64> {
    let logs: Vec<f64> = grid.magnitudes().into_iter().map(f64::ln_1p).collect();
    let max = logs.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        return vec![0.0; logs.len()];
    }
    logs.into_iter().map(|v| v / max).collect()
}

/// Maps field magnitudes to an RGBA8 grayscale buffer.
///
/// The buffer length is `cols * rows * 4`; alpha is always 255.
pub fn grid_to_rgba(grid: &FieldGrid) -> Vec<u8> {
    intensities(grid)
        .into_iter()
        .flat_map(|t| {
            let v = (t.clamp(0.0, 1.0) * 255.0).round() as u8;
            [v, v, v, 255u8]
        })
        .collect()
}
