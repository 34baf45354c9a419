//! Field vectors sampled on a regular lattice.
//!
//! A `FieldGrid` stores `cols * rows` vectors in row-major layout. Lattice
//! point `(col, row)` sits at `origin + spacing * (col, row)` in world space.
//! Unlike a display canvas there is no wrap-around: out-of-range access is an
//! error.

use crate::error::FieldError;
use crate::field::FieldSource;
use crate::needle::needle_angle_degrees;
use glam::DVec2;

/// A 2D lattice of sampled field vectors.
#[derive(Debug, Clone)]
pub struct FieldGrid {
    cols: usize,
    rows: usize,
    origin: DVec2,
    spacing: f64,
    data: Vec<DVec2>,
}

impl FieldGrid {
    /// Samples `source` at every lattice point.
    ///
    /// Returns `FieldError::InvalidDimensions` if either count is zero or if
    /// `cols * rows` overflows `usize`.
    pub fn sample(
        source: &dyn FieldSource,
        origin: DVec2,
        spacing: f64,
        cols: usize,
        rows: usize,
    ) -> Result<Self, FieldError> {
        if cols == 0 || rows == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        let len = cols.checked_mul(rows).ok_or(FieldError::InvalidDimensions)?;
        let data = (0..len)
            .map(|i| {
                let cell = DVec2::new((i % cols) as f64, (i / cols) as f64);
                source.sample(origin + cell * spacing)
            })
            .collect();
        Ok(Self {
            cols,
            rows,
            origin,
            spacing,
            data,
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// World-space position of lattice point `(0, 0)`.
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[DVec2] {
        &self.data
    }

    /// World-space position of lattice point `(col, row)`.
    pub fn position(&self, col: usize, row: usize) -> DVec2 {
        self.origin + DVec2::new(col as f64, row as f64) * self.spacing
    }

    /// Field vector at `(col, row)`.
    pub fn get(&self, col: usize, row: usize) -> Result<DVec2, FieldError> {
        if col >= self.cols || row >= self.rows {
            return Err(FieldError::OutOfBounds {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Iterates over all cells yielding `(col, row, field)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, DVec2)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(i, &v)| (i % self.cols, i / self.cols, v))
    }

    /// Field magnitude per cell, row-major.
    pub fn magnitudes(&self) -> Vec<f64> {
        self.data.iter().map(|v| v.length()).collect()
    }

    /// Needle angle in degrees per cell, row-major.
    pub fn angles(&self) -> Vec<f64> {
        self.data.iter().copied().map(needle_angle_degrees).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldModel;
    use crate::scenario::Scenario;

    /// Returns the query point itself, handy for checking lattice placement.
    struct Identity;

    impl FieldSource for Identity {
        fn sample(&self, point: DVec2) -> DVec2 {
            point
        }
    }

    #[test]
    fn sample_places_points_on_lattice() {
        let grid = FieldGrid::sample(&Identity, DVec2::new(10.0, 20.0), 5.0, 3, 2).unwrap();
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.data().len(), 6);
        assert_eq!(grid.get(0, 0).unwrap(), DVec2::new(10.0, 20.0));
        assert_eq!(grid.get(2, 0).unwrap(), DVec2::new(20.0, 20.0));
        assert_eq!(grid.get(1, 1).unwrap(), DVec2::new(15.0, 25.0));
        assert_eq!(grid.position(2, 1), DVec2::new(20.0, 25.0));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        for (c, r) in [(0, 4), (4, 0), (0, 0)] {
            let result = FieldGrid::sample(&Identity, DVec2::ZERO, 1.0, c, r);
            assert!(matches!(result, Err(FieldError::InvalidDimensions)));
        }
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let result = FieldGrid::sample(&Identity, DVec2::ZERO, 1.0, usize::MAX, 2);
        assert!(matches!(result, Err(FieldError::InvalidDimensions)));
    }

    #[test]
    fn get_out_of_bounds_is_an_error() {
        let grid = FieldGrid::sample(&Identity, DVec2::ZERO, 1.0, 3, 2).unwrap();
        assert!(matches!(
            grid.get(3, 0),
            Err(FieldError::OutOfBounds { col: 3, row: 0, cols: 3, rows: 2 })
        ));
        assert!(grid.get(0, 2).is_err());
    }

    #[test]
    fn iter_yields_all_triples_in_row_major_order() {
        let grid = FieldGrid::sample(&Identity, DVec2::ZERO, 1.0, 2, 2).unwrap();
        let coords: Vec<(usize, usize)> = grid.iter().map(|(c, r, _)| (c, r)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
        for (c, r, v) in grid.iter() {
            assert_eq!(v, grid.position(c, r));
        }
    }

    #[test]
    fn model_grid_matches_direct_evaluation() {
        let model = FieldModel::from_scenario(Scenario::Attract);
        let grid = FieldGrid::sample(&model, DVec2::new(0.0, 150.0), 50.0, 17, 5).unwrap();
        for (c, r, v) in grid.iter() {
            assert_eq!(v, model.evaluate_field(grid.position(c, r)));
        }
    }

    #[test]
    fn magnitudes_and_angles_follow_data() {
        let grid = FieldGrid::sample(&Identity, DVec2::new(-1.0, 0.0), 1.0, 2, 2).unwrap();
        // Cells: (-1,0), (0,0), (-1,1), (0,1)
        assert_eq!(grid.magnitudes(), vec![1.0, 0.0, 2.0_f64.sqrt(), 1.0]);
        let angles = grid.angles();
        assert!((angles[0] - 180.0).abs() < 1e-12);
        assert_eq!(angles[1], 0.0);
        assert!((angles[2] - 135.0).abs() < 1e-12);
        assert!((angles[3] - 90.0).abs() < 1e-12);
    }
}
