//! Field superposition over magnet poles.
//!
//! The field at a query point is the sum of inverse-square contributions from
//! both poles of every magnet. Evaluation is a pure function of the magnets,
//! the query point and the global multiplier.

use crate::magnet::Magnet;
use crate::pole::{resolve_poles, Pole};
use glam::DVec2;

/// Scale applied to every pole before the global multiplier.
pub const FIELD_CONSTANT: f64 = 5000.0;

/// Poles closer than this to the query point contribute nothing.
pub const SINGULARITY_EPS: f64 = 1e-4;

/// A source of 2D field vectors.
///
/// Implementations must be deterministic: same point, same output.
pub trait FieldSource: Send + Sync {
    /// Field vector at `point`.
    fn sample(&self, point: DVec2) -> DVec2;
}

impl Pole {
    /// Contribution of this pole at `point` with the given global multiplier.
    ///
    /// The magnet's strength is split evenly across its two poles. Returns
    /// zero when `point` is within [`SINGULARITY_EPS`] of the pole.
    pub fn contribution(&self, point: DVec2, multiplier: f64) -> DVec2 {
        let d = point - self.position;
        let dist = d.length();
        if dist <= SINGULARITY_EPS {
            return DVec2::ZERO;
        }
        let strength = FIELD_CONSTANT * (self.strength / 2.0) * multiplier / (dist * dist);
        d * (self.polarity * strength / dist)
    }
}

impl FieldSource for Pole {
    fn sample(&self, point: DVec2) -> DVec2 {
        self.contribution(point, 1.0)
    }
}

/// Net field at `query` from every pole of every magnet.
///
/// Poles are summed in magnet order. Returns exactly `DVec2::ZERO` for an
/// empty set or when every pole falls inside the singularity guard.
pub fn evaluate_field(query: DVec2, magnets: &[Magnet], multiplier: f64) -> DVec2 {
    magnets
        .iter()
        .flat_map(resolve_poles)
        .fold(DVec2::ZERO, |acc, pole| {
            acc + pole.contribution(query, multiplier)
        })
}
