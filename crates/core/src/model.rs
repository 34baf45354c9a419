//! The caller-owned field model.
//!
//! [`FieldModel`] holds the active magnet set and the global strength
//! multiplier. Every query is answered from that explicit state; there is no
//! process-wide magnet list.

use crate::error::FieldError;
use crate::field::{evaluate_field, FieldSource};
use crate::magnet::Magnet;
use crate::needle::needle_angle_degrees;
use crate::scenario::Scenario;
use glam::DVec2;
use tracing::{debug, warn};

/// Inclusive range the strength slider allows for the global multiplier.
///
/// The model does not enforce it; interaction layers clamp before calling
/// [`FieldModel::set_global_multiplier`].
pub const MULTIPLIER_RANGE: (f64, f64) = (0.0, 5.0);

/// Active magnets plus the global multiplier.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldModel {
    magnets: Vec<Magnet>,
    multiplier: f64,
}

impl Default for FieldModel {
    /// The `single` scenario at multiplier 1.0.
    fn default() -> Self {
        Self::from_scenario(Scenario::Single)
    }
}

impl FieldModel {
    /// An empty model with multiplier 1.0.
    pub fn new() -> Self {
        Self {
            magnets: Vec::new(),
            multiplier: 1.0,
        }
    }

    /// A model populated from a preset, multiplier 1.0.
    pub fn from_scenario(scenario: Scenario) -> Self {
        Self {
            magnets: scenario.magnets(),
            multiplier: 1.0,
        }
    }

    /// Active magnets in evaluation order.
    pub fn magnets(&self) -> &[Magnet] {
        &self.magnets
    }

    pub fn global_multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Replaces the whole magnet set.
    ///
    /// Every magnet must have a finite center and finite, positive width,
    /// height and strength. On failure the previous set is kept and the
    /// first offending index is reported.
    pub fn set_magnets(&mut self, magnets: Vec<Magnet>) -> Result<(), FieldError> {
        if let Err(e) = magnets
            .iter()
            .enumerate()
            .try_for_each(|(i, m)| m.validate(i))
        {
            warn!(error = %e, "rejected magnet set");
            return Err(e);
        }
        debug!(count = magnets.len(), "magnet set replaced");
        self.magnets = magnets;
        Ok(())
    }

    /// Replaces the magnet set with the named preset.
    ///
    /// Unknown names clear the set; this is not an error.
    pub fn apply_scenario(&mut self, name: &str) {
        self.magnets = match Scenario::from_name(name) {
            Some(scenario) => scenario.magnets(),
            None => {
                warn!(scenario = name, "unknown scenario, clearing magnets");
                Vec::new()
            }
        };
        debug!(scenario = name, count = self.magnets.len(), "scenario applied");
    }

    /// Sets the global multiplier as given, without range checks.
    pub fn set_global_multiplier(&mut self, value: f64) {
        debug!(multiplier = value, "global multiplier changed");
        self.multiplier = value;
    }

    /// Net field at `query`.
    pub fn evaluate_field(&self, query: DVec2) -> DVec2 {
        evaluate_field(query, &self.magnets, self.multiplier)
    }

    /// Needle angle in degrees for a compass centered at `query`.
    pub fn needle_angle(&self, query: DVec2) -> f64 {
        needle_angle_degrees(self.evaluate_field(query))
    }
}

impl FieldSource for FieldModel {
    fn sample(&self, point: DVec2) -> DVec2 {
        self.evaluate_field(point)
    }
}
