//! Serializable description of a field setup.
//!
//! A [`Scene`] captures everything needed to rebuild a [`FieldModel`] and
//! place the compass: a preset name or an explicit magnet list, the global
//! multiplier, and the compass center. Drawn sketches and markers are not
//! part of a scene.

use crate::error::FieldError;
use crate::magnet::Magnet;
use crate::model::FieldModel;
use crate::params::{param_f64, param_string};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_scenario() -> String {
    "single".to_owned()
}

fn default_multiplier() -> f64 {
    1.0
}

/// Reproducible description of a field setup.
///
/// When `magnets` is present it takes precedence over `scenario`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    #[serde(default = "default_scenario")]
    pub scenario: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnets: Option<Vec<Magnet>>,
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compass: Option<DVec2>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(&default_scenario())
    }
}

impl Scene {
    /// A scene using the named preset at multiplier 1.0.
    pub fn new(scenario: &str) -> Self {
        Self {
            scenario: scenario.to_owned(),
            magnets: None,
            multiplier: default_multiplier(),
            compass: None,
        }
    }

    /// Parses a scene from JSON text.
    pub fn from_json(text: &str) -> Result<Self, FieldError> {
        serde_json::from_str(text).map_err(|e| FieldError::InvalidScene(e.to_string()))
    }

    /// Applies loose overrides: `scenario`, `multiplier`, `compass_x`, `compass_y`.
    ///
    /// Missing or mistyped keys leave the current value untouched. A
    /// `scenario` override drops any explicit magnet list.
    pub fn apply_params(&mut self, params: &Value) {
        let scenario = param_string(params, "scenario", &self.scenario);
        if scenario != self.scenario {
            self.scenario = scenario;
            self.magnets = None;
        }
        self.multiplier = param_f64(params, "multiplier", self.multiplier);
        if params.get("compass_x").is_some() || params.get("compass_y").is_some() {
            let current = self.compass.unwrap_or(DVec2::ZERO);
            self.compass = Some(DVec2::new(
                param_f64(params, "compass_x", current.x),
                param_f64(params, "compass_y", current.y),
            ));
        }
    }

    /// Checks the multiplier and compass are finite and every explicit
    /// magnet has valid geometry.
    pub fn validate(&self) -> Result<(), FieldError> {
        if !self.multiplier.is_finite() {
            return Err(FieldError::InvalidScene(format!(
                "multiplier must be finite, got {}",
                self.multiplier
            )));
        }
        if let Some(c) = self.compass.filter(|c| !c.is_finite()) {
            return Err(FieldError::InvalidScene(format!(
                "compass position must be finite, got {c}"
            )));
        }
        if let Some(magnets) = &self.magnets {
            magnets
                .iter()
                .enumerate()
                .try_for_each(|(i, m)| m.validate(i))?;
        }
        Ok(())
    }

    /// Name reported for this scene: the preset name, or `"custom"` when an
    /// explicit magnet list overrides it.
    pub fn label(&self) -> &str {
        match self.magnets {
            Some(_) => "custom",
            None => &self.scenario,
        }
    }

    /// Builds the model this scene describes.
    pub fn to_model(&self) -> Result<FieldModel, FieldError> {
        self.validate()?;
        let mut model = FieldModel::new();
        match &self.magnets {
            Some(magnets) => model.set_magnets(magnets.clone())?,
            None => model.apply_scenario(&self.scenario),
        }
        model.set_global_multiplier(self.multiplier);
        Ok(model)
    }
}
