//! Bar magnet descriptors.
//!
//! A [`Magnet`] is an id-less rectangle with a declared polarity and a scalar
//! strength. Its principal axis follows from its aspect ratio: wide magnets
//! are horizontal, tall ones vertical.

use crate::error::FieldError;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Declared polarity of a magnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    North,
    South,
}

impl Polarity {
    /// `+1.0` for North, `-1.0` for South.
    pub fn sign(self) -> f64 {
        match self {
            Polarity::North => 1.0,
            Polarity::South => -1.0,
        }
    }

    /// Single-letter label drawn on the magnet.
    pub fn label(self) -> &'static str {
        match self {
            Polarity::North => "N",
            Polarity::South => "S",
        }
    }

    /// The other polarity.
    pub fn flipped(self) -> Self {
        match self {
            Polarity::North => Polarity::South,
            Polarity::South => Polarity::North,
        }
    }
}

/// Principal axis of a magnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Unit vector along the axis.
    pub fn unit(self) -> DVec2 {
        match self {
            Axis::Horizontal => DVec2::X,
            Axis::Vertical => DVec2::Y,
        }
    }
}

fn default_strength() -> f64 {
    1.0
}

/// A rectangular bar magnet.
///
/// Both ends of a magnet share its declared polarity. This is a deliberate
/// simplification of the visualizer's model, not a physical dipole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Magnet {
    pub center: DVec2,
    pub width: f64,
    pub height: f64,
    pub polarity: Polarity,
    #[serde(default = "default_strength")]
    pub strength: f64,
}

impl Magnet {
    /// Creates a magnet with strength 1.0.
    pub fn new(center: DVec2, width: f64, height: f64, polarity: Polarity) -> Self {
        Self {
            center,
            width,
            height,
            polarity,
            strength: default_strength(),
        }
    }

    /// Returns a copy with the given strength.
    pub fn with_strength(self, strength: f64) -> Self {
        Self { strength, ..self }
    }

    /// `Horizontal` when `width >= height`, otherwise `Vertical`.
    pub fn axis(&self) -> Axis {
        if self.width >= self.height {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Bounding-box extent as a vector.
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Top-left corner of the bounding box.
    pub fn top_left(&self) -> DVec2 {
        self.center - self.size() * 0.5
    }

    /// Whether `point` lies inside the bounding box (edges inclusive).
    pub fn contains(&self, point: DVec2) -> bool {
        let min = self.top_left();
        let max = min + self.size();
        point.cmpge(min).all() && point.cmple(max).all()
    }

    /// Checks that the center is finite and that width, height and
    /// strength are finite and positive.
    ///
    /// `index` is reported back in the error so callers validating a whole
    /// set can tell which entry was rejected.
    pub fn validate(&self, index: usize) -> Result<(), FieldError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !self.center.is_finite() {
            return Err(FieldError::InvalidMagnetCenter {
                index,
                x: self.center.x,
                y: self.center.y,
            });
        }
        if !positive(self.width) || !positive(self.height) {
            return Err(FieldError::InvalidMagnetGeometry {
                index,
                width: self.width,
                height: self.height,
            });
        }
        if !positive(self.strength) {
            return Err(FieldError::InvalidMagnetStrength {
                index,
                strength: self.strength,
            });
        }
        Ok(())
    }
}
