//! Named magnet arrangements.
//!
//! The set is closed: `single`, `attract` and `repel`. Looking up any other
//! name through [`apply_scenario`] yields an empty arrangement rather than an
//! error.

use crate::magnet::{Magnet, Polarity};
use glam::DVec2;

/// All recognized scenario names.
const SCENARIO_NAMES: &[&str] = &["single", "attract", "repel"];

/// A preset magnet arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// One north and one south bar side by side.
    Single,
    /// Two pairs whose facing poles across the gap are opposite.
    Attract,
    /// Two pairs whose facing poles across the gap match.
    Repel,
}

impl Scenario {
    /// Looks up a scenario by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "single" => Some(Scenario::Single),
            "attract" => Some(Scenario::Attract),
            "repel" => Some(Scenario::Repel),
            _ => None,
        }
    }

    /// Returns a slice of all recognized scenario names.
    pub fn list_names() -> &'static [&'static str] {
        SCENARIO_NAMES
    }

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Single => "single",
            Scenario::Attract => "attract",
            Scenario::Repel => "repel",
        }
    }

    /// The magnets making up this arrangement, in creation order.
    pub fn magnets(self) -> Vec<Magnet> {
        let bar = |x: f64, w: f64, h: f64, polarity| Magnet::new(DVec2::new(x, 250.0), w, h, polarity);
        match self {
            Scenario::Single => vec![
                bar(400.0, 120.0, 60.0, Polarity::North),
                bar(520.0, 120.0, 60.0, Polarity::South),
            ],
            Scenario::Attract | Scenario::Repel => {
                let (inner, outer) = match self {
                    Scenario::Repel => (Polarity::North, Polarity::South),
                    _ => (Polarity::South, Polarity::North),
                };
                vec![
                    bar(200.0, 100.0, 50.0, Polarity::North),
                    bar(120.0, 100.0, 50.0, Polarity::South),
                    bar(600.0, 100.0, 50.0, inner),
                    bar(680.0, 100.0, 50.0, outer),
                ]
            }
        }
    }
}

/// Magnets for the named scenario, or an empty set for unknown names.
pub fn apply_scenario(name: &str) -> Vec<Magnet> {
    Scenario::from_name(name)
        .map(Scenario::magnets)
        .unwrap_or_default()
}
