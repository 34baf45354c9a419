#![deny(unsafe_code)]
//! Core model for the compass-field magnetostatics visualizer.
//!
//! Provides `Magnet`/`Polarity`, pole resolution, field superposition, the
//! needle angle mapper, scenario presets, the caller-owned `FieldModel`,
//! sampled `FieldGrid`s, serializable `Scene`s and a headless interaction
//! `Session`.

pub mod error;
pub mod field;
pub mod grid;
pub mod magnet;
pub mod model;
pub mod needle;
pub mod params;
pub mod pole;
pub mod scenario;
pub mod scene;
pub mod session;

pub use error::FieldError;
pub use field::{evaluate_field, FieldSource};
pub use grid::FieldGrid;
pub use magnet::{Axis, Magnet, Polarity};
pub use model::FieldModel;
pub use needle::needle_angle_degrees;
pub use pole::{resolve_poles, Pole};
pub use scenario::{apply_scenario, Scenario};
pub use scene::Scene;
pub use session::Session;
