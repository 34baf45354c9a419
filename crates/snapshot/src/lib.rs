#![deny(unsafe_code)]
//! Pixel conversion and PNG output for sampled field grids.
//!
//! Sits on top of `compass-field-core` so that the core stays free of image
//! dependencies. The `png` feature (default on) gates the `image` crate.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::{grid_to_rgba, intensities};

#[cfg(feature = "png")]
pub use snapshot::write_png;
