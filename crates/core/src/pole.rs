//! Point poles derived from magnet geometry.
//!
//! Every magnet resolves to exactly two poles placed on the midline of its
//! principal axis, [`POLE_INSET`] units in from each end. Poles are never
//! stored; they are recomputed on every field evaluation.

use crate::magnet::Magnet;
use glam::DVec2;

/// Distance from each end of the bounding box to the pole along the axis.
pub const POLE_INSET: f64 = 4.0;

/// A point source of field derived from one end of a magnet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pole {
    pub position: DVec2,
    /// `+1.0` or `-1.0`, inherited from the owning magnet.
    pub polarity: f64,
    /// Nominal strength of the owning magnet, before halving and scaling.
    pub strength: f64,
}

/// Resolves the two poles of `magnet`.
///
/// The first pole sits at the low end of the axis (left or top), the second
/// at the high end. Both carry the magnet's polarity; the pair is not sign
/// flipped. The inset is not clamped, so magnets no longer than
/// `2 * POLE_INSET` along their axis yield coincident or swapped poles.
pub fn resolve_poles(magnet: &Magnet) -> [Pole; 2] {
    let along = magnet.axis().unit();
    let across = DVec2::ONE - along;
    let size = magnet.size();

    let base = magnet.top_left() + across * (size.dot(across) / 2.0);
    let length = size.dot(along);

    let pole = |offset: f64| Pole {
        position: base + along * offset,
        polarity: magnet.polarity.sign(),
        strength: magnet.strength,
    };
    [pole(POLE_INSET), pole(length - POLE_INSET)]
}
