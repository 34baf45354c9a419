//! Maps a field vector to the compass needle's display angle.

use glam::DVec2;

/// Needle rotation in degrees for the given field vector, in (-180, 180].
///
/// A zero field yields `0.0`. There is no smoothing: every call is computed
/// from scratch, so a sudden field change is a sudden jump.
pub fn needle_angle_degrees(field: DVec2) -> f64 {
    let angle = field.y.atan2(field.x).to_degrees();
    // atan2 reaches -pi only for a negative-zero y; fold it onto +180.
    if angle <= -180.0 {
        180.0
    } else {
        angle
    }
}
