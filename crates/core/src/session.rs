//! Headless interaction state around a [`FieldModel`].
//!
//! A `Session` owns everything a front end would: the compass position, the
//! strength slider, freehand strokes and plotted marker points. It turns
//! pointer-level events into model updates and asks the model for the needle
//! angle. Nothing here is persisted.

use crate::model::{FieldModel, MULTIPLIER_RANGE};
use crate::needle::needle_angle_degrees;
use glam::DVec2;
use tracing::debug;

/// Simulation area used when none is given.
pub const DEFAULT_AREA: DVec2 = DVec2::new(800.0, 500.0);

/// Compass diameter used when none is given.
pub const DEFAULT_COMPASS_DIAMETER: f64 = 40.0;

/// Initial top-left corner of the compass.
const INITIAL_COMPASS_CORNER: DVec2 = DVec2::new(50.0, 50.0);

/// One straight piece of a freehand stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }

    /// Direction of the segment in degrees, same convention as the needle.
    pub fn angle_degrees(&self) -> f64 {
        needle_angle_degrees(self.to - self.from)
    }
}

/// Interaction state for one compass over one magnet arrangement.
#[derive(Debug, Clone)]
pub struct Session {
    model: FieldModel,
    area: DVec2,
    compass_diameter: f64,
    compass: DVec2,
    markers: Vec<DVec2>,
    segments: Vec<Segment>,
    draw_mode: bool,
    stroke: Option<DVec2>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_AREA, DEFAULT_COMPASS_DIAMETER)
    }
}

impl Session {
    /// A session over the `single` scenario.
    pub fn new(area: DVec2, compass_diameter: f64) -> Self {
        Self::with_model(FieldModel::default(), area, compass_diameter)
    }

    /// A session over an existing model.
    pub fn with_model(model: FieldModel, area: DVec2, compass_diameter: f64) -> Self {
        let mut session = Self {
            model,
            area,
            compass_diameter,
            compass: DVec2::ZERO,
            markers: Vec::new(),
            segments: Vec::new(),
            draw_mode: false,
            stroke: None,
        };
        session.drag_compass_to(INITIAL_COMPASS_CORNER + DVec2::splat(compass_diameter / 2.0));
        session
    }

    pub fn model(&self) -> &FieldModel {
        &self.model
    }

    pub fn area(&self) -> DVec2 {
        self.area
    }

    /// Center of the compass.
    pub fn compass(&self) -> DVec2 {
        self.compass
    }

    pub fn markers(&self) -> &[DVec2] {
        &self.markers
    }

    /// Every drawn segment, across all strokes, in drawing order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn draw_mode(&self) -> bool {
        self.draw_mode
    }

    /// Whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.stroke.is_some()
    }

    /// Switches to the named preset and wipes drawings and markers.
    pub fn set_scenario(&mut self, name: &str) {
        self.model.apply_scenario(name);
        self.clear_all();
    }

    /// Moves the compass so its center is as close to `center` as the area
    /// allows while keeping the whole compass inside.
    pub fn drag_compass_to(&mut self, center: DVec2) {
        let half = self.compass_diameter / 2.0;
        let max = (self.area - DVec2::splat(half)).max(DVec2::splat(half));
        self.compass = center.clamp(DVec2::splat(half), max);
    }

    /// Slider input: clamps to the slider range and forwards to the model.
    pub fn set_strength(&mut self, value: f64) {
        let (lo, hi) = MULTIPLIER_RANGE;
        self.model.set_global_multiplier(value.clamp(lo, hi));
    }

    /// A click on the simulation area.
    ///
    /// Outside draw mode this plots a marker, unless the click landed on the
    /// compass or a magnet. Returns whether a marker was added.
    pub fn click(&mut self, point: DVec2) -> bool {
        if self.draw_mode || self.is_drawing() || self.hits_fixture(point) {
            return false;
        }
        self.markers.push(point);
        true
    }

    /// Starts a stroke at `point` if in draw mode and not on a fixture.
    pub fn pointer_down(&mut self, point: DVec2) {
        if self.draw_mode && !self.hits_fixture(point) {
            self.stroke = Some(point);
        }
    }

    /// Extends the current stroke with a segment to `point`.
    pub fn pointer_move(&mut self, point: DVec2) {
        if let Some(last) = self.stroke {
            self.segments.push(Segment {
                from: last,
                to: point,
            });
            self.stroke = Some(point);
        }
    }

    /// Ends the current stroke.
    pub fn pointer_up(&mut self) {
        self.stroke = None;
    }

    /// Flips draw mode; leaving it abandons any stroke in progress.
    pub fn toggle_draw_mode(&mut self) -> bool {
        self.draw_mode = !self.draw_mode;
        if !self.draw_mode {
            self.stroke = None;
        }
        debug!(draw_mode = self.draw_mode, "draw mode toggled");
        self.draw_mode
    }

    /// Removes all markers and strokes and leaves draw mode.
    pub fn clear_all(&mut self) {
        self.markers.clear();
        self.segments.clear();
        if self.draw_mode {
            self.toggle_draw_mode();
        }
    }

    /// Needle angle at the compass center.
    pub fn needle_angle(&self) -> f64 {
        self.model.needle_angle(self.compass)
    }

    /// Field at the `index`-th marker, if it exists.
    pub fn field_at_marker(&self, index: usize) -> Option<DVec2> {
        self.markers
            .get(index)
            .map(|&p| self.model.evaluate_field(p))
    }

    fn hits_fixture(&self, point: DVec2) -> bool {
        point.distance(self.compass) <= self.compass_diameter / 2.0
            || self.model.magnets().iter().any(|m| m.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Scenario;

    const OPEN: DVec2 = DVec2::new(300.0, 420.0);

    #[test]
    fn compass_starts_near_top_left_corner() {
        let s = Session::default();
        assert_eq!(s.compass(), DVec2::new(70.0, 70.0));
        assert_eq!(s.model().magnets(), Scenario::Single.magnets().as_slice());
    }

    #[test]
    fn drag_clamps_compass_inside_area() {
        let mut s = Session::default();
        s.drag_compass_to(DVec2::new(-100.0, 9999.0));
        assert_eq!(s.compass(), DVec2::new(20.0, 480.0));
        s.drag_compass_to(DVec2::new(400.0, 250.0));
        assert_eq!(s.compass(), DVec2::new(400.0, 250.0));
    }

    #[test]
    fn needle_tracks_compass() {
        let mut s = Session::default();
        s.drag_compass_to(DVec2::new(460.0, 250.0));
        assert_eq!(s.needle_angle(), 0.0);
        s.drag_compass_to(DVec2::new(460.0, 150.0));
        assert_eq!(
            s.needle_angle(),
            s.model().needle_angle(DVec2::new(460.0, 150.0))
        );
    }

    #[test]
    fn set_strength_clamps_to_slider_range() {
        let mut s = Session::default();
        s.set_strength(9.0);
        assert_eq!(s.model().global_multiplier(), 5.0);
        s.set_strength(-3.0);
        assert_eq!(s.model().global_multiplier(), 0.0);
        s.set_strength(2.25);
        assert_eq!(s.model().global_multiplier(), 2.25);
    }

    #[test]
    fn click_plots_marker_in_open_space() {
        let mut s = Session::default();
        assert!(s.click(OPEN));
        assert_eq!(s.markers(), &[OPEN]);
        assert_eq!(
            s.field_at_marker(0),
            Some(s.model().evaluate_field(OPEN))
        );
        assert_eq!(s.field_at_marker(1), None);
    }

    #[test]
    fn click_on_magnet_or_compass_is_ignored() {
        let mut s = Session::default();
        assert!(!s.click(DVec2::new(400.0, 250.0)), "on the north magnet");
        assert!(!s.click(s.compass()), "on the compass");
        assert!(s.markers().is_empty());
    }

    #[test]
    fn click_in_draw_mode_does_not_plot() {
        let mut s = Session::default();
        s.toggle_draw_mode();
        assert!(!s.click(OPEN));
        assert!(s.markers().is_empty());
    }

    #[test]
    fn stroke_records_segments_between_moves() {
        let mut s = Session::default();
        s.toggle_draw_mode();
        s.pointer_down(OPEN);
        assert!(s.is_drawing());
        s.pointer_move(OPEN + DVec2::new(3.0, 4.0));
        s.pointer_move(OPEN + DVec2::new(3.0, 10.0));
        s.pointer_up();
        assert!(!s.is_drawing());

        let segs = s.segments();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].length(), 5.0);
        assert_eq!(segs[1].from, OPEN + DVec2::new(3.0, 4.0));
        assert!((segs[1].angle_degrees() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn moves_without_stroke_draw_nothing() {
        let mut s = Session::default();
        s.pointer_down(OPEN);
        s.pointer_move(OPEN + DVec2::X);
        assert!(s.segments().is_empty(), "not in draw mode");

        s.toggle_draw_mode();
        s.pointer_down(DVec2::new(400.0, 250.0));
        s.pointer_move(OPEN);
        assert!(s.segments().is_empty(), "stroke cannot start on a magnet");
    }

    #[test]
    fn leaving_draw_mode_abandons_stroke() {
        let mut s = Session::default();
        s.toggle_draw_mode();
        s.pointer_down(OPEN);
        assert!(!s.toggle_draw_mode());
        assert!(!s.is_drawing());
        s.pointer_move(OPEN + DVec2::ONE);
        assert!(s.segments().is_empty());
    }

    #[test]
    fn set_scenario_clears_drawings_and_exits_draw_mode() {
        let mut s = Session::default();
        s.click(OPEN);
        s.toggle_draw_mode();
        s.pointer_down(OPEN);
        s.pointer_move(OPEN + DVec2::ONE);
        s.set_scenario("repel");

        assert!(s.markers().is_empty());
        assert!(s.segments().is_empty());
        assert!(!s.draw_mode());
        assert_eq!(s.model().magnets(), Scenario::Repel.magnets().as_slice());
    }

    #[test]
    fn clear_all_keeps_magnets_and_compass() {
        let mut s = Session::default();
        s.drag_compass_to(DVec2::new(200.0, 100.0));
        s.click(OPEN);
        s.clear_all();
        assert!(s.markers().is_empty());
        assert_eq!(s.compass(), DVec2::new(200.0, 100.0));
        assert_eq!(s.model().magnets().len(), 2);
    }
}
