//! The two mirrored inclined "batter" reference lines.
//!
//! The positive-side line runs from the lowest leg level to the highest one
//! (among labels whose record has a known ground distance), extended a fixed
//! vertical margin past the top along the same slope. The negative side is
//! its mirror across X = 0. Markers and boxes interpolate along the
//! unextended segment.

use glam::{dvec2, DVec2};

use crate::layout::VerticalLayout;
use crate::log::debug;
use crate::types::{GeometryConfig, Layer, LegRecord, Primitive};

/// Positive-side reference geometry; the negative side is derived by mirror.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngledLines {
    /// Bottom end of the reference segment: `(ground_distance(low), y_low)`.
    pub low: DVec2,
    /// Top end, unextended: `(ground_distance(high), y_high)`.
    pub high: DVec2,
    /// Top end extended past `high` by the configured vertical margin.
    pub high_ext: DVec2,
}

impl AngledLines {
    /// Inclusive vertical span covered by the unextended segment.
    pub fn y_span(&self) -> (f64, f64) {
        (self.low.y.min(self.high.y), self.low.y.max(self.high.y))
    }

    pub fn contains_y(&self, y: f64) -> bool {
        let (lo, hi) = self.y_span();
        (lo..=hi).contains(&y)
    }

    /// Positive-side X where the line crosses height `y`, by linear
    /// interpolation along the unextended segment.
    pub fn x_at(&self, y: f64) -> f64 {
        let t = (y - self.low.y) / (self.high.y - self.low.y);
        self.low.x + (self.high.x - self.low.x) * t
    }

    /// Horizontal drift of the line per `dy` of vertical rise.
    pub fn slope_dx(&self, dy: f64) -> f64 {
        (self.high.x - self.low.x) * (dy / (self.high.y - self.low.y))
    }

    /// The two reference segments, positive side first.
    pub fn primitives(&self) -> [Primitive; 2] {
        let pos = Primitive::Segment {
            p1: self.low,
            p2: self.high_ext,
            layer: Layer::Angled,
        };
        let neg = pos.mirrored_x();
        [pos, neg]
    }
}

/// Build the angled reference lines for one tower.
///
/// Returns `None` when no angled geometry exists: fewer than two distinct
/// levels carry a ground distance, or all of them coincide. That is a normal
/// outcome (a tower drawn as plain levels), not an error.
pub fn build_angled_lines(
    layout: &VerticalLayout,
    records: &[LegRecord],
    config: &GeometryConfig,
) -> Option<AngledLines> {
    let mut low: Option<DVec2> = None;
    let mut high: Option<DVec2> = None;

    for record in records {
        let (Some(distance), Some(y)) = (record.ground_distance, layout.y_of(&record.label_raw))
        else {
            continue;
        };
        let p = dvec2(distance, y);
        if low.map_or(true, |l| p.y < l.y) {
            low = Some(p);
        }
        if high.map_or(true, |h| p.y > h.y) {
            high = Some(p);
        }
    }

    let (low, high) = (low?, high?);
    if low.y == high.y {
        debug!("degenerate vertical span at y={}, no angled lines", low.y);
        return None;
    }

    // extrapolate past the high end by the vertical margin, same slope
    let t = config.angled_margin / (high.y - low.y);
    let high_ext = high + (high - low) * t;

    debug!(
        "angled line {:?} -> {:?}, extended to {:?}",
        low, high, high_ext
    );
    Some(AngledLines {
        low,
        high,
        high_ext,
    })
}
