//! Goalpost tick marks where the angled lines cross a leg level.
//!
//! Each in-span level with a known square half-diagonal gets one goalpost
//! per side: two vertical ticks at `x ± half_diagonal` joined across the
//! top, centered on the intersection of the angled line with the level.

use glam::dvec2;

use crate::layout::VerticalLayout;
use crate::log::debug;
use crate::parse::parse_offset;
use crate::render::angled::AngledLines;
use crate::types::{GeometryConfig, Layer, LegRecord, Primitive};

/// Build goalpost markers for every level the angled lines cross.
///
/// Levels outside the lines' vertical span, and records without a square
/// half-diagonal, are skipped silently.
pub fn build_markers(
    layout: &VerticalLayout,
    records: &[LegRecord],
    lines: &AngledLines,
    config: &GeometryConfig,
) -> Vec<Primitive> {
    let mut primitives = Vec::new();

    for record in super::distinct_records(records) {
        let (Some(half_diagonal), Some(y)) = (
            record.square_half_diagonal,
            layout.y_of(&record.label_raw),
        ) else {
            continue;
        };
        if !lines.contains_y(y) {
            debug!("label {:?} outside angled span, no marker", record.label_raw);
            continue;
        }

        let layer = if parse_offset(&record.label_raw).is_some() {
            Layer::Offset
        } else {
            Layer::Base
        };
        let x = lines.x_at(y);
        let pos = goalpost(x, y, half_diagonal, config.tick_half_height, layer);
        let neg = pos.mirrored_x();
        primitives.push(pos);
        primitives.push(neg);
    }

    primitives
}

/// One goalpost: left tick up, across the top, right tick down.
fn goalpost(x: f64, y: f64, half_width: f64, half_height: f64, layer: Layer) -> Primitive {
    Primitive::Polyline {
        points: vec![
            dvec2(x - half_width, y - half_height),
            dvec2(x - half_width, y + half_height),
            dvec2(x + half_width, y + half_height),
            dvec2(x + half_width, y - half_height),
        ],
        layer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;
    use crate::render::angled::build_angled_lines;

    fn record(label: &str, gd: Option<f64>, shd: Option<f64>) -> LegRecord {
        LegRecord {
            label_raw: label.to_string(),
            ground_distance: gd,
            square_half_diagonal: shd,
        }
    }

    fn markers_for(records: &[LegRecord]) -> Vec<Primitive> {
        let config = GeometryConfig::default();
        let layout =
            compute_layout("T", records.iter().map(|r| r.label_raw.as_str()), &config).unwrap();
        let lines = build_angled_lines(&layout, records, &config).unwrap();
        build_markers(&layout, records, &lines, &config)
    }

    #[test]
    fn goalposts_at_both_sides_of_each_level() {
        let records = [
            record("2", Some(4000.0), Some(500.0)),
            record("-2", Some(2000.0), Some(500.0)),
        ];
        let markers = markers_for(&records);
        assert_eq!(markers.len(), 4);
        // pairs are (positive, mirrored)
        assert_eq!(markers[1], markers[0].mirrored_x());
        assert_eq!(markers[3], markers[2].mirrored_x());
    }

    #[test]
    fn goalpost_geometry_is_centered_on_the_intersection() {
        let records = [
            record("2", Some(4000.0), Some(500.0)),
            record("-2", Some(2000.0), Some(500.0)),
        ];
        let markers = markers_for(&records);
        // y(2) = -2000 is the low end: x = 4000 there
        let Primitive::Polyline { points, layer } = &markers[0] else {
            panic!("expected polyline");
        };
        assert_eq!(*layer, Layer::Base);
        assert_eq!(
            points,
            &vec![
                dvec2(3500.0, -2100.0),
                dvec2(3500.0, -1900.0),
                dvec2(4500.0, -1900.0),
                dvec2(4500.0, -2100.0),
            ]
        );
    }

    #[test]
    fn offset_labels_go_to_the_offset_layer() {
        let records = [
            record("2", Some(4000.0), Some(500.0)),
            record("-2", Some(2000.0), Some(500.0)),
            record("2 / -1", None, Some(400.0)),
        ];
        let markers = markers_for(&records);
        // y("2 / -1") = -2000 + 1000 = -1000, inside the span
        assert_eq!(markers.len(), 6);
        assert_eq!(markers[4].layer(), Layer::Offset);
        assert_eq!(markers[5].layer(), Layer::Offset);
    }

    #[test]
    fn levels_outside_the_span_are_skipped() {
        let records = [
            record("2", Some(4000.0), Some(500.0)),
            record("-2", Some(2000.0), Some(500.0)),
            record("-4", None, Some(500.0)),
        ];
        // y(-4) = 4000 > 2000, beyond the distance-carrying extremes
        let markers = markers_for(&records);
        assert_eq!(markers.len(), 4);
    }

    #[test]
    fn missing_half_diagonal_is_skipped() {
        let records = [
            record("2", Some(4000.0), Some(500.0)),
            record("-2", Some(2000.0), None),
        ];
        let markers = markers_for(&records);
        assert_eq!(markers.len(), 2);
    }

    #[test]
    fn span_ends_are_inclusive() {
        let records = [
            record("2", Some(4000.0), Some(500.0)),
            record("-2", Some(2000.0), Some(500.0)),
        ];
        let markers = markers_for(&records);
        // both extremes carry a half-diagonal, so both produce goalposts
        assert_eq!(markers.len(), 4);
    }
}
