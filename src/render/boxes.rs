//! Slanted boxes at base-level variants.
//!
//! Every offset-free level inside the angled span gets a small trapezoidal
//! box per side, sitting just above its level line. The top edge is sheared
//! horizontally so the box leans with the local angled-line slope; the
//! negative side is the mirror image.

use glam::dvec2;

use crate::layout::VerticalLayout;
use crate::parse::parse_offset;
use crate::render::angled::AngledLines;
use crate::types::{GeometryConfig, Layer, LegRecord, Primitive};

/// Build slanted boxes for every base-level variant the angled lines cross.
///
/// Three segments per side (two slanted sides, one horizontal top), all on
/// the `Base` layer. Offset variants and out-of-span levels produce nothing.
pub fn build_boxes(
    layout: &VerticalLayout,
    records: &[LegRecord],
    lines: &AngledLines,
    config: &GeometryConfig,
) -> Vec<Primitive> {
    let mut primitives = Vec::new();

    for record in super::distinct_records(records) {
        if parse_offset(&record.label_raw).is_some() {
            continue;
        }
        let Some(y) = layout.y_of(&record.label_raw) else {
            continue;
        };
        if !lines.contains_y(y) {
            continue;
        }

        let x = lines.x_at(y);
        let y_bottom = y + config.box_clearance;
        let y_top = y_bottom + config.box_height;
        let lean = lines.slope_dx(config.box_height);
        let half = config.box_half_width;

        let bottom_left = dvec2(x - half, y_bottom);
        let bottom_right = dvec2(x + half, y_bottom);
        let top_left = dvec2(x - half + lean, y_top);
        let top_right = dvec2(x + half + lean, y_top);

        let side = [
            Primitive::Segment {
                p1: bottom_left,
                p2: top_left,
                layer: Layer::Base,
            },
            Primitive::Segment {
                p1: bottom_right,
                p2: top_right,
                layer: Layer::Base,
            },
            Primitive::Segment {
                p1: top_left,
                p2: top_right,
                layer: Layer::Base,
            },
        ];
        let mirrored = side.clone().map(|p| p.mirrored_x());
        primitives.extend(side);
        primitives.extend(mirrored);
    }

    primitives
}
