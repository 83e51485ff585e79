//! Geometry synthesis for one tower.
//!
//! Submodules, in pipeline order:
//! - `angled`: the two mirrored inclined reference lines
//! - `markers`: goalpost ticks where those lines cross a level
//! - `boxes`: slanted boxes at base-level variants
//! - `dxf`: serialization of the finished primitive list
//!
//! [`render_tower`] runs the whole pipeline: vertical layout, one level line
//! per variant, the centerline, then the slope-dependent geometry. Earlier
//! revisions kept a near-copy of this pipeline per feature generation; this
//! is the single parameterized replacement.

pub mod angled;
pub mod boxes;
pub mod dxf;
pub mod markers;

pub use angled::{build_angled_lines, AngledLines};
pub use boxes::build_boxes;
pub use markers::build_markers;

use std::collections::HashSet;

use glam::dvec2;

use crate::errors::LayoutError;
use crate::layout::{compute_layout, VerticalLayout};
use crate::log::debug;
use crate::types::{GeometryConfig, Layer, LegRecord, Primitive, TowerSpec};

/// The finished drawing for one tower: the primitive list plus the layout it
/// was derived from (the driver needs the layout for text placement).
#[derive(Debug, Clone, PartialEq)]
pub struct TowerDrawing {
    pub layout: VerticalLayout,
    pub primitives: Vec<Primitive>,
}

/// Run the full geometry pipeline for one tower.
///
/// Fails only on a malformed label base; missing numeric fields and a
/// degenerate vertical span just shrink the output.
pub fn render_tower(
    tower: &TowerSpec,
    config: &GeometryConfig,
) -> Result<TowerDrawing, LayoutError> {
    let labels = tower.leg_records.iter().map(|r| r.label_raw.as_str());
    let layout = compute_layout(&tower.name, labels, config)?;

    let mut primitives = Vec::new();

    // one horizontal level line per distinct variant
    for record in distinct_records(&tower.leg_records) {
        let Some(y) = layout.y_of(&record.label_raw) else {
            continue;
        };
        let half = record.ground_distance.unwrap_or(config.level_half_length);
        let layer = if crate::parse::parse_offset(&record.label_raw).is_some() {
            Layer::Offset
        } else {
            Layer::Base
        };
        primitives.push(Primitive::Segment {
            p1: dvec2(-half, y),
            p2: dvec2(half, y),
            layer,
        });
    }

    // vertical centerline over the full extent
    if let Some((y_min, y_max)) = layout.extent() {
        primitives.push(Primitive::Segment {
            p1: dvec2(0.0, y_min - config.angled_margin),
            p2: dvec2(0.0, y_max + config.angled_margin),
            layer: Layer::Center,
        });
    }

    // slope-dependent geometry only exists when the angled lines do
    if let Some(lines) = build_angled_lines(&layout, &tower.leg_records, config) {
        primitives.extend(lines.primitives());
        primitives.extend(build_markers(&layout, &tower.leg_records, &lines, config));
        primitives.extend(build_boxes(&layout, &tower.leg_records, &lines, config));
    } else {
        debug!("tower {}: no angled geometry", tower.name);
    }

    Ok(TowerDrawing { layout, primitives })
}

/// Records filtered down to the first occurrence of each label, in order.
pub(crate) fn distinct_records(records: &[LegRecord]) -> Vec<&LegRecord> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.label_raw.as_str()))
        .collect()
}
