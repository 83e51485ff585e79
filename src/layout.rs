//! Vertical layout: one Y coordinate per distinct leg-type label.
//!
//! Level `"N"` sits at Y = 0, a numeric base `k` at `-scale * k` (levels
//! below `N` carry negative numbers, so they end up above it), and a
//! `/`-offset shifts the label a fraction of one level further down. The
//! layout is a pure function of the tower's label sequence: no sibling tower
//! and no numeric record field ever feeds into it.

use std::collections::HashMap;

use miette::NamedSource;

use crate::errors::LayoutError;
use crate::log::debug;
use crate::parse::{base_span, normalize_base, parse_numeric_cell, parse_offset};
use crate::types::GeometryConfig;

/// Y coordinates for every base and every full label of one tower.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalLayout {
    /// Distinct bases in first-seen order (presentation order).
    pub base_order: Vec<String>,
    /// Y of each base level.
    pub y_by_base: HashMap<String, f64>,
    /// Y of each full label, offsets applied.
    pub y_by_label: HashMap<String, f64>,
}

impl VerticalLayout {
    /// Y coordinate of a label, by its raw text.
    pub fn y_of(&self, label: &str) -> Option<f64> {
        self.y_by_label.get(label).copied()
    }

    /// Vertical extent `(min, max)` over all labels, `None` when empty.
    pub fn extent(&self) -> Option<(f64, f64)> {
        let mut ys = self.y_by_label.values().copied();
        let first = ys.next()?;
        let (min, max) = ys.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
        Some((min, max))
    }
}

/// Compute the vertical layout for one tower's ordered label sequence.
///
/// Deterministic and idempotent; repeated labels keep their first Y. A base
/// that is neither `"N"` nor numeric fails the whole tower with
/// [`LayoutError::MalformedBase`] - substituting a default height would
/// silently draw the leg in the wrong place.
pub fn compute_layout<'a, I>(
    tower: &str,
    labels: I,
    config: &GeometryConfig,
) -> Result<VerticalLayout, LayoutError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut layout = VerticalLayout {
        base_order: Vec::new(),
        y_by_base: HashMap::new(),
        y_by_label: HashMap::new(),
    };

    for label in labels {
        let base = normalize_base(label);
        if !layout.y_by_base.contains_key(&base) {
            let y_base = base_level_y(tower, label, &base, config)?;
            debug!("tower {tower}: base {base:?} at y={y_base}");
            layout.base_order.push(base.clone());
            layout.y_by_base.insert(base.clone(), y_base);
        }
        let y_base = layout.y_by_base[&base];
        let offset = parse_offset(label);
        let y = y_base - offset.unwrap_or(0.0) * config.unit_scale;
        layout.y_by_label.insert(label.to_string(), y);
    }

    Ok(layout)
}

fn base_level_y(
    tower: &str,
    label: &str,
    base: &str,
    config: &GeometryConfig,
) -> Result<f64, LayoutError> {
    if base == "N" {
        return Ok(0.0);
    }
    match parse_numeric_cell(base) {
        Some(level) => Ok(-config.unit_scale * level),
        None => Err(LayoutError::MalformedBase {
            base: base.to_string(),
            tower: tower.to_string(),
            src: NamedSource::new(format!("{tower} leg type"), label.to_string()),
            span: base_span(label).into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(labels: &[&str]) -> VerticalLayout {
        compute_layout("T1", labels.iter().copied(), &GeometryConfig::default()).unwrap()
    }

    #[test]
    fn plain_bases() {
        let l = layout(&["N", "-3", "6"]);
        assert_eq!(l.y_of("N"), Some(0.0));
        assert_eq!(l.y_of("-3"), Some(3000.0));
        assert_eq!(l.y_of("6"), Some(-6000.0));
        assert_eq!(l.base_order, vec!["N", "-3", "6"]);
    }

    #[test]
    fn offset_shifts_below_its_base() {
        let l = layout(&["-1", "- 1 / +0,70"]);
        assert_eq!(l.y_of("-1"), Some(1000.0));
        let y = l.y_of("- 1 / +0,70").unwrap();
        assert!((y - 300.0).abs() < 1e-9, "y = {y}");
    }

    #[test]
    fn offset_label_alone_creates_its_base() {
        let l = layout(&["- 1 / +0,70"]);
        assert_eq!(l.y_by_base["-1"], 1000.0);
        assert_eq!(l.base_order, vec!["-1"]);
    }

    #[test]
    fn comma_decimal_base() {
        let l = layout(&["1,5"]);
        assert_eq!(l.y_of("1,5"), Some(-1500.0));
    }

    #[test]
    fn formatting_variants_share_a_base() {
        let l = layout(&["-3", "- 3 / 0,5", "-3 / 0.5"]);
        assert_eq!(l.base_order, vec!["-3"]);
        let a = l.y_of("- 3 / 0,5").unwrap();
        let b = l.y_of("-3 / 0.5").unwrap();
        assert!((a - b).abs() < 1e-9);
        assert!((a - 2500.0).abs() < 1e-9);
    }

    #[test]
    fn tower_without_n_is_permitted() {
        let l = layout(&["-2", "3"]);
        assert_eq!(l.y_of("-2"), Some(2000.0));
        assert_eq!(l.y_of("3"), Some(-3000.0));
    }

    #[test]
    fn malformed_base_fails_the_tower() {
        let err = compute_layout(
            "T9",
            ["N", "xx / 0,5"].into_iter(),
            &GeometryConfig::default(),
        )
        .unwrap_err();
        let LayoutError::MalformedBase { base, tower, .. } = err;
        assert_eq!(base, "xx");
        assert_eq!(tower, "T9");
    }

    #[test]
    fn deterministic_and_idempotent() {
        let labels = ["N", "- 3 / +0,70", "6", "1,5"];
        let a = layout(&labels);
        let b = layout(&labels);
        assert_eq!(a, b);
    }

    #[test]
    fn extent_covers_all_labels() {
        let l = layout(&["N", "-3", "6"]);
        assert_eq!(l.extent(), Some((-6000.0, 3000.0)));
    }
}
