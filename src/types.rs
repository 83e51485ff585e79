//! Core data model: leg records, drawing primitives, layers, configuration.

use glam::DVec2;

/// One row of the source table belonging to one tower.
///
/// Numeric fields are already converted to drawing units (the fixed linear
/// scale is applied once at the table boundary, see [`crate::table`]).
/// Missing or unparseable cells are `None`, never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct LegRecord {
    /// The leg-type label exactly as written in the table, e.g. `"- 3 / +0,70"`.
    pub label_raw: String,
    /// Horizontal distance from the tower centerline to the leg foot.
    pub ground_distance: Option<f64>,
    /// Half-diagonal of the leg's base square, used for goalpost tick width.
    pub square_half_diagonal: Option<f64>,
}

/// One named tower: an ordered group of leg records.
///
/// Record order is the source-table order; it affects presentation (label
/// stacking) but never geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct TowerSpec {
    pub name: String,
    pub leg_records: Vec<LegRecord>,
}

/// Symbolic layer categories for downstream grouping. Purely a tag; carries
/// no geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Base-level variants (no offset) and their boxes.
    Base,
    /// Variants that carry a `/`-offset.
    Offset,
    /// The vertical centerline at X = 0.
    Center,
    /// The two mirrored inclined reference lines.
    Angled,
}

impl Layer {
    pub const ALL: [Layer; 4] = [Layer::Base, Layer::Offset, Layer::Center, Layer::Angled];

    /// DXF layer name.
    pub fn name(self) -> &'static str {
        match self {
            Layer::Base => "levels",
            Layer::Offset => "offsets",
            Layer::Center => "axis",
            Layer::Angled => "batter",
        }
    }

    /// AutoCAD color index for the layer.
    pub fn aci_color(self) -> i32 {
        match self {
            Layer::Base => 7,
            Layer::Offset => 3,
            Layer::Center => 8,
            Layer::Angled => 1,
        }
    }
}

/// A drawing primitive with its layer tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Segment {
        p1: DVec2,
        p2: DVec2,
        layer: Layer,
    },
    Polyline {
        points: Vec<DVec2>,
        layer: Layer,
    },
}

impl Primitive {
    pub fn layer(&self) -> Layer {
        match self {
            Primitive::Segment { layer, .. } => *layer,
            Primitive::Polyline { layer, .. } => *layer,
        }
    }

    /// The same primitive mirrored across the vertical centerline (X = 0).
    pub fn mirrored_x(&self) -> Primitive {
        let flip = |p: DVec2| DVec2::new(-p.x, p.y);
        match self {
            Primitive::Segment { p1, p2, layer } => Primitive::Segment {
                p1: flip(*p1),
                p2: flip(*p2),
                layer: *layer,
            },
            Primitive::Polyline { points, layer } => Primitive::Polyline {
                points: points.iter().copied().map(flip).collect(),
                layer: *layer,
            },
        }
    }
}

/// All fixed drawing constants, in drawing units.
///
/// The defaults reproduce the house drawing style; they were module-level
/// constants in earlier revisions and are an explicit parameter now so one
/// pipeline serves every tower.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryConfig {
    /// Drawing units per source unit (1000 turns meters into millimeters).
    /// Also the vertical distance between consecutive whole base levels.
    pub unit_scale: f64,
    /// How far the angled lines extend past the highest leg level, measured
    /// vertically along the same slope.
    pub angled_margin: f64,
    /// Half the height of a goalpost tick mark.
    pub tick_half_height: f64,
    /// Half the width of a slanted box.
    pub box_half_width: f64,
    /// Height of a slanted box.
    pub box_height: f64,
    /// Gap between a level line and the bottom edge of its slanted box.
    pub box_clearance: f64,
    /// Half-length of a level line when the record has no ground distance.
    pub level_half_length: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        GeometryConfig {
            unit_scale: 1000.0,
            angled_margin: 1200.0,
            tick_half_height: 100.0,
            box_half_width: 353.0,
            box_height: 400.0,
            box_clearance: 100.0,
            level_half_length: 2000.0,
        }
    }
}
