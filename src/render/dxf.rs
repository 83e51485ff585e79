//! Minimal DXF (R12) serialization of the primitive list.
//!
//! DXF is a sequence of group-code/value pairs, one per line. This writer
//! emits only what the skeleton drawings need: a LAYER table with one layer
//! per [`Layer`] category plus a text layer, LINE and POLYLINE entities, and
//! TEXT entities for the leg-type labels the driver places.

use glam::DVec2;

use crate::types::{Layer, Primitive};

/// Layer name for driver-placed text.
pub const TEXT_LAYER: &str = "labels";
/// AutoCAD color index for the text layer.
pub const TEXT_COLOR: i32 = 2;

/// A piece of text for the drawing, placed by the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub position: DVec2,
    pub height: f64,
}

/// Serialize primitives and text labels into one DXF document.
pub fn to_dxf(primitives: &[Primitive], texts: &[TextLabel]) -> String {
    let mut w = Writer::default();

    // layer table
    w.pair(0, "SECTION");
    w.pair(2, "TABLES");
    w.pair(0, "TABLE");
    w.pair(2, "LAYER");
    w.pair(70, Layer::ALL.len() + 1);
    for layer in Layer::ALL {
        w.layer(layer.name(), layer.aci_color());
    }
    w.layer(TEXT_LAYER, TEXT_COLOR);
    w.pair(0, "ENDTAB");
    w.pair(0, "ENDSEC");

    // entities
    w.pair(0, "SECTION");
    w.pair(2, "ENTITIES");
    for primitive in primitives {
        match primitive {
            Primitive::Segment { p1, p2, layer } => w.line(*p1, *p2, layer.name()),
            Primitive::Polyline { points, layer } => w.polyline(points, layer.name()),
        }
    }
    for label in texts {
        w.text(label);
    }
    w.pair(0, "ENDSEC");

    w.pair(0, "EOF");
    w.out
}

#[derive(Default)]
struct Writer {
    out: String,
}

impl Writer {
    fn pair(&mut self, code: i32, value: impl std::fmt::Display) {
        self.out.push_str(&format!("{code}\n{value}\n"));
    }

    fn layer(&mut self, name: &str, color: i32) {
        self.pair(0, "LAYER");
        self.pair(2, name);
        self.pair(70, 0);
        self.pair(62, color);
        self.pair(6, "CONTINUOUS");
    }

    fn line(&mut self, p1: DVec2, p2: DVec2, layer: &str) {
        self.pair(0, "LINE");
        self.pair(8, layer);
        self.pair(10, p1.x);
        self.pair(20, p1.y);
        self.pair(11, p2.x);
        self.pair(21, p2.y);
    }

    fn polyline(&mut self, points: &[DVec2], layer: &str) {
        self.pair(0, "POLYLINE");
        self.pair(8, layer);
        // vertices follow
        self.pair(66, 1);
        self.pair(70, 0);
        for p in points {
            self.pair(0, "VERTEX");
            self.pair(8, layer);
            self.pair(10, p.x);
            self.pair(20, p.y);
        }
        self.pair(0, "SEQEND");
    }

    fn text(&mut self, label: &TextLabel) {
        self.pair(0, "TEXT");
        self.pair(8, TEXT_LAYER);
        self.pair(10, label.position.x);
        self.pair(20, label.position.y);
        self.pair(40, label.height);
        self.pair(1, &label.text);
    }
}
