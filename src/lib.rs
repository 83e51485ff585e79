//! Layout and geometry synthesis for transmission-tower elevation skeletons.
//!
//! `skeli` turns a tabular description of tower leg variants into 2D drawing
//! primitives: one horizontal level line per leg variant, two mirrored
//! inclined "batter" reference lines, goalpost tick marks where those lines
//! cross a level, and slanted boxes at the base-level variants. A thin
//! binary driver reads the source CSV and serializes the primitives to DXF.
//!
//! The pipeline for one tower:
//!
//! 1. [`parse`] decomposes each leg-type label (`"- 3 / +0,70"`) into a base
//!    level and an optional fractional offset.
//! 2. [`layout`] assigns every distinct label a vertical coordinate.
//! 3. [`render`] derives the angled-line, marker and box geometry and
//!    returns a flat primitive list tagged with symbolic layers.
//!
//! Towers are independent of each other: a malformed label fails only its
//! own tower, and all geometry for one tower is a pure function of that
//! tower's records and a [`GeometryConfig`].

use pest_derive::Parser;

/// Pest parser for leg-type labels and numeric table cells.
#[derive(Parser)]
#[grammar = "leg_label.pest"]
pub struct LegLabelParser;

pub mod errors;
pub mod layout;
pub mod log;
pub mod parse;
pub mod render;
pub mod table;
pub mod types;

pub use layout::{compute_layout, VerticalLayout};
pub use render::{render_tower, TowerDrawing};
pub use types::{GeometryConfig, Layer, LegRecord, Primitive, TowerSpec};
