//! The tabular input boundary.
//!
//! Reads the diagrams CSV and groups its rows into [`TowerSpec`]s, one per
//! distinct `Tower Type` in first-seen order. Numeric cells are free text in
//! the source (comma or dot decimals, often blank) and parse leniently to
//! `None`; the fixed drawing scale is applied exactly once, here.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::errors::TableError;
use crate::log::debug;
use crate::parse::parse_numeric_cell;
use crate::types::{LegRecord, TowerSpec};

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(rename = "Tower Type")]
    tower_type: String,
    #[serde(rename = "Leg Type")]
    leg_type: String,
    #[serde(rename = "distance on the ground", default)]
    ground_distance: String,
    #[serde(rename = "square half-diagonal", default)]
    square_half_diagonal: String,
}

/// Read every tower from a CSV file, scaling numeric cells into drawing
/// units.
pub fn load_towers(path: &Path, scale: f64) -> Result<Vec<TowerSpec>, TableError> {
    let file = std::fs::File::open(path)?;
    read_towers(file, scale)
}

/// Read every tower from CSV data, scaling numeric cells into drawing
/// units. Row order within a tower is preserved.
pub fn read_towers<R: Read>(reader: R, scale: f64) -> Result<Vec<TowerSpec>, TableError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut towers: Vec<TowerSpec> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for row in csv_reader.deserialize() {
        let row: Row = row?;
        let record = LegRecord {
            label_raw: row.leg_type,
            ground_distance: parse_numeric_cell(&row.ground_distance).map(|v| v * scale),
            square_half_diagonal: parse_numeric_cell(&row.square_half_diagonal).map(|v| v * scale),
        };
        let index = *index_by_name.entry(row.tower_type.clone()).or_insert_with(|| {
            towers.push(TowerSpec {
                name: row.tower_type,
                leg_records: Vec::new(),
            });
            towers.len() - 1
        });
        towers[index].leg_records.push(record);
    }

    debug!(
        "loaded {} towers, {} records",
        towers.len(),
        towers.iter().map(|t| t.leg_records.len()).sum::<usize>()
    );
    Ok(towers)
}
