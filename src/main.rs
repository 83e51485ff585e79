//! Command-line driver: CSV in, one DXF skeleton per tower out.
//!
//! The driver owns everything the geometry core does not: reading the source
//! table, picking which towers to draw, placing leg-type text labels, and
//! writing the finished DXF files. A tower that fails (malformed label) is
//! reported and skipped; its siblings still render.

use std::path::PathBuf;

use clap::Parser;
use glam::dvec2;
use miette::{IntoDiagnostic, WrapErr};

use skeli::errors::TableError;
use skeli::render::dxf::{to_dxf, TextLabel};
use skeli::render::render_tower;
use skeli::table::load_towers;
use skeli::types::{GeometryConfig, TowerSpec};

/// Draw 2D elevation skeletons for transmission-tower leg configurations.
#[derive(Parser, Debug)]
#[command(name = "skeli", version, about)]
struct Args {
    /// Path to the diagrams CSV
    #[arg(long, default_value = "diagrams.csv")]
    csv: PathBuf,

    /// Draw only this tower type (e.g. "G5+8"); default is every tower
    #[arg(long)]
    tower: Option<String>,

    /// Directory for the generated DXF files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Drawing units per source unit (1000 turns meters into millimeters)
    #[arg(long, default_value_t = 1000.0)]
    scale: f64,
}

/// Install an env-filtered subscriber so `RUST_LOG=skeli=debug` shows the
/// layout and builder decisions. Safe to call more than once.
#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

fn main() -> miette::Result<()> {
    #[cfg(feature = "tracing")]
    init_tracing();

    let args = Args::parse();
    let config = GeometryConfig {
        unit_scale: args.scale,
        ..GeometryConfig::default()
    };

    let mut towers = load_towers(&args.csv, config.unit_scale)?;
    if let Some(wanted) = &args.tower {
        towers.retain(|t| &t.name == wanted);
        if towers.is_empty() {
            return Err(TableError::UnknownTower {
                tower: wanted.clone(),
            }
            .into());
        }
    }

    let mut failures = 0usize;
    for tower in &towers {
        match draw_tower(tower, &config, &args.out_dir) {
            Ok(path) => println!("wrote {}", path.display()),
            Err(report) => {
                failures += 1;
                eprintln!("{report:?}");
            }
        }
    }

    if failures > 0 {
        miette::bail!("{failures} of {} towers failed", towers.len());
    }
    Ok(())
}

fn draw_tower(
    tower: &TowerSpec,
    config: &GeometryConfig,
    out_dir: &std::path::Path,
) -> miette::Result<PathBuf> {
    let drawing = render_tower(tower, config)?;
    let texts = text_labels(tower, &drawing.layout, config);
    let dxf = to_dxf(&drawing.primitives, &texts);

    let file_name = format!("{}_skeleton.dxf", tower.name.replace(['/', '\\'], "-"));
    let path = out_dir.join(file_name);
    std::fs::write(&path, dxf)
        .into_diagnostic()
        .wrap_err_with(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// One text label per distinct variant, placed just past the right end of
/// its level line, plus a title above the drawing.
fn text_labels(
    tower: &TowerSpec,
    layout: &skeli::VerticalLayout,
    config: &GeometryConfig,
) -> Vec<TextLabel> {
    let text_height = 0.15 * config.unit_scale;
    let gap = 0.25 * config.unit_scale;

    let mut seen = std::collections::HashSet::new();
    let mut texts = Vec::new();
    for record in &tower.leg_records {
        if !seen.insert(record.label_raw.as_str()) {
            continue;
        }
        let Some(y) = layout.y_of(&record.label_raw) else {
            continue;
        };
        let half = record.ground_distance.unwrap_or(config.level_half_length);
        texts.push(TextLabel {
            text: record.label_raw.clone(),
            position: dvec2(half + gap, y + 0.2 * text_height),
            height: text_height,
        });
    }

    if let Some((_, y_max)) = layout.extent() {
        texts.push(TextLabel {
            text: format!("Σκέλη {}", tower.name),
            position: dvec2(0.0, y_max + config.angled_margin + text_height),
            height: 1.3 * text_height,
        });
    }
    texts
}

#[cfg(all(test, feature = "tracing"))]
mod tests {
    #[test]
    fn tracing_init_tolerates_repeat_calls() {
        super::init_tracing();
        super::init_tracing();
    }
}
