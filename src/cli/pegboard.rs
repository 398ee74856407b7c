//! Pegboard command implementation.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::{CutError, Result};
use crate::output::{display_path, plural, Printer};
use crate::shapes::{pegboard_document, PegboardDrawing, PegboardLayout, PegboardSpec};
use crate::svg::write_svg;

/// Generate a centered pegboard hole grid
#[derive(Args, Debug, Default)]
pub struct PegboardArgs {
    /// Board width (mm)
    #[arg(long)]
    pub board_width: Option<f64>,

    /// Board height (mm)
    #[arg(long)]
    pub board_height: Option<f64>,

    /// Hole width (mm)
    #[arg(long)]
    pub hole_width: Option<f64>,

    /// Hole height (mm)
    #[arg(long)]
    pub hole_height: Option<f64>,

    /// Horizontal hole pitch (mm)
    #[arg(long)]
    pub spacing_x: Option<f64>,

    /// Vertical hole pitch (mm)
    #[arg(long)]
    pub spacing_y: Option<f64>,

    /// Corner fillet diameter, 0 for square holes (mm)
    #[arg(long)]
    pub dogbone_diameter: Option<f64>,

    /// Stroke width (mm)
    #[arg(long)]
    pub stroke_width: Option<f64>,

    /// Output file
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the computed layout as JSON to stdout
    #[arg(long)]
    pub json: bool,
}

impl PegboardArgs {
    /// Merge flags over config values.
    fn resolve(&self, config: &Config) -> (PegboardDrawing, PathBuf) {
        let defaults = &config.pegboard;
        let drawing = PegboardDrawing {
            spec: PegboardSpec {
                board_width: self.board_width.unwrap_or(defaults.board_width),
                board_height: self.board_height.unwrap_or(defaults.board_height),
                hole_width: self.hole_width.unwrap_or(defaults.hole_width),
                hole_height: self.hole_height.unwrap_or(defaults.hole_height),
                spacing_x: self.spacing_x.unwrap_or(defaults.spacing_x),
                spacing_y: self.spacing_y.unwrap_or(defaults.spacing_y),
                dogbone_diameter: self.dogbone_diameter.unwrap_or(defaults.dogbone_diameter),
            },
            stroke_width: self.stroke_width.unwrap_or(defaults.stroke_width),
        };
        let output = self.output.clone().unwrap_or_else(|| defaults.output.clone());
        (drawing, output)
    }
}

pub fn run(args: PegboardArgs, config: &Config, printer: &Printer) -> Result<()> {
    let (drawing, output) = args.resolve(config);
    let spec = &drawing.spec;

    printer.status(
        "Generating",
        &format!(
            "pegboard {}x{}mm with {}x{}mm holes",
            spec.board_width, spec.board_height, spec.hole_width, spec.hole_height
        ),
    );

    let (document, layout) = pegboard_document(&drawing)?;
    write_svg(&document, &output)?;

    let summary = format!(
        "{} ({}, {})",
        display_path(&output),
        plural(layout.columns, "column", "columns"),
        plural(layout.rows, "row", "rows")
    );

    if args.json {
        printer.info("Wrote", &summary);
        print_layout(&layout)?;
    } else {
        println!("Peg board SVG generated: {}", summary);
    }
    Ok(())
}

fn print_layout(layout: &PegboardLayout) -> Result<()> {
    let to_stdout = |source: io::Error| CutError::OutputWriteFailed {
        path: PathBuf::from("<stdout>"),
        source,
    };

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, layout).map_err(|e| to_stdout(e.into()))?;
    writeln!(stdout).map_err(to_stdout)
}
