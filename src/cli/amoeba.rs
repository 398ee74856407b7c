//! Amoeba command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::shapes::{amoeba_document, AmoebaDrawing};
use crate::svg::write_svg;

/// Generate a lobed amoeba outline
#[derive(Args, Debug, Default)]
pub struct AmoebaArgs {
    /// Canvas width (in)
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height (in)
    #[arg(long)]
    pub height: Option<f64>,

    /// Distance from center to the end of each lobe (in)
    #[arg(long)]
    pub lobe_radius: Option<f64>,

    /// Radius of the round cap on each lobe (in)
    #[arg(long)]
    pub lobe_tip_radius: Option<f64>,

    /// Branch width where lobes meet the hub (in)
    #[arg(long)]
    pub branch_thickness: Option<f64>,

    /// Curve smoothness as a percentage of the lobe radius
    #[arg(long)]
    pub curve_pct: Option<f64>,

    /// Number of lobes
    #[arg(long)]
    pub lobes: Option<u32>,

    /// Stroke width (in)
    #[arg(long)]
    pub stroke_width: Option<f64>,

    /// Output file
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl AmoebaArgs {
    /// Merge flags over config values.
    fn resolve(&self, config: &Config) -> (AmoebaDrawing, PathBuf) {
        let defaults = &config.amoeba;
        let drawing = AmoebaDrawing {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            lobe_radius: self.lobe_radius.unwrap_or(defaults.lobe_radius),
            lobe_tip_radius: self.lobe_tip_radius.unwrap_or(defaults.lobe_tip_radius),
            branch_thickness: self.branch_thickness.unwrap_or(defaults.branch_thickness),
            curve_pct: self.curve_pct.unwrap_or(defaults.curve_pct),
            lobe_count: self.lobes.unwrap_or(defaults.lobe_count),
            stroke_width: self.stroke_width.unwrap_or(defaults.stroke_width),
        };
        let output = self.output.clone().unwrap_or_else(|| defaults.output.clone());
        (drawing, output)
    }
}

pub fn run(args: AmoebaArgs, config: &Config, printer: &Printer) -> Result<()> {
    let (drawing, output) = args.resolve(config);

    printer.status(
        "Generating",
        &format!(
            "{}-lobed amoeba (lobe {}in, tip {}in) on {}x{}in",
            drawing.lobe_count,
            drawing.lobe_radius,
            drawing.lobe_tip_radius,
            drawing.width,
            drawing.height
        ),
    );

    let document = amoeba_document(&drawing)?;
    write_svg(&document, &output)?;

    println!(
        "{}-lobed amoeba SVG generated (all measurements in inches): {}",
        drawing.lobe_count,
        display_path(&output)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_amoeba_writes_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("amoeba.svg");

        let args = AmoebaArgs {
            output: Some(output.clone()),
            ..Default::default()
        };
        run(args, &Config::default(), &Printer::quiet()).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("viewBox=\"0 0 60 60\""));
        assert_eq!(content.matches(" A 7,7 0 0 1 ").count(), 3);
        assert_eq!(content.matches(" A 7,7 0 0 0 ").count(), 3);
    }

    #[test]
    fn test_lobe_count_from_config() {
        let mut config = Config::default();
        config.amoeba.lobe_count = 5;

        let (drawing, _) = AmoebaArgs::default().resolve(&config);
        assert_eq!(drawing.lobe_count, 5);

        let args = AmoebaArgs {
            lobes: Some(4),
            ..Default::default()
        };
        let (drawing, _) = args.resolve(&config);
        assert_eq!(drawing.lobe_count, 4);
    }

    #[test]
    fn test_rejects_tip_larger_than_lobe() {
        let dir = tempdir().unwrap();
        let args = AmoebaArgs {
            lobe_tip_radius: Some(30.0),
            output: Some(dir.path().join("amoeba.svg")),
            ..Default::default()
        };

        assert!(run(args, &Config::default(), &Printer::quiet()).is_err());
    }
}
