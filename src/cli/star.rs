//! Star command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::shapes::{star_document, StarDrawing};
use crate::svg::write_svg;

/// Generate a three-point star with tip circles
#[derive(Args, Debug, Default)]
pub struct StarArgs {
    /// Canvas width (in)
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height (in)
    #[arg(long)]
    pub height: Option<f64>,

    /// Distance from center to each tip (in)
    #[arg(long)]
    pub outer_radius: Option<f64>,

    /// Inner radius as a percentage of the outer radius
    #[arg(long)]
    pub inner_radius_pct: Option<f64>,

    /// Radius of the circle placed inside each tip (in)
    #[arg(long)]
    pub circle_radius: Option<f64>,

    /// Stroke width (in)
    #[arg(long)]
    pub stroke_width: Option<f64>,

    /// Output file
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl StarArgs {
    /// Merge flags over config values.
    fn resolve(&self, config: &Config) -> (StarDrawing, PathBuf) {
        let defaults = &config.star;
        let drawing = StarDrawing {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            outer_radius: self.outer_radius.unwrap_or(defaults.outer_radius),
            inner_radius_pct: self.inner_radius_pct.unwrap_or(defaults.inner_radius_pct),
            circle_radius: self.circle_radius.unwrap_or(defaults.circle_radius),
            stroke_width: self.stroke_width.unwrap_or(defaults.stroke_width),
        };
        let output = self.output.clone().unwrap_or_else(|| defaults.output.clone());
        (drawing, output)
    }
}

pub fn run(args: StarArgs, config: &Config, printer: &Printer) -> Result<()> {
    let (drawing, output) = args.resolve(config);

    printer.status(
        "Generating",
        &format!(
            "star (outer {}in, inner {}%) on {}x{}in",
            drawing.outer_radius, drawing.inner_radius_pct, drawing.width, drawing.height
        ),
    );

    let document = star_document(&drawing)?;
    write_svg(&document, &output)?;

    println!(
        "3-point star SVG generated (all measurements in inches): {}",
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
    fn test_star_writes_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("star.svg");

        let args = StarArgs {
            output: Some(output.clone()),
            ..Default::default()
        };
        run(args, &Config::default(), &Printer::quiet()).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("width=\"60in\""));
        assert!(content.contains("<path d=\"M 30,2 L "));
        assert_eq!(content.matches("<circle").count(), 3);
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.star.outer_radius = 10.0;
        config.star.width = 40.0;

        let args = StarArgs {
            outer_radius: Some(12.0),
            ..Default::default()
        };
        let (drawing, output) = args.resolve(&config);

        assert_eq!(drawing.outer_radius, 12.0);
        assert_eq!(drawing.width, 40.0);
        assert_eq!(output, PathBuf::from("star.svg"));
    }

    #[test]
    fn test_invalid_parameters_write_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("star.svg");

        let args = StarArgs {
            inner_radius_pct: Some(0.0),
            output: Some(output.clone()),
            ..Default::default()
        };

        assert!(run(args, &Config::default(), &Printer::quiet()).is_err());
        assert!(!output.exists());
    }
}
