//! Project configuration (cutpath.yaml) parsing.
//!
//! The config file holds per-generator defaults. Every field is optional;
//! missing fields fall back to the built-in example templates, and command
//! line flags override both.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CutError, Result};

/// Default config filename, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "cutpath.yaml";

const MM_PER_INCH: f64 = 25.4;

/// Project configuration loaded from cutpath.yaml.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub star: StarConfig,
    pub amoeba: AmoebaConfig,
    pub pegboard: PegboardConfig,
}

/// Star defaults; lengths in inches.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StarConfig {
    pub width: f64,
    pub height: f64,
    pub outer_radius: f64,
    pub inner_radius_pct: f64,
    pub circle_radius: f64,
    pub stroke_width: f64,
    pub output: PathBuf,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            width: 60.0,
            height: 60.0,
            outer_radius: 28.0,
            inner_radius_pct: 20.0,
            circle_radius: 7.0,
            stroke_width: 0.05,
            output: PathBuf::from("star.svg"),
        }
    }
}

/// Amoeba defaults; lengths in inches.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AmoebaConfig {
    pub width: f64,
    pub height: f64,
    pub lobe_radius: f64,
    pub lobe_tip_radius: f64,
    pub branch_thickness: f64,
    pub curve_pct: f64,
    pub lobe_count: u32,
    pub stroke_width: f64,
    pub output: PathBuf,
}

impl Default for AmoebaConfig {
    fn default() -> Self {
        Self {
            width: 60.0,
            height: 60.0,
            lobe_radius: 25.0,
            lobe_tip_radius: 7.0,
            branch_thickness: 14.0,
            curve_pct: 25.0,
            lobe_count: crate::shapes::amoeba::DEFAULT_LOBE_COUNT,
            stroke_width: 0.05,
            output: PathBuf::from("amoeba.svg"),
        }
    }
}

/// Pegboard defaults; lengths in millimetres.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PegboardConfig {
    pub board_width: f64,
    pub board_height: f64,
    pub hole_width: f64,
    pub hole_height: f64,
    pub spacing_x: f64,
    pub spacing_y: f64,
    pub dogbone_diameter: f64,
    pub stroke_width: f64,
    pub output: PathBuf,
}

impl Default for PegboardConfig {
    fn default() -> Self {
        // 30x60 in board, 3x5 in pitch, 1/8 in dogbones
        Self {
            board_width: 30.0 * MM_PER_INCH,
            board_height: 60.0 * MM_PER_INCH,
            hole_width: 13.0,
            hole_height: 60.0,
            spacing_x: 3.0 * MM_PER_INCH,
            spacing_y: 5.0 * MM_PER_INCH,
            dogbone_diameter: 0.125 * MM_PER_INCH,
            stroke_width: 0.1,
            output: PathBuf::from("pegboard.svg"),
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CutError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| CutError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Resolve the config to use: an explicit path must exist, otherwise
    /// `cutpath.yaml` in `dir` is used when present, else built-in defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_partial_section() {
        let yaml = r#"
star:
  outer_radius: 20
  output: out/star.svg
pegboard:
  dogbone_diameter: 0
"#;
        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.star.outer_radius, 20.0);
        assert_eq!(config.star.output, PathBuf::from("out/star.svg"));
        // Untouched fields keep their defaults
        assert_eq!(config.star.circle_radius, 7.0);
        assert_eq!(config.amoeba, AmoebaConfig::default());
        assert_eq!(config.pegboard.dogbone_diameter, 0.0);
        assert_eq!(config.pegboard.hole_height, 60.0);
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let err = Config::parse("star:\n  radius: 3\n").unwrap_err();
        assert!(matches!(err, CutError::Config { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_type() {
        assert!(Config::parse("amoeba:\n  lobe_count: many\n").is_err());
    }

    #[test]
    fn test_pegboard_defaults_in_mm() {
        let pegboard = PegboardConfig::default();
        assert!((pegboard.board_width - 762.0).abs() < 1e-9);
        assert!((pegboard.spacing_y - 127.0).abs() < 1e-9);
        assert!((pegboard.dogbone_diameter - 3.175).abs() < 1e-9);
    }

    #[test]
    fn test_discover_prefers_explicit_path() {
        let dir = tempdir().unwrap();
        let explicit = dir.path().join("custom.yaml");
        std::fs::write(&explicit, "amoeba:\n  lobe_count: 5\n").unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "amoeba:\n  lobe_count: 4\n").unwrap();

        let config = Config::discover(Some(&explicit), dir.path()).unwrap();
        assert_eq!(config.amoeba.lobe_count, 5);

        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.amoeba.lobe_count, 4);
    }

    #[test]
    fn test_discover_without_file() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::discover(None, dir.path()).unwrap(), Config::default());

        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            Config::discover(Some(&missing), dir.path()),
            Err(CutError::Io { .. })
        ));
    }
}
