use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use urania::aspects::AspectCatalog;
use urania::ephemeris::{BodyId, TRADITIONAL_BODIES};

/// Resolved chart settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub include_minor: bool,
    /// Aspect name -> orb in degrees
    pub orbs: HashMap<String, f64>,
    /// Bodies kept from a position layer; empty keeps everything
    pub bodies: Vec<BodyId>,
    pub pretty: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            include_minor: false,
            orbs: HashMap::new(),
            bodies: TRADITIONAL_BODIES.to_vec(),
            pretty: true,
        }
    }
}

impl ChartConfig {
    /// Catalog with the configured aspect set and orb overrides applied.
    pub fn aspect_catalog(&self) -> anyhow::Result<AspectCatalog> {
        let base = if self.include_minor {
            AspectCatalog::with_minor()
        } else {
            AspectCatalog::major()
        };
        base.with_orb_overrides(&self.orbs)
            .context("Invalid [aspects.orbs] entry in chart.toml")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AspectsToml {
    #[serde(default)]
    include_minor: bool,
    #[serde(default)]
    orbs: HashMap<String, f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct BodiesToml {
    #[serde(default)]
    include: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
struct OutputToml {
    #[serde(default = "default_pretty")]
    pretty: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    aspects: AspectsToml,
    #[serde(default)]
    bodies: BodiesToml,
    #[serde(default)]
    output: OutputToml,
}

const CONFIG_PATHS: [&str; 2] = ["configs/chart.toml", "../../configs/chart.toml"];

/// Try the common relative paths for `configs/chart.toml`.
pub fn find_chart_toml() -> Option<PathBuf> {
    CONFIG_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

pub fn parse_chart_config(text: &str) -> anyhow::Result<ChartConfig> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse chart.toml: {e}"))?;

    for (name, orb) in &root.aspects.orbs {
        if !orb.is_finite() || *orb < 0.0 {
            anyhow::bail!("aspects.orbs.{name} must be a non-negative number of degrees, got {orb}");
        }
    }

    let bodies = match root.bodies.include {
        Some(ids) => ids.into_iter().map(BodyId::from).collect(),
        None => TRADITIONAL_BODIES.to_vec(),
    };

    let config = ChartConfig {
        include_minor: root.aspects.include_minor,
        orbs: root.aspects.orbs,
        bodies,
        pretty: root.output.pretty,
    };
    // Surface unknown aspect names at load time rather than at first use
    config.aspect_catalog()?;
    Ok(config)
}

pub fn load_chart_config_from(path: &Path) -> anyhow::Result<ChartConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read chart config {}", path.display()))?;
    parse_chart_config(&text).with_context(|| format!("Invalid chart config {}", path.display()))
}

/// Load `configs/chart.toml` if present, otherwise the defaults.
pub fn load_chart_config() -> anyhow::Result<ChartConfig> {
    match find_chart_toml() {
        Some(path) => {
            log::info!("Loading chart config from {}", path.display());
            load_chart_config_from(&path)
        }
        None => {
            log::info!("No chart.toml found in {:?}; using defaults", CONFIG_PATHS);
            Ok(ChartConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use urania::aspects::AspectKind;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_chart_config("").unwrap();
        assert_eq!(config, ChartConfig::default());
        assert_eq!(config.bodies.len(), 10);
        assert_eq!(config.aspect_catalog().unwrap(), AspectCatalog::major());
    }

    #[test]
    fn test_full_config() {
        let config = parse_chart_config(
            r#"
[aspects]
include_minor = true

[aspects.orbs]
trine = 6.0
quincunx = 2.5

[bodies]
include = ["sun", "moon", "chiron", "ceres"]

[output]
pretty = false
"#,
        )
        .unwrap();

        assert!(config.include_minor);
        assert!(!config.pretty);
        assert_eq!(
            config.bodies,
            vec![
                BodyId::Sun,
                BodyId::Moon,
                BodyId::Chiron,
                BodyId::Other("ceres".to_string())
            ]
        );

        let catalog = config.aspect_catalog().unwrap();
        let orb_of = |kind: AspectKind| {
            catalog
                .definitions()
                .iter()
                .find(|d| d.kind == kind)
                .map(|d| d.orb)
        };
        assert_eq!(orb_of(AspectKind::Trine), Some(6.0));
        assert_eq!(orb_of(AspectKind::Quincunx), Some(2.5));
        assert_eq!(orb_of(AspectKind::Square), Some(7.0));
    }

    #[test]
    fn test_unknown_aspect_rejected() {
        let err = parse_chart_config("[aspects.orbs]\nnovile = 1.0\n").unwrap_err();
        assert!(format!("{err:#}").contains("novile"));
    }

    #[test]
    fn test_negative_orb_rejected() {
        assert!(parse_chart_config("[aspects.orbs]\ntrine = -1.0\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\npretty = false").unwrap();
        let config = load_chart_config_from(file.path()).unwrap();
        assert!(!config.pretty);
        assert!(!config.include_minor);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_chart_config_from(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Could not read chart config"));
    }
}
