use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::ephemeris::BodyId;
use crate::error::ChartError;

/// Aspect type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Semisextile,
    Semisquare,
    Sesquiquadrate,
    Quincunx,
    Quintile,
    Biquintile,
}

pub const MAJOR_ASPECTS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
];

pub const MINOR_ASPECTS: [AspectKind; 6] = [
    AspectKind::Semisextile,
    AspectKind::Semisquare,
    AspectKind::Sesquiquadrate,
    AspectKind::Quincunx,
    AspectKind::Quintile,
    AspectKind::Biquintile,
];

impl AspectKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Opposition => "opposition",
            Self::Trine => "trine",
            Self::Square => "square",
            Self::Sextile => "sextile",
            Self::Semisextile => "semisextile",
            Self::Semisquare => "semisquare",
            Self::Sesquiquadrate => "sesquiquadrate",
            Self::Quincunx => "quincunx",
            Self::Quintile => "quintile",
            Self::Biquintile => "biquintile",
        }
    }

    /// Ideal separation in degrees.
    pub const fn angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Trine => 120.0,
            Self::Square => 90.0,
            Self::Sextile => 60.0,
            Self::Semisextile => 30.0,
            Self::Semisquare => 45.0,
            Self::Sesquiquadrate => 135.0,
            Self::Quincunx => 150.0,
            Self::Quintile => 72.0,
            Self::Biquintile => 144.0,
        }
    }

    pub const fn default_orb(self) -> f64 {
        match self {
            Self::Conjunction | Self::Opposition | Self::Trine => 8.0,
            Self::Square => 7.0,
            Self::Sextile => 6.0,
            Self::Quincunx => 3.0,
            Self::Semisextile | Self::Semisquare | Self::Sesquiquadrate => 2.0,
            Self::Quintile | Self::Biquintile => 1.5,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        MAJOR_ASPECTS
            .iter()
            .chain(MINOR_ASPECTS.iter())
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of an aspect catalog: ideal angle plus tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    pub angle: f64,
    pub orb: f64,
}

impl AspectDefinition {
    pub const fn new(kind: AspectKind, angle: f64, orb: f64) -> Self {
        Self { kind, angle, orb }
    }

    pub const fn standard(kind: AspectKind) -> Self {
        Self::new(kind, kind.angle(), kind.default_orb())
    }
}

/// Ordered list of aspect definitions.
///
/// Order matters: when two entries match a separation equally well, the one
/// defined first wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectCatalog {
    definitions: Vec<AspectDefinition>,
}

impl AspectCatalog {
    pub fn new(definitions: Vec<AspectDefinition>) -> Self {
        Self { definitions }
    }

    /// Conjunction, opposition, trine, square, sextile with their standard orbs.
    pub fn major() -> Self {
        Self::new(MAJOR_ASPECTS.iter().map(|&k| AspectDefinition::standard(k)).collect())
    }

    /// Major aspects followed by the minor ones.
    pub fn with_minor() -> Self {
        Self::new(
            MAJOR_ASPECTS
                .iter()
                .chain(MINOR_ASPECTS.iter())
                .map(|&k| AspectDefinition::standard(k))
                .collect(),
        )
    }

    /// Replace orbs by aspect name ("trine" -> 6.0, ...).
    pub fn with_orb_overrides(mut self, orbs: &HashMap<String, f64>) -> Result<Self, ChartError> {
        for (name, &orb) in orbs {
            let kind = AspectKind::from_name(name).ok_or_else(|| ChartError::UnknownAspect {
                name: name.clone(),
                valid: MAJOR_ASPECTS
                    .iter()
                    .chain(MINOR_ASPECTS.iter())
                    .map(|k| k.name().to_string())
                    .collect(),
            })?;
            for def in self.definitions.iter_mut().filter(|d| d.kind == kind) {
                def.orb = orb;
            }
        }
        Ok(self)
    }

    pub fn definitions(&self) -> &[AspectDefinition] {
        &self.definitions
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Largest separation any entry can still accept.
    pub fn max_reach(&self) -> f64 {
        self.definitions
            .iter()
            .map(|d| d.angle + d.orb)
            .fold(0.0, f64::max)
    }
}

impl Default for AspectCatalog {
    fn default() -> Self {
        Self::major()
    }
}

/// Core aspect information
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectCore {
    pub kind: AspectKind,
    /// Ideal angle of the matched entry
    pub exact_angle: f64,
    /// |separation - exact_angle|, unrounded
    pub orb: f64,
    /// Within 0.1 degrees of exact
    pub is_exact: bool,
}

/// Which chart layers an aspect connects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectRelation {
    Natal,
    TransitToNatal,
    TransitToTransit,
}

/// An aspect between two bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedAspect {
    /// First body; the transiting one for cross-layer aspects
    pub from: BodyId,
    pub to: BodyId,
    pub aspect: AspectCore,
    pub relation: AspectRelation,
}

impl DetectedAspect {
    pub fn is_transit_to_natal(&self) -> bool {
        self.relation == AspectRelation::TransitToNatal
    }
}
