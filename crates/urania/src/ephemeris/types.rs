use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Identifier of a tracked point.
///
/// Serialized as the lowercase id string ("sun", "north_node", ...). Ids outside
/// the catalog are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BodyId {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    SouthNode,
    Chiron,
    Ascendant,
    Midheaven,
    Other(String),
}

/// The ten bodies every chart carries.
pub const TRADITIONAL_BODIES: [BodyId; 10] = [
    BodyId::Sun,
    BodyId::Moon,
    BodyId::Mercury,
    BodyId::Venus,
    BodyId::Mars,
    BodyId::Jupiter,
    BodyId::Saturn,
    BodyId::Uranus,
    BodyId::Neptune,
    BodyId::Pluto,
];

impl BodyId {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
            Self::NorthNode => "north_node",
            Self::SouthNode => "south_node",
            Self::Chiron => "chiron",
            Self::Ascendant => "asc",
            Self::Midheaven => "mc",
            Self::Other(id) => id.as_str(),
        }
    }

    /// Display name; unknown ids fall back to the raw id.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
            Self::Chiron => "Chiron",
            Self::Ascendant => "Ascendant",
            Self::Midheaven => "Midheaven",
            Self::Other(id) => id.as_str(),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            Self::Sun => "☉",
            Self::Moon => "☽",
            Self::Mercury => "☿",
            Self::Venus => "♀",
            Self::Mars => "♂",
            Self::Jupiter => "♃",
            Self::Saturn => "♄",
            Self::Uranus => "♅",
            Self::Neptune => "♆",
            Self::Pluto => "♇",
            Self::NorthNode => "☊",
            Self::SouthNode => "☋",
            Self::Chiron => "⚷",
            Self::Ascendant => "AC",
            Self::Midheaven => "MC",
            Self::Other(_) => "?",
        }
    }

    /// Presentation hint; never read by the engine.
    pub fn default_color(&self) -> Option<&'static str> {
        match self {
            Self::Sun => Some("#FFD700"),
            Self::Moon => Some("#C0C0C0"),
            Self::Mercury => Some("#B5A642"),
            Self::Venus => Some("#FFC0CB"),
            Self::Mars => Some("#FF0000"),
            Self::Jupiter => Some("#FFA500"),
            Self::Saturn => Some("#808080"),
            Self::Uranus => Some("#40E0D0"),
            Self::Neptune => Some("#0000FF"),
            Self::Pluto => Some("#800080"),
            _ => None,
        }
    }
}

impl From<String> for BodyId {
    fn from(id: String) -> Self {
        match id.to_lowercase().as_str() {
            "sun" => Self::Sun,
            "moon" => Self::Moon,
            "mercury" => Self::Mercury,
            "venus" => Self::Venus,
            "mars" => Self::Mars,
            "jupiter" => Self::Jupiter,
            "saturn" => Self::Saturn,
            "uranus" => Self::Uranus,
            "neptune" => Self::Neptune,
            "pluto" => Self::Pluto,
            "north_node" | "true_node" => Self::NorthNode,
            "south_node" => Self::SouthNode,
            "chiron" => Self::Chiron,
            "asc" | "ascendant" => Self::Ascendant,
            "mc" | "midheaven" => Self::Midheaven,
            _ => Self::Other(id),
        }
    }
}

impl From<&str> for BodyId {
    fn from(id: &str) -> Self {
        Self::from(id.to_string())
    }
}

impl From<BodyId> for String {
    fn from(id: BodyId) -> Self {
        match id {
            BodyId::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tracked point as delivered by a position source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBody {
    pub id: BodyId,
    pub name: String,
    pub symbol: String,
    /// Longitude in degrees, any range
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub is_retrograde: bool,
}

impl CelestialBody {
    /// Body with catalog name, symbol and color filled in from its id.
    pub fn new(id: impl Into<BodyId>, longitude: f64) -> Self {
        let id = id.into();
        Self {
            name: id.display_name().to_string(),
            symbol: id.symbol().to_string(),
            color: id.default_color().map(str::to_string),
            id,
            longitude,
            latitude: None,
            is_retrograde: false,
        }
    }

    pub fn retrograde(mut self, is_retrograde: bool) -> Self {
        self.is_retrograde = is_retrograde;
        self
    }
}

/// Boundary between two houses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseCusp {
    /// 1..=12
    pub house_number: u8,
    pub longitude: f64,
}

/// A single sensitive point such as the ascendant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub longitude: f64,
}

/// Complete position data for a chart layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerPositions {
    pub bodies: Vec<CelestialBody>,
    /// Empty when no location was provided
    #[serde(default)]
    pub houses: Vec<HouseCusp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascendant: Option<ChartPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midheaven: Option<ChartPoint>,
}

impl LayerPositions {
    /// Keep only the listed bodies; an empty list keeps everything.
    pub fn retain_bodies(&mut self, include: &[BodyId]) {
        if !include.is_empty() {
            self.bodies.retain(|b| include.contains(&b.id));
        }
    }
}

/// Moment and place a layer is computed for
#[derive(Debug, Clone, PartialEq)]
pub struct PositionRequest {
    pub datetime: chrono::DateTime<chrono::Utc>,
    pub location: GeoLocation,
}
