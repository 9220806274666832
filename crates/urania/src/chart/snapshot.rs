//! The serializable chart snapshot handed to analysis and export.
//!
//! Every field is a plain number, string or enum tag, so a snapshot survives a
//! JSON round-trip unchanged. Display rounding has already been applied to the
//! string fields; longitudes are normalized but kept at full precision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aspects::AspectKind;
use crate::ephemeris::{BodyId, CelestialBody, HouseCusp};
use crate::error::ChartError;
use crate::houses::HouseCusps;
use crate::zodiac::{Element, Modality, Sign};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub name: String,
    /// YYYY-MM-DD or "Unknown"
    pub birth_date: String,
    /// HH:MM or "Unknown"
    pub birth_time: String,
    pub birth_place: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetEntry {
    pub id: BodyId,
    /// Display name
    pub planet: String,
    /// Normalized longitude
    pub longitude: f64,
    pub sign: Sign,
    /// Degree within sign, one decimal
    pub degree: String,
    pub house: u8,
    pub is_retrograde: bool,
    pub element: Element,
    pub modality: Modality,
}

impl PlanetEntry {
    /// Rebuild the body this entry was made from (name, id, longitude, motion).
    pub fn to_body(&self) -> CelestialBody {
        CelestialBody {
            id: self.id.clone(),
            name: self.planet.clone(),
            symbol: self.id.symbol().to_string(),
            longitude: self.longitude,
            latitude: None,
            color: None,
            is_retrograde: self.is_retrograde,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseEntry {
    pub house: u8,
    pub sign: Sign,
    /// Degree within sign, one decimal
    pub degree: String,
    /// Cusp longitude normalized to [0, 360), otherwise unrounded
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectEntry {
    pub aspect: AspectKind,
    pub planet1: String,
    pub planet2: String,
    pub orb: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitAspectEntry {
    pub aspect: AspectKind,
    pub transit_planet: String,
    pub natal_planet: String,
    pub orb: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialPoint {
    pub longitude: f64,
    pub sign: Sign,
    pub degree: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialPoints {
    pub ascendant: SpecialPoint,
    pub midheaven: SpecialPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitSnapshot {
    pub date: String,
    pub time: String,
    /// Houses are read against the natal cusps
    pub planets: Vec<PlanetEntry>,
    /// Transit-to-natal aspects
    pub aspects: Vec<TransitAspectEntry>,
    /// Aspects among the transiting bodies themselves
    #[serde(default)]
    pub transiting_aspects: Vec<AspectEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSnapshot {
    pub basic_info: BasicInfo,
    pub planets: Vec<PlanetEntry>,
    pub houses: Vec<HouseEntry>,
    pub aspects: Vec<AspectEntry>,
    pub special_points: SpecialPoints,
    #[serde(default)]
    pub transits: Option<TransitSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ChartSnapshot {
    /// Same snapshot stamped with the moment it was exported.
    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at);
        self
    }

    /// The natal cusps recorded in this snapshot.
    pub fn cusps(&self) -> Result<HouseCusps, ChartError> {
        let input: Vec<HouseCusp> = self
            .houses
            .iter()
            .map(|h| HouseCusp {
                house_number: h.house,
                longitude: h.longitude,
            })
            .collect();
        HouseCusps::from_cusps(&input)
    }

    /// The natal bodies recorded in this snapshot.
    pub fn bodies(&self) -> Vec<CelestialBody> {
        self.planets.iter().map(PlanetEntry::to_body).collect()
    }

    pub fn planet(&self, id: &BodyId) -> Option<&PlanetEntry> {
        self.planets.iter().find(|p| &p.id == id)
    }
}
