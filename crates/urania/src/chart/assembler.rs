use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::format_degree;
use super::snapshot::{
    AspectEntry, BasicInfo, ChartSnapshot, HouseEntry, PlanetEntry, SpecialPoint, SpecialPoints,
    TransitAspectEntry, TransitSnapshot,
};
use crate::aspects::{AspectCalculator, AspectCatalog, AspectRelation, DetectedAspect};
use crate::angles::normalize;
use crate::ephemeris::{BodyId, CelestialBody, GeoLocation, LayerPositions};
use crate::error::ChartError;
use crate::houses::{house_for_longitude, HouseCusps};
use crate::zodiac;

const UNKNOWN: &str = "Unknown";

/// Identifying metadata of the moment a chart is cast for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub location: Option<GeoLocation>,
}

impl BirthData {
    fn date_label(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    fn time_label(&self) -> String {
        self.time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    fn basic_info(&self) -> BasicInfo {
        BasicInfo {
            name: self.name.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            birth_date: self.date_label(),
            birth_time: self.time_label(),
            birth_place: self.place.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            latitude: self.location.map(|l| l.lat),
            longitude: self.location.map(|l| l.lon),
        }
    }
}

/// Builds [`ChartSnapshot`]s from resolved positions.
///
/// Holds no state between calls; every build starts from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotAssembler {
    calculator: AspectCalculator,
}

impl SnapshotAssembler {
    pub fn new() -> Self {
        Self {
            calculator: AspectCalculator::new(),
        }
    }

    pub fn build_snapshot(
        &self,
        birth: &BirthData,
        bodies: &[CelestialBody],
        cusps: &HouseCusps,
        catalog: &AspectCatalog,
        ascendant: f64,
        midheaven: f64,
    ) -> ChartSnapshot {
        let planets = bodies.iter().map(|b| planet_entry(b, cusps)).collect();

        let houses = cusps
            .longitudes()
            .iter()
            .enumerate()
            .map(|(i, &longitude)| {
                let placement = zodiac::placement(longitude);
                HouseEntry {
                    house: i as u8 + 1,
                    sign: placement.sign,
                    degree: format_degree(placement.degree_in_sign),
                    longitude,
                }
            })
            .collect();

        let detected = self.calculator.all_aspects(bodies, catalog);
        log::debug!(
            "assembled chart for {}: {} bodies, {} aspects",
            birth.name.as_deref().unwrap_or(UNKNOWN),
            bodies.len(),
            detected.len()
        );
        let aspects = detected
            .iter()
            .map(|a| aspect_entry(a, bodies, bodies))
            .collect();

        ChartSnapshot {
            basic_info: birth.basic_info(),
            planets,
            houses,
            aspects,
            special_points: SpecialPoints {
                ascendant: special_point(ascendant),
                midheaven: special_point(midheaven),
            },
            transits: None,
            timestamp: None,
        }
    }

    /// Snapshot from a position-source layer.
    ///
    /// Missing ascendant / midheaven fall back to the 1st / 10th cusp.
    pub fn from_positions(
        &self,
        birth: &BirthData,
        positions: &LayerPositions,
        catalog: &AspectCatalog,
    ) -> Result<ChartSnapshot, ChartError> {
        let cusps = HouseCusps::from_cusps(&positions.houses)?;
        let ascendant = positions.ascendant.map_or(cusps.cusp(1), |p| p.longitude);
        let midheaven = positions.midheaven.map_or(cusps.cusp(10), |p| p.longitude);
        Ok(self.build_snapshot(
            birth,
            &positions.bodies,
            &cusps,
            catalog,
            ascendant,
            midheaven,
        ))
    }

    /// New snapshot equal to `natal` with a transit layer nested in it.
    ///
    /// Transit houses are read against the natal cusps.
    pub fn merge_transit(
        &self,
        natal: &ChartSnapshot,
        transit_meta: &BirthData,
        transit_bodies: &[CelestialBody],
        catalog: &AspectCatalog,
    ) -> ChartSnapshot {
        let cusps = natal.cusps().unwrap_or_else(|e| {
            let start = natal.houses.first().map_or(0.0, |h| h.longitude);
            log::warn!("natal snapshot has unusable cusps ({e}); using equal houses from {start}");
            HouseCusps::equal(start)
        });
        let natal_bodies = natal.bodies();

        let detected = self
            .calculator
            .transit_aspects(transit_bodies, &natal_bodies, catalog);

        let mut aspects = Vec::new();
        let mut transiting_aspects = Vec::new();
        for a in &detected {
            match a.relation {
                AspectRelation::TransitToNatal => aspects.push(TransitAspectEntry {
                    aspect: a.aspect.kind,
                    transit_planet: display_name(&a.from, transit_bodies),
                    natal_planet: display_name(&a.to, &natal_bodies),
                    orb: format_degree(a.aspect.orb),
                }),
                AspectRelation::TransitToTransit | AspectRelation::Natal => {
                    transiting_aspects.push(aspect_entry(a, transit_bodies, transit_bodies))
                }
            }
        }

        let mut merged = natal.clone();
        merged.transits = Some(TransitSnapshot {
            date: transit_meta.date_label(),
            time: transit_meta.time_label(),
            planets: transit_bodies
                .iter()
                .map(|b| planet_entry(b, &cusps))
                .collect(),
            aspects,
            transiting_aspects,
        });
        merged
    }
}

fn planet_entry(body: &CelestialBody, cusps: &HouseCusps) -> PlanetEntry {
    let longitude = normalize(body.longitude);
    let index = zodiac::sign_index(longitude);
    PlanetEntry {
        id: body.id.clone(),
        planet: body.name.clone(),
        longitude,
        sign: zodiac::Sign::from_index(index),
        degree: format_degree(zodiac::degree_in_sign(longitude)),
        house: house_for_longitude(longitude, cusps),
        is_retrograde: body.is_retrograde,
        element: zodiac::element(index),
        modality: zodiac::modality(index),
    }
}

fn special_point(longitude: f64) -> SpecialPoint {
    let placement = zodiac::placement(longitude);
    SpecialPoint {
        longitude: normalize(longitude),
        sign: placement.sign,
        degree: format_degree(placement.degree_in_sign),
    }
}

/// Name of the first body carrying `id`, or the raw id.
fn display_name(id: &BodyId, bodies: &[CelestialBody]) -> String {
    bodies
        .iter()
        .find(|b| &b.id == id)
        .map(|b| b.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn aspect_entry(
    aspect: &DetectedAspect,
    from_set: &[CelestialBody],
    to_set: &[CelestialBody],
) -> AspectEntry {
    AspectEntry {
        aspect: aspect.aspect.kind,
        planet1: display_name(&aspect.from, from_set),
        planet2: display_name(&aspect.to, to_set),
        orb: format_degree(aspect.aspect.orb),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_info_defaults() {
        let info = BirthData::default().basic_info();
        assert_eq!(info.name, "Unknown");
        assert_eq!(info.birth_date, "Unknown");
        assert_eq!(info.birth_time, "Unknown");
        assert_eq!(info.latitude, None);
    }

    #[test]
    fn test_basic_info_formats_date_and_time() {
        let birth = BirthData {
            name: Some("Test User".into()),
            date: NaiveDate::from_ymd_opt(2000, 1, 1),
            time: NaiveTime::from_hms_opt(9, 5, 0),
            place: Some("New York, NY".into()),
            location: Some(GeoLocation {
                lat: 40.7128,
                lon: -74.006,
            }),
        };
        let info = birth.basic_info();
        assert_eq!(info.birth_date, "2000-01-01");
        assert_eq!(info.birth_time, "09:05");
        assert_eq!(info.longitude, Some(-74.006));
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let bodies = vec![CelestialBody::new("sun", 0.0)];
        assert_eq!(display_name(&BodyId::Sun, &bodies), "Sun");
        assert_eq!(display_name(&BodyId::from("ceres"), &bodies), "ceres");
    }
}
