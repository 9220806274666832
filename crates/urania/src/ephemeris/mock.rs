//! Deterministic mock position source.
//!
//! This is NOT an ephemeris. Longitudes are derived from a string hash of the
//! body id, the request instant and the location, so the same request always
//! yields the same chart. Use it for demos and tests only.

use super::types::{
    BodyId, CelestialBody, ChartPoint, HouseCusp, LayerPositions, PositionRequest,
    TRADITIONAL_BODIES,
};
use super::{EphemerisError, PositionSource};
use crate::angles::normalize;

/// 32-bit `hash * 31 + unit` string hash, mapped into `min..max`.
fn pseudo_random_degree(seed: &str, min: i64, max: i64) -> f64 {
    let mut hash: i32 = 0;
    for unit in seed.encode_utf16() {
        hash = hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(unit as i32);
    }
    let span = max - min;
    ((hash as i64).abs() % span + min) as f64
}

#[derive(Debug, Clone, Default)]
pub struct MockEphemeris {
    bodies: Vec<BodyId>,
}

impl MockEphemeris {
    /// Mock source producing the ten traditional bodies.
    pub fn new() -> Self {
        Self {
            bodies: TRADITIONAL_BODIES.to_vec(),
        }
    }

    pub fn with_bodies(bodies: Vec<BodyId>) -> Self {
        Self { bodies }
    }

    fn seed_suffix(request: &PositionRequest) -> String {
        format!(
            "{}-{:.2}-{:.2}",
            request.datetime.timestamp_millis(),
            request.location.lat,
            request.location.lon
        )
    }
}

impl PositionSource for MockEphemeris {
    fn name(&self) -> &str {
        "mock"
    }

    fn positions(&self, request: &PositionRequest) -> Result<LayerPositions, EphemerisError> {
        let loc = request.location;
        if !(-90.0..=90.0).contains(&loc.lat) || !(-180.0..=180.0).contains(&loc.lon) {
            return Err(EphemerisError::InvalidLocation {
                lat: loc.lat,
                lon: loc.lon,
            });
        }

        let suffix = Self::seed_suffix(request);

        let bodies = self
            .bodies
            .iter()
            .map(|id| {
                let seed = format!("{}-{}", id.as_str(), suffix);
                let mut body = CelestialBody::new(id.clone(), pseudo_random_degree(&seed, 0, 360))
                    .retrograde(pseudo_random_degree(&format!("{seed}retro"), 0, 10) > 7.0);
                body.latitude = Some(pseudo_random_degree(&format!("{seed}lat"), -10, 10));
                body
            })
            .collect();

        // Roughly even houses, each cusp jittered by up to 10 degrees either way
        let houses = (1..=12u8)
            .map(|house_number| {
                let seed = format!("house-{house_number}-{suffix}");
                let base = f64::from(house_number - 1) * 30.0;
                HouseCusp {
                    house_number,
                    longitude: normalize(base + pseudo_random_degree(&seed, -10, 10)),
                }
            })
            .collect();

        log::debug!("mock positions generated for seed suffix {suffix}");

        Ok(LayerPositions {
            bodies,
            houses,
            ascendant: Some(ChartPoint {
                longitude: pseudo_random_degree(&format!("asc-{suffix}"), 0, 360),
            }),
            midheaven: Some(ChartPoint {
                longitude: pseudo_random_degree(&format!("mc-{suffix}"), 0, 360),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::GeoLocation;
    use chrono::{TimeZone, Utc};

    fn request() -> PositionRequest {
        PositionRequest {
            datetime: Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap(),
            location: GeoLocation {
                lat: 40.7128,
                lon: -74.0060,
            },
        }
    }

    #[test]
    fn test_hash_range() {
        for seed in ["sun-1", "moon-2", "", "house-12-946728000000-40.71--74.01"] {
            let d = pseudo_random_degree(seed, -10, 10);
            assert!((-10.0..10.0).contains(&d), "{seed} -> {d}");
        }
    }

    #[test]
    fn test_hash_is_java_style() {
        // "a" -> 97, "ab" -> 97 * 31 + 98
        assert_eq!(pseudo_random_degree("a", 0, 360), 97.0);
        assert_eq!(pseudo_random_degree("ab", 0, 10_000), 3105.0);
    }

    #[test]
    fn test_positions_deterministic() {
        let source = MockEphemeris::new();
        let a = source.positions(&request()).unwrap();
        let b = source.positions(&request()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.bodies.len(), 10);
        assert_eq!(a.houses.len(), 12);
    }

    #[test]
    fn test_cusps_in_order() {
        let pos = MockEphemeris::new().positions(&request()).unwrap();
        for (i, cusp) in pos.houses.iter().enumerate() {
            assert_eq!(cusp.house_number as usize, i + 1);
            assert!((0.0..360.0).contains(&cusp.longitude));
        }
    }

    #[test]
    fn test_invalid_location() {
        let mut req = request();
        req.location.lat = 95.0;
        assert!(MockEphemeris::new().positions(&req).is_err());
    }
}
