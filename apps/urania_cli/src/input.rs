use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::path::Path;

use urania::chart::BirthData;
use urania::ephemeris::{
    BodyId, GeoLocation, LayerPositions, MockEphemeris, PositionRequest, PositionSource,
};

pub(crate) fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid date {raw:?} (expected YYYY-MM-DD)"))
}

/// Accepts HH:MM or HH:MM:SS.
pub(crate) fn parse_time(raw: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .with_context(|| format!("Invalid time {raw:?} (expected HH:MM)"))
}

pub(crate) fn location(lat: Option<f64>, lon: Option<f64>) -> Option<GeoLocation> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => Some(GeoLocation { lat, lon }),
        _ => None,
    }
}

/// Read a position layer from a JSON file and keep only the requested bodies.
pub(crate) fn load_positions(path: &Path, include: &[BodyId]) -> anyhow::Result<LayerPositions> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut positions: LayerPositions = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse positions {}", path.display()))?;
    positions.retain_bodies(include);
    log::info!(
        "Loaded {} bodies and {} cusps from {}",
        positions.bodies.len(),
        positions.houses.len(),
        path.display()
    );
    Ok(positions)
}

/// Deterministic mock positions for the moment and place in `meta`.
///
/// A missing time means noon UTC.
pub(crate) fn mock_positions(meta: &BirthData, include: &[BodyId]) -> anyhow::Result<LayerPositions> {
    let date = meta
        .date
        .context("The mock source needs a date (--date / --transit-date)")?;
    let location = meta
        .location
        .context("The mock source needs a location (--lat and --lon)")?;
    let time = meta
        .time
        .or_else(|| NaiveTime::from_hms_opt(12, 0, 0))
        .unwrap_or_default();
    let request = PositionRequest {
        datetime: Utc.from_utc_datetime(&NaiveDateTime::new(date, time)),
        location,
    };

    let source = MockEphemeris::with_bodies(include.to_vec());
    log::info!("Generating {} positions for {}", source.name(), request.datetime);
    source
        .positions(&request)
        .context("Mock position source rejected the request")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use urania::ephemeris::TRADITIONAL_BODIES;

    #[test]
    fn test_parse_date_and_time() -> anyhow::Result<()> {
        assert_eq!(parse_date("1990-06-15")?, NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
        assert_eq!(parse_time("14:30")?, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        assert_eq!(parse_time("14:30:05")?, NaiveTime::from_hms_opt(14, 30, 5).unwrap());
        assert!(parse_date("15/06/1990").is_err());
        assert!(parse_time("25:00").is_err());
        Ok(())
    }

    #[test]
    fn test_location_needs_both_coordinates() {
        assert!(location(Some(1.0), None).is_none());
        assert_eq!(
            location(Some(1.0), Some(2.0)),
            Some(GeoLocation { lat: 1.0, lon: 2.0 })
        );
    }

    #[test]
    fn test_load_positions_filters_bodies() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"{{"bodies": [
                {{"id": "sun", "name": "Sun", "symbol": "S", "longitude": 10.0}},
                {{"id": "chiron", "name": "Chiron", "symbol": "K", "longitude": 20.0}}
            ], "houses": []}}"#
        )?;
        let positions = load_positions(file.path(), &TRADITIONAL_BODIES)?;
        assert_eq!(positions.bodies.len(), 1);
        assert_eq!(positions.bodies[0].id, BodyId::Sun);
        assert!(!positions.bodies[0].is_retrograde);
        Ok(())
    }

    #[test]
    fn test_mock_positions_require_date_and_location() {
        let meta = BirthData::default();
        assert!(mock_positions(&meta, &TRADITIONAL_BODIES).is_err());

        let meta = BirthData {
            date: NaiveDate::from_ymd_opt(2000, 1, 1),
            location: Some(GeoLocation { lat: 0.0, lon: 0.0 }),
            ..BirthData::default()
        };
        let positions = mock_positions(&meta, &TRADITIONAL_BODIES).unwrap();
        assert_eq!(positions.bodies.len(), 10);
        assert_eq!(positions.houses.len(), 12);
    }
}
