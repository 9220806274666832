use chrono::NaiveDate;
use urania::analysis::{generate_analysis, ElementBalance};
use urania::aspects::AspectCatalog;
use urania::chart::{BirthData, ChartSnapshot, SnapshotAssembler};
use urania::ephemeris::{CelestialBody, LayerPositions};
use urania::houses::HouseCusps;
use urania::analysis_to_text;
use urania::zodiac::{Element, Modality};

const NATAL: &str = include_str!("fixtures/natal.json");

fn natal() -> ChartSnapshot {
    let positions: LayerPositions = serde_json::from_str(NATAL).unwrap();
    let birth = BirthData {
        name: Some("Test User".to_string()),
        date: NaiveDate::from_ymd_opt(2000, 1, 1),
        place: Some("New York, NY".to_string()),
        ..BirthData::default()
    };
    SnapshotAssembler::new()
        .from_positions(&birth, &positions, &AspectCatalog::major())
        .unwrap()
}

#[test]
fn test_summary_names_signs_and_dominants() {
    let analysis = generate_analysis(&natal());
    assert!(analysis
        .summary
        .starts_with("Natal Chart Analysis for Test User, born on 2000-01-01 at Unknown in New York, NY."));
    assert!(analysis.summary.contains("Ascendant in Libra and Midheaven in Cancer"));
    assert!(analysis.summary.contains("The Sun is in Capricorn, the Moon is in Scorpio"));

    let balance = ElementBalance::from_planets(&natal().planets);
    let (element, _) = balance.dominant_element();
    assert_eq!(element, Element::Fire);
    assert!(analysis
        .summary
        .contains(&format!("The dominant element is {element}")));
}

#[test]
fn test_element_counts_for_fixture() {
    let balance = ElementBalance::from_planets(&natal().planets);
    // Earth: Sun, Mercury, Saturn; Air: Mars, Uranus, Neptune; Fire: Venus, Jupiter, Pluto; Water: Moon
    assert_eq!(
        balance.elements,
        [
            (Element::Fire, 3),
            (Element::Earth, 3),
            (Element::Air, 3),
            (Element::Water, 1),
        ]
    );
    assert_eq!(balance.dominant_element(), (Element::Fire, 3));
    assert_eq!(balance.underrepresented_elements(), vec![Element::Water]);
    assert!(balance.missing_elements().is_empty());
    assert_eq!(balance.percentage(3), 30);
    assert_eq!(balance.modalities[0].0, Modality::Cardinal);
}

#[test]
fn test_sections_cover_every_planet_and_house() {
    let snap = natal();
    let analysis = generate_analysis(&snap);
    for planet in &snap.planets {
        assert!(analysis.planets.contains(&format!("{} in {}", planet.planet, planet.sign)));
    }
    for house in 1..=12 {
        assert!(analysis.houses.contains(&format!("House {house} (")));
    }
    assert!(analysis.planets.contains("Saturn in Taurus (10.4°) in House 8 Retrograde:"));
    assert!(analysis.aspects.contains("Sun trine Saturn (orb: 0.1°):"));
    assert!(analysis.transits.is_none());
}

#[test]
fn test_empty_house_line() {
    let snap = natal();
    // Nothing sits between 134 and 165.5
    let analysis = generate_analysis(&snap);
    let house_11 = analysis
        .houses
        .split("\n\n")
        .find(|block| block.starts_with("House 11 "))
        .unwrap();
    assert!(house_11.contains("No planets in this house."));
}

#[test]
fn test_no_aspects_text() {
    let bodies = vec![
        CelestialBody::new("sun", 0.0),
        CelestialBody::new("moon", 33.0),
    ];
    let snap = SnapshotAssembler::new().build_snapshot(
        &BirthData::default(),
        &bodies,
        &HouseCusps::equal(0.0),
        &AspectCatalog::major(),
        0.0,
        270.0,
    );
    let analysis = generate_analysis(&snap);
    assert!(analysis
        .aspects
        .ends_with("No significant aspects found in this chart."));
    assert!(analysis.summary.contains("Mercury is in Unknown"));
}

#[test]
fn test_zero_planets_report_zero_percent() {
    let snap = SnapshotAssembler::new().build_snapshot(
        &BirthData::default(),
        &[],
        &HouseCusps::equal(0.0),
        &AspectCatalog::major(),
        0.0,
        270.0,
    );
    let analysis = generate_analysis(&snap);
    assert!(analysis.elements.contains("Fire: 0 planets (0%)"));
    assert!(analysis
        .elements
        .contains("Missing elements: Fire, Earth, Air, Water."));
    assert!(!analysis.elements.contains("Dominant element"));
}

#[test]
fn test_transit_section() {
    let natal = natal();
    let transit = vec![
        CelestialBody::new("jupiter", 280.5),
        CelestialBody::new("mars", 60.0),
    ];
    let merged = SnapshotAssembler::new().merge_transit(
        &natal,
        &BirthData::default(),
        &transit,
        &AspectCatalog::major(),
    );
    let text = generate_analysis(&merged).transits.unwrap();
    assert!(text.starts_with("Transit Analysis for Unknown at Unknown:"));
    assert!(text.contains("Jupiter conjunct natal Sun (orb: 0.0°):"));
    assert!(text.contains("Transiting Jupiter conjunct your natal Sun"));
}

#[test]
fn test_transit_section_without_aspects() {
    let bodies = vec![CelestialBody::new("sun", 0.0)];
    let natal = SnapshotAssembler::new().build_snapshot(
        &BirthData::default(),
        &bodies,
        &HouseCusps::equal(0.0),
        &AspectCatalog::major(),
        0.0,
        270.0,
    );
    let merged = SnapshotAssembler::new().merge_transit(
        &natal,
        &BirthData::default(),
        &[CelestialBody::new("moon", 33.0)],
        &AspectCatalog::major(),
    );
    let text = generate_analysis(&merged).transits.unwrap();
    assert!(text.contains("No significant transit aspects to natal chart at this time."));
}

#[test]
fn test_text_export_headings() {
    let text = analysis_to_text(&natal());
    let headings: Vec<&str> = text.lines().filter(|l| l.starts_with('#')).collect();
    assert_eq!(
        headings,
        vec![
            "# NATAL CHART ANALYSIS",
            "## Summary",
            "## Planetary Positions",
            "## House Placements",
            "## Aspects",
            "## Elemental Balance",
        ]
    );

    let with_transit = SnapshotAssembler::new().merge_transit(
        &natal(),
        &BirthData::default(),
        &[CelestialBody::new("sun", 0.0)],
        &AspectCatalog::major(),
    );
    assert!(analysis_to_text(&with_transit).contains("## Transit Analysis\n"));
}
