use urania::angles::{angular_separation, normalize};
use urania::houses::{house_for_longitude, HouseCusps};
use urania::zodiac::{self, Element, Modality, Sign};

fn sweep() -> impl Iterator<Item = f64> {
    (-1440..=1440).map(|i| i as f64 * 0.75 + 0.125)
}

#[test]
fn test_normalize_range_and_period() {
    for x in sweep() {
        let n = normalize(x);
        assert!((0.0..360.0).contains(&n), "normalize({x}) = {n}");
        assert!((normalize(x + 720.0) - n).abs() < 1e-9);
        assert!((normalize(x - 360.0) - n).abs() < 1e-9);
    }
}

#[test]
fn test_separation_symmetric_and_bounded() {
    for a in sweep().step_by(37) {
        for b in sweep().step_by(53) {
            let ab = angular_separation(a, b);
            assert!((0.0..=180.0).contains(&ab));
            assert_eq!(ab, angular_separation(b, a));
        }
    }
}

#[test]
fn test_separation_examples() {
    assert_eq!(angular_separation(0.0, 10.0), 10.0);
    assert_eq!(angular_separation(350.0, 10.0), 20.0);
    assert_eq!(angular_separation(180.0, 0.0), 180.0);
}

#[test]
fn test_sign_of_every_longitude_matches_index() {
    for x in sweep() {
        let idx = zodiac::sign_index(x);
        assert!(idx < 12);
        let sign = zodiac::sign_for_longitude(x);
        assert_eq!(sign.index(), idx);
        assert_eq!(sign.element(), zodiac::element(idx));
        assert_eq!(sign.modality(), zodiac::modality(idx));
    }
}

#[test]
fn test_sign_table() {
    assert_eq!(zodiac::sign_for_longitude(0.0), Sign::Aries);
    assert_eq!(zodiac::sign_for_longitude(95.0), Sign::Cancer);
    assert_eq!(zodiac::sign_for_longitude(359.0), Sign::Pisces);
    assert_eq!(Sign::Scorpio.element(), Element::Water);
    assert_eq!(Sign::Capricorn.modality(), Modality::Cardinal);
    assert_eq!(Sign::from_name("sagittarius"), Some(Sign::Sagittarius));
    assert_eq!(Sign::from_name("Ophiuchus"), None);
}

#[test]
fn test_wrapping_cusps_from_input() {
    let cusps = HouseCusps::equal(350.0);
    assert_eq!(house_for_longitude(355.0, &cusps), 1);
    assert_eq!(house_for_longitude(5.0, &cusps), 1);
    assert_eq!(house_for_longitude(30.0, &cusps), 2);

    let roundtrip = HouseCusps::from_cusps(&cusps.to_input()).unwrap();
    assert_eq!(roundtrip, cusps);
}

#[test]
fn test_every_longitude_lands_in_one_house() {
    let cusps = HouseCusps::new([
        12.5, 41.0, 69.0, 95.5, 124.0, 157.0, 192.5, 221.0, 249.0, 275.5, 304.0, 337.0,
    ]);
    for x in sweep() {
        let house = house_for_longitude(x, &cusps);
        assert!((1..=12).contains(&house));
        let start = cusps.cusp(house);
        let offset = normalize(normalize(x) - start);
        assert!(offset < cusps.span(house), "{x} outside house {house}");
    }
}
