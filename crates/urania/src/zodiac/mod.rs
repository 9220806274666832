//! Zodiac sign classification.
//!
//! Signs, elements and modalities are pure functions of the sign index; no
//! table here is stored per body.

pub mod types;

pub use types::{Element, Modality, Sign, SignPlacement, ALL_SIGNS};

use crate::angles::normalize;

const ELEMENT_CYCLE: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];
const MODALITY_CYCLE: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];

/// Sign index (0-11) for a longitude in any range.
pub fn sign_index(longitude: f64) -> usize {
    // normalize() < 360, so the floor never reaches 12
    ((normalize(longitude) / 30.0).floor() as usize).min(11)
}

/// Degrees past the start of the sign, 0 <= x < 30.
pub fn degree_in_sign(longitude: f64) -> f64 {
    normalize(longitude) % 30.0
}

pub const fn element(sign_index: usize) -> Element {
    ELEMENT_CYCLE[sign_index % 4]
}

pub const fn modality(sign_index: usize) -> Modality {
    MODALITY_CYCLE[sign_index % 3]
}

pub fn sign_for_longitude(longitude: f64) -> Sign {
    Sign::from_index(sign_index(longitude))
}

pub fn placement(longitude: f64) -> SignPlacement {
    SignPlacement {
        sign: sign_for_longitude(longitude),
        degree_in_sign: degree_in_sign(longitude),
    }
}

/// Whole-degree position label, e.g. `"15° Aries"`.
pub fn format_position(longitude: f64) -> String {
    let p = placement(longitude);
    format!("{}° {}", p.degree_in_sign.floor() as u32, p.sign.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_index_boundaries() {
        assert_eq!(sign_index(0.0), 0);
        assert_eq!(sign_index(29.0), 0);
        assert_eq!(sign_index(29.999), 0);
        assert_eq!(sign_index(30.0), 1);
        assert_eq!(sign_index(45.0), 1);
        assert_eq!(sign_index(90.0), 3);
        assert_eq!(sign_index(359.0), 11);
    }

    #[test]
    fn test_sign_index_normalizes() {
        assert_eq!(sign_index(360.0), 0);
        assert_eq!(sign_index(390.0), 1);
        assert_eq!(sign_index(-30.0), 11);
        assert_eq!(sign_index(-1e-15), 0);
    }

    #[test]
    fn test_degree_in_sign() {
        assert!((degree_in_sign(15.0) - 15.0).abs() < 1e-12);
        assert!((degree_in_sign(45.5) - 15.5).abs() < 1e-12);
        assert!((degree_in_sign(-10.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_sign_names_and_symbols() {
        assert_eq!(sign_for_longitude(0.0).symbol(), "♈");
        assert_eq!(sign_for_longitude(280.5).symbol(), "♑");
        assert_eq!(Sign::from_index(11).name(), "Pisces");
        assert_eq!(Sign::from_index(11).symbol(), "♓");
    }

    #[test]
    fn test_element_cycle() {
        assert_eq!(element(0), Element::Fire);
        assert_eq!(element(1), Element::Earth);
        assert_eq!(element(2), Element::Air);
        assert_eq!(element(3), Element::Water);
        assert_eq!(element(4), Element::Fire);
    }

    #[test]
    fn test_modality_cycle() {
        assert_eq!(modality(0), Modality::Cardinal);
        assert_eq!(modality(1), Modality::Fixed);
        assert_eq!(modality(2), Modality::Mutable);
        assert_eq!(modality(3), Modality::Cardinal);
    }

    #[test]
    fn test_format_position() {
        assert_eq!(format_position(15.7), "15° Aries");
        assert_eq!(format_position(280.5), "10° Capricorn");
    }
}
