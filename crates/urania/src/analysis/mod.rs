//! Plain-text chart interpretation built from a [`ChartSnapshot`].
//!
//! The generator reads only the snapshot, so an analysis can be produced from a
//! snapshot that was exported and loaded back.

pub mod balance;
pub mod descriptions;

pub use balance::ElementBalance;

use serde::Serialize;

use crate::chart::{AspectEntry, ChartSnapshot, PlanetEntry, TransitSnapshot};
use crate::ephemeris::BodyId;
use crate::zodiac::Sign;
use descriptions::*;

/// Generated analysis text, one field per section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAnalysis {
    pub summary: String,
    pub planets: String,
    pub houses: String,
    pub aspects: String,
    pub elements: String,
    /// Present only when the snapshot carries a transit layer
    pub transits: Option<String>,
}

pub fn generate_analysis(snapshot: &ChartSnapshot) -> ChartAnalysis {
    let balance = ElementBalance::from_planets(&snapshot.planets);
    ChartAnalysis {
        summary: summary(snapshot, &balance),
        planets: planet_analysis(&snapshot.planets),
        houses: house_analysis(snapshot),
        aspects: aspect_analysis(&snapshot.aspects),
        elements: element_analysis(&balance),
        transits: snapshot.transits.as_ref().map(transit_analysis),
    }
}

fn sign_of(snapshot: &ChartSnapshot, id: BodyId) -> String {
    snapshot
        .planet(&id)
        .map(|p| p.sign.name().to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

fn summary(snapshot: &ChartSnapshot, balance: &ElementBalance) -> String {
    let info = &snapshot.basic_info;
    let points = &snapshot.special_points;
    let (element, _) = balance.dominant_element();
    let (modality, _) = balance.dominant_modality();

    format!(
        "Natal Chart Analysis for {}, born on {} at {} in {}.\n\n\
         This chart has Ascendant in {} and Midheaven in {}.\n\
         The Sun is in {}, the Moon is in {}, and Mercury is in {}.\n\n\
         The dominant element is {} and the dominant modality is {}, \
         suggesting a personality that tends to be {} and {}.",
        info.name,
        info.birth_date,
        info.birth_time,
        info.birth_place,
        points.ascendant.sign,
        points.midheaven.sign,
        sign_of(snapshot, BodyId::Sun),
        sign_of(snapshot, BodyId::Moon),
        sign_of(snapshot, BodyId::Mercury),
        element,
        modality,
        element_description(element),
        modality_description(modality),
    )
}

fn retrograde_suffix(planet: &PlanetEntry) -> &'static str {
    if planet.is_retrograde {
        " Retrograde"
    } else {
        ""
    }
}

fn planet_in_sign(planet: &PlanetEntry) -> String {
    let retro = if planet.is_retrograde {
        " The retrograde motion suggests a more internalized or reflective expression of this energy."
    } else {
        ""
    };
    format!(
        "{name} in {sign} indicates a specific way of expressing the energy of {name}.{retro} \
         This placement influences how you {function} in the {traits} manner of {sign}.",
        name = planet.planet,
        sign = planet.sign,
        retro = retro,
        function = planet_function(&planet.id),
        traits = sign_characteristics(planet.sign),
    )
}

fn planet_in_house(planet: &PlanetEntry) -> String {
    format!(
        "With {name} in the {ordinal} House, the energy of {name} is expressed in the area of life related to {area}.",
        name = planet.planet,
        ordinal = house_ordinal(planet.house),
        area = house_description(planet.house),
    )
}

fn planet_analysis(planets: &[PlanetEntry]) -> String {
    let mut out = String::from("Planetary Positions Analysis:\n\n");
    for planet in planets {
        out.push_str(&format!(
            "{} in {} ({}°) in House {}{}:\n{}\n{}\n\n",
            planet.planet,
            planet.sign,
            planet.degree,
            planet.house,
            retrograde_suffix(planet),
            planet_in_sign(planet),
            planet_in_house(planet),
        ));
    }
    out
}

fn house_in_sign(house: u8, sign: Sign) -> String {
    format!(
        "With the {} House in {}, you approach matters of {} with the {} energy of {}.",
        house_ordinal(house),
        sign,
        house_description(house),
        sign_characteristics(sign),
        sign,
    )
}

fn house_analysis(snapshot: &ChartSnapshot) -> String {
    let mut out = String::from("House Placements Analysis:\n\n");
    for house in &snapshot.houses {
        out.push_str(&format!(
            "House {} ({}) in {}:\n",
            house.house,
            house_description(house.house),
            house.sign
        ));

        let occupants: Vec<&str> = snapshot
            .planets
            .iter()
            .filter(|p| p.house == house.house)
            .map(|p| p.planet.as_str())
            .collect();
        if occupants.is_empty() {
            out.push_str("No planets in this house.\n");
        } else {
            out.push_str(&format!("Planets in this house: {}\n", occupants.join(", ")));
        }

        out.push_str(&house_in_sign(house.house, house.sign));
        out.push_str("\n\n");
    }
    out
}

fn aspect_analysis(aspects: &[AspectEntry]) -> String {
    let mut out = String::from("Aspect Analysis:\n\n");
    if aspects.is_empty() {
        out.push_str("No significant aspects found in this chart.");
        return out;
    }
    for aspect in aspects {
        // Names map back to ids case-insensitively; unknown names keep the default phrasing
        let first = BodyId::from(aspect.planet1.as_str());
        let second = BodyId::from(aspect.planet2.as_str());
        out.push_str(&format!(
            "{} {} {} (orb: {}°):\n",
            aspect.planet1,
            aspect_verb(aspect.aspect),
            aspect.planet2,
            aspect.orb
        ));
        out.push_str(&format!(
            "The {} between {} and {} suggests a {} interaction between how you {} and how you {}.\n\n",
            aspect.aspect,
            aspect.planet1,
            aspect.planet2,
            aspect_quality(aspect.aspect),
            planet_function(&first),
            planet_function(&second),
        ));
    }
    out
}

fn join_names<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn element_analysis(balance: &ElementBalance) -> String {
    let mut out = String::from("Elemental and Modality Balance:\n\nElements:\n");
    for (element, count) in &balance.elements {
        out.push_str(&format!(
            "{}: {} planets ({}%)\n",
            element,
            count,
            balance.percentage(*count)
        ));
    }

    out.push_str("\nModalities:\n");
    for (modality, count) in &balance.modalities {
        out.push_str(&format!(
            "{}: {} planets ({}%)\n",
            modality,
            count,
            balance.percentage(*count)
        ));
    }

    out.push_str("\nOverall Balance Interpretation:\n");

    let missing = balance.missing_elements();
    if !missing.is_empty() {
        let notes: Vec<&str> = missing.iter().map(|e| missing_element_description(*e)).collect();
        out.push_str(&format!(
            "Missing elements: {}. {}\n",
            join_names(&missing),
            notes.join(" ")
        ));
    }

    let under = balance.underrepresented_elements();
    if !under.is_empty() {
        out.push_str(&format!(
            "Underrepresented elements: {}. This suggests {}\n",
            join_names(&under),
            UNDERREPRESENTED_DESCRIPTION
        ));
    }

    let (element, count) = balance.dominant_element();
    if count >= 3 {
        out.push_str(&format!(
            "Dominant element: {} ({} planets). {}\n",
            element,
            count,
            dominant_element_description(element)
        ));
    }

    let (modality, count) = balance.dominant_modality();
    if count >= 3 {
        out.push_str(&format!(
            "Dominant modality: {} ({} planets). {}\n",
            modality,
            count,
            dominant_modality_description(modality)
        ));
    }

    out
}

fn transit_analysis(transits: &TransitSnapshot) -> String {
    let mut out = format!(
        "Transit Analysis for {} at {}:\n\nCurrent Planetary Positions:\n",
        transits.date, transits.time
    );
    for planet in &transits.planets {
        out.push_str(&format!(
            "{} in {} ({}°){}\n",
            planet.planet,
            planet.sign,
            planet.degree,
            retrograde_suffix(planet)
        ));
    }

    if transits.aspects.is_empty() {
        out.push_str("\nNo significant transit aspects to natal chart at this time.\n");
        return out;
    }

    out.push_str("\nSignificant Transit Aspects to Natal Chart:\n");
    for aspect in &transits.aspects {
        let transit = BodyId::from(aspect.transit_planet.as_str());
        let natal = BodyId::from(aspect.natal_planet.as_str());
        out.push_str(&format!(
            "{} {} natal {} (orb: {}°):\n",
            aspect.transit_planet,
            aspect_verb(aspect.aspect),
            aspect.natal_planet,
            aspect.orb
        ));
        out.push_str(&format!(
            "Transiting {} {} your natal {} suggests a period where your {} is being {} {}.\n\n",
            aspect.transit_planet,
            aspect_verb(aspect.aspect),
            aspect.natal_planet,
            planet_function(&natal),
            aspect_influence(aspect.aspect),
            transit_influence(&transit),
        ));
    }
    out
}
