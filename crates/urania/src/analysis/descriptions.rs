//! Interpretation phrases used by the analysis generator.
//!
//! Every table is a `match` over a closed enum; ids outside the catalog land
//! in the default arm.

use crate::aspects::AspectKind;
use crate::ephemeris::BodyId;
use crate::zodiac::{Element, Modality, Sign};

pub fn element_description(element: Element) -> &'static str {
    match element {
        Element::Fire => "energetic, passionate, and action-oriented",
        Element::Earth => "practical, grounded, and stability-focused",
        Element::Air => "intellectual, communicative, and socially oriented",
        Element::Water => "emotional, intuitive, and empathetic",
    }
}

pub fn modality_description(modality: Modality) -> &'static str {
    match modality {
        Modality::Cardinal => "initiating and leadership-oriented",
        Modality::Fixed => "persistent, determined, and resistant to change",
        Modality::Mutable => "adaptable, flexible, and versatile",
    }
}

pub fn missing_element_description(element: Element) -> &'static str {
    match element {
        Element::Fire => {
            "You may find it challenging to take initiative or express passion and enthusiasm."
        }
        Element::Earth => {
            "You might struggle with practical matters, stability, or grounding yourself."
        }
        Element::Air => "Communication and intellectual analysis may be areas for development.",
        Element::Water => {
            "Emotional expression and intuitive understanding could be challenging areas."
        }
    }
}

pub const UNDERREPRESENTED_DESCRIPTION: &str =
    "a need to consciously develop and integrate these qualities for greater balance.";

pub fn dominant_element_description(element: Element) -> &'static str {
    match element {
        Element::Fire => {
            "You are likely energetic, enthusiastic, and action-oriented in your approach to life."
        }
        Element::Earth => "You tend to be practical, reliable, and focused on tangible results.",
        Element::Air => {
            "Your approach to life is likely intellectual, communicative, and socially oriented."
        }
        Element::Water => {
            "You are probably emotionally sensitive, intuitive, and empathetically attuned to others."
        }
    }
}

pub fn dominant_modality_description(modality: Modality) -> &'static str {
    match modality {
        Modality::Cardinal => "You tend to be a self-starter who initiates action and takes the lead.",
        Modality::Fixed => {
            "You are likely persistent, determined, and resistant to change once committed."
        }
        Modality::Mutable => {
            "You tend to be adaptable, flexible, and responsive to changing circumstances."
        }
    }
}

/// What a body does in a chart, phrased to follow "how you".
pub fn planet_function(id: &BodyId) -> &'static str {
    match id {
        BodyId::Sun => "express your core identity and purpose",
        BodyId::Moon => "respond emotionally and seek security",
        BodyId::Mercury => "think, communicate, and process information",
        BodyId::Venus => "relate to others and experience pleasure",
        BodyId::Mars => "assert yourself and take action",
        BodyId::Jupiter => "grow, expand, and find meaning",
        BodyId::Saturn => "structure, limit, and take responsibility",
        BodyId::Uranus => "innovate, rebel, and seek freedom",
        BodyId::Neptune => "dream, imagine, and transcend boundaries",
        BodyId::Pluto => "transform, empower, and regenerate",
        _ => "express yourself",
    }
}

pub fn transit_influence(id: &BodyId) -> &'static str {
    match id {
        BodyId::Sun => "conscious awareness and vitality",
        BodyId::Moon => "emotional fluctuations and needs",
        BodyId::Mercury => "communication and thought patterns",
        BodyId::Venus => "relationship dynamics and values",
        BodyId::Mars => "energy, action, and assertiveness",
        BodyId::Jupiter => "growth, expansion, and opportunity",
        BodyId::Saturn => "structure, limitation, and responsibility",
        BodyId::Uranus => "sudden change, innovation, and freedom",
        BodyId::Neptune => "inspiration, confusion, or spiritual awareness",
        BodyId::Pluto => "deep transformation and empowerment",
        _ => "planetary energies",
    }
}

pub fn sign_characteristics(sign: Sign) -> &'static str {
    match sign {
        Sign::Aries => "assertive, pioneering, and direct",
        Sign::Taurus => "steady, sensual, and resource-conscious",
        Sign::Gemini => "curious, versatile, and communicative",
        Sign::Cancer => "nurturing, protective, and emotionally sensitive",
        Sign::Leo => "expressive, proud, and creative",
        Sign::Virgo => "analytical, practical, and detail-oriented",
        Sign::Libra => "harmonious, relationship-focused, and fair-minded",
        Sign::Scorpio => "intense, transformative, and deeply perceptive",
        Sign::Sagittarius => "expansive, truth-seeking, and optimistic",
        Sign::Capricorn => "ambitious, disciplined, and achievement-oriented",
        Sign::Aquarius => "innovative, humanitarian, and independent",
        Sign::Pisces => "compassionate, intuitive, and spiritually attuned",
    }
}

pub fn house_description(house: u8) -> &'static str {
    match house {
        1 => "self-identity and personal appearance",
        2 => "personal resources, values, and possessions",
        3 => "communication, learning, and immediate environment",
        4 => "home, family, and emotional foundations",
        5 => "creativity, self-expression, and pleasure",
        6 => "work, health, and daily routines",
        7 => "partnerships, relationships, and open enemies",
        8 => "shared resources, transformation, and intimacy",
        9 => "higher education, philosophy, and long-distance travel",
        10 => "career, public reputation, and authority",
        11 => "friendships, groups, and future aspirations",
        12 => "unconscious, spirituality, and hidden matters",
        _ => "",
    }
}

pub fn house_ordinal(house: u8) -> String {
    let word = match house {
        1 => "First",
        2 => "Second",
        3 => "Third",
        4 => "Fourth",
        5 => "Fifth",
        6 => "Sixth",
        7 => "Seventh",
        8 => "Eighth",
        9 => "Ninth",
        10 => "Tenth",
        11 => "Eleventh",
        12 => "Twelfth",
        other => return other.to_string(),
    };
    word.to_string()
}

/// Verb form used between two body names, e.g. "Sun conjunct Moon".
pub fn aspect_verb(kind: AspectKind) -> &'static str {
    match kind {
        AspectKind::Conjunction => "conjunct",
        AspectKind::Opposition => "opposite",
        other => other.name(),
    }
}

pub fn aspect_quality(kind: AspectKind) -> &'static str {
    match kind {
        AspectKind::Conjunction => "blended and intensified",
        AspectKind::Opposition => "polarized and balanced",
        AspectKind::Trine => "harmonious and flowing",
        AspectKind::Square => "tense and challenging",
        AspectKind::Sextile => "supportive and opportunistic",
        AspectKind::Quincunx => "awkward and adjusting",
        AspectKind::Semisquare | AspectKind::Sesquiquadrate => "mildly frictional",
        AspectKind::Semisextile => "subtle and incremental",
        AspectKind::Quintile | AspectKind::Biquintile => "inventive and talented",
    }
}

pub fn aspect_influence(kind: AspectKind) -> &'static str {
    match kind {
        AspectKind::Conjunction => "intensified by",
        AspectKind::Opposition => "challenged or balanced by",
        AspectKind::Trine => "supported and enhanced by",
        AspectKind::Square => "challenged or stressed by",
        AspectKind::Sextile => "given opportunity through",
        _ => "influenced by",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_ids_use_default_arm() {
        assert_eq!(planet_function(&BodyId::from("ceres")), "express yourself");
        assert_eq!(transit_influence(&BodyId::Chiron), "planetary energies");
        assert_eq!(house_description(13), "");
        assert_eq!(house_ordinal(13), "13");
    }

    #[test]
    fn test_aspect_verb() {
        assert_eq!(aspect_verb(AspectKind::Conjunction), "conjunct");
        assert_eq!(aspect_verb(AspectKind::Opposition), "opposite");
        assert_eq!(aspect_verb(AspectKind::Trine), "trine");
        assert_eq!(aspect_influence(AspectKind::Quintile), "influenced by");
    }
}
