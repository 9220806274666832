use serde::Serialize;

use crate::chart::PlanetEntry;
use crate::zodiac::{Element, Modality};

/// Element and modality tallies over a set of planet entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementBalance {
    pub total: usize,
    /// In Fire, Earth, Air, Water order
    pub elements: [(Element, usize); 4],
    /// In Cardinal, Fixed, Mutable order
    pub modalities: [(Modality, usize); 3],
}

impl ElementBalance {
    pub fn from_planets(planets: &[PlanetEntry]) -> Self {
        let mut elements = Element::ALL.map(|e| (e, 0));
        let mut modalities = Modality::ALL.map(|m| (m, 0));
        for planet in planets {
            for (element, count) in elements.iter_mut() {
                if *element == planet.element {
                    *count += 1;
                }
            }
            for (modality, count) in modalities.iter_mut() {
                if *modality == planet.modality {
                    *count += 1;
                }
            }
        }
        Self {
            total: planets.len(),
            elements,
            modalities,
        }
    }

    /// Rounded share of the total; 0 when there is nothing to count.
    pub fn percentage(&self, count: usize) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (count as f64 / self.total as f64 * 100.0).round() as u32
    }

    /// Highest count, earliest element on ties.
    pub fn dominant_element(&self) -> (Element, usize) {
        first_max(&self.elements)
    }

    pub fn dominant_modality(&self) -> (Modality, usize) {
        first_max(&self.modalities)
    }

    pub fn missing_elements(&self) -> Vec<Element> {
        self.elements_with_count(0)
    }

    pub fn underrepresented_elements(&self) -> Vec<Element> {
        self.elements_with_count(1)
    }

    fn elements_with_count(&self, n: usize) -> Vec<Element> {
        self.elements
            .iter()
            .filter(|(_, count)| *count == n)
            .map(|(element, _)| *element)
            .collect()
    }
}

fn first_max<T: Copy>(counts: &[(T, usize)]) -> (T, usize) {
    let mut best = counts[0];
    for &entry in &counts[1..] {
        if entry.1 > best.1 {
            best = entry;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_max_prefers_earlier_on_tie() {
        let counts = [(Element::Fire, 2), (Element::Earth, 3), (Element::Air, 3)];
        assert_eq!(first_max(&counts), (Element::Earth, 3));
    }

    #[test]
    fn test_empty_balance() {
        let balance = ElementBalance::from_planets(&[]);
        assert_eq!(balance.percentage(0), 0);
        assert_eq!(balance.dominant_element(), (Element::Fire, 0));
        assert_eq!(balance.dominant_modality(), (Modality::Cardinal, 0));
        assert_eq!(balance.missing_elements().len(), 4);
        assert!(balance.underrepresented_elements().is_empty());
    }
}
