use crate::angles::angular_separation;
use crate::aspects::types::{AspectCatalog, AspectCore, AspectRelation, DetectedAspect};
use crate::ephemeris::CelestialBody;

/// Aspect calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// Closest catalog aspect between two longitudes, if any is within orb.
    ///
    /// Among all entries whose orb accepts the separation, the one whose ideal
    /// angle is nearest wins. Exact ties keep the entry defined first.
    pub fn find_aspect(&self, lon1: f64, lon2: f64, catalog: &AspectCatalog) -> Option<AspectCore> {
        let separation = angular_separation(lon1, lon2);

        // Nothing in the catalog can reach this far
        if separation > catalog.max_reach() {
            return None;
        }

        let mut best: Option<AspectCore> = None;
        for def in catalog.definitions() {
            let delta = (separation - def.angle).abs();
            if delta > def.orb {
                continue;
            }
            if best.map_or(true, |b| delta < b.orb) {
                best = Some(AspectCore {
                    kind: def.kind,
                    exact_angle: def.angle,
                    orb: delta,
                    is_exact: delta < 0.1,
                });
            }
        }
        best
    }

    /// Aspects between every unordered pair of one body set.
    pub fn all_aspects(&self, bodies: &[CelestialBody], catalog: &AspectCatalog) -> Vec<DetectedAspect> {
        self.pairwise(bodies, catalog, AspectRelation::Natal)
    }

    /// Transit-to-natal aspects followed by transit-to-transit aspects.
    pub fn transit_aspects(
        &self,
        transit: &[CelestialBody],
        natal: &[CelestialBody],
        catalog: &AspectCatalog,
    ) -> Vec<DetectedAspect> {
        let mut aspects = Vec::new();
        for t in transit {
            for n in natal {
                if let Some(aspect) = self.find_aspect(t.longitude, n.longitude, catalog) {
                    aspects.push(DetectedAspect {
                        from: t.id.clone(),
                        to: n.id.clone(),
                        aspect,
                        relation: AspectRelation::TransitToNatal,
                    });
                }
            }
        }
        let cross = aspects.len();

        aspects.extend(self.pairwise(transit, catalog, AspectRelation::TransitToTransit));

        log::debug!(
            "transit aspects: {} to natal, {} among transits",
            cross,
            aspects.len() - cross
        );
        aspects
    }

    fn pairwise(
        &self,
        bodies: &[CelestialBody],
        catalog: &AspectCatalog,
        relation: AspectRelation,
    ) -> Vec<DetectedAspect> {
        let mut aspects = Vec::new();
        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                if let Some(aspect) = self.find_aspect(a.longitude, b.longitude, catalog) {
                    aspects.push(DetectedAspect {
                        from: a.id.clone(),
                        to: b.id.clone(),
                        aspect,
                        relation,
                    });
                }
            }
        }
        aspects
    }
}
