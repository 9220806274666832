//! House cusps and house membership.
//!
//! Cusps are arbitrary boundary longitudes; nothing here assumes the houses are
//! evenly spaced. House `n` spans `[cusp[n-1], cusp[n % 12])`, wrapping through
//! 0° whenever the end cusp is numerically smaller than the start cusp.

use serde::{Deserialize, Serialize};

use crate::angles::normalize;
use crate::ephemeris::HouseCusp;
use crate::error::ChartError;

/// The 12 cusp longitudes of one chart, indexed by `house - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps([f64; 12]);

impl HouseCusps {
    pub fn new(longitudes: [f64; 12]) -> Self {
        Self(longitudes.map(normalize))
    }

    /// Equal houses of 30° each, house 1 starting at `start`.
    pub fn equal(start: f64) -> Self {
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = start + i as f64 * 30.0;
        }
        Self::new(cusps)
    }

    /// Build from input cusps, which may arrive in any order.
    pub fn from_cusps(cusps: &[HouseCusp]) -> Result<Self, ChartError> {
        if cusps.len() != 12 {
            return Err(ChartError::InvalidCuspCount { found: cusps.len() });
        }
        let mut longitudes = [None; 12];
        for cusp in cusps {
            if !(1..=12).contains(&cusp.house_number) {
                return Err(ChartError::InvalidHouseNumber {
                    house: cusp.house_number,
                });
            }
            let slot = &mut longitudes[usize::from(cusp.house_number - 1)];
            if slot.is_some() {
                return Err(ChartError::DuplicateHouse {
                    house: cusp.house_number,
                });
            }
            *slot = Some(cusp.longitude);
        }
        // 12 distinct numbers in 1..=12 fill every slot
        Ok(Self::new(longitudes.map(|l| l.unwrap_or_default())))
    }

    pub fn longitudes(&self) -> &[f64; 12] {
        &self.0
    }

    /// Cusp longitude of `house` (1..=12, wrapping).
    pub fn cusp(&self, house: u8) -> f64 {
        self.0[usize::from(house.saturating_sub(1)) % 12]
    }

    /// Width of `house` in degrees.
    pub fn span(&self, house: u8) -> f64 {
        let start = self.cusp(house);
        let end = self.cusp(house % 12 + 1);
        normalize(end - start)
    }

    pub fn to_input(&self) -> Vec<HouseCusp> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &longitude)| HouseCusp {
                house_number: i as u8 + 1,
                longitude,
            })
            .collect()
    }
}

/// House number (1-12) containing `longitude`.
///
/// Falls back to house 1 when the cusps do not tile the circle; that is a
/// caller bug, reported through `log::warn!` instead of an error so that a
/// snapshot can always be produced.
pub fn house_for_longitude(longitude: f64, cusps: &HouseCusps) -> u8 {
    let query = normalize(longitude);
    let c = cusps.longitudes();

    for i in 0..12 {
        let start = c[i];
        let mut end = c[(i + 1) % 12];
        let mut q = query;

        if end < start {
            end += 360.0;
            if q < start {
                q += 360.0;
            }
        }

        if q >= start && q < end {
            return i as u8 + 1;
        }
    }

    log::warn!(
        "longitude {query} matched no house for cusps {:?}; falling back to house 1",
        c
    );
    1
}
