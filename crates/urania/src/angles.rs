//! Circular arithmetic on ecliptic degrees.
//!
//! Every longitude entering the engine passes through [`normalize`] before it
//! is compared, so callers may hand in values in any range.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize(degrees: f64) -> f64 {
    let r = ((degrees % 360.0) + 360.0) % 360.0;
    // -1e-15 + 360.0 rounds to exactly 360.0
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Shortest-arc distance between two longitudes, in [0, 180].
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let diff = (normalize(a) - normalize(b)).abs();
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Signed distance travelled from `from` to `to` along the shorter arc, in (-180, 180].
pub fn signed_difference(from: f64, to: f64) -> f64 {
    let mut diff = normalize(to) - normalize(from);
    if diff > 180.0 {
        diff -= 360.0;
    } else if diff <= -180.0 {
        diff += 360.0;
    }
    diff
}

/// Midpoint of the shorter arc between two longitudes.
pub fn midpoint(a: f64, b: f64) -> f64 {
    normalize(normalize(a) + signed_difference(a, b) / 2.0)
}
