use nalgebra::Vector3;

use crate::config::Constants;

// ---------------------------------------------------------------------------
// Apsides from an instantaneous state vector
// ---------------------------------------------------------------------------

/// Specific orbital energy above this value is treated as not-yet-bound
/// (parabolic, hyperbolic, or degenerate) rather than a closed ellipse.
const BOUND_ENERGY_THRESHOLD: f64 = -0.1;

/// Apoapsis and periapsis altitudes above the body surface.
///
/// Ephemeral: recomputed from the state vector every tick, never stored on
/// the vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Apsides {
    pub apoapsis: f64,  // m
    pub periapsis: f64, // m
}

/// Derive apsides via vis-viva energy and the Laplace-Runge-Lenz
/// eccentricity vector.
///
/// Guidance never sees a failure from this routine: an unbound or
/// near-degenerate energy falls back to the current altitude for both
/// values, and any non-finite arithmetic collapses to (0, 0).
pub fn apsides(pos: &Vector3<f64>, vel: &Vector3<f64>, c: &Constants) -> Apsides {
    let r = pos.norm();
    let v = vel.norm();
    let mu = c.mu();

    let energy = 0.5 * v * v - mu / r;
    if !energy.is_finite() {
        return Apsides { apoapsis: 0.0, periapsis: 0.0 };
    }
    if energy >= BOUND_ENERGY_THRESHOLD {
        let altitude = r - c.body_radius;
        return Apsides { apoapsis: altitude, periapsis: altitude };
    }

    let sma = -mu / (2.0 * energy);
    let e_vec = ((v * v - mu / r) * pos - pos.dot(vel) * vel) / mu;
    // guard tiny negative squared-eccentricity from rounding
    let ecc = e_vec.norm_squared().max(0.0).sqrt();

    let apoapsis = sma * (1.0 + ecc) - c.body_radius;
    let periapsis = sma * (1.0 - ecc) - c.body_radius;
    if !apoapsis.is_finite() || !periapsis.is_finite() {
        return Apsides { apoapsis: 0.0, periapsis: 0.0 };
    }
    Apsides { apoapsis, periapsis }
}
