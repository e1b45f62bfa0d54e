use crate::config::Constants;

// ---------------------------------------------------------------------------
// Engine: one propulsion stage
// ---------------------------------------------------------------------------

/// One propulsion stage of the vehicle.
///
/// Created once at vehicle construction and never destroyed; only its
/// propellant is consumed. Thrust and specific impulse are rated at sea level
/// and in vacuum, interpolated by ambient pressure at burn time.
#[derive(Debug, Clone)]
pub struct Engine {
    pub name: String,
    pub dry_mass: f64,        // kg
    pub propellant_mass: f64, // kg, monotonically non-increasing, floored at 0
    pub thrust_asl: f64,      // N at sea level
    pub thrust_vac: f64,      // N in vacuum
    pub isp_asl: f64,         // s at sea level
    pub isp_vac: f64,         // s in vacuum
}

impl Engine {
    pub fn total_mass(&self) -> f64 {
        self.dry_mass + self.propellant_mass
    }

    pub fn is_exhausted(&self) -> bool {
        self.propellant_mass <= 0.0
    }

    /// Burn for one timestep at the given throttle and ambient pressure.
    ///
    /// The vacuum fraction `max(0, 1 - p/p0)` drives a linear interpolation
    /// of both thrust and isp between their sea-level and vacuum ratings; the
    /// clamp keeps higher-than-reference pressure from extrapolating below
    /// the sea-level rating. Propellant is drawn down by
    /// `thrust / (isp * g0) * dt` and floored at zero.
    ///
    /// Returns the thrust magnitude produced; zero on empty tank or zero
    /// throttle, with no propellant consumed.
    pub fn burn(&mut self, pressure: f64, throttle: f64, dt: f64, c: &Constants) -> f64 {
        if throttle <= 0.0 || self.is_exhausted() {
            return 0.0;
        }
        let vac_frac = (1.0 - pressure / c.p0).max(0.0);
        let thrust = (self.thrust_asl + (self.thrust_vac - self.thrust_asl) * vac_frac) * throttle;
        let isp = self.isp_asl + (self.isp_vac - self.isp_asl) * vac_frac;
        let consumed = thrust / (isp * c.g0) * dt;
        self.propellant_mass = (self.propellant_mass - consumed).max(0.0);
        thrust
    }
}
