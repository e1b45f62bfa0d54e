use std::f64::consts::TAU;

use crate::error::SimError;

// ---------------------------------------------------------------------------
// Process-wide simulation constants
// ---------------------------------------------------------------------------

/// Immutable configuration for one run: timestep, central body, atmosphere,
/// drag model, and the guidance target.
///
/// Derived quantities (`rotation_rate`) are computed once at construction and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Constants {
    pub dt: f64,                 // integration timestep, s
    pub total_time: f64,         // run duration, s
    pub g: f64,                  // gravitational constant, m^3/(kg s^2)
    pub g0: f64,                 // standard gravity, m/s^2
    pub body_mass: f64,          // kg
    pub body_radius: f64,        // m
    pub rotation_period: f64,    // sidereal rotation period, s
    pub rotation_rate: f64,      // rad/s (derived: 2*pi / rotation_period)
    pub atmosphere_height: f64,  // vacuum above this altitude, m
    pub p0: f64,                 // sea-level reference pressure, Pa
    pub scale_height: f64,       // atmospheric scale height, m
    pub sea_level_density: f64,  // kg/m^3
    pub drag_coefficient: f64,
    pub reference_area: f64,     // m^2
    pub target_apoapsis: f64,    // guidance target altitude, m
}

impl Constants {
    /// Kerbin-like central body with the reference mission parameters.
    pub fn kerbin() -> Self {
        let rotation_period = 21_549.425;
        Constants {
            dt: 0.1,
            total_time: 600.0,
            g: 6.6743e-11,
            g0: 9.81,
            body_mass: 5.291_515_8e22,
            body_radius: 600_000.0,
            rotation_period,
            rotation_rate: TAU / rotation_period,
            atmosphere_height: 70_000.0,
            p0: 101_325.0,
            scale_height: 5_600.0,
            sea_level_density: 1.225,
            drag_coefficient: 0.5,
            reference_area: 75.0,
            target_apoapsis: 200_000.0,
        }
    }

    /// Standard gravitational parameter of the central body.
    pub fn mu(&self) -> f64 {
        self.g * self.body_mass
    }

    /// Number of fixed-step loop iterations for one run.
    pub fn steps(&self) -> usize {
        (self.total_time / self.dt) as usize
    }

    /// Reject malformed constants before the loop starts.
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("dt", self.dt),
            ("total_time", self.total_time),
            ("g", self.g),
            ("g0", self.g0),
            ("body_mass", self.body_mass),
            ("body_radius", self.body_radius),
            ("rotation_period", self.rotation_period),
            ("atmosphere_height", self.atmosphere_height),
            ("p0", self.p0),
            ("scale_height", self.scale_height),
            ("sea_level_density", self.sea_level_density),
            ("drag_coefficient", self.drag_coefficient),
            ("reference_area", self.reference_area),
            ("target_apoapsis", self.target_apoapsis),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::Config(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        if self.dt >= self.total_time {
            return Err(SimError::Config(format!(
                "dt ({}) must be smaller than total_time ({})",
                self.dt, self.total_time
            )));
        }
        let expected_rate = TAU / self.rotation_period;
        if (self.rotation_rate - expected_rate).abs() > 1e-12 {
            return Err(SimError::Config(
                "rotation_rate does not match rotation_period".into(),
            ));
        }
        Ok(())
    }
}
