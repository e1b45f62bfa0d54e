use crate::config::Constants;

// ---------------------------------------------------------------------------
// Exponential atmosphere, single scale height
// ---------------------------------------------------------------------------

/// Ambient conditions at a given altitude.
#[derive(Debug, Clone, Copy)]
pub struct Atmo {
    pub pressure: f64, // Pa
    pub density: f64,  // kg/m^3
}

impl Atmo {
    pub const VACUUM: Atmo = Atmo { pressure: 0.0, density: 0.0 };
}

/// Pressure and density at `altitude`.
///
/// Both decay exponentially with the shared scale height, anchored to the
/// sea-level reference values. Above the atmosphere ceiling this is hard
/// vacuum. Pure function, no failure modes.
pub fn pressure_density(altitude: f64, c: &Constants) -> Atmo {
    if altitude > c.atmosphere_height {
        return Atmo::VACUUM;
    }
    let decay = (-altitude / c.scale_height).exp();
    Atmo {
        pressure: c.p0 * decay,
        density: c.sea_level_density * decay,
    }
}
