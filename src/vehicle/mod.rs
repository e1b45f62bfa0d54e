pub mod engine;

pub use engine::Engine;

use nalgebra::Vector3;

use crate::config::Constants;
use crate::gnc::Phase;
use crate::physics::gravity;

// ---------------------------------------------------------------------------
// Vehicle: staged launch vehicle state
// ---------------------------------------------------------------------------

/// The single mutable aggregate the simulation advances each tick.
///
/// Position and velocity live in a body-centered inertial frame. Attitude is
/// reduced to one pitch command; `stage_idx` selects the active engine and
/// only ever moves forward. Stages before the index are logically dropped and
/// contribute no mass.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub engines: Vec<Engine>,
    pub payload_mass: f64,    // kg, always positive
    pub pos: Vector3<f64>,    // m
    pub vel: Vector3<f64>,    // m/s
    pub time: f64,            // elapsed mission time, s
    pub throttle: f64,        // commanded, in [0, 1]
    pub pitch: f64,           // commanded, degrees; 90 = radial, 0 = tangential
    pub stage_idx: usize,     // active engine, monotonically non-decreasing
    pub phase: Phase,
}

impl Vehicle {
    /// Vehicle on the pad at the equator, co-rotating with the surface.
    pub fn on_pad(engines: Vec<Engine>, payload_mass: f64, c: &Constants) -> Self {
        let pos = Vector3::new(c.body_radius, 0.0, 0.0);
        let vel = gravity::rotation_velocity(&pos, c.rotation_rate);
        Vehicle {
            engines,
            payload_mass,
            pos,
            vel,
            time: 0.0,
            throttle: 1.0,
            pitch: 90.0,
            stage_idx: 0,
            phase: Phase::Ascent,
        }
    }

    /// Total mass: payload plus every stage at or after the active index.
    /// Derived, never stored.
    pub fn total_mass(&self) -> f64 {
        let stages: f64 = self.engines[self.stage_idx.min(self.engines.len())..]
            .iter()
            .map(Engine::total_mass)
            .sum();
        self.payload_mass + stages
    }

    /// The engine guidance and propulsion currently act on, if any remain.
    pub fn active_engine(&self) -> Option<&Engine> {
        self.engines.get(self.stage_idx)
    }

    pub fn active_engine_mut(&mut self) -> Option<&mut Engine> {
        self.engines.get_mut(self.stage_idx)
    }

    pub fn radius(&self) -> f64 {
        self.pos.norm()
    }

    pub fn altitude(&self, c: &Constants) -> f64 {
        self.radius() - c.body_radius
    }

    /// Radial component of velocity: the rate of change of altitude.
    pub fn vertical_speed(&self) -> f64 {
        self.pos.dot(&self.vel) / self.pos.norm()
    }

    /// Velocity relative to the rotating surface and atmosphere.
    pub fn surface_velocity(&self, c: &Constants) -> Vector3<f64> {
        self.vel - gravity::rotation_velocity(&self.pos, c.rotation_rate)
    }

    pub fn surface_speed(&self, c: &Constants) -> f64 {
        self.surface_velocity(c).norm()
    }
}

// ---------------------------------------------------------------------------
// Preset vehicles
// ---------------------------------------------------------------------------

pub mod presets {
    use super::{Engine, Vehicle};
    use crate::config::Constants;

    /// Three-stage medium-lift vehicle flown by the reference mission.
    pub fn soyuz(c: &Constants) -> Vehicle {
        let engines = vec![
            Engine {
                name: "Stage1".into(),
                dry_mass: 26_093.0,
                propellant_mass: 122_000.0,
                thrust_asl: 2_800_000.0,
                thrust_vac: 3_500_000.0,
                isp_asl: 250.0,
                isp_vac: 280.0,
            },
            Engine {
                name: "Stage2".into(),
                dry_mass: 7_000.0,
                propellant_mass: 40_000.0,
                thrust_asl: 1_300_000.0,
                thrust_vac: 1_300_000.0,
                isp_asl: 280.0,
                isp_vac: 320.0,
            },
            Engine {
                name: "Stage3".into(),
                dry_mass: 1_000.0,
                propellant_mass: 4_000.0,
                thrust_asl: 300_000.0,
                thrust_vac: 3_000_000.0,
                isp_asl: 100.0,
                isp_vac: 345.0,
            },
        ];
        Vehicle::on_pad(engines, 9_200.0, c)
    }
}
