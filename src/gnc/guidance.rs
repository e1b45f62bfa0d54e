use std::fmt;

use crate::config::Constants;
use crate::orbital;
use crate::vehicle::Vehicle;

// ---------------------------------------------------------------------------
// Guidance finite state machine
// ---------------------------------------------------------------------------

/// Flight phases, in order. Transitions only ever move forward; `Orbit` is
/// terminal and absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Ascent,
    GravityTurn,
    Coast,
    Circularize,
    Orbit,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Ascent => "ASCENT",
            Phase::GravityTurn => "GRAVITY_TURN",
            Phase::Coast => "COAST",
            Phase::Circularize => "CIRCULARIZE",
            Phase::Orbit => "ORBIT",
        })
    }
}

/// Altitude over which the ascent pitch program runs, m.
const PITCH_PROGRAM_CEILING: f64 = 30_000.0;

/// Coast stall heuristic: a vertical speed under 20 m/s only counts as
/// apoapsis approach above this altitude, m. A guidance tuning value, not
/// the atmosphere ceiling it happens to equal.
const COAST_STALL_ALTITUDE: f64 = 70_000.0;

/// One guidance tick: read the fresh state and orbit estimate, write
/// throttle, pitch, stage index, and phase back into the vehicle.
///
/// No guidance state is memoized beyond the phase tag and stage index; every
/// derived quantity (vertical speed, apsides) is recomputed from the
/// instantaneous state vector.
pub fn autopilot(vehicle: &mut Vehicle, c: &Constants) {
    let alt = vehicle.altitude(c);
    let orbit = orbital::apsides(&vehicle.pos, &vehicle.vel, c);
    let v_vert = vehicle.vertical_speed();
    let spent = vehicle.active_engine().map_or(true, |e| e.is_exhausted());

    match vehicle.phase {
        Phase::Ascent => {
            // full kick off the pad, then back off to limit dynamic pressure
            vehicle.throttle = if alt < 2_000.0 || v_vert < 50.0 { 0.8 } else { 0.78 };
            vehicle.pitch = if alt < PITCH_PROGRAM_CEILING {
                let ratio = alt.max(0.0) / PITCH_PROGRAM_CEILING;
                90.0 - 48.0 * ratio.powf(0.45)
            } else {
                50.0
            };
            if spent {
                vehicle.stage_idx = 1;
                vehicle.phase = Phase::GravityTurn;
            }
        }
        Phase::GravityTurn => {
            vehicle.pitch = 56.0;
            vehicle.throttle = 1.0;
            if orbit.apoapsis > c.target_apoapsis {
                vehicle.throttle = 0.0;
                vehicle.stage_idx = 2;
                vehicle.phase = Phase::Coast;
            } else if spent {
                // A spent booster advances the stage but the phase and the
                // full-throttle command stay; the next stage keeps pushing
                // the apoapsis up.
                vehicle.stage_idx = 2;
            }
        }
        Phase::Coast => {
            vehicle.throttle = 0.0;
            vehicle.pitch = 0.0; // prograde, tangential
            let near_apoapsis = c.target_apoapsis - alt < 3_000.0;
            let stalling_high = v_vert < 20.0 && alt > COAST_STALL_ALTITUDE;
            if near_apoapsis || stalling_high {
                vehicle.phase = Phase::Circularize;
            }
        }
        Phase::Circularize => {
            vehicle.throttle = 1.0;
            vehicle.pitch = 0.0;
            if orbit.periapsis > c.target_apoapsis - 5_000.0 || spent {
                vehicle.throttle = 0.0;
                vehicle.phase = Phase::Orbit;
            }
        }
        Phase::Orbit => {} // terminal, no further commands
    }
}
