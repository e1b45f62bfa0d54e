use nalgebra::Vector3;

use crate::config::Constants;
use crate::error::StepFault;
use crate::physics::{aerodynamics, atmosphere, gravity};
use crate::vehicle::Vehicle;

// ---------------------------------------------------------------------------
// Semi-implicit Euler step
// ---------------------------------------------------------------------------

/// Advance the vehicle by one fixed timestep.
///
/// Forces assembled per step:
///   1. Gravity — inverse-square, toward the body center
///   2. Drag   — quadratic, opposing the air-relative velocity
///   3. Thrust — active engine at the commanded throttle, along the
///      pitch-rotated up/east direction
///
/// Velocity is updated from the summed accelerations first, then position
/// from the updated velocity (symplectic; keeps orbital energy bounded over
/// long coasts). Returns the thrust magnitude applied, for logging; a
/// non-finite post-step state is reported as a fault instead of propagating.
pub fn step(vehicle: &mut Vehicle, c: &Constants) -> Result<f64, StepFault> {
    let dt = c.dt;
    let altitude = vehicle.altitude(c);
    let mass = vehicle.total_mass();

    let a_gravity = gravity::gravity_accel(&vehicle.pos, c.mu());

    let atmo = atmosphere::pressure_density(altitude, c);
    let air_vel = vehicle.surface_velocity(c);
    let a_drag = aerodynamics::drag_accel(
        &air_vel,
        atmo.density,
        mass,
        c.drag_coefficient,
        c.reference_area,
    );

    let throttle = vehicle.throttle;
    let thrust = match vehicle.active_engine_mut() {
        Some(engine) => engine.burn(atmo.pressure, throttle, dt, c),
        None => 0.0,
    };

    // Thrust direction: rotate between local up and the in-plane tangential
    // direction by the pitch angle. The reference trajectory stays in the
    // equatorial x-z plane, so the tangential direction is the fixed +z axis.
    let up = vehicle.pos / vehicle.radius();
    let east = Vector3::new(0.0, 0.0, 1.0);
    let pitch_rad = vehicle.pitch.to_radians();
    let dir = up * pitch_rad.sin() + east * pitch_rad.cos();
    let a_thrust = match dir.try_normalize(1e-12) {
        Some(unit) => unit * (thrust / mass),
        None => Vector3::zeros(),
    };

    let accel = a_gravity + a_drag + a_thrust;
    vehicle.vel += accel * dt;
    vehicle.pos += vehicle.vel * dt;
    vehicle.time += dt;

    check_finite(vehicle)?;
    Ok(thrust)
}

fn check_finite(vehicle: &Vehicle) -> Result<(), StepFault> {
    let detail = if !vehicle.pos.iter().all(|x| x.is_finite()) {
        "non-finite position"
    } else if !vehicle.vel.iter().all(|x| x.is_finite()) {
        "non-finite velocity"
    } else if !vehicle.total_mass().is_finite() {
        "non-finite mass"
    } else {
        return Ok(());
    };
    Err(StepFault {
        time: vehicle.time,
        detail: detail.into(),
    })
}
