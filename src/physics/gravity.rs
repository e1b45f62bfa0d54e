use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Point-mass gravity and body rotation (body-centered inertial frame)
// ---------------------------------------------------------------------------

/// Inverse-square gravitational acceleration toward the body center.
pub fn gravity_accel(pos: &Vector3<f64>, mu: f64) -> Vector3<f64> {
    let r = pos.norm();
    if r < 1.0 {
        return Vector3::zeros();
    }
    -mu / (r * r * r) * pos
}

/// Velocity of the rigidly co-rotating atmosphere (and surface) at `pos`.
///
/// The body spins about its polar axis (Y) at a fixed rate; at the equatorial
/// point (R, 0, 0) this yields an eastward velocity (0, 0, R * rate).
pub fn rotation_velocity(pos: &Vector3<f64>, rate: f64) -> Vector3<f64> {
    Vector3::new(-pos.z * rate, 0.0, pos.x * rate)
}
