use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Quadratic drag
// ---------------------------------------------------------------------------

/// Below this airspeed the drag direction is numerically unstable; treat the
/// vehicle as sitting in still air.
const MIN_AIRSPEED: f64 = 0.1;

/// Drag acceleration opposing the air-relative velocity.
///
/// `air_vel` is the velocity relative to the co-rotating atmosphere, not the
/// inertial velocity.
pub fn drag_accel(
    air_vel: &Vector3<f64>,
    density: f64,
    mass: f64,
    cd: f64,
    area: f64,
) -> Vector3<f64> {
    let air_speed = air_vel.norm();
    if air_speed <= MIN_AIRSPEED {
        return Vector3::zeros();
    }
    let drag = 0.5 * density * air_speed * air_speed * cd * area;
    -(drag / mass) * (air_vel / air_speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_opposes_air_velocity() {
        let air_vel = Vector3::new(0.0, 0.0, 300.0);
        let a = drag_accel(&air_vel, 1.225, 150_000.0, 0.5, 75.0);
        assert!(a.z < 0.0, "drag should oppose the air-relative velocity");
        assert_eq!(a.x, 0.0);
    }

    #[test]
    fn no_drag_below_threshold() {
        let air_vel = Vector3::new(0.05, 0.0, 0.0);
        let a = drag_accel(&air_vel, 1.225, 150_000.0, 0.5, 75.0);
        assert_eq!(a.norm(), 0.0);
    }

    #[test]
    fn no_drag_in_vacuum() {
        let air_vel = Vector3::new(0.0, 0.0, 2_000.0);
        let a = drag_accel(&air_vel, 0.0, 150_000.0, 0.5, 75.0);
        assert!(a.norm() < 1e-15);
    }

    #[test]
    fn drag_scales_with_speed_squared() {
        let a1 = drag_accel(&Vector3::new(0.0, 0.0, 100.0), 1.0, 1_000.0, 0.5, 75.0);
        let a2 = drag_accel(&Vector3::new(0.0, 0.0, 200.0), 1.0, 1_000.0, 0.5, 75.0);
        assert!((a2.norm() / a1.norm() - 4.0).abs() < 1e-9);
    }
}
