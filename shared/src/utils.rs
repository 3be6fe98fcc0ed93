use crate::constants::{MAX_INTENT_DISTANCE_SQ, SMALLEST_REQUEST_DISTANCE_SQ, YAW_EPS};
use nalgebra::{Vector2, Vector3};

/// Microseconds since the Unix epoch. All gameplay timestamps use this
/// representation so the rules here stay independent of the host's clock
/// types.
pub type Micros = i64;

pub fn secs_to_micros(secs: f32) -> Micros {
    (secs as f64 * 1_000_000.0) as Micros
}

pub fn micros_to_secs(micros: Micros) -> f32 {
    (micros as f64 / 1_000_000.0) as f32
}

/// Drops the Y component of a world position.
pub fn to_planar(v: &Vector3<f32>) -> Vector2<f32> {
    Vector2::new(v.x, v.z)
}

pub fn yaw_from_xz(xz: &Vector2<f32>) -> Option<f32> {
    if xz.norm_squared() > YAW_EPS {
        return Some((-xz[0]).atan2(-xz[1]));
    }

    None
}

/// Unit forward vector on the XZ plane for a yaw angle (radians).
///
/// Inverse of [`yaw_from_xz`]: `yaw_from_xz(&forward_from_yaw(y)) == Some(y)`
/// up to floating point.
pub fn forward_from_yaw(yaw: f32) -> Vector2<f32> {
    Vector2::new(-yaw.sin(), -yaw.cos())
}

/// Planar (XZ) distance squared between two world positions (meters^2).
pub fn planar_distance_sq(a: &Vector2<f32>, b: &Vector2<f32>) -> f32 {
    let x = b.x - a.x;
    let z = b.y - a.y;
    x * x + z * z
}

/// Are two positions beyond the allowed planar movement range (meters)?
pub fn is_move_too_far(a: &Vector2<f32>, b: &Vector2<f32>) -> bool {
    planar_distance_sq(a, b) > MAX_INTENT_DISTANCE_SQ
}

/// Are two positions within the planar request-acceptance radius (meters)?
pub fn is_move_too_close(a: &Vector2<f32>, b: &Vector2<f32>) -> bool {
    planar_distance_sq(a, b) <= SMALLEST_REQUEST_DISTANCE_SQ
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaw_round_trips_through_forward_vector() {
        for &yaw in &[0.0f32, 0.5, -0.5, 1.5, 3.0, -3.0] {
            let fwd = forward_from_yaw(yaw);
            let back = yaw_from_xz(&fwd).expect("unit vector always yields a yaw");
            assert!((back - yaw).abs() < 1.0e-5, "yaw {yaw} round-tripped to {back}");
        }
    }

    #[test]
    fn yaw_is_none_for_negligible_motion() {
        assert_eq!(yaw_from_xz(&Vector2::new(0.0, 0.0)), None);
        assert_eq!(yaw_from_xz(&Vector2::new(1.0e-5, 0.0)), None);
    }

    #[test]
    fn move_validation_thresholds() {
        let origin = Vector2::new(0.0, 0.0);

        // Within the acceptance radius counts as too close.
        assert!(is_move_too_close(&origin, &Vector2::new(0.1, 0.0)));
        assert!(!is_move_too_close(&origin, &Vector2::new(1.0, 0.0)));

        // Beyond the intent range counts as too far.
        assert!(is_move_too_far(&origin, &Vector2::new(101.0, 0.0)));
        assert!(!is_move_too_far(&origin, &Vector2::new(99.0, 0.0)));
    }

    #[test]
    fn micros_conversions_are_consistent() {
        assert_eq!(secs_to_micros(1.5), 1_500_000);
        assert_eq!(secs_to_micros(0.05), 50_000);
        assert!((micros_to_secs(250_000) - 0.25).abs() < 1.0e-6);
    }
}
