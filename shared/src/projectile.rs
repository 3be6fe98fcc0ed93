//! Effect-carrier flight and hit tests.
//!
//! Carriers are points moving in straight lines; targets are upright
//! capsules. Everything is analytic, so the same functions drive the
//! server tick and the tests.

use crate::utils::Micros;
use nalgebra::Vector3;

/// Advances a carrier along its velocity.
pub fn step_position(position: Vector3<f32>, velocity: Vector3<f32>, dt: f32) -> Vector3<f32> {
    position + velocity * dt
}

pub fn is_expired(expires_at: Micros, now: Micros) -> bool {
    now >= expires_at
}

/// Whether a parked-phase carrier (slow orb) is still in its flight phase.
pub fn is_in_flight(move_until: Option<Micros>, now: Micros) -> bool {
    match move_until {
        Some(until) => now < until,
        None => true,
    }
}

/// Sphere-vs-capsule overlap.
///
/// The capsule stands upright: `base` is the feet position, `height` the
/// full capsule height. The carrier is a sphere of `sphere_radius` at
/// `center`.
pub fn sphere_hits_capsule(
    center: &Vector3<f32>,
    sphere_radius: f32,
    base: &Vector3<f32>,
    capsule_radius: f32,
    capsule_height: f32,
) -> bool {
    // Closest point on the capsule's core segment to the sphere center.
    let core_bottom = base.y + capsule_radius;
    let core_top = base.y + (capsule_height - capsule_radius).max(capsule_radius);
    let closest_y = center.y.clamp(core_bottom, core_top);

    let closest = Vector3::new(base.x, closest_y, base.z);
    let reach = sphere_radius + capsule_radius;

    (center - closest).norm_squared() <= reach * reach
}

/// Planar (XZ) range check for area carriers (slow orb pulses, pickups).
pub fn within_planar_radius(center: &Vector3<f32>, target: &Vector3<f32>, radius: f32) -> bool {
    let dx = target.x - center.x;
    let dz = target.z - center.z;
    dx * dx + dz * dz <= radius * radius
}

/// Direction a knockback pushes a target: radially away from the carrier
/// on the XZ plane, falling back to `carrier_forward` for a dead-center
/// hit.
pub fn knockback_direction(
    carrier: &Vector3<f32>,
    target: &Vector3<f32>,
    carrier_forward: &Vector3<f32>,
) -> Vector3<f32> {
    let mut dir = Vector3::new(target.x - carrier.x, 0.0, target.z - carrier.z);
    if dir.norm_squared() < 1.0e-4 {
        dir = Vector3::new(carrier_forward.x, 0.0, carrier_forward.z);
    }

    match dir.try_normalize(1.0e-6) {
        Some(unit) => unit,
        None => Vector3::new(0.0, 0.0, -1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_integrates_velocity() {
        let p = step_position(Vector3::new(0.0, 1.0, 0.0), Vector3::new(18.0, 0.0, 0.0), 0.5);
        assert_eq!(p, Vector3::new(9.0, 1.0, 0.0));
    }

    #[test]
    fn flight_phase_ends_at_move_until() {
        assert!(is_in_flight(Some(2_000_000), 1_999_999));
        assert!(!is_in_flight(Some(2_000_000), 2_000_000));
        // Carriers without a park phase fly for their whole lifetime.
        assert!(is_in_flight(None, i64::MAX - 1));
    }

    #[test]
    fn capsule_hit_at_chest_height() {
        let feet = Vector3::new(0.0, 0.0, 0.0);

        // A bullet passing at y=1.0, 0.5 m to the side: 0.6 + 0.35 reach.
        let hit = Vector3::new(0.5, 1.0, 0.0);
        assert!(sphere_hits_capsule(&hit, 0.6, &feet, 0.35, 1.8));

        let miss = Vector3::new(1.5, 1.0, 0.0);
        assert!(!sphere_hits_capsule(&miss, 0.6, &feet, 0.35, 1.8));
    }

    #[test]
    fn capsule_hit_respects_height() {
        let feet = Vector3::new(0.0, 0.0, 0.0);

        // Directly overhead but far above the head: no hit.
        let above = Vector3::new(0.0, 4.0, 0.0);
        assert!(!sphere_hits_capsule(&above, 0.6, &feet, 0.35, 1.8));

        // Just above the head, within the cap's reach.
        let grazing = Vector3::new(0.0, 2.0, 0.0);
        assert!(sphere_hits_capsule(&grazing, 0.6, &feet, 0.35, 1.8));
    }

    #[test]
    fn planar_radius_ignores_height_difference() {
        let orb = Vector3::new(0.0, 0.2, 0.0);
        let target = Vector3::new(3.0, 1.7, 0.0);

        assert!(within_planar_radius(&orb, &target, 3.5));
        assert!(!within_planar_radius(&orb, &Vector3::new(3.6, 0.0, 0.0), 3.5));
    }

    #[test]
    fn knockback_pushes_radially_away() {
        let carrier = Vector3::new(0.0, 0.5, 0.0);
        let target = Vector3::new(2.0, 0.0, 0.0);
        let forward = Vector3::new(0.0, 0.0, -1.0);

        let dir = knockback_direction(&carrier, &target, &forward);
        assert!((dir - Vector3::new(1.0, 0.0, 0.0)).norm() < 1.0e-6);
    }

    #[test]
    fn dead_center_knockback_falls_back_to_carrier_forward() {
        let carrier = Vector3::new(1.0, 0.5, 1.0);
        let target = Vector3::new(1.0, 0.0, 1.0);
        let forward = Vector3::new(0.0, 0.0, -1.0);

        let dir = knockback_direction(&carrier, &target, &forward);
        assert!((dir - Vector3::new(0.0, 0.0, -1.0)).norm() < 1.0e-6);
    }
}
