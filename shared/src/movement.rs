//! Kinematic movement steps for the server tick.
//!
//! No collision world here: the arena is a flat square platform and
//! everything else is analytic. The tick composes these pieces per actor:
//! planar step toward the intent point, gravity when off the platform,
//! knockback displacement on top.

use crate::constants::{GRAVITY_MPS2, POINT_ACCEPTANCE_RADIUS_SQ, TERMINAL_FALL_SPEED_MPS};
use nalgebra::Vector2;

/// Result of one planar movement step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarStep {
    pub delta: Vector2<f32>,
    /// The target is within the acceptance radius; the intent should clear.
    pub arrived: bool,
}

/// Steps toward `target` at `speed_mps`, never overshooting.
pub fn step_toward(
    current: Vector2<f32>,
    target: Vector2<f32>,
    speed_mps: f32,
    dt: f32,
) -> PlanarStep {
    let displacement = target - current;
    let dist_sq = displacement.norm_squared();

    if dist_sq <= POINT_ACCEPTANCE_RADIUS_SQ || speed_mps <= 0.0 {
        return PlanarStep {
            delta: Vector2::zeros(),
            arrived: dist_sq <= POINT_ACCEPTANCE_RADIUS_SQ,
        };
    }

    let dist = dist_sq.sqrt();
    let max_step = speed_mps * dt;

    PlanarStep {
        delta: displacement * (max_step.min(dist) / dist),
        arrived: dist <= max_step,
    }
}

/// Is there ground under this planar position?
pub fn on_platform(x: f32, z: f32, half_extent: f32) -> bool {
    x.abs() <= half_extent && z.abs() <= half_extent
}

/// Advances vertical velocity by one gravity step (semi-implicit Euler),
/// clamped to terminal fall speed. Returns `(new_velocity, dy)`.
pub fn fall_step(vertical_velocity: f32, dt: f32) -> (f32, f32) {
    let v1 = (vertical_velocity + GRAVITY_MPS2 * dt).max(TERMINAL_FALL_SPEED_MPS);
    (v1, v1 * dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_never_overshoots_the_target() {
        let step = step_toward(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0), 4.0, 1.0);

        // 4 m/s over a full second would overshoot a 1 m target; the step
        // lands exactly on it instead.
        assert!((step.delta.x - 1.0).abs() < 1.0e-6);
        assert_eq!(step.delta.y, 0.0);
        assert!(step.arrived);
    }

    #[test]
    fn step_is_proportional_to_speed_and_dt() {
        let step = step_toward(Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0), 4.0, 0.5);
        assert!((step.delta.x - 2.0).abs() < 1.0e-6);
        assert!(!step.arrived);
    }

    #[test]
    fn zero_speed_produces_no_motion() {
        // A frozen actor (effective speed 0) must not creep toward its intent.
        let step = step_toward(Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0), 0.0, 0.1);
        assert_eq!(step.delta, Vector2::zeros());
        assert!(!step.arrived);
    }

    #[test]
    fn within_acceptance_radius_counts_as_arrived() {
        let step = step_toward(Vector2::new(0.0, 0.0), Vector2::new(0.1, 0.0), 4.0, 0.1);
        assert_eq!(step.delta, Vector2::zeros());
        assert!(step.arrived);
    }

    #[test]
    fn platform_bounds_are_inclusive() {
        assert!(on_platform(0.0, 0.0, 60.0));
        assert!(on_platform(60.0, -60.0, 60.0));
        assert!(!on_platform(60.1, 0.0, 60.0));
        assert!(!on_platform(0.0, -60.1, 60.0));
    }

    #[test]
    fn fall_accelerates_then_clamps_at_terminal_speed() {
        let mut v = 0.0f32;
        let dt = 1.0 / 30.0;

        let (v1, dy1) = fall_step(v, dt);
        assert!(v1 < 0.0);
        assert!(dy1 < 0.0);
        v = v1;

        // Keep falling for a while; velocity must bottom out at terminal.
        for _ in 0..200 {
            let (v_next, _) = fall_step(v, dt);
            assert!(v_next >= TERMINAL_FALL_SPEED_MPS);
            v = v_next;
        }
        assert_eq!(v, TERMINAL_FALL_SPEED_MPS);
    }

    #[test]
    fn launch_decays_into_a_fall() {
        // An upward knock (positive velocity) arcs over and comes back down.
        let mut v = 8.0f32;
        let dt = 1.0 / 30.0;
        let mut rose = false;

        for _ in 0..60 {
            let (v_next, dy) = fall_step(v, dt);
            if dy > 0.0 {
                rose = true;
            }
            v = v_next;
        }

        assert!(rose, "the launch should gain height first");
        assert!(v < 0.0, "gravity should win within two seconds");
    }
}
