//! Status-effect severity and decay rules.
//!
//! An actor carries at most one slot per effect kind. Re-applying a kind
//! never resets it: the expiry only extends, and the magnitude merges by a
//! per-kind severity rule. Speed-affecting kinds are never folded into the
//! actor's stored speed — callers recompute [`effective_speed`] from the
//! immutable base every tick, so expiry restores the baseline exactly and
//! repeated apply/expire cycles cannot drift.

use crate::constants::{
    HASTE_FACTOR_MAX, HASTE_FACTOR_MIN, KNOCKBACK_DAMPING, SLOW_FACTOR_MAX, SLOW_FACTOR_MIN,
    SLOW_MIN_DURATION_S,
};
use crate::utils::{Micros, secs_to_micros};
use nalgebra::Vector3;

/// One in-flight effect on an actor.
///
/// `velocity` is only meaningful for knockback; other kinds carry their
/// strength in `magnitude` (slow/haste factor, burn tick damage).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSlot {
    pub magnitude: f32,
    pub velocity: Vector3<f32>,
    pub expires_at: Micros,
}

/// How a repeated application merges its magnitude with the slot already
/// in flight. The expiry always extends, never shortens, whichever rule
/// applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityRule {
    /// Keep the smaller magnitude (slow factors: slower wins).
    MostSevereMin,
    /// Keep the larger magnitude (haste factors: faster wins).
    MostSevereMax,
    /// Take the incoming magnitude and velocity (knockback: last hit wins).
    Replace,
}

/// Merges an incoming application into an existing slot, if any.
pub fn combine(existing: Option<&EffectSlot>, incoming: EffectSlot, rule: SeverityRule) -> EffectSlot {
    let Some(existing) = existing else {
        return incoming;
    };

    let (magnitude, velocity) = match rule {
        SeverityRule::MostSevereMin => (existing.magnitude.min(incoming.magnitude), existing.velocity),
        SeverityRule::MostSevereMax => (existing.magnitude.max(incoming.magnitude), existing.velocity),
        SeverityRule::Replace => (incoming.magnitude, incoming.velocity),
    };

    EffectSlot {
        magnitude,
        velocity,
        expires_at: existing.expires_at.max(incoming.expires_at),
    }
}

pub fn clamp_slow_factor(factor: f32) -> f32 {
    factor.clamp(SLOW_FACTOR_MIN, SLOW_FACTOR_MAX)
}

pub fn clamp_haste_factor(factor: f32) -> f32 {
    factor.clamp(HASTE_FACTOR_MIN, HASTE_FACTOR_MAX)
}

/// Expiry timestamp for a slow application, enforcing the minimum pulse
/// length.
pub fn slow_expiry(now: Micros, duration_s: f32) -> Micros {
    now + secs_to_micros(duration_s.max(SLOW_MIN_DURATION_S))
}

pub fn expiry(now: Micros, duration_s: f32) -> Micros {
    now + secs_to_micros(duration_s)
}

pub fn is_expired(slot_expires_at: Micros, now: Micros) -> bool {
    now >= slot_expires_at
}

/// Movement speed for this tick, recomputed from the untouched base.
///
/// Freeze gates everything to zero; otherwise the harshest slow and the
/// strongest haste both apply multiplicatively.
pub fn effective_speed(
    base_speed: f32,
    frozen: bool,
    slow_factor: Option<f32>,
    haste_factor: Option<f32>,
) -> f32 {
    if frozen {
        return 0.0;
    }

    base_speed * slow_factor.unwrap_or(1.0) * haste_factor.unwrap_or(1.0)
}

/// Advances a knockback velocity by one tick: exponential decay toward
/// zero so a hit shoves hard and settles fast.
pub fn knockback_step(velocity: Vector3<f32>, dt: f32) -> Vector3<f32> {
    let retain = (1.0 - dt * KNOCKBACK_DAMPING).clamp(0.0, 1.0);
    velocity * retain
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(magnitude: f32, expires_at: Micros) -> EffectSlot {
        EffectSlot {
            magnitude,
            velocity: Vector3::zeros(),
            expires_at,
        }
    }

    #[test]
    fn expiry_is_monotonic_over_any_application_sequence() {
        // Applications (arrival time, duration seconds). Effective expiry must
        // equal max(t_i + d_i) regardless of order or severity rule.
        let applications = [(0i64, 3.0f32), (1_000_000, 1.0), (1_500_000, 3.0), (2_000_000, 0.2)];

        for rule in [SeverityRule::MostSevereMin, SeverityRule::MostSevereMax, SeverityRule::Replace] {
            let mut current: Option<EffectSlot> = None;
            for &(at, duration) in &applications {
                let incoming = slot(1.0, expiry(at, duration));
                current = Some(combine(current.as_ref(), incoming, rule));
            }

            let expected = applications
                .iter()
                .map(|&(at, d)| expiry(at, d))
                .max()
                .unwrap();
            assert_eq!(current.unwrap().expires_at, expected);
        }
    }

    #[test]
    fn a_short_reapplication_never_shortens_the_window() {
        let long = slot(1.0, expiry(0, 3.0));
        let short = slot(1.0, expiry(500_000, 0.1));

        let merged = combine(Some(&long), short, SeverityRule::Replace);
        assert_eq!(merged.expires_at, long.expires_at);
    }

    #[test]
    fn overlapping_slows_keep_the_minimum_factor() {
        let mut current: Option<EffectSlot> = None;
        for factor in [0.8f32, 0.3, 0.6] {
            let incoming = slot(clamp_slow_factor(factor), slow_expiry(0, 0.5));
            current = Some(combine(current.as_ref(), incoming, SeverityRule::MostSevereMin));
        }

        assert_eq!(current.unwrap().magnitude, 0.3);
    }

    #[test]
    fn slow_factor_is_clamped_before_combining() {
        assert_eq!(clamp_slow_factor(0.0), SLOW_FACTOR_MIN);
        assert_eq!(clamp_slow_factor(-2.0), SLOW_FACTOR_MIN);
        assert_eq!(clamp_slow_factor(1.7), SLOW_FACTOR_MAX);
        assert_eq!(clamp_slow_factor(0.6), 0.6);
    }

    #[test]
    fn slow_pulse_duration_has_a_floor() {
        // A zero/negative duration still grants the minimum pulse.
        assert_eq!(slow_expiry(0, 0.0), secs_to_micros(SLOW_MIN_DURATION_S));
        assert!(slow_expiry(0, 0.5) > slow_expiry(0, 0.0));
    }

    #[test]
    fn effective_speed_returns_base_exactly_when_no_effects() {
        let base = 4.0f32;
        assert_eq!(effective_speed(base, false, None, None), base);
    }

    #[test]
    fn effective_speed_composes_slow_haste_and_freeze() {
        let base = 4.0f32;

        assert_eq!(effective_speed(base, false, Some(0.5), None), 2.0);
        assert_eq!(effective_speed(base, false, None, Some(1.6)), 6.4);
        assert_eq!(effective_speed(base, false, Some(0.5), Some(1.6)), 3.2);

        // Freeze wins over everything.
        assert_eq!(effective_speed(base, true, Some(0.5), Some(1.6)), 0.0);
    }

    #[test]
    fn repeated_apply_expire_cycles_do_not_drift_the_baseline() {
        // The slow factor is applied and expired many times; because the base
        // is never mutated, the post-expiry speed is bit-identical every cycle.
        let base = 4.0f32;

        for _ in 0..1000 {
            let slowed = effective_speed(base, false, Some(0.6), None);
            assert!(slowed < base);

            let restored = effective_speed(base, false, None, None);
            assert_eq!(restored.to_bits(), base.to_bits());
        }
    }

    #[test]
    fn replace_rule_takes_the_latest_hit() {
        // Two carriers hitting in the same tick: whichever is processed last
        // supplies magnitude and velocity; the expiry still only extends.
        let first = EffectSlot {
            magnitude: 1.0,
            velocity: Vector3::new(6.0, 8.0, 0.0),
            expires_at: expiry(0, 0.35),
        };
        let second = EffectSlot {
            magnitude: 1.0,
            velocity: Vector3::new(-6.0, 8.0, 0.0),
            expires_at: expiry(0, 0.35),
        };

        let merged = combine(Some(&first), second, SeverityRule::Replace);
        assert_eq!(merged.velocity, Vector3::new(-6.0, 8.0, 0.0));
        assert_eq!(merged.expires_at, expiry(0, 0.35));
    }

    #[test]
    fn knockback_velocity_decays_toward_zero() {
        let mut velocity = Vector3::new(6.0, 8.0, 0.0);
        let dt = 1.0 / 30.0;

        let mut previous = velocity.norm();
        for _ in 0..30 {
            velocity = knockback_step(velocity, dt);
            let norm = velocity.norm();
            assert!(norm <= previous);
            previous = norm;
        }

        // After a second of damping almost nothing remains.
        assert!(velocity.norm() < 0.1_f32 * Vector3::<f32>::new(6.0, 8.0, 0.0).norm());
    }

    #[test]
    fn oversized_dt_clamps_instead_of_reversing_the_velocity() {
        let velocity = Vector3::new(6.0, 0.0, 0.0);
        let stepped = knockback_step(velocity, 10.0);
        assert_eq!(stepped, Vector3::zeros());
    }
}
