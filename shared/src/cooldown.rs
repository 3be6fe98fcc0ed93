//! Cooldown gating for skill casts.

use crate::utils::{Micros, secs_to_micros};

/// A cast is allowed once `now` reaches the recorded ready time.
pub fn is_ready(ready_at: Micros, now: Micros) -> bool {
    now >= ready_at
}

/// Ready time after a successful cast.
pub fn next_ready(now: Micros, cooldown_s: f32) -> Micros {
    now + secs_to_micros(cooldown_s)
}

/// Seconds until ready, zero when already castable (for HUD display).
pub fn remaining_secs(ready_at: Micros, now: Micros) -> f32 {
    if now >= ready_at {
        return 0.0;
    }
    (ready_at - now) as f32 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_actor_is_ready_immediately() {
        // ready_at 0 (never cast) is always in the past.
        assert!(is_ready(0, 1));
        assert!(is_ready(0, 0));
    }

    #[test]
    fn cast_starts_the_cooldown_window() {
        let now = 10_000_000;
        let ready = next_ready(now, 3.0);

        assert!(!is_ready(ready, now));
        assert!(!is_ready(ready, now + 2_999_999));
        assert!(is_ready(ready, now + 3_000_000));
    }

    #[test]
    fn remaining_counts_down_and_floors_at_zero() {
        let ready = next_ready(0, 6.0);

        assert!((remaining_secs(ready, 0) - 6.0).abs() < 1.0e-6);
        assert!((remaining_secs(ready, 4_500_000) - 1.5).abs() < 1.0e-6);
        assert_eq!(remaining_secs(ready, 7_000_000), 0.0);
    }
}
