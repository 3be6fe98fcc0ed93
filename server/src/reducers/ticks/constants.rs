//! Tick constants.
//!
//! Centralizes tick rates and dt clamps so they can be reused consistently
//! across the movement, projectile, and effect ticks. These ticks use
//! clamped variable timesteps rather than deterministic fixed steps.

/// Actor movement tick frequency (Hz).
pub const MOVEMENT_TICK_HZ: i64 = 30;

/// Projectile tick frequency (Hz).
pub const PROJECTILE_TICK_HZ: i64 = 30;

/// Status-effect expiry/DoT tick frequency (Hz). Expiry precision only
/// needs to beat the shortest slow pulse, so this runs slower.
pub const EFFECT_TICK_HZ: i64 = 10;

/// Max dt (seconds) for movement updates.
///
/// Tight clamp to keep movement responsive and avoid large jumps after stalls.
pub const MAX_MOVEMENT_DT_S: f32 = 0.10;

/// Max dt (seconds) for projectile updates.
pub const MAX_PROJECTILE_DT_S: f32 = 0.10;

/// Cosmetic event rows older than this are trimmed (seconds).
pub const EVENT_STALE_S: f32 = 5.0;
