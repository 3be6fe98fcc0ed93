//! Gameplay constants shared by the module and its tests.
//!
//! Skill numbers live in per-skill submodules so a reducer can pull in one
//! block (`use shared::constants::freeze_shot`) without dragging the rest
//! into scope.

/// Base walking speed of a freshly spawned hero (m/s).
pub const BASE_MOVE_SPEED_MPS: f32 = 4.0;

/// Gravity (m/s^2, negative = down). -20 reads better in play than -9.81.
pub const GRAVITY_MPS2: f32 = -20.0;

/// Maximum downward speed while falling (m/s, negative).
pub const TERMINAL_FALL_SPEED_MPS: f32 = -40.0;

/// Minimum planar motion required to update yaw (meters per tick).
pub const YAW_EPS: f32 = 1.0e-6;

/// Planar radius (squared, m^2) within which a move intent counts as arrived.
pub const POINT_ACCEPTANCE_RADIUS_SQ: f32 = 0.0225;

/// The smallest distance, squared, allowed between two move requests.
pub const SMALLEST_REQUEST_DISTANCE_SQ: f32 = 0.1;

/// Server-side maximum allowed movement intent distance (meters, squared).
pub const MAX_INTENT_DISTANCE_SQ: f32 = 100.0 * 100.0;

/// Half extent of the square arena platform (meters). Outside it there is
/// no ground and actors fall.
pub const ARENA_HALF_EXTENT_M: f32 = 60.0;

/// Actors below this height are returned to their respawn checkpoint.
pub const DEATH_PLANE_Y: f32 = -5.0;

/// Vertical offset applied when placing an actor on a respawn checkpoint.
pub const RESPAWN_HEIGHT_OFFSET_M: f32 = 1.5;

/// Capsule used for projectile-vs-actor overlap tests.
pub const ACTOR_CAPSULE_RADIUS_M: f32 = 0.35;
pub const ACTOR_CAPSULE_HEIGHT_M: f32 = 1.8;

/// Slow factors are clamped into `[SLOW_FACTOR_MIN, SLOW_FACTOR_MAX]`
/// before combining; 1.0 means "no slow".
pub const SLOW_FACTOR_MIN: f32 = 0.05;
pub const SLOW_FACTOR_MAX: f32 = 1.0;

/// Shortest slow application accepted (seconds).
pub const SLOW_MIN_DURATION_S: f32 = 0.05;

/// Haste multipliers are clamped into `[HASTE_FACTOR_MIN, HASTE_FACTOR_MAX]`.
pub const HASTE_FACTOR_MIN: f32 = 1.0;
pub const HASTE_FACTOR_MAX: f32 = 3.0;

/// Exponential damping applied to knockback velocity (1/s).
pub const KNOCKBACK_DAMPING: f32 = 6.0;

pub const MAX_HEALTH: f32 = 400.0;

pub const PICKUP_HEAL_AMOUNT: f32 = 100.0;
pub const PICKUP_RADIUS_M: f32 = 1.0;

/// Chat history retained server-side (messages beyond this are dropped oldest-first).
pub const CHAT_HISTORY_CAP: u64 = 50;

/// Maximum accepted chat message length in bytes, after trimming.
pub const CHAT_MAX_LEN: usize = 256;

pub const HERO_SLOT_COUNT: u8 = 4;

pub mod freeze_shot {
    pub const SPEED_MPS: f32 = 18.0;
    pub const LIFETIME_S: f32 = 1.5;
    pub const HIT_RADIUS_M: f32 = 0.6;
    pub const FREEZE_DURATION_S: f32 = 3.0;
    pub const COOLDOWN_S: f32 = 3.0;
    pub const SPAWN_FORWARD_M: f32 = 1.1;
    pub const SPAWN_UP_M: f32 = 1.0;
}

pub mod slow_orb {
    pub const SPEED_MPS: f32 = 6.0;
    /// The orb flies forward for this long, then parks in place.
    pub const MOVE_TIME_S: f32 = 2.0;
    pub const PARK_TIME_S: f32 = 5.0;
    pub const RADIUS_M: f32 = 3.5;
    pub const SLOW_FACTOR: f32 = 0.6;
    /// Each pulse grants a short slow; staying in the area keeps refreshing
    /// it, leaving lets it lapse quickly.
    pub const PULSE_DURATION_S: f32 = 0.5;
    pub const PULSE_INTERVAL_S: f32 = 0.25;
    pub const COOLDOWN_S: f32 = 6.0;
    pub const SPAWN_FORWARD_M: f32 = 1.2;
    pub const SPAWN_UP_M: f32 = 0.2;
}

pub mod tornado {
    pub const SPEED_MPS: f32 = 10.0;
    pub const LIFETIME_S: f32 = 3.5;
    pub const HIT_RADIUS_M: f32 = 1.2;
    /// Horizontal push away from the tornado center (m/s).
    pub const PUSH_SPEED_MPS: f32 = 6.0;
    /// Upward launch speed (m/s).
    pub const LAUNCH_SPEED_MPS: f32 = 8.0;
    pub const KNOCK_DURATION_S: f32 = 0.35;
    pub const COOLDOWN_S: f32 = 2.5;
    pub const SPAWN_FORWARD_M: f32 = 1.2;
    pub const SPAWN_UP_M: f32 = 0.2;
}

pub mod speed_boost {
    pub const MULTIPLIER: f32 = 1.6;
    pub const DURATION_S: f32 = 10.0;
    pub const COOLDOWN_S: f32 = 12.0;
}

pub mod bolt {
    pub const SPEED_MPS: f32 = 20.0;
    pub const LIFETIME_S: f32 = 3.0;
    pub const HIT_RADIUS_M: f32 = 0.5;
    pub const DAMAGE: f32 = 10.0;
    pub const COOLDOWN_S: f32 = 1.5;
    pub const SPAWN_FORWARD_M: f32 = 1.1;
    pub const SPAWN_UP_M: f32 = 1.0;
}

pub mod burn {
    pub const TICK_DAMAGE: f32 = 5.0;
    pub const TICK_INTERVAL_S: f32 = 1.0;
    pub const DURATION_S: f32 = 5.0;
}
