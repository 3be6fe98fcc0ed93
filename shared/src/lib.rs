pub mod checkpoint;
pub mod constants;
pub mod cooldown;
pub mod effects;
pub mod movement;
pub mod projectile;
pub mod utils;

pub use constants::{
    ARENA_HALF_EXTENT_M, BASE_MOVE_SPEED_MPS, DEATH_PLANE_Y, MAX_HEALTH, MAX_INTENT_DISTANCE_SQ,
    SMALLEST_REQUEST_DISTANCE_SQ, YAW_EPS,
};
pub use effects::{EffectSlot, SeverityRule, combine, effective_speed, knockback_step};
pub use utils::{
    Micros, forward_from_yaw, is_move_too_close, is_move_too_far, planar_distance_sq,
    secs_to_micros, to_planar, yaw_from_xz,
};
