//! Scheduled ticks (folder-based).
//!
//! Layout:
//! - `constants.rs`: tick rates + dt clamps
//! - `movement_tick.rs`: actor movement, checkpoints, pickups, fall respawn
//! - `projectile_tick.rs`: carrier flight, hit detection, effect application
//! - `effect_tick.rs`: effect expiry, burn ticks, stale event trimming
//!
//! Timer tables are colocated with their reducers. This `mod.rs` only
//! wires modules and re-exports the init entrypoint.

pub mod constants;

mod effect_tick;
mod movement_tick;
mod projectile_tick;

/// Initialize all tick schedules.
///
/// This should be called from the crate `init` reducer.
pub fn init(ctx: &spacetimedb::ReducerContext) {
    movement_tick::init(ctx);
    projectile_tick::init(ctx);
    effect_tick::init(ctx);
}
