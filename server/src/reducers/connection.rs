//! Connection lifecycle reducers.
//!
//! These reducers handle Player row creation and cleanup for clients as
//! they connect to, and disconnect from, the authoritative module.
//!
//! Behavior
//! - On connect:
//!   - Ensure a `Player` row exists for the caller's identity.
//!   - Clear any dangling `actor_id` to start from a consistent state.
//!   - Seed sensible defaults if the row is newly created.
//! - On disconnect:
//!   - Despawn the live `Actor` (persisting its state back to `Player`)
//!     along with its effects, cooldowns, and in-flight carriers.
//!   - Release the hero slot and drop the ready flag, so the lobby never
//!     waits on a gone player.

use crate::reducers::lobby::despawn_actor;
use crate::schema::*;
use crate::types::DbVec3;
use shared::constants::BASE_MOVE_SPEED_MPS;
use spacetimedb::{ReducerContext, Table};

/// Fired when a client connects to the module.
///
/// Ensures a `Player` row exists and clears dangling `actor_id`. This
/// reducer does not spawn an `Actor`; that is handled by `enter_world`.
#[spacetimedb::reducer(client_connected)]
pub fn identity_connected(ctx: &ReducerContext) {
    log::info!("Client connected: {:?}", ctx.sender);

    if let Some(player) = ctx.db.player().identity().find(ctx.sender) {
        // Clear any dangling live actor reference on reconnect.
        ctx.db.player().identity().update(Player {
            actor_id: None,
            online: true,
            ..player
        });
    } else {
        // Seed a new player; lobby choices and transform come later.
        ctx.db.player().insert(Player {
            identity: ctx.sender,
            name: String::new(),
            online: true,
            hero_slot: None,
            ready: false,
            actor_id: None,
            checkpoint_index: 0,
            finished_at: None,
            translation: DbVec3::ZERO,
            yaw: 0.0,
            base_move_speed: BASE_MOVE_SPEED_MPS,
        });
    }
}

/// Fired when a client disconnects from the module.
///
/// Despawns the live actor (if any), releases the hero slot, and clears
/// the ready flag so `start_match` cannot stall on a gone player.
#[spacetimedb::reducer(client_disconnected)]
pub fn identity_disconnected(ctx: &ReducerContext) {
    log::info!("Client disconnected: {:?}", ctx.sender);

    let Some(mut player) = ctx.db.player().identity().find(ctx.sender) else {
        return;
    };

    despawn_actor(ctx, &mut player);

    if let Some(slot) = player.hero_slot.take() {
        if let Some(row) = ctx.db.hero_slot().slot().find(slot) {
            if row.claimed_by == Some(ctx.sender) {
                ctx.db.hero_slot().slot().update(HeroSlot {
                    claimed_by: None,
                    ..row
                });
            }
        }
    }

    player.ready = false;
    player.online = false;
    ctx.db.player().identity().update(player);
}
