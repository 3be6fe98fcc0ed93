//! Authority checks at the reducer boundary.
//!
//! Every state-changing message is validated here, once, instead of
//! scattering ownership guards through the handlers: a client reducer
//! resolves `ctx.sender` to the player/actor it owns or fails, and
//! scheduled reducers reject any caller other than the module itself.

use crate::schema::*;
use spacetimedb::ReducerContext;

/// Resolves the caller to their `Player` row.
pub fn require_player(ctx: &ReducerContext) -> Result<Player, String> {
    let Some(player) = ctx.db.player().identity().find(ctx.sender) else {
        return Err("Player not found".into());
    };
    Ok(player)
}

/// Resolves the caller to the live actor they own.
///
/// This is the single sender-equals-owner check for in-world operations.
pub fn require_owned_actor(ctx: &ReducerContext) -> Result<(Player, Actor), String> {
    let player = require_player(ctx)?;

    let Some(actor_id) = player.actor_id else {
        return Err("Actor not found".into());
    };
    let Some(actor) = ctx.db.actor().id().find(actor_id) else {
        return Err("Actor not found".into());
    };

    // The Player link and the Actor owner must agree.
    if actor.identity != ctx.sender {
        return Err("Actor is not owned by the caller".into());
    }

    Ok((player, actor))
}

/// Only the server (module identity) may invoke scheduled reducers.
pub fn require_scheduler(ctx: &ReducerContext, name: &str) -> Result<(), String> {
    if ctx.sender != ctx.identity() {
        return Err(format!("`{name}` may not be invoked by clients."));
    }
    Ok(())
}
