//! Death respawn: back to the last passed checkpoint with full health.
//!
//! Fall respawns (dropping off the platform) are handled by the movement
//! tick and do not touch health; this reducer is the owner-initiated
//! recovery from dying.

use crate::authority::require_owned_actor;
use crate::effects;
use crate::schema::*;
use crate::types::MoveIntent;
use spacetimedb::ReducerContext;

#[spacetimedb::reducer]
pub fn respawn(ctx: &ReducerContext) -> Result<(), String> {
    let (player, actor) = require_owned_actor(ctx)?;

    let Some(vitals) = ctx.db.vital_stats().id().find(actor.vital_stats_id) else {
        return Err("Vital stats not found".into());
    };
    if vitals.health > 0.0 {
        return Err("Actor is not dead".into());
    }

    let Some(config) = ctx.db.game_config().id().find(1) else {
        return Err("Game config missing".into());
    };
    let Some(checkpoint) = crate::world::respawn_checkpoint(ctx, player.checkpoint_index) else {
        return Err("No respawn checkpoint".into());
    };

    effects::clear_all(ctx, actor.id, true);

    ctx.db.vital_stats().id().update(VitalStats {
        health: vitals.max_health,
        ..vitals
    });

    if let Some(transform) = ctx.db.transform_data().id().find(actor.transform_data_id) {
        let mut translation = checkpoint.translation;
        translation.y += config.respawn_height;
        ctx.db.transform_data().id().update(TransformData {
            translation,
            ..transform
        });
    }

    ctx.db.actor().id().update(Actor {
        move_intent: MoveIntent::None,
        should_move: true,
        grounded: false,
        vertical_velocity: 0.0,
        ..actor
    });

    Ok(())
}
