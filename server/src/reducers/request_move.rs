use crate::authority::require_owned_actor;
use crate::schema::*;
use crate::types::MoveIntent;
use nalgebra as na;
use shared::utils::{is_move_too_close, is_move_too_far, to_planar};
use spacetimedb::ReducerContext;

#[spacetimedb::reducer]
pub fn request_move(ctx: &ReducerContext, intent: MoveIntent) -> Result<(), String> {
    let (_player, mut actor) = require_owned_actor(ctx)?;

    let Some(vitals) = ctx.db.vital_stats().id().find(actor.vital_stats_id) else {
        return Err("Vital stats not found".into());
    };
    if vitals.health <= 0.0 {
        return Err("Actor is dead".into());
    }

    let Some(transform) = ctx.db.transform_data().id().find(actor.transform_data_id) else {
        return Err("Transform data not found".into());
    };

    let current: na::Vector2<f32> = to_planar(&transform.translation.into());

    match (&actor.move_intent, &intent) {
        // 1. Idling Check
        (MoveIntent::None, MoveIntent::None) => Err("Already idling".into()),

        // 2. History Check: Is the new point too close to the old intent point?
        (MoveIntent::Point(old), MoveIntent::Point(new))
            if is_move_too_close(&old.vec2_xz(), &new.vec2_xz()) =>
        {
            Err("Distance from last point too close".into())
        }

        // 3. Range check: is the point too far from the current position?
        (_, MoveIntent::Point(p)) if is_move_too_far(&current, &p.vec2_xz()) => {
            Err("Distance from current position too far".into())
        }

        // 4. Minimum movement check (from current position)
        (_, MoveIntent::Point(p)) if is_move_too_close(&current, &p.vec2_xz()) => {
            Err("Distance from current position too close".into())
        }

        // 5. Otherwise, accept and write intent directly onto Actor.
        _ => {
            actor.move_intent = intent;

            // Keep should_move consistent:
            // - should_move if we have a non-idle intent, OR if we're airborne (gravity needs processing)
            let is_idle = matches!(actor.move_intent, MoveIntent::None);
            actor.should_move = !is_idle || !actor.grounded;

            ctx.db.actor().id().update(actor);
            Ok(())
        }
    }
}
