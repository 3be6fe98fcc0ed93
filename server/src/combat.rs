//! Health mutation and death handling.

use crate::schema::*;
use crate::types::MoveIntent;
use crate::utils::now_micros;
use spacetimedb::{ReducerContext, Table};

/// Applies damage to an actor's vitals, clamping at zero.
///
/// Ignored for non-positive amounts or when already dead. Death clears
/// all status effects and stops movement; the body stays in world until
/// the owner calls `respawn`.
pub fn apply_damage(ctx: &ReducerContext, actor_id: u64, amount: f32) {
    if amount <= 0.0 {
        return;
    }

    let Some(actor) = ctx.db.actor().id().find(actor_id) else {
        return;
    };
    let Some(vitals) = ctx.db.vital_stats().id().find(actor.vital_stats_id) else {
        log::warn!("Actor {actor_id} has no vital stats row");
        return;
    };

    if vitals.health <= 0.0 {
        return;
    }

    let new_health = (vitals.health - amount).max(0.0);
    ctx.db.vital_stats().id().update(VitalStats {
        health: new_health,
        ..vitals
    });

    ctx.db.combat_event().insert(CombatEvent {
        id: 0,
        actor_id,
        amount,
        is_heal: false,
        at: now_micros(ctx),
    });

    if new_health <= 0.0 {
        on_death(ctx, actor);
    }
}

/// Heals an actor's vitals, at most to max. Ignored when dead.
pub fn apply_heal(ctx: &ReducerContext, actor_id: u64, amount: f32) {
    if amount <= 0.0 {
        return;
    }

    let Some(actor) = ctx.db.actor().id().find(actor_id) else {
        return;
    };
    let Some(vitals) = ctx.db.vital_stats().id().find(actor.vital_stats_id) else {
        log::warn!("Actor {actor_id} has no vital stats row");
        return;
    };

    if vitals.health <= 0.0 || vitals.health >= vitals.max_health {
        return;
    }

    ctx.db.vital_stats().id().update(VitalStats {
        health: (vitals.health + amount).min(vitals.max_health),
        ..vitals
    });

    ctx.db.combat_event().insert(CombatEvent {
        id: 0,
        actor_id,
        amount,
        is_heal: true,
        at: now_micros(ctx),
    });
}

fn on_death(ctx: &ReducerContext, actor: Actor) {
    log::info!("Actor {} died", actor.id);

    crate::effects::clear_all(ctx, actor.id, true);

    // A body killed mid-air still needs the tick to land it.
    let should_move = !actor.grounded;
    ctx.db.actor().id().update(Actor {
        move_intent: MoveIntent::None,
        should_move,
        ..actor
    });
}
