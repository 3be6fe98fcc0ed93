//! Receiver half of effect application.
//!
//! Carriers detect hits; this module lands them: merge the application
//! into the actor's per-kind effect row (severity rules in
//! `shared::effects`) and broadcast the cosmetic start event. Expiry and
//! decay live in the effect tick.

use crate::schema::*;
use crate::types::{DbVec3, EffectKind};
use crate::utils::now_micros;
use shared::constants::burn;
use shared::effects::{self, EffectSlot};
use shared::secs_to_micros;
use spacetimedb::{ReducerContext, Table};

/// Applies (or merges) one effect on an actor.
///
/// A no-op when the actor is gone — a carrier can outlive its victim by
/// a tick. Emits a start event only for the first application of a kind,
/// so re-applications extend silently.
pub fn apply(
    ctx: &ReducerContext,
    actor_id: u64,
    kind: EffectKind,
    magnitude: f32,
    velocity: DbVec3,
    duration_s: f32,
) {
    let now = now_micros(ctx);

    let Some(actor) = ctx.db.actor().id().find(actor_id) else {
        log::warn!("Dropping {kind:?} application: actor {actor_id} not found");
        return;
    };
    let alive = ctx
        .db
        .vital_stats()
        .id()
        .find(actor.vital_stats_id)
        .map(|vitals| vitals.health > 0.0)
        .unwrap_or(false);
    if !alive {
        return;
    }

    let (magnitude, expires_at) = match kind {
        EffectKind::Slow => (
            effects::clamp_slow_factor(magnitude),
            effects::slow_expiry(now, duration_s),
        ),
        EffectKind::Haste => (
            effects::clamp_haste_factor(magnitude),
            effects::expiry(now, duration_s),
        ),
        _ => (magnitude, effects::expiry(now, duration_s)),
    };

    let incoming = EffectSlot {
        magnitude,
        velocity: velocity.into(),
        expires_at,
    };

    let existing = ctx
        .db
        .status_effect()
        .actor_id()
        .filter(actor_id)
        .find(|row| row.kind == kind);

    match existing {
        Some(row) => {
            let current = EffectSlot {
                magnitude: row.magnitude,
                velocity: row.velocity.into(),
                expires_at: row.expires_at,
            };
            let merged = effects::combine(Some(&current), incoming, kind.severity_rule());

            ctx.db.status_effect().id().update(StatusEffect {
                magnitude: merged.magnitude,
                velocity: merged.velocity.into(),
                expires_at: merged.expires_at,
                ..row
            });
        }
        None => {
            let next_tick_at = match kind {
                EffectKind::Burn => Some(now + secs_to_micros(burn::TICK_INTERVAL_S)),
                _ => None,
            };

            ctx.db.status_effect().insert(StatusEffect {
                id: 0,
                actor_id,
                kind,
                magnitude: incoming.magnitude,
                velocity: incoming.velocity.into(),
                expires_at: incoming.expires_at,
                next_tick_at,
            });

            ctx.db.effect_event().insert(EffectEvent {
                id: 0,
                actor_id,
                kind,
                started: true,
                at: now,
            });
        }
    }

    // A knockback must wake the actor so the movement tick integrates it.
    if kind == EffectKind::Knockback {
        ctx.db.actor().id().update(Actor {
            should_move: true,
            grounded: actor.grounded && velocity.y <= 0.0,
            ..actor
        });
    }
}

/// Removes every effect on an actor, emitting end events when asked.
pub fn clear_all(ctx: &ReducerContext, actor_id: u64, emit_events: bool) {
    let now = now_micros(ctx);
    let rows: Vec<StatusEffect> = ctx.db.status_effect().actor_id().filter(actor_id).collect();

    for row in rows {
        if emit_events {
            ctx.db.effect_event().insert(EffectEvent {
                id: 0,
                actor_id,
                kind: row.kind,
                started: false,
                at: now,
            });
        }
        ctx.db.status_effect().delete(row);
    }
}

/// Speed-relevant modifiers currently on an actor:
/// `(frozen, harshest slow factor, strongest haste factor)`.
pub fn speed_modifiers(ctx: &ReducerContext, actor_id: u64, now: i64) -> (bool, Option<f32>, Option<f32>) {
    let mut frozen = false;
    let mut slow: Option<f32> = None;
    let mut haste: Option<f32> = None;

    for row in ctx.db.status_effect().actor_id().filter(actor_id) {
        if effects::is_expired(row.expires_at, now) {
            continue;
        }

        match row.kind {
            EffectKind::Freeze => frozen = true,
            EffectKind::Slow => slow = Some(slow.map_or(row.magnitude, |f: f32| f.min(row.magnitude))),
            EffectKind::Haste => haste = Some(haste.map_or(row.magnitude, |f: f32| f.max(row.magnitude))),
            EffectKind::Knockback | EffectKind::Burn => {}
        }
    }

    (frozen, slow, haste)
}

/// The actor's active knockback row, if any.
pub fn active_knockback(ctx: &ReducerContext, actor_id: u64, now: i64) -> Option<StatusEffect> {
    ctx.db
        .status_effect()
        .actor_id()
        .filter(actor_id)
        .find(|row| row.kind == EffectKind::Knockback && !effects::is_expired(row.expires_at, now))
}

pub fn is_frozen(ctx: &ReducerContext, actor_id: u64, now: i64) -> bool {
    ctx.db
        .status_effect()
        .actor_id()
        .filter(actor_id)
        .any(|row| row.kind == EffectKind::Freeze && !effects::is_expired(row.expires_at, now))
}
