//! Status-effect expiry tick.
//!
//! Deletes effect rows whose (monotonically extended) expiry has passed
//! and broadcasts the cosmetic "effect ended" event — the counterpart of
//! the start event `effects::apply` emits. Burn damage lands here on its
//! own per-row cadence. Stale cosmetic event rows are trimmed in the
//! same pass.

use crate::authority::require_scheduler;
use crate::combat;
use crate::reducers::ticks::constants;
use crate::schema::*;
use crate::types::EffectKind;
use crate::utils::now_micros;
use shared::constants::burn;
use shared::effects::is_expired;
use shared::secs_to_micros;
use spacetimedb::{ReducerContext, ScheduleAt, Table, TimeDuration};

#[spacetimedb::table(name = effect_tick_timer, scheduled(effect_tick_reducer))]
pub struct EffectTickTimer {
    #[primary_key]
    #[auto_inc]
    pub scheduled_id: u64,

    pub scheduled_at: ScheduleAt,
}

/// Schedule the effect tick.
pub fn init(ctx: &ReducerContext) {
    let interval = TimeDuration::from_micros(1_000_000i64 / constants::EFFECT_TICK_HZ);

    ctx.db.effect_tick_timer().scheduled_id().delete(1);
    ctx.db.effect_tick_timer().insert(EffectTickTimer {
        scheduled_id: 1,
        scheduled_at: ScheduleAt::Interval(interval),
    });
}

#[spacetimedb::reducer]
pub fn effect_tick_reducer(ctx: &ReducerContext, _timer: EffectTickTimer) -> Result<(), String> {
    require_scheduler(ctx, "effect_tick_reducer")?;

    let now = now_micros(ctx);

    let rows: Vec<StatusEffect> = ctx.db.status_effect().iter().collect();
    for row in rows {
        if is_expired(row.expires_at, now) {
            ctx.db.effect_event().insert(EffectEvent {
                id: 0,
                actor_id: row.actor_id,
                kind: row.kind,
                started: false,
                at: now,
            });
            ctx.db.status_effect().delete(row);
            continue;
        }

        if row.kind == EffectKind::Burn {
            if let Some(next_tick_at) = row.next_tick_at {
                if now >= next_tick_at {
                    combat::apply_damage(ctx, row.actor_id, row.magnitude);

                    // Burn damage can kill, and death clears effect rows;
                    // only reschedule the tick if the row survived.
                    if let Some(row) = ctx.db.status_effect().id().find(row.id) {
                        ctx.db.status_effect().id().update(StatusEffect {
                            next_tick_at: Some(next_tick_at + secs_to_micros(burn::TICK_INTERVAL_S)),
                            ..row
                        });
                    }
                }
            }
        }
    }

    trim_stale_events(ctx, now);

    Ok(())
}

/// Drops cosmetic event rows nobody will replay.
fn trim_stale_events(ctx: &ReducerContext, now: i64) {
    let threshold = now - secs_to_micros(constants::EVENT_STALE_S);

    let stale: Vec<EffectEvent> = ctx
        .db
        .effect_event()
        .iter()
        .filter(|event| event.at < threshold)
        .collect();
    for event in stale {
        ctx.db.effect_event().delete(event);
    }

    let stale: Vec<CastEvent> = ctx
        .db
        .cast_event()
        .iter()
        .filter(|event| event.at < threshold)
        .collect();
    for event in stale {
        ctx.db.cast_event().delete(event);
    }

    let stale: Vec<CombatEvent> = ctx
        .db
        .combat_event()
        .iter()
        .filter(|event| event.at < threshold)
        .collect();
    for event in stale {
        ctx.db.combat_event().delete(event);
    }
}
