//! Projectile (effect carrier) tick.
//!
//! Only this scheduled pass steps carriers and lands hits, so a hit is
//! applied exactly once no matter how many clients observe it. Per kind:
//! - FreezeShot / Bolt: straight flight, first overlapped actor takes the
//!   effect, carrier despawns.
//! - Tornado: flies its full lifetime, knocks back each actor at most
//!   once (hit memory rows).
//! - SlowOrb: flies until its park time, then sits; pulses a short area
//!   slow on its own cadence — staying inside keeps you slowed, leaving
//!   recovers within the pulse length.

use crate::authority::require_scheduler;
use crate::combat;
use crate::effects;
use crate::reducers::ticks::constants;
use crate::schema::*;
use crate::types::{DbVec3, EffectKind, ProjectileKind};
use crate::utils::{get_fixed_delta_time, get_variable_delta_time, now_micros};
use nalgebra::Vector3;
use shared::constants::{
    ACTOR_CAPSULE_HEIGHT_M, ACTOR_CAPSULE_RADIUS_M, bolt, burn, freeze_shot, slow_orb, tornado,
};
use shared::forward_from_yaw;
use shared::projectile::{
    is_expired, is_in_flight, knockback_direction, sphere_hits_capsule, step_position,
    within_planar_radius,
};
use shared::secs_to_micros;
use spacetimedb::{ReducerContext, ScheduleAt, Table, TimeDuration, Timestamp};

#[spacetimedb::table(name = projectile_tick_timer, scheduled(projectile_tick_reducer))]
pub struct ProjectileTickTimer {
    #[primary_key]
    #[auto_inc]
    pub scheduled_id: u64,

    pub scheduled_at: ScheduleAt,

    /// Timestamp of the previous invocation (authoritative delta time source).
    pub last_tick: Timestamp,
}

/// Schedule the projectile tick.
pub fn init(ctx: &ReducerContext) {
    let interval = TimeDuration::from_micros(1_000_000i64 / constants::PROJECTILE_TICK_HZ);

    ctx.db.projectile_tick_timer().scheduled_id().delete(1);
    ctx.db.projectile_tick_timer().insert(ProjectileTickTimer {
        scheduled_id: 1,
        scheduled_at: ScheduleAt::Interval(interval),
        last_tick: ctx.timestamp,
    });
}

#[spacetimedb::reducer]
pub fn projectile_tick_reducer(
    ctx: &ReducerContext,
    mut timer: ProjectileTickTimer,
) -> Result<(), String> {
    require_scheduler(ctx, "projectile_tick_reducer")?;

    let fixed_dt: f32 = get_fixed_delta_time(timer.scheduled_at);
    let real_dt: f32 = get_variable_delta_time(ctx.timestamp, timer.last_tick).unwrap_or(fixed_dt);
    let dt: f32 = real_dt.clamp(0.0, constants::MAX_PROJECTILE_DT_S);

    let now = now_micros(ctx);

    let carriers: Vec<Projectile> = ctx.db.projectile().iter().collect();
    for mut carrier in carriers {
        if is_expired(carrier.expires_at, now) {
            despawn_carrier(ctx, carrier);
            continue;
        }

        // Flight.
        if is_in_flight(carrier.move_until, now) {
            let position: Vector3<f32> = carrier.translation.into();
            let stepped = step_position(position, carrier.velocity.into(), dt);
            carrier.translation = DbVec3::new(stepped.x, stepped.y, stepped.z);
        }

        match carrier.kind {
            ProjectileKind::FreezeShot | ProjectileKind::Bolt => {
                if let Some(victim_id) = first_overlapped_actor(ctx, &carrier) {
                    match carrier.kind {
                        ProjectileKind::FreezeShot => {
                            effects::apply(
                                ctx,
                                victim_id,
                                EffectKind::Freeze,
                                1.0,
                                DbVec3::ZERO,
                                freeze_shot::FREEZE_DURATION_S,
                            );
                        }
                        _ => {
                            combat::apply_damage(ctx, victim_id, bolt::DAMAGE);
                            effects::apply(
                                ctx,
                                victim_id,
                                EffectKind::Burn,
                                burn::TICK_DAMAGE,
                                DbVec3::ZERO,
                                burn::DURATION_S,
                            );
                        }
                    }

                    // Hit-and-done: only the first actor in the path is affected.
                    despawn_carrier(ctx, carrier);
                    continue;
                }

                ctx.db.projectile().id().update(carrier);
            }
            ProjectileKind::Tornado => {
                apply_tornado_hits(ctx, &carrier);
                ctx.db.projectile().id().update(carrier);
            }
            ProjectileKind::SlowOrb => {
                if !is_in_flight(carrier.move_until, now) {
                    carrier.velocity = DbVec3::ZERO;
                }

                if carrier.next_pulse_at.is_some_and(|at| now >= at) {
                    pulse_slow_area(ctx, &carrier);
                    carrier.next_pulse_at = Some(now + secs_to_micros(slow_orb::PULSE_INTERVAL_S));
                }
                ctx.db.projectile().id().update(carrier);
            }
        }
    }

    timer.last_tick = ctx.timestamp;
    ctx.db.projectile_tick_timer().scheduled_id().update(timer);

    Ok(())
}

fn despawn_carrier(ctx: &ReducerContext, carrier: Projectile) {
    let hits: Vec<ProjectileHit> = ctx
        .db
        .projectile_hit()
        .projectile_id()
        .filter(carrier.id)
        .collect();
    for hit in hits {
        ctx.db.projectile_hit().delete(hit);
    }

    ctx.db.projectile().delete(carrier);
}

fn hit_radius(kind: ProjectileKind) -> f32 {
    match kind {
        ProjectileKind::FreezeShot => freeze_shot::HIT_RADIUS_M,
        ProjectileKind::Tornado => tornado::HIT_RADIUS_M,
        ProjectileKind::Bolt => bolt::HIT_RADIUS_M,
        ProjectileKind::SlowOrb => slow_orb::RADIUS_M,
    }
}

fn actor_is_alive(ctx: &ReducerContext, actor: &Actor) -> bool {
    ctx.db
        .vital_stats()
        .id()
        .find(actor.vital_stats_id)
        .map(|vitals| vitals.health > 0.0)
        .unwrap_or(false)
}

/// First living non-caster actor overlapping the carrier, if any.
fn first_overlapped_actor(ctx: &ReducerContext, carrier: &Projectile) -> Option<u64> {
    let center: Vector3<f32> = carrier.translation.into();
    let radius = hit_radius(carrier.kind);

    for actor in ctx.db.actor().iter() {
        if actor.id == carrier.caster_actor_id || !actor_is_alive(ctx, &actor) {
            continue;
        }
        let Some(transform) = ctx.db.transform_data().id().find(actor.transform_data_id) else {
            continue;
        };

        if sphere_hits_capsule(
            &center,
            radius,
            &transform.translation.into(),
            ACTOR_CAPSULE_RADIUS_M,
            ACTOR_CAPSULE_HEIGHT_M,
        ) {
            return Some(actor.id);
        }
    }

    None
}

/// Knocks back every overlapped actor the tornado hasn't already hit:
/// radially away from the funnel plus an upward launch.
fn apply_tornado_hits(ctx: &ReducerContext, carrier: &Projectile) {
    let center: Vector3<f32> = carrier.translation.into();
    let forward2 = forward_from_yaw(carrier.yaw);
    let forward = Vector3::new(forward2.x, 0.0, forward2.y);

    // Snapshot first: landing a knockback wakes the actor row.
    let actors: Vec<Actor> = ctx.db.actor().iter().collect();
    for actor in actors {
        if actor.id == carrier.caster_actor_id || !actor_is_alive(ctx, &actor) {
            continue;
        }

        let already_hit = ctx
            .db
            .projectile_hit()
            .projectile_id()
            .filter(carrier.id)
            .any(|hit| hit.actor_id == actor.id);
        if already_hit {
            continue;
        }

        let Some(transform) = ctx.db.transform_data().id().find(actor.transform_data_id) else {
            continue;
        };
        let target: Vector3<f32> = transform.translation.into();

        if !sphere_hits_capsule(
            &center,
            tornado::HIT_RADIUS_M,
            &target,
            ACTOR_CAPSULE_RADIUS_M,
            ACTOR_CAPSULE_HEIGHT_M,
        ) {
            continue;
        }

        ctx.db.projectile_hit().insert(ProjectileHit {
            id: 0,
            projectile_id: carrier.id,
            actor_id: actor.id,
        });

        let direction = knockback_direction(&center, &target, &forward);
        let velocity = direction * tornado::PUSH_SPEED_MPS
            + Vector3::new(0.0, tornado::LAUNCH_SPEED_MPS, 0.0);

        effects::apply(
            ctx,
            actor.id,
            EffectKind::Knockback,
            1.0,
            DbVec3::new(velocity.x, velocity.y, velocity.z),
            tornado::KNOCK_DURATION_S,
        );
    }
}

/// One slow pulse: every living actor in the orb's planar radius gets a
/// short slow, the caster included.
fn pulse_slow_area(ctx: &ReducerContext, carrier: &Projectile) {
    let center: Vector3<f32> = carrier.translation.into();

    let actors: Vec<Actor> = ctx.db.actor().iter().collect();
    for actor in actors {
        if !actor_is_alive(ctx, &actor) {
            continue;
        }
        let Some(transform) = ctx.db.transform_data().id().find(actor.transform_data_id) else {
            continue;
        };

        if within_planar_radius(&center, &transform.translation.into(), slow_orb::RADIUS_M) {
            effects::apply(
                ctx,
                actor.id,
                EffectKind::Slow,
                slow_orb::SLOW_FACTOR,
                DbVec3::ZERO,
                slow_orb::PULSE_DURATION_S,
            );
        }
    }
}
