//! Actor movement tick.
//!
//! One scheduled pass advances every actor marked `should_move`:
//! - planar step toward the move intent at the actor's effective speed
//!   (recomputed from the immutable base each tick, so expired effects
//!   restore the baseline exactly),
//! - knockback velocity integration with per-tick damping,
//! - gravity with terminal clamp when off the platform,
//! - fall respawn below the death plane,
//! - checkpoint crossing and health-pickup consumption.

use crate::authority::require_scheduler;
use crate::combat;
use crate::effects;
use crate::reducers::ticks::constants;
use crate::schema::*;
use crate::types::{DbVec3, MoveIntent};
use crate::utils::{get_fixed_delta_time, get_variable_delta_time, now_micros};
use crate::world;
use nalgebra::{Vector2, Vector3};
use shared::checkpoint::{course_finished, try_advance};
use shared::movement::{fall_step, on_platform, step_toward};
use shared::projectile::within_planar_radius;
use shared::{effective_speed, knockback_step, planar_distance_sq, to_planar, yaw_from_xz};
use spacetimedb::{ReducerContext, ScheduleAt, Table, TimeDuration, Timestamp};

/// Scheduled timer for the movement tick.
///
/// Scheduled tables must include a `scheduled_id: u64` primary key with
/// `#[auto_inc]`.
#[spacetimedb::table(name = movement_tick_timer, scheduled(movement_tick_reducer))]
pub struct MovementTickTimer {
    /// Primary key for the scheduled job (single row used).
    #[primary_key]
    #[auto_inc]
    pub scheduled_id: u64,

    /// When/how often to invoke the scheduled reducer.
    pub scheduled_at: ScheduleAt,

    /// Timestamp of the previous invocation (authoritative delta time source).
    pub last_tick: Timestamp,
}

/// Schedule the movement tick.
pub fn init(ctx: &ReducerContext) {
    let interval = TimeDuration::from_micros(1_000_000i64 / constants::MOVEMENT_TICK_HZ);

    // Single-row scheduled job.
    ctx.db.movement_tick_timer().scheduled_id().delete(1);
    ctx.db.movement_tick_timer().insert(MovementTickTimer {
        scheduled_id: 1,
        scheduled_at: ScheduleAt::Interval(interval),
        last_tick: ctx.timestamp,
    });
}

#[spacetimedb::reducer]
pub fn movement_tick_reducer(
    ctx: &ReducerContext,
    mut timer: MovementTickTimer,
) -> Result<(), String> {
    require_scheduler(ctx, "movement_tick_reducer")?;

    // Compute real elapsed time since last tick; fallback to scheduled fixed dt.
    let fixed_dt: f32 = get_fixed_delta_time(timer.scheduled_at);
    let real_dt: f32 = get_variable_delta_time(ctx.timestamp, timer.last_tick).unwrap_or(fixed_dt);
    let dt: f32 = real_dt.clamp(0.0, constants::MAX_MOVEMENT_DT_S);

    let Some(config) = ctx.db.game_config().id().find(1) else {
        return Err("`movement_tick_reducer` couldn't find the game config.".into());
    };

    // Process only moving actors (Actor.should_move = true).
    let moving: Vec<Actor> = ctx.db.actor().should_move().filter(true).collect();
    for actor in moving {
        let Some(transform) = ctx.db.transform_data().id().find(actor.transform_data_id) else {
            continue;
        };

        let (actor, transform, actor_dirty) = movement_step_actor(ctx, &config, dt, actor, transform);

        ctx.db.transform_data().id().update(transform);
        if actor_dirty {
            ctx.db.actor().id().update(actor);
        }
    }

    // Persist timer state.
    timer.last_tick = ctx.timestamp;
    ctx.db.movement_tick_timer().scheduled_id().update(timer);

    Ok(())
}

/// The per-actor movement update. Returns the (possibly modified) rows
/// and whether the Actor row changed.
fn movement_step_actor(
    ctx: &ReducerContext,
    config: &GameConfig,
    dt: f32,
    mut actor: Actor,
    mut transform: TransformData,
) -> (Actor, TransformData, bool) {
    let now = now_micros(ctx);
    let mut actor_dirty = false;

    let alive = ctx
        .db
        .vital_stats()
        .id()
        .find(actor.vital_stats_id)
        .map(|vitals| vitals.health > 0.0)
        .unwrap_or(false);

    // Effective speed is derived fresh from the untouched base every tick.
    let (frozen, slow, haste) = effects::speed_modifiers(ctx, actor.id, now);
    let speed = if alive {
        effective_speed(actor.base_move_speed, frozen, slow, haste)
    } else {
        0.0
    };

    let current_planar = to_planar(&transform.translation.into());
    let mut delta: Vector3<f32> = Vector3::zeros();

    // Intent-driven planar step.
    if let MoveIntent::Point(target) = &actor.move_intent {
        let step = step_toward(current_planar, target.vec2_xz(), speed, dt);
        delta.x += step.delta.x;
        delta.z += step.delta.y;

        if step.arrived {
            actor.move_intent = MoveIntent::None;
            actor_dirty = true;
        }

        if let Some(yaw) = yaw_from_xz(&step.delta) {
            transform.yaw = yaw;
        }
    }

    // Knockback displacement, damped toward zero each tick.
    let mut knocked = false;
    if let Some(knock) = effects::active_knockback(ctx, actor.id, now) {
        knocked = true;
        let velocity: Vector3<f32> = knock.velocity.into();
        delta += velocity * dt;

        if velocity.y > 0.0 && actor.grounded {
            actor.grounded = false;
            actor_dirty = true;
        }

        let damped = knockback_step(velocity, dt);
        if let Some(row) = ctx.db.status_effect().id().find(knock.id) {
            ctx.db.status_effect().id().update(StatusEffect {
                velocity: DbVec3::new(damped.x, damped.y, damped.z),
                ..row
            });
        }
    }

    let mut translation: Vector3<f32> = transform.translation.into();
    translation += delta;

    // Ground resolution against the flat platform.
    let supported = on_platform(translation.x, translation.z, config.arena_half_extent);
    if actor.grounded && !supported {
        actor.grounded = false;
        actor_dirty = true;
    }
    if !actor.grounded {
        let (vertical, dy) = fall_step(actor.vertical_velocity, dt);
        actor.vertical_velocity = vertical;
        translation.y += dy;
        actor_dirty = true;

        if supported && translation.y <= 0.0 && actor.vertical_velocity <= 0.0 {
            translation.y = 0.0;
            actor.vertical_velocity = 0.0;
            actor.grounded = true;
        }
    }

    // Fall respawn: off the world, back to the respawn checkpoint.
    if translation.y < config.death_plane_y {
        if let Some(player) = ctx.db.player().identity().find(actor.identity) {
            if let Some(checkpoint) = world::respawn_checkpoint(ctx, player.checkpoint_index) {
                log::info!("Actor {} fell out of the world; respawning", actor.id);
                translation = checkpoint.translation.into();
                translation.y += config.respawn_height;
                actor.vertical_velocity = 0.0;
                actor.grounded = false;
                actor.move_intent = MoveIntent::None;
                actor_dirty = true;
            }
        }
    }

    transform.translation = DbVec3::new(translation.x, translation.y, translation.z);

    if alive {
        advance_checkpoints(ctx, &actor, &transform);
        consume_pickups(ctx, &actor, &transform);
    }

    // Actor should keep ticking while it has an intent, is airborne, or is
    // still being shoved.
    let new_should_move = actor.move_intent != MoveIntent::None || !actor.grounded || knocked;
    if actor.should_move != new_should_move {
        actor.should_move = new_should_move;
        actor_dirty = true;
    }

    (actor, transform, actor_dirty)
}

/// Advances the owning player's course progression when the actor stands
/// in the next gate. Only the exact next checkpoint counts.
fn advance_checkpoints(ctx: &ReducerContext, actor: &Actor, transform: &TransformData) {
    let Some(player) = ctx.db.player().identity().find(actor.identity) else {
        return;
    };
    if player.finished_at.is_some() {
        return;
    }

    let Some(gate) = ctx.db.checkpoint().seq().find(player.checkpoint_index) else {
        return;
    };

    let here: Vector2<f32> = transform.translation.vec2_xz();
    if planar_distance_sq(&here, &gate.translation.vec2_xz()) > gate.radius * gate.radius {
        return;
    }

    let Some(next_index) = try_advance(player.checkpoint_index, gate.seq) else {
        return;
    };

    let total = ctx.db.checkpoint().count() as u32;
    let finished = course_finished(next_index, total);
    let now = now_micros(ctx);

    log::info!(
        "Player {:?} passed checkpoint {} ({next_index}/{total})",
        player.identity,
        gate.seq
    );
    if finished {
        log::info!("Player {:?} finished the course", player.identity);
    }

    ctx.db.player().identity().update(Player {
        checkpoint_index: next_index,
        finished_at: if finished { Some(now) } else { None },
        ..player
    });
}

/// Feeds an injured actor the first pickup in reach. Single use.
fn consume_pickups(ctx: &ReducerContext, actor: &Actor, transform: &TransformData) {
    let Some(vitals) = ctx.db.vital_stats().id().find(actor.vital_stats_id) else {
        return;
    };
    if vitals.health >= vitals.max_health {
        return;
    }

    let here: Vector3<f32> = transform.translation.into();
    let reach: Vec<HealthPickup> = ctx
        .db
        .health_pickup()
        .iter()
        .filter(|pickup| within_planar_radius(&pickup.translation.into(), &here, pickup.radius))
        .collect();

    if let Some(pickup) = reach.into_iter().next() {
        combat::apply_heal(ctx, actor.id, pickup.heal_amount);
        ctx.db.health_pickup().delete(pickup);
    }
}
