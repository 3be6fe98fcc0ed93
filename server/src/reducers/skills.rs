//! Skill casting: one cooldown-gated reducer for all four hero skills
//! plus the bolt.
//!
//! A successful cast starts the cooldown, spawns the effect carrier (or
//! applies the self-buff directly), and broadcasts a cast event so every
//! client plays the animation.

use crate::authority::require_owned_actor;
use crate::effects;
use crate::schema::*;
use crate::types::{DbVec3, EffectKind, ProjectileKind, SkillKind};
use crate::utils::now_micros;
use shared::constants::{bolt, freeze_shot, slow_orb, speed_boost, tornado};
use shared::cooldown;
use shared::forward_from_yaw;
use shared::secs_to_micros;
use spacetimedb::{ReducerContext, Table};

#[spacetimedb::reducer]
pub fn cast_skill(ctx: &ReducerContext, skill: SkillKind, aim_yaw: f32) -> Result<(), String> {
    let (_player, actor) = require_owned_actor(ctx)?;
    let now = now_micros(ctx);

    let Some(vitals) = ctx.db.vital_stats().id().find(actor.vital_stats_id) else {
        return Err("Vital stats not found".into());
    };
    if vitals.health <= 0.0 {
        return Err("Actor is dead".into());
    }
    if effects::is_frozen(ctx, actor.id, now) {
        return Err("Cannot cast while frozen".into());
    }

    // Cooldown gate.
    let existing = ctx
        .db
        .skill_cooldown()
        .actor_id()
        .filter(actor.id)
        .find(|row| row.skill == skill);
    if let Some(ref row) = existing {
        if !cooldown::is_ready(row.ready_at, now) {
            return Err("Skill is on cooldown".into());
        }
    }

    let ready_at = cooldown::next_ready(now, skill.cooldown_s());
    match existing {
        Some(row) => {
            ctx.db
                .skill_cooldown()
                .id()
                .update(SkillCooldown { ready_at, ..row });
        }
        None => {
            ctx.db.skill_cooldown().insert(SkillCooldown {
                id: 0,
                actor_id: actor.id,
                skill,
                ready_at,
            });
        }
    }

    // Face the aim direction.
    if let Some(transform) = ctx.db.transform_data().id().find(actor.transform_data_id) {
        ctx.db.transform_data().id().update(TransformData {
            yaw: aim_yaw,
            ..transform
        });
    }

    match skill {
        SkillKind::SpeedBoost => {
            effects::apply(
                ctx,
                actor.id,
                EffectKind::Haste,
                speed_boost::MULTIPLIER,
                DbVec3::ZERO,
                speed_boost::DURATION_S,
            );
        }
        SkillKind::FreezeShot => spawn_carrier(
            ctx,
            &actor,
            aim_yaw,
            ProjectileKind::FreezeShot,
            freeze_shot::SPEED_MPS,
            freeze_shot::LIFETIME_S,
            freeze_shot::SPAWN_FORWARD_M,
            freeze_shot::SPAWN_UP_M,
        ),
        SkillKind::SlowOrb => spawn_carrier(
            ctx,
            &actor,
            aim_yaw,
            ProjectileKind::SlowOrb,
            slow_orb::SPEED_MPS,
            slow_orb::MOVE_TIME_S + slow_orb::PARK_TIME_S,
            slow_orb::SPAWN_FORWARD_M,
            slow_orb::SPAWN_UP_M,
        ),
        SkillKind::Tornado => spawn_carrier(
            ctx,
            &actor,
            aim_yaw,
            ProjectileKind::Tornado,
            tornado::SPEED_MPS,
            tornado::LIFETIME_S,
            tornado::SPAWN_FORWARD_M,
            tornado::SPAWN_UP_M,
        ),
        SkillKind::Bolt => spawn_carrier(
            ctx,
            &actor,
            aim_yaw,
            ProjectileKind::Bolt,
            bolt::SPEED_MPS,
            bolt::LIFETIME_S,
            bolt::SPAWN_FORWARD_M,
            bolt::SPAWN_UP_M,
        ),
    }

    ctx.db.cast_event().insert(CastEvent {
        id: 0,
        actor_id: actor.id,
        skill,
        at: now,
    });

    Ok(())
}

fn spawn_carrier(
    ctx: &ReducerContext,
    actor: &Actor,
    aim_yaw: f32,
    kind: ProjectileKind,
    speed_mps: f32,
    lifetime_s: f32,
    spawn_forward_m: f32,
    spawn_up_m: f32,
) {
    let now = now_micros(ctx);

    let Some(transform) = ctx.db.transform_data().id().find(actor.transform_data_id) else {
        log::warn!("Actor {} has no transform row; cast dropped", actor.id);
        return;
    };

    let forward = forward_from_yaw(aim_yaw);
    let origin = transform.translation;
    let translation = DbVec3::new(
        origin.x + forward.x * spawn_forward_m,
        origin.y + spawn_up_m,
        origin.z + forward.y * spawn_forward_m,
    );
    let velocity = DbVec3::new(forward.x * speed_mps, 0.0, forward.y * speed_mps);

    let (move_until, next_pulse_at) = match kind {
        ProjectileKind::SlowOrb => (
            Some(now + secs_to_micros(slow_orb::MOVE_TIME_S)),
            Some(now),
        ),
        _ => (None, None),
    };

    ctx.db.projectile().insert(Projectile {
        id: 0,
        caster_actor_id: actor.id,
        kind,
        translation,
        velocity,
        yaw: aim_yaw,
        spawned_at: now,
        expires_at: now + secs_to_micros(lifetime_s),
        move_until,
        next_pulse_at,
    });
}
