//! Lobby reducers: naming, hero selection, readiness, and the
//! enter/leave-world transitions.

use crate::authority::require_player;
use crate::schema::*;
use crate::types::MoveIntent;
use crate::utils::now_micros;
use crate::world;
use shared::constants::{HERO_SLOT_COUNT, MAX_HEALTH};
use spacetimedb::{ReducerContext, Table};

const NAME_MAX_LEN: usize = 32;

#[spacetimedb::reducer]
pub fn set_name(ctx: &ReducerContext, name: String) -> Result<(), String> {
    let player = require_player(ctx)?;

    let name = name.trim();
    if name.is_empty() {
        return Err("Name is empty".into());
    }
    if name.len() > NAME_MAX_LEN {
        return Err("Name is too long".into());
    }

    ctx.db.player().identity().update(Player {
        name: name.to_string(),
        ..player
    });
    Ok(())
}

/// Claim a hero slot.
///
/// Check-then-write inside the transaction: the claim lands only if the
/// slot is free or already the caller's. A previously held slot is
/// released first, so a player owns at most one.
#[spacetimedb::reducer]
pub fn select_hero(ctx: &ReducerContext, slot: u8) -> Result<(), String> {
    let mut player = require_player(ctx)?;

    if slot >= HERO_SLOT_COUNT {
        return Err("No such hero slot".into());
    }
    if player.actor_id.is_some() {
        return Err("Cannot change hero while in world".into());
    }
    if player.hero_slot == Some(slot) {
        return Ok(());
    }

    let Some(target) = ctx.db.hero_slot().slot().find(slot) else {
        return Err("No such hero slot".into());
    };
    if let Some(owner) = target.claimed_by {
        if owner != ctx.sender {
            return Err(format!("{} is already taken", target.hero_name));
        }
    }

    // Release the previously held slot.
    if let Some(previous) = player.hero_slot {
        if let Some(row) = ctx.db.hero_slot().slot().find(previous) {
            if row.claimed_by == Some(ctx.sender) {
                ctx.db.hero_slot().slot().update(HeroSlot {
                    claimed_by: None,
                    ..row
                });
            }
        }
    }

    ctx.db.hero_slot().slot().update(HeroSlot {
        claimed_by: Some(ctx.sender),
        ..target
    });

    player.hero_slot = Some(slot);
    player.ready = false;
    ctx.db.player().identity().update(player);
    Ok(())
}

#[spacetimedb::reducer]
pub fn set_ready(ctx: &ReducerContext, ready: bool) -> Result<(), String> {
    let player = require_player(ctx)?;

    if ready && player.hero_slot.is_none() {
        return Err("Choose a hero first".into());
    }

    ctx.db.player().identity().update(Player { ready, ..player });
    Ok(())
}

/// Start the match once every online player has a hero and is ready.
///
/// Any player may call this; the all-ready predicate is what gated the
/// host's start button.
#[spacetimedb::reducer]
pub fn start_match(ctx: &ReducerContext) -> Result<(), String> {
    require_player(ctx)?;

    let Some(config) = ctx.db.game_config().id().find(1) else {
        return Err("Game config missing".into());
    };
    if config.match_started_at.is_some() {
        return Err("Match already started".into());
    }

    let all_ready = ctx
        .db
        .player()
        .iter()
        .filter(|p| p.online)
        .all(|p| p.ready && p.hero_slot.is_some());
    if !all_ready {
        return Err("Not everyone is ready".into());
    }

    ctx.db.game_config().id().update(GameConfig {
        match_started_at: Some(now_micros(ctx)),
        ..config
    });

    log::info!("Match started");
    Ok(())
}

/// Enter the world: create the caller's live actor from their persisted
/// Player state.
///
/// Behavior:
/// - Requires a started match and a claimed hero slot.
/// - Rejects if the caller already has a live actor.
/// - Spawns the actor above the player's respawn checkpoint with full
///   health and links `player.actor_id`.
#[spacetimedb::reducer]
pub fn enter_world(ctx: &ReducerContext) -> Result<(), String> {
    let mut player = require_player(ctx)?;

    let Some(config) = ctx.db.game_config().id().find(1) else {
        return Err("Game config missing".into());
    };
    if config.match_started_at.is_none() {
        return Err("Match has not started".into());
    }

    let Some(hero_slot) = player.hero_slot else {
        return Err("Choose a hero first".into());
    };
    if player.actor_id.is_some() {
        return Err("Player is already in world".into());
    }

    let mut translation = player.translation;
    if let Some(checkpoint) = world::respawn_checkpoint(ctx, player.checkpoint_index) {
        // First spawn (and every later one) starts above the course gate;
        // the movement tick settles the drop.
        if player.checkpoint_index == 0 {
            translation = checkpoint.translation;
            translation.y += config.respawn_height;
        }
    }

    let vitals = ctx.db.vital_stats().insert(VitalStats {
        id: 0,
        health: MAX_HEALTH,
        max_health: MAX_HEALTH,
    });
    let transform = ctx.db.transform_data().insert(TransformData {
        id: 0,
        translation,
        yaw: player.yaw,
    });

    let actor = ctx.db.actor().insert(Actor {
        id: 0,
        identity: player.identity,
        transform_data_id: transform.id,
        vital_stats_id: vitals.id,
        hero_slot,
        base_move_speed: player.base_move_speed,
        move_intent: MoveIntent::None,
        should_move: true,
        grounded: false,
        vertical_velocity: 0.0,
    });

    player.actor_id = Some(actor.id);
    ctx.db.player().identity().update(player);
    Ok(())
}

/// Leave the world: persist the caller's actor state and despawn the
/// live actor. A no-op when no actor exists.
#[spacetimedb::reducer]
pub fn leave_world(ctx: &ReducerContext) {
    let Some(mut player) = ctx.db.player().identity().find(ctx.sender) else {
        return;
    };

    despawn_actor(ctx, &mut player);
    ctx.db.player().identity().update(player);
}

/// Despawns a player's live actor, persisting authoritative state back
/// to the `Player` row and dropping everything that referenced the
/// actor: linked stat rows, status effects, cooldowns, in-flight
/// carriers, and their hit memory.
///
/// The caller is responsible for saving the updated `player` row.
pub(crate) fn despawn_actor(ctx: &ReducerContext, player: &mut Player) {
    let Some(actor_id) = player.actor_id else {
        return;
    };

    let Some(actor) = ctx.db.actor().id().find(actor_id) else {
        // Inconsistent state; clear the dangling id.
        player.actor_id = None;
        return;
    };

    if let Some(transform) = ctx.db.transform_data().id().find(actor.transform_data_id) {
        player.translation = transform.translation;
        player.yaw = transform.yaw;
        ctx.db.transform_data().id().delete(transform.id);
    }
    ctx.db.vital_stats().id().delete(actor.vital_stats_id);

    crate::effects::clear_all(ctx, actor.id, false);

    let cooldowns: Vec<SkillCooldown> = ctx.db.skill_cooldown().actor_id().filter(actor.id).collect();
    for cooldown in cooldowns {
        ctx.db.skill_cooldown().delete(cooldown);
    }

    let carriers: Vec<Projectile> = ctx.db.projectile().caster_actor_id().filter(actor.id).collect();
    for carrier in carriers {
        let hits: Vec<ProjectileHit> = ctx.db.projectile_hit().projectile_id().filter(carrier.id).collect();
        for hit in hits {
            ctx.db.projectile_hit().delete(hit);
        }
        ctx.db.projectile().delete(carrier);
    }

    player.base_move_speed = actor.base_move_speed;

    ctx.db.actor().id().delete(actor.id);
    player.actor_id = None;
}
