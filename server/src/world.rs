//! Static world seeding: hero slots, the checkpoint course, and health
//! pickups. Called from the module `init` reducer; re-running replaces
//! the previous seed so a module update starts from a known state.

use crate::schema::*;
use crate::types::DbVec3;
use shared::constants::{HERO_SLOT_COUNT, PICKUP_HEAL_AMOUNT, PICKUP_RADIUS_M};
use spacetimedb::{ReducerContext, Table};

const HERO_NAMES: [&str; HERO_SLOT_COUNT as usize] = ["Flare", "Blossom", "Leaf", "Volt"];

/// Checkpoint gates in course order (positions on the platform, meters).
const COURSE: [(f32, f32, f32); 5] = [
    (0.0, 0.0, -50.0),
    (30.0, 0.0, -25.0),
    (40.0, 0.0, 15.0),
    (-10.0, 0.0, 40.0),
    (-45.0, 0.0, 0.0),
];

const CHECKPOINT_RADIUS_M: f32 = 3.0;

/// Health pickups scattered between the gates.
const PICKUPS: [(f32, f32, f32); 3] = [(15.0, 0.0, -40.0), (45.0, 0.0, -5.0), (-25.0, 0.0, 25.0)];

pub fn seed_hero_slots(ctx: &ReducerContext) {
    for slot in 0..HERO_SLOT_COUNT {
        ctx.db.hero_slot().slot().delete(slot);
        ctx.db.hero_slot().insert(HeroSlot {
            slot,
            hero_name: HERO_NAMES[slot as usize].to_string(),
            claimed_by: None,
        });
    }
}

pub fn recreate_course(ctx: &ReducerContext) {
    let stale: Vec<Checkpoint> = ctx.db.checkpoint().iter().collect();
    for checkpoint in stale {
        ctx.db.checkpoint().delete(checkpoint);
    }

    for (seq, &(x, y, z)) in COURSE.iter().enumerate() {
        ctx.db.checkpoint().insert(Checkpoint {
            seq: seq as u32,
            translation: DbVec3::new(x, y, z),
            radius: CHECKPOINT_RADIUS_M,
        });
    }

    let stale: Vec<HealthPickup> = ctx.db.health_pickup().iter().collect();
    for pickup in stale {
        ctx.db.health_pickup().delete(pickup);
    }

    for &(x, y, z) in PICKUPS.iter() {
        ctx.db.health_pickup().insert(HealthPickup {
            id: 0,
            translation: DbVec3::new(x, y, z),
            heal_amount: PICKUP_HEAL_AMOUNT,
            radius: PICKUP_RADIUS_M,
        });
    }
}

/// Checkpoint a player respawns at given their progression.
pub fn respawn_checkpoint(ctx: &ReducerContext, checkpoint_index: u32) -> Option<Checkpoint> {
    ctx.db
        .checkpoint()
        .seq()
        .find(shared::checkpoint::respawn_seq(checkpoint_index))
}
