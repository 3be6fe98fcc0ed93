use crate::types::DbVec3;
use spacetimedb::*;

/// Persistent per-connection state.
///
/// A `Player` row outlives the live `Actor`: it records lobby choices
/// (hero slot, ready flag), course progression, and the last known
/// transform so an actor can be rebuilt where it left off.
#[table(name = player, public)]
pub struct Player {
    #[primary_key]
    pub identity: Identity,

    pub name: String,

    pub online: bool,

    /// Claimed hero slot, if any. Cleared on disconnect.
    pub hero_slot: Option<u8>,

    /// Lobby ready flag; requires a claimed slot.
    pub ready: bool,

    /// Live actor link while in world.
    pub actor_id: Option<u64>,

    /// Sequence number of the next checkpoint to reach. Monotonic.
    pub checkpoint_index: u32,

    /// Set once when the last checkpoint is passed (micros since epoch).
    pub finished_at: Option<i64>,

    pub translation: DbVec3,
    pub yaw: f32,
    pub base_move_speed: f32,
}
