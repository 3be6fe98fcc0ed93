use crate::types::MoveIntent;
use spacetimedb::*;

/// Live actor entity driven by the server's movement tick.
///
/// An `Actor` exists only while the player is "in world". The owning
/// identity is the sole connection whose reducer calls may mutate this
/// row; the scheduled ticks (module identity) are the only other writer.
/// Authoritative values here are mirrored back to the `Player` row when
/// leaving or disconnecting.
#[table(name = actor, public)]
pub struct Actor {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    /// Owning connection. One live actor per identity.
    #[unique]
    pub identity: Identity,

    #[unique]
    pub transform_data_id: u64,
    #[unique]
    pub vital_stats_id: u32,

    pub hero_slot: u8,

    /// Immutable baseline speed. Status effects never touch this field;
    /// the tick derives the effective speed from it fresh every step.
    pub base_move_speed: f32,

    pub move_intent: MoveIntent,

    #[index(btree)]
    pub should_move: bool,

    pub grounded: bool,

    /// Vertical velocity (m/s) while airborne.
    pub vertical_velocity: f32,
}
