use crate::types::DbVec3;
use spacetimedb::*;

/// One gate of the ordered course, seeded by `init`.
///
/// `seq` runs 0..N in course order. Progression is tracked per player
/// (`Player.checkpoint_index`), not here.
#[table(name = checkpoint, public)]
pub struct Checkpoint {
    #[primary_key]
    pub seq: u32,

    pub translation: DbVec3,

    /// Planar trigger radius (meters).
    pub radius: f32,
}
