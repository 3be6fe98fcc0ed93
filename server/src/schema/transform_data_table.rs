use crate::types::DbVec3;
use spacetimedb::*;

/// World transform for a live actor, updated every movement tick.
#[derive(Default, Debug)]
#[table(name = transform_data, public)]
pub struct TransformData {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    pub translation: DbVec3,

    /// Facing (radians), derived from travel direction.
    pub yaw: f32,
}
