use crate::types::DbVec3;
use spacetimedb::*;

/// World health pickup. Consumed (deleted) by the first injured actor
/// that walks into its radius.
#[table(name = health_pickup, public)]
pub struct HealthPickup {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    pub translation: DbVec3,

    pub heal_amount: f32,

    /// Planar trigger radius (meters).
    pub radius: f32,
}
