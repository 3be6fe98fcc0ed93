use crate::types::{DbVec3, ProjectileKind};
use spacetimedb::*;

/// Transient effect carrier owned by the casting actor.
///
/// The projectile tick steps these along `velocity`, runs hit detection,
/// and deletes them on hit (single-hit kinds) or when `expires_at`
/// passes.
#[table(name = projectile, public)]
pub struct Projectile {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    /// Casting actor; carriers never hit their caster and despawn with it.
    #[index(btree)]
    pub caster_actor_id: u64,

    pub kind: ProjectileKind,

    pub translation: DbVec3,

    /// Flight velocity (m/s). Zeroed when a slow orb parks.
    pub velocity: DbVec3,

    /// Launch facing, kept for knockback direction on dead-center hits.
    pub yaw: f32,

    /// Micros since the Unix epoch.
    pub spawned_at: i64,
    pub expires_at: i64,

    /// Slow orbs fly until this time, then park. `None` = flies for life.
    pub move_until: Option<i64>,

    /// Next area pulse for parked/flying slow orbs; `None` for others.
    pub next_pulse_at: Option<i64>,
}

/// Per-target hit memory for multi-hit carriers (tornado): each target is
/// knocked back at most once per carrier.
#[table(name = projectile_hit)]
pub struct ProjectileHit {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    #[index(btree)]
    pub projectile_id: u64,

    pub actor_id: u64,
}
