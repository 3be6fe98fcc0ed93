use crate::types::{DbVec3, EffectKind};
use spacetimedb::*;

/// One in-flight status effect on an actor.
///
/// At most one row exists per (actor, kind); repeated applications merge
/// into the existing row (see `effects::apply`). Rows are removed by the
/// effect tick once `expires_at` passes — cancellation is deletion.
#[table(name = status_effect, public)]
pub struct StatusEffect {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    #[index(btree)]
    pub actor_id: u64,

    pub kind: EffectKind,

    /// Slow/haste factor or burn tick damage; unused for freeze/knockback.
    pub magnitude: f32,

    /// Knockback velocity (m/s), damped by the movement tick.
    pub velocity: DbVec3,

    /// Micros since the Unix epoch. Only ever extends on re-application.
    pub expires_at: i64,

    /// Next burn tick (micros since epoch); `None` for other kinds.
    pub next_tick_at: Option<i64>,
}
