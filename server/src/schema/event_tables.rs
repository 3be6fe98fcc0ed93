use crate::types::{EffectKind, SkillKind};
use spacetimedb::*;

/// Cosmetic effect start/stop notification (tint, animator flags).
///
/// Ephemeral: clients consume these via subscription; the effect tick
/// trims stale rows. Never authoritative — the authoritative state is
/// the `status_effect` row.
#[table(name = effect_event, public)]
pub struct EffectEvent {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    pub actor_id: u64,

    pub kind: EffectKind,

    /// true = effect began, false = effect ended.
    pub started: bool,

    /// Micros since the Unix epoch.
    pub at: i64,
}

/// Cosmetic cast-animation notification, one per successful cast.
#[table(name = cast_event, public)]
pub struct CastEvent {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    pub actor_id: u64,

    pub skill: SkillKind,

    /// Micros since the Unix epoch.
    pub at: i64,
}

/// Cosmetic damage/heal notification (floaters, hit flashes).
#[table(name = combat_event, public)]
pub struct CombatEvent {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    pub actor_id: u64,

    pub amount: f32,

    pub is_heal: bool,

    /// Micros since the Unix epoch.
    pub at: i64,
}
