use crate::types::SkillKind;
use spacetimedb::*;

/// Per-(actor, skill) cooldown gate.
///
/// Public so clients can render the skill HUD (remaining time) without a
/// round trip.
#[table(name = skill_cooldown, public)]
pub struct SkillCooldown {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    #[index(btree)]
    pub actor_id: u64,

    pub skill: SkillKind,

    /// Micros since the Unix epoch at which the skill is castable again.
    pub ready_at: i64,
}
