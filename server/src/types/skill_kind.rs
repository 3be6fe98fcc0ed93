use shared::constants::{bolt, freeze_shot, slow_orb, speed_boost, tornado};

/// Castable skills, each gated by its own per-actor cooldown.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    FreezeShot,
    SlowOrb,
    Tornado,
    SpeedBoost,
    Bolt,
}

impl SkillKind {
    pub fn cooldown_s(self) -> f32 {
        match self {
            SkillKind::FreezeShot => freeze_shot::COOLDOWN_S,
            SkillKind::SlowOrb => slow_orb::COOLDOWN_S,
            SkillKind::Tornado => tornado::COOLDOWN_S,
            SkillKind::SpeedBoost => speed_boost::COOLDOWN_S,
            SkillKind::Bolt => bolt::COOLDOWN_S,
        }
    }
}
