use shared::effects::SeverityRule;

/// Status-effect kinds an actor can carry. At most one row per
/// (actor, kind) exists at a time; repeated applications merge per
/// [`EffectKind::severity_rule`].
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Movement fully gated to zero.
    Freeze,
    /// Movement multiplied by a factor in [0.05, 1.0].
    Slow,
    /// Movement multiplied by a factor above 1.0 (self-buff).
    Haste,
    /// Carried velocity displaces the actor, damped per tick.
    Knockback,
    /// Damage over time on its own tick interval.
    Burn,
}

impl EffectKind {
    /// How repeated applications of this kind merge their magnitudes.
    pub fn severity_rule(self) -> SeverityRule {
        match self {
            // Slower wins.
            EffectKind::Slow => SeverityRule::MostSevereMin,
            // Faster wins.
            EffectKind::Haste => SeverityRule::MostSevereMax,
            // Last hit supplies the velocity.
            EffectKind::Knockback => SeverityRule::Replace,
            // Magnitude is constant per kind; replace keeps the row simple.
            EffectKind::Freeze | EffectKind::Burn => SeverityRule::Replace,
        }
    }
}
