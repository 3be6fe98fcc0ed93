/// Effect-carrier kinds stepped by the projectile tick.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileKind {
    /// Fast straight bullet; freezes the first actor it touches.
    FreezeShot,
    /// Flies briefly, then parks and pulses an area slow.
    SlowOrb,
    /// Slow straight funnel; knocks back each actor it touches once.
    Tornado,
    /// Straight bullet; direct damage plus a burn.
    Bolt,
}
