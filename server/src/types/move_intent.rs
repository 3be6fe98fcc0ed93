/// Movement intent for an actor.
///
/// Match arms are handled by the server's movement tick; unsupported
/// variants can be extended in the future.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, PartialEq)]
pub enum MoveIntent {
    /// Move toward this point (world space) until arrival.
    Point(super::DbVec3),

    /// No movement intent (idling).
    None,
}
