use spacetimedb::*;

/// Single-row game configuration, seeded by `init`.
///
/// This is the explicit composition root for values the gameplay code
/// reads everywhere: arena geometry, the death plane, and the match
/// start flag the lobby flips. There is exactly one row with `id = 1`.
#[table(name = game_config, public)]
pub struct GameConfig {
    #[primary_key]
    pub id: u32,

    /// Half extent of the square platform (meters). No ground outside it.
    pub arena_half_extent: f32,

    /// Actors below this height are respawned at their checkpoint.
    pub death_plane_y: f32,

    /// Vertical offset above a checkpoint when respawning.
    pub respawn_height: f32,

    /// Chat rows retained before the oldest are dropped.
    pub chat_history_cap: u64,

    /// Set by `start_match` once every online player is ready.
    /// Micros since the Unix epoch.
    pub match_started_at: Option<i64>,
}
