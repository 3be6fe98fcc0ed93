mod authority;
mod combat;
mod effects;
mod reducers {
    mod chat;
    mod connection;
    pub mod lobby;
    pub mod request_move;
    mod respawn;
    mod skills;
    pub(crate) mod ticks;
}
pub mod schema;
pub mod types;
mod utils;
mod world;

use crate::schema::*;
use reducers::ticks;
use shared::constants::{
    ARENA_HALF_EXTENT_M, CHAT_HISTORY_CAP, DEATH_PLANE_Y, RESPAWN_HEIGHT_OFFSET_M,
};
use spacetimedb::*;

#[reducer(init)]
pub fn init(ctx: &ReducerContext) {
    ctx.db.game_config().id().delete(1);
    ctx.db.game_config().insert(GameConfig {
        id: 1,
        arena_half_extent: ARENA_HALF_EXTENT_M,
        death_plane_y: DEATH_PLANE_Y,
        respawn_height: RESPAWN_HEIGHT_OFFSET_M,
        chat_history_cap: CHAT_HISTORY_CAP,
        match_started_at: None,
    });
    world::seed_hero_slots(ctx);
    world::recreate_course(ctx);
    ticks::init(ctx);
}
