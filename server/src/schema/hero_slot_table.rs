use spacetimedb::*;

/// One selectable hero slot in the lobby.
///
/// Claiming is check-then-write inside the `select_hero` reducer, which
/// is atomic per transaction: a claim only lands if the slot is free or
/// already the caller's.
#[table(name = hero_slot, public)]
pub struct HeroSlot {
    #[primary_key]
    pub slot: u8,

    pub hero_name: String,

    pub claimed_by: Option<Identity>,
}
