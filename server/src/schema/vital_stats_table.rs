use spacetimedb::*;

#[derive(Default, Debug)]
#[table(name = vital_stats, public)]
pub struct VitalStats {
    #[primary_key]
    #[auto_inc]
    pub id: u32,

    pub health: f32,
    pub max_health: f32,
}
