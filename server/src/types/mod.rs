mod db_vec3;
mod effect_kind;
mod move_intent;
mod projectile_kind;
mod skill_kind;

pub use db_vec3::DbVec3;
pub use effect_kind::EffectKind;
pub use move_intent::MoveIntent;
pub use projectile_kind::ProjectileKind;
pub use skill_kind::SkillKind;
