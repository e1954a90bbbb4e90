//! Core skill data model: variants, categories, and the root store.

pub mod category;
pub mod skill;
pub mod store;

pub use category::{AddOutcome, CategoryRecord, RemoveOutcome, SkillCategory};
pub use skill::{HardSkill, Skill, SkillKind, SkillRecord, SoftSkill, XpStage};
pub use store::{Document, SkillStore};
