//! Named, insertion-ordered container of skills.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::skill::{Skill, SkillRecord};

/// Outcome of an add operation. Duplicates are never errors: a category
/// overwrites ([`Replaced`](Self::Replaced)), the store ignores
/// ([`Ignored`](Self::Ignored)); both emit a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Replaced,
    Ignored,
}

/// Outcome of a remove operation. A missing name is a warned no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// A named collection of skills, keyed by skill name in insertion order.
/// Exclusively owns its skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    name: String,
    skills: Vec<Skill>,
}

impl SkillCategory {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skills: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Insert a skill by name. A duplicate name overwrites the stored skill
    /// in place (keeping its position) and emits a duplicate warning.
    pub fn add_skill(&mut self, skill: Skill) -> AddOutcome {
        if let Some(existing) = self.skills.iter_mut().find(|s| s.name() == skill.name()) {
            warn!(
                skill = skill.name(),
                category = %self.name,
                "skill already exists in category, overwriting"
            );
            *existing = skill;
            AddOutcome::Replaced
        } else {
            self.skills.push(skill);
            AddOutcome::Added
        }
    }

    #[must_use]
    pub fn get_skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name() == name)
    }

    pub fn get_skill_mut(&mut self, name: &str) -> Option<&mut Skill> {
        self.skills.iter_mut().find(|s| s.name() == name)
    }

    /// Delete a skill if present; a missing name emits a not-found warning.
    pub fn remove_skill(&mut self, name: &str) -> RemoveOutcome {
        match self.skills.iter().position(|s| s.name() == name) {
            Some(idx) => {
                self.skills.remove(idx);
                RemoveOutcome::Removed
            }
            None => {
                warn!(skill = name, category = %self.name, "skill not found in category");
                RemoveOutcome::NotFound
            }
        }
    }

    /// Skills in insertion order. Fresh iterator per call.
    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    #[must_use]
    pub fn to_record(&self) -> CategoryRecord {
        CategoryRecord {
            name: self.name.clone(),
            skills: self.skills.iter().map(Skill::to_record).collect(),
        }
    }
}

/// Wire record for a category and its skills, in category skill order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
    pub skills: Vec<SkillRecord>,
}
