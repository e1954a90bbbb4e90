//! Root aggregate holding every category, and the document conversion that
//! defines the persistence wire shape.

use std::collections::BTreeMap;

use tracing::warn;

use super::category::{AddOutcome, CategoryRecord, RemoveOutcome, SkillCategory};
use super::skill::Skill;
use crate::error::Result;

/// The structured text form of a serialized store: category name -> record.
pub type Document = BTreeMap<String, CategoryRecord>;

/// Root container of categories; the unit of persistence. Exclusively owns
/// its categories, which are keyed by name in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillStore {
    categories: Vec<SkillCategory>,
}

impl SkillStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Add an empty category. A duplicate name is a no-op with a warning.
    pub fn add_category(&mut self, name: impl Into<String>) -> AddOutcome {
        let name = name.into();
        if self.get_category(&name).is_some() {
            warn!(category = %name, "category already exists");
            return AddOutcome::Ignored;
        }
        self.categories.push(SkillCategory::new(name));
        AddOutcome::Added
    }

    #[must_use]
    pub fn get_category(&self, name: &str) -> Option<&SkillCategory> {
        self.categories.iter().find(|c| c.name() == name)
    }

    pub fn get_category_mut(&mut self, name: &str) -> Option<&mut SkillCategory> {
        self.categories.iter_mut().find(|c| c.name() == name)
    }

    /// Remove a category and every skill it owns; a missing name emits a
    /// not-found warning.
    pub fn remove_category(&mut self, name: &str) -> RemoveOutcome {
        match self.categories.iter().position(|c| c.name() == name) {
            Some(idx) => {
                self.categories.remove(idx);
                RemoveOutcome::Removed
            }
            None => {
                warn!(category = name, "category not found");
                RemoveOutcome::NotFound
            }
        }
    }

    /// Categories in insertion order. Fresh iterator per call.
    pub fn categories(&self) -> impl Iterator<Item = &SkillCategory> {
        self.categories.iter()
    }

    /// Serialize every category into the persisted document shape.
    #[must_use]
    pub fn to_document(&self) -> Document {
        self.categories
            .iter()
            .map(|c| (c.name().to_string(), c.to_record()))
            .collect()
    }

    /// Reconstruct a store from a document.
    ///
    /// Skill records with an unknown type tag are dropped with a warning so
    /// documents written by newer versions still load; a record with an
    /// out-of-range level aborts the whole load with a validation error.
    pub fn from_document(document: Document) -> Result<Self> {
        let mut store = Self::new();
        for (name, record) in document {
            let mut category = SkillCategory::new(name);
            for skill_record in &record.skills {
                match Skill::from_record(skill_record)? {
                    Some(skill) => {
                        category.add_skill(skill);
                    }
                    None => warn!(
                        skill = %skill_record.name,
                        kind = %skill_record.kind,
                        "unknown skill type, skipping"
                    ),
                }
            }
            store.categories.push(category);
        }
        Ok(store)
    }
}
