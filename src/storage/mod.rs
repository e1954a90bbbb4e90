//! JSON persistence for the skill store.
//!
//! Saves use a temp-file-then-rename write so a failure mid-save never leaves
//! a half-written document. Loads distinguish three outcomes: a missing file
//! starts an empty store, unparseable JSON is a format error, and a parseable
//! document with an invalid level is a validation error.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::core::store::{Document, SkillStore};
use crate::error::{Result, SvError};

/// Default document filename, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "skills_data.json";

/// Write the store's document to `path` as pretty-printed JSON.
pub fn save(store: &SkillStore, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&store.to_document())?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Write to a temp file first, then rename (atomic on the same filesystem).
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, json)?;
    fs::rename(&temp_path, path)?;

    debug!(path = %path.display(), categories = store.len(), "skill data saved");
    Ok(())
}

/// Read a document from `path` and reconstruct the store.
///
/// A missing file is not an error; it yields an empty store.
pub fn load(path: &Path) -> Result<SkillStore> {
    if !path.exists() {
        info!(path = %path.display(), "no data file found, starting fresh");
        return Ok(SkillStore::new());
    }

    let json = fs::read_to_string(path)?;
    let document: Document = serde_json::from_str(&json)
        .map_err(|e| SvError::Format(format!("{}: {e}", path.display())))?;

    let store = SkillStore::from_document(document)?;
    debug!(path = %path.display(), categories = store.len(), "skill data loaded");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::skill::{Skill, SkillKind};
    use tempfile::tempdir;

    fn sample_store() -> SkillStore {
        let mut store = SkillStore::new();
        store.add_category("Languages");
        store
            .get_category_mut("Languages")
            .unwrap()
            .add_skill(Skill::new(SkillKind::Hard, "Rust", 60, "").unwrap());
        store
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("skills_data.json");

        let store = sample_store();
        save(&store, &path).unwrap();
        let reloaded = load(&path).unwrap();

        assert_eq!(reloaded.to_document(), store.to_document());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn missing_file_loads_empty_store() {
        let dir = tempdir().unwrap();
        let store = load(&dir.path().join("absent.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_json_is_a_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("skills_data.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(load(&path), Err(SvError::Format(_))));
    }

    #[test]
    fn corrupt_level_is_a_validation_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("skills_data.json");
        fs::write(
            &path,
            r#"{"Languages": {"name": "Languages", "skills": [
                {"name": "Rust", "level": 9000, "description": "", "type": "HardSkill"}
            ]}}"#,
        )
        .unwrap();

        assert!(matches!(load(&path), Err(SvError::Validation(_))));
    }

    #[test]
    fn saved_document_uses_the_wire_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("skills_data.json");
        save(&sample_store(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let skill = &value["Languages"]["skills"][0];
        assert_eq!(skill["name"], "Rust");
        assert_eq!(skill["level"], 60);
        assert_eq!(skill["type"], "HardSkill");
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("skills_data.json");
        save(&sample_store(), &path).unwrap();
        assert!(path.exists());
    }
}
