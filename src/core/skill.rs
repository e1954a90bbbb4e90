//! Skill variants and their derived presentation state.
//!
//! A [`Skill`] is one of two concrete variants: a [`SoftSkill`] rendered as a
//! mana bar, or a [`HardSkill`] rendered as an XP tree stage. Derived state is
//! a pure function of the level and is recomputed on every level change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SvError};

/// Highest level a skill can reach.
pub const MAX_LEVEL: u8 = 100;

/// Segments in the mana bar rendering.
const MANA_BAR_SEGMENTS: u8 = 10;

/// Ordered (threshold, stage) table for hard skills. The stage for a level is
/// the one with the greatest threshold <= level.
pub const XP_STAGES: [(u8, XpStage); 5] = [
    (0, XpStage::Seed),
    (10, XpStage::Sapling),
    (30, XpStage::YoungTree),
    (60, XpStage::MatureTree),
    (90, XpStage::AncientTree),
];

/// The fixed set of skill variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    Soft,
    Hard,
}

impl SkillKind {
    /// Wire tag carried in the persisted document. The sole channel through
    /// which variant identity survives persistence.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Soft => "SoftSkill",
            Self::Hard => "HardSkill",
        }
    }
}

impl fmt::Display for SkillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Growth stage of a hard skill's XP tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XpStage {
    Seed,
    Sapling,
    YoungTree,
    MatureTree,
    AncientTree,
    /// Defensive default; unreachable while the level invariant holds.
    Unknown,
}

impl fmt::Display for XpStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Seed => "Seed",
            Self::Sapling => "Sapling",
            Self::YoungTree => "Young Tree",
            Self::MatureTree => "Mature Tree",
            Self::AncientTree => "Ancient Tree",
            Self::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Flat wire record for a single skill.
///
/// `level` travels as a plain integer so that an out-of-range value in a
/// document still parses and is rejected by semantic validation rather than
/// the JSON parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub level: i64,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A soft skill, rendered as a mana bar proportional to the level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftSkill {
    name: String,
    level: u8,
    description: String,
    mana_bar: u8,
}

impl SoftSkill {
    pub fn new(
        name: impl Into<String>,
        level: i64,
        description: impl Into<String>,
    ) -> Result<Self> {
        let name = validate_name(name.into())?;
        let level = validate_level(level)?;
        Ok(Self {
            name,
            level,
            description: description.into(),
            mana_bar: mana_bar_for(level),
        })
    }

    /// Mana bar magnitude (0-100), derived from the level.
    #[must_use]
    pub const fn mana_bar(&self) -> u8 {
        self.mana_bar
    }

    pub fn update_level(&mut self, new_level: i64) -> Result<()> {
        self.level = validate_level(new_level)?;
        self.mana_bar = mana_bar_for(self.level);
        Ok(())
    }

    #[must_use]
    pub fn metaphor(&self) -> String {
        let filled = usize::from(self.mana_bar / MANA_BAR_SEGMENTS);
        let empty = usize::from(MANA_BAR_SEGMENTS) - filled;
        format!(
            "Mana: [{}{}] ({}%)",
            "\u{2588}".repeat(filled),
            "\u{2591}".repeat(empty),
            self.mana_bar
        )
    }
}

/// A hard skill, rendered as an XP tree stage chosen from [`XP_STAGES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardSkill {
    name: String,
    level: u8,
    description: String,
    stage: XpStage,
}

impl HardSkill {
    pub fn new(
        name: impl Into<String>,
        level: i64,
        description: impl Into<String>,
    ) -> Result<Self> {
        let name = validate_name(name.into())?;
        let level = validate_level(level)?;
        Ok(Self {
            name,
            level,
            description: description.into(),
            stage: stage_for(level),
        })
    }

    /// Current XP tree stage, derived from the level.
    #[must_use]
    pub const fn stage(&self) -> XpStage {
        self.stage
    }

    pub fn update_level(&mut self, new_level: i64) -> Result<()> {
        self.level = validate_level(new_level)?;
        self.stage = stage_for(self.level);
        Ok(())
    }

    #[must_use]
    pub fn metaphor(&self) -> String {
        format!("XP Tree: {} (Level: {})", self.stage, self.level)
    }
}

/// A named, leveled skill entity. Behavior dispatches on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skill {
    Soft(SoftSkill),
    Hard(HardSkill),
}

impl Skill {
    /// Create a skill of the given kind. Fails with
    /// [`SvError::Validation`] when the level is outside 0-100 or the name is
    /// empty.
    pub fn new(
        kind: SkillKind,
        name: impl Into<String>,
        level: i64,
        description: impl Into<String>,
    ) -> Result<Self> {
        match kind {
            SkillKind::Soft => SoftSkill::new(name, level, description).map(Self::Soft),
            SkillKind::Hard => HardSkill::new(name, level, description).map(Self::Hard),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Soft(s) => &s.name,
            Self::Hard(s) => &s.name,
        }
    }

    #[must_use]
    pub const fn level(&self) -> u8 {
        match self {
            Self::Soft(s) => s.level,
            Self::Hard(s) => s.level,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Soft(s) => &s.description,
            Self::Hard(s) => &s.description,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> SkillKind {
        match self {
            Self::Soft(_) => SkillKind::Soft,
            Self::Hard(_) => SkillKind::Hard,
        }
    }

    /// Update the level in place, re-deriving presentation state. On failure
    /// the previous level and derived state are unchanged.
    pub fn update_level(&mut self, new_level: i64) -> Result<()> {
        match self {
            Self::Soft(s) => s.update_level(new_level),
            Self::Hard(s) => s.update_level(new_level),
        }
    }

    /// Human-readable rendering of the derived state, distinct per variant.
    #[must_use]
    pub fn metaphor(&self) -> String {
        match self {
            Self::Soft(s) => s.metaphor(),
            Self::Hard(s) => s.metaphor(),
        }
    }

    #[must_use]
    pub fn to_record(&self) -> SkillRecord {
        SkillRecord {
            name: self.name().to_string(),
            level: i64::from(self.level()),
            description: self.description().to_string(),
            kind: self.kind().tag().to_string(),
        }
    }

    /// Reconstruct a skill from a wire record via the kind registry.
    ///
    /// Returns `Ok(None)` for an unknown tag so the caller can skip the
    /// record (load-time forward compatibility). A known tag with an invalid
    /// level fails with [`SvError::Validation`].
    pub fn from_record(record: &SkillRecord) -> Result<Option<Self>> {
        let Some((_, build)) = KIND_REGISTRY.iter().find(|(tag, _)| *tag == record.kind) else {
            return Ok(None);
        };
        build(record).map(Some)
    }
}

type Constructor = fn(&SkillRecord) -> Result<Skill>;

/// Wire tag -> constructor table, consulted once per record on load.
const KIND_REGISTRY: &[(&str, Constructor)] = &[
    (SkillKind::Soft.tag(), build_soft),
    (SkillKind::Hard.tag(), build_hard),
];

fn build_soft(record: &SkillRecord) -> Result<Skill> {
    SoftSkill::new(record.name.clone(), record.level, record.description.clone()).map(Skill::Soft)
}

fn build_hard(record: &SkillRecord) -> Result<Skill> {
    HardSkill::new(record.name.clone(), record.level, record.description.clone()).map(Skill::Hard)
}

const fn mana_bar_for(level: u8) -> u8 {
    level
}

fn stage_for(level: u8) -> XpStage {
    let mut current = XpStage::Unknown;
    for (threshold, stage) in XP_STAGES {
        if level >= threshold {
            current = stage;
        } else {
            break;
        }
    }
    current
}

fn validate_level(level: i64) -> Result<u8> {
    match u8::try_from(level) {
        Ok(l) if l <= MAX_LEVEL => Ok(l),
        _ => Err(SvError::Validation(format!(
            "skill level must be between 0 and {MAX_LEVEL}, got {level}"
        ))),
    }
}

fn validate_name(name: String) -> Result<String> {
    if name.trim().is_empty() {
        return Err(SvError::Validation(
            "skill name must be non-empty".to_string(),
        ));
    }
    Ok(name)
}
