//! CLI definitions - clap v4 derive argument parsing.
//!
//! The CLI is a stateless dispatcher over the store's public API; all
//! prompting and printing stays out of the data model.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::skill::SkillKind;
use crate::storage::DEFAULT_DATA_FILE;

pub mod commands;

/// Skill Vault - Track your skills with visual metaphors
#[derive(Parser, Debug)]
#[command(name = "sv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the skill data file
    #[arg(long, global = true, env = "SV_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage skill categories
    #[command(subcommand)]
    Category(CategoryAction),

    /// Manage skills within a category
    #[command(subcommand)]
    Skill(SkillAction),

    /// Show every category and skill
    List,
}

#[derive(Subcommand, Debug)]
pub enum CategoryAction {
    /// Add a new category
    Add { name: String },

    /// Remove a category and all of its skills
    Remove { name: String },
}

#[derive(Subcommand, Debug)]
pub enum SkillAction {
    /// Add a skill to a category
    Add {
        category: String,
        name: String,

        /// Skill kind
        #[arg(long, value_enum, default_value_t = KindArg::Soft)]
        kind: KindArg,

        /// Initial level (0-100)
        #[arg(long, default_value_t = 0)]
        level: i64,

        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Update a skill's level
    Update {
        category: String,
        name: String,
        level: i64,
    },

    /// Remove a skill from a category
    Remove { category: String, name: String },

    /// Show a single skill
    Show { category: String, name: String },
}

/// CLI-facing skill kind; maps onto [`SkillKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    /// Soft skill, rendered as a mana bar
    Soft,
    /// Hard skill, rendered as an XP tree
    Hard,
}

impl From<KindArg> for SkillKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Soft => Self::Soft,
            KindArg::Hard => Self::Hard,
        }
    }
}
