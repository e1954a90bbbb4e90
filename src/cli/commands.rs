//! Command handlers. Each mutating command loads the store, applies one
//! operation, and saves; read commands never write.

use colored::Colorize;

use crate::cli::{CategoryAction, Cli, Commands, SkillAction};
use crate::core::category::{AddOutcome, RemoveOutcome};
use crate::core::skill::Skill;
use crate::error::{Result, SvError};
use crate::storage;

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Category(action) => run_category(cli, action),
        Commands::Skill(action) => run_skill(cli, action),
        Commands::List => run_list(cli),
    }
}

fn run_category(cli: &Cli, action: &CategoryAction) -> Result<()> {
    let mut store = storage::load(&cli.data_file)?;

    match action {
        CategoryAction::Add { name } => {
            if name.trim().is_empty() {
                return Err(SvError::Validation(
                    "category name must be non-empty".to_string(),
                ));
            }
            match store.add_category(name.clone()) {
                AddOutcome::Added => println!("Category '{}' added.", name.green()),
                _ => println!("Category '{}' already exists.", name.yellow()),
            }
        }
        CategoryAction::Remove { name } => match store.remove_category(name) {
            RemoveOutcome::Removed => println!("Category '{}' removed.", name.green()),
            RemoveOutcome::NotFound => {
                return Err(SvError::NotFound(format!("category '{name}'")));
            }
        },
    }

    storage::save(&store, &cli.data_file)
}

fn run_skill(cli: &Cli, action: &SkillAction) -> Result<()> {
    let mut store = storage::load(&cli.data_file)?;

    match action {
        SkillAction::Add {
            category,
            name,
            kind,
            level,
            description,
        } => {
            let skill = Skill::new((*kind).into(), name.clone(), *level, description.clone())?;
            let cat = store
                .get_category_mut(category)
                .ok_or_else(|| SvError::NotFound(format!("category '{category}'")))?;
            match cat.add_skill(skill) {
                AddOutcome::Added => {
                    println!("Added skill '{}' to category '{category}'.", name.green());
                }
                _ => {
                    println!("Replaced skill '{}' in category '{category}'.", name.yellow());
                }
            }
        }
        SkillAction::Update {
            category,
            name,
            level,
        } => {
            let cat = store
                .get_category_mut(category)
                .ok_or_else(|| SvError::NotFound(format!("category '{category}'")))?;
            let skill = cat.get_skill_mut(name).ok_or_else(|| {
                SvError::NotFound(format!("skill '{name}' in category '{category}'"))
            })?;
            skill.update_level(*level)?;
            println!("Updated '{}' level to {level}.", name.green());
            println!("{}", skill.metaphor().cyan());
        }
        SkillAction::Remove { category, name } => {
            let cat = store
                .get_category_mut(category)
                .ok_or_else(|| SvError::NotFound(format!("category '{category}'")))?;
            match cat.remove_skill(name) {
                RemoveOutcome::Removed => {
                    println!("Removed skill '{}' from category '{category}'.", name.green());
                }
                RemoveOutcome::NotFound => {
                    return Err(SvError::NotFound(format!(
                        "skill '{name}' in category '{category}'"
                    )));
                }
            }
        }
        SkillAction::Show { category, name } => {
            let cat = store
                .get_category(category)
                .ok_or_else(|| SvError::NotFound(format!("category '{category}'")))?;
            let skill = cat.get_skill(name).ok_or_else(|| {
                SvError::NotFound(format!("skill '{name}' in category '{category}'"))
            })?;
            print_skill(skill);
            return Ok(());
        }
    }

    storage::save(&store, &cli.data_file)
}

fn run_list(cli: &Cli) -> Result<()> {
    let store = storage::load(&cli.data_file)?;

    if store.is_empty() {
        println!("No skill categories defined yet.");
        return Ok(());
    }

    for category in store.categories() {
        println!("{}", format!("Category: {}", category.name()).bold());
        if category.is_empty() {
            println!("  No skills in this category yet.");
        }
        for skill in category.skills() {
            print_skill(skill);
        }
        println!();
    }
    Ok(())
}

fn print_skill(skill: &Skill) {
    println!("  {} (Level: {})", skill.name().bold(), skill.level());
    if !skill.description().is_empty() {
        println!("    {}", skill.description().dimmed());
    }
    println!("    {}", skill.metaphor().cyan());
}
