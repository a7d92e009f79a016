//! GlucoGuide CLI - Prompt catalog inspection
//!
//! Lists the diabetes assistant's prompt templates and guidelines and renders
//! conversation seeds for use with an external model.

mod catalog;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use glucoguide::{
    format_seed, Category, DiabetesType, PersonalizedPromptBuilder, PromptCatalog, SeedFormat,
    TemplateKind, UserProfile, SUGGESTED_GOALS,
};

use catalog::{dump_toml, load_catalog, load_catalog_file};
use config::Config;

#[derive(Parser)]
#[command(name = "glucoguide")]
#[command(about = "GlucoGuide CLI - Diabetes assistant prompt catalog", long_about = None)]
#[command(version)]
struct Cli {
    /// Catalog file (TOML or JSON) to use instead of the configured one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List template categories
    Categories,

    /// Show the templates of a category
    Templates {
        /// Category key (e.g., meal_planning, type1_guidance)
        category: Option<String>,
    },

    /// Show the conversation guidelines
    Guidelines,

    /// Print the assistant system prompt
    SystemPrompt,

    /// Render a conversation seed for a category
    Seed {
        /// Category key (defaults to the configured category)
        category: Option<String>,
        /// Output format: raw, markdown, json
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Render a system prompt tailored to a user profile
    Personalize {
        /// User ID
        #[arg(short, long, default_value = "guest")]
        user: String,
        /// Diabetes type: T1, T2, Prediabetes, None
        #[arg(short = 't', long, default_value = "None")]
        diabetes_type: String,
        /// Daily carb budget in grams
        #[arg(short, long)]
        carb_budget: f64,
        /// Health goal (repeatable or comma-separated, e.g., "Avoid spikes,Weight loss")
        #[arg(short, long, value_delimiter = ',')]
        goal: Vec<String>,
        /// Type-specific details as key=value (repeatable)
        #[arg(short, long)]
        detail: Vec<String>,
        /// Carbs eaten so far today in grams
        #[arg(long)]
        consumed: Option<f64>,
        /// Leave out the low glycemic index food list
        #[arg(long)]
        no_low_gi: bool,
    },

    /// Check a catalog file without using it
    Validate {
        /// Path to the catalog file
        file: PathBuf,
    },

    /// Print the active catalog as TOML
    Dump,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Update configuration values
    Set {
        /// Catalog file to load by default
        #[arg(long)]
        catalog_path: Option<PathBuf>,
        /// Default seed format: raw, markdown, json
        #[arg(long)]
        default_format: Option<String>,
        /// Default seed category
        #[arg(long)]
        default_category: Option<String>,
    },
    /// Go back to the built-in catalog
    ClearCatalog,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load()?;

    let catalog_path = cli.catalog.clone().or_else(|| config.catalog_path.clone());
    let load = || -> Result<Arc<PromptCatalog>> {
        glucoguide::install_global(load_catalog(catalog_path.as_deref())?);
        Ok(glucoguide::global().current())
    };

    match cli.command {
        Commands::Categories => cmd_categories(&*load()?),
        Commands::Templates { category } => cmd_templates(&*load()?, &config, category),
        Commands::Guidelines => cmd_guidelines(&*load()?),
        Commands::SystemPrompt => {
            println!("{}", load()?.system_prompt());
            Ok(())
        }
        Commands::Seed { category, format } => cmd_seed(&*load()?, &config, category, format),
        Commands::Personalize {
            user,
            diabetes_type,
            carb_budget,
            goal,
            detail,
            consumed,
            no_low_gi,
        } => {
            let profile = build_profile(user, &diabetes_type, carb_budget, goal, detail)?;
            cmd_personalize(&*load()?, &profile, consumed, !no_low_gi)
        }
        Commands::Validate { file } => cmd_validate(&file),
        Commands::Dump => {
            print!("{}", dump_toml(&*load()?)?);
            Ok(())
        }
        Commands::Config { action } => cmd_config(config, action),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ============================================
// Command Implementations
// ============================================

fn cmd_categories(catalog: &PromptCatalog) -> Result<()> {
    println!("{}", "Categories:".bold());
    for category in catalog.list_categories() {
        println!(
            "  {} {} ({} templates)",
            category.key().cyan(),
            category.title().dimmed(),
            catalog.templates(*category).len()
        );
    }
    Ok(())
}

fn cmd_templates(catalog: &PromptCatalog, config: &Config, category: Option<String>) -> Result<()> {
    let category = resolve_category(config, category)?;

    println!("{}", category.title().bold());
    for (i, template) in catalog.templates(category).iter().enumerate() {
        let marker = match template.kind {
            TemplateKind::Question => "?".green(),
            TemplateKind::Topic => "•".yellow(),
        };
        println!("  {} {}. {}", marker, i + 1, template);
    }
    Ok(())
}

fn cmd_guidelines(catalog: &PromptCatalog) -> Result<()> {
    println!("{}", "Guidelines:".bold());
    for (i, guideline) in catalog.guidelines().iter().enumerate() {
        println!("  {}. {}", i + 1, guideline);
    }
    Ok(())
}

fn cmd_seed(
    catalog: &PromptCatalog,
    config: &Config,
    category: Option<String>,
    format: Option<String>,
) -> Result<()> {
    let category = resolve_category(config, category)?;
    let format = match format {
        Some(f) => f.parse::<SeedFormat>().map_err(anyhow::Error::msg)?,
        None => config.default_format,
    };

    let seed = catalog.assemble_conversation_seed(category);
    tracing::debug!(category = %category, format = format.name(), "Rendering seed");
    println!("{}", format_seed(&seed, format)?);
    Ok(())
}

fn cmd_personalize(
    catalog: &PromptCatalog,
    profile: &UserProfile,
    consumed: Option<f64>,
    include_low_gi: bool,
) -> Result<()> {
    let mut builder =
        PersonalizedPromptBuilder::new(catalog, profile).with_low_gi_foods(include_low_gi);
    if let Some(grams) = consumed {
        builder = builder.with_consumed_carbs(grams);
    }
    println!("{}", builder.build()?);
    Ok(())
}

fn cmd_validate(file: &Path) -> Result<()> {
    let catalog = load_catalog_file(file)?;
    println!(
        "{} {:?}: {} templates in {} categories, {} guidelines",
        "✓".green(),
        file,
        catalog.template_count(),
        catalog.list_categories().len(),
        catalog.guidelines().len()
    );
    Ok(())
}

fn cmd_config(mut config: Config, action: Option<ConfigAction>) -> Result<()> {
    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Config file: {:?}", Config::config_path()?);
            match &config.catalog_path {
                Some(path) => println!("  Catalog: {:?}", path),
                None => println!("  Catalog: {}", "built-in".dimmed()),
            }
            println!("  Default format: {}", config.default_format.name());
            match config.default_category {
                Some(category) => println!("  Default category: {}", category),
                None => println!("  Default category: {}", "(not set)".dimmed()),
            }
        }
        ConfigAction::Set {
            catalog_path,
            default_format,
            default_category,
        } => {
            if catalog_path.is_none() && default_format.is_none() && default_category.is_none() {
                bail!("Nothing to set. Use --catalog-path, --default-format or --default-category");
            }
            if let Some(path) = catalog_path {
                load_catalog_file(&path)
                    .with_context(|| format!("Refusing to configure unusable catalog {:?}", path))?;
                config.catalog_path = Some(path);
            }
            if let Some(format) = default_format {
                config.default_format = format.parse().map_err(anyhow::Error::msg)?;
            }
            if let Some(category) = default_category {
                config.default_category = Some(category.parse()?);
            }
            config.save()?;
            println!("{} Configuration saved to {:?}", "✓".green(), Config::config_path()?);
        }
        ConfigAction::ClearCatalog => {
            config.catalog_path = None;
            config.save()?;
            println!("{} Using the built-in catalog", "✓".green());
        }
    }
    Ok(())
}

// ============================================
// Helpers
// ============================================

fn resolve_category(config: &Config, category: Option<String>) -> Result<Category> {
    match category {
        Some(key) => Ok(key.parse()?),
        None => config
            .default_category
            .context("No category given and no default_category configured"),
    }
}

fn build_profile(
    user: String,
    diabetes_type: &str,
    carb_budget: f64,
    goals: Vec<String>,
    details: Vec<String>,
) -> Result<UserProfile> {
    let diabetes_type: DiabetesType = diabetes_type.parse().map_err(anyhow::Error::msg)?;
    let mut profile = UserProfile::new(user, diabetes_type, carb_budget);

    for goal in goals {
        let goal = goal.trim();
        if goal.is_empty() {
            continue;
        }
        if !SUGGESTED_GOALS.contains(&goal) {
            tracing::debug!(goal, "Custom goal outside the suggested list");
        }
        profile = profile.with_goal(goal);
    }

    for detail in details {
        let (key, value) = detail
            .split_once('=')
            .with_context(|| format!("Detail must be key=value, got {:?}", detail))?;
        profile = profile.with_detail(key.trim(), value.trim());
    }

    profile.validate()?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_seed() {
        let cli = Cli::try_parse_from(["glucoguide", "seed", "meal_planning", "-f", "json"]).unwrap();
        match cli.command {
            Commands::Seed { category, format } => {
                assert_eq!(category.as_deref(), Some("meal_planning"));
                assert_eq!(format.as_deref(), Some("json"));
            }
            _ => panic!("expected seed command"),
        }
    }

    #[test]
    fn test_cli_parses_repeated_goal() {
        let cli = Cli::try_parse_from([
            "glucoguide",
            "personalize",
            "--carb-budget",
            "150",
            "--goal",
            "Avoid spikes",
            "--goal",
            "Weight loss,Better sleep",
        ])
        .unwrap();
        match cli.command {
            Commands::Personalize { goal, .. } => {
                assert_eq!(goal, vec!["Avoid spikes", "Weight loss", "Better sleep"]);
            }
            _ => panic!("expected personalize command"),
        }

        assert!(Cli::try_parse_from([
            "glucoguide",
            "personalize",
            "--carb-budget",
            "150",
            "--goals",
            "Avoid spikes",
        ])
        .is_err());
    }

    #[test]
    fn test_personalize_rejects_bad_consumed_carbs() {
        let catalog = PromptCatalog::builtin();
        let profile = UserProfile::new("sam", DiabetesType::Type2, 150.0);

        assert!(cmd_personalize(&catalog, &profile, Some(-20.0), true).is_err());
        assert!(cmd_personalize(&catalog, &profile, Some(f64::NAN), true).is_err());
        assert!(cmd_personalize(&catalog, &profile, Some(40.0), false).is_ok());
    }

    #[test]
    fn test_resolve_category_prefers_argument() {
        let config = Config {
            default_category: Some(Category::GeneralTips),
            ..Config::default()
        };
        assert_eq!(
            resolve_category(&config, Some("carb_counting".to_string())).unwrap(),
            Category::CarbCounting
        );
        assert_eq!(resolve_category(&config, None).unwrap(), Category::GeneralTips);
    }

    #[test]
    fn test_resolve_category_errors() {
        assert!(resolve_category(&Config::default(), None).is_err());

        let err = resolve_category(&Config::default(), Some("desserts".to_string())).unwrap_err();
        assert!(err.to_string().contains("Unknown category: desserts"));
    }

    #[test]
    fn test_build_profile() {
        let profile = build_profile(
            "sam".to_string(),
            "T1",
            160.0,
            vec!["Avoid spikes".to_string(), " ".to_string()],
            vec!["insulin_type = Humalog".to_string()],
        )
        .unwrap();

        assert_eq!(profile.diabetes_type, DiabetesType::Type1);
        assert_eq!(profile.general_goals, vec!["Avoid spikes".to_string()]);
        assert_eq!(profile.details.get("insulin_type").map(String::as_str), Some("Humalog"));
    }

    #[test]
    fn test_build_profile_rejects_bad_input() {
        assert!(build_profile("sam".to_string(), "T9", 160.0, vec![], vec![]).is_err());
        assert!(build_profile("sam".to_string(), "T2", 160.0, vec![], vec!["a1c".to_string()]).is_err());
        assert!(build_profile("sam".to_string(), "T2", 0.0, vec![], vec![]).is_err());
    }
}
