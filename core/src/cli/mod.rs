pub mod commands;

use crate::ai::TextGenerator;
use crate::config::{self, Config};
use crate::error::AppError;
use crate::store::ItemKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "lifeos")]
#[command(author, version, about = "Categorize goals, tasks and projects", long_about = None)]
pub struct Cli {
    /// Config file (defaults to <data dir>/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory (defaults to $LIFEOS_HOME or ~/.lifeos)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Flags shared by every command that classifies.
#[derive(Debug, Clone, clap::Args)]
pub struct AiArgs {
    /// Ask the text generator first, falling back to keyword rules
    #[arg(long)]
    pub ai: bool,

    /// Model to use (e.g., haiku, sonnet)
    #[arg(short, long)]
    pub model: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Categorize a single title and description
    Classify {
        title: String,

        #[arg(short, long)]
        description: Option<String>,

        /// Show which keyword decided a rule-based result
        #[arg(long)]
        explain: bool,

        #[command(flatten)]
        ai: AiArgs,
    },

    /// Show the category taxonomy and its keywords
    Taxonomy {
        /// Show only a specific category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Manage stored goals, tasks and projects
    Items {
        #[command(subcommand)]
        action: ItemsCommand,
    },

    /// Reclassify stored items and write categories back
    CategorizeAll {
        /// Only items of this kind (goal, task, project)
        #[arg(long)]
        kind: Option<ItemKind>,

        /// Skip items that already have a category
        #[arg(long)]
        only_uncategorized: bool,

        /// Maximum concurrent generator calls
        #[arg(long)]
        concurrency: Option<usize>,

        #[command(flatten)]
        ai: AiArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum ItemsCommand {
    /// List stored items
    List {
        #[arg(long)]
        kind: Option<ItemKind>,
    },

    /// Add an item, categorizing it unless --no-categorize is given
    Add {
        kind: ItemKind,

        title: String,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(long)]
        no_categorize: bool,

        #[command(flatten)]
        ai: AiArgs,
    },
}

/// Everything a command needs besides its own arguments.
pub struct Context {
    pub config: Config,
    pub data_dir: PathBuf,
    pub format: OutputFormat,
}

impl Context {
    /// Generator for this invocation: `--ai`/`--model` override the config file.
    pub fn generator(&self, args: &AiArgs) -> Option<Arc<dyn TextGenerator>> {
        let mut classifier = self.config.classifier.clone();
        classifier.use_ai |= args.ai;
        if let Some(model) = &args.model {
            classifier.model.clone_from(model);
        }
        classifier.generator()
    }
}

impl Cli {
    fn context(&self) -> Result<Context, AppError> {
        let data_dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => config::data_root()?,
        };
        let config_path = self
            .config
            .clone()
            .unwrap_or_else(|| data_dir.join("config.json"));
        let config = Config::load(&config_path)?;
        Ok(Context {
            config,
            data_dir,
            format: self.format,
        })
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<(), AppError> {
    let ctx = cli.context()?;

    match cli.command {
        Commands::Classify {
            title,
            description,
            explain,
            ai,
        } => commands::classify::run(&ctx, &title, description.as_deref(), explain, &ai),
        Commands::Taxonomy { category } => commands::taxonomy::run(category.as_deref(), ctx.format),
        Commands::Items { action } => match action {
            ItemsCommand::List { kind } => commands::items::list(&ctx, kind),
            ItemsCommand::Add {
                kind,
                title,
                description,
                no_categorize,
                ai,
            } => commands::items::add(&ctx, kind, title, description, !no_categorize, &ai),
        },
        Commands::CategorizeAll {
            kind,
            only_uncategorized,
            concurrency,
            ai,
        } => commands::categorize::run(&ctx, kind, only_uncategorized, concurrency, &ai),
    }
}

/// Render a failed run for stderr: structured JSON or a plain message.
pub fn render_error(err: &AppError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(err).unwrap_or_else(|_| err.to_string()),
        OutputFormat::Text => format!("Error: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classify_with_flags() {
        let cli = Cli::try_parse_from([
            "lifeos",
            "classify",
            "Fix wifi router",
            "--description",
            "keeps dropping",
            "--ai",
            "--model",
            "sonnet",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Classify {
                title,
                description,
                explain,
                ai,
            } => {
                assert_eq!(title, "Fix wifi router");
                assert_eq!(description.as_deref(), Some("keeps dropping"));
                assert!(!explain);
                assert!(ai.ai);
                assert_eq!(ai.model.as_deref(), Some("sonnet"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_categorize_all_kind() {
        let cli = Cli::try_parse_from([
            "lifeos",
            "categorize-all",
            "--kind",
            "goal",
            "--only-uncategorized",
        ])
        .unwrap();
        match cli.command {
            Commands::CategorizeAll {
                kind,
                only_uncategorized,
                ..
            } => {
                assert_eq!(kind, Some(ItemKind::Goal));
                assert!(only_uncategorized);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_render_error_by_format() {
        let err = AppError::invalid_input("Unknown category 'wellness'");
        assert_eq!(
            render_error(&err, OutputFormat::Text),
            "Error: Invalid input: Unknown category 'wellness'"
        );
        let json: serde_json::Value =
            serde_json::from_str(&render_error(&err, OutputFormat::Json)).unwrap();
        assert_eq!(json["type"], "InvalidInput");
        assert_eq!(json["details"]["message"], "Unknown category 'wellness'");
    }

    #[test]
    fn test_unknown_taxonomy_category_is_invalid_input() {
        let err = commands::taxonomy::run(Some("wellness"), OutputFormat::Json).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput { .. }));
    }

    #[test]
    fn test_unusable_data_dir_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "lifeos",
            "--data-dir",
            dir.path().to_str().unwrap(),
            "items",
            "list",
        ])
        .unwrap();
        run(cli).unwrap();

        let ctx = Context {
            config: Config::default(),
            data_dir: dir.path().join("missing-root-file"),
            format: OutputFormat::Text,
        };
        std::fs::write(&ctx.data_dir, "not a directory").unwrap();
        let err = commands::items::list(&ctx, None).unwrap_err();
        assert!(matches!(err, AppError::Storage { .. }));
    }

    #[test]
    fn test_rejects_unknown_item_kind() {
        assert!(Cli::try_parse_from(["lifeos", "items", "add", "habit", "Floss"]).is_err());
    }
}
