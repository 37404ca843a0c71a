use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use moodspend::cli::{
    handle_add, handle_delete, handle_export, handle_import, handle_list, handle_report,
    handle_reset, AddArgs, ExportFormat, FilterArgs, ReportView,
};
use moodspend::config::{paths::MoodspendPaths, settings::Settings};
use moodspend::storage::{json_file_valid, Storage};

#[derive(Parser)]
#[command(
    name = "moodspend",
    version,
    about = "Expense tracker that tags every purchase with how you felt",
    long_about = "Moodspend records what you spend together with the mood you were in, \
                  then shows where the money goes per mood, category and day, with a few \
                  plain-language insights on top."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// Delete an expense by id (a unique prefix is enough)
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Total, count and top mood
    Summary {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Plain-language spending insights
    Insights {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Spend by mood, by category and per day
    Charts {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Summary, insights, charts and the expense table together
    Dashboard {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Delete every expense
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Export expenses to a file
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file path
        output: PathBuf,
    },

    /// Replace every expense with the contents of a JSON file
    Import {
        /// Path to a JSON array of expenses
        file: PathBuf,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = MoodspendPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&storage, &settings, args)?,
        Some(Commands::Delete { id }) => handle_delete(&storage, &settings, &id)?,
        Some(Commands::List { filters, limit }) => {
            handle_list(&storage, &settings, &filters, limit)?
        }
        Some(Commands::Summary { filters }) => {
            handle_report(&storage, &settings, &filters, ReportView::Summary)?
        }
        Some(Commands::Insights { filters }) => {
            handle_report(&storage, &settings, &filters, ReportView::Insights)?
        }
        Some(Commands::Charts { filters }) => {
            handle_report(&storage, &settings, &filters, ReportView::Charts)?
        }
        Some(Commands::Dashboard { filters }) => {
            handle_report(&storage, &settings, &filters, ReportView::Full)?
        }
        Some(Commands::Reset { force }) => handle_reset(&storage, &settings, force)?,
        Some(Commands::Export { format, output }) => {
            handle_export(&storage, &settings, format, &output)?
        }
        Some(Commands::Import { file }) => handle_import(&storage, &settings, &file)?,
        Some(Commands::Init) => {
            println!("Initializing moodspend at: {}", paths.base_dir().display());
            storage.initialize()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'moodspend add 120 Happy --category Food' to record an expense.");
        }
        Some(Commands::Config) => {
            println!("Moodspend Configuration");
            println!("=======================");
            println!("Config file:   {}", paths.settings_file().display());
            let expenses_file = paths.expenses_file();
            let status = if !expenses_file.exists() {
                "not created yet"
            } else if json_file_valid(&expenses_file) {
                "ok"
            } else {
                "unreadable"
            };
            println!("Expenses file: {} ({})", expenses_file.display(), status);
            println!("Initialized:   {}", storage.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Date format:         {}", settings.date_format);
            println!("  Amount policy:       {:?}", settings.amount_policy);
            println!("  Corrupt data policy: {:?}", settings.corrupt_data_policy);
        }
        None => {
            println!("Moodspend - expenses tagged with how you felt");
            println!();
            println!("Run 'moodspend --help' for usage information.");
        }
    }

    Ok(())
}
