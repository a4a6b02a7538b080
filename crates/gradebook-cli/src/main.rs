//! gradebook CLI — the user-facing command-line interface.
//!
//! Every command loads the data file, runs against the in-memory store, and
//! commands that change the roster write the whole file back before exiting.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};

use gradebook_core::config::{load_config_from, GradebookConfig};

mod commands;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Student records, grades, and class reports")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data file path (overrides config and GRADEBOOK_DATA_FILE)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config and an empty data file
    Init,

    /// Add a student
    Add {
        /// Full name
        #[arg(long)]
        name: String,

        /// Student id (must be unique)
        #[arg(long)]
        id: String,

        /// First partial score (0-100)
        #[arg(long, allow_hyphen_values = true)]
        score1: f64,

        /// Second partial score (0-100)
        #[arg(long, allow_hyphen_values = true)]
        score2: f64,

        /// Third partial score (0-100)
        #[arg(long, allow_hyphen_values = true)]
        score3: f64,
    },

    /// Show one student
    Show {
        /// Student id
        #[arg(long)]
        id: String,
    },

    /// Show one student compared against the class mean
    Analyze {
        /// Student id
        #[arg(long)]
        id: String,
    },

    /// Change some fields of a student
    Update {
        /// Id of the student to change
        #[arg(long)]
        id: String,

        /// New full name
        #[arg(long)]
        name: Option<String>,

        /// New student id
        #[arg(long)]
        new_id: Option<String>,

        /// New first partial score
        #[arg(long, allow_hyphen_values = true)]
        score1: Option<f64>,

        /// New second partial score
        #[arg(long, allow_hyphen_values = true)]
        score2: Option<f64>,

        /// New third partial score
        #[arg(long, allow_hyphen_values = true)]
        score3: Option<f64>,
    },

    /// Remove a student
    Remove {
        /// Student id
        #[arg(long)]
        id: String,
    },

    /// List students
    List {
        /// Which students: all, passed, failed
        #[arg(long, default_value = "all")]
        status: String,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show class statistics
    Stats {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show the best final scores
    Top {
        /// How many students to show (default from config)
        #[arg(long)]
        count: Option<usize>,
    },

    /// Write the general class report
    Report {
        /// Output file (default from config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: text, html
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Check a data file without changing it
    Validate {
        /// Data file to check (default: the configured data file)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook_core=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = resolve_config(cli.config.as_deref(), cli.data_file)
        .and_then(|config| run(cli.command, &config));

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn resolve_config(path: Option<&Path>, data_file: Option<PathBuf>) -> Result<GradebookConfig> {
    let mut config = load_config_from(path)?;
    if let Some(data_file) = data_file {
        config.data_file = data_file;
    }
    Ok(config)
}

fn run(command: Commands, config: &GradebookConfig) -> Result<()> {
    match command {
        Commands::Init => commands::init::execute(config),
        Commands::Add {
            name,
            id,
            score1,
            score2,
            score3,
        } => commands::add::execute(config, &name, &id, [score1, score2, score3]),
        Commands::Show { id } => commands::show::execute(config, &id),
        Commands::Analyze { id } => commands::show::analyze(config, &id),
        Commands::Update {
            id,
            name,
            new_id,
            score1,
            score2,
            score3,
        } => {
            let patch = gradebook_core::RecordPatch {
                name,
                id: new_id,
                score1,
                score2,
                score3,
            };
            commands::update::execute(config, &id, patch)
        }
        Commands::Remove { id } => commands::remove::execute(config, &id),
        Commands::List { status, format } => commands::list::execute(config, &status, &format),
        Commands::Stats { format } => commands::stats::execute(config, &format),
        Commands::Top { count } => commands::top::execute(config, count),
        Commands::Report { output, format } => commands::report::execute(config, output, &format),
        Commands::Validate { file } => commands::validate::execute(config, file),
    }
}
