//! themeforge CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use themeforge_cli_lib::ScaffoldProfile;

use commands::{CleanCommand, CreateCommand, PathCommand, RenderCommand, ScssCommand, WatchCommand};

/// Default template source directory, relative to the project root
const DEFAULT_TEMPLATE_INPUT: &str = "assets/templates";
/// Default compiled markup directory, relative to the project root
const DEFAULT_TEMPLATE_OUTPUT: &str = "assets/dist";

#[derive(Parser)]
#[command(name = "themeforge")]
#[command(version)]
#[command(about = "Build tasks for front-end theme projects", long_about = None)]
struct Cli {
    /// Project root every task operates under
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Enable the template compiler and its watcher
    #[arg(long, global = true)]
    templates: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the baseline directory tree and seed files
    Create {
        /// Folder/seed revision to generate
        #[arg(long, value_enum, default_value_t)]
        profile: ScaffoldProfile,
    },
    /// Compile template sources to static markup (requires --templates)
    Render {
        /// Template source directory, relative to the project root
        #[arg(long, default_value = DEFAULT_TEMPLATE_INPUT)]
        input: PathBuf,
        /// Compiled markup directory, relative to the project root
        #[arg(long, default_value = DEFAULT_TEMPLATE_OUTPUT)]
        output: PathBuf,
    },
    /// Watch template sources and recompile on change (requires --templates)
    Watch {
        /// Template source directory, relative to the project root
        #[arg(long, default_value = DEFAULT_TEMPLATE_INPUT)]
        input: PathBuf,
        /// Compiled markup directory, relative to the project root
        #[arg(long, default_value = DEFAULT_TEMPLATE_OUTPUT)]
        output: PathBuf,
    },
    /// Compile once (when enabled), then watch
    Default {
        /// Template source directory, relative to the project root
        #[arg(long, default_value = DEFAULT_TEMPLATE_INPUT)]
        input: PathBuf,
        /// Compiled markup directory, relative to the project root
        #[arg(long, default_value = DEFAULT_TEMPLATE_OUTPUT)]
        output: PathBuf,
    },
    /// Reorder declaration properties in stylesheet files
    Scss {
        /// Glob of stylesheet files, relative to the project root
        #[arg(long, default_value = "assets/sass/**/*.scss")]
        pattern: String,
    },
    /// Prefix theme asset references with the template-directory expression
    Path {
        /// Theme directory, relative to the project root
        #[arg(long, default_value = "theme")]
        theme: String,
    },
    /// Strip comments and blank lines from markup files
    Clean {
        /// Theme directory whose templated markup is also cleaned, when present
        #[arg(long, default_value = "theme")]
        theme: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Create { profile } => {
            CreateCommand::new(cli.root, profile).execute()?;
        }
        Commands::Render { input, output } => {
            RenderCommand::new(&cli.root, input, output, cli.templates).execute()?;
        }
        Commands::Watch { input, output } => {
            WatchCommand::new(&cli.root, input, output, cli.templates).execute()?;
        }
        Commands::Default { input, output } => {
            RenderCommand::new(&cli.root, input.clone(), output.clone(), cli.templates)
                .execute()?;
            WatchCommand::new(&cli.root, input, output, cli.templates).execute()?;
        }
        Commands::Scss { pattern } => {
            ScssCommand::new(cli.root, pattern).execute()?;
        }
        Commands::Path { theme } => {
            PathCommand::new(cli.root, theme).execute()?;
        }
        Commands::Clean { theme } => {
            CleanCommand::new(cli.root, theme).execute()?;
        }
    }

    Ok(())
}
