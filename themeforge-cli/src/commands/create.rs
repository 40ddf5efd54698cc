//! Scaffold generation command

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use themeforge_cli_lib::{ScaffoldProfile, Scaffolder};

/// Generate the baseline directory tree and seed files
pub struct CreateCommand {
    root: PathBuf,
    profile: ScaffoldProfile,
}

impl CreateCommand {
    /// Create a new command instance
    pub const fn new(root: PathBuf, profile: ScaffoldProfile) -> Self {
        Self { root, profile }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error when the scaffold cannot be written.
    pub fn execute(&self) -> Result<()> {
        println!(
            "{} {} {}",
            style("Scaffolding").green().bold(),
            style("project at").bold(),
            style(self.root.display()).cyan().bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Creating directories and seed files...");

        let report = Scaffolder::new(&self.root, self.profile).generate()?;

        spinner.finish_and_clear();

        println!(
            "{} {} directories ensured, {} seed files written",
            style("✓").green().bold(),
            report.folders,
            report.seeds
        );
        println!();
        println!(
            "{}",
            style("Note: re-running overwrites generated seed files.").dim()
        );

        Ok(())
    }
}
