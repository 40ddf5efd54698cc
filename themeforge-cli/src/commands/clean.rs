//! Comment-stripping command

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use themeforge_cli_lib::rewrite::clean_markup_tree;

/// Strip comments and blank lines from the project's markup files
pub struct CleanCommand {
    root: PathBuf,
    theme: String,
}

impl CleanCommand {
    /// Create a new command instance
    pub const fn new(root: PathBuf, theme: String) -> Self {
        Self { root, theme }
    }

    /// Execute the command. Cleans every `*.html` file under the root
    /// (skipping dependency and build-output directories), plus the theme's
    /// `*.php` files when the theme directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error when a file cannot be read or written.
    pub fn execute(&self) -> Result<()> {
        let report = clean_markup_tree(&self.root, &self.theme)?;

        println!(
            "{} {} markup file(s) scanned, {} cleaned",
            style("✓").green().bold(),
            report.scanned,
            report.changed
        );

        Ok(())
    }
}
