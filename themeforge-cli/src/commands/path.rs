//! Theme asset-path rewriting command

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use themeforge_cli_lib::rewrite::{assets, glob_files, rewrite_file};

/// Prefix theme asset references with the template-directory expression
pub struct PathCommand {
    root: PathBuf,
    theme: String,
}

impl PathCommand {
    /// Create a new command instance
    pub const fn new(root: PathBuf, theme: String) -> Self {
        Self { root, theme }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error when a theme file cannot be read or written.
    pub fn execute(&self) -> Result<()> {
        let theme_dir = self.root.join(&self.theme);
        if !theme_dir.is_dir() {
            println!(
                "{} {}",
                style("No theme directory at").dim(),
                style(theme_dir.display()).dim()
            );
            return Ok(());
        }

        let pattern = theme_dir.join("**/*.php").display().to_string();
        let files = glob_files(&pattern)?;

        let mut changed = 0usize;
        for path in &files {
            if rewrite_file(path, assets::rewrite_asset_paths)? {
                changed += 1;
            }
        }

        println!(
            "{} {} theme file(s) scanned, {} rewritten",
            style("✓").green().bold(),
            files.len(),
            changed
        );

        Ok(())
    }
}
