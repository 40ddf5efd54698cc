//! Stylesheet property-reordering command

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use themeforge_cli_lib::rewrite::{glob_files, properties, rewrite_file};

/// Reorder declaration properties across a glob of stylesheet files
pub struct ScssCommand {
    root: PathBuf,
    pattern: String,
}

impl ScssCommand {
    /// Create a new command instance
    pub const fn new(root: PathBuf, pattern: String) -> Self {
        Self { root, pattern }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error when the glob is invalid or a file cannot be read or
    /// written.
    pub fn execute(&self) -> Result<()> {
        let pattern = self.root.join(&self.pattern).display().to_string();
        let files = glob_files(&pattern)?;

        let mut changed = 0usize;
        for path in &files {
            if rewrite_file(path, properties::reorder)? {
                changed += 1;
            }
        }

        println!(
            "{} {} stylesheet(s) scanned, {} reordered",
            style("✓").green().bold(),
            files.len(),
            changed
        );

        Ok(())
    }
}
