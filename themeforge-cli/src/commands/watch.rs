//! Change watcher command

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use console::style;
use notify::{RecursiveMode, Watcher};
use themeforge_cli_lib::TemplateRenderer;

use super::render::report;

/// Quiet window after the first event before a compiler pass starts; events
/// landing inside the window coalesce into that pass.
const DEBOUNCE: Duration = Duration::from_millis(300);

/// Watch the template source tree and recompile on change
pub struct WatchCommand {
    input: PathBuf,
    output: PathBuf,
    enabled: bool,
}

impl WatchCommand {
    /// Create a new command instance; `input` and `output` are joined onto
    /// `root`, and `enabled` carries the `--templates` flag.
    pub fn new(root: &Path, input: PathBuf, output: PathBuf, enabled: bool) -> Self {
        Self {
            input: root.join(input),
            output: root.join(output),
            enabled,
        }
    }

    /// Execute the command. Blocks indefinitely; compiler passes run to
    /// completion before the next batch of events is accepted, so re-runs
    /// never overlap.
    ///
    /// # Errors
    ///
    /// Returns an error when the watcher cannot be started or its event
    /// channel closes.
    pub fn execute(&self) -> Result<()> {
        if !self.enabled {
            println!(
                "{}",
                style("Watching disabled; pass --templates to enable.").dim()
            );
            return Ok(());
        }

        anyhow::ensure!(
            self.input.is_dir(),
            "Template directory does not exist: {}",
            self.input.display()
        );

        println!(
            "{} {} {}",
            style("Watching").green().bold(),
            style(self.input.display()).cyan(),
            style("(Ctrl-C to stop)").dim()
        );

        let (tx, rx) = mpsc::channel();
        let mut watcher =
            notify::recommended_watcher(tx).context("Failed to initialize file watcher")?;
        watcher
            .watch(&self.input, RecursiveMode::Recursive)
            .with_context(|| format!("Failed to watch directory: {}", self.input.display()))?;

        loop {
            let event = rx.recv().context("File watcher channel closed")?;
            if let Err(e) = event {
                eprintln!("{} {e}", style("watch error").red().bold());
                continue;
            }

            // Coalesce the rest of the burst before recompiling
            while rx.recv_timeout(DEBOUNCE).is_ok() {}

            println!("{}", style("Change detected, recompiling...").bold());
            let renderer = TemplateRenderer::new(&self.input, &self.output);
            match renderer.render_all() {
                Ok(outcome) => report(&outcome),
                Err(e) => eprintln!("{} {e:#}", style("compile failed").red().bold()),
            }
        }
    }
}
