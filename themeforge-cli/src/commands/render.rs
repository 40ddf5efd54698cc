//! Template compilation command

use std::path::{Path, PathBuf};

use anyhow::Result;
use console::style;
use themeforge_cli_lib::render::RenderOutcome;
use themeforge_cli_lib::TemplateRenderer;

/// Compile every template source into static markup
pub struct RenderCommand {
    input: PathBuf,
    output: PathBuf,
    enabled: bool,
}

impl RenderCommand {
    /// Create a new command instance; `input` and `output` are joined onto
    /// `root`, and `enabled` carries the `--templates` flag.
    pub fn new(root: &Path, input: PathBuf, output: PathBuf, enabled: bool) -> Self {
        Self {
            input: root.join(input),
            output: root.join(output),
            enabled,
        }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error on file-system failure; individual template errors
    /// are reported and skipped.
    pub fn execute(&self) -> Result<()> {
        if !self.enabled {
            println!(
                "{}",
                style("Template compilation disabled; pass --templates to enable.").dim()
            );
            return Ok(());
        }

        println!(
            "{} {} {} {}",
            style("Compiling").green().bold(),
            style(self.input.display()).cyan(),
            style("->").dim(),
            style(self.output.display()).cyan()
        );

        let renderer = TemplateRenderer::new(&self.input, &self.output);
        let outcome = renderer.render_all()?;
        report(&outcome);

        Ok(())
    }
}

/// Print a pass summary, with per-file failures on stderr
pub fn report(outcome: &RenderOutcome) {
    for failure in &outcome.failures {
        eprintln!(
            "{} {}: {}",
            style("render error").red().bold(),
            failure.path.display(),
            failure.error
        );
    }
    println!(
        "{} {} compiled, {} failed",
        style("✓").green().bold(),
        outcome.rendered.len(),
        outcome.failures.len()
    );
}
