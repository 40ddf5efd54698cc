//! Template compilation: a directory of handlebars sources rendered to
//! static markup, one-to-one, with relative structure preserved

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde_json::json;
use walkdir::WalkDir;

/// File extension recognized as a template source
pub const TEMPLATE_EXT: &str = "hbs";

/// A per-file rendering failure; does not abort the pass
pub struct RenderFailure {
    /// Template source that failed to render
    pub path: PathBuf,
    /// Engine error, stringified for reporting
    pub error: String,
}

/// Outcome of one compiler pass
pub struct RenderOutcome {
    /// Markup files written
    pub rendered: Vec<PathBuf>,
    /// Sources that failed to render and were skipped
    pub failures: Vec<RenderFailure>,
}

/// Renders every template under an input directory into an output directory
pub struct TemplateRenderer {
    input: PathBuf,
    output: PathBuf,
    handlebars: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a renderer for `input` -> `output`
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        let mut handlebars = Handlebars::new();

        // Output is markup, not form data; escaping would corrupt it
        handlebars.register_escape_fn(handlebars::no_escape);

        Self {
            input: input.into(),
            output: output.into(),
            handlebars,
        }
    }

    /// Run one compiler pass over the input tree.
    ///
    /// Every `*.hbs` file is rendered with an empty data context and written
    /// to the output directory under the same relative path with an `.html`
    /// extension. A template that fails to render is recorded in the outcome
    /// and the pass continues; file-system failures abort.
    ///
    /// # Errors
    ///
    /// Returns an error when the input tree cannot be walked or a source or
    /// destination file cannot be read, created, or written.
    pub fn render_all(&self) -> Result<RenderOutcome> {
        let mut outcome = RenderOutcome {
            rendered: Vec::new(),
            failures: Vec::new(),
        };

        // A missing input directory means there is nothing to compile
        if !self.input.is_dir() {
            return Ok(outcome);
        }

        for entry in WalkDir::new(&self.input) {
            let entry = entry.with_context(|| {
                format!("Failed to walk template directory: {}", self.input.display())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXT) {
                continue;
            }

            match self.render_one(path)? {
                Ok(dest) => outcome.rendered.push(dest),
                Err(error) => outcome.failures.push(RenderFailure {
                    path: path.to_path_buf(),
                    error,
                }),
            }
        }

        Ok(outcome)
    }

    /// Render a single source file. The outer `Result` is a fatal
    /// file-system error; the inner one is a non-fatal engine error.
    fn render_one(&self, path: &Path) -> Result<Result<PathBuf, String>> {
        let relative = path
            .strip_prefix(&self.input)
            .with_context(|| format!("Template outside input tree: {}", path.display()))?;
        let dest = self.output.join(relative).with_extension("html");

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display()))?;

        match self.handlebars.render_template(&source, &json!({})) {
            Ok(markup) => {
                fs::write(&dest, markup)
                    .with_context(|| format!("Failed to write markup: {}", dest.display()))?;
                Ok(Ok(dest))
            }
            Err(e) => Ok(Err(e.to_string())),
        }
    }
}
