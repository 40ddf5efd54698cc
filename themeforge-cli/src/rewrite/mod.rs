//! In-place text rewrites over glob-selected file sets
//!
//! Each sub-operation is a pure `&str -> String` transform applied through
//! [`rewrite_file`]; files are only touched when the transform changed
//! something. No backups are kept.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::{DirEntry, WalkDir};

pub mod assets;
pub mod comments;
pub mod properties;

/// Directories never cleaned: dependencies and build output
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "target", "dist", ".git"];

/// Apply a text transform to a file in place.
///
/// Returns `true` when the file content changed and was written back.
///
/// # Errors
///
/// Returns an error when the file cannot be read or written.
pub fn rewrite_file<F>(path: &Path, transform: F) -> Result<bool>
where
    F: Fn(&str) -> String,
{
    let original = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let updated = transform(&original);
    if updated == original {
        return Ok(false);
    }
    fs::write(path, &updated).with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(true)
}

/// Expand a glob pattern into the list of matching files.
///
/// # Errors
///
/// Returns an error when the pattern is invalid or a matched path cannot be
/// read from the file system.
pub fn glob_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let paths = glob::glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;
    for entry in paths {
        let path = entry.context("Failed to read glob entry")?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// What a clean pass touched
pub struct CleanReport {
    /// Markup files considered
    pub scanned: usize,
    /// Files whose content changed
    pub changed: usize,
}

/// Strip comments and blank lines from every `*.html` file under `root`,
/// skipping [`EXCLUDED_DIRS`], plus the theme's `*.php` files when the theme
/// directory exists.
///
/// # Errors
///
/// Returns an error when the tree cannot be walked or a file cannot be read
/// or written.
pub fn clean_markup_tree(root: &Path, theme: &str) -> Result<CleanReport> {
    let mut report = CleanReport {
        scanned: 0,
        changed: 0,
    };

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_excluded(e))
    {
        let entry =
            entry.with_context(|| format!("Failed to walk project root: {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }
        report.scanned += 1;
        if rewrite_file(entry.path(), comments::clean_markup)? {
            report.changed += 1;
        }
    }

    let theme_dir = root.join(theme);
    if theme_dir.is_dir() {
        let pattern = theme_dir.join("**/*.php").display().to_string();
        for path in glob_files(&pattern)? {
            report.scanned += 1;
            if rewrite_file(&path, comments::clean_markup)? {
                report.changed += 1;
            }
        }
    }

    Ok(report)
}

fn is_excluded(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn rewrite_file_skips_write_when_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "hello\n").unwrap();

        let changed = rewrite_file(&path, |s| s.to_string()).unwrap();
        assert!(!changed);

        let changed = rewrite_file(&path, |s| s.replace("hello", "bye")).unwrap();
        assert!(changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "bye\n");
    }

    #[test]
    fn glob_files_matches_only_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.scss"), "").unwrap();
        fs::write(dir.path().join("sub/b.scss"), "").unwrap();
        fs::write(dir.path().join("sub/c.css"), "").unwrap();

        let pattern = format!("{}/**/*.scss", dir.path().display());
        let files = glob_files(&pattern).unwrap();
        assert_eq!(files.len(), 2);
    }
}
