//! Scaffold generator: fixed directory tree plus literal seed files
//!
//! The folder and seed sets exist in two revisions. Both are captured as
//! named profiles of one spec type rather than duplicated task definitions;
//! `current` is the default and its outputs are reproduced byte-exact.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub mod seeds;

/// Which folder/seed revision to generate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ScaffoldProfile {
    /// Current folder/seed set (default)
    #[default]
    Current,
    /// Earlier revision of the same layout, kept for older projects
    Legacy,
}

/// A scaffold profile's folder list and seed files
pub struct ScaffoldSpec {
    /// Directories to ensure exist, relative to the project root
    pub folders: &'static [&'static str],
    /// (relative path, literal content) pairs written unconditionally
    pub seeds: &'static [(&'static str, &'static str)],
}

const FOLDERS: &[&str] = &[
    "assets/sass",
    "assets/img",
    "assets/css",
    "assets/js",
    "assets/fonts",
    "assets/sass/foundation",
    "assets/sass/layout",
    "assets/sass/object/component",
    "assets/sass/object/project",
];

const CURRENT_SEEDS: &[(&str, &str)] = &[
    (
        "assets/sass/foundation/_foundation.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    ("assets/sass/foundation/_reset.scss", ""),
    ("assets/sass/foundation/_variable.scss", seeds::VARIABLE_SCSS),
    ("assets/sass/foundation/_base.scss", seeds::BASE_SCSS),
    ("assets/sass/foundation/_mixin.scss", seeds::MIXIN_SCSS),
    (
        "assets/sass/object/project/_about.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/object/project/_price.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/object/project/_mv.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/object/project/_work.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/object/project/_policy.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/object/project/_skill.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/object/project/_contact.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/object/project/_page-work.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/object/project/_voice.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/object/component/_inner.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/object/component/_section.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/object/component/_swiper.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/layout/_header.scss",
        seeds::USE_FOUNDATION_ONE_LEVEL,
    ),
    (
        "assets/sass/layout/_footer.scss",
        seeds::USE_FOUNDATION_ONE_LEVEL,
    ),
    ("assets/sass/style.scss", seeds::STYLE_SCSS),
    ("index.html", ""),
    (".gitignore", seeds::GITIGNORE),
    ("assets/js/script.js", ""),
];

const LEGACY_SEEDS: &[(&str, &str)] = &[
    (
        "assets/sass/foundation/_foundation.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    ("assets/sass/foundation/_reset.scss", ""),
    ("assets/sass/foundation/_variable.scss", seeds::VARIABLE_SCSS),
    ("assets/sass/foundation/_base.scss", seeds::BASE_SCSS),
    ("assets/sass/foundation/_mixin.scss", seeds::MIXIN_SCSS),
    ("assets/sass/foundation/_function.scss", ""),
    (
        "assets/sass/object/project/_mv.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/object/project/_about.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/object/project/_work.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/object/project/_contact.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/object/component/_inner.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/object/component/_section.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/object/component/_swiper.scss",
        seeds::USE_FOUNDATION_TWO_LEVELS,
    ),
    (
        "assets/sass/layout/_header.scss",
        seeds::USE_FOUNDATION_ONE_LEVEL,
    ),
    (
        "assets/sass/layout/_footer.scss",
        seeds::USE_FOUNDATION_ONE_LEVEL,
    ),
    ("assets/sass/style.scss", seeds::STYLE_SCSS_LEGACY),
    ("assets/js/script.js", ""),
];

impl ScaffoldProfile {
    /// Folder and seed spec for this profile
    #[must_use]
    pub const fn spec(self) -> ScaffoldSpec {
        match self {
            Self::Current => ScaffoldSpec {
                folders: FOLDERS,
                seeds: CURRENT_SEEDS,
            },
            Self::Legacy => ScaffoldSpec {
                folders: FOLDERS,
                seeds: LEGACY_SEEDS,
            },
        }
    }
}

/// What a scaffold run produced
pub struct ScaffoldReport {
    /// Directories ensured to exist
    pub folders: usize,
    /// Seed files written
    pub seeds: usize,
}

/// Scaffold generator for a project root
pub struct Scaffolder {
    root: PathBuf,
    profile: ScaffoldProfile,
}

impl Scaffolder {
    /// Create a generator rooted at `root`
    pub fn new(root: impl Into<PathBuf>, profile: ScaffoldProfile) -> Self {
        Self {
            root: root.into(),
            profile,
        }
    }

    /// Ensure every folder exists, then write every seed file.
    ///
    /// Directory creation is idempotent. Seed files are written
    /// unconditionally, overwriting prior content; re-running discards edits
    /// to generated files.
    ///
    /// # Errors
    ///
    /// Returns an error when a directory cannot be created or a seed file
    /// cannot be written.
    pub fn generate(&self) -> Result<ScaffoldReport> {
        let spec = self.profile.spec();

        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create project root: {}", self.root.display()))?;

        for folder in spec.folders {
            let path = self.root.join(folder);
            fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }

        for (relative_path, content) in spec.seeds {
            let path = self.root.join(relative_path);
            fs::write(&path, content)
                .with_context(|| format!("Failed to write seed file: {}", path.display()))?;
        }

        Ok(ScaffoldReport {
            folders: spec.folders.len(),
            seeds: spec.seeds.len(),
        })
    }
}
