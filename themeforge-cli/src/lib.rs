//! themeforge CLI library
//!
//! Build tasks for front-end theme projects: scaffold generation, handlebars
//! template compilation, change watching, and in-place stylesheet/markup
//! rewrites.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![allow(clippy::multiple_crate_versions)]

pub mod render;
pub mod rewrite;
pub mod scaffold;

pub use render::{RenderOutcome, TemplateRenderer};
pub use scaffold::{ScaffoldProfile, Scaffolder};
