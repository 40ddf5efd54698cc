//! Theme asset-path rewriting for CMS templated markup
//!
//! Relative image, script, and stylesheet references in a theme's templated
//! markup are prefixed with the template-directory expression so assets
//! resolve wherever the theme is installed. Values that already carry the
//! expression, and absolute URLs, are left alone; the rewrite is idempotent.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Base-path expression prepended to every rewritten asset reference
pub const THEME_URI_EXPR: &str = "<?php echo get_template_directory_uri(); ?>";

static IMG_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"src="([^"]+\.(?:png|jpe?g|gif|svg|webp))""#).expect("hard-coded pattern is valid")
});

static SCRIPT_SRC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"src="([^"]+\.js)""#).expect("hard-coded pattern is valid"));

static LINK_HREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"href="([^"]+\.css)""#).expect("hard-coded pattern is valid"));

/// Whether an attribute value should be prefixed
fn is_rewritable(value: &str) -> bool {
    !(value.contains("get_template_directory_uri")
        || value.starts_with("http://")
        || value.starts_with("https://")
        || value.starts_with("//"))
}

fn prefix_attr(attr: &str, caps: &Captures<'_>) -> String {
    let value = &caps[1];
    if is_rewritable(value) {
        let relative = value.trim_start_matches("./");
        format!(r#"{attr}="{THEME_URI_EXPR}/{relative}""#)
    } else {
        caps[0].to_string()
    }
}

/// Rewrite the three fixed attribute patterns (image `src`, script `src`,
/// stylesheet `href`) in one file's text. Running the rewrite twice produces
/// the same output as running it once.
#[must_use]
pub fn rewrite_asset_paths(text: &str) -> String {
    let text = IMG_SRC.replace_all(text, |caps: &Captures<'_>| prefix_attr("src", caps));
    let text = SCRIPT_SRC.replace_all(&text, |caps: &Captures<'_>| prefix_attr("src", caps));
    LINK_HREF
        .replace_all(&text, |caps: &Captures<'_>| prefix_attr("href", caps))
        .into_owned()
}
