//! Integration tests for the in-place rewrite tasks

use std::fs;

use tempfile::TempDir;
use themeforge_cli_lib::rewrite::{
    assets, clean_markup_tree, comments, glob_files, properties, rewrite_file,
};

#[test]
fn property_reorder_rewrites_files_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let sass = temp_dir.path().join("assets/sass");
    fs::create_dir_all(&sass).unwrap();

    let path = sass.join("_card.scss");
    fs::write(
        &path,
        ".card {\n  color: red;\n  display: flex;\n  width: 10rem;\n}\n",
    )
    .unwrap();

    let changed = rewrite_file(&path, properties::reorder).unwrap();
    assert!(changed);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        ".card {\n  display: flex;\n  width: 10rem;\n  color: red;\n}\n"
    );

    // Already-ordered input produces no further change
    let changed = rewrite_file(&path, properties::reorder).unwrap();
    assert!(!changed);
}

#[test]
fn asset_rewrite_is_idempotent_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let theme = temp_dir.path().join("theme");
    fs::create_dir_all(&theme).unwrap();

    let path = theme.join("header.php");
    fs::write(
        &path,
        "<img src=\"img/logo.png\">\n<script src=\"assets/js/script.js\"></script>\n<link rel=\"stylesheet\" href=\"assets/css/style.css\">\n",
    )
    .unwrap();

    assert!(rewrite_file(&path, assets::rewrite_asset_paths).unwrap());
    let once = fs::read_to_string(&path).unwrap();
    assert!(once.contains(
        "src=\"<?php echo get_template_directory_uri(); ?>/img/logo.png\""
    ));
    assert!(once.contains(
        "href=\"<?php echo get_template_directory_uri(); ?>/assets/css/style.css\""
    ));

    // Second run must not double-wrap
    assert!(!rewrite_file(&path, assets::rewrite_asset_paths).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), once);
}

#[test]
fn clean_strips_comments_and_blank_lines_only() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("index.html");
    fs::write(
        &path,
        "<!-- banner -->\n<div>\n\n// stray note\n<p>kept</p>\n/* block\ncomment */\n</div>\n",
    )
    .unwrap();

    rewrite_file(&path, comments::clean_markup).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "<div>\n<p>kept</p>\n</div>\n"
    );
}

#[test]
fn clean_tree_skips_excluded_dirs_and_includes_existing_theme() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let commented = "<!-- note -->\n<p>kept</p>\n";

    fs::write(root.join("index.html"), commented).unwrap();
    fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
    fs::write(root.join("node_modules/pkg/vendored.html"), commented).unwrap();
    fs::create_dir_all(root.join("dist")).unwrap();
    fs::write(root.join("dist/built.html"), commented).unwrap();
    fs::create_dir_all(root.join("theme/partials")).unwrap();
    fs::write(root.join("theme/header.php"), "// todo\n<header></header>\n").unwrap();
    fs::write(root.join("theme/partials/nav.php"), commented).unwrap();

    let report = clean_markup_tree(root, "theme").unwrap();
    assert_eq!(report.scanned, 3);
    assert_eq!(report.changed, 3);

    assert_eq!(
        fs::read_to_string(root.join("index.html")).unwrap(),
        "<p>kept</p>\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("theme/header.php")).unwrap(),
        "<header></header>\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("theme/partials/nav.php")).unwrap(),
        "<p>kept</p>\n"
    );

    // Dependency and build output stay byte-identical
    assert_eq!(
        fs::read_to_string(root.join("node_modules/pkg/vendored.html")).unwrap(),
        commented
    );
    assert_eq!(
        fs::read_to_string(root.join("dist/built.html")).unwrap(),
        commented
    );
}

#[test]
fn clean_tree_without_theme_dir_cleans_markup_only() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(root.join("index.html"), "<!-- x -->\n<p>hi</p>\n").unwrap();
    fs::write(root.join("functions.php"), "// keep: not in a theme dir\n").unwrap();

    let report = clean_markup_tree(root, "theme").unwrap();
    assert_eq!(report.scanned, 1);

    assert_eq!(
        fs::read_to_string(root.join("index.html")).unwrap(),
        "<p>hi</p>\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("functions.php")).unwrap(),
        "// keep: not in a theme dir\n"
    );
}

#[test]
fn glob_selects_stylesheets_recursively() {
    let temp_dir = TempDir::new().unwrap();
    let sass = temp_dir.path().join("assets/sass");
    fs::create_dir_all(sass.join("object/project")).unwrap();
    fs::write(sass.join("style.scss"), "").unwrap();
    fs::write(sass.join("object/project/_mv.scss"), "").unwrap();
    fs::write(sass.join("readme.md"), "").unwrap();

    let pattern = format!("{}/assets/sass/**/*.scss", temp_dir.path().display());
    let files = glob_files(&pattern).unwrap();
    assert_eq!(files.len(), 2);
}
