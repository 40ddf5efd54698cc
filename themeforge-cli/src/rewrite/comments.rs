//! Comment and blank-line stripping

use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("hard-coded pattern is valid"));

static MARKUP_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("hard-coded pattern is valid"));

/// Drop every line that is a single-line comment (`//` after leading
/// whitespace) and every blank line. Remaining lines are untouched.
#[must_use]
pub fn strip_line_comments(text: &str) -> String {
    let kept: Vec<&str> = text
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            !trimmed.is_empty() && !trimmed.starts_with("//")
        })
        .collect();

    let mut out = kept.join("\n");
    if text.ends_with('\n') && !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Remove `/* ... */` spans, including those crossing line boundaries
#[must_use]
pub fn strip_block_comments(text: &str) -> String {
    BLOCK_COMMENT.replace_all(text, "").into_owned()
}

/// Remove `<!-- ... -->` spans, including those crossing line boundaries
#[must_use]
pub fn strip_markup_comments(text: &str) -> String {
    MARKUP_COMMENT.replace_all(text, "").into_owned()
}

/// Full clean pass for markup files: block comments, markup comments, then
/// line comments and the blank lines the first two passes leave behind
#[must_use]
pub fn clean_markup(text: &str) -> String {
    strip_line_comments(&strip_markup_comments(&strip_block_comments(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_strip_removes_comments_and_blanks_only() {
        let input = "body {\n  // layout\n  color: red;\n\n   \n}\n";
        assert_eq!(strip_line_comments(input), "body {\n  color: red;\n}\n");
    }

    #[test]
    fn line_strip_keeps_protocol_relative_urls() {
        let input = "a: url(//cdn.example.com/x.png);\n";
        assert_eq!(strip_line_comments(input), input);
    }

    #[test]
    fn block_strip_spans_lines() {
        let input = "a /* one\ntwo */ b";
        assert_eq!(strip_block_comments(input), "a  b");
    }

    #[test]
    fn block_strip_is_non_greedy() {
        let input = "/* a */ keep /* b */";
        assert_eq!(strip_block_comments(input), " keep ");
    }

    #[test]
    fn markup_strip_removes_html_comments() {
        let input = "<div>\n<!-- header\nstart -->\n<p>hi</p>\n<!-- end -->\n</div>\n";
        assert_eq!(clean_markup(input), "<div>\n<p>hi</p>\n</div>\n");
    }
}
