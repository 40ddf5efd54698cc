//! Declaration reordering inside stylesheet rules
//!
//! Brace-aware, line-based scan: single-line `property: value;` declarations
//! inside a block are stable-sorted by a fixed priority table and written
//! back into the slots the block's declarations occupied. Selectors, nested
//! blocks, at-rules, and multi-line values never move, so the pass is safe on
//! hand-formatted sass and idempotent by construction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed priority table, box-model-first. Unlisted properties sort after all
/// named ones, preserving their relative order.
pub const PROPERTY_ORDER: &[&str] = &[
    "content",
    "display",
    "position",
    "top",
    "right",
    "bottom",
    "left",
    "z-index",
    "flex",
    "flex-direction",
    "flex-wrap",
    "flex-grow",
    "flex-shrink",
    "flex-basis",
    "justify-content",
    "align-items",
    "align-content",
    "align-self",
    "order",
    "gap",
    "float",
    "clear",
    "overflow",
    "overflow-x",
    "overflow-y",
    "width",
    "min-width",
    "max-width",
    "height",
    "min-height",
    "max-height",
    "box-sizing",
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "border",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "border-radius",
    "background",
    "background-color",
    "background-image",
    "background-repeat",
    "background-position",
    "background-size",
    "color",
    "font",
    "font-family",
    "font-size",
    "font-weight",
    "font-style",
    "line-height",
    "letter-spacing",
    "text-align",
    "text-decoration",
    "text-transform",
    "white-space",
    "vertical-align",
    "list-style",
    "box-shadow",
    "opacity",
    "visibility",
    "transform",
    "transition",
    "animation",
    "cursor",
    "pointer-events",
];

static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z-][A-Za-z0-9-]*)\s*:\s*\S.*;\s*$")
        .expect("hard-coded pattern is valid")
});

/// Priority of a property name; vendor prefixes sort by the base property.
fn priority(property: &str) -> usize {
    let base = property
        .strip_prefix('-')
        .and_then(|rest| rest.split_once('-'))
        .map_or(property, |(_, base)| base);
    PROPERTY_ORDER
        .iter()
        .position(|p| p.eq_ignore_ascii_case(base))
        .unwrap_or(PROPERTY_ORDER.len())
}

/// Property name of a line, when the line is a reorderable declaration
fn declaration_property(line: &str) -> Option<&str> {
    if line.contains('{') || line.contains('}') {
        return None;
    }
    DECLARATION
        .captures(line)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
        .and_then(|name| {
            let start = line.trim_start();
            // sass variables and interpolations are not declarations
            if start.starts_with('$') || start.starts_with('@') || start.starts_with('#') {
                None
            } else {
                Some(name)
            }
        })
}

/// Reorder the declarations of every rule in `text` by [`PROPERTY_ORDER`].
///
/// Sorted declarations land in the line slots the block's declarations
/// occupied; everything else stays byte-identical. Applying the transform to
/// its own output is a no-op.
#[must_use]
pub fn reorder(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let mut out: Vec<&str> = lines.clone();

    // Stack of declaration line-indexes per open block
    let mut open_blocks: Vec<Vec<usize>> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if !line.contains('{') && !line.contains('}') {
            if let Some(block) = open_blocks.last_mut() {
                if declaration_property(line).is_some() {
                    block.push(index);
                }
            }
            continue;
        }

        // Braces are tracked in order of appearance, so a line that closes
        // one rule and opens the next keeps the two blocks separate, and a
        // line opening several blocks pushes one frame per brace.
        for c in line.chars() {
            match c {
                '{' => open_blocks.push(Vec::new()),
                '}' => {
                    if let Some(slots) = open_blocks.pop() {
                        reorder_block(&lines, &slots, &mut out);
                    }
                }
                _ => {}
            }
        }
    }

    let mut result = out.join("\n");
    if text.ends_with('\n') {
        result.push('\n');
    }
    result
}

/// Stable-sort one block's declarations into their original line slots
fn reorder_block<'a>(lines: &[&'a str], slots: &[usize], out: &mut [&'a str]) {
    if slots.len() < 2 {
        return;
    }
    let mut declarations: Vec<&str> = slots.iter().map(|&i| lines[i]).collect();
    declarations.sort_by_key(|line| declaration_property(line).map_or(usize::MAX, priority));
    for (&slot, declaration) in slots.iter().zip(declarations) {
        out[slot] = declaration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_named_properties_by_table() {
        let input = ".box {\n  color: red;\n  width: 10px;\n  display: flex;\n}\n";
        let expected = ".box {\n  display: flex;\n  width: 10px;\n  color: red;\n}\n";
        assert_eq!(reorder(input), expected);
    }

    #[test]
    fn unlisted_properties_sort_after_named_in_original_order() {
        let input = ".a {\n  scroll-snap-align: start;\n  will-change: opacity;\n  color: red;\n}\n";
        let expected = ".a {\n  color: red;\n  scroll-snap-align: start;\n  will-change: opacity;\n}\n";
        assert_eq!(reorder(input), expected);
    }

    #[test]
    fn reorder_is_idempotent() {
        let input = ".box {\n  margin: 0;\n  color: red;\n  position: absolute;\n  top: 0;\n}\n";
        let once = reorder(input);
        assert_eq!(reorder(&once), once);
    }

    #[test]
    fn nested_blocks_stay_in_place() {
        let input = "\
.card {
  width: 100%;
  display: block;
  &:hover {
    color: blue;
    display: inline;
  }
  margin: 0;
}
";
        let output = reorder(input);
        // Outer declarations sort around the nested rule; the rule itself
        // and its own (sorted) declarations keep their lines.
        let expected = "\
.card {
  display: block;
  width: 100%;
  &:hover {
    display: inline;
    color: blue;
  }
  margin: 0;
}
";
        assert_eq!(output, expected);
    }

    #[test]
    fn sass_variables_and_at_rules_are_untouched() {
        let input = "$gap: 8px;\n.a {\n  @include mq(sp) {\n    color: red;\n  }\n  width: 10px;\n}\n";
        assert_eq!(reorder(input), input);
    }

    #[test]
    fn close_and_open_on_one_line_keeps_rules_separate() {
        // Each rule has one declaration; nothing may cross the boundary
        let input = ".a {\n  color: red;\n} .b {\n  width: 1px;\n}\n";
        assert_eq!(reorder(input), input);

        // Sorting happens within each rule, never across it
        let input = ".a {\n  width: 1px;\n  display: block;\n} .b {\n  color: red;\n  content: '';\n}\n";
        let expected = ".a {\n  display: block;\n  width: 1px;\n} .b {\n  content: '';\n  color: red;\n}\n";
        assert_eq!(reorder(input), expected);
    }

    #[test]
    fn multiple_opens_on_one_line_track_depth() {
        let input = "@media print { .a {\n  width: 1px;\n  display: block;\n} }\n";
        let expected = "@media print { .a {\n  display: block;\n  width: 1px;\n} }\n";
        assert_eq!(reorder(input), expected);
    }

    #[test]
    fn vendor_prefixes_sort_with_their_base_property() {
        let input = ".a {\n  color: red;\n  -webkit-transform: none;\n}\n";
        let expected = ".a {\n  color: red;\n  -webkit-transform: none;\n}\n";
        assert_eq!(reorder(input), expected);
    }
}
