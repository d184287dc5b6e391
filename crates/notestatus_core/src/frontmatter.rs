//! Line-oriented front-matter transforms.
//!
//! # Responsibility
//! - Enumerate the `key: value` lines of a document's leading metadata block.
//! - Delete, insert and rewrite property lines as pure text transforms.
//!
//! # Invariants
//! - A property line is matched by `^\s*<key>:`, anchored on the colon
//!   right after the literal key. The value side is never validated.
//! - Deletion removes at most the first matching line per key; overlapping
//!   matches collapse through index-set semantics so a line is never removed
//!   twice.
//! - Untouched lines keep their original content and order.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::property::Property;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

const FENCE: &str = "---";

// Key side: at least one char that is not whitespace, `:` or `#` (a leading
// `#` marks a comment line), then anything up to the first colon.
static PROPERTY_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([^:\s#][^:]*):(.*)$").expect("valid property line regex"));

/// Builds the raw-line match for one property key.
///
/// The pattern is the deletion/update contract of this crate: optional
/// leading whitespace, the literal key, a literal colon immediately after.
/// Keys are escaped, so `status` never matches a `status-extra:` line and
/// metacharacters in keys stay literal.
pub fn property_line_pattern(key: &str) -> Regex {
    Regex::new(&format!(r"^(\s*){}:", regex::escape(key)))
        .expect("escaped property key forms a valid regex")
}

/// Enumerates the front-matter properties of a document.
///
/// Recognition rules:
/// - When the first line is a `---` fence, every property line until the
///   closing fence (or end of text when the fence is unterminated) counts;
///   non-property lines inside the block are skipped.
/// - Otherwise the leading run of property lines counts, ending at the first
///   line that is not one.
///
/// Values are the text after the first colon, trimmed. No YAML parsing.
pub fn scan_properties(content: &str) -> Vec<Property> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut properties = Vec::new();

    if starts_fenced(&lines) {
        for line in &lines[1..] {
            if line.trim() == FENCE {
                break;
            }
            if let Some(property) = parse_property_line(line) {
                properties.push(property);
            }
        }
        return properties;
    }

    for line in &lines {
        match parse_property_line(line) {
            Some(property) => properties.push(property),
            None => break,
        }
    }
    properties
}

/// Removes the first line matching each key's pattern and rejoins the rest.
///
/// Keys matching no line are silently ignored. The whole text is scanned, so
/// the match is positional, not block-aware: the first matching raw line per
/// key is the one that goes.
pub fn delete_property_lines(content: &str, keys: &[&str]) -> String {
    let lines: Vec<&str> = content.split('\n').collect();

    let mut doomed = BTreeSet::new();
    for key in keys {
        let pattern = property_line_pattern(key);
        if let Some(index) = lines.iter().position(|line| pattern.is_match(line)) {
            doomed.insert(index);
        }
    }

    lines
        .iter()
        .enumerate()
        .filter(|(index, _)| !doomed.contains(index))
        .map(|(_, line)| *line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Appends a `key: value` line at the end of the front-matter block.
///
/// Placement:
/// - fenced block: right before the closing fence (end of text when the
///   fence is unterminated);
/// - unfenced leading run: right after its last property line;
/// - no front matter at all: a new fenced block is created at the top.
pub fn insert_property_line(content: &str, key: &str, value: &str) -> String {
    let new_line = format_property_line("", key, value);
    let lines: Vec<&str> = content.split('\n').collect();

    if starts_fenced(&lines) {
        let insert_at = lines[1..]
            .iter()
            .position(|line| line.trim() == FENCE)
            .map_or(lines.len(), |offset| offset + 1);
        return splice_line(&lines, insert_at, &new_line);
    }

    let leading = lines
        .iter()
        .take_while(|line| parse_property_line(line).is_some())
        .count();
    if leading > 0 {
        return splice_line(&lines, leading, &new_line);
    }

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 3);
    out.push(FENCE);
    out.push(&new_line);
    out.push(FENCE);
    out.extend(lines.iter().copied());
    out.join("\n")
}

/// Rewrites the first line matching the key's pattern as `key: value`,
/// keeping that line's indentation. Returns `None` when no line matches.
pub fn update_property_line(content: &str, key: &str, value: &str) -> Option<String> {
    let pattern = property_line_pattern(key);
    let lines: Vec<&str> = content.split('\n').collect();
    let index = lines.iter().position(|line| pattern.is_match(line))?;

    let indent = pattern
        .captures(lines[index])
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str());
    let rewritten = format_property_line(indent, key, value);

    let mut out = lines;
    out[index] = &rewritten;
    Some(out.join("\n"))
}

fn starts_fenced(lines: &[&str]) -> bool {
    lines.first().is_some_and(|line| line.trim() == FENCE)
}

fn parse_property_line(line: &str) -> Option<Property> {
    let captures = PROPERTY_LINE_RE.captures(line)?;
    let key = captures.get(1)?.as_str().trim();
    let value = captures.get(2)?.as_str().trim();
    Some(Property::new(key, value))
}

fn format_property_line(indent: &str, key: &str, value: &str) -> String {
    if value.is_empty() {
        format!("{indent}{key}:")
    } else {
        format!("{indent}{key}: {value}")
    }
}

fn splice_line(lines: &[&str], index: usize, line: &str) -> String {
    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 1);
    out.extend_from_slice(&lines[..index]);
    out.push(line);
    out.extend_from_slice(&lines[index..]);
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{
        delete_property_lines, insert_property_line, property_line_pattern, scan_properties,
        update_property_line,
    };
    use crate::model::property::Property;

    #[test]
    fn pattern_requires_colon_immediately_after_key() {
        let pattern = property_line_pattern("status");
        assert!(pattern.is_match("status: todo"));
        assert!(pattern.is_match("   status: todo"));
        assert!(pattern.is_match("status:"));
        assert!(!pattern.is_match("status-extra: todo"));
        assert!(!pattern.is_match("my-status: todo"));
        assert!(!pattern.is_match("status todo"));
    }

    #[test]
    fn pattern_treats_key_metacharacters_as_literals() {
        let pattern = property_line_pattern("a.b");
        assert!(pattern.is_match("a.b: x"));
        assert!(!pattern.is_match("aXb: x"));
    }

    #[test]
    fn scans_fenced_block() {
        let content = "---\nstatus: waiting\nwaiting-since: 2024-01-01\n---\n# Title\nbody";
        let properties = scan_properties(content);
        assert_eq!(
            properties,
            vec![
                Property::new("status", "waiting"),
                Property::new("waiting-since", "2024-01-01"),
            ]
        );
    }

    #[test]
    fn scans_unfenced_leading_run_until_first_non_property_line() {
        let content = "status: todo\nstarted: 2024-02-02\n\nRemember: this line is body text";
        let properties = scan_properties(content);
        assert_eq!(
            properties,
            vec![
                Property::new("status", "todo"),
                Property::new("started", "2024-02-02"),
            ]
        );
    }

    #[test]
    fn scan_tolerates_indentation_and_skips_comments_in_fenced_block() {
        let content = "---\n  status: waiting\n# pinned\nowner: sam\n---\nbody";
        let properties = scan_properties(content);
        assert_eq!(
            properties,
            vec![
                Property::new("status", "waiting"),
                Property::new("owner", "sam"),
            ]
        );
    }

    #[test]
    fn scan_of_unterminated_fence_runs_to_end_of_text() {
        let properties = scan_properties("---\nstatus: todo");
        assert_eq!(properties, vec![Property::new("status", "todo")]);
    }

    #[test]
    fn scan_returns_empty_for_plain_text_and_empty_documents() {
        assert!(scan_properties("").is_empty());
        assert!(scan_properties("# Heading\nparagraph").is_empty());
    }

    #[test]
    fn delete_removes_only_first_matching_line_per_key() {
        let content = "status: a\nbody\nstatus: b";
        assert_eq!(
            delete_property_lines(content, &["status"]),
            "body\nstatus: b"
        );
    }

    #[test]
    fn delete_is_anchored_on_the_colon() {
        let content = "status: todo\nstatus-extra: keep";
        assert_eq!(
            delete_property_lines(content, &["status"]),
            "status-extra: keep"
        );
    }

    #[test]
    fn delete_collapses_duplicate_keys_to_one_removal() {
        let content = "status: a\nrest";
        assert_eq!(
            delete_property_lines(content, &["status", "status"]),
            "rest"
        );
    }

    #[test]
    fn delete_ignores_keys_without_matching_line() {
        let content = "status: todo\nbody";
        assert_eq!(delete_property_lines(content, &["missing"]), content);
    }

    #[test]
    fn delete_preserves_order_of_surviving_lines() {
        let content = "---\na: 1\nb: 2\nc: 3\n---\nbody";
        assert_eq!(
            delete_property_lines(content, &["b"]),
            "---\na: 1\nc: 3\n---\nbody"
        );
    }

    #[test]
    fn insert_appends_inside_fenced_block() {
        let content = "---\nstatus: todo\n---\nbody";
        assert_eq!(
            insert_property_line(content, "started", "2024-02-02"),
            "---\nstatus: todo\nstarted: 2024-02-02\n---\nbody"
        );
    }

    #[test]
    fn insert_extends_unfenced_leading_run() {
        let content = "status: todo\n\nbody";
        assert_eq!(
            insert_property_line(content, "started", "2024-02-02"),
            "status: todo\nstarted: 2024-02-02\n\nbody"
        );
    }

    #[test]
    fn insert_materializes_fenced_block_when_no_front_matter_exists() {
        assert_eq!(
            insert_property_line("# Title\nbody", "status", ""),
            "---\nstatus:\n---\n# Title\nbody"
        );
    }

    #[test]
    fn insert_into_empty_document_creates_block_only() {
        assert_eq!(insert_property_line("", "status", ""), "---\nstatus:\n---\n");
    }

    #[test]
    fn insert_appends_at_end_when_fence_is_unterminated() {
        assert_eq!(
            insert_property_line("---\nstatus: todo", "started", "2024-02-02"),
            "---\nstatus: todo\nstarted: 2024-02-02"
        );
    }

    #[test]
    fn update_rewrites_first_match_and_keeps_indentation() {
        let content = "---\n  status: todo\n---\nstatus: body mention";
        assert_eq!(
            update_property_line(content, "status", "waiting").expect("line exists"),
            "---\n  status: waiting\n---\nstatus: body mention"
        );
    }

    #[test]
    fn update_writes_bare_key_for_empty_value() {
        assert_eq!(
            update_property_line("status: todo\nbody", "status", "").expect("line exists"),
            "status:\nbody"
        );
    }

    #[test]
    fn update_returns_none_when_no_line_matches() {
        assert!(update_property_line("body only", "status", "todo").is_none());
    }
}
