//! Text normalization
//!
//! Canonicalizes raw extracted text before section splitting:
//! - `\r\n` and lone `\r` become `\n`
//! - bullet and dash glyphs (`•`, `–`, `—`) become the `"- "` marker
//! - runs of horizontal whitespace collapse to one space
//! - whitespace hugging a newline is dropped, so whitespace-only lines are blank
//! - three or more consecutive newlines collapse to exactly two
//!
//! Normalization is total and idempotent.

use regex::Regex;
use std::sync::OnceLock;

/// Canonical bullet marker that every bullet glyph is rewritten to.
pub const BULLET_MARKER: &str = "- ";

const BULLET_GLYPHS: [char; 3] = ['•', '–', '—'];

fn horizontal_ws() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\S\n]+").expect("valid horizontal whitespace regex"))
}

fn newline_padding() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" ?\n ?").expect("valid newline padding regex"))
}

fn blank_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").expect("valid blank run regex"))
}

/// Normalize arbitrary text. Never fails; the empty string maps to itself.
pub fn normalize_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let unified = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut marked = String::with_capacity(unified.len());
    for c in unified.chars() {
        if BULLET_GLYPHS.contains(&c) {
            marked.push_str(BULLET_MARKER);
        } else {
            marked.push(c);
        }
    }

    let collapsed = horizontal_ws().replace_all(&marked, " ");
    let unpadded = newline_padding().replace_all(&collapsed, "\n");
    blank_runs().replace_all(&unpadded, "\n\n").into_owned()
}

/// Returns `true` when a (normalized) line starts with the bullet marker.
pub fn is_marker_line(line: &str) -> bool {
    line.trim_start().starts_with(BULLET_MARKER)
}

/// Strips the bullet marker from a line, if present.
pub fn strip_marker(line: &str) -> &str {
    let trimmed = line.trim_start();
    trimmed
        .strip_prefix(BULLET_MARKER)
        .map(str::trim)
        .unwrap_or_else(|| trimmed.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(normalize_text("a\r\nb\rc"), "a\nb\nc");
        assert!(!normalize_text("x\r\n\r\n\r\ny").contains('\r'));
    }

    #[test]
    fn test_bullets_become_markers() {
        assert_eq!(normalize_text("• Rust\n– Go\n— Zig"), "- Rust\n- Go\n- Zig");
    }

    #[test]
    fn test_whitespace_and_blank_runs() {
        assert_eq!(normalize_text("a \t  b"), "a b");
        assert_eq!(normalize_text("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize_text("a\n  \n \t \n\nb"), "a\n\nb");
    }

    #[test]
    fn test_idempotent_on_bullet_spacing() {
        let once = normalize_text("•  item\n\n\n\n•\titem two ");
        assert_eq!(normalize_text(&once), once);
    }

    #[test]
    fn test_marker_helpers() {
        assert!(is_marker_line("- Reduced latency"));
        assert!(!is_marker_line("-Reduced latency"));
        assert_eq!(strip_marker("- Reduced latency "), "Reduced latency");
        assert_eq!(strip_marker("plain"), "plain");
    }
}
