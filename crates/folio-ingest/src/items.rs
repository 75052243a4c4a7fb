//! Item splitting
//!
//! Breaks a section's text into discrete items (bullet points or
//! paragraphs). Items are de-duplicated case-insensitively; the first
//! occurrence wins and order is preserved.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::normalize::{is_marker_line, strip_marker};

fn paragraph_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n[^\S\n]*\n").expect("valid paragraph break regex"))
}

fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    paragraph_break()
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
}

/// Keeps the first occurrence of each item, comparing case-insensitively.
pub fn dedup_case_insensitive<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.to_lowercase()))
        .collect()
}

/// Split a section into items.
///
/// A paragraph with at least one `"- "` line yields one item per marker line
/// (the rest of that paragraph is dropped); any other paragraph is a single
/// item.
pub fn split_items(text: &str) -> Vec<String> {
    let mut items = Vec::new();

    for paragraph in paragraphs(text) {
        let bullets: Vec<&str> = paragraph.lines().filter(|l| is_marker_line(l)).collect();
        if bullets.is_empty() {
            items.push(paragraph.to_string());
        } else {
            items.extend(
                bullets
                    .into_iter()
                    .map(strip_marker)
                    .filter(|b| !b.is_empty())
                    .map(str::to_string),
            );
        }
    }

    dedup_case_insensitive(items)
}

/// Split a section into multi-line entries.
///
/// Unlike [`split_items`], marker lines stay attached to the entry they
/// follow. Inside a paragraph, a line for which `starts_entry` returns `true`
/// opens a new entry once the current one has content.
pub fn split_entries<F>(text: &str, starts_entry: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut entries = Vec::new();

    for paragraph in paragraphs(text) {
        let mut current: Vec<&str> = Vec::new();
        for line in paragraph.lines() {
            if !current.is_empty() && !is_marker_line(line) && starts_entry(line) {
                entries.push(current.join("\n"));
                current.clear();
            }
            current.push(line);
        }
        if !current.is_empty() {
            entries.push(current.join("\n"));
        }
    }

    dedup_case_insensitive(entries)
}
