//! Experience extraction
//!
//! Each entry is matched against an ordered list of header matchers:
//! 1. `Title — Company (Period)`
//! 2. `Company — Title (Period)`
//!
//! The first matcher that succeeds wins. If none does, the entry falls back
//! to line splitting: the first two sentences/lines become title and company
//! and the period is located anywhere in the entry.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::{find_period, split_on_markers, squash_whitespace, trim_separators};
use crate::keywords::looks_like_title;
use crate::normalize::is_marker_line;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
}

/// A recognised entry header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub title: String,
    pub company: String,
    pub period: String,
    /// Byte offset in the entry where the header ends.
    pub end: usize,
}

pub type HeaderMatcher = fn(&str) -> Option<HeaderMatch>;

/// Header matchers, tried in order.
pub const HEADER_MATCHERS: &[HeaderMatcher] = &[match_title_company, match_company_title];

fn header_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^\s*(?P<left>[^\n(]+?)\s+[—–-]\s+(?P<right>[^\n(]+?)\s*\((?P<period>[^)\n]*)\)",
        )
        .expect("valid experience header regex")
    })
}

fn sentence_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]\s+|\n").expect("valid sentence break regex"))
}

struct Shape<'a> {
    left: &'a str,
    right: &'a str,
    period: &'a str,
    end: usize,
}

fn shape(text: &str) -> Option<Shape<'_>> {
    let caps = header_shape().captures(text)?;
    let whole = caps.get(0)?;
    Some(Shape {
        left: caps.name("left")?.as_str().trim(),
        right: caps.name("right")?.as_str().trim(),
        period: caps.name("period")?.as_str().trim(),
        end: whole.end(),
    })
}

/// `Title — Company (Period)`; declines when only the right side reads like a job title.
pub fn match_title_company(text: &str) -> Option<HeaderMatch> {
    let s = shape(text)?;
    if looks_like_title(s.right) && !looks_like_title(s.left) {
        return None;
    }
    Some(HeaderMatch {
        title: s.left.to_string(),
        company: s.right.to_string(),
        period: s.period.to_string(),
        end: s.end,
    })
}

/// `Company — Title (Period)`.
pub fn match_company_title(text: &str) -> Option<HeaderMatch> {
    let s = shape(text)?;
    if !looks_like_title(s.right) {
        return None;
    }
    Some(HeaderMatch {
        title: s.right.to_string(),
        company: s.left.to_string(),
        period: s.period.to_string(),
        end: s.end,
    })
}

/// Returns `true` if a line opens a new experience entry.
pub fn is_entry_header(line: &str) -> bool {
    header_shape().is_match(line)
}

/// Parse one experience entry.
pub fn parse_experience(entry: &str, max_achievements: usize) -> ExperienceEntry {
    let entry = entry.trim();

    if let Some(header) = HEADER_MATCHERS.iter().find_map(|matcher| matcher(entry)) {
        let tail = &entry[header.end..];
        let mut parts = split_on_markers(tail).into_iter();
        let description = parts
            .next()
            .map(|d| squash_whitespace(trim_separators(d)))
            .unwrap_or_default();
        let achievements = parts
            .map(|a| squash_whitespace(a.trim()))
            .filter(|a| !a.is_empty())
            .take(max_achievements)
            .collect();

        return ExperienceEntry {
            title: header.title,
            company: header.company,
            period: header.period,
            description,
            achievements,
        };
    }

    fallback_experience(entry, max_achievements)
}

fn fallback_experience(entry: &str, max_achievements: usize) -> ExperienceEntry {
    let period_span = find_period(entry);
    let period = period_span
        .map(|(s, e)| entry[s..e].to_string())
        .unwrap_or_default();

    let mut plain: Vec<String> = Vec::new();
    let mut achievements: Vec<String> = Vec::new();
    for segment in sentence_break().split(entry) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        if is_marker_line(segment) {
            achievements.extend(
                split_on_markers(segment)
                    .into_iter()
                    .map(|a| squash_whitespace(a.trim()))
                    .filter(|a| !a.is_empty()),
            );
            continue;
        }
        let cleaned = if period.is_empty() {
            segment.to_string()
        } else {
            segment.replace(&period, " ")
        };
        let cleaned = squash_whitespace(trim_separators(cleaned.trim_matches(&['(', ')', ' '][..])));
        if !cleaned.is_empty() {
            plain.push(cleaned);
        }
    }

    let mut plain = plain.into_iter();
    let title = plain.next().unwrap_or_default();
    let company = plain.next().unwrap_or_default();
    let description = plain.collect::<Vec<_>>().join(" ");
    achievements.truncate(max_achievements);

    ExperienceEntry {
        title,
        company,
        period,
        description,
        achievements,
    }
}

/// Parse every entry, keeping those that produced at least a title.
pub fn extract_experience(entries: &[String], max_achievements: usize) -> Vec<ExperienceEntry> {
    entries
        .iter()
        .map(|entry| parse_experience(entry, max_achievements))
        .filter(|e| !e.title.is_empty())
        .collect()
}
