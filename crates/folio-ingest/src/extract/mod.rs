//! Field extractors
//!
//! Each extractor turns a section's items (or its raw text) into typed
//! records. Extractors are total: a missing pattern degrades to a fallback
//! value, never to an error.

use chrono::Datelike;
use regex::Regex;
use std::sync::OnceLock;

pub mod awards;
pub mod contacts;
pub mod education;
pub mod experience;
pub mod languages;
pub mod projects;
pub mod publications;
pub mod skills;

pub use awards::{extract_awards, parse_award, AwardEntry};
pub use contacts::{extract_contacts, extract_socials};
pub use education::{extract_education, EducationEntry};
pub use experience::{extract_experience, parse_experience, ExperienceEntry};
pub use languages::extract_languages;
pub use projects::{extract_projects, ProjectEntry};
pub use publications::{extract_publications, PublicationEntry};
pub use skills::extract_skills;

fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(20\d{2})\b").expect("valid year regex"))
}

fn period_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b((?:19|20)\d{2})\s*-+\s*((?:19|20)\d{2}|present|current|now|н\.\s?в\.?|настоящее\s+время)",
        )
        .expect("valid period regex")
    })
}

fn present_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\bpresent\b|н\.\s?в\.?|настоящ").expect("valid present regex")
    })
}

fn marker_split_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|\s)-\s+").expect("valid marker split regex"))
}

/// First `20xx` year in `text`.
pub fn find_year(text: &str) -> Option<i32> {
    year_re()
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// First `20xx` year in `text`, or the current calendar year.
pub fn year_or_current(text: &str) -> i32 {
    find_year(text).unwrap_or_else(current_year)
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Locates a `YYYY–YYYY` / `YYYY–Present` / `YYYY–н.в.` period.
///
/// Dashes are matched after normalization, where every dash glyph has
/// already become `-`; raw en and em dashes are accepted as well.
pub fn find_period(text: &str) -> Option<(usize, usize)> {
    let unified = unify_dashes(text);
    period_re().find(&unified).map(|m| (m.start(), m.end()))
}

/// Returns `true` if `period` denotes an ongoing engagement.
pub fn is_present(period: &str) -> bool {
    present_re().is_match(period)
}

/// Splits text on `"- "` markers at line start or after whitespace.
/// The first element is whatever precedes the first marker (possibly empty).
pub fn split_on_markers(text: &str) -> Vec<&str> {
    marker_split_re().split(text).collect()
}

/// Truncates to at most `max` characters.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Collapses internal whitespace (including newlines) to single spaces.
pub fn squash_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trims whitespace and separator punctuation from both ends.
pub fn trim_separators(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '-' | '–' | '—' | ',' | ';' | '|'))
}

// En/em dashes are 3 bytes in UTF-8; `-` plus two spaces keeps every byte
// offset of the unified text valid in the original.
fn unify_dashes(text: &str) -> String {
    text.replace(&['–', '—'][..], "-  ")
}
