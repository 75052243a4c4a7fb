//! Award extraction

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::{squash_whitespace, year_or_current};
use crate::keywords::AWARD_CATEGORY_TABLE;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwardEntry {
    pub title: String,
    pub org: String,
    pub year: i32,
    pub category: String,
    pub description: String,
}

fn split_point() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" [—–-] |: ").expect("valid award split regex"))
}

fn bare_year() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\(?(?:19|20)\d{2}\)?\.?$").expect("valid bare year regex"))
}

/// Splits on the first standalone dash or `": "`.
fn split_once_separator(text: &str) -> Option<(&str, &str)> {
    split_point()
        .find(text)
        .map(|m| (text[..m.start()].trim(), text[m.end()..].trim()))
}

pub fn parse_award(item: &str) -> AwardEntry {
    let item = squash_whitespace(item);

    let (title, description) = match split_once_separator(&item) {
        Some((left, right)) if !left.is_empty() => (left.to_string(), right.to_string()),
        _ => (item.clone(), item.clone()),
    };

    let org = if title == description {
        ""
    } else {
        let first = split_once_separator(&description)
            .map(|(first, _)| first)
            .unwrap_or(description.as_str());
        if bare_year().is_match(first) || first.split_whitespace().count() > 6 {
            ""
        } else {
            first
        }
    };

    AwardEntry {
        org: org.to_string(),
        year: year_or_current(&item),
        category: AWARD_CATEGORY_TABLE.classify(&item).to_string(),
        title,
        description,
    }
}

/// Parse award items, capped at `max_awards`.
pub fn extract_awards(items: &[String], max_awards: usize) -> Vec<AwardEntry> {
    items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .take(max_awards)
        .map(|item| parse_award(item))
        .collect()
}
