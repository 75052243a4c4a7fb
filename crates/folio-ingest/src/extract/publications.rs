//! Publication extraction
//!
//! Venue detection mixes quoted titles and `in/в <Capitalized Phrase>` in a
//! single alternation. It is best effort and can misfire on titles that
//! embed quotes.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::year_or_current;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicationEntry {
    pub title: String,
    pub journal: String,
    pub year: i32,
    pub citations: u32,
    pub impact: f64,
}

fn venue() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"["«“]([^"»”\n]{3,})["»”]|(?:\bin|\bв)\s+(\p{Lu}[\p{L}\p{N}&.\-]*(?:\s+(?:of|on|and|for|&|\p{Lu}[\p{L}\p{N}&.\-]*))*)"#,
        )
        .expect("valid venue regex")
    })
}

fn citations_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:cited\s+by|citations?:?|цитирований:?)\s*(\d+)")
            .expect("valid citations regex")
    })
}

fn impact_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:\bIF|impact\s+factor)\s*[:=]?\s*(\d+(?:[.,]\d+)?)")
            .expect("valid impact regex")
    })
}

/// Venue from a quoted title or an `in <Venue>` phrase, or `""`.
pub fn detect_journal(text: &str) -> String {
    venue()
        .captures(text)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().trim().trim_end_matches('.').to_string())
        .unwrap_or_default()
}

pub fn parse_publication(item: &str) -> PublicationEntry {
    let item = item.trim();
    let citations = citations_re()
        .captures(item)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0);
    let impact = impact_re()
        .captures(item)
        .and_then(|caps| caps[1].replace(',', ".").parse::<f64>().ok())
        .filter(|impact| impact.is_finite())
        .unwrap_or(0.0);

    PublicationEntry {
        title: item.to_string(),
        journal: detect_journal(item),
        year: year_or_current(item),
        citations,
        impact,
    }
}

/// Parse publication items, capped at `max_publications`.
pub fn extract_publications(items: &[String], max_publications: usize) -> Vec<PublicationEntry> {
    items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .take(max_publications)
        .map(|item| parse_publication(item))
        .collect()
}
