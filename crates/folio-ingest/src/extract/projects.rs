//! Project extraction

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::{squash_whitespace, trim_separators};
use crate::items::dedup_case_insensitive;
use crate::keywords::{ProjectStatus, PROJECT_CATEGORY_TABLE, PROJECT_STATUS_TABLE};

/// Card colors, cycled by project index.
pub const PROJECT_PALETTE: [&str; 6] = [
    "#667eea", "#764ba2", "#3498db", "#1e3d59", "#2c3e50", "#f5a623",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub category: String,
    pub status: ProjectStatus,
    pub description: String,
    pub tech: Vec<String>,
    pub metrics: BTreeMap<String, String>,
    pub color: String,
}

fn name_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r":|\s[—–-]\s|—").expect("valid project separator regex"))
}

fn hashtag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|\s)#([\p{L}\p{N}_+.\-]+)").expect("valid hashtag regex"))
}

fn bracketed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]\n]+)\]").expect("valid bracket regex"))
}

fn metric() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(\d+(?:[.,]\d+)?\s?[kmкм]?\+?)\s+(users|customers|clients|downloads|installs|stars|companies|students|пользователей|клиентов|скачиваний|компаний)",
        )
        .expect("valid metric regex")
    })
}

/// `#tag` tokens, or `[bracketed]` lists when no tag is present.
pub fn extract_tech(text: &str, max_tech: usize) -> Vec<String> {
    let tags: Vec<String> = hashtag()
        .captures_iter(text)
        .map(|caps| caps[1].trim_end_matches('.').to_string())
        .filter(|t| !t.is_empty())
        .collect();

    let tokens = if tags.is_empty() {
        bracketed()
            .captures_iter(text)
            .flat_map(|caps| {
                caps[1]
                    .split(&[',', ';', '/'][..])
                    .map(|t| t.trim().to_string())
                    .collect::<Vec<_>>()
            })
            .filter(|t| !t.is_empty())
            .collect()
    } else {
        tags
    };

    let mut tech = dedup_case_insensitive(tokens);
    tech.truncate(max_tech);
    tech
}

/// Count-style metrics such as `10k users` → `{"users": "10k"}`. First hit per noun wins.
pub fn extract_metrics(text: &str) -> BTreeMap<String, String> {
    let mut metrics = BTreeMap::new();
    for caps in metric().captures_iter(text) {
        metrics
            .entry(caps[2].to_lowercase())
            .or_insert_with(|| caps[1].replace(' ', ""));
    }
    metrics
}

/// Parse one project item.
pub fn parse_project(item: &str, index: usize, max_tech: usize) -> ProjectEntry {
    let item = item.trim();

    let (name, description) = match name_separator().find(item) {
        Some(m) if !item[..m.start()].trim().is_empty() => (
            item[..m.start()].trim().to_string(),
            squash_whitespace(trim_separators(&item[m.end()..])),
        ),
        _ => match item.split_once('\n') {
            Some((first, rest)) => (first.trim().to_string(), squash_whitespace(rest)),
            None => (item.to_string(), String::new()),
        },
    };

    ProjectEntry {
        name,
        category: PROJECT_CATEGORY_TABLE.classify(item).to_string(),
        status: PROJECT_STATUS_TABLE.classify(item),
        description,
        tech: extract_tech(item, max_tech),
        metrics: extract_metrics(item),
        color: PROJECT_PALETTE[index % PROJECT_PALETTE.len()].to_string(),
    }
}

/// Parse project items, capped at `max_projects`.
pub fn extract_projects(items: &[String], max_projects: usize, max_tech: usize) -> Vec<ProjectEntry> {
    items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .take(max_projects)
        .enumerate()
        .map(|(i, item)| parse_project(item, i, max_tech))
        .collect()
}
