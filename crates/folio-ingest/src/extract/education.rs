//! Education extraction

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::{find_period, squash_whitespace, trim_separators};
use crate::keywords::looks_like_degree;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub period: String,
}

fn lone_year() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("valid lone year regex"))
}

fn separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s[—–-]\s|,").expect("valid education separator regex"))
}

/// Cuts the period (a year range, else a lone year) out of `text`.
fn take_period(text: &str) -> (String, String) {
    let span = find_period(text).or_else(|| lone_year().find(text).map(|m| (m.start(), m.end())));
    match span {
        Some((start, end)) => (
            text[start..end].to_string(),
            format!("{} {}", &text[..start], &text[end..]),
        ),
        None => (String::new(), text.to_string()),
    }
}

fn clean(part: &str) -> String {
    squash_whitespace(trim_separators(part).trim_matches(&['(', ')', ' '][..]))
}

pub fn parse_education(item: &str) -> EducationEntry {
    let (period, rest) = take_period(&squash_whitespace(item));

    let (mut institution, mut degree) = match separator().find(&rest) {
        Some(m) => (clean(&rest[..m.start()]), clean(&rest[m.end()..])),
        None => (clean(&rest), String::new()),
    };
    if looks_like_degree(&institution) && !looks_like_degree(&degree) {
        std::mem::swap(&mut institution, &mut degree);
    }

    EducationEntry {
        institution,
        degree,
        period,
    }
}

/// Parse education items, capped at `max_education`.
pub fn extract_education(items: &[String], max_education: usize) -> Vec<EducationEntry> {
    items
        .iter()
        .map(|item| parse_education(item))
        .filter(|entry| !entry.institution.is_empty() || !entry.degree.is_empty())
        .take(max_education)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_institution_first() {
        let e = parse_education("Nazarbayev University - BSc Computer Science (2014–2018)");
        assert_eq!(e.institution, "Nazarbayev University");
        assert_eq!(e.degree, "BSc Computer Science");
        assert_eq!(e.period, "2014–2018");
    }

    #[test]
    fn test_degree_first_is_swapped() {
        let e = parse_education("PhD in Physics, MIT, 2021");
        assert_eq!(e.institution, "MIT");
        assert_eq!(e.degree, "PhD in Physics");
        assert_eq!(e.period, "2021");
    }

    #[test]
    fn test_no_separator() {
        let e = parse_education("Stanford Online");
        assert_eq!(e.institution, "Stanford Online");
        assert_eq!(e.degree, "");
        assert_eq!(e.period, "");
    }

    #[test]
    fn test_empty_items_skipped_and_capped() {
        let items = vec!["".to_string(), "2020".to_string(), "KBTU, MSc".to_string()];
        let entries = extract_education(&items, 10);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].institution, "KBTU");

        let many: Vec<String> = (0..15).map(|i| format!("School {i}")).collect();
        assert_eq!(extract_education(&many, 10).len(), 10);
    }
}
