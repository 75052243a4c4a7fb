//! Section splitting
//!
//! Scans normalized text line by line and buckets lines under the most
//! recently seen section header. Headers are recognised through a fixed
//! synonym table (English, Russian and Kazakh variants) or a lightweight
//! markdown heading (`#`, `##`, `###`).
//!
//! Ambiguous headers resolve to whichever key is declared first in
//! [`SECTION_SYNONYMS`]; this is a compatibility policy rather than a
//! semantic rule.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use crate::normalize::normalize_text;

/// The fixed section-key enumeration, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Publications,
    Awards,
    Languages,
    Contacts,
    Socials,
    Patents,
    Speaking,
    Media,
}

impl SectionKey {
    pub const ALL: [SectionKey; 13] = [
        SectionKey::About,
        SectionKey::Skills,
        SectionKey::Experience,
        SectionKey::Projects,
        SectionKey::Education,
        SectionKey::Publications,
        SectionKey::Awards,
        SectionKey::Languages,
        SectionKey::Contacts,
        SectionKey::Socials,
        SectionKey::Patents,
        SectionKey::Speaking,
        SectionKey::Media,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::About => "about",
            SectionKey::Skills => "skills",
            SectionKey::Experience => "experience",
            SectionKey::Projects => "projects",
            SectionKey::Education => "education",
            SectionKey::Publications => "publications",
            SectionKey::Awards => "awards",
            SectionKey::Languages => "languages",
            SectionKey::Contacts => "contacts",
            SectionKey::Socials => "socials",
            SectionKey::Patents => "patents",
            SectionKey::Speaking => "speaking",
            SectionKey::Media => "media",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header synonyms per key, already uppercased. Lookup walks this table in
/// order and the first matching synonym wins.
pub const SECTION_SYNONYMS: &[(SectionKey, &[&str])] = &[
    (
        SectionKey::About,
        &["ABOUT", "ABOUT ME", "SUMMARY", "PROFILE", "BIO", "О СЕБЕ", "ОБО МНЕ", "ӨЗІМ ТУРАЛЫ"],
    ),
    (
        SectionKey::Skills,
        &["SKILLS", "TECHNICAL SKILLS", "CORE SKILLS", "COMPETENCIES", "НАВЫКИ", "КОМПЕТЕНЦИИ", "ДАҒДЫЛАР"],
    ),
    (
        SectionKey::Experience,
        &[
            "EXPERIENCE",
            "WORK EXPERIENCE",
            "CAREER",
            "EMPLOYMENT",
            "ОПЫТ",
            "ОПЫТ РАБОТЫ",
            "КАРЬЕРА",
            "ЖҰМЫС ТӘЖІРИБЕСІ",
        ],
    ),
    (SectionKey::Projects, &["PROJECTS", "PORTFOLIO", "ПРОЕКТЫ", "ЖОБАЛАР"]),
    (SectionKey::Education, &["EDUCATION", "ОБРАЗОВАНИЕ", "БІЛІМ"]),
    (
        SectionKey::Publications,
        &["PUBLICATIONS", "PAPERS", "RESEARCH PAPERS", "ПУБЛИКАЦИИ", "НАУЧНЫЕ ПУБЛИКАЦИИ", "ЖАРИЯЛАНЫМДАР"],
    ),
    (
        SectionKey::Awards,
        &["AWARDS", "HONORS", "ACHIEVEMENTS", "НАГРАДЫ", "ДОСТИЖЕНИЯ", "МАРАПАТТАР"],
    ),
    (SectionKey::Languages, &["LANGUAGES", "ЯЗЫКИ", "ТІЛДЕР"]),
    (
        SectionKey::Contacts,
        &["CONTACTS", "CONTACT", "CONTACT INFORMATION", "КОНТАКТЫ", "БАЙЛАНЫС"],
    ),
    (
        SectionKey::Socials,
        &["SOCIALS", "SOCIAL", "SOCIAL MEDIA", "LINKS", "СОЦСЕТИ", "ССЫЛКИ"],
    ),
    (SectionKey::Patents, &["PATENTS", "ПАТЕНТЫ", "ПАТЕНТТЕР"]),
    (
        SectionKey::Speaking,
        &["SPEAKING", "TALKS", "CONFERENCES", "ВЫСТУПЛЕНИЯ", "КОНФЕРЕНЦИИ"],
    ),
    (SectionKey::Media, &["MEDIA", "PRESS", "IN THE MEDIA", "СМИ", "МЕДИА", "ПРЕССА"]),
];

/// Raw text per section. Only non-empty buckets are stored, except that a
/// document without any header always carries an `about` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionMap {
    sections: BTreeMap<SectionKey, String>,
}

impl SectionMap {
    /// Section text, or `""` when the section is absent.
    pub fn get(&self, key: SectionKey) -> &str {
        self.sections.get(&key).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, key: SectionKey) -> bool {
        self.sections.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = SectionKey> + '_ {
        self.sections.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &str)> + '_ {
        self.sections.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn insert(&mut self, key: SectionKey, text: impl Into<String>) {
        self.sections.insert(key, text.into());
    }
}

/// How a line is interpreted by the splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A header that resolves to a section key.
    Header(SectionKey),
    /// A markdown heading whose text names no known section.
    UnknownHeading,
    /// Regular content.
    Content,
}

fn markdown_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#{1,3}[ \t]+(\S.*)$").expect("valid markdown heading regex"))
}

/// Resolves a header candidate against the synonym table.
///
/// The candidate is stripped, uppercased and colon-trimmed; it matches a
/// synonym when it equals it or starts with it followed by a space.
pub fn resolve_header(line: &str) -> Option<SectionKey> {
    let upper = line.trim().to_uppercase();
    let candidate = upper.trim_end_matches(':').trim_end();
    if candidate.is_empty() {
        return None;
    }

    for (key, synonyms) in SECTION_SYNONYMS {
        for synonym in *synonyms {
            if candidate == *synonym {
                return Some(*key);
            }
            if let Some(rest) = candidate.strip_prefix(synonym) {
                if rest.starts_with(' ') {
                    return Some(*key);
                }
            }
        }
    }
    None
}

/// Classifies one line.
pub fn classify_line(line: &str) -> LineKind {
    if let Some(key) = resolve_header(line) {
        return LineKind::Header(key);
    }
    if let Some(caps) = markdown_heading().captures(line.trim()) {
        return match resolve_header(&caps[1]) {
            Some(key) => LineKind::Header(key),
            None => LineKind::UnknownHeading,
        };
    }
    LineKind::Content
}

/// Split normalized text into sections.
pub fn split_sections(text: &str) -> SectionMap {
    let mut buckets: BTreeMap<SectionKey, Vec<&str>> = BTreeMap::new();
    let mut current: Option<SectionKey> = None;
    let mut saw_header = false;

    for line in text.lines() {
        match classify_line(line) {
            LineKind::Header(key) => {
                saw_header = true;
                current = Some(key);
            }
            LineKind::UnknownHeading => {
                saw_header = true;
                current = Some(SectionKey::About);
            }
            LineKind::Content => {
                buckets
                    .entry(current.unwrap_or(SectionKey::About))
                    .or_default()
                    .push(line);
            }
        }
    }

    let mut map = SectionMap::default();
    for (key, lines) in buckets {
        let joined = normalize_text(&lines.join("\n"));
        let text = joined.trim();
        if !text.is_empty() {
            map.insert(key, text);
        }
    }

    if !saw_header && !map.contains(SectionKey::About) {
        map.insert(SectionKey::About, "");
    }

    tracing::debug!(
        sections = map.len(),
        keys = ?map.keys().map(SectionKey::as_str).collect::<Vec<_>>(),
        "split document into sections"
    );
    map
}
