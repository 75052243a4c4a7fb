//! Keyword classification tables
//!
//! Classification policy (skill buckets, project status, project and award
//! categories, job titles) is data: a table of `(category, keywords)` rows
//! consulted by one lookup function. Rows are tried in order; the first row
//! with a hit wins, otherwise the table's fallback applies.
//!
//! Matching works per word of the lowercased text. [`Keyword::Word`] must
//! equal a whole word; [`Keyword::Stem`] must prefix a word (used for
//! inflected Russian/Kazakh forms and for `prod*`-style stems).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Word(&'static str),
    Stem(&'static str),
}

impl Keyword {
    fn hits(&self, word: &str) -> bool {
        match self {
            Keyword::Word(w) => word == *w,
            Keyword::Stem(s) => word.starts_with(s),
        }
    }
}

/// Lowercased words of `text`, split on anything that is not alphanumeric.
fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns `true` if any keyword hits any word of `text`.
pub fn mentions_any(text: &str, keywords: &[Keyword]) -> bool {
    let words = words(text);
    keywords
        .iter()
        .any(|kw| words.iter().any(|w| kw.hits(w)))
}

/// An ordered keyword → category table with a fallback.
pub struct KeywordTable<C: Copy + 'static> {
    pub rows: &'static [(C, &'static [Keyword])],
    pub fallback: C,
}

impl<C: Copy + 'static> KeywordTable<C> {
    pub fn classify(&self, text: &str) -> C {
        let words = words(text);
        self.rows
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| words.iter().any(|w| kw.hits(w))))
            .map(|(category, _)| *category)
            .unwrap_or(self.fallback)
    }
}

// ============================================================================
// Skills
// ============================================================================

/// Skill bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Technology,
    Leadership,
    Research,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Technology,
        SkillCategory::Leadership,
        SkillCategory::Research,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::Technology => "Technology",
            SkillCategory::Leadership => "Leadership",
            SkillCategory::Research => "Research",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const SKILL_TABLE: KeywordTable<SkillCategory> = KeywordTable {
    rows: &[
        (
            SkillCategory::Leadership,
            &[
                Keyword::Word("lead"),
                Keyword::Word("leads"),
                Keyword::Word("team"),
                Keyword::Word("teams"),
                Keyword::Stem("manag"),
                Keyword::Stem("mentor"),
                Keyword::Stem("руковод"),
                Keyword::Stem("лидер"),
            ],
        ),
        (
            SkillCategory::Research,
            &[
                Keyword::Word("research"),
                Keyword::Word("science"),
                Keyword::Word("paper"),
                Keyword::Word("papers"),
                Keyword::Stem("науч"),
                Keyword::Stem("исслед"),
            ],
        ),
    ],
    fallback: SkillCategory::Technology,
};

pub fn classify_skill(token: &str) -> SkillCategory {
    SKILL_TABLE.classify(token)
}

// ============================================================================
// Projects
// ============================================================================

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Production,
    Beta,
    #[default]
    Research,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Production => "Production",
            ProjectStatus::Beta => "Beta",
            ProjectStatus::Research => "Research",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const PROJECT_STATUS_TABLE: KeywordTable<ProjectStatus> = KeywordTable {
    rows: &[
        (
            ProjectStatus::Production,
            &[Keyword::Stem("prod"), Keyword::Stem("launch")],
        ),
        (ProjectStatus::Beta, &[Keyword::Word("beta"), Keyword::Stem("pilot")]),
    ],
    fallback: ProjectStatus::Research,
};

pub const PROJECT_CATEGORY_TABLE: KeywordTable<&'static str> = KeywordTable {
    rows: &[
        (
            "AI",
            &[
                Keyword::Word("ai"),
                Keyword::Word("ml"),
                Keyword::Word("llm"),
                Keyword::Stem("neural"),
                Keyword::Stem("machine"),
                Keyword::Stem("нейро"),
            ],
        ),
        (
            "Mobile",
            &[
                Keyword::Word("mobile"),
                Keyword::Word("ios"),
                Keyword::Word("android"),
                Keyword::Word("flutter"),
            ],
        ),
        (
            "Web",
            &[
                Keyword::Word("web"),
                Keyword::Word("website"),
                Keyword::Word("frontend"),
                Keyword::Word("react"),
                Keyword::Word("saas"),
            ],
        ),
        (
            "Data",
            &[
                Keyword::Word("data"),
                Keyword::Stem("analytic"),
                Keyword::Word("etl"),
                Keyword::Stem("данн"),
            ],
        ),
        (
            "Hardware",
            &[
                Keyword::Stem("hardware"),
                Keyword::Word("iot"),
                Keyword::Stem("robot"),
                Keyword::Stem("device"),
            ],
        ),
    ],
    fallback: "Engineering",
};

// ============================================================================
// Awards
// ============================================================================

pub const AWARD_CATEGORY_TABLE: KeywordTable<&'static str> = KeywordTable {
    rows: &[
        (
            "Sports",
            &[
                Keyword::Stem("champion"),
                Keyword::Stem("tournament"),
                Keyword::Word("medal"),
                Keyword::Word("marathon"),
                Keyword::Stem("чемпион"),
                Keyword::Stem("спорт"),
            ],
        ),
        (
            "Science",
            &[
                Keyword::Word("science"),
                Keyword::Word("research"),
                Keyword::Word("grant"),
                Keyword::Word("scholarship"),
                Keyword::Stem("науч"),
                Keyword::Stem("олимпиад"),
            ],
        ),
        (
            "Business",
            &[
                Keyword::Word("forbes"),
                Keyword::Stem("entrepreneur"),
                Keyword::Word("business"),
                Keyword::Word("startup"),
                Keyword::Stem("бизнес"),
            ],
        ),
        (
            "Technology",
            &[
                Keyword::Stem("hackathon"),
                Keyword::Word("tech"),
                Keyword::Word("innovation"),
                Keyword::Stem("хакатон"),
            ],
        ),
    ],
    fallback: "General",
};

// ============================================================================
// Job titles and degrees
// ============================================================================

/// Words that mark a phrase as a job title rather than an organisation.
pub const TITLE_KEYWORDS: &[Keyword] = &[
    Keyword::Stem("engineer"),
    Keyword::Stem("develop"),
    Keyword::Stem("manag"),
    Keyword::Word("ceo"),
    Keyword::Word("cto"),
    Keyword::Word("cfo"),
    Keyword::Word("coo"),
    Keyword::Stem("founder"),
    Keyword::Stem("cofounder"),
    Keyword::Stem("director"),
    Keyword::Word("lead"),
    Keyword::Word("head"),
    Keyword::Stem("scientist"),
    Keyword::Stem("research"),
    Keyword::Stem("analyst"),
    Keyword::Stem("consultant"),
    Keyword::Stem("intern"),
    Keyword::Stem("architect"),
    Keyword::Stem("officer"),
    Keyword::Stem("president"),
    Keyword::Stem("professor"),
    Keyword::Stem("designer"),
    Keyword::Stem("programmer"),
    Keyword::Stem("инженер"),
    Keyword::Stem("разработчик"),
    Keyword::Stem("руководител"),
    Keyword::Stem("директор"),
    Keyword::Stem("основател"),
    Keyword::Stem("менеджер"),
    Keyword::Stem("аналитик"),
];

pub fn looks_like_title(text: &str) -> bool {
    mentions_any(text, TITLE_KEYWORDS)
}

/// Words that mark a phrase as an academic degree.
pub const DEGREE_KEYWORDS: &[Keyword] = &[
    Keyword::Stem("bachelor"),
    Keyword::Stem("master"),
    Keyword::Word("phd"),
    Keyword::Word("msc"),
    Keyword::Word("bsc"),
    Keyword::Word("mba"),
    Keyword::Word("ba"),
    Keyword::Word("ma"),
    Keyword::Stem("diploma"),
    Keyword::Stem("бакалавр"),
    Keyword::Stem("магистр"),
    Keyword::Stem("кандидат"),
    Keyword::Stem("доктор"),
];

pub fn looks_like_degree(text: &str) -> bool {
    mentions_any(text, DEGREE_KEYWORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_classification_boundary() {
        assert_eq!(classify_skill("Leadership"), SkillCategory::Technology);
        assert_eq!(classify_skill("Team Building"), SkillCategory::Leadership);
        assert_eq!(classify_skill("Mentor"), SkillCategory::Leadership);
        assert_eq!(classify_skill("Project management"), SkillCategory::Leadership);
        assert_eq!(classify_skill("Руководство командой"), SkillCategory::Leadership);
        assert_eq!(classify_skill("Data science"), SkillCategory::Research);
        assert_eq!(classify_skill("Научные исследования"), SkillCategory::Research);
        assert_eq!(classify_skill("Python"), SkillCategory::Technology);
    }

    #[test]
    fn test_project_status() {
        assert_eq!(PROJECT_STATUS_TABLE.classify("Launched in 2022"), ProjectStatus::Production);
        assert_eq!(PROJECT_STATUS_TABLE.classify("in production"), ProjectStatus::Production);
        assert_eq!(PROJECT_STATUS_TABLE.classify("closed beta"), ProjectStatus::Beta);
        assert_eq!(PROJECT_STATUS_TABLE.classify("pilot with 3 banks"), ProjectStatus::Beta);
        assert_eq!(PROJECT_STATUS_TABLE.classify("prototype"), ProjectStatus::Research);
    }

    #[test]
    fn test_titles_and_degrees() {
        assert!(looks_like_title("Senior Engineer"));
        assert!(looks_like_title("CEO / Founder"));
        assert!(!looks_like_title("Acme Corp"));
        assert!(looks_like_degree("MSc Computer Science"));
        assert!(!looks_like_degree("Nazarbayev University"));
    }
}
