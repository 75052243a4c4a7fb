//! Skill extraction and bucketing

use std::collections::BTreeMap;

use crate::items::dedup_case_insensitive;
use crate::keywords::{classify_skill, SkillCategory};

const SKILL_SEPARATORS: &[char] = &[',', '/', ';', '•', '\n'];

/// Per-bucket caps for [`extract_skills`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCaps {
    pub technology: usize,
    pub leadership: usize,
    pub research: usize,
}

impl SkillCaps {
    fn for_category(&self, category: SkillCategory) -> usize {
        match category {
            SkillCategory::Technology => self.technology,
            SkillCategory::Leadership => self.leadership,
            SkillCategory::Research => self.research,
        }
    }
}

impl Default for SkillCaps {
    fn default() -> Self {
        Self {
            technology: 24,
            leadership: 16,
            research: 16,
        }
    }
}

/// Classify skill tokens into Technology / Leadership / Research buckets.
///
/// Every bucket is present in the result, possibly empty.
pub fn extract_skills(items: &[String], caps: SkillCaps) -> BTreeMap<String, Vec<String>> {
    let mut buckets: BTreeMap<SkillCategory, Vec<String>> = SkillCategory::ALL
        .iter()
        .map(|c| (*c, Vec::new()))
        .collect();

    for item in items {
        for token in item.split(SKILL_SEPARATORS) {
            let token = token.trim().trim_start_matches("- ").trim();
            if token.is_empty() {
                continue;
            }
            buckets
                .entry(classify_skill(token))
                .or_default()
                .push(token.to_string());
        }
    }

    buckets
        .into_iter()
        .map(|(category, tokens)| {
            let mut tokens = dedup_case_insensitive(tokens);
            tokens.truncate(caps.for_category(category));
            (category.as_str().to_string(), tokens)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucketing_boundary() {
        let items = vec!["Python, AWS\nLeadership\nTeam Building, Mentor".to_string()];
        let skills = extract_skills(&items, SkillCaps::default());
        assert_eq!(skills["Technology"], vec!["Python", "AWS", "Leadership"]);
        assert_eq!(skills["Leadership"], vec!["Team Building", "Mentor"]);
        assert!(skills["Research"].is_empty());
    }

    #[test]
    fn test_dedup_and_caps() {
        let items = vec!["Rust, rust, RUST; Go".to_string()];
        let skills = extract_skills(&items, SkillCaps::default());
        assert_eq!(skills["Technology"], vec!["Rust", "Go"]);

        let many: Vec<String> = (0..40).map(|i| format!("Tool{i}")).collect();
        let capped = extract_skills(
            &many,
            SkillCaps {
                technology: 24,
                ..SkillCaps::default()
            },
        );
        assert_eq!(capped["Technology"].len(), 24);
    }

    #[test]
    fn test_empty_items_yield_empty_buckets() {
        let skills = extract_skills(&[], SkillCaps::default());
        assert_eq!(skills.len(), 3);
        assert!(skills.values().all(Vec::is_empty));
    }
}
