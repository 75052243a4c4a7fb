//! Profile assembly
//!
//! Runs every extractor over its section and composes the results into one
//! [`Profile`]. Absent sections contribute empty results; assembly never
//! fails.

use regex::Regex;
use std::sync::OnceLock;

use crate::extract::contacts::find_email;
use crate::extract::experience::is_entry_header;
use crate::extract::{
    extract_awards, extract_contacts, extract_education, extract_experience, extract_languages,
    extract_projects, extract_publications, extract_skills, extract_socials, is_present,
    truncate_chars,
};
use crate::items::{split_entries, split_items};
use crate::keywords::SkillCategory;
use crate::normalize::normalize_text;
use crate::options::ImportOptions;
use crate::profile::{OtherAchievement, Profile, DEFAULT_NAME};
use crate::sections::{classify_line, split_sections, LineKind, SectionKey, SectionMap};

/// Sections that become `achievements_other` groups, with their title and icon.
const OTHER_ACHIEVEMENTS: &[(SectionKey, &str, &str)] = &[
    (SectionKey::Patents, "Patents", "📋"),
    (SectionKey::Speaking, "Speaking", "🎤"),
    (SectionKey::Media, "Media", "📰"),
];

const NAME_MIN_CHARS: usize = 4;
const NAME_MAX_CHARS: usize = 80;

fn name_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\p{Lu}[\p{Ll}'’\-]+(?:\s+\p{Lu}[\p{Ll}'’\-]+){1,3}$").expect("valid name regex")
    })
}

/// First line among the leading `scan_lines` that reads like a 2–4 word
/// capitalised name. Section headers are skipped.
pub fn guess_name(text: &str, scan_lines: usize) -> Option<String> {
    text.lines()
        .take(scan_lines)
        .map(str::trim)
        .filter(|line| classify_line(line) == LineKind::Content)
        .find(|line| {
            let chars = line.chars().count();
            (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) && name_shape().is_match(line)
        })
        .map(str::to_string)
}

fn other_achievements(sections: &SectionMap, max_items: usize) -> Vec<OtherAchievement> {
    OTHER_ACHIEVEMENTS
        .iter()
        .filter_map(|(key, title, icon)| {
            let mut items = split_items(sections.get(*key));
            if items.is_empty() {
                return None;
            }
            items.truncate(max_items);
            Some(OtherAchievement {
                title: title.to_string(),
                icon: icon.to_string(),
                items,
            })
        })
        .collect()
}

/// Build a profile from normalized text and its section map.
pub fn assemble_profile(text: &str, sections: &SectionMap, options: &ImportOptions) -> Profile {
    let about = sections.get(SectionKey::About);
    let headline = about
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| truncate_chars(line, options.max_headline_chars))
        .unwrap_or_default();

    let skills = extract_skills(&split_items(sections.get(SectionKey::Skills)), options.skill_caps());
    let research_areas = skills
        .get(SkillCategory::Research.as_str())
        .map(|areas| areas.iter().take(options.max_research_areas).cloned().collect())
        .unwrap_or_default();

    let career = extract_experience(
        &split_entries(sections.get(SectionKey::Experience), is_entry_header),
        options.max_achievements,
    );
    let positions_current = career
        .iter()
        .filter(|entry| is_present(&entry.period))
        .take(options.max_current_positions)
        .cloned()
        .collect();

    let mut contacts = extract_contacts(sections.get(SectionKey::Contacts));
    if !contacts.contains_key("email") {
        if let Some(email) = find_email(text) {
            contacts.insert("email".to_string(), email);
        }
    }
    let socials = extract_socials(&format!(
        "{}\n{}",
        sections.get(SectionKey::Socials),
        sections.get(SectionKey::Contacts)
    ));

    let mut profile = Profile {
        name: guess_name(text, options.name_scan_lines).unwrap_or_else(|| DEFAULT_NAME.to_string()),
        headline,
        about: about.to_string(),
        contacts,
        socials,
        skills,
        languages: extract_languages(sections.get(SectionKey::Languages)),
        positions_current,
        career,
        projects: extract_projects(
            &split_items(sections.get(SectionKey::Projects)),
            options.max_projects,
            options.max_project_tech,
        ),
        research_areas,
        publications: extract_publications(
            &split_items(sections.get(SectionKey::Publications)),
            options.max_publications,
        ),
        awards: extract_awards(&split_items(sections.get(SectionKey::Awards)), options.max_awards),
        achievements_other: other_achievements(sections, options.max_other_items),
        education: extract_education(
            &split_items(sections.get(SectionKey::Education)),
            options.max_education,
        ),
        analytics: Default::default(),
    };
    profile.refresh_analytics();

    tracing::debug!(
        sections = sections.len(),
        career = profile.career.len(),
        projects = profile.projects.len(),
        publications = profile.publications.len(),
        awards = profile.awards.len(),
        "assembled profile"
    );
    profile
}

/// Normalize raw document text, split it into sections and assemble a profile.
pub fn parse_profile_text(raw: &str, options: &ImportOptions) -> Profile {
    let text = normalize_text(raw);
    let sections = split_sections(&text);
    assemble_profile(&text, &sections, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_name() {
        assert_eq!(
            guess_name("\nJane Doe\nSenior Engineer at Acme", 20).as_deref(),
            Some("Jane Doe")
        );
        assert_eq!(
            guess_name("Алишер Бейсембеков\n", 20).as_deref(),
            Some("Алишер Бейсембеков")
        );
        assert_eq!(guess_name("SKILLS\nRust, Go", 20), None);
        assert_eq!(guess_name("line\nline\nJane Doe", 2), None);
    }

    #[test]
    fn test_headline_truncated() {
        let long = "x".repeat(200);
        let profile = parse_profile_text(&long, &ImportOptions::default());
        assert_eq!(profile.headline.chars().count(), 140);
        assert_eq!(profile.name, DEFAULT_NAME);
    }

    #[test]
    fn test_empty_document() {
        let profile = parse_profile_text("", &ImportOptions::default());
        assert_eq!(profile.name, DEFAULT_NAME);
        assert_eq!(profile.headline, "");
        assert!(profile.career.is_empty());
        assert!(profile.achievements_other.is_empty());
        assert_eq!(profile.skills.len(), 3);
    }

    #[test]
    fn test_other_achievements_only_when_present() {
        let text = "PATENTS\n- Method for sorting\n- Device for judo\n\nMEDIA\n- Forbes interview";
        let profile = parse_profile_text(text, &ImportOptions::default());
        let titles: Vec<&str> = profile
            .achievements_other
            .iter()
            .map(|group| group.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Patents", "Media"]);
        assert_eq!(profile.achievements_other[0].icon, "📋");
        assert_eq!(profile.achievements_other[0].items.len(), 2);
        assert_eq!(profile.analytics.lifetime_stats.patents, 2);
    }

    #[test]
    fn test_current_positions_filtered_and_capped() {
        let text = "EXPERIENCE\n\
                    CTO — A Corp (2021–Present)\n\
                    CEO — B Corp (2020–Present)\n\
                    Engineer — C Corp (2015–2019)\n\
                    Advisor — D Corp (2019–Present)\n\
                    Lead Engineer — E Corp (2018–н.в.)";
        let profile = parse_profile_text(text, &ImportOptions::default());
        assert_eq!(profile.career.len(), 5);
        let current: Vec<&str> = profile
            .positions_current
            .iter()
            .map(|p| p.company.as_str())
            .collect();
        assert_eq!(current, vec!["A Corp", "B Corp", "D Corp"]);
    }

    #[test]
    fn test_email_falls_back_to_whole_document() {
        let text = "Jane Doe\nReach me at jane@example.com\n\nSKILLS\nRust";
        let profile = parse_profile_text(text, &ImportOptions::default());
        assert_eq!(profile.contacts["email"], "jane@example.com");
    }
}
