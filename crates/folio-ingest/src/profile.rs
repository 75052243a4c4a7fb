//! Profile record
//!
//! The aggregate the whole pipeline produces. Field order follows the
//! exported JSON layout.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analytics::Analytics;
use crate::error::ImportError;
use crate::extract::{AwardEntry, EducationEntry, ExperienceEntry, ProjectEntry, PublicationEntry};
use crate::keywords::SkillCategory;

/// Name used when no plausible name line is found, and by [`default_profile`].
pub const DEFAULT_NAME: &str = "Alisher Beisembekov";

pub const DEFAULT_HEADLINE: &str = "CEO | Scientist | Programmer | Athlete";

/// A titled group of free-form achievements (patents, talks, press).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherAchievement {
    pub title: String,
    pub icon: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub about: String,
    pub contacts: BTreeMap<String, String>,
    pub socials: BTreeMap<String, String>,
    pub skills: BTreeMap<String, Vec<String>>,
    pub languages: Vec<String>,
    pub positions_current: Vec<ExperienceEntry>,
    pub career: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub research_areas: Vec<String>,
    pub publications: Vec<PublicationEntry>,
    pub awards: Vec<AwardEntry>,
    pub achievements_other: Vec<OtherAchievement>,
    pub education: Vec<EducationEntry>,
    /// Derived; recomputed by [`Profile::refresh_analytics`], never trusted from input.
    pub analytics: Analytics,
}

impl Profile {
    /// Recompute `analytics` from the current field contents.
    pub fn refresh_analytics(&mut self) {
        self.analytics = Analytics::derive(self);
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a profile exported by [`Profile::to_json`]. Missing fields default.
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Skills in one bucket, empty if the bucket is absent.
    pub fn skills_in(&self, category: SkillCategory) -> &[String] {
        self.skills
            .get(category.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Placeholder profile that imports are layered over.
pub fn default_profile() -> Profile {
    let position = ExperienceEntry {
        title: "CEO / Founder".to_string(),
        company: "Company Name".to_string(),
        period: "2020 - Present".to_string(),
        description: "Description to be added...".to_string(),
        achievements: Vec::new(),
    };

    let mut skills = BTreeMap::new();
    skills.insert(
        SkillCategory::Technology.as_str().to_string(),
        strings(&[
            "Python",
            "JavaScript",
            "C++",
            "Java",
            "TensorFlow",
            "React",
            "Django",
            "Flutter",
            "Git",
            "Docker",
            "Kubernetes",
            "AWS",
            "PostgreSQL",
            "MongoDB",
            "Redis",
        ]),
    );
    skills.insert(SkillCategory::Leadership.as_str().to_string(), Vec::new());
    skills.insert(SkillCategory::Research.as_str().to_string(), Vec::new());

    let contacts = [("email", "your.email@example.com"), ("location", "Your Location")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let socials = ["LinkedIn", "GitHub", "Website"]
        .into_iter()
        .map(|k| (k.to_string(), "#".to_string()))
        .collect();

    let mut profile = Profile {
        name: DEFAULT_NAME.to_string(),
        headline: DEFAULT_HEADLINE.to_string(),
        about: "Brief biography to be added here...".to_string(),
        contacts,
        socials,
        skills,
        languages: strings(&["English - Fluent", "Russian - Native", "Kazakh - Native"]),
        positions_current: vec![position.clone()],
        career: vec![position],
        research_areas: strings(&["Research area to be added"]),
        ..Profile::default()
    };
    profile.refresh_analytics();
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_shape() {
        let profile = default_profile();
        assert_eq!(profile.name, DEFAULT_NAME);
        assert_eq!(profile.headline, DEFAULT_HEADLINE);
        assert_eq!(profile.languages.len(), 3);
        assert_eq!(profile.skills_in(SkillCategory::Technology).len(), 15);
        assert!(profile.skills_in(SkillCategory::Research).is_empty());
        assert_eq!(profile.positions_current, profile.career);
        assert_eq!(profile.analytics.lifetime_stats.positions, 1);
    }

    #[test]
    fn test_json_round_trip() {
        let profile = default_profile();
        let json = profile.to_json().unwrap();
        assert_eq!(Profile::from_json(&json).unwrap(), profile);
    }

    #[test]
    fn test_json_field_order() {
        let json = default_profile().to_json().unwrap();
        let name = json.find("\"name\"").unwrap();
        let headline = json.find("\"headline\"").unwrap();
        let analytics = json.find("\"analytics\"").unwrap();
        assert!(name < headline && headline < analytics);
    }

    #[test]
    fn test_from_json_defaults_missing_fields() {
        let profile = Profile::from_json(r#"{"name": "Jane Doe"}"#).unwrap();
        assert_eq!(profile.name, "Jane Doe");
        assert!(profile.career.is_empty());

        assert!(matches!(
            Profile::from_json("{not json"),
            Err(ImportError::MalformedJson(_))
        ));
    }
}
