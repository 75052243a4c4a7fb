//! Derived profile statistics

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::profile::Profile;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifetimeStats {
    pub publications: usize,
    pub projects: usize,
    pub awards: usize,
    pub patents: usize,
    pub positions: usize,
    pub citations: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Analytics {
    pub lifetime_stats: LifetimeStats,
    /// Skill bucket name to number of skills.
    pub skills_distribution: BTreeMap<String, usize>,
    /// Project status to number of projects.
    pub project_status: BTreeMap<String, usize>,
    /// Start year to number of career entries starting that year.
    pub career_timeline: BTreeMap<i32, usize>,
}

fn start_year() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b((?:19|20)\d{2})\b").expect("valid start year regex"))
}

fn is_patent_group(title: &str) -> bool {
    let title = title.to_lowercase();
    title.contains("patent") || title.contains("патент")
}

impl Analytics {
    pub fn derive(profile: &Profile) -> Self {
        let patents = profile
            .achievements_other
            .iter()
            .filter(|group| is_patent_group(&group.title))
            .map(|group| group.items.len())
            .sum();

        let lifetime_stats = LifetimeStats {
            publications: profile.publications.len(),
            projects: profile.projects.len(),
            awards: profile.awards.len(),
            patents,
            positions: profile.career.len(),
            citations: profile.publications.iter().map(|p| u64::from(p.citations)).sum(),
        };

        let skills_distribution = profile
            .skills
            .iter()
            .map(|(category, skills)| (category.clone(), skills.len()))
            .collect();

        let mut project_status = BTreeMap::new();
        for project in &profile.projects {
            *project_status.entry(project.status.as_str().to_string()).or_insert(0) += 1;
        }

        let mut career_timeline = BTreeMap::new();
        for entry in &profile.career {
            if let Some(year) = start_year()
                .captures(&entry.period)
                .and_then(|caps| caps[1].parse::<i32>().ok())
            {
                *career_timeline.entry(year).or_insert(0) += 1;
            }
        }

        Self {
            lifetime_stats,
            skills_distribution,
            project_status,
            career_timeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{ExperienceEntry, ProjectEntry, PublicationEntry};
    use crate::keywords::ProjectStatus;
    use crate::profile::OtherAchievement;

    #[test]
    fn test_derive_counts() {
        let profile = Profile {
            publications: vec![
                PublicationEntry {
                    citations: 10,
                    ..Default::default()
                },
                PublicationEntry {
                    citations: 5,
                    ..Default::default()
                },
            ],
            projects: vec![
                ProjectEntry {
                    status: ProjectStatus::Production,
                    ..Default::default()
                },
                ProjectEntry::default(),
            ],
            career: vec![
                ExperienceEntry {
                    period: "2020 - Present".to_string(),
                    ..Default::default()
                },
                ExperienceEntry {
                    period: "2020-2021".to_string(),
                    ..Default::default()
                },
                ExperienceEntry::default(),
            ],
            achievements_other: vec![
                OtherAchievement {
                    title: "Patents".to_string(),
                    icon: "📋".to_string(),
                    items: vec!["A".to_string(), "B".to_string()],
                },
                OtherAchievement {
                    title: "Speaking".to_string(),
                    icon: "🎤".to_string(),
                    items: vec!["Talk".to_string()],
                },
            ],
            ..Default::default()
        };

        let analytics = Analytics::derive(&profile);
        assert_eq!(analytics.lifetime_stats.publications, 2);
        assert_eq!(analytics.lifetime_stats.citations, 15);
        assert_eq!(analytics.lifetime_stats.patents, 2);
        assert_eq!(analytics.lifetime_stats.positions, 3);
        assert_eq!(analytics.project_status["Production"], 1);
        assert_eq!(analytics.project_status["Research"], 1);
        assert_eq!(analytics.career_timeline[&2020], 2);
        assert_eq!(analytics.career_timeline.len(), 1);
    }
}
