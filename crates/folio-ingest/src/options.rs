//! Import tunables
//!
//! Every cap and scan window used by the extractors and the assembler.
//! Values missing from a serialized options file fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::error::ImportError;
use crate::extract::skills::SkillCaps;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    pub max_current_positions: usize,
    pub max_achievements: usize,
    pub max_projects: usize,
    pub max_project_tech: usize,
    pub max_publications: usize,
    pub max_awards: usize,
    pub max_technology_skills: usize,
    pub max_leadership_skills: usize,
    pub max_research_skills: usize,
    pub max_headline_chars: usize,
    pub name_scan_lines: usize,
    pub max_other_items: usize,
    pub max_research_areas: usize,
    pub max_education: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            max_current_positions: 3,
            max_achievements: 6,
            max_projects: 12,
            max_project_tech: 8,
            max_publications: 20,
            max_awards: 20,
            max_technology_skills: 24,
            max_leadership_skills: 16,
            max_research_skills: 16,
            max_headline_chars: 140,
            name_scan_lines: 20,
            max_other_items: 20,
            max_research_areas: 8,
            max_education: 10,
        }
    }
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON; absent keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        serde_json::from_str(json).map_err(|e| ImportError::Options(e.to_string()))
    }

    pub fn with_max_current_positions(mut self, max: usize) -> Self {
        self.max_current_positions = max;
        self
    }

    pub fn with_max_achievements(mut self, max: usize) -> Self {
        self.max_achievements = max;
        self
    }

    pub fn with_max_projects(mut self, max: usize) -> Self {
        self.max_projects = max;
        self
    }

    pub fn with_max_publications(mut self, max: usize) -> Self {
        self.max_publications = max;
        self
    }

    pub fn with_max_awards(mut self, max: usize) -> Self {
        self.max_awards = max;
        self
    }

    pub fn with_max_headline_chars(mut self, max: usize) -> Self {
        self.max_headline_chars = max;
        self
    }

    pub fn with_name_scan_lines(mut self, lines: usize) -> Self {
        self.name_scan_lines = lines;
        self
    }

    pub fn skill_caps(&self) -> SkillCaps {
        SkillCaps {
            technology: self.max_technology_skills,
            leadership: self.max_leadership_skills,
            research: self.max_research_skills,
        }
    }
}
