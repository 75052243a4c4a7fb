//! Scenario tests for the import pipeline
//!
//! Drives the public API through the documented scenarios:
//! - skill bucketing, experience headers, refused uploads and award splits
//! - a full CV assembled field by field
//! - layering over defaults, option caps and JSON ground truth

use folio_ingest::extract::{parse_award, parse_experience};
use folio_ingest::{
    default_profile, merge_profiles, normalize_text, parse_profile_text, split_items,
    split_sections, ImportError, ImportOptions, Profile, ProjectStatus, SectionKey, Session,
    SkillCategory,
};

const CV: &str = "\
Jane Doe
Principal engineer building search infrastructure

CONTACTS
Email: jane.doe@example.com
Phone: +7 (701) 555-12-34
Location: Almaty, Kazakhstan

SKILLS
Rust, Python, AWS
Team Building, Mentor
Research, Scientific Writing

EXPERIENCE
Senior Engineer — Acme Corp (2020–Present): led platform rewrite. - Reduced latency by 40%. - Mentored 3 engineers.
Engineer — Initech (2016–2020)
• Built the billing pipeline

PROJECTS
• Folio: portfolio builder launched to 10k users #rust #serde
• MedScan - ML triage pilot in two clinics [Python, PyTorch]

PUBLICATIONS
• Graph embeddings for retrieval, in IEEE Transactions on Neural Networks, 2021. Cited by 14

AWARDS
• Forbes 30 Under 30 — Forbes — 2023

EDUCATION
Nazarbayev University - BSc Computer Science (2012–2016)

LANGUAGES
English - Fluent, Kazakh - Native

SOCIALS
https://github.com/janedoe https://linkedin.com/in/janedoe https://janedoe.dev

PATENTS
• Method for ranking documents
";

#[test]
fn scenario_a_skill_bucketing_boundary() {
    let text = normalize_text("SKILLS\nPython, AWS\nLeadership\nTeam Building, Mentor\n");
    let sections = split_sections(&text);
    assert_eq!(sections.len(), 1);
    assert_eq!(
        sections.get(SectionKey::Skills),
        "Python, AWS\nLeadership\nTeam Building, Mentor"
    );

    let profile = parse_profile_text("SKILLS\nPython, AWS\nLeadership\nTeam Building, Mentor\n", &ImportOptions::default());
    assert_eq!(
        profile.skills_in(SkillCategory::Technology),
        ["Python", "AWS", "Leadership"]
    );
    assert_eq!(
        profile.skills_in(SkillCategory::Leadership),
        ["Team Building", "Mentor"]
    );
    assert!(profile.skills_in(SkillCategory::Research).is_empty());
}

#[test]
fn scenario_b_experience_header_and_achievements() {
    let entry = parse_experience(
        "Senior Engineer — Acme Corp (2020–Present): led platform rewrite. - Reduced latency by 40%. - Mentored 3 engineers.",
        6,
    );
    assert_eq!(entry.title, "Senior Engineer");
    assert_eq!(entry.company, "Acme Corp");
    assert_eq!(entry.period, "2020–Present");
    assert_eq!(
        entry.achievements,
        vec!["Reduced latency by 40%.", "Mentored 3 engineers."]
    );
}

#[test]
fn scenario_c_unsupported_upload_is_refused() {
    let mut session = Session::new();
    let before = session.profile().clone();

    let err = session.import("notes.txt", b"SKILLS\nRust").unwrap_err();
    match &err {
        ImportError::UnsupportedFormat { file_name, extension } => {
            assert_eq!(file_name, "notes.txt");
            assert_eq!(extension, "txt");
        }
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
    assert!(err.to_string().contains("notes.txt"));
    assert_eq!(session.profile(), &before);
}

#[test]
fn scenario_d_award_split() {
    let award = parse_award("Forbes 30 Under 30 — Forbes — 2023");
    assert_eq!(award.title, "Forbes 30 Under 30");
    assert_eq!(award.year, 2023);
    assert!(award.description.contains("Forbes"));
    assert!(award.description.contains("2023"));

    let items = split_items(&normalize_text("• Forbes 30 Under 30 — Forbes — 2023"));
    let award = parse_award(&items[0]);
    assert_eq!(award.title, "Forbes 30 Under 30");
    assert_eq!(award.year, 2023);
}

#[test]
fn full_cv_is_assembled() {
    let profile = parse_profile_text(CV, &ImportOptions::default());

    assert_eq!(profile.name, "Jane Doe");
    assert_eq!(profile.headline, "Jane Doe");
    assert_eq!(profile.contacts["email"], "jane.doe@example.com");
    assert_eq!(profile.contacts["phone"], "+7 (701) 555-12-34");
    assert_eq!(profile.contacts["location"], "Almaty, Kazakhstan");
    assert_eq!(profile.socials["GitHub"], "https://github.com/janedoe");
    assert_eq!(profile.socials["LinkedIn"], "https://linkedin.com/in/janedoe");
    assert_eq!(profile.socials["Website"], "https://janedoe.dev");

    assert_eq!(profile.skills_in(SkillCategory::Research), ["Research"]);
    assert_eq!(profile.research_areas, vec!["Research"]);

    assert_eq!(profile.career.len(), 2);
    assert_eq!(profile.career[0].company, "Acme Corp");
    assert_eq!(profile.career[1].title, "Engineer");
    assert_eq!(profile.career[1].achievements, vec!["Built the billing pipeline"]);
    assert_eq!(profile.positions_current.len(), 1);
    assert_eq!(profile.positions_current[0], profile.career[0]);

    assert_eq!(profile.projects.len(), 2);
    assert_eq!(profile.projects[0].status, ProjectStatus::Production);
    assert_eq!(profile.projects[1].status, ProjectStatus::Beta);

    assert_eq!(profile.publications.len(), 1);
    assert_eq!(profile.publications[0].year, 2021);
    assert_eq!(profile.publications[0].citations, 14);

    assert_eq!(profile.awards[0].org, "Forbes");
    assert_eq!(profile.education[0].institution, "Nazarbayev University");
    assert_eq!(profile.languages, vec!["English - Fluent", "Kazakh - Native"]);

    let stats = &profile.analytics.lifetime_stats;
    assert_eq!(stats.projects, 2);
    assert_eq!(stats.awards, 1);
    assert_eq!(stats.patents, 1);
    assert_eq!(stats.citations, 14);
    assert_eq!(profile.analytics.career_timeline[&2020], 1);
    assert_eq!(profile.analytics.career_timeline[&2016], 1);
}

#[test]
fn missing_sections_yield_empty_fields() {
    let profile = parse_profile_text("Jane Doe\nJust a short note.", &ImportOptions::default());
    assert!(profile.career.is_empty());
    assert!(profile.projects.is_empty());
    assert!(profile.awards.is_empty());
    assert!(profile.languages.is_empty());
    assert!(profile.socials.is_empty());
    assert_eq!(profile.about, "Jane Doe\nJust a short note.");
}

#[test]
fn parsed_profile_layers_over_defaults() {
    let parsed = parse_profile_text("Jane Doe\n\nLANGUAGES\nGerman", &ImportOptions::default());
    let merged = merge_profiles(&default_profile(), &parsed).unwrap();

    assert_eq!(merged.name, "Jane Doe");
    assert_eq!(merged.languages, vec!["German"]);
    // Nothing detected: defaults survive.
    assert_eq!(merged.career, default_profile().career);
    assert_eq!(
        merged.skills_in(SkillCategory::Technology),
        default_profile().skills_in(SkillCategory::Technology)
    );
    assert_eq!(merged.contacts["location"], "Your Location");
}

#[test]
fn options_caps_are_honoured() {
    let options = ImportOptions::default().with_max_projects(1).with_max_awards(1);
    let profile = parse_profile_text(CV, &options);
    assert_eq!(profile.projects.len(), 1);
    assert_eq!(profile.awards.len(), 1);
}

#[test]
fn narrower_options_cap_achievements_publications_and_headline() {
    let options = ImportOptions::default()
        .with_max_achievements(1)
        .with_max_publications(0)
        .with_max_headline_chars(4);
    let profile = parse_profile_text(CV, &options);
    assert_eq!(profile.career[0].achievements, vec!["Reduced latency by 40%."]);
    assert!(profile.publications.is_empty());
    assert_eq!(profile.headline, "Jane");
}

#[test]
fn json_import_is_ground_truth() {
    let exported = parse_profile_text(CV, &ImportOptions::default());
    let mut session = Session::with_base(Profile::default());
    let imported = session
        .import("profile.json", exported.to_json().unwrap().as_bytes())
        .unwrap();
    assert_eq!(imported, &exported);
}
