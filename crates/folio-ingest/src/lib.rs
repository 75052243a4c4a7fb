//! Profile import for Folio
//!
//! Turns an uploaded CV or biography into a structured [`Profile`]:
//! - `.pdf` uploads go through text extraction, normalization, section and
//!   item splitting, the field extractors and the assembler
//! - `.json` uploads are taken as ground truth and only merged
//!
//! Either way the result is layered over a base profile (usually
//! [`default_profile`]) and its analytics are recomputed.
//!
//! Heuristic misses are not errors. Only unsupported or unreadable uploads
//! produce an [`ImportError`], and [`Session`] keeps its previous profile
//! when that happens.

use serde_json::Value;

pub mod analytics;
pub mod assemble;
pub mod document;
pub mod error;
pub mod extract;
pub mod items;
pub mod keywords;
pub mod merge;
pub mod normalize;
pub mod options;
pub mod profile;
pub mod sections;
pub mod session;

pub use analytics::{Analytics, LifetimeStats};
pub use assemble::{assemble_profile, guess_name, parse_profile_text};
pub use document::{DocumentFormat, DocumentReader, RawDocument};
pub use error::{DocumentError, ImportError, ImportResult};
pub use extract::{AwardEntry, EducationEntry, ExperienceEntry, ProjectEntry, PublicationEntry};
pub use items::{split_entries, split_items};
pub use keywords::{ProjectStatus, SkillCategory};
pub use merge::{merge_profiles, merge_value_into, merge_values};
pub use normalize::normalize_text;
pub use options::ImportOptions;
pub use profile::{default_profile, OtherAchievement, Profile, DEFAULT_NAME};
pub use sections::{split_sections, SectionKey, SectionMap};
pub use session::Session;

/// Run one upload through the pipeline and merge the result over `base`.
pub fn import_document(
    document: &RawDocument,
    base: &Profile,
    options: &ImportOptions,
    reader: &DocumentReader,
) -> ImportResult<Profile> {
    let format = match document.format() {
        Ok(format) => format,
        Err(err) => {
            tracing::warn!(file = %document.file_name, "refusing unsupported upload");
            return Err(err);
        }
    };

    let profile = match format {
        DocumentFormat::Json => {
            let value: Value = serde_json::from_slice(&document.bytes)?;
            if !value.is_object() {
                return Err(ImportError::MalformedJson(serde::de::Error::custom(
                    "expected a JSON object at the top level",
                )));
            }
            merge_value_into(base, &value)?
        }
        DocumentFormat::Pdf => {
            let text = reader.read_text(&document.bytes);
            let parsed = parse_profile_text(&text, options);
            merge_profiles(base, &parsed)?
        }
    };

    tracing::info!(
        file = %document.file_name,
        format = format.as_str(),
        name = %profile.name,
        positions = profile.career.len(),
        projects = profile.projects.len(),
        "import complete"
    );
    Ok(profile)
}

/// Read the document's text (PDF only) and split it into sections.
pub fn document_sections(document: &RawDocument, reader: &DocumentReader) -> ImportResult<SectionMap> {
    match document.format()? {
        DocumentFormat::Pdf => Ok(split_sections(&normalize_text(&reader.read_text(&document.bytes)))),
        DocumentFormat::Json => Ok(SectionMap::default()),
    }
}
