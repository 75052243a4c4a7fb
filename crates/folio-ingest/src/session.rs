//! Import session state
//!
//! A [`Session`] owns the current profile. A successful import replaces it
//! as a whole; a failed one leaves it untouched.

use crate::document::{DocumentReader, RawDocument};
use crate::error::ImportResult;
use crate::options::ImportOptions;
use crate::profile::{default_profile, Profile};

#[derive(Debug, Clone)]
pub struct Session {
    base: Profile,
    profile: Profile,
    options: ImportOptions,
    reader: DocumentReader,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Session starting from [`default_profile`], which also serves as the
    /// merge base for imports.
    pub fn new() -> Self {
        Self::with_base(default_profile())
    }

    pub fn with_base(base: Profile) -> Self {
        Self {
            profile: base.clone(),
            base,
            options: ImportOptions::default(),
            reader: DocumentReader::default(),
        }
    }

    pub fn with_options(mut self, options: ImportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_reader(mut self, reader: DocumentReader) -> Self {
        self.reader = reader;
        self
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn base(&self) -> &Profile {
        &self.base
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Import an upload and make the result the current profile.
    pub fn import(&mut self, file_name: &str, bytes: &[u8]) -> ImportResult<&Profile> {
        let document = RawDocument::new(file_name, bytes);
        let profile = crate::import_document(&document, &self.base, &self.options, &self.reader)?;
        self.profile = profile;
        Ok(&self.profile)
    }

    /// Drop the imported profile and return to the base.
    pub fn reset(&mut self) {
        self.profile = self.base.clone();
    }
}
