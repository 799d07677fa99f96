//! Credential form: field validation, save, and search.
//!
//! This is the layer between what the user typed and the data file. It
//! knows nothing about the terminal.

use tracing::debug;

use crate::error::{Error, Field, Result};
use crate::store::{Credential, DataFile, SaveOutcome};

/// The three fields of the credential form, as entered.
#[derive(Debug, Clone, Default)]
pub struct Form {
    pub website: String,
    pub email: String,
    pub password: String,
}

impl Form {
    pub fn new(website: &str, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            website: website.trim().to_string(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the fields in form order and report the first empty one.
    pub fn validate(&self) -> Result<()> {
        if self.website.is_empty() {
            return Err(Error::EmptyField(Field::Website));
        }
        if self.email.is_empty() {
            return Err(Error::EmptyField(Field::Username));
        }
        if self.password.is_empty() {
            return Err(Error::EmptyField(Field::Password));
        }
        Ok(())
    }

    /// Validate, then write the credential to the data file.
    pub fn save(self, store: &DataFile) -> Result<SaveOutcome> {
        self.validate()?;
        store.upsert(
            &self.website,
            Credential {
                email: self.email,
                password: self.password,
            },
        )
    }
}

/// Look up the stored credential for `website`.
pub fn search(store: &DataFile, website: &str) -> Result<Credential> {
    let website = website.trim();
    if website.is_empty() {
        return Err(Error::MissingWebsite);
    }
    store.lookup(website)?.ok_or_else(|| {
        debug!(website, "no stored credential");
        Error::NotFound
    })
}
