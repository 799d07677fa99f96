//! Credential data file.
//!
//! The data file is a single JSON object mapping a website name to its
//! stored email and password:
//!
//! ```json
//! {
//!     "github": {
//!         "Email": "me@example.com",
//!         "Password": "hunter2"
//!     }
//! }
//! ```
//!
//! The whole document is read on every access and rewritten in full on
//! every save. A missing file is an empty store, not an error.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Email and password stored for one website.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "Password")]
    pub password: String,
}

/// The data file's top-level object, keyed by website name, in file order.
///
/// Entries stay raw JSON so that fields this tool does not know about, and
/// entries it could not decode, are written back untouched.
pub type Entries = Map<String, Value>;

/// Whether a save added a new website or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// Handle to the JSON data file on disk.
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry. A file that does not exist yet yields no entries.
    pub fn load(&self) -> Result<Entries> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "data file missing, starting empty");
                return Ok(Entries::new());
            }
            Err(e) => return Err(Error::io(&self.path, e)),
        };

        let entries: Entries = serde_json::from_str(&data).map_err(|e| self.json_error(e))?;
        debug!(path = %self.path.display(), entries = entries.len(), "loaded data file");
        Ok(entries)
    }

    /// Rewrite the whole file as JSON indented by four spaces.
    pub fn save(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        entries
            .serialize(&mut ser)
            .map_err(|e| self.json_error(e))?;

        fs::write(&self.path, buf).map_err(|e| Error::io(&self.path, e))?;
        debug!(path = %self.path.display(), entries = entries.len(), "saved data file");
        Ok(())
    }

    /// Insert or replace the credential for `website` and persist the file.
    ///
    /// Other entries are written back exactly as they were read. An existing
    /// website keeps its position in the file; a new one is appended.
    pub fn upsert(&self, website: &str, credential: Credential) -> Result<SaveOutcome> {
        let mut entries = self.load()?;
        let value = serde_json::to_value(credential).map_err(|e| self.json_error(e))?;
        let outcome = match entries.insert(website.to_string(), value) {
            Some(_) => SaveOutcome::Updated,
            None => SaveOutcome::Created,
        };
        self.save(&entries)?;
        info!(website, ?outcome, "stored credential");
        Ok(outcome)
    }

    /// Exact, case-sensitive lookup by website name.
    ///
    /// Only the returned entry has to carry `Email` and `Password`.
    pub fn lookup(&self, website: &str) -> Result<Option<Credential>> {
        let mut entries = self.load()?;
        entries
            .remove(website)
            .map(|value| serde_json::from_value(value).map_err(|e| self.json_error(e)))
            .transpose()
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    /// Stored website names in file order.
    pub fn names(&self) -> Result<Vec<String>> {
        Ok(self.load()?.into_iter().map(|(name, _)| name).collect())
    }

    fn json_error(&self, source: serde_json::Error) -> Error {
        Error::Json {
            path: self.path.clone(),
            source,
        }
    }
}
