//! JSON-backed library store.
//!
//! Each collaborator collection lives in one well-known JSON file under
//! the library root. A missing file is an empty collection, not an
//! error; the engine's contract is that absent collaborators simply
//! contribute zero results.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{EduSearchError, Result};
use crate::search::SourceCollections;

/// Collection file names under the library root.
const CONTENT_FILE: &str = "content.json";
const SCHEMES_FILE: &str = "schemes.json";
const WEEKLY_PLANS_FILE: &str = "weekly-plans.json";
const FILES_FILE: &str = "files.json";
const LESSONS_FILE: &str = "lessons.json";
const QUIZZES_FILE: &str = "quizzes.json";

/// A library directory holding the collaborator collections.
#[derive(Debug, Clone)]
pub struct Library {
    root: PathBuf,
}

impl Library {
    /// Open a library at the given root. The directory does not need to
    /// exist; loading an absent library yields empty collections.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load a snapshot of every collection.
    pub fn load(&self) -> Result<SourceCollections> {
        let collections = SourceCollections {
            content: self.load_collection(CONTENT_FILE)?,
            schemes: self.load_collection(SCHEMES_FILE)?,
            weekly_plans: self.load_collection(WEEKLY_PLANS_FILE)?,
            files: self.load_collection(FILES_FILE)?,
            lessons: self.load_collection(LESSONS_FILE)?,
            quizzes: self.load_collection(QUIZZES_FILE)?,
        };
        debug!(
            root = %self.root.display(),
            records = collections.len(),
            "library loaded"
        );
        Ok(collections)
    }

    fn load_collection<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>> {
        let path = self.root.join(file_name);
        if !path.exists() {
            debug!(path = %path.display(), "collection file absent, treating as empty");
            return Ok(Vec::new());
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|err| EduSearchError::Library(format!("read {}: {err}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|err| EduSearchError::Library(format!("parse {}: {err}", path.display())))
    }
}
