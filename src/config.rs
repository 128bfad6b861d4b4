use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EduSearchError, Result};
use crate::search::{SortBy, SortOrder};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load layered config: defaults, then the global file, then the
    /// project file, then `EDUSEARCH_*` environment overrides. An
    /// explicit path (flag or `EDUSEARCH_CONFIG`) replaces the file
    /// layers entirely.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("EDUSEARCH_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let path = dirs::config_dir()
            .ok_or_else(|| EduSearchError::MissingConfig("config directory not found".to_string()))?
            .join("edusearch/config.toml");
        Self::load_patch(&path)
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        let path = project_root.join("edusearch.toml");
        Self::load_patch(&path)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| EduSearchError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| EduSearchError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.library {
            self.library.merge(patch);
        }
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("EDUSEARCH_LIBRARY_PATH") {
            self.library.path = PathBuf::from(value);
        }
        if let Some(value) = env_usize("EDUSEARCH_SEARCH_DEFAULT_LIMIT")? {
            self.search.default_limit = value;
        }
        if let Some(value) = env_string("EDUSEARCH_SEARCH_DEFAULT_SORT") {
            self.search.default_sort = parse_sort_by(&value)?;
        }
        if let Some(value) = env_string("EDUSEARCH_SEARCH_DEFAULT_ORDER") {
            self.search.default_order = parse_sort_order(&value)?;
        }
        if let Some(value) = env_string("EDUSEARCH_OUTPUT_FORMAT") {
            self.output.format = value;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Root directory holding the collection JSON files.
    pub path: PathBuf,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("library"),
        }
    }
}

impl LibraryConfig {
    fn merge(&mut self, patch: LibraryPatch) {
        if let Some(path) = patch.path {
            self.path = path;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum results shown by the CLI (0 = unlimited).
    pub default_limit: usize,
    /// Sort key used when none is given on the command line.
    pub default_sort: SortBy,
    /// Sort polarity used when none is given on the command line.
    pub default_order: SortOrder,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: 20,
            default_sort: SortBy::Relevance,
            default_order: SortOrder::Descending,
        }
    }
}

impl SearchConfig {
    fn merge(&mut self, patch: SearchPatch) {
        if let Some(limit) = patch.default_limit {
            self.default_limit = limit;
        }
        if let Some(sort) = patch.default_sort {
            self.default_sort = sort;
        }
        if let Some(order) = patch.default_order {
            self.default_order = order;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format name (human, json, plain).
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(format) = patch.format {
            self.format = format;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    library: Option<LibraryPatch>,
    search: Option<SearchPatch>,
    output: Option<OutputPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct LibraryPatch {
    path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchPatch {
    default_limit: Option<usize>,
    default_sort: Option<SortBy>,
    default_order: Option<SortOrder>,
}

#[derive(Debug, Default, Deserialize)]
struct OutputPatch {
    format: Option<String>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match env_string(key) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| EduSearchError::Config(format!("{key} must be an integer, got {raw:?}"))),
    }
}

fn parse_sort_by(raw: &str) -> Result<SortBy> {
    match raw.to_lowercase().as_str() {
        "relevance" => Ok(SortBy::Relevance),
        "date" => Ok(SortBy::Date),
        "title" => Ok(SortBy::Title),
        "author" => Ok(SortBy::Author),
        _ => Err(EduSearchError::Config(format!(
            "invalid sort key {raw:?} (expected relevance, date, title or author)"
        ))),
    }
}

fn parse_sort_order(raw: &str) -> Result<SortOrder> {
    match raw.to_lowercase().as_str() {
        "ascending" | "asc" => Ok(SortOrder::Ascending),
        "descending" | "desc" => Ok(SortOrder::Descending),
        _ => Err(EduSearchError::Config(format!(
            "invalid sort order {raw:?} (expected ascending or descending)"
        ))),
    }
}
