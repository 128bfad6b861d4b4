//! Shared application context built once from the CLI flags.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::store::Library;

pub struct AppContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;
        let format = cli
            .output_format
            .unwrap_or_else(|| OutputFormat::from_name(&config.output.format));
        Ok(Self { config, format })
    }

    /// The library to search: an explicit `--library` flag wins over the
    /// configured path.
    pub fn library(&self, override_path: Option<&PathBuf>) -> Library {
        let root = override_path.unwrap_or(&self.config.library.path);
        Library::open(root)
    }
}
