//! Settings: an optional TOML file, overridden by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use zonewalk_route::{SearchConfig, Strategy};

/// Contents of a `zonewalk.toml` file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Zone definition file. Relative paths resolve against the config file's
    /// directory.
    pub zones: Option<PathBuf>,
    pub minimal: Option<bool>,
    pub max_height: Option<usize>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config = Self::parse(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        if let Some(zones) = config.zones.take() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            config.zones = Some(base.join(zones));
        }
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid zonewalk config")
    }
}

/// Values given on the command line. `None` and `false` defer to the file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub zones: Option<PathBuf>,
    pub minimal: bool,
    pub max_height: Option<usize>,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub zones: PathBuf,
    pub strategy: Strategy,
    pub search: SearchConfig,
}

impl Settings {
    pub fn resolve(file: FileConfig, flags: Overrides) -> Result<Self> {
        let Some(zones) = flags.zones.or(file.zones) else {
            bail!("no zone file given; pass --zones or set `zones` in the config file");
        };
        let minimal = flags.minimal || file.minimal.unwrap_or(false);
        let mut search = SearchConfig::default();
        if let Some(max_height) = flags.max_height.or(file.max_height) {
            search.max_height = max_height;
        }
        Ok(Self {
            zones,
            strategy: Strategy::from_minimal(minimal),
            search,
        })
    }
}
