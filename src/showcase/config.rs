use crate::commands::{MissingPolicy, ServiceOptions};
use crate::error::{Result, ShowcaseError};
use crate::ids::IdStrategy;
use crate::store::fs_backend::StorePaths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "showcase.json";
const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Configuration for showcase, read from `showcase.json`.
/// Every field is optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Directory holding `products.json` and `sections.json`
    pub data_dir: PathBuf,

    /// Directory served under `/static`
    pub static_dir: PathBuf,

    /// Address the HTTP server listens on
    pub bind: String,

    pub site_title: String,
    pub site_subtitle: String,

    /// How new record ids are picked: "count" or "high-water"
    pub id_strategy: IdStrategy,

    /// Report edits and deletes of unknown ids instead of ignoring them
    pub strict: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            static_dir: PathBuf::from("static"),
            bind: DEFAULT_BIND.to_string(),
            site_title: "Showcase".to_string(),
            site_subtitle: "Templates and tools, ready to use".to_string(),
            id_strategy: IdStrategy::default(),
            strict: false,
        }
    }
}

impl ShowcaseConfig {
    /// Load config from the given file, or return defaults if not found
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(ShowcaseError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| ShowcaseError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn store_paths(&self) -> StorePaths {
        StorePaths::in_dir(&self.data_dir)
    }

    pub fn service_options(&self) -> ServiceOptions {
        ServiceOptions::default()
            .with_id_strategy(self.id_strategy)
            .with_missing(MissingPolicy::from_strict(self.strict))
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|e| ShowcaseError::Config(format!("invalid bind address {:?}: {}", self.bind, e)))
    }
}
