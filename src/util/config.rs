//! Configuration file support.
//!
//! An optional `vaultgraph.toml` next to where the tool is run (or passed
//! explicitly with `--config`) adjusts naming and classification policy:
//!
//! ```toml
//! [naming]
//! delimiter = "-"
//! strip_prefix = "vendor/golang.org/"
//! extension = ".md"
//!
//! [classify]
//! tag_prefix = ["go", "pkg", "std"]
//! internal_markers = ["internal"]
//! core = ["fmt", "io", "os", "strings"]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::graph::{Classifier, NamingScheme};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "vaultgraph.toml";

/// Vaultgraph configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Note naming settings
    pub naming: NamingConfig,

    /// Classification policy
    pub classify: ClassifyConfig,
}

/// Note naming settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Replacement for `/` in note names
    pub delimiter: String,

    /// Organizational prefix removed from import paths
    pub strip_prefix: String,

    /// Note file extension
    pub extension: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        NamingConfig {
            delimiter: "-".to_string(),
            strip_prefix: "vendor/golang.org/".to_string(),
            extension: ".md".to_string(),
        }
    }
}

/// Classification policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Tag hierarchy prepended to every classification tag
    pub tag_prefix: Vec<String>,

    /// Substrings marking a package as internal
    pub internal_markers: Vec<String>,

    /// Packages tagged `core` instead of `specific`
    pub core: Vec<String>,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        ClassifyConfig {
            tag_prefix: crate::graph::classify::DEFAULT_TAG_PREFIX
                .iter()
                .map(|t| t.to_string())
                .collect(),
            internal_markers: crate::graph::classify::DEFAULT_INTERNAL_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            core: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicitly given path must exist; otherwise `vaultgraph.toml` in
    /// the working directory is used when present, defaults when not.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = Path::new(CONFIG_FILE);
                if !p.exists() {
                    return Ok(Config::default());
                }
                p.to_path_buf()
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Build the naming scheme this config describes.
    pub fn naming_scheme(&self) -> NamingScheme {
        NamingScheme::new(
            &self.naming.delimiter,
            &self.naming.strip_prefix,
            &self.naming.extension,
        )
    }

    /// Build the classifier this config describes.
    pub fn classifier(&self, naming: &NamingScheme) -> Classifier {
        Classifier::new(
            &self.classify.core,
            self.classify.internal_markers.clone(),
            self.classify.tag_prefix.clone(),
            naming,
        )
    }
}
