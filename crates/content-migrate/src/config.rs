//! Migration run configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MigrateError, Result};
use crate::slug::SlugOptions;
use crate::store::EnvCapabilities;

/// Configuration for one migration run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MigrationConfig {
    /// Destination environment capabilities.
    #[serde(default)]
    pub environment: EnvironmentConfig,

    /// Slug generator settings.
    #[serde(default)]
    pub slug: SlugConfig,
}

/// Destination environment settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Address sections/volumes/groups/sets by opaque unique id instead of
    /// sequential id.
    #[serde(default)]
    pub addresses_by_uid: bool,
}

/// Slug generator settings, deserialized counterpart of [`SlugOptions`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlugConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Maximum slug length in characters; unbounded when absent.
    #[serde(default)]
    pub limit: Option<usize>,

    #[serde(default = "default_true")]
    pub lowercase: bool,

    #[serde(default = "default_true")]
    pub transliterate: bool,

    /// Ordered pattern -> replacement rules applied before transliteration.
    #[serde(default)]
    pub replacements: Vec<ReplacementRule>,
}

/// One custom replacement rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplacementRule {
    pub pattern: String,
    pub replace: String,
}

fn default_delimiter() -> String {
    "-".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            limit: None,
            lowercase: true,
            transliterate: true,
            replacements: Vec::new(),
        }
    }
}

impl MigrationConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: MigrationConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.slug.delimiter.chars().count() != 1 {
            return Err(MigrateError::Config(format!(
                "slug.delimiter must be a single character, got {:?}",
                self.slug.delimiter
            )));
        }
        if self.slug.limit == Some(0) {
            return Err(MigrateError::Config(
                "slug.limit must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Environment capability flag, resolved once for the run.
    pub fn capabilities(&self) -> EnvCapabilities {
        EnvCapabilities {
            addresses_by_uid: self.environment.addresses_by_uid,
        }
    }

    /// Slug options for this run.
    pub fn slug_options(&self) -> SlugOptions {
        SlugOptions {
            delimiter: self.slug.delimiter.chars().next().unwrap_or('-'),
            limit: self.slug.limit,
            lowercase: self.slug.lowercase,
            transliterate: self.slug.transliterate,
            replacements: self
                .slug
                .replacements
                .iter()
                .map(|r| (r.pattern.clone(), r.replace.clone()))
                .collect(),
        }
    }
}
