//! Loader configuration.
//!
//! Read from a YAML file; every field is optional:
//!
//! ```yaml
//! ontology: data/go-basic.obo
//! annotations: [data/122.R_norvegicus.goa]
//! relations: [is_a, part_of]
//! warn-unknown-terms: true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Relations loaded when none are configured.
pub const DEFAULT_RELATIONS: &[&str] = &["is_a", "part_of"];

/// Which files to load and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LoaderConfig {
    /// OBO ontology file.
    pub ontology: Option<PathBuf>,

    /// GAF annotation files, loaded in order.
    pub annotations: Vec<PathBuf>,

    /// Relation kinds that become ontology edges (`is_a` included).
    pub relations: Vec<String>,

    /// Log a warning for each annotation to an unknown term.
    pub warn_unknown_terms: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            ontology: None,
            annotations: Vec::new(),
            relations: DEFAULT_RELATIONS.iter().map(ToString::to_string).collect(),
            warn_unknown_terms: true,
        }
    }
}

impl LoaderConfig {
    /// Load and validate configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file cannot be read and
    /// [`Error::Config`] if it is not valid configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::open(path, e))?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on serialization failure and [`Error::Io`]
    /// if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check that relation names are usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an empty relation list or a relation
    /// name that is blank or contains whitespace.
    pub fn validate(&self) -> Result<()> {
        if self.relations.is_empty() {
            return Err(Error::Config(
                "at least one relation must be configured".to_string(),
            ));
        }
        if let Some(bad) = self
            .relations
            .iter()
            .find(|r| r.is_empty() || r.chars().any(char::is_whitespace))
        {
            return Err(Error::Config(format!("invalid relation name '{bad}'")));
        }
        Ok(())
    }

    /// The configured ontology file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no ontology file was given.
    pub fn ontology_path(&self) -> Result<&Path> {
        self.ontology
            .as_deref()
            .ok_or_else(|| Error::Config("no ontology file configured".to_string()))
    }
}
