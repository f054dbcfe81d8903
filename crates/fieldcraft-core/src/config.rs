use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::registry::DescriptorRegistry;
use crate::schema::RecordType;

/// File-level declaration of record types and their field descriptors.
///
/// ```toml
/// [[records]]
/// name = "Customer"
///
/// [[records.fields]]
/// name = "name"
/// descriptor = { max_length = 5, character_class = "letters", required = true }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RegistryConfig {
    #[serde(default)]
    pub records: Vec<RecordType>,
}

impl RegistryConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| Error::Config(err.to_string()))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|err| Error::Config(err.to_string()))
    }
}

impl DescriptorRegistry {
    pub fn from_config(config: RegistryConfig) -> Result<Self> {
        let mut registry = Self::new();
        for record in config.records {
            registry.register(record)?;
        }
        Ok(registry)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_config(RegistryConfig::from_toml_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_config(RegistryConfig::from_json_str(content)?)
    }

    /// Load a registry from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let content = std::fs::read_to_string(path)?;
        let config = match extension.as_deref() {
            Some("toml") => RegistryConfig::from_toml_str(&content)?,
            Some("json") => RegistryConfig::from_json_str(&content)?,
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "unsupported registry file extension: {}",
                    path.display()
                )));
            }
        };
        let registry = Self::from_config(config)?;
        info!(
            path = %path.display(),
            records = registry.records().count(),
            "descriptor registry loaded"
        );
        Ok(registry)
    }
}
