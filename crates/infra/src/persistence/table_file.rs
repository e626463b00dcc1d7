// crates/infra/src/persistence/table_file.rs
use std::path::Path;

use bbcheck_domain::TableSpec;
use bbcheck_ports::tables::TableSource;
use bbcheck_shared_kernel::{InfraResult, InfrastructureError, Result};
use log::debug;

use super::FileReader;

/// Serialization formats accepted for table files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Json,
    Yaml,
}

impl TableFormat {
    /// Pick a format from the file extension (`.json`, `.yaml`, `.yml`).
    ///
    /// # Errors
    /// Returns [`InfrastructureError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> InfraResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(InfrastructureError::UnsupportedFormat { path: path.to_path_buf() }),
        }
    }

    /// Parse `content` in this format.
    ///
    /// # Errors
    /// Returns [`InfrastructureError::SerializationError`] on malformed input, or
    /// [`InfrastructureError::UnsupportedFormat`] for YAML without the `yaml` feature.
    pub fn parse(self, content: &str, path: &Path) -> InfraResult<TableSpec> {
        let spec = match self {
            Self::Json => serde_json::from_str(content)?,
            #[cfg(feature = "yaml")]
            Self::Yaml => serde_yaml::from_str(content)?,
            #[cfg(not(feature = "yaml"))]
            Self::Yaml => return Err(InfrastructureError::UnsupportedFormat { path: path.to_path_buf() }),
        };
        debug!("parsed {self:?} table from {}", path.display());
        Ok(spec)
    }
}

/// Reads [`TableSpec`]s from JSON or YAML files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTableSource;

impl TableSource for FileTableSource {
    fn load(&self, path: &Path) -> Result<TableSpec> {
        let format = TableFormat::from_path(path)?;
        let content = FileReader::read_to_string(path)?;
        Ok(format.parse(&content, path)?)
    }
}
