use super::{ConfigParser, PackageDescriptor, PackageList};
use crate::error::DocFetchError;
use config::{Config as ConfigBuilder, FileFormat};
use std::path::Path;

/// Schema-aware reader backed by the `config` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredParser;

impl StructuredParser {
    /// Capability probe: the structured formats this build can read, keyed by file extension.
    pub fn format_for(path: &Path) -> Option<FileFormat> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Some(FileFormat::Yaml),
            "toml" => Some(FileFormat::Toml),
            "json" => Some(FileFormat::Json),
            _ => None,
        }
    }

    pub fn supports(path: &Path) -> bool {
        Self::format_for(path).is_some()
    }
}

impl ConfigParser for StructuredParser {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn parse(&self, path: &Path) -> Result<Vec<PackageDescriptor>, DocFetchError> {
        let format = Self::format_for(path).unwrap_or(FileFormat::Yaml);
        let source = config::File::from(path).format(format).required(true);
        let config_builder = ConfigBuilder::builder().add_source(source).build()?;

        if let Err(config::ConfigError::NotFound(_)) = config_builder.get::<config::Value>("packages") {
            tracing::warn!(
                path = %path.display(),
                "Package list has no `packages` key, nothing to fetch"
            );
        }

        let package_list: PackageList = config_builder.try_deserialize()?;
        Ok(package_list.packages)
    }
}
