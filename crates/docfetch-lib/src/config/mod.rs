mod loader;
mod model;
mod scanner;

pub use loader::StructuredParser;
pub use model::{PackageDescriptor, PackageList};
pub use scanner::{LineScanParser, scan_packages};

use crate::error::DocFetchError;
use std::path::Path;

/// A strategy for turning a package list file into descriptors, in file order.
pub trait ConfigParser {
    fn name(&self) -> &'static str;

    fn parse(&self, path: &Path) -> Result<Vec<PackageDescriptor>, DocFetchError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ParserStrategy {
    /// Structured parser when the file format is recognised, line scan otherwise
    #[default]
    Auto,
    /// Always use the structured parser
    Structured,
    /// Always use the line scanner
    LineScan,
}

pub fn select_parser(strategy: ParserStrategy, path: &Path) -> Box<dyn ConfigParser> {
    match strategy {
        ParserStrategy::Structured => Box::new(StructuredParser),
        ParserStrategy::LineScan => Box::new(LineScanParser),
        ParserStrategy::Auto if StructuredParser::supports(path) => Box::new(StructuredParser),
        ParserStrategy::Auto => Box::new(LineScanParser),
    }
}

pub fn load_packages(
    config_path: &Path,
    strategy: ParserStrategy,
) -> Result<Vec<PackageDescriptor>, DocFetchError> {
    if !config_path.is_file() {
        return Err(DocFetchError::ConfigNotFound {
            path: config_path.to_path_buf(),
        });
    }

    let parser = select_parser(strategy, config_path);
    tracing::debug!(
        parser = parser.name(),
        path = %config_path.display(),
        "Reading package list"
    );

    let packages = parser.parse(config_path)?;
    tracing::info!("Loaded {} packages from {}", packages.len(), config_path.display());
    Ok(packages)
}
