pub mod clean;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod report;
pub mod utils;

pub use config::PackageDescriptor;
pub use error::DocFetchError;
