use std::path::PathBuf;
use thiserror::Error;

/// Why a single package could not be fetched. Never fatal to the batch.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Package descriptor is missing the `{field}` field")]
    InvalidDescriptor { field: &'static str },

    #[error("Output path {output} is not inside the base directory")]
    OutsideBaseDirectory { output: String },

    #[error("Failed to create directory {path}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid request URL {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request failed")]
    Network(#[from] reqwest::Error),

    #[error("Server answered {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome counts of one fetch run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub succeeded: usize,
    pub failed: usize,
    /// Names of the failed packages, in processing order
    pub failed_packages: Vec<String>,
}

impl ProcessSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}
