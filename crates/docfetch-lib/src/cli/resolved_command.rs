use crate::cli::args::{Command, PackageListSource};
use crate::cli::params::{CleanParams, FetchParams, ListParams};
use crate::config::{PackageDescriptor, load_packages};
use crate::error::DocFetchError;
use crate::fetch::FetchOptions;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Fetch(FetchParams),
    Clean(CleanParams),
    List(ListParams),
}

pub fn resolve_command(command: Command) -> Result<ResolvedCommand, DocFetchError> {
    match command {
        Command::Fetch {
            source,
            timeout_secs,
        } => {
            if timeout_secs == 0 {
                return Err(DocFetchError::CliArgumentValidation {
                    details: "timeout must be greater than 0.".to_string(),
                });
            }

            let (packages, base_dir) = load_with_base_dir(&source)?;
            Ok(ResolvedCommand::Fetch(FetchParams {
                packages,
                base_dir,
                options: FetchOptions::with_timeout(Duration::from_secs(timeout_secs)),
            }))
        }
        Command::Clean { source } => {
            let (packages, base_dir) = load_with_base_dir(&source)?;
            Ok(ResolvedCommand::Clean(CleanParams { packages, base_dir }))
        }
        Command::List { source } => {
            let packages = load_packages(Path::new(&source.config_path), source.parser)?;
            Ok(ResolvedCommand::List(ListParams { packages }))
        }
    }
}

fn load_with_base_dir(
    source: &PackageListSource,
) -> Result<(Vec<PackageDescriptor>, PathBuf), DocFetchError> {
    let config_path = Path::new(&source.config_path);
    let packages = load_packages(config_path, source.parser)?;
    let base_dir = resolve_base_dir(config_path, source.base_dir.as_deref())?;
    tracing::debug!(base_dir = %base_dir.display(), "Resolved base directory");
    Ok((packages, base_dir))
}

/// The explicit base directory if given, otherwise the directory holding the package list.
pub fn resolve_base_dir(
    config_path: &Path,
    base_dir: Option<&str>,
) -> Result<PathBuf, DocFetchError> {
    let base_dir = match base_dir {
        Some(base_dir) => PathBuf::from(base_dir),
        None => match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    };

    let resolved = std::fs::canonicalize(&base_dir).map_err(|e| DocFetchError::BaseDirectory {
        path: base_dir.clone(),
        reason: e.to_string(),
    })?;
    if !resolved.is_dir() {
        return Err(DocFetchError::BaseDirectory {
            path: base_dir,
            reason: "not a directory".to_string(),
        });
    }
    Ok(resolved)
}
