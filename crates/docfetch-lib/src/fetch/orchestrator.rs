use super::request::parse_request_url;
use super::{Fetch, FetchError, ProcessSummary};
use crate::config::PackageDescriptor;
use crate::report::Reporter;
use crate::utils::resolve_within;
use std::path::Path;
use tracing::{info, warn};

/// Fetches every package in order, one at a time.
///
/// A failing package is reported and skipped; it never stops the remaining packages. Existing
/// files are only replaced once a complete response body has been received.
pub async fn fetch_all<F, R>(
    packages: &[PackageDescriptor],
    base_dir: &Path,
    fetcher: &F,
    reporter: &mut R,
) -> ProcessSummary
where
    F: Fetch,
    R: Reporter + ?Sized,
{
    let mut summary = ProcessSummary::default();
    reporter.begin_fetch();

    for package in packages {
        // announced before validation so every descriptor yields a `Fetching:` line
        reporter.fetching(&package.name);

        match fetch_one(package, base_dir, fetcher).await {
            Ok(()) => {
                reporter.fetched(&package.output);
                summary.succeeded += 1;
            }
            Err(err) => {
                warn!(
                    package = %package.name,
                    "Fetch failed: {:#}",
                    eyre::Report::new(err)
                );
                reporter.failed(&package.name);
                summary.failed += 1;
                summary.failed_packages.push(package.name.clone());
            }
        }
    }

    reporter.done();
    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Processed {} packages",
        summary.total()
    );
    summary
}

async fn fetch_one<F: Fetch>(
    package: &PackageDescriptor,
    base_dir: &Path,
    fetcher: &F,
) -> Result<(), FetchError> {
    if let Some(field) = package.missing_field() {
        return Err(FetchError::InvalidDescriptor { field });
    }

    let output_path =
        resolve_within(base_dir, &package.output).ok_or_else(|| FetchError::OutsideBaseDirectory {
            output: package.output.clone(),
        })?;

    // Ensure parent directory exists
    if let Some(parent) = output_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| FetchError::DirectoryCreation {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let url = parse_request_url(&package.source, &package.tokens)?;
    tracing::debug!(package = %package.name, url = %url, output = %output_path.display(), "Downloading");

    let body = fetcher.fetch(&url).await?;

    tokio::fs::write(&output_path, &body)
        .await
        .map_err(|source| FetchError::Write {
            path: output_path.clone(),
            source,
        })?;
    tracing::debug!(
        package = %package.name,
        output = %output_path.display(),
        bytes = body.len(),
        "Downloaded"
    );
    Ok(())
}
