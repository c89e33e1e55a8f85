use crate::config::PackageDescriptor;
use crate::report::Reporter;
use crate::utils::resolve_within;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CleanSummary {
    pub removed_files: usize,
    pub removed_dirs: usize,
    pub failed: usize,
}

/// Removes the output file of every package, then any directories that removal left empty.
///
/// Only declared outputs inside `base_dir` are touched, and `base_dir` itself is never
/// removed. Missing files are skipped.
pub async fn clean_outputs<R>(
    packages: &[PackageDescriptor],
    base_dir: &Path,
    reporter: &mut R,
) -> CleanSummary
where
    R: Reporter + ?Sized,
{
    let mut summary = CleanSummary::default();
    reporter.begin_clean();

    for package in packages {
        if package.output.trim().is_empty() {
            continue;
        }
        let Some(output_path) = resolve_within(base_dir, &package.output) else {
            warn!(package = %package.name, output = %package.output, "Skipping output outside the base directory");
            continue;
        };

        match tokio::fs::symlink_metadata(&output_path).await {
            Ok(metadata) if metadata.is_dir() => {
                warn!(output = %output_path.display(), "Skipping output that is a directory");
                continue;
            }
            Ok(_) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(output = %output_path.display(), "Nothing to remove");
                continue;
            }
            Err(err) => {
                warn!(output = %output_path.display(), "Failed to inspect output: {}", err);
                summary.failed += 1;
                continue;
            }
        }

        if let Err(err) = tokio::fs::remove_file(&output_path).await {
            warn!(output = %output_path.display(), "Failed to remove output: {}", err);
            summary.failed += 1;
            continue;
        }
        reporter.removed(&package.output);
        summary.removed_files += 1;

        summary.removed_dirs += prune_empty_parents(&output_path, base_dir).await;
    }

    reporter.done();
    info!(
        removed_files = summary.removed_files,
        removed_dirs = summary.removed_dirs,
        "Cleanup finished"
    );
    summary
}

/// Removes empty ancestors of `path` up to, but excluding, `base_dir`.
async fn prune_empty_parents(path: &Path, base_dir: &Path) -> usize {
    let mut removed = 0;
    let mut current = path.parent();

    while let Some(dir) = current {
        if dir == base_dir || !dir.starts_with(base_dir) {
            break;
        }
        // fails for non-empty directories, which ends the walk
        if tokio::fs::remove_dir(dir).await.is_err() {
            break;
        }
        debug!(dir = %dir.display(), "Removed empty directory");
        removed += 1;
        current = dir.parent();
    }

    removed
}
